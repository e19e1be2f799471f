//! Runs untrusted source code inside a throwaway, resource-capped container
//! and reports back stdout/stderr, exit code, and wall-clock duration.

pub mod bollard_engine;
pub mod engine;
pub mod executor;
pub mod recipe;
pub mod result;

pub use bollard_engine::{sweep_stray_containers, BollardEngine};
pub use engine::{ContainerEngine, RunSpec};
pub use executor::{Executor, CONTAINER_NAME_PREFIX};
pub use recipe::{network_disabled, recipe_for, Recipe};
pub use result::{ErrorKind, RunResult};
