pub mod config;
pub mod error;
pub mod logs;
pub mod security;

pub use config::Config;
pub use error::{to_anyhow, Error, JsonResult, Result};
