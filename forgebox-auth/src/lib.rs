pub mod extractor;
pub mod jwt;
pub mod password;

pub use extractor::Authed;
pub use jwt::{decode_token, encode_token, Claims};
pub use password::{hash_password, verify_password};
