pub mod auth;
pub mod types;

pub use auth::*;
pub use types::*;
