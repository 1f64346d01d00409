pub mod default_config;
pub mod schema;

pub use default_config::default_nav_config;
pub use schema::{validate, validate_config, validate_str, SchemaError};
