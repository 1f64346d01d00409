pub mod config;
pub mod db;
pub mod errors;
pub mod repository;
pub mod util;

pub use repository::*;

/// 未指定名称时使用的导航配置槽位
pub const DEFAULT_CONFIG_NAME: &str = "main";
