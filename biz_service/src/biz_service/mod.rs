pub mod auth_service;
pub mod cache_service;
pub mod navigation_service;

pub use auth_service::{AuthService, Role};
pub use navigation_service::{MemoryNavigationStore, MongoNavigationStore, NavigationService, NavigationStore};
