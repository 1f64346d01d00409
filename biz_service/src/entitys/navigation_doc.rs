use crate::entitys::nav_entity::NavConfig;
use serde::{Deserialize, Serialize};

/// `navigation_config` 集合中的一条记录，按名称整体覆盖
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub config: NavConfig,
    pub update_time: i64,
}

impl NavigationDoc {
    pub fn new(name: &str, config: NavConfig, update_time: i64) -> Self {
        Self { id: name.to_string(), name: name.to_string(), config, update_time }
    }
}
