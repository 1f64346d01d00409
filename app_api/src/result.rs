use biz_service::entitys::nav_entity::NavConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `GET`/`PUT /navigation` 的响应体，未保存过的名称返回 `config: null`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    #[schema(example = "main")]
    pub name: String,
    pub config: Option<NavConfig>,
}

/// 错误响应体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusBody {
    #[schema(example = "ok")]
    pub status: String,
}

pub fn result() -> StatusBody {
    StatusBody { status: "ok".to_string() }
}
