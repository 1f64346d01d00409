use crate::result::{ErrorBody, NavigationResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpRequest, Responder, get, put, web};
use biz_service::biz_service::{AuthService, NavigationService};
use common::DEFAULT_CONFIG_NAME;
use common::errors::AppError;
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(navigation_get).service(navigation_put);
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// 配置槽位名称，默认 `main`
    pub name: Option<String>,
}

impl NameQuery {
    fn config_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_CONFIG_NAME.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/navigation",
    tag = "Navigation",
    summary = "Load a navigation config by name",
    params(NameQuery),
    responses(
        (status = 200, description = "Stored config, or null when none is stored", body = NavigationResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
#[get("/navigation")]
pub async fn navigation_get(
    query: web::Query<NameQuery>,
    service: web::Data<NavigationService>,
) -> Result<impl Responder, AppError> {
    let name = query.config_name();
    let config = service.get_config(&name).await?;
    Ok(web::Json(NavigationResponse { name, config }))
}

#[utoipa::path(
    put,
    path = "/navigation",
    tag = "Navigation",
    summary = "Replace a navigation config",
    params(
        NameQuery,
        ("Authorization" = String, Header, description = "Bearer token of an admin")
    ),
    request_body = biz_service::entitys::nav_entity::NavConfig,
    responses(
        (status = 200, description = "Config stored", body = NavigationResponse),
        (status = 400, description = "Config failed validation", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Caller is not an admin", body = ErrorBody)
    )
)]
#[put("/navigation")]
pub async fn navigation_put(
    req: HttpRequest,
    query: web::Query<NameQuery>,
    body: web::Bytes,
    service: web::Data<NavigationService>,
    auth: web::Data<AuthService>,
) -> Result<impl Responder, AppError> {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    auth.require_admin(header)?;

    let raw: Value = serde_json::from_slice(&body).map_err(|e| AppError::Validation(e.to_string()))?;
    let name = query.config_name();
    let config = service.save_config(&name, &raw).await?;
    Ok(web::Json(NavigationResponse { name, config: Some(config) }))
}
