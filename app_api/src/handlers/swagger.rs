use crate::handlers::common_handler::*;
use crate::handlers::navigation_handler::*;
use crate::result::{ErrorBody, NavigationResponse, StatusBody};
use actix_web::{HttpResponse, Responder, get, web};
use biz_service::entitys::nav_entity::{ItemIcon, ItemTone, MegaMenu, MenuGroup, MenuItem, NavConfig, PrimaryLink};
use common::errors::AppError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        status,
        //导航-配置
        navigation_get,
        navigation_put,
    ),
    components(schemas(
        NavigationResponse,
        ErrorBody,
        StatusBody,
        NavConfig,
        PrimaryLink,
        MegaMenu,
        MenuGroup,
        MenuItem,
        ItemIcon,
        ItemTone,
    )),
    tags(
        (name = "Navigation", description = "Navigation config store")
    )
)]
struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[get("/api-doc/openapi.json")]
async fn openapi_json() -> Result<impl Responder, AppError> {
    let doc = ApiDoc::openapi().to_json().map_err(AppError::Json)?;
    Ok(HttpResponse::Ok().content_type("application/json").body(doc))
}
