mod common_handler;
mod navigation_handler;
mod swagger;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    common_handler::configure(cfg);
    navigation_handler::configure(cfg);
    swagger::configure(cfg);
}
