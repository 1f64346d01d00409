use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use app_api::handlers;
use biz_service::biz_service::{AuthService, MemoryNavigationStore, MongoNavigationStore, NavigationService, NavigationStore};
use common::config::{AppConfig, SysConfig};
use common::db::init_db;
use log::{LevelFilter, info, warn};
use std::str::FromStr;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 读取配置文件
    let file = std::env::args().nth(1).unwrap_or_else(|| "api-config.toml".to_string());
    AppConfig::init(&file)?;
    let app_cfg = AppConfig::get();
    //初始化日志
    init_log(&app_cfg.get_sys());

    let db_cfg = app_cfg.get_database();
    let store: Arc<dyn NavigationStore> = if db_cfg.in_memory {
        warn!("database.in_memory is set, navigation configs will not survive a restart");
        Arc::new(MemoryNavigationStore::new())
    } else {
        let db = init_db(&db_cfg).await?;
        info!("using mongodb {} / {}", db_cfg.url, db_cfg.db_name);
        Arc::new(MongoNavigationStore::new(db))
    };
    let navigation = web::Data::new(NavigationService::new(store));
    let auth = web::Data::new(AuthService::new(&app_cfg.get_auth()));

    let address_and_port = format!("{}:{}", &app_cfg.get_server().host, &app_cfg.get_server().port);
    info!("Starting server on {}", address_and_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(navigation.clone())
            .app_data(auth.clone())
            // 配置 控制器
            .configure(handlers::configure)
    })
    .keep_alive(actix_web::http::KeepAlive::Timeout(std::time::Duration::from_secs(600))) // 允许 10 分钟超时
    .bind(address_and_port)?
    .run()
    .await?;
    Ok(())
}

fn init_log(sys: &SysConfig) {
    let level = LevelFilter::from_str(&sys.log_level).unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
