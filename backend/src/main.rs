mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_warning = config::load_dotenv();
    env_logger::init_from_env(Env::default().default_filter_or(config::log_filter()));
    if let Some(message) = dotenv_warning {
        warn!("{}", message);
    }

    let config = ServerConfig::from_env();
    let json_limit = config.json_limit;

    info!("Parameter service running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .service(services::parameters::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
