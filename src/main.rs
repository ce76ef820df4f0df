use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use employee_records_backend::auth::AuthSettings;
use employee_records_backend::config::{Backend, Config};
use employee_records_backend::store::{EmployeeStore, MemoryStore, PgStore};
use employee_records_backend::{configure, cors_headers, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn EmployeeStore> = match &config.backend {
        Backend::Memory => {
            info!("Using in-memory employee store");
            Arc::new(MemoryStore::new())
        }
        Backend::Postgres { database_url, max_connections } => {
            match db::create_pool(database_url, *max_connections).await {
                Ok(pool) => {
                    info!("Successfully connected to PostgreSQL database");
                    Arc::new(PgStore::new(pool))
                }
                Err(err) => {
                    error!("Failed to connect to database: {}", err);
                    std::process::exit(1);
                }
            }
        }
    };

    let store = web::Data::from(store);
    let settings = web::Data::new(AuthSettings {
        jwt_secret: config.jwt_secret.clone(),
        require_token: config.require_token,
    });
    let cors_origin = config.cors_origin.clone();
    let require_token = config.require_token;

    info!("Starting server at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_headers(&cors_origin, require_token))
            .wrap(middleware::Logger::default())
            .configure(configure(store.clone(), settings.clone()))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
