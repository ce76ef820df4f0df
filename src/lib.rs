pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;

use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

use crate::auth::AuthSettings;
use crate::errors::AppError;
use crate::store::EmployeeStore;

/// `Authorization` is only advertised when the bearer-token gate is on.
pub fn cors_headers(origin: &str, require_token: bool) -> DefaultHeaders {
    let allowed_headers = if require_token {
        "Content-Type, Authorization"
    } else {
        "Content-Type"
    };
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", origin.to_string()))
        .add(("Access-Control-Allow-Methods", "POST, GET, PUT, DELETE, OPTIONS"))
        .add(("Access-Control-Allow-Headers", allowed_headers))
}

/// Registers shared state and the route table. Used by the server binary and
/// by the HTTP tests alike.
pub fn configure(
    store: web::Data<dyn EmployeeStore>,
    settings: web::Data<AuthSettings>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(store)
            .app_data(settings)
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
            )
            .app_data(web::QueryConfig::default().error_handler(|_err, _req| {
                AppError::BadRequest("Invalid ID".to_string()).into()
            }))
            .service(
                web::resource("/login")
                    .route(web::post().to(handlers::auth::login_handler))
                    .route(web::method(Method::OPTIONS).to(handlers::employee::preflight)),
            )
            .service(
                web::resource("/index")
                    .route(web::get().to(handlers::employee::get_employees))
                    .route(web::method(Method::OPTIONS).to(handlers::employee::preflight)),
            )
            .service(
                web::resource("/index/create")
                    .route(web::post().to(handlers::employee::create_employee))
                    .route(web::method(Method::OPTIONS).to(handlers::employee::preflight)),
            )
            .service(
                web::resource("/index/detail")
                    .route(web::get().to(handlers::employee::get_employee))
                    .route(web::method(Method::OPTIONS).to(handlers::employee::preflight)),
            )
            .service(
                web::resource("/index/update")
                    .route(web::put().to(handlers::employee::update_employee))
                    .route(web::method(Method::OPTIONS).to(handlers::employee::preflight)),
            )
            .service(
                web::resource("/index/delete")
                    .route(web::delete().to(handlers::employee::delete_employee))
                    .route(web::method(Method::OPTIONS).to(handlers::employee::preflight)),
            );
    }
}
