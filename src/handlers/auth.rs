use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::auth::{self, AuthSettings};
use crate::errors::AppError;
use crate::models::auth::LoginRequest;
use crate::store::EmployeeStore;

pub async fn login_handler(
    req: web::Json<LoginRequest>,
    store: web::Data<dyn EmployeeStore>,
    settings: web::Data<AuthSettings>,
) -> Result<HttpResponse, AppError> {
    let response = auth::login(store.get_ref(), &settings.jwt_secret, &req, Utc::now()).await?;
    Ok(HttpResponse::Ok().json(response))
}
