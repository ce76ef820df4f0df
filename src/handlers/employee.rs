use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::{authorize, AuthSettings};
use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::store::EmployeeStore;
use crate::utils::validation::{parse_id, QueryPairs};

pub async fn get_employees(
    req: HttpRequest,
    store: web::Data<dyn EmployeeStore>,
    settings: web::Data<AuthSettings>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &settings)?;

    let employees = store.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    req: HttpRequest,
    store: web::Data<dyn EmployeeStore>,
    settings: web::Data<AuthSettings>,
    new_employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &settings)?;

    let created = store.create(new_employee.into_inner()).await?;
    log::info!("created employee {}", created.id);
    Ok(HttpResponse::Created().json(created))
}

pub async fn get_employee(
    req: HttpRequest,
    store: web::Data<dyn EmployeeStore>,
    settings: web::Data<AuthSettings>,
    query: web::Query<QueryPairs>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &settings)?;
    let id = parse_id(&query)?;

    let employee = store.get(id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    req: HttpRequest,
    store: web::Data<dyn EmployeeStore>,
    settings: web::Data<AuthSettings>,
    query: web::Query<QueryPairs>,
    updated: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &settings)?;
    let id = parse_id(&query)?;

    let employee = store.replace(id, updated.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    req: HttpRequest,
    store: web::Data<dyn EmployeeStore>,
    settings: web::Data<AuthSettings>,
    query: web::Query<QueryPairs>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &settings)?;
    let id = parse_id(&query)?;

    store.delete(id).await?;
    log::info!("deleted employee {}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// CORS preflight: answered on every route with 200 and no body.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
