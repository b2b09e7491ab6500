use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::services::employee::EmployeeService;

/// Registers the employee routes. Shared between `main` and the HTTP tests
/// so both run the exact same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/employees")
            .route(web::post().to(create_employee))
            .route(web::get().to(list_employees)),
    )
    .service(
        web::resource("/api/employees/{id}")
            .route(web::get().to(get_employee))
            .route(web::put().to(update_employee))
            .route(web::delete().to(delete_employee)),
    );
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let created = service.create_employee(employee.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    match service.get_employee(id.into_inner()).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let updated = service
        .update_employee(id.into_inner(), employee.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_employee(id.into_inner()).await?;
    Ok(HttpResponse::Ok().body("Employee deleted successfully"))
}
