use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use employee_service::db;
use employee_service::handlers;
use employee_service::repository::PgEmployeeRepository;
use employee_service::services::employee::EmployeeService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool and bring the schema up to date
    let pool = db::create_pool().await;
    db::run_migrations(&pool).await;

    // The storage interface is chosen once here; handlers only see the service
    let repository = Arc::new(PgEmployeeRepository::new(pool));
    let service = web::Data::new(EmployeeService::new(repository));

    info!("Starting server at 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .configure(handlers::employee::configure)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
