//! Composition root.
//!
//! Linear one-time initialization: load configuration, connect the database
//! pool, construct the process-scope mapper singleton, then start the HTTP
//! server. Repositories and services are not registered anywhere global;
//! route handlers construct them per request from the shared pool.

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use herodex::auth::AuthMiddleware;
use herodex::config::Config;
use herodex::mapping::Mapper;
use herodex::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // Fail fast: no listener is bound unless configuration and the database
    // connection are good.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match PgPool::connect(&config.database.connection_string).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let mapper = web::Data::new(Mapper::new());
    let auth_settings = web::Data::new(config.authentication.clone());

    log::info!("starting herodex server at {}", config.server_url());

    let secret = config.authentication.secret.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(mapper.clone())
            .app_data(auth_settings.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            // health stays outside the authenticated scope
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware::new(secret.clone()))
                    .configure(routes::config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
