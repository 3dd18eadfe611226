use std::env;

use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use diesel::r2d2::ConnectionManager;
use diesel::PgConnection;
use dotenvy::dotenv;
use env_logger::Env;
use r2d2::Pool;

mod actors;
mod db;
mod error;
mod model;
mod movies;
mod schema;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set.");
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .expect("Failed to create pool.");

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting catalog API on 127.0.0.1:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .service(health)
            .service(actors::get_all)
            .service(actors::post)
            // the literal /actors/filmography routes go before /actors/{id}
            .service(actors::get_filmography_entry)
            .service(actors::post_filmography)
            .service(actors::remove_filmography)
            .service(actors::get)
            .service(actors::put)
            .service(actors::remove)
            .service(actors::get_filmography)
            .service(actors::get_movies_count_by_genre)
            .service(movies::get_all)
            .service(movies::post)
            .service(movies::get)
            .service(movies::put)
            .service(movies::remove)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    #[actix_web::test]
    async fn health_returns_ok() {
        let app = test::init_service(App::new().service(super::health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }
}
