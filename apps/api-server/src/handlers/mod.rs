//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Author routes
            .service(
                web::scope("/authors")
                    .route("", web::post().to(authors::create))
                    .route("/{id}", web::get().to(authors::get))
                    .route("/{id}", web::put().to(authors::update))
                    .route("/{id}", web::delete().to(authors::delete)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::list))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            ),
    );
}
