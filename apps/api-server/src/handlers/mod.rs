//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::extractor_error;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Unparsable bodies, paths and queries answer like any other validation failure
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| extractor_error(err, req)));
    cfg.app_data(web::PathConfig::default().error_handler(|err, req| extractor_error(err, req)));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, req| extractor_error(err, req)));

    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/v1")
                    .service(
                        web::resource("/users")
                            .route(web::get().to(users::find_all))
                            .route(web::post().to(users::create)),
                    )
                    .service(
                        web::resource("/posts")
                            .route(web::get().to(posts::find))
                            .route(web::post().to(posts::create)),
                    )
                    .service(
                        web::resource("/posts/{id}")
                            .route(web::get().to(posts::find_by_id))
                            .route(web::put().to(posts::update_by_id)),
                    ),
            ),
    );
}
