use crate::{
    api::{attendance, users},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{Responder, get, web};

#[get("/")]
pub async fn index() -> impl Responder {
    "Geolocation Attendance Backend is running!"
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    cfg.service(index);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(build_limiter(config.rate_api_per_min))
            .service(
                web::resource("/mark_attendance")
                    .route(web::post().to(attendance::mark_attendance)),
            )
            .service(
                web::resource("/user_attendance/{user_id}")
                    .route(web::get().to(attendance::user_attendance)),
            )
            .service(web::resource("/users").route(web::get().to(users::list_users))),
    );
}
