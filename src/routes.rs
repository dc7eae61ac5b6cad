use crate::{
    api::{self, employee, manager},
    auth::{handlers, middleware::{redirect, session_guard}},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, middleware::from_fn, web};
use std::sync::Arc;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = 60_000 / requests_per_min as u64;
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("period and burst size are non-zero");
    Governor::new(&cfg)
}

async fn index() -> HttpResponse {
    redirect(handlers::DASHBOARD_PATH)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Public routes
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(
            web::resource("/login")
                .wrap(login_limiter.clone())
                .route(web::post().to(handlers::login)),
        )
        .service(
            web::resource("/register")
                .wrap(register_limiter)
                .route(web::post().to(handlers::register)),
        )
        .service(
            web::resource("/logout")
                .wrap(login_limiter)
                .route(web::post().to(handlers::logout)),
        );

    // Protected routes
    cfg.service(
        web::scope("/dashboard")
            .wrap(from_fn(session_guard))
            .wrap(protected_limiter)
            // /dashboard
            .service(web::resource("").route(web::get().to(api::dashboard)))
            // /dashboard/employee
            .service(web::resource("/employee").route(web::get().to(employee::employee_dashboard)))
            .service(
                web::scope("/manager")
                    // /dashboard/manager
                    .service(web::resource("").route(web::get().to(manager::manager_dashboard)))
                    // /dashboard/manager/employees/{id}
                    .service(
                        web::resource("/employees/{id}")
                            .route(web::get().to(manager::employee_detail)),
                    )
                    // /dashboard/manager/schedules
                    .service(
                        web::resource("/schedules")
                            .route(web::post().to(manager::create_schedule)),
                    ),
            ),
    );
}
