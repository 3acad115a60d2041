use crate::{
    api::{attendance, billing, employee, payroll, product},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter config
    fn build_limiter(requests_per_min: u32) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap()
    }

    let api_limiter = build_limiter(config.rate_api_per_min);
    let billing_limiter = build_limiter(config.rate_billing_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/employees")
                    .wrap(Governor::new(&api_limiter))
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{id}/attendance
                    .service(
                        web::resource("/{id}/attendance")
                            .route(web::put().to(attendance::update_attendance)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/payroll")
                    .wrap(Governor::new(&api_limiter))
                    // /payroll
                    .service(web::resource("").route(web::get().to(payroll::payroll_report)))
                    // /payroll/{id}
                    .service(web::resource("/{id}").route(web::get().to(payroll::employee_payroll))),
            )
            .service(
                web::scope("/products")
                    .wrap(Governor::new(&api_limiter))
                    .service(
                        web::resource("")
                            .route(web::get().to(product::list_products))
                            .route(web::post().to(product::create_product)),
                    )
                    // register before /{id} so "stats" never parses as an id
                    .service(web::resource("/stats").route(web::get().to(product::catalog_stats)))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(product::get_product))
                            .route(web::put().to(product::update_product))
                            .route(web::delete().to(product::delete_product)),
                    ),
            )
            .service(
                web::scope("/bills")
                    .wrap(Governor::new(&billing_limiter))
                    .service(
                        web::resource("")
                            .route(web::get().to(billing::list_bills))
                            .route(web::post().to(billing::create_bill)),
                    ),
            )
            .service(
                web::resource("/notifications")
                    .route(web::get().to(attendance::current_notification)),
            ),
    );
}
