// Route exports
pub mod trips;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(trips::service_info)).service(
        web::scope("/api/v1")
            .configure(trips::configure),
    );
}
