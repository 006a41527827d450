use actix_web::web;
use serde::Serialize;

pub mod items;

#[derive(Debug, Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

async fn index() -> web::Json<WelcomeResponse> {
    web::Json(WelcomeResponse {
        message: "Welcome to the FastAPI project!",
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .configure(crate::health::configure_routes)
        .configure(items::configure_routes);
}
