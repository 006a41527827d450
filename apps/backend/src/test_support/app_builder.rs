//! Test service builder: given an AppState, build an initialized Actix test
//! service wired exactly like the production app (routes, middleware, JSON
//! error handling).

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error as ActixError};

use crate::error::json_error_handler;
use crate::middleware::request_trace::RequestTrace;
use crate::middleware::structured_logger::StructuredLogger;
use crate::state::app_state::AppState;

/// Build and initialize the Actix test service.
///
/// Return type is `impl Service<...>` so callers don't have to name the
/// opaque service type.
pub async fn create_test_app(
    data: web::Data<AppState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let app = App::new()
        .wrap(StructuredLogger)
        .wrap(RequestTrace)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(data)
        .configure(crate::routes::configure);

    test::init_service(app).await
}
