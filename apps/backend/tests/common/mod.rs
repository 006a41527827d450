#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{web, Error as ActixError};
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::test_support::create_test_app;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend::test_support::logging::init();
}

/// Build a test service against a fresh in-memory store with the schema
/// already ensured.
pub async fn spawn_test_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let state = build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .expect("build test app state");

    create_test_app(web::Data::new(state)).await
}
