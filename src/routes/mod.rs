//! HTTP routes.
//!
//! - `GET /add`, `/sub`, `/mul`, `/div`, `/exp`, `/mod` - binary arithmetic
//!   over `num1` and `num2` query parameters
//! - `GET /sqrt` - unary, reads `num1` only
//! - `GET /health` - liveness check
//!
//! Success is `200 {"result": <number>}`; every rejection is
//! `400 {"message": <string>}`. The core produces no other status codes.

use axum::{Router, routing::get};

pub mod arithmetic;
pub mod health;

/// Assemble all endpoints into a single router.
pub fn create_router() -> Router {
    Router::new()
        .route("/add", get(arithmetic::add))
        .route("/sub", get(arithmetic::sub))
        .route("/mul", get(arithmetic::mul))
        .route("/div", get(arithmetic::div))
        .route("/exp", get(arithmetic::exp))
        .route("/sqrt", get(arithmetic::sqrt))
        .route("/mod", get(arithmetic::modulo))
        .route("/health", get(health::health_check))
}
