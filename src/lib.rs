//! Calculator microservice.
//!
//! Exposes arithmetic operations (add, subtract, multiply, divide, exponent,
//! square root, modulo) as query-parameter-driven `GET` endpoints returning
//! JSON. Stateless: every request is classified by a pure validator and
//! either computed or rejected with HTTP 400 and a human-readable message.
//!
//! Diagnostics go through `tracing`; the binary installs a subscriber that
//! splits records three ways (console, error-only file, everything-else
//! file). The library never installs a global subscriber, so tests can
//! inject a capturing one via `tracing::subscriber::with_default`.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;
pub mod validation;

pub use config::ServerConfig;
pub use error::{AppError, ErrorResponse, Result};
pub use server::{create_app, run_server};
pub use validation::{Operand, Operation, ValidationError, validate};
