//! The seven arithmetic endpoints.
//!
//! Each handler is a thin wrapper over [`evaluate`]: parse the query text
//! into operands, run the shared validator, then either compute with plain
//! `f64` semantics or translate the rejection into HTTP 400. Parameters are
//! taken as raw text because two validation rules inspect the text itself,
//! not the parsed number.

use axum::{extract::Query, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::logging::SERVICE;
use crate::validation::{Operand, Operation, validate};

/// Raw query parameters. Absent and unparseable values both flow into the
/// validator's NotANumber path; there is no separate missing-parameter
/// error.
#[derive(Debug, Deserialize)]
pub struct RawParams {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

/// Wire shape of every success response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: f64,
}

fn evaluate(op: Operation, params: &RawParams) -> Result<Json<ResultResponse>> {
    let a = Operand::from_param(params.num1.as_deref());
    let b = match op {
        Operation::SquareRoot => Operand::placeholder(),
        _ => Operand::from_param(params.num2.as_deref()),
    };

    validate(op, &a, &b)?;

    let result = op.apply(a.value, b.value);
    info!(
        service = SERVICE,
        operation = %op,
        num1 = a.value,
        num2 = b.value,
        result = result,
        "computed {op}"
    );
    Ok(Json(ResultResponse { result }))
}

/// GET /add?num1=..&num2=..
pub async fn add(Query(params): Query<RawParams>) -> Result<Json<ResultResponse>> {
    evaluate(Operation::Add, &params)
}

/// GET /sub?num1=..&num2=..
pub async fn sub(Query(params): Query<RawParams>) -> Result<Json<ResultResponse>> {
    evaluate(Operation::Subtract, &params)
}

/// GET /mul?num1=..&num2=..
pub async fn mul(Query(params): Query<RawParams>) -> Result<Json<ResultResponse>> {
    evaluate(Operation::Multiply, &params)
}

/// GET /div?num1=..&num2=..
pub async fn div(Query(params): Query<RawParams>) -> Result<Json<ResultResponse>> {
    evaluate(Operation::Divide, &params)
}

/// GET /exp?num1=<base>&num2=<exponent>
pub async fn exp(Query(params): Query<RawParams>) -> Result<Json<ResultResponse>> {
    evaluate(Operation::Exponent, &params)
}

/// GET /sqrt?num1=..
pub async fn sqrt(Query(params): Query<RawParams>) -> Result<Json<ResultResponse>> {
    evaluate(Operation::SquareRoot, &params)
}

/// GET /mod?num1=..&num2=..
pub async fn modulo(Query(params): Query<RawParams>) -> Result<Json<ResultResponse>> {
    evaluate(Operation::Modulo, &params)
}
