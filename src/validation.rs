//! Request validation: operand parsing and numeric edge-case policy.
//!
//! `validate` is the single classification routine shared by all endpoints.
//! It is a pure function of (operation, operands) apart from one structured
//! error record emitted per rejection. Rules run in a fixed order and the
//! first match wins; that ordering is a behavioral contract, not an
//! implementation detail.
//!
//! Two rules are deliberately textual rather than numeric: the fractional
//! exponent detection matches a digits-dot-digits pattern in the raw query
//! text, and the zero-base rule compares the raw exponent string against
//! `"0"` lexicographically. Both reproduce the behavior of the service this
//! one replaces; see DESIGN.md before "fixing" either.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::error;

use crate::logging::SERVICE;

/// Largest integer magnitude an f64 represents without precision loss
/// (2^53 - 1). Operands beyond it are rejected as out of range.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// `\d+\.\d+` over the raw query text. `"0.5"` and `"-12.25"` match;
/// `"3"`, `".5"` and `"2e-1"` do not.
#[allow(clippy::unwrap_used)] // literal pattern, cannot fail
static FRACTIONAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\d+").unwrap());

/// The seven supported operations. Square root is unary; everything else is
/// binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
    SquareRoot,
    Modulo,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "addition"),
            Self::Subtract => write!(f, "subtraction"),
            Self::Multiply => write!(f, "multiplication"),
            Self::Divide => write!(f, "division"),
            Self::Exponent => write!(f, "exponentiation"),
            Self::SquareRoot => write!(f, "square root"),
            Self::Modulo => write!(f, "modulo"),
        }
    }
}

impl Operation {
    /// Apply the operation to already-validated operands using plain
    /// IEEE-754 double semantics.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Exponent => a.powf(b),
            Self::SquareRoot => a.sqrt(),
            Self::Modulo => a % b,
        }
    }
}

/// One numeric input, carrying both the parsed value and the raw query text.
///
/// The raw form is kept because two validation rules inspect the text, not
/// the number. A missing or unparseable parameter yields `value = NaN` and
/// flows into the NotANumber rule; there is no separate missing-parameter
/// error path.
#[derive(Debug, Clone)]
pub struct Operand {
    pub raw: String,
    pub value: f64,
}

impl Operand {
    /// Build an operand from an optional query parameter.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        let raw = param.unwrap_or_default().trim().to_string();
        let value = raw.parse::<f64>().unwrap_or(f64::NAN);
        Self { raw, value }
    }

    /// Fixed second operand for unary operations, ignored by every rule that
    /// does not apply to it.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            raw: "0".to_string(),
            value: 0.0,
        }
    }
}

/// A named category of validation failure. The `Display` strings are the
/// exact client-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("num1 and num2 must be numbers")]
    NotANumber,
    #[error("Denominator cannot be 0 in {0}")]
    DivisionByZero(Operation),
    #[error("Either numbers are too large or too small")]
    OutOfRange,
    #[error("Fractional exponent of negative numbers is not supported")]
    NegativeFractionalExponent,
    #[error("Zero cannot be raised to a negative fractional exponent")]
    ZeroBaseNegativeFractionalExponent,
    #[error("Square root of negative numbers is not supported")]
    NegativeSquareRoot,
}

/// Classify an (operation, operand pair) into Ok or the first matching
/// [`ValidationError`]. Emits one error-level diagnostic record per
/// rejection; success emits nothing here.
///
/// # Errors
///
/// Returns the first rule that matches, in the documented order.
pub fn validate(op: Operation, a: &Operand, b: &Operand) -> Result<(), ValidationError> {
    classify(op, a, b).inspect_err(|err| {
        error!(service = SERVICE, operation = %op, num1 = %a.raw, num2 = %b.raw, "{err}");
    })
}

#[allow(clippy::float_cmp)] // exact zero tests are intentional here
fn classify(op: Operation, a: &Operand, b: &Operand) -> Result<(), ValidationError> {
    // Rule 1: unparseable input. Infinities are not NaN and fall through to
    // the range rule.
    if a.value.is_nan() || b.value.is_nan() {
        return Err(ValidationError::NotANumber);
    }

    // Rule 2: the zero test guards only the modulo arm, so every divide
    // request is rejected regardless of the denominator. Known defect in the
    // service this replaces, kept to match its observed behavior; the test
    // suite flags it explicitly.
    if op == Operation::Divide || (op == Operation::Modulo && b.value == 0.0) {
        return Err(ValidationError::DivisionByZero(op));
    }

    // Rule 3: magnitude beyond 2^53 - 1 in either direction, infinities
    // included.
    if a.value.abs() > MAX_SAFE_INTEGER || b.value.abs() > MAX_SAFE_INTEGER {
        return Err(ValidationError::OutOfRange);
    }

    // Rules 4 and 5: exponent domain, tested against the raw text.
    if op == Operation::Exponent {
        if a.value < 0.0 && FRACTIONAL.is_match(&b.raw) {
            return Err(ValidationError::NegativeFractionalExponent);
        }
        // Lexicographic comparison against "0", on purpose: "-0.5" < "0"
        // holds because '-' sorts before '0'.
        if a.value == 0.0 && b.raw.as_str() < "0" && FRACTIONAL.is_match(&b.raw) {
            return Err(ValidationError::ZeroBaseNegativeFractionalExponent);
        }
    }

    // Rule 6: square-root domain.
    if op == Operation::SquareRoot && a.value < 0.0 {
        return Err(ValidationError::NegativeSquareRoot);
    }

    // Every operation reaches an explicit Ok terminal when no rule matches.
    Ok(())
}
