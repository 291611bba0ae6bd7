//! Typed coordinate entry.

use thiserror::Error;

/// Why a coordinate string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No coordinates entered")]
    Empty,

    #[error("Expected two coordinates, got one")]
    MissingCoordinate,

    #[error("Expected two coordinates, got {0}")]
    TooManyValues(usize),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Parse `"x y"`, `"x,y"` or `"x, y"` into a pair of grid coordinates.
///
/// Non-finite values (`inf`, `NaN`) are rejected.
pub fn parse_grid_coords(input: &str) -> Result<(f64, f64), InputError> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => Err(InputError::Empty),
        [_] => Err(InputError::MissingCoordinate),
        [x, y] => Ok((parse_number(x)?, parse_number(y)?)),
        more => Err(InputError::TooManyValues(more.len())),
    }
}

fn parse_number(token: &str) -> Result<f64, InputError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber(token.to_string()))
}
