//! Error types for projection and input loading

use thiserror::Error;

/// Failure of a single lot projection.
///
/// Every variant is detectable from the input values alone; the engine never
/// substitutes a default for a quantity it cannot compute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// A denominator was zero (head count, total cost or final weight)
    #[error("division by zero while computing {quantity}")]
    DivisionByZero { quantity: &'static str },

    /// An input violates its sign constraint or is not a finite number
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// A derived value overflowed to infinity or NaN
    #[error("{quantity} is not a finite number")]
    NonFinite { quantity: &'static str },
}

/// Failure while reading lot parameters from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ProjectionError::DivisionByZero { quantity: "profit per head" };
        assert_eq!(err.to_string(), "division by zero while computing profit per head");

        let err = ProjectionError::InvalidInput { field: "entry_weight_kg", value: -1.0 };
        assert_eq!(err.to_string(), "invalid input: entry_weight_kg = -1");
    }
}
