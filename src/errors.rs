//! Errors
//!
//! Custom error types used throughout the `arbor` crate.
use thiserror::Error;

/// Errors that can occur while building, pruning or scoring a tree.
#[derive(Debug, Error, PartialEq)]
pub enum ArborError {
    /// No rows to work with, so no majority class can be defined.
    #[error("The dataset has no rows, a majority class is undefined.")]
    EmptyDataset,
    /// Buffer length, rows, columns.
    #[error("Data of length {0} can not be read as a {1} x {2} matrix with a class column.")]
    InvalidShape(usize, usize, usize),
    /// Row number, values found, values expected.
    #[error("Row {0} has {1} values, but {2} were expected.")]
    RaggedRow(usize, usize, usize),
    /// Two label sequences that should be aligned are not.
    #[error("Label sequences have mismatched lengths: {0} actual and {1} predicted.")]
    LengthMismatch(usize, usize),
    /// Unable to write tree to file.
    #[error("Unable to write tree to file: {0}")]
    UnableToWrite(String),
    /// Unable to read tree from file.
    #[error("Unable to read tree from a file {0}")]
    UnableToRead(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ArborError::LengthMismatch(3, 2).to_string(),
            "Label sequences have mismatched lengths: 3 actual and 2 predicted."
        );
        assert_eq!(
            ArborError::InvalidParameter("min_gain".to_string(), "a value >= 0".to_string(), "-1".to_string())
                .to_string(),
            "Invalid parameter value passed for min_gain, expected a value >= 0 but -1 provided."
        );
    }
}
