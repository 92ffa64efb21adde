//! Assertion macros for validation results
//!
//! Shortcuts for tests of code that produces [`Validation`](crate::Validation)
//! values, typically handlers asserting what a request body validates to.
//!
//! ```rust
//! use gudang::{assert_field_errors, assert_invalid, assert_valid, entities};
//! use serde_json::json;
//!
//! let schema = entities::category_schema();
//!
//! assert_valid!(schema.validate(&json!({"name": "Hidrolik"})));
//! assert_invalid!(schema.validate(&json!({})));
//! assert_field_errors!(
//!     schema.validate(&json!({"name": ""})),
//!     [("name", "Nama kategori wajib diisi")]
//! );
//! ```

/// Assert that a validation succeeds, evaluating to the success value.
///
/// Panics with the errors if it failed.
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(value) => value,
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails, evaluating to the errors.
///
/// Panics with the value if it succeeded.
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => errors,
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly these `(field, message)`
/// pairs, in order.
#[macro_export]
macro_rules! assert_field_errors {
    ($validation:expr, [$(($field:expr, $message:expr)),* $(,)?]) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let actual: ::std::vec::Vec<(&str, &str)> = errors
                    .iter()
                    .map(|e| (e.field.as_str(), e.message.as_str()))
                    .collect();
                let expected: ::std::vec::Vec<(&str, &str)> = vec![$(($field, $message)),*];
                assert_eq!(actual, expected);
            }
            $crate::Validation::Success(v) => {
                panic!("Expected Failure with field errors, got Success: {:?}", v);
            }
        }
    };
}
