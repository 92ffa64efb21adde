//! # Gudang
//!
//! Schema-driven input validation for the gudang spare-parts inventory.
//!
//! A [`Schema`] is declared once as data: an ordered list of field rules,
//! each with a kind, a presence policy, and checks carrying pre-localized
//! messages. [`validate`] applies it to an untrusted JSON record and returns
//! either a [`NormalizedRecord`] ready for persistence, or every field error
//! in declaration order, ready for inline display.
//!
//! ## Quick Example
//!
//! ```rust
//! use gudang::{entities, Validation};
//! use serde_json::json;
//!
//! let result = entities::supplier_schema().validate(&json!({
//!     "name": "PT Traktor Jaya",
//!     "phone": "",
//!     "email": "not-an-email",
//! }));
//!
//! match result {
//!     Validation::Success(record) => println!("valid: {}", record.to_json()),
//!     Validation::Failure(errors) => {
//!         for error in errors.iter() {
//!             println!("{}", error);
//!         }
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: log validation outcomes with the `tracing` crate.
//! - `serde`: `Serialize` for results, errors, and records.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod entities;
pub mod error;
pub mod nonempty;
pub mod predicate;
pub mod record;
pub mod schema;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod value;

// Re-exports
pub use engine::{validate, validate_field, ValidationResult};
pub use error::{FieldError, FieldErrors, SchemaError};
pub use nonempty::NonEmptyVec;
pub use record::NormalizedRecord;
pub use schema::{Check, Constraint, FieldRule, Format, Presence, Schema, SchemaBuilder};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use value::{FieldKind, FieldValue};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{validate, ValidationResult};
    pub use crate::error::{FieldError, FieldErrors, SchemaError};
    pub use crate::record::NormalizedRecord;
    pub use crate::schema::{FieldRule, Schema};
    pub use crate::validation::Validation;
}
