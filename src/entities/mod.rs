//! Inventory entity schemas
//!
//! Each entity exposes a memoized [`Schema`](crate::Schema) plus a typed
//! input struct decoded from the normalized record. Message text is kept in
//! a `messages` table per entity and passed through verbatim.
//!
//! ```rust
//! use gudang::entities::SupplierInput;
//! use serde_json::json;
//!
//! let supplier = SupplierInput::validate(&json!({
//!     "name": "PT Traktor Jaya",
//!     "phone": "",
//!     "email": "sales@traktorjaya.co.id",
//! }))
//! .ok()
//! .unwrap();
//!
//! assert_eq!(supplier.phone, None);
//! assert_eq!(supplier.email.as_deref(), Some("sales@traktorjaya.co.id"));
//! ```

pub mod category;
pub mod supplier;

pub use category::{category_schema, CategoryInput};
pub use supplier::{supplier_schema, SupplierInput};

use crate::error::{FieldError, FieldErrors};
use crate::nonempty::NonEmptyVec;
use crate::record::NormalizedRecord;
use crate::validation::Validation;

// Decode helpers shared by the typed inputs. A record from the matching
// schema never fails these; a record from some other schema reports the
// offending field instead of panicking.

fn required_text(record: &NormalizedRecord, field: &str) -> Validation<String, FieldErrors> {
    match record.get_text(field) {
        Some(text) => Validation::success(text.to_owned()),
        None => Validation::failure(NonEmptyVec::singleton(FieldError::new(
            field,
            format!("field `{}` is missing from the record", field),
        ))),
    }
}

fn optional_text(
    record: &NormalizedRecord,
    field: &str,
) -> Validation<Option<String>, FieldErrors> {
    match record.get(field) {
        None => Validation::success(None),
        Some(value) => match value.as_text() {
            Some(text) => Validation::success(Some(text.to_owned())),
            None => Validation::failure(NonEmptyVec::singleton(FieldError::new(
                field,
                format!("field `{}` is not text", field),
            ))),
        },
    }
}
