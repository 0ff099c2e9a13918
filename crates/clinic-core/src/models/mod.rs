//! Domain models: validated field types and the patient record.

mod appointment;
mod contact;
mod history;
mod identity;
mod patient;
mod validation;

pub use appointment::*;
pub use contact::*;
pub use history::*;
pub use identity::*;
pub use patient::*;
pub use validation::{FieldKind, ValidationError, ValidationResult};
