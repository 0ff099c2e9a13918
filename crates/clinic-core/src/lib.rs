//! Clinic Core Library
//!
//! Validated patient records, keyword search and JSON persistence for a
//! single-user clinic record manager.
//!
//! # Architecture
//!
//! ```text
//!   command text ──► KeywordPredicate ──► ClinicModel::update_filter
//!                                                 │
//!                                      filtered_patients() (fresh on every read)
//!
//!   data file ──► ClinicDocument ──► decode ──► PatientCollection ──► ClinicModel
//!       ▲                                                                 │
//!       └──── temp file + rename ◄── ClinicDocument ◄── encode ◄──────────┘
//! ```
//!
//! # Core Principle
//!
//! **No invalid record can exist.** Every field validates on construction,
//! and a data file loads completely or not at all.
//!
//! # Modules
//!
//! - [`models`]: Validated field types and [`Patient`]
//! - [`collection`]: Ordered, Id-unique [`PatientCollection`] and [`ClinicModel`]
//! - [`search`]: Keyword predicates by name or by Id
//! - [`storage`]: JSON codec and the data file
//! - [`config`]: Startup configuration

pub mod collection;
pub mod config;
pub mod models;
pub mod search;
pub mod storage;

// Re-export commonly used types
pub use collection::{ClinicModel, CollectionError, PatientCollection};
pub use config::{ClinicConfig, ConfigError};
pub use models::{
    Address, Appointment, BadAppointmentFormat, Email, FieldKind, Id, MedicalHistory, Name,
    Origin, Patient, Phone, Remark, ValidationError,
};
pub use search::{KeywordPredicate, PatientFilter, PatientPredicate, SearchMode};
pub use storage::{ClinicDocument, JsonClinicStorage, StorageError};

/// Any error raised by this crate.
#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    BadAppointmentFormat(#[from] BadAppointmentFormat),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type ClinicResult<T> = Result<T, ClinicError>;
