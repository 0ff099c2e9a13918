//! The session model: the collection plus the active filter.

use crate::models::{Id, Patient};
use crate::search::PatientFilter;

use super::{CollectionResult, PatientCollection};

/// Owns the patient collection for an interactive session and remembers
/// which filter the current view uses.
#[derive(Debug, Clone, Default)]
pub struct ClinicModel {
    patients: PatientCollection,
    filter: PatientFilter,
}

impl ClinicModel {
    /// Create a model showing every record.
    pub fn new(patients: PatientCollection) -> Self {
        Self {
            patients,
            filter: PatientFilter::All,
        }
    }

    /// The full, unfiltered collection.
    pub fn patients(&self) -> &PatientCollection {
        &self.patients
    }

    /// The active filter.
    pub fn filter(&self) -> &PatientFilter {
        &self.filter
    }

    /// Replace the active filter.
    pub fn update_filter(&mut self, filter: impl Into<PatientFilter>) {
        self.filter = filter.into();
    }

    /// Show every record again.
    pub fn clear_filter(&mut self) {
        self.filter = PatientFilter::All;
    }

    /// Records passing the active filter, evaluated afresh on every call.
    pub fn filtered_patients(&self) -> Vec<&Patient> {
        self.patients.filtered(&self.filter).collect()
    }

    /// Add a record; its Id must be new.
    pub fn add_patient(&mut self, patient: Patient) -> CollectionResult<()> {
        self.patients.add(patient)
    }

    /// Delete the record with this Id.
    pub fn delete_patient(&mut self, id: &Id) -> CollectionResult<Patient> {
        self.patients.remove(id)
    }

    /// Replace the record with this Id by an edited one.
    pub fn set_patient(&mut self, id: &Id, patient: Patient) -> CollectionResult<()> {
        self.patients.replace(id, patient)
    }
}
