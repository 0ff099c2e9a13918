//! In-memory patient collection.

mod model;

pub use model::*;

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Id, Patient};
use crate::search::PatientPredicate;

/// Collection errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("A patient with id {0} already exists")]
    DuplicateId(Id),

    #[error("No patient with id {0}")]
    NotFound(Id),
}

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Ordered, Id-unique collection of patient records.
///
/// Records keep insertion order. Records without an Id are allowed; they
/// never collide and cannot be addressed by [`remove`](Self::remove) or
/// [`replace`](Self::replace).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientCollection {
    patients: Vec<Patient>,
    ids: HashSet<Id>,
}

impl PatientCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, rejecting any repeated Id.
    pub fn from_patients(patients: impl IntoIterator<Item = Patient>) -> CollectionResult<Self> {
        let mut collection = Self::new();
        for patient in patients {
            collection.add(patient)?;
        }
        Ok(collection)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Check if there are no records.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Check if a record with this Id exists.
    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    /// Get a record by Id.
    pub fn get(&self, id: &Id) -> Option<&Patient> {
        self.position(id).map(|index| &self.patients[index])
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Patient> {
        self.patients.iter()
    }

    /// Records in insertion order.
    pub fn as_slice(&self) -> &[Patient] {
        &self.patients
    }

    /// Append a record.
    pub fn add(&mut self, patient: Patient) -> CollectionResult<()> {
        if let Some(id) = patient.id() {
            if self.ids.contains(id) {
                return Err(CollectionError::DuplicateId(id.clone()));
            }
            self.ids.insert(id.clone());
        }
        self.patients.push(patient);
        Ok(())
    }

    /// Remove and return the record with the given Id.
    pub fn remove(&mut self, id: &Id) -> CollectionResult<Patient> {
        let index = self
            .position(id)
            .ok_or_else(|| CollectionError::NotFound(id.clone()))?;
        self.ids.remove(id);
        Ok(self.patients.remove(index))
    }

    /// Replace the record with the given Id by a new one, in place.
    ///
    /// The new record may carry a different Id as long as no other record
    /// already uses it.
    pub fn replace(&mut self, id: &Id, patient: Patient) -> CollectionResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| CollectionError::NotFound(id.clone()))?;

        if let Some(new_id) = patient.id() {
            if new_id != id && self.ids.contains(new_id) {
                return Err(CollectionError::DuplicateId(new_id.clone()));
            }
        }

        self.ids.remove(id);
        if let Some(new_id) = patient.id() {
            self.ids.insert(new_id.clone());
        }
        self.patients[index] = patient;
        Ok(())
    }

    /// Replace the whole contents. On error the collection is unchanged.
    pub fn set_all(&mut self, patients: impl IntoIterator<Item = Patient>) -> CollectionResult<()> {
        *self = Self::from_patients(patients)?;
        Ok(())
    }

    /// Lazily yield the records accepted by `predicate`, in insertion order.
    pub fn filtered<'a, P>(&'a self, predicate: &'a P) -> impl Iterator<Item = &'a Patient> + 'a
    where
        P: PatientPredicate + ?Sized,
    {
        self.patients.iter().filter(move |patient| predicate.apply(patient))
    }

    fn position(&self, id: &Id) -> Option<usize> {
        if !self.ids.contains(id) {
            return None;
        }
        self.patients
            .iter()
            .position(|patient| patient.id() == Some(id))
    }
}

impl<'a> IntoIterator for &'a PatientCollection {
    type Item = &'a Patient;
    type IntoIter = std::slice::Iter<'a, Patient>;

    fn into_iter(self) -> Self::IntoIter {
        self.patients.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phone;
    use crate::search::KeywordPredicate;

    fn patient(name: &str, id: &str) -> Patient {
        Patient::from_user_input(name, Some(id), "91234567", "p@example.com", "Somewhere", None, &[])
            .unwrap()
    }

    fn id(raw: &str) -> Id {
        Id::new(raw).unwrap()
    }

    fn sample() -> PatientCollection {
        PatientCollection::from_patients([
            patient("Alice Tan", "S1A"),
            patient("Bob Lee", "S2B"),
            patient("Charlie Goh", "S3C"),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_preserves_order() {
        let collection = sample();
        let names: Vec<_> = collection.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Alice Tan", "Bob Lee", "Charlie Goh"]);
    }

    #[test]
    fn test_add_duplicate_id_fails() {
        let mut collection = sample();
        let err = collection.add(patient("Someone Else", "S1A")).unwrap_err();
        assert_eq!(err, CollectionError::DuplicateId(id("S1A")));
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_records_without_id_never_collide() {
        let mut collection = PatientCollection::new();
        let no_id = Patient::from_user_input(
            "Dan Ng", None, "91234567", "d@example.com", "Somewhere", None, &[],
        )
        .unwrap();
        collection.add(no_id.clone()).unwrap();
        collection.add(no_id).unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut collection = sample();
        let removed = collection.remove(&id("S2B")).unwrap();
        assert_eq!(removed.name().as_str(), "Bob Lee");
        assert!(!collection.contains(&id("S2B")));
        assert_eq!(collection.len(), 2);

        let err = collection.remove(&id("S2B")).unwrap_err();
        assert_eq!(err, CollectionError::NotFound(id("S2B")));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut collection = sample();
        let edited = patient("Bob Lee", "S2B").with_phone(Phone::new("99990000").unwrap());
        collection.replace(&id("S2B"), edited.clone()).unwrap();

        assert_eq!(collection.as_slice()[1], edited);
        assert_eq!(collection.get(&id("S2B")), Some(&edited));
    }

    #[test]
    fn test_replace_with_new_id() {
        let mut collection = sample();
        collection
            .replace(&id("S2B"), patient("Bob Lee", "S9Z"))
            .unwrap();
        assert!(!collection.contains(&id("S2B")));
        assert!(collection.contains(&id("S9Z")));
    }

    #[test]
    fn test_replace_errors() {
        let mut collection = sample();

        let err = collection
            .replace(&id("S7X"), patient("Nobody", "S7X"))
            .unwrap_err();
        assert_eq!(err, CollectionError::NotFound(id("S7X")));

        let err = collection
            .replace(&id("S2B"), patient("Bob Lee", "S3C"))
            .unwrap_err();
        assert_eq!(err, CollectionError::DuplicateId(id("S3C")));
        assert_eq!(collection, sample());
    }

    #[test]
    fn test_set_all_is_atomic() {
        let mut collection = sample();
        let err = collection
            .set_all([patient("Eve Lim", "S5E"), patient("Eve Tan", "S5E")])
            .unwrap_err();
        assert_eq!(err, CollectionError::DuplicateId(id("S5E")));
        assert_eq!(collection, sample());

        collection.set_all([patient("Eve Lim", "S5E")]).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(!collection.contains(&id("S1A")));
    }

    #[test]
    fn test_filtered_view() {
        let collection = sample();
        let predicate = KeywordPredicate::by_name(["alice", "bob"]);
        let names: Vec<_> = collection
            .filtered(&predicate)
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(names, vec!["Alice Tan", "Bob Lee"]);
        assert_eq!(collection.len(), 3);
    }
}
