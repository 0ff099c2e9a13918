//! Whole-collection codec: `PatientCollection` to and from the
//! `{ "persons": [...] }` document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::PatientCollection;

use super::adapted::JsonAdaptedPatient;
use super::StorageResult;

/// The on-disk document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicDocument {
    pub persons: Vec<JsonAdaptedPatient>,
}

impl ClinicDocument {
    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> StorageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a document from a generic JSON value.
    pub fn from_value(value: Value) -> StorageResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Pretty-printed JSON, as written to the data file.
    pub fn to_json_string(&self) -> StorageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to a generic JSON value.
    pub fn to_value(&self) -> StorageResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Convert a collection for saving, in collection order.
pub fn encode(patients: &PatientCollection) -> StorageResult<ClinicDocument> {
    let persons = patients
        .iter()
        .map(JsonAdaptedPatient::from_model)
        .collect::<StorageResult<Vec<_>>>()?;
    Ok(ClinicDocument { persons })
}

/// Validate and rebuild a collection.
///
/// All or nothing: the first invalid record, or the first repeated Id, fails
/// the whole document.
pub fn decode(document: &ClinicDocument) -> StorageResult<PatientCollection> {
    let mut patients = PatientCollection::new();
    for (index, adapted) in document.persons.iter().enumerate() {
        let patient = adapted.to_model().inspect_err(|err| {
            tracing::warn!(index, error = %err, "rejecting stored patient record");
        })?;
        patients.add(patient)?;
    }
    Ok(patients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CollectionError;
    use crate::models::{FieldKind, Patient};
    use crate::storage::StorageError;

    fn sample() -> PatientCollection {
        PatientCollection::from_patients([
            Patient::from_user_input(
                "Alice Tan",
                Some("S1A"),
                "93121534",
                "alice@example.com",
                "Blk 1",
                Some("5/3/2024 14:30"),
                &["Asthma"],
            )
            .unwrap(),
            Patient::from_user_input(
                "Bob Lee", Some("S2B"), "98765432", "bob@example.com", "Blk 2", None, &[],
            )
            .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_encode_shape() {
        let value = encode(&sample()).unwrap().to_value().unwrap();
        let first = &value["persons"][0];
        assert_eq!(first["name"], "Alice Tan");
        assert_eq!(first["id"], "S1A");
        assert_eq!(first["appointment"], "2024-03-05 14:30");
        assert_eq!(first["medicalHistories"][0]["medicalHistory"], "Asthma");
        assert!(first.get("remark").is_none());

        let second = &value["persons"][1];
        assert!(second["appointment"].is_null());
        assert_eq!(second["medicalHistories"], serde_json::json!([]));
    }

    #[test]
    fn test_round_trip() {
        let original = sample();
        let json = encode(&original).unwrap().to_json_string().unwrap();
        let restored = decode(&ClinicDocument::from_json_str(&json).unwrap()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let patients = sample();
        let first = encode(&patients).unwrap().to_json_string().unwrap();
        let second = encode(&patients).unwrap().to_json_string().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_null_phone_is_missing() {
        let json = r#"{ "persons": [ {
            "name": "Alice Tan", "id": "S1A", "phone": null,
            "email": "alice@example.com", "address": "Blk 1",
            "appointment": null, "medicalHistories": []
        } ] }"#;
        let err = decode(&ClinicDocument::from_json_str(json).unwrap()).unwrap_err();
        assert!(matches!(err, StorageError::MissingField(FieldKind::Phone)));
        assert_eq!(err.to_string(), "Patient's Phone field is missing!");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut document = encode(&sample()).unwrap();
        let mut copy = document.persons[0].clone();
        copy.name = Some("Alice Clone".into());
        document.persons.push(copy);

        let err = decode(&document).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Collection(CollectionError::DuplicateId(ref id)) if id.as_str() == "S1A"
        ));
    }

    #[test]
    fn test_missing_persons_key_is_an_error() {
        assert!(matches!(
            ClinicDocument::from_json_str("{}"),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        let document = ClinicDocument::from_json_str(r#"{ "persons": [] }"#).unwrap();
        assert!(decode(&document).unwrap().is_empty());
    }
}
