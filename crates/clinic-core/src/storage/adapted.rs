//! Serde-friendly mirrors of the patient model.
//!
//! Every field is optional here so that a missing or `null` value reaches
//! [`JsonAdaptedPatient::to_model`] and is reported with the field's name
//! instead of as a generic parse error.

use serde::{Deserialize, Serialize};

use crate::models::{
    Address, Appointment, Email, FieldKind, Id, MedicalHistory, Name, Origin, Patient, Phone,
    Remark, ValidationError,
};

use super::{StorageError, StorageResult};

/// One medical history entry as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedMedicalHistory {
    pub medical_history: Option<String>,
}

impl JsonAdaptedMedicalHistory {
    /// Convert an entry for saving.
    pub fn from_model(entry: &MedicalHistory) -> Self {
        Self {
            medical_history: Some(entry.as_str().to_string()),
        }
    }

    /// Validate and rebuild the entry.
    pub fn to_model(&self) -> StorageResult<MedicalHistory> {
        let raw = required(&self.medical_history, FieldKind::MedicalHistory)?;
        Ok(MedicalHistory::new(raw)?)
    }
}

/// One patient record as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonAdaptedPatient {
    pub name: Option<String>,
    pub id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub appointment: Option<String>,
    pub medical_histories: Option<Vec<JsonAdaptedMedicalHistory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl JsonAdaptedPatient {
    /// Convert a record for saving.
    ///
    /// A record without an Id is refused: it could be written but never
    /// read back.
    pub fn from_model(patient: &Patient) -> StorageResult<Self> {
        let id = patient
            .id()
            .ok_or(StorageError::MissingField(FieldKind::Id))?;

        Ok(Self {
            name: Some(patient.name().as_str().to_string()),
            id: Some(id.as_str().to_string()),
            phone: Some(patient.phone().as_str().to_string()),
            email: Some(patient.email().as_str().to_string()),
            address: Some(patient.address().as_str().to_string()),
            appointment: patient.appointment().map(Appointment::to_save_string),
            medical_histories: Some(
                patient
                    .medical_histories()
                    .iter()
                    .map(JsonAdaptedMedicalHistory::from_model)
                    .collect(),
            ),
            remark: Some(patient.remark().as_str().to_string()).filter(|r| !r.is_empty()),
        })
    }

    /// Validate every field and rebuild the record.
    ///
    /// Fields are checked in a fixed order (name, phone, email, address, id,
    /// medical histories, appointment) and the first failure is returned.
    pub fn to_model(&self) -> StorageResult<Patient> {
        let name = Name::new(required(&self.name, FieldKind::Name)?)?;
        let phone = Phone::new(required(&self.phone, FieldKind::Phone)?)?;
        let email = Email::new(required(&self.email, FieldKind::Email)?)?;
        let address = Address::new(required(&self.address, FieldKind::Address)?)?;
        let id = Id::new(required(&self.id, FieldKind::Id)?)?;

        let medical_histories = self
            .medical_histories
            .iter()
            .flatten()
            .map(JsonAdaptedMedicalHistory::to_model)
            .collect::<StorageResult<Vec<_>>>()?;

        let appointment = self
            .appointment
            .as_deref()
            .map(|raw| {
                Appointment::parse(raw, Origin::Storage)
                    .map_err(|_| ValidationError::new(FieldKind::Appointment))
            })
            .transpose()?;

        let remark = Remark::new(self.remark.clone().unwrap_or_default());

        Ok(Patient::new(
            name,
            Some(id),
            phone,
            email,
            address,
            appointment,
            medical_histories,
        )
        .with_remark(remark))
    }
}

fn required(value: &Option<String>, kind: FieldKind) -> StorageResult<&str> {
    value.as_deref().ok_or(StorageError::MissingField(kind))
}
