//! Patient record models.

use std::collections::BTreeSet;
use std::fmt;

use super::appointment::{Appointment, Origin};
use super::contact::{Address, Email, Phone};
use super::history::{MedicalHistory, Remark};
use super::identity::{Id, Name};
use super::validation::ValidationResult;

/// A patient record built only from validated fields.
///
/// Records are never edited in place: the `with_*` methods return a new
/// record that keeps the same [`Id`]. Structural equality compares every
/// field; [`Patient::is_same_patient`] compares identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    name: Name,
    /// Optional in memory, mandatory once persisted.
    id: Option<Id>,
    phone: Phone,
    email: Email,
    address: Address,
    appointment: Option<Appointment>,
    medical_histories: BTreeSet<MedicalHistory>,
    remark: Remark,
}

impl Patient {
    /// Create a patient from already validated fields.
    pub fn new(
        name: Name,
        id: Option<Id>,
        phone: Phone,
        email: Email,
        address: Address,
        appointment: Option<Appointment>,
        medical_histories: impl IntoIterator<Item = MedicalHistory>,
    ) -> Self {
        Self {
            name,
            id,
            phone,
            email,
            address,
            appointment,
            medical_histories: medical_histories.into_iter().collect(),
            remark: Remark::default(),
        }
    }

    /// Validate raw, user-typed strings and build a record from them.
    ///
    /// The appointment, if any, is read with the user-input grammar.
    pub fn from_user_input(
        name: &str,
        id: Option<&str>,
        phone: &str,
        email: &str,
        address: &str,
        appointment: Option<&str>,
        medical_histories: &[&str],
    ) -> ValidationResult<Self> {
        let name = Name::new(name)?;
        let id = id.map(Id::new).transpose()?;
        let phone = Phone::new(phone)?;
        let email = Email::new(email)?;
        let address = Address::new(address)?;
        let appointment = appointment
            .map(|raw| Appointment::new(raw, Origin::UserInput))
            .transpose()?;
        let medical_histories = medical_histories
            .iter()
            .map(|raw| MedicalHistory::new(*raw))
            .collect::<ValidationResult<Vec<_>>>()?;

        Ok(Self::new(
            name,
            id,
            phone,
            email,
            address,
            appointment,
            medical_histories,
        ))
    }

    /// Get the name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the Id, if one was assigned.
    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Get the phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Get the email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Get the postal address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Get the upcoming appointment, if any.
    pub fn appointment(&self) -> Option<&Appointment> {
        self.appointment.as_ref()
    }

    /// Get the medical history entries, sorted.
    pub fn medical_histories(&self) -> &BTreeSet<MedicalHistory> {
        &self.medical_histories
    }

    /// Get the remark.
    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Two records describe the same patient when both carry the same Id.
    pub fn is_same_patient(&self, other: &Patient) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Copy of this record with a new name.
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    /// Copy of this record with a new phone number.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = phone;
        self
    }

    /// Copy of this record with a new email address.
    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    /// Copy of this record with a new postal address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Copy of this record with the appointment set or cleared.
    pub fn with_appointment(mut self, appointment: Option<Appointment>) -> Self {
        self.appointment = appointment;
        self
    }

    /// Add an entry; adding one that is already present changes nothing.
    pub fn with_medical_history(mut self, entry: MedicalHistory) -> Self {
        self.medical_histories.insert(entry);
        self
    }

    /// Copy of this record with a new remark.
    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(id) = &self.id {
            write!(f, " ({})", id)?;
        }
        write!(f, "; Phone: {}; Email: {}; Address: {}", self.phone, self.email, self.address)?;
        if let Some(appointment) = &self.appointment {
            write!(f, "; Appointment: {}", appointment)?;
        }
        if !self.medical_histories.is_empty() {
            f.write_str("; Medical histories: ")?;
            for entry in &self.medical_histories {
                write!(f, "{}", entry)?;
            }
        }
        Ok(())
    }
}
