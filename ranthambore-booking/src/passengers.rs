//! Passenger list for safari bookings.
//!
//! Rows are stored in order; a row's display number is always its position
//! plus one, so removal can never leave a gap.
use crate::constants::{MAX_PASSENGERS, PASSENGER_AGE_MAX, PASSENGER_AGE_MIN};
use crate::validate::{FieldRule, FieldSpec, FieldValue, ValidationReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nationality {
    Indian,
    Foreigner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    Aadhar,
    Passport,
    Dl,
    Voter,
}

crate::keyed_enum!(Gender, [Male => "male", Female => "female", Other => "other"]);
crate::keyed_enum!(Nationality, [Indian => "indian", Foreigner => "foreigner"]);
crate::keyed_enum!(IdKind, [Aadhar => "aadhar", Passport => "passport", Dl => "dl", Voter => "voter"]);

impl IdKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aadhar => "Aadhar Card",
            Self::Passport => "Passport",
            Self::Dl => "Driving License",
            Self::Voter => "Voter ID",
        }
    }
}

/// One passenger row as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub nationality: String,
    pub state: String,
    pub id_kind: String,
    pub id_number: String,
}

/// Column of a passenger row, used for per-cell edits and error lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassengerField {
    Name,
    Age,
    Gender,
    Nationality,
    State,
    IdKind,
    IdNumber,
}

impl PassengerField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Age,
        Self::Gender,
        Self::Nationality,
        Self::State,
        Self::IdKind,
        Self::IdNumber,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Nationality => "nationality",
            Self::State => "state",
            Self::IdKind => "id-type",
            Self::IdNumber => "id-number",
        }
    }

    fn spec(self, index: usize) -> FieldSpec {
        let id = field_id(index, self);
        match self {
            Self::Name => FieldSpec::new(id, "Full name", "Please enter the passenger's name")
                .rule(FieldRule::Required),
            Self::Age => FieldSpec::new(id, "Age", "Age must be between 1 and 120").rule(
                FieldRule::IntRange {
                    min: i64::from(PASSENGER_AGE_MIN),
                    max: i64::from(PASSENGER_AGE_MAX),
                },
            ),
            Self::Gender => {
                FieldSpec::new(id, "Gender", "Please select gender").rule(FieldRule::Select)
            }
            Self::Nationality => FieldSpec::new(id, "Nationality", "Please select nationality")
                .rule(FieldRule::Select),
            Self::State => {
                FieldSpec::new(id, "State", "Please select state").rule(FieldRule::Select)
            }
            Self::IdKind => {
                FieldSpec::new(id, "ID proof", "Please select an ID type").rule(FieldRule::Select)
            }
            Self::IdNumber => FieldSpec::new(id, "ID number", "Please enter the ID number")
                .rule(FieldRule::Required),
        }
    }
}

/// DOM-style id for a passenger cell (`passenger-2-age`).
#[must_use]
pub fn field_id(index: usize, field: PassengerField) -> String {
    format!("passenger-{}-{}", index + 1, field.key())
}

impl PassengerRecord {
    #[must_use]
    pub fn get(&self, field: PassengerField) -> &str {
        match field {
            PassengerField::Name => &self.name,
            PassengerField::Age => &self.age,
            PassengerField::Gender => &self.gender,
            PassengerField::Nationality => &self.nationality,
            PassengerField::State => &self.state,
            PassengerField::IdKind => &self.id_kind,
            PassengerField::IdNumber => &self.id_number,
        }
    }

    pub fn set(&mut self, field: PassengerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PassengerField::Name => self.name = value,
            PassengerField::Age => self.age = value,
            PassengerField::Gender => self.gender = value,
            PassengerField::Nationality => self.nationality = value,
            PassengerField::State => self.state = value,
            PassengerField::IdKind => self.id_kind = value,
            PassengerField::IdNumber => self.id_number = value,
        }
    }

    #[must_use]
    pub fn nationality(&self) -> Option<Nationality> {
        Nationality::from_key(&self.nationality)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassengerError {
    #[error("Maximum 6 passengers allowed per booking.")]
    CapReached,
    #[error("No passenger at position {0}")]
    NoSuchRow(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerList {
    rows: Vec<PassengerRecord>,
}

impl Default for PassengerList {
    /// Booking pages open with one empty row.
    fn default() -> Self {
        Self {
            rows: vec![PassengerRecord::default()],
        }
    }
}

impl PassengerList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the add control should be enabled.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.rows.len() < MAX_PASSENGERS
    }

    /// Append an empty row and return its display number.
    ///
    /// # Errors
    ///
    /// Returns [`PassengerError::CapReached`] when the list is full.
    pub fn add(&mut self) -> Result<usize, PassengerError> {
        if !self.can_add() {
            return Err(PassengerError::CapReached);
        }
        self.rows.push(PassengerRecord::default());
        Ok(self.rows.len())
    }

    /// Remove the row at zero-based `index`; later rows move up one number.
    ///
    /// # Errors
    ///
    /// Returns [`PassengerError::NoSuchRow`] for an out-of-range index.
    pub fn remove(&mut self, index: usize) -> Result<PassengerRecord, PassengerError> {
        if index >= self.rows.len() {
            return Err(PassengerError::NoSuchRow(index + 1));
        }
        Ok(self.rows.remove(index))
    }

    /// Display numbers, always `1..=len`.
    #[must_use]
    pub fn display_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &PassengerRecord)> {
        self.rows.iter().enumerate().map(|(idx, row)| (idx + 1, row))
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&PassengerRecord> {
        self.rows.get(index)
    }

    /// Edit one cell; out-of-range rows are ignored.
    pub fn set_field(&mut self, index: usize, field: PassengerField, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set(field, value);
        }
    }

    /// Validate every cell of every row; an empty list is itself an error.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        if self.rows.is_empty() {
            report.errors.push(crate::validate::FieldError {
                field: "passengers".into(),
                rule: FieldRule::Required,
                message: "Please add at least one passenger".into(),
            });
            return report;
        }
        for (index, row) in self.rows.iter().enumerate() {
            for field in PassengerField::ALL {
                let spec = field.spec(index);
                report.checked += 1;
                if let Some(rule) = spec.failing_rule(&FieldValue::Text(row.get(field).to_string()))
                {
                    report.errors.push(crate::validate::FieldError {
                        field: spec.id,
                        rule,
                        message: spec.message,
                    });
                }
            }
        }
        report
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
