//! The ED visit record and its enumerated domains.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Error raised when a value falls outside one of the fixed record domains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Acuity must be 1..=5
    #[error("acuity level {0} is outside 1..=5")]
    AcuityOutOfRange(i64),

    /// Age group label not in the fixed bucket list
    #[error("unknown age group '{0}'")]
    UnknownAgeGroup(String),

    /// Chief complaint label not in the fixed list
    #[error("unknown chief complaint '{0}'")]
    UnknownChiefComplaint(String),

    /// Table name is not a plain (optionally schema-qualified) identifier
    #[error("invalid table name '{0}'")]
    InvalidTableName(String),
}

/// Triage severity score, 1 being the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AcuityLevel(i16);

impl AcuityLevel {
    /// All levels, most severe first.
    pub const ALL: [AcuityLevel; 5] = [
        AcuityLevel(1),
        AcuityLevel(2),
        AcuityLevel(3),
        AcuityLevel(4),
        AcuityLevel(5),
    ];

    pub fn new(level: i64) -> Result<Self, DomainError> {
        if (1..=5).contains(&level) {
            Ok(Self(level as i16))
        } else {
            Err(DomainError::AcuityOutOfRange(level))
        }
    }

    /// The level as stored in the SMALLINT column.
    pub fn get(self) -> i16 {
        self.0
    }
}

impl fmt::Display for AcuityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Patient age bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Pediatric,
    YoungAdult,
    Adult,
    OlderAdult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Pediatric,
        AgeGroup::YoungAdult,
        AgeGroup::Adult,
        AgeGroup::OlderAdult,
        AgeGroup::Senior,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Pediatric => "0-17",
            AgeGroup::YoungAdult => "18-34",
            AgeGroup::Adult => "35-54",
            AgeGroup::OlderAdult => "55-74",
            AgeGroup::Senior => "75+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| DomainError::UnknownAgeGroup(s.to_string()))
    }
}

/// Presenting complaint recorded at triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChiefComplaint {
    ChestPain,
    AbdominalPain,
    ShortnessOfBreath,
    InjuryTrauma,
    Headache,
    Fever,
    BackPain,
    NauseaVomiting,
    Dizziness,
}

impl ChiefComplaint {
    pub const ALL: [ChiefComplaint; 9] = [
        ChiefComplaint::ChestPain,
        ChiefComplaint::AbdominalPain,
        ChiefComplaint::ShortnessOfBreath,
        ChiefComplaint::InjuryTrauma,
        ChiefComplaint::Headache,
        ChiefComplaint::Fever,
        ChiefComplaint::BackPain,
        ChiefComplaint::NauseaVomiting,
        ChiefComplaint::Dizziness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChiefComplaint::ChestPain => "Chest Pain",
            ChiefComplaint::AbdominalPain => "Abdominal Pain",
            ChiefComplaint::ShortnessOfBreath => "Shortness of Breath",
            ChiefComplaint::InjuryTrauma => "Injury/Trauma",
            ChiefComplaint::Headache => "Headache",
            ChiefComplaint::Fever => "Fever",
            ChiefComplaint::BackPain => "Back Pain",
            ChiefComplaint::NauseaVomiting => "Nausea/Vomiting",
            ChiefComplaint::Dizziness => "Dizziness",
        }
    }
}

impl fmt::Display for ChiefComplaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChiefComplaint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|complaint| complaint.as_str() == s)
            .ok_or_else(|| DomainError::UnknownChiefComplaint(s.to_string()))
    }
}

/// One emergency-department visit, in bronze column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdVisit {
    pub patient_id: String,
    pub arrival_time: NaiveDateTime,
    pub acuity_level: AcuityLevel,
    pub age_group: AgeGroup,
    pub chief_complaint: ChiefComplaint,
    pub wait_time_minutes: i32,
    /// Always carried with scale 2.
    pub length_of_stay_hours: Decimal,
}

impl EdVisit {
    /// Format a 1-based sequence number as a patient id (`PT0001`).
    pub fn patient_id_for(sequence: u64) -> String {
        format!("PT{sequence:04}")
    }
}

impl fmt::Display for EdVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  acuity={}  age={}  complaint={}  wait={}m  stay={}h",
            self.patient_id,
            self.arrival_time.format(crate::schema::TIMESTAMP_FORMAT),
            self.acuity_level,
            self.age_group,
            self.chief_complaint,
            self.wait_time_minutes,
            self.length_of_stay_hours
        )
    }
}
