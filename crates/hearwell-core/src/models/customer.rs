use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::preferences::ClinicPreferences;

/// Bookkeeping shared by every persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordMeta {
    #[serde(default)]
    pub center_id: String,
    #[serde(default)]
    pub counselor_name: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl RecordMeta {
    /// Fresh metadata for a record created now under the given preferences.
    pub fn stamped(preferences: &ClinicPreferences, now: jiff::Timestamp) -> Self {
        Self {
            center_id: preferences.center_id.clone(),
            counselor_name: preferences.counselor_name.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self, now: jiff::Timestamp) {
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birth_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    /// Registered hearing disability. `None` when not asked.
    #[serde(default)]
    pub disability_registered: Option<bool>,
    #[serde(default)]
    pub disability_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub hearing_aid_experience: Option<bool>,
    #[serde(default)]
    pub surgery_history: Option<bool>,
    pub record: RecordMeta,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        preferences: &ClinicPreferences,
        now: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: String::new(),
            gender: None,
            birth_date: None,
            address: None,
            guardian_name: None,
            guardian_phone: None,
            disability_registered: None,
            disability_date: None,
            hearing_aid_experience: None,
            surgery_history: None,
            record: RecordMeta::stamped(preferences, now),
        }
    }

    /// Age in whole years on `on`, if the birth date is known.
    pub fn age_on(&self, on: jiff::civil::Date) -> Option<i16> {
        let birth = self.birth_date?;
        let mut years = on.year() - birth.year();
        if (on.month(), on.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        Some(years)
    }
}
