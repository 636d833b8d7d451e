//! Inputs a validator needs that do not come from the draft itself

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::StudentTempId;

/// Earliest year accepted in any year field
pub const YEAR_MIN: i32 = 1900;

/// Session-level context for the section validators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Pending id used for every missing `student_id`
    pub student_temp_id: StudentTempId,
    /// Timestamp stamped on new records
    pub now: DateTime<Utc>,
    /// How far past the current year a year field may go
    pub year_horizon: u16,
}

impl ValidationContext {
    pub fn new(student_temp_id: StudentTempId, year_horizon: u16) -> Self {
        Self::at(student_temp_id, year_horizon, Utc::now())
    }

    /// Context pinned to a fixed clock
    pub fn at(student_temp_id: StudentTempId, year_horizon: u16, now: DateTime<Utc>) -> Self {
        Self {
            student_temp_id,
            now,
            year_horizon,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Latest year accepted in any year field
    pub fn max_year(&self) -> i32 {
        self.now.year() + i32::from(self.year_horizon)
    }

    pub fn temp_key(&self) -> String {
        self.student_temp_id.as_key()
    }
}
