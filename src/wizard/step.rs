//! The five registration steps

use std::fmt;

/// One page of the registration form, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Personal,
    Contact,
    Academic,
    Family,
    Employment,
}

/// Where a step stands relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Personal,
        Step::Contact,
        Step::Academic,
        Step::Family,
        Step::Employment,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn first() -> Self {
        Step::Personal
    }

    pub fn last() -> Self {
        Step::Employment
    }

    /// 1-based position
    pub fn number(&self) -> usize {
        match self {
            Self::Personal => 1,
            Self::Contact => 2,
            Self::Academic => 3,
            Self::Family => 4,
            Self::Employment => 5,
        }
    }

    /// Step at a 1-based position
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_last(&self) -> bool {
        *self == Self::last()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal info",
            Self::Contact => "Contact info",
            Self::Academic => "Academic info",
            Self::Family => "Family info",
            Self::Employment => "Employment history",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Personal => "Basic information",
            Self::Contact => "Contact details",
            Self::Academic => "Education background",
            Self::Family => "Family details",
            Self::Employment => "Work experience",
        }
    }

    /// Parse a section name as used on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "personal" | "personal-info" | "personal_info" => Some(Self::Personal),
            "contact" | "contact-info" | "contact_info" => Some(Self::Contact),
            "academic" | "academic-info" | "academic_info" => Some(Self::Academic),
            "family" | "family-info" | "family_info" => Some(Self::Family),
            "employment" | "employment-history" | "employment_history" => {
                Some(Self::Employment)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
