//! Shared enums for lifetrack records.
//!
//! Each enum round-trips through the string literal stored in the
//! database, so `as_str`/`from_str` must stay in sync with the serde
//! renames.

use serde::{Deserialize, Serialize};

/// Todo priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Habit recurrence period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Eisenhower matrix quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

impl Quadrant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UrgentImportant => "urgent-important",
            Self::NotUrgentImportant => "not-urgent-important",
            Self::UrgentNotImportant => "urgent-not-important",
            Self::NotUrgentNotImportant => "not-urgent-not-important",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "urgent-important" => Some(Self::UrgentImportant),
            "not-urgent-important" => Some(Self::NotUrgentImportant),
            "urgent-not-important" => Some(Self::UrgentNotImportant),
            "not-urgent-not-important" => Some(Self::NotUrgentNotImportant),
            _ => None,
        }
    }

    /// All four quadrants in matrix order.
    pub fn all() -> [Self; 4] {
        [
            Self::UrgentImportant,
            Self::NotUrgentImportant,
            Self::UrgentNotImportant,
            Self::NotUrgentNotImportant,
        ]
    }
}

/// How a run felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Excellent,
    Good,
    Okay,
    Tough,
    Struggled,
}

impl Feeling {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Okay => "okay",
            Self::Tough => "tough",
            Self::Struggled => "struggled",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "okay" => Some(Self::Okay),
            "tough" => Some(Self::Tough),
            "struggled" => Some(Self::Struggled),
            _ => None,
        }
    }
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// First day of the week preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "sunday" => Some(Self::Sunday),
            "monday" => Some(Self::Monday),
            _ => None,
        }
    }
}

/// Measurement unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "metric" => Some(Self::Metric),
            "imperial" => Some(Self::Imperial),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quadrant_round_trips_wire_literals() {
        for quadrant in Quadrant::all() {
            assert_eq!(Quadrant::from_str(quadrant.as_str()), Some(quadrant));
        }
        assert_eq!(Quadrant::UrgentImportant.as_str(), "urgent-important");
        assert_eq!(Quadrant::from_str("do-first"), None);
    }

    #[test]
    fn quadrant_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Quadrant::NotUrgentImportant).unwrap();
        assert_eq!(json, "\"not-urgent-important\"");
    }

    #[test]
    fn priority_round_trips() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_str(p.as_str()), Some(p));
        }
        assert_eq!(Priority::from_str("urgent"), None);
    }

    #[test]
    fn feeling_round_trips() {
        for f in [
            Feeling::Excellent,
            Feeling::Good,
            Feeling::Okay,
            Feeling::Tough,
            Feeling::Struggled,
        ] {
            assert_eq!(Feeling::from_str(f.as_str()), Some(f));
        }
    }

    #[test]
    fn frequency_round_trips() {
        for f in [Frequency::Daily, Frequency::Weekly, Frequency::Monthly] {
            assert_eq!(Frequency::from_str(f.as_str()), Some(f));
        }
    }
}
