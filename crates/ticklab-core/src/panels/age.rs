//! Age checker panel.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Age of majority.
pub const LEGAL_AGE: u64 = 18;
/// First senior age.
pub const SENIOR_AGE: u64 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Minor,
    Adult,
    Senior,
}

impl AgeGroup {
    pub fn for_age(age: u64) -> Self {
        if age < LEGAL_AGE {
            AgeGroup::Minor
        } else if age < SENIOR_AGE {
            AgeGroup::Adult
        } else {
            AgeGroup::Senior
        }
    }

    /// Panel color for this group.
    pub fn color(self) -> &'static str {
        match self {
            AgeGroup::Minor => "#d69e2e",
            AgeGroup::Adult => "#38a169",
            AgeGroup::Senior => "#3182ce",
        }
    }

    pub fn is_adult(self) -> bool {
        !matches!(self, AgeGroup::Minor)
    }
}

/// Result of one age check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeReport {
    pub age: u64,
    pub group: AgeGroup,
    pub is_adult: bool,
    /// Panel text, e.g. `You are 30 years old - You are an adult.`
    pub message: String,
    /// Follow-up line logged alongside the panel text.
    pub status: String,
    pub color: String,
}

/// Classify raw user input into an [`AgeReport`].
///
/// Empty or non-numeric input and negative ages are rejected with the
/// message the panel shows.
pub fn classify(input: &str) -> Result<AgeReport, ValidationError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field: "age".into(),
    })?;
    if value < 0 {
        return Err(ValidationError::Negative {
            field: "Age".into(),
        });
    }
    // Non-negative i64 widens losslessly.
    let age = value as u64;
    let group = AgeGroup::for_age(age);
    let noun = match group {
        AgeGroup::Minor => "a minor",
        AgeGroup::Adult => "an adult",
        AgeGroup::Senior => "a senior",
    };
    let status = if group.is_adult() {
        "Welcome adult user!"
    } else {
        "Parental guidance recommended"
    };
    Ok(AgeReport {
        age,
        group,
        is_adult: group.is_adult(),
        message: format!("You are {age} years old - You are {noun}."),
        status: status.to_string(),
        color: group.color().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_below_legal_age() {
        let report = classify("17").unwrap();
        assert_eq!(report.group, AgeGroup::Minor);
        assert!(!report.is_adult);
        assert_eq!(report.message, "You are 17 years old - You are a minor.");
        assert_eq!(report.status, "Parental guidance recommended");
        assert_eq!(report.color, "#d69e2e");
    }

    #[test]
    fn adult_from_eighteen_to_sixty_four() {
        assert_eq!(classify("18").unwrap().group, AgeGroup::Adult);
        assert_eq!(classify("64").unwrap().group, AgeGroup::Adult);
        let report = classify("30").unwrap();
        assert!(report.is_adult);
        assert_eq!(report.status, "Welcome adult user!");
    }

    #[test]
    fn senior_from_sixty_five() {
        let report = classify("65").unwrap();
        assert_eq!(report.group, AgeGroup::Senior);
        assert!(report.is_adult);
        assert_eq!(report.color, "#3182ce");
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        for input in ["", "   ", "abc", "12.5"] {
            let err = classify(input).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a valid age!", "{input:?}");
        }
    }

    #[test]
    fn rejects_negative() {
        let err = classify("-3").unwrap_err();
        assert_eq!(err.to_string(), "Age cannot be negative!");
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(classify(" 21 ").unwrap().age, 21);
    }

    #[test]
    fn very_large_age_is_senior_not_truncated() {
        let report = classify("4294967296").unwrap();
        assert_eq!(report.age, 4_294_967_296);
        assert_eq!(report.group, AgeGroup::Senior);
        assert_eq!(
            report.message,
            "You are 4294967296 years old - You are a senior."
        );
    }
}
