//! Preference Normalizer: the boundary that sanitizes raw preference input.
//!
//! Validation runs on the raw submission (before normalization) and mirrors
//! the two independent required-input checks of the collection flow: at least
//! one industry (checkbox or manual) AND at least one non-blank activity.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Maximum number of free-text activity strings accepted per submission.
pub const MAX_ACTIVITIES: usize = 3;

/// Normalized user preferences as persisted and fed to the fit calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected + manually entered industries. Case-preserving; duplicates
    /// across checkbox and manual entry are allowed.
    pub industries: Vec<String>,
    /// Up to three non-blank activity strings, original order preserved.
    pub activities: Vec<String>,
}

/// Rejects a raw submission that fails either required-input check.
/// Both checks are independent: industries present but no activities still
/// fails, and vice versa.
pub fn validate_submission(
    selected_industries: &[String],
    other_industry: &str,
    activities: &[String],
) -> Result<(), AppError> {
    if activities.len() > MAX_ACTIVITIES {
        return Err(AppError::Validation(format!(
            "At most {MAX_ACTIVITIES} preferred activities are accepted"
        )));
    }
    if selected_industries.is_empty() && other_industry.trim().is_empty() {
        return Err(AppError::Validation(
            "Select at least one preferred industry or enter one manually".to_string(),
        ));
    }
    if activities.iter().all(|a| a.trim().is_empty()) {
        return Err(AppError::Validation(
            "Enter at least one preferred activity".to_string(),
        ));
    }
    Ok(())
}

/// Builds the normalized `Preferences` value from raw input: the trimmed
/// manual industry (if any) is appended to the checkbox selections, and blank
/// activities are dropped without reordering the rest.
pub fn normalize(
    selected_industries: &[String],
    other_industry: &str,
    activities: &[String],
) -> Preferences {
    let mut industries = selected_industries.to_vec();
    let other = other_industry.trim();
    if !other.is_empty() {
        industries.push(other.to_string());
    }

    // Blank entries are dropped; kept entries stay exactly as typed.
    let activities = activities
        .iter()
        .filter(|a| !a.trim().is_empty())
        .cloned()
        .collect();

    Preferences {
        industries,
        activities,
    }
}
