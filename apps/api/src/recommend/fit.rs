//! Fit Calculator: the four independent [0,1] sub-scores between one user
//! profile and one job profile, plus their weighted combination.
//!
//! Pure functions throughout — no cross-job state, recomputed per job.

use serde::Serialize;

use crate::catalog::JobProfile;
use crate::quiz::models::{BigFiveFactor, BigFiveVector, HollandDim, HollandVector};
use crate::quiz::preferences::Preferences;

/// Weights for combining the four sub-scores into a total. Fixed at compile
/// time, not configurable at runtime.
#[derive(Debug, Clone, Copy)]
pub struct FitWeights {
    pub holland: f64,
    pub big_five: f64,
    pub industry: f64,
    pub activity: f64,
}

impl FitWeights {
    pub fn sum(&self) -> f64 {
        self.holland + self.big_five + self.industry + self.activity
    }
}

pub const FIT_WEIGHTS: FitWeights = FitWeights {
    holland: 0.3,
    big_five: 0.3,
    industry: 0.2,
    activity: 0.2,
};

/// The four sub-scores and their weighted total for a single job. All fields
/// are in [0,1].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitBreakdown {
    pub holland_fit: f64,
    pub big_five_fit: f64,
    pub industry_fit: f64,
    pub activity_fit: f64,
    pub total_fit: f64,
}

/// Scores one job against a complete user profile.
pub fn compute_fit(
    user_holland: &HollandVector,
    user_big_five: &BigFiveVector,
    preferences: &Preferences,
    job: &JobProfile,
) -> FitBreakdown {
    let holland_fit = holland_similarity(user_holland, &job.holland);
    let big_five_fit = big_five_similarity(user_big_five, &job.big_five);
    let industry_fit = industry_fit(&preferences.industries, job.industry);
    let activity_fit = activity_fit(&preferences.activities, job.keywords);

    let total_fit = FIT_WEIGHTS.holland * holland_fit
        + FIT_WEIGHTS.big_five * big_five_fit
        + FIT_WEIGHTS.industry * industry_fit
        + FIT_WEIGHTS.activity * activity_fit;

    FitBreakdown {
        holland_fit,
        big_five_fit,
        industry_fit,
        activity_fit,
        total_fit,
    }
}

/// Bounded similarity from Euclidean distance: `1 / (1 + d)`. Always in
/// (0,1], exactly 1 only at zero distance, no divide-by-zero.
fn similarity_from_squared_distance(squared: f64) -> f64 {
    1.0 / (1.0 + squared.sqrt())
}

pub fn holland_similarity(user: &HollandVector, job: &HollandVector) -> f64 {
    let squared: f64 = HollandDim::ALL
        .iter()
        .map(|&dim| {
            let delta = f64::from(user.get(dim) - job.get(dim));
            delta * delta
        })
        .sum();
    similarity_from_squared_distance(squared)
}

pub fn big_five_similarity(user: &BigFiveVector, job: &BigFiveVector) -> f64 {
    let squared: f64 = BigFiveFactor::ALL
        .iter()
        .map(|&factor| {
            let delta = f64::from(user.get(factor) - job.get(factor));
            delta * delta
        })
        .sum();
    similarity_from_squared_distance(squared)
}

/// Binary industry match: 1.0 iff the job's industry label case-insensitively
/// contains any preferred industry string. The test is deliberately one-way
/// (label contains preference, never the reverse). Empty preferences give 0.
pub fn industry_fit(preferred: &[String], job_industry: &str) -> f64 {
    if preferred.is_empty() {
        return 0.0;
    }
    let label = job_industry.to_lowercase();
    let matched = preferred
        .iter()
        .any(|pref| label.contains(&pref.to_lowercase()));
    if matched {
        1.0
    } else {
        0.0
    }
}

/// Proportional keyword overlap: the share of user activities with at least
/// one containment match (either direction) against the job's keywords.
/// No activities or no keywords gives 0.
pub fn activity_fit(activities: &[String], keywords: &[&str]) -> f64 {
    if activities.is_empty() || keywords.is_empty() {
        return 0.0;
    }
    let keywords_lower: Vec<String> = keywords.iter().map(|kw| kw.to_lowercase()).collect();
    let matches = activities
        .iter()
        .map(|a| a.to_lowercase())
        .filter(|activity| {
            keywords_lower
                .iter()
                .any(|kw| activity.contains(kw.as_str()) || kw.contains(activity.as_str()))
        })
        .count();
    matches as f64 / activities.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{JobProfile, JOB_PROFILES};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn empty_prefs() -> Preferences {
        Preferences {
            industries: vec![],
            activities: vec![],
        }
    }

    fn electrician() -> &'static JobProfile {
        JobProfile::by_title("Electrician").unwrap()
    }

    #[test]
    fn test_identical_vectors_score_exactly_one() {
        let job = electrician();
        assert_eq!(holland_similarity(&job.holland, &job.holland), 1.0);
        assert_eq!(big_five_similarity(&job.big_five, &job.big_five), 1.0);
    }

    #[test]
    fn test_similarity_strictly_below_one_for_any_distance() {
        let user = HollandVector::new(2, 5, 3, 1, 2, 4);
        let mut nudged = user;
        nudged.realistic += 1;
        let fit = holland_similarity(&user, &nudged);
        assert!(fit < 1.0);
        assert!(fit > 0.0);
    }

    #[test]
    fn test_similarity_decreases_with_distance() {
        let user = HollandVector::default();
        let near = HollandVector::new(1, 0, 0, 0, 0, 0);
        let far = HollandVector::new(5, 5, 5, 5, 5, 5);
        assert!(holland_similarity(&user, &near) > holland_similarity(&user, &far));
    }

    #[test]
    fn test_electrician_holland_fit_from_all_ones_answers() {
        // HollandVector from all-1 answers is {2,2,2,2,2,2}; against the
        // Electrician reference {5,3,1,2,2,4} the squared distance is
        // 9+1+1+0+0+4 = 15, so fit = 1 / (1 + sqrt(15)).
        let user = HollandVector::new(2, 2, 2, 2, 2, 2);
        let fit = holland_similarity(&user, &electrician().holland);
        let expected = 1.0 / (1.0 + 15.0_f64.sqrt());
        assert!((fit - expected).abs() < 1e-12);
        assert!((fit - 0.2052).abs() < 1e-3);
    }

    #[test]
    fn test_industry_fit_case_insensitive_substring() {
        assert_eq!(industry_fit(&strings(&["tech"]), "Technology"), 1.0);
        assert_eq!(industry_fit(&strings(&["HEALTHCARE"]), "Healthcare"), 1.0);
    }

    #[test]
    fn test_industry_fit_zero_without_preferences_or_match() {
        assert_eq!(industry_fit(&[], "Technology"), 0.0);
        assert_eq!(industry_fit(&strings(&["Finance"]), "Technology"), 0.0);
    }

    #[test]
    fn test_industry_fit_is_one_way_only() {
        // The preference containing the label does not count; only the label
        // containing the preference does.
        assert_eq!(
            industry_fit(&strings(&["Technology and Media"]), "Technology"),
            0.0
        );
    }

    #[test]
    fn test_activity_fit_requires_substring_relation() {
        // "coding" has no substring relation with "programming"...
        assert_eq!(activity_fit(&strings(&["coding"]), &["programming"]), 0.0);
        // ...but matches the literal keyword in either direction.
        assert_eq!(activity_fit(&strings(&["coding"]), &["coding"]), 1.0);
        assert_eq!(activity_fit(&strings(&["love coding daily"]), &["coding"]), 1.0);
        assert_eq!(activity_fit(&strings(&["code"]), &["coding"]), 0.0);
        assert_eq!(activity_fit(&strings(&["cod"]), &["coding"]), 1.0);
    }

    #[test]
    fn test_activity_fit_is_proportional() {
        let activities = strings(&["coding", "gardening", "analysis", "surfing"]);
        let fit = activity_fit(&activities, &["coding", "analysis", "design"]);
        assert_eq!(fit, 0.5);
    }

    #[test]
    fn test_activity_fit_zero_edges() {
        assert_eq!(activity_fit(&[], &["coding"]), 0.0);
        assert_eq!(activity_fit(&strings(&["coding"]), &[]), 0.0);
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((FIT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_fit_is_the_weighted_combination() {
        let user_h = HollandVector::new(2, 2, 2, 2, 2, 2);
        let user_b5 = BigFiveVector::new(7, 7, 7, 7, 7);
        let prefs = Preferences {
            industries: strings(&["Construction"]),
            activities: strings(&["repair work"]),
        };
        let fit = compute_fit(&user_h, &user_b5, &prefs, electrician());
        let expected = 0.3 * fit.holland_fit
            + 0.3 * fit.big_five_fit
            + 0.2 * fit.industry_fit
            + 0.2 * fit.activity_fit;
        assert!((fit.total_fit - expected).abs() < 1e-12);
        assert_eq!(fit.industry_fit, 1.0);
        assert_eq!(fit.activity_fit, 1.0);
    }

    #[test]
    fn test_empty_preferences_never_error() {
        for job in JOB_PROFILES {
            let fit = compute_fit(
                &HollandVector::default(),
                &BigFiveVector::default(),
                &empty_prefs(),
                job,
            );
            assert_eq!(fit.industry_fit, 0.0);
            assert_eq!(fit.activity_fit, 0.0);
            assert!(fit.total_fit >= 0.0 && fit.total_fit <= 1.0);
        }
    }
}
