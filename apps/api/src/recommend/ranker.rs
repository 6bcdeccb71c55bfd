//! Recommendation Ranker: scores the whole catalog and returns the top 5.

use serde::Serialize;

use crate::catalog::JobProfile;
use crate::quiz::models::{BigFiveVector, HollandVector};
use crate::quiz::preferences::Preferences;
use crate::recommend::fit::compute_fit;

/// How many jobs a recommendation run returns at most.
pub const TOP_RECOMMENDATIONS: usize = 5;

/// One ranked job: catalog fields plus the per-run fit breakdown. Transient —
/// rebuilt on every run, never written back to the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredJob {
    /// Position in the static catalog, stable across runs.
    pub job_index: usize,
    pub title: String,
    pub description: String,
    pub industry: String,
    pub holland_fit: f64,
    pub big_five_fit: f64,
    pub industry_fit: f64,
    pub activity_fit: f64,
    pub total_fit: f64,
}

/// Scores every catalog job against the user profile and returns up to
/// [`TOP_RECOMMENDATIONS`] entries, descending by total fit. The sort is
/// stable, so equal totals keep catalog order. A short or empty catalog is
/// returned as-is, never an error.
pub fn recommend_jobs(
    catalog: &[JobProfile],
    user_holland: &HollandVector,
    user_big_five: &BigFiveVector,
    preferences: &Preferences,
) -> Vec<ScoredJob> {
    let mut scored: Vec<ScoredJob> = catalog
        .iter()
        .enumerate()
        .map(|(index, job)| {
            let fit = compute_fit(user_holland, user_big_five, preferences, job);
            ScoredJob {
                job_index: index,
                title: job.title.to_string(),
                description: job.description.to_string(),
                industry: job.industry.to_string(),
                holland_fit: fit.holland_fit,
                big_five_fit: fit.big_five_fit,
                industry_fit: fit.industry_fit,
                activity_fit: fit.activity_fit,
                total_fit: fit.total_fit,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.total_fit
            .partial_cmp(&a.total_fit)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(TOP_RECOMMENDATIONS);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JOB_PROFILES;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_profile() -> (HollandVector, BigFiveVector, Preferences) {
        (
            HollandVector::new(2, 5, 3, 1, 2, 4),
            BigFiveVector::new(12, 13, 7, 9, 6),
            Preferences {
                industries: strings(&["Technology"]),
                activities: strings(&["coding", "analysis"]),
            },
        )
    }

    #[test]
    fn test_full_catalog_returns_top_five_sorted() {
        let (h, b5, prefs) = sample_profile();
        let ranked = recommend_jobs(JOB_PROFILES, &h, &b5, &prefs);
        assert_eq!(ranked.len(), TOP_RECOMMENDATIONS);
        for pair in ranked.windows(2) {
            assert!(pair[0].total_fit >= pair[1].total_fit);
        }
    }

    #[test]
    fn test_short_catalog_returns_all_jobs() {
        let (h, b5, prefs) = sample_profile();
        let short = &JOB_PROFILES[..3];
        let ranked = recommend_jobs(short, &h, &b5, &prefs);
        assert_eq!(ranked.len(), 3);
        let mut indices: Vec<usize> = ranked.iter().map(|j| j.job_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_catalog_returns_empty_list() {
        let (h, b5, prefs) = sample_profile();
        assert!(recommend_jobs(&[], &h, &b5, &prefs).is_empty());
    }

    #[test]
    fn test_runs_are_deterministic() {
        let (h, b5, prefs) = sample_profile();
        let first = recommend_jobs(JOB_PROFILES, &h, &b5, &prefs);
        let second = recommend_jobs(JOB_PROFILES, &h, &b5, &prefs);
        let first_keys: Vec<(usize, f64)> =
            first.iter().map(|j| (j.job_index, j.total_fit)).collect();
        let second_keys: Vec<(usize, f64)> =
            second.iter().map(|j| (j.job_index, j.total_fit)).collect();
        assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Two copies of the same job score identically; the stable sort must
        // keep the lower catalog index first.
        let duplicated = [JOB_PROFILES[0], JOB_PROFILES[0], JOB_PROFILES[1]];
        let (h, b5, prefs) = sample_profile();
        let ranked = recommend_jobs(&duplicated, &h, &b5, &prefs);
        let dup_positions: Vec<usize> = ranked
            .iter()
            .filter(|j| j.title == JOB_PROFILES[0].title)
            .map(|j| j.job_index)
            .collect();
        assert_eq!(dup_positions, vec![0, 1]);
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        // The catalog is a shared immutable input; scoring borrows it and
        // produces fresh values.
        let before: Vec<&str> = JOB_PROFILES.iter().map(|j| j.title).collect();
        let (h, b5, prefs) = sample_profile();
        let _ = recommend_jobs(JOB_PROFILES, &h, &b5, &prefs);
        let after: Vec<&str> = JOB_PROFILES.iter().map(|j| j.title).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_industry_preference_lifts_matching_job() {
        let h = HollandVector::new(6, 6, 6, 6, 6, 6);
        let b5 = BigFiveVector::new(9, 9, 9, 9, 9);
        let prefs = Preferences {
            industries: strings(&["Construction"]),
            activities: strings(&["hands-on repair"]),
        };
        let ranked = recommend_jobs(JOB_PROFILES, &h, &b5, &prefs);
        // The Electrician is the only Construction job and matches both
        // activity keywords, so it must come out on top.
        assert_eq!(ranked[0].title, "Electrician");
    }
}
