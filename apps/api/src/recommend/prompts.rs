// Recommendation enrichment prompt builders.
// All prompts for the recommend module are defined here.

use crate::quiz::models::{BigFiveFactor, BigFiveVector, HollandDim, HollandVector};
use crate::quiz::preferences::Preferences;

/// Serializes both trait vectors and the preferences into the compact
/// natural-language summary the advice prompt embeds ("R: 2, I: 5, ...").
pub fn profile_summary(
    holland: &HollandVector,
    big_five: &BigFiveVector,
    preferences: &Preferences,
) -> String {
    let holland_scores = HollandDim::ALL
        .iter()
        .map(|&d| format!("{}: {}", d.letter(), holland.get(d)))
        .collect::<Vec<_>>()
        .join(", ");
    let big_five_scores = BigFiveFactor::ALL
        .iter()
        .map(|&f| format!("{}: {}", f.letter(), big_five.get(f)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut summary = format!(
        "Holland Code scores ({holland_scores}), Big Five personality scores ({big_five_scores})"
    );
    if !preferences.industries.is_empty() {
        summary.push_str(&format!(
            ". Preferred Industries: {}",
            preferences.industries.join(", ")
        ));
    }
    if !preferences.activities.is_empty() {
        summary.push_str(&format!(
            ". Preferred Activities: {}",
            preferences.activities.join(", ")
        ));
    }
    summary
}

/// The personalized-advice prompt. Spells out both taxonomies so the model
/// does not have to guess what the single-letter keys mean.
pub fn advice_prompt(
    holland: &HollandVector,
    big_five: &BigFiveVector,
    preferences: &Preferences,
) -> String {
    format!(
        "Given the user's {}, provide personalized career advice. Focus on strengths and \
         general career directions, integrating insights from all provided information. \
         Keep it concise and encouraging. Holland Code types are R (Realistic), \
         I (Investigative), A (Artistic), S (Social), E (Enterprising), C (Conventional). \
         Big Five traits are O (Openness), C (Conscientiousness), E (Extraversion), \
         A (Agreeableness), N (Neuroticism).",
        profile_summary(holland, big_five, preferences)
    )
}

/// The job-description enhancement prompt for one catalog title.
pub fn enhance_description_prompt(job_title: &str) -> String {
    format!(
        "Provide a more detailed and engaging job description for a \"{job_title}\". \
         Include typical responsibilities, required skills, and potential work environments. \
         Keep it professional and concise."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prefs() -> Preferences {
        Preferences {
            industries: vec!["Technology".to_string()],
            activities: vec!["coding".to_string(), "hiking".to_string()],
        }
    }

    #[test]
    fn test_profile_summary_lists_all_dimensions() {
        let summary = profile_summary(
            &HollandVector::new(2, 5, 3, 1, 2, 4),
            &BigFiveVector::new(12, 13, 7, 9, 6),
            &sample_prefs(),
        );
        assert!(summary.contains("R: 2, I: 5, A: 3, S: 1, E: 2, C: 4"));
        assert!(summary.contains("O: 12, C: 13, E: 7, A: 9, N: 6"));
        assert!(summary.contains("Preferred Industries: Technology"));
        assert!(summary.contains("Preferred Activities: coding, hiking"));
    }

    #[test]
    fn test_profile_summary_omits_empty_preference_sections() {
        let summary = profile_summary(
            &HollandVector::default(),
            &BigFiveVector::default(),
            &Preferences {
                industries: vec![],
                activities: vec![],
            },
        );
        assert!(!summary.contains("Preferred Industries"));
        assert!(!summary.contains("Preferred Activities"));
    }

    #[test]
    fn test_advice_prompt_explains_both_taxonomies() {
        let prompt = advice_prompt(
            &HollandVector::default(),
            &BigFiveVector::default(),
            &sample_prefs(),
        );
        assert!(prompt.contains("R (Realistic)"));
        assert!(prompt.contains("N (Neuroticism)"));
    }

    #[test]
    fn test_enhance_prompt_embeds_title() {
        let prompt = enhance_description_prompt("Electrician");
        assert!(prompt.contains("\"Electrician\""));
        assert!(prompt.contains("responsibilities"));
    }
}
