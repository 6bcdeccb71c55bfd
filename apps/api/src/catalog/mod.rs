//! Static quiz and job-profile data.
//!
//! Fixed at compile time and treated as immutable everywhere: the scoring
//! engine only reads from these tables and never loads data from disk or
//! network itself.

use serde::Serialize;

use crate::quiz::models::{
    BigFiveFactor, BigFiveQuestion, BigFiveVector, HollandDim, HollandQuestion, HollandVector,
};

/// One job in the static catalog. Reference vectors use roughly 1–5 weights
/// per dimension; keywords are lowercase for containment matching.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub holland: HollandVector,
    pub big_five: BigFiveVector,
    pub industry: &'static str,
    pub keywords: &'static [&'static str],
}

impl JobProfile {
    /// Case-sensitive title lookup (titles are unique in the catalog).
    pub fn by_title(title: &str) -> Option<&'static JobProfile> {
        JOB_PROFILES.iter().find(|j| j.title == title)
    }
}

/// RIASEC inventory: two questions per dimension, ids h1–h12.
pub const HOLLAND_QUESTIONS: &[HollandQuestion] = &[
    HollandQuestion {
        id: "h1",
        text: "I enjoy building or repairing things with my hands.",
        dimension: HollandDim::Realistic,
    },
    HollandQuestion {
        id: "h2",
        text: "I like to analyze data and solve complex problems.",
        dimension: HollandDim::Investigative,
    },
    HollandQuestion {
        id: "h3",
        text: "I prefer activities that involve artistic expression, like writing or painting.",
        dimension: HollandDim::Artistic,
    },
    HollandQuestion {
        id: "h4",
        text: "I enjoy helping, teaching, or counseling others.",
        dimension: HollandDim::Social,
    },
    HollandQuestion {
        id: "h5",
        text: "I like to lead, persuade, or manage people.",
        dimension: HollandDim::Enterprising,
    },
    HollandQuestion {
        id: "h6",
        text: "I am good at organizing information and paying attention to details.",
        dimension: HollandDim::Conventional,
    },
    HollandQuestion {
        id: "h7",
        text: "I am interested in how machines work and enjoy hands-on tasks.",
        dimension: HollandDim::Realistic,
    },
    HollandQuestion {
        id: "h8",
        text: "I enjoy conducting research and exploring new theories.",
        dimension: HollandDim::Investigative,
    },
    HollandQuestion {
        id: "h9",
        text: "I like to express my originality and creativity.",
        dimension: HollandDim::Artistic,
    },
    HollandQuestion {
        id: "h10",
        text: "I feel a strong desire to serve the community and support others.",
        dimension: HollandDim::Social,
    },
    HollandQuestion {
        id: "h11",
        text: "I am comfortable taking risks and initiating projects.",
        dimension: HollandDim::Enterprising,
    },
    HollandQuestion {
        id: "h12",
        text: "I value precision and enjoy working with numbers and records.",
        dimension: HollandDim::Conventional,
    },
];

/// OCEAN inventory: three questions per factor, ids b1–b15.
/// b3, b6, b9, b12 and b15 are reverse-coded.
pub const BIG_FIVE_QUESTIONS: &[BigFiveQuestion] = &[
    BigFiveQuestion {
        id: "b1",
        text: "I have a vivid imagination.",
        factor: BigFiveFactor::Openness,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b2",
        text: "I am interested in abstract ideas.",
        factor: BigFiveFactor::Openness,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b3",
        text: "I avoid philosophical discussions.",
        factor: BigFiveFactor::Openness,
        reverse: true,
    },
    BigFiveQuestion {
        id: "b4",
        text: "I am always prepared.",
        factor: BigFiveFactor::Conscientiousness,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b5",
        text: "I pay attention to details.",
        factor: BigFiveFactor::Conscientiousness,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b6",
        text: "I often forget to put things back in their proper place.",
        factor: BigFiveFactor::Conscientiousness,
        reverse: true,
    },
    BigFiveQuestion {
        id: "b7",
        text: "I am the life of the party.",
        factor: BigFiveFactor::Extraversion,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b8",
        text: "I talk to a lot of different people at parties.",
        factor: BigFiveFactor::Extraversion,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b9",
        text: "I tend to be quiet around strangers.",
        factor: BigFiveFactor::Extraversion,
        reverse: true,
    },
    BigFiveQuestion {
        id: "b10",
        text: "I feel others' emotions.",
        factor: BigFiveFactor::Agreeableness,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b11",
        text: "I make people feel at ease.",
        factor: BigFiveFactor::Agreeableness,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b12",
        text: "I tend to find fault with others.",
        factor: BigFiveFactor::Agreeableness,
        reverse: true,
    },
    BigFiveQuestion {
        id: "b13",
        text: "I get stressed out easily.",
        factor: BigFiveFactor::Neuroticism,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b14",
        text: "I worry about things.",
        factor: BigFiveFactor::Neuroticism,
        reverse: false,
    },
    BigFiveQuestion {
        id: "b15",
        text: "I am relaxed most of the time.",
        factor: BigFiveFactor::Neuroticism,
        reverse: true,
    },
];

/// Industry checklist offered on the preferences screen. Users may also type
/// a free-text industry, so preferences are not restricted to this list.
pub const TOP_INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Education",
    "Finance",
    "Manufacturing",
    "Retail",
    "Hospitality",
    "Construction",
    "Arts & Entertainment",
    "Government",
];

/// The job catalog ranked by the recommendation engine. Illustrative rather
/// than exhaustive occupational data.
pub const JOB_PROFILES: &[JobProfile] = &[
    JobProfile {
        title: "Software Developer",
        description: "Designs, develops, and maintains software applications.",
        holland: HollandVector::new(2, 5, 3, 1, 2, 4),
        big_five: BigFiveVector::new(4, 5, 2, 3, 2),
        industry: "Technology",
        keywords: &[
            "coding",
            "programming",
            "logic",
            "problem-solving",
            "design",
            "development",
            "analysis",
            "algorithms",
        ],
    },
    JobProfile {
        title: "Graphic Designer",
        description: "Creates visual concepts using computer software or by hand to communicate \
                      ideas that inspire, inform, or captivate consumers.",
        holland: HollandVector::new(1, 2, 5, 3, 2, 1),
        big_five: BigFiveVector::new(5, 3, 3, 4, 3),
        industry: "Arts & Entertainment",
        keywords: &[
            "design",
            "creativity",
            "visuals",
            "art",
            "drawing",
            "illustration",
            "software",
            "communication",
        ],
    },
    JobProfile {
        title: "Registered Nurse",
        description: "Provides and coordinates patient care, educates patients and the public \
                      about various health conditions, and provides advice and emotional support \
                      to patients and their family members.",
        holland: HollandVector::new(2, 3, 1, 5, 2, 4),
        big_five: BigFiveVector::new(3, 4, 3, 5, 3),
        industry: "Healthcare",
        keywords: &[
            "patient care",
            "helping",
            "counseling",
            "medical",
            "health",
            "support",
            "communication",
            "problem-solving",
        ],
    },
    JobProfile {
        title: "Accountant",
        description: "Prepares and examines financial records, ensures that financial records \
                      are accurate and that taxes are paid properly and on time.",
        holland: HollandVector::new(1, 3, 1, 2, 3, 5),
        big_five: BigFiveVector::new(2, 5, 3, 3, 2),
        industry: "Finance",
        keywords: &[
            "numbers",
            "data",
            "organizing",
            "analysis",
            "records",
            "details",
            "finance",
            "tax",
        ],
    },
    JobProfile {
        title: "Marketing Manager",
        description: "Plans, directs, or coordinates marketing policies and programs, such as \
                      determining the demand for products and services offered by a firm and \
                      its competitors.",
        holland: HollandVector::new(1, 2, 3, 4, 5, 2),
        big_five: BigFiveVector::new(4, 4, 5, 4, 2),
        industry: "Retail",
        keywords: &[
            "leading",
            "persuading",
            "strategy",
            "communication",
            "sales",
            "marketing",
            "creativity",
            "management",
        ],
    },
    JobProfile {
        title: "Electrician",
        description: "Installs, maintains, and repairs electrical wiring, equipment, and fixtures.",
        holland: HollandVector::new(5, 3, 1, 2, 2, 4),
        big_five: BigFiveVector::new(2, 5, 2, 3, 2),
        industry: "Construction",
        keywords: &[
            "hands-on",
            "repair",
            "installation",
            "technical",
            "electrical",
            "building",
            "problem-solving",
            "tools",
        ],
    },
    JobProfile {
        title: "Research Scientist",
        description: "Conducts experiments and investigations to test hypotheses and develop \
                      new knowledge.",
        holland: HollandVector::new(3, 5, 2, 1, 2, 4),
        big_five: BigFiveVector::new(5, 4, 2, 3, 2),
        industry: "Education",
        keywords: &[
            "research",
            "experiments",
            "analysis",
            "investigation",
            "theories",
            "problem-solving",
            "data",
            "writing",
        ],
    },
    JobProfile {
        title: "Teacher (High School)",
        description: "Instructs students in a variety of academic subjects in public or private \
                      secondary schools.",
        holland: HollandVector::new(1, 3, 3, 5, 2, 2),
        big_five: BigFiveVector::new(4, 4, 4, 5, 3),
        industry: "Education",
        keywords: &[
            "teaching",
            "educating",
            "helping",
            "communication",
            "planning",
            "mentoring",
            "classroom",
            "public speaking",
        ],
    },
    JobProfile {
        title: "Financial Analyst",
        description: "Guides businesses and individuals in making investment decisions.",
        holland: HollandVector::new(1, 4, 1, 2, 4, 5),
        big_five: BigFiveVector::new(3, 5, 4, 3, 2),
        industry: "Finance",
        keywords: &[
            "finance",
            "investment",
            "analysis",
            "numbers",
            "data",
            "advising",
            "strategy",
            "markets",
        ],
    },
    JobProfile {
        title: "Social Worker",
        description: "Helps people cope with challenges in their lives, provides support and \
                      resources.",
        holland: HollandVector::new(1, 2, 3, 5, 2, 1),
        big_five: BigFiveVector::new(4, 3, 3, 5, 4),
        industry: "Healthcare",
        keywords: &[
            "helping",
            "counseling",
            "support",
            "community",
            "advocacy",
            "communication",
            "problem-solving",
            "empathy",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_holland_questions_per_dimension() {
        for dim in HollandDim::ALL {
            let count = HOLLAND_QUESTIONS
                .iter()
                .filter(|q| q.dimension == dim)
                .count();
            assert_eq!(count, 2, "dimension {dim:?} has {count} questions");
        }
        assert_eq!(HOLLAND_QUESTIONS.len(), 12);
    }

    #[test]
    fn test_three_big_five_questions_per_factor() {
        for factor in BigFiveFactor::ALL {
            let count = BIG_FIVE_QUESTIONS
                .iter()
                .filter(|q| q.factor == factor)
                .count();
            assert_eq!(count, 3, "factor {factor:?} has {count} questions");
        }
        assert_eq!(BIG_FIVE_QUESTIONS.len(), 15);
    }

    #[test]
    fn test_reverse_coded_ids() {
        let reversed: Vec<&str> = BIG_FIVE_QUESTIONS
            .iter()
            .filter(|q| q.reverse)
            .map(|q| q.id)
            .collect();
        assert_eq!(reversed, vec!["b3", "b6", "b9", "b12", "b15"]);
    }

    #[test]
    fn test_question_ids_unique() {
        let mut ids: Vec<&str> = HOLLAND_QUESTIONS
            .iter()
            .map(|q| q.id)
            .chain(BIG_FIVE_QUESTIONS.iter().map(|q| q.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_catalog_has_ten_jobs_with_keywords() {
        assert_eq!(JOB_PROFILES.len(), 10);
        for job in JOB_PROFILES {
            assert!(!job.keywords.is_empty(), "{} has no keywords", job.title);
            assert!(!job.industry.is_empty());
        }
    }

    #[test]
    fn test_job_titles_unique() {
        let mut titles: Vec<&str> = JOB_PROFILES.iter().map(|j| j.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), JOB_PROFILES.len());
    }

    #[test]
    fn test_by_title_lookup() {
        assert!(JobProfile::by_title("Electrician").is_some());
        assert!(JobProfile::by_title("electrician").is_none());
        assert!(JobProfile::by_title("Astronaut").is_none());
    }
}
