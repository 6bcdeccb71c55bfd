//! Typed trait vectors for the two inventories.
//!
//! Both vectors are closed structs — one field per dimension — so a complete,
//! correctly-named score set is guaranteed at compile time. They serialize to
//! the single-letter-keyed JSON shape stored in `career_profiles`
//! (`{"R": 2, "I": 2, ...}`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One answer set: question id → Likert score (1–5).
/// Completeness is validated at the HTTP boundary; the scorer treats a
/// missing id as 0.
pub type AnswerSet = HashMap<String, i32>;

/// The six RIASEC interest dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HollandDim {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl HollandDim {
    pub const ALL: [HollandDim; 6] = [
        HollandDim::Realistic,
        HollandDim::Investigative,
        HollandDim::Artistic,
        HollandDim::Social,
        HollandDim::Enterprising,
        HollandDim::Conventional,
    ];

    pub fn letter(self) -> char {
        match self {
            HollandDim::Realistic => 'R',
            HollandDim::Investigative => 'I',
            HollandDim::Artistic => 'A',
            HollandDim::Social => 'S',
            HollandDim::Enterprising => 'E',
            HollandDim::Conventional => 'C',
        }
    }
}

/// The five OCEAN personality factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BigFiveFactor {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    Neuroticism,
}

impl BigFiveFactor {
    pub const ALL: [BigFiveFactor; 5] = [
        BigFiveFactor::Openness,
        BigFiveFactor::Conscientiousness,
        BigFiveFactor::Extraversion,
        BigFiveFactor::Agreeableness,
        BigFiveFactor::Neuroticism,
    ];

    pub fn letter(self) -> char {
        match self {
            BigFiveFactor::Openness => 'O',
            BigFiveFactor::Conscientiousness => 'C',
            BigFiveFactor::Extraversion => 'E',
            BigFiveFactor::Agreeableness => 'A',
            BigFiveFactor::Neuroticism => 'N',
        }
    }
}

/// RIASEC score vector. Each dimension sums the 1–5 answers of its questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HollandVector {
    #[serde(rename = "R")]
    pub realistic: i32,
    #[serde(rename = "I")]
    pub investigative: i32,
    #[serde(rename = "A")]
    pub artistic: i32,
    #[serde(rename = "S")]
    pub social: i32,
    #[serde(rename = "E")]
    pub enterprising: i32,
    #[serde(rename = "C")]
    pub conventional: i32,
}

impl HollandVector {
    pub const fn new(r: i32, i: i32, a: i32, s: i32, e: i32, c: i32) -> Self {
        Self {
            realistic: r,
            investigative: i,
            artistic: a,
            social: s,
            enterprising: e,
            conventional: c,
        }
    }

    pub fn get(&self, dim: HollandDim) -> i32 {
        match dim {
            HollandDim::Realistic => self.realistic,
            HollandDim::Investigative => self.investigative,
            HollandDim::Artistic => self.artistic,
            HollandDim::Social => self.social,
            HollandDim::Enterprising => self.enterprising,
            HollandDim::Conventional => self.conventional,
        }
    }

    pub fn add(&mut self, dim: HollandDim, value: i32) {
        match dim {
            HollandDim::Realistic => self.realistic += value,
            HollandDim::Investigative => self.investigative += value,
            HollandDim::Artistic => self.artistic += value,
            HollandDim::Social => self.social += value,
            HollandDim::Enterprising => self.enterprising += value,
            HollandDim::Conventional => self.conventional += value,
        }
    }

    /// The user's three-letter Holland code: top three dimensions by score,
    /// descending. The sort is stable, so ties fall back to RIASEC order.
    pub fn holland_code(&self) -> String {
        let mut ranked: Vec<HollandDim> = HollandDim::ALL.to_vec();
        ranked.sort_by_key(|&d| std::cmp::Reverse(self.get(d)));
        ranked.iter().take(3).map(|d| d.letter()).collect()
    }
}

/// OCEAN score vector. Reverse-coded items contribute `6 - value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFiveVector {
    #[serde(rename = "O")]
    pub openness: i32,
    #[serde(rename = "C")]
    pub conscientiousness: i32,
    #[serde(rename = "E")]
    pub extraversion: i32,
    #[serde(rename = "A")]
    pub agreeableness: i32,
    #[serde(rename = "N")]
    pub neuroticism: i32,
}

impl BigFiveVector {
    pub const fn new(o: i32, c: i32, e: i32, a: i32, n: i32) -> Self {
        Self {
            openness: o,
            conscientiousness: c,
            extraversion: e,
            agreeableness: a,
            neuroticism: n,
        }
    }

    pub fn get(&self, factor: BigFiveFactor) -> i32 {
        match factor {
            BigFiveFactor::Openness => self.openness,
            BigFiveFactor::Conscientiousness => self.conscientiousness,
            BigFiveFactor::Extraversion => self.extraversion,
            BigFiveFactor::Agreeableness => self.agreeableness,
            BigFiveFactor::Neuroticism => self.neuroticism,
        }
    }

    pub fn add(&mut self, factor: BigFiveFactor, value: i32) {
        match factor {
            BigFiveFactor::Openness => self.openness += value,
            BigFiveFactor::Conscientiousness => self.conscientiousness += value,
            BigFiveFactor::Extraversion => self.extraversion += value,
            BigFiveFactor::Agreeableness => self.agreeableness += value,
            BigFiveFactor::Neuroticism => self.neuroticism += value,
        }
    }
}

/// One Holland questionnaire item. Static, defined at process start.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HollandQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub dimension: HollandDim,
}

/// One Big Five questionnaire item. `reverse` items are negatively phrased
/// and inverted before aggregation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BigFiveQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub factor: BigFiveFactor,
    pub reverse: bool,
}
