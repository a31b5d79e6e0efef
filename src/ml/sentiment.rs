//! Lexical polarity and subjectivity scoring.
//!
//! No training data: each known adjective or adverb carries a fixed polarity in
//! [-1, 1] and subjectivity in [0, 1]. An intensifier scales the next scored
//! word, a negation flips and halves its polarity. The text score is the mean
//! over scored words.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("Failed to compile word pattern"));

/// (word, polarity, subjectivity)
static POLARITY_LEXICON: &[(&str, f64, f64)] = &[
    // negative
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("catastrophic", -0.9, 0.9),
    ("devastating", -0.8, 0.9),
    ("desperate", -0.6, 0.9),
    ("bad", -0.7, 0.667),
    ("dangerous", -0.6, 0.9),
    ("scared", -0.6, 0.8),
    ("afraid", -0.6, 0.9),
    ("frightened", -0.6, 0.8),
    ("panic", -0.6, 0.9),
    ("cold", -0.6, 1.0),
    ("sad", -0.5, 1.0),
    ("worried", -0.4, 0.7),
    ("poor", -0.4, 0.6),
    ("hungry", -0.3, 0.6),
    ("serious", -0.333, 0.667),
    ("lost", -0.3, 0.4),
    ("deadly", -0.3, 0.6),
    ("dead", -0.2, 0.4),
    ("destroyed", -0.2, 0.4),
    ("heavy", -0.2, 0.5),
    ("dark", -0.15, 0.4),
    ("minor", -0.125, 0.4),
    ("wet", -0.1, 0.4),
    // neutral but subjective
    ("severe", 0.0, 1.0),
    ("massive", 0.0, 1.0),
    ("critical", 0.0, 0.8),
    ("urgent", 0.0, 0.4),
    // positive
    ("huge", 0.4, 0.9),
    ("many", 0.5, 0.5),
    ("fine", 0.4167, 0.5),
    ("safe", 0.5, 0.5),
    ("okay", 0.5, 0.5),
    ("stable", 0.2, 0.4),
    ("calm", 0.3, 0.75),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("thankful", 0.5, 0.8),
    ("grateful", 0.5, 0.8),
];

/// (word, multiplier)
static INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("really", 1.15),
    ("so", 1.3),
    ("too", 1.2),
    ("totally", 1.4),
];

static NEGATIONS: &[&str] = &["not", "no", "never", "cannot"];

/// Polarity multiplier applied after a negation
const NEGATION_FACTOR: f64 = -0.5;

/// Sentiment scores for a text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

fn lookup(word: &str) -> Option<(f64, f64)> {
    POLARITY_LEXICON
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|&(_, p, s)| (p, s))
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, m)| m)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// Score the polarity and subjectivity of a text
pub fn score(text: &str) -> SentimentScore {
    let lowered = text.to_lowercase();

    let mut multiplier = 1.0;
    let mut negated = false;
    let mut scored: Vec<(f64, f64)> = Vec::new();

    for m in WORD_PATTERN.find_iter(&lowered) {
        let word = m.as_str();

        if is_negation(word) {
            negated = true;
            continue;
        }
        if let Some(factor) = intensity(word) {
            multiplier *= factor;
            continue;
        }

        if let Some((polarity, subjectivity)) = lookup(word) {
            let mut p = polarity * multiplier;
            if negated {
                p *= NEGATION_FACTOR;
            }
            let s = subjectivity * multiplier;
            scored.push((p.clamp(-1.0, 1.0), s.clamp(0.0, 1.0)));
        }

        // Modifiers only reach the next word
        multiplier = 1.0;
        negated = false;
    }

    if scored.is_empty() {
        return SentimentScore {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    let n = scored.len() as f64;
    SentimentScore {
        polarity: scored.iter().map(|(p, _)| p).sum::<f64>() / n,
        subjectivity: scored.iter().map(|(_, s)| s).sum::<f64>() / n,
    }
}

/// Four-way reading of a sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    ExtremePanic,
    Stress,
    Subjective,
    Factual,
}

impl SentimentLabel {
    pub fn classify(score: &SentimentScore) -> Self {
        if score.polarity < -0.5 {
            SentimentLabel::ExtremePanic
        } else if score.polarity < 0.0 {
            SentimentLabel::Stress
        } else if score.subjectivity > 0.6 {
            SentimentLabel::Subjective
        } else {
            SentimentLabel::Factual
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::ExtremePanic => "🚨 EXTREME PANIC DETECTED",
            SentimentLabel::Stress => "⚠️ STRESS/URGENCY DETECTED",
            SentimentLabel::Subjective => "😰 SUBJECTIVE/EMOTIONAL REPORT",
            SentimentLabel::Factual => "📊 FACTUAL/NEUTRAL REPORT",
        }
    }

    /// Percentage string that accompanies the label
    pub fn emotion_score(&self, score: &SentimentScore) -> String {
        match self {
            SentimentLabel::ExtremePanic | SentimentLabel::Stress => {
                format!("{:.0}% negative", (score.polarity * 100.0).abs())
            }
            SentimentLabel::Subjective => {
                format!("{:.0}% emotional", score.subjectivity * 100.0)
            }
            SentimentLabel::Factual => {
                format!("{:.0}% objective", score.subjectivity * 100.0)
            }
        }
    }
}
