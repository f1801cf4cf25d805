//! Lexicon-driven sentiment scoring.
//!
//! A VADER-style polarity model: token valences come from a tab-separated
//! lexicon and are adjusted for negation, intensifiers, capitalization,
//! punctuation emphasis, and contrastive "but" clauses, then normalized into
//! a compound score in [-1, 1].

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;

/// Booster/dampener increment.
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;

/// Emphasis added by ALL-CAPS words in a mixed-case sentence.
const C_INCR: f64 = 0.733;

/// Valence multiplier applied by a preceding negation.
const N_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score.
const NORMALIZE_ALPHA: f64 = 15.0;

static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
        "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
        "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
        "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor",
        "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
        "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont",
        "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
    ]
    .into_iter()
    .collect()
});

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for word in [
        "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
        "deeply", "effing", "enormously", "entirely", "especially", "exceptionally",
        "extremely", "fabulously", "flipping", "flippin", "fricking", "frickin", "frigging",
        "friggin", "fully", "fucking", "greatly", "hella", "highly", "hugely", "incredibly",
        "intensely", "majorly", "more", "most", "particularly", "purely", "quite", "really",
        "remarkably", "so", "substantially", "thoroughly", "totally", "tremendously", "uber",
        "unbelievably", "unusually", "utterly", "very",
    ] {
        m.insert(word, B_INCR);
    }
    for word in [
        "almost", "barely", "hardly", "kinda", "kindof", "less", "little", "marginally",
        "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta", "sortof",
    ] {
        m.insert(word, B_DECR);
    }
    m
});

/// Polarity scores for one span of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    /// Normalized sum of adjusted valences, in [-1, 1].
    pub compound: f64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Sentence-level sentiment scorer.
#[derive(Debug, Clone)]
pub struct SentimentIntensityAnalyzer {
    lexicon: HashMap<String, f64>,
}

impl SentimentIntensityAnalyzer {
    /// Load the valence lexicon from a tab-separated file
    /// (`token<TAB>valence[<TAB>...]` per line).
    pub fn from_lexicon_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sentiment lexicon {:?}", path))?;
        Self::from_lexicon_str(&content)
            .with_context(|| format!("Failed to parse sentiment lexicon {:?}", path))
    }

    /// Parse a lexicon from an in-memory string. Malformed lines are skipped.
    pub fn from_lexicon_str(content: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();
        let mut skipped = 0usize;

        for line in content.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(token), Some(valence)) = (fields.next(), fields.next()) else {
                skipped += 1;
                continue;
            };
            match valence.parse::<f64>() {
                Ok(v) => {
                    lexicon.insert(token.to_string(), v);
                }
                Err(_) => skipped += 1,
            }
        }

        if lexicon.is_empty() {
            bail!("Sentiment lexicon contained no usable entries");
        }
        if skipped > 0 {
            tracing::debug!("Skipped {} malformed lexicon lines", skipped);
        }
        Ok(Self { lexicon })
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Score one sentence.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        let cap_diff = allcap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();

            // Boosters carry no valence of their own.
            if BOOSTERS.contains_key(lower.as_str()) {
                sentiments.push(0.0);
                continue;
            }

            let Some(&base) = self.lexicon.get(&lower) else {
                sentiments.push(0.0);
                continue;
            };
            let mut valence = base;

            if cap_diff && is_all_caps(token) {
                valence += if valence > 0.0 { C_INCR } else { -C_INCR };
            }

            // Look back up to three tokens for intensifiers and negations.
            for dist in 0..3usize {
                if i <= dist {
                    break;
                }
                let prev = &tokens[i - dist - 1];
                let prev_lower = prev.to_lowercase();
                if self.lexicon.contains_key(&prev_lower) {
                    continue;
                }

                let mut scalar = booster_scalar(prev, valence, cap_diff);
                if scalar != 0.0 {
                    match dist {
                        1 => scalar *= 0.95,
                        2 => scalar *= 0.9,
                        _ => {}
                    }
                    valence += scalar;
                }

                if is_negation(&prev_lower) {
                    valence *= N_SCALAR;
                }
            }

            // "least good" flips, "at least" does not.
            if i >= 1 && tokens[i - 1].to_lowercase() == "least" {
                let preceded_by_at_or_very =
                    i >= 2 && matches!(tokens[i - 2].to_lowercase().as_str(), "at" | "very");
                if !preceded_by_at_or_very {
                    valence *= N_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        // Contrast: everything before "but" is dampened, everything after
        // amplified.
        if let Some(but_idx) = tokens.iter().position(|t| t.to_lowercase() == "but") {
            for (j, s) in sentiments.iter_mut().enumerate() {
                if j < but_idx {
                    *s *= 0.5;
                } else if j > but_idx {
                    *s *= 1.5;
                }
            }
        }

        score_valence(&sentiments, text)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(|c| c.is_uppercase()) && !token.chars().any(|c| c.is_lowercase())
}

/// Mixed casing in a sentence makes ALL-CAPS words count as emphasis.
fn allcap_differential(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn is_negation(token_lower: &str) -> bool {
    NEGATORS.contains(token_lower) || token_lower.contains("n't")
}

fn booster_scalar(token: &str, valence: f64, cap_diff: bool) -> f64 {
    let lower = token.to_lowercase();
    let Some(&base) = BOOSTERS.get(lower.as_str()) else {
        return 0.0;
    };
    let mut scalar = base;
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(token) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let punct_emphasis = punctuation_emphasis(text);

    let mut total: f64 = sentiments.iter().sum();
    if total > 0.0 {
        total += punct_emphasis;
    } else if total < 0.0 {
        total -= punct_emphasis;
    }
    let compound = normalize(total);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &v in sentiments {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct_emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct_emphasis;
    }

    let magnitude = pos_sum + neg_sum.abs() + neu_count;
    let (positive, negative, neutral) = if magnitude > 0.0 {
        (
            (pos_sum / magnitude).abs(),
            (neg_sum / magnitude).abs(),
            (neu_count / magnitude).abs(),
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    PolarityScores {
        compound: round_to(compound, 4),
        positive: round_to(positive, 3),
        neutral: round_to(neutral, 3),
        negative: round_to(negative, 3),
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep_count = text.matches('!').count().min(4);
    let ep_amplifier = ep_count as f64 * 0.292;

    let qm_count = text.matches('?').count();
    let qm_amplifier = if qm_count > 1 {
        if qm_count <= 3 {
            qm_count as f64 * 0.18
        } else {
            0.96
        }
    } else {
        0.0
    };

    ep_amplifier + qm_amplifier
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZE_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_LEXICON: &str = "wonderful\t2.7\nbeautiful\t2.9\nterrible\t-2.1\nawful\t-2.0\ngood\t1.9\ngreat\t3.1\nbad\t-2.5\nlove\t3.2\nhate\t-2.7\nhappy\t2.7\n";

    fn analyzer() -> SentimentIntensityAnalyzer {
        SentimentIntensityAnalyzer::from_lexicon_str(TEST_LEXICON).unwrap()
    }

    #[test]
    fn test_lexicon_parsing() {
        assert_eq!(analyzer().lexicon_len(), 10);
    }

    #[test]
    fn test_lexicon_skips_malformed_lines() {
        let analyzer =
            SentimentIntensityAnalyzer::from_lexicon_str("good\t1.9\nbroken line\nbad\t-2.5\n")
                .unwrap();
        assert_eq!(analyzer.lexicon_len(), 2);
    }

    #[test]
    fn test_empty_lexicon_is_an_error() {
        assert!(SentimentIntensityAnalyzer::from_lexicon_str("").is_err());
        assert!(SentimentIntensityAnalyzer::from_lexicon_str("no tabs here\n").is_err());
    }

    #[test]
    fn test_positive_sentence() {
        let scores = analyzer().polarity_scores("Life is wonderful and beautiful.");
        assert!(scores.compound >= 0.05, "compound was {}", scores.compound);
        assert!(scores.positive > scores.negative);
    }

    #[test]
    fn test_negative_sentence() {
        let scores = analyzer().polarity_scores("Life is terrible and awful.");
        assert!(scores.compound <= -0.05, "compound was {}", scores.compound);
        assert!(scores.negative > scores.positive);
    }

    #[test]
    fn test_neutral_sentence() {
        let scores = analyzer().polarity_scores("The table has four legs.");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.positive, 0.0);
        assert_eq!(scores.negative, 0.0);
        assert_eq!(scores.neutral, 1.0);
    }

    #[test]
    fn test_empty_input() {
        let scores = analyzer().polarity_scores("");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neutral, 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let plain = analyzer().polarity_scores("This is good.");
        let negated = analyzer().polarity_scores("This is not good.");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_contraction_negation() {
        let scores = analyzer().polarity_scores("It isn't good.");
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn test_booster_intensifies() {
        let plain = analyzer().polarity_scores("This is good.");
        let boosted = analyzer().polarity_scores("This is very good.");
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn test_dampener_weakens() {
        let plain = analyzer().polarity_scores("This is good.");
        let damped = analyzer().polarity_scores("This is slightly good.");
        assert!(damped.compound < plain.compound);
        assert!(damped.compound > 0.0);
    }

    #[test]
    fn test_caps_emphasis() {
        let plain = analyzer().polarity_scores("This is great.");
        let shouted = analyzer().polarity_scores("This is GREAT.");
        assert!(shouted.compound > plain.compound);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let plain = analyzer().polarity_scores("This is great.");
        let excited = analyzer().polarity_scores("This is great!");
        assert!(excited.compound > plain.compound);
    }

    #[test]
    fn test_but_clause_shifts_weight() {
        let scores = analyzer().polarity_scores("The food is good but the service is bad.");
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn test_ratios_sum_to_one() {
        let scores = analyzer().polarity_scores("The good man saw a terrible thing.");
        let sum = scores.positive + scores.negative + scores.neutral;
        assert!((sum - 1.0).abs() < 0.01, "ratio sum was {}", sum);
    }

    #[test]
    fn test_compound_bounds() {
        let very_pos =
            analyzer().polarity_scores("wonderful beautiful great good love happy wonderful");
        assert!(very_pos.compound <= 1.0);
        let very_neg = analyzer().polarity_scores("terrible awful bad hate terrible awful bad");
        assert!(very_neg.compound >= -1.0);
    }
}
