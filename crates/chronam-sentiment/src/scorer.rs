//! Word-lexicon sentiment scoring.

/// A sentiment score over one unit of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Negative-to-positive sentiment in `[-1.0, 1.0]`.
    pub polarity: f64,
    /// Factual-to-opinionated weight in `[0.0, 1.0]`.
    pub subjectivity: f64,
}

impl Sentiment {
    /// The score for text carrying no sentiment signal at all.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Pluggable scoring capability.
///
/// Implementations must accept any string, including the empty string,
/// without failing; what they return for empty input is part of their
/// documented contract.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Sentiment;
}

/// Word weights: `(word, polarity, subjectivity)`.
///
/// Keys are lowercase single words. Polarity in `[-1.0, 1.0]`,
/// subjectivity in `[0.0, 1.0]`. Tuned for the vocabulary of historical
/// agricultural and market reporting.
const LEXICON: &[(&str, f64, f64)] = &[
    // Positive signals
    ("abundant", 0.5, 0.5),
    ("bountiful", 0.6, 0.7),
    ("excellent", 0.7, 0.8),
    ("favorable", 0.5, 0.6),
    ("fine", 0.4, 0.6),
    ("flourishing", 0.6, 0.6),
    ("fortunate", 0.5, 0.7),
    ("good", 0.4, 0.5),
    ("great", 0.5, 0.6),
    ("hopeful", 0.4, 0.7),
    ("improved", 0.4, 0.4),
    ("plentiful", 0.5, 0.5),
    ("prosperous", 0.6, 0.6),
    ("rallied", 0.4, 0.4),
    ("recovered", 0.4, 0.4),
    ("relief", 0.4, 0.4),
    ("splendid", 0.7, 0.8),
    ("thriving", 0.6, 0.6),
    // Negative signals
    ("alarming", -0.5, 0.7),
    ("bad", -0.5, 0.6),
    ("blighted", -0.6, 0.5),
    ("calamity", -0.7, 0.6),
    ("destroyed", -0.6, 0.4),
    ("devastating", -0.8, 0.7),
    ("disaster", -0.7, 0.5),
    ("disastrous", -0.7, 0.6),
    ("distress", -0.5, 0.5),
    ("dreadful", -0.7, 0.8),
    ("failed", -0.5, 0.4),
    ("failure", -0.5, 0.4),
    ("famine", -0.7, 0.4),
    ("fear", -0.4, 0.6),
    ("grave", -0.4, 0.6),
    ("lost", -0.4, 0.4),
    ("perished", -0.6, 0.4),
    ("ruin", -0.6, 0.5),
    ("ruined", -0.6, 0.5),
    ("scarcity", -0.4, 0.4),
    ("severe", -0.4, 0.5),
    ("suffering", -0.6, 0.5),
    ("terrible", -0.7, 0.8),
    ("worst", -0.7, 0.7),
];

/// Default scorer: averages the lexicon weights of the recognized words
/// in the text.
///
/// Words are lowercased and stripped of surrounding punctuation before
/// lookup. Text with no recognized word — including the empty string —
/// scores [`Sentiment::NEUTRAL`]; averaging keeps both dimensions inside
/// their documented ranges without clamping.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Sentiment {
        let mut polarity_sum = 0.0_f64;
        let mut subjectivity_sum = 0.0_f64;
        let mut hits = 0u32;
        for word in text.split_whitespace() {
            let normalized = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            if let Some((_, polarity, subjectivity)) =
                LEXICON.iter().find(|(entry, _, _)| *entry == normalized)
            {
                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                hits += 1;
            }
        }
        if hits == 0 {
            return Sentiment::NEUTRAL;
        }
        let denom = f64::from(hits);
        Sentiment {
            polarity: polarity_sum / denom,
            subjectivity: subjectivity_sum / denom,
        }
    }
}
