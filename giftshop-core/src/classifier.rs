use crate::rules::{is_double_repetition, is_nfold_repetition, RuleKind};

/// Rule verdicts for one ID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub double_repetition: bool,
    pub nfold_repetition: bool,
}

impl Classification {
    pub fn matches(&self, rule: RuleKind) -> bool {
        match rule {
            RuleKind::DoubleRepetition => self.double_repetition,
            RuleKind::NFoldRepetition => self.nfold_repetition,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.double_repetition || self.nfold_repetition
    }
}

pub struct IdClassifier;

impl Default for IdClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IdClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Render `id` in canonical decimal form and evaluate both rules on it.
    pub fn classify(&self, id: i64) -> Classification {
        self.classify_digits(&id.to_string())
    }

    /// Both rules are always evaluated; an ID can match either, both or neither.
    pub fn classify_digits(&self, digits: &str) -> Classification {
        Classification {
            double_repetition: is_double_repetition(digits),
            nfold_repetition: is_nfold_repetition(digits),
        }
    }
}
