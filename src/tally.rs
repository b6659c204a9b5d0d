multiversx_sc::derive_imports!();

/// Vote counts for a single proposal. Every eligible voter counts once,
/// whatever their balance.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Tally {
    pub votes_for: u64,
    pub votes_against: u64,
}

impl Tally {
    pub fn record(&mut self, is_for: bool) {
        if is_for {
            self.votes_for += 1;
        } else {
            self.votes_against += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.votes_for + self.votes_against
    }
}

impl FromIterator<bool> for Tally {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for is_for in iter {
            tally.record(is_for);
        }
        tally
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Outcome {
    Succeeded,
    Defeated,
}

/// Pass/fail rule applied once the voting window has closed.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ResolutionRule {
    /// `for >= threshold` and `for > against`.
    ThresholdAndMajority,
    /// `for >= threshold`, regardless of opposition.
    ThresholdOnly,
    /// `for > against`; the threshold is ignored.
    SimpleMajority,
}

impl ResolutionRule {
    pub fn resolve(self, tally: &Tally, vote_threshold: u64) -> Outcome {
        let meets_threshold = tally.votes_for >= vote_threshold;
        let has_majority = tally.votes_for > tally.votes_against;

        let passed = match self {
            ResolutionRule::ThresholdAndMajority => meets_threshold && has_majority,
            ResolutionRule::ThresholdOnly => meets_threshold,
            ResolutionRule::SimpleMajority => has_majority,
        };

        if passed {
            Outcome::Succeeded
        } else {
            Outcome::Defeated
        }
    }
}
