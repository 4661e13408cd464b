use serde::{Deserialize, Serialize};

use super::{SubjectId, Violation};
use crate::Expectation;

/// Which side of the exchange the subject played on a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Proposer,
    Responder,
}

impl Role {
    /// Parse a role tag. Accepts `p`/`proposer` and `r`/`responder`,
    /// case-insensitively. Anything else is not a role.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "p" | "proposer" => Some(Self::Proposer),
            "r" | "responder" => Some(Self::Responder),
            _ => None,
        }
    }
}

/// One ultimatum / trust game trial for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DyadicTrial {
    pub subject: SubjectId,
    pub block: i64,
    /// Raw role tag as recorded. Kept as text so unknown tags survive to
    /// the agent, which reports them instead of failing.
    pub role: String,
    /// Amount the subject took when proposing.
    pub subject_take: Option<f64>,
    /// Amount the partner took when the subject responded.
    pub proposer_take: Option<f64>,
    /// Whether the subject accepted the partner's proposal.
    pub subject_response: Option<bool>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub invest: Option<f64>,
}

impl DyadicTrial {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Amount the subject was offered: `stake - proposer_take`.
    pub fn received(&self, stake: f64) -> Option<f64> {
        self.proposer_take.map(|take| stake - take)
    }
}

/// What a trial contributed to the agent's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryUpdate {
    /// Own offer appended.
    Proposer,
    /// Partner offer and response appended.
    Responder,
    /// Role tag not recognised; nothing appended.
    Unhandled { role: String },
}

/// Estimates returned for one two-party trial, taken before the trial
/// touched any history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DyadicExpectations {
    /// Expected own offer.
    pub e_own: Expectation,
    /// Expected partner offer.
    pub e_partner: Expectation,
    /// Expected acceptance rate as responder.
    pub e_response: Expectation,
    pub update: HistoryUpdate,
}

/// A trial together with the expectations computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedTrial {
    #[serde(flatten)]
    pub trial: DyadicTrial,
    pub e_own: Expectation,
    pub e_partner: Expectation,
    pub e_response: Expectation,
    /// Amount offered to the subject, `stake - proposer_take`.
    pub received: Option<f64>,
}

impl AnnotatedTrial {
    pub fn new(trial: DyadicTrial, expectations: DyadicExpectations, stake: f64) -> Self {
        let received = trial.received(stake);
        Self {
            trial,
            e_own: expectations.e_own,
            e_partner: expectations.e_partner,
            e_response: expectations.e_response,
            received,
        }
    }

    /// Partner offer measured against the expected partner offer.
    pub fn partner_violation(&self) -> Violation {
        Violation::between(self.trial.proposer_take, self.e_partner)
    }

    /// Partner offer measured against the subject's own expected offer.
    pub fn own_violation(&self) -> Violation {
        Violation::between(self.trial.proposer_take, self.e_own)
    }
}
