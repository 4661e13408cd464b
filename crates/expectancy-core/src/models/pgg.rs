use serde::{Deserialize, Serialize};

use super::{SubjectId, Violation};
use crate::constants::GROUP_PARTNERS;
use crate::Expectation;

/// One raw public-goods observation: what one partner contributed toward
/// the subject and how much the subject punished that partner.
///
/// Each real trial is recorded as three consecutive raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPggRow {
    pub subject: SubjectId,
    pub group_id: String,
    pub city: String,
    pub period: u32,
    /// Experimental phase tag, e.g. `P-experiment`.
    pub phase: String,
    pub senders_contribution: Option<f64>,
    pub others_contribution: Option<f64>,
    pub punishment: Option<f64>,
    /// Punishment points the subject received this period.
    pub received_punishment: Option<f64>,
    #[serde(default)]
    pub female: Option<bool>,
    #[serde(default)]
    pub age: Option<f64>,
}

/// One public-goods trial after triplet reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PggTrial {
    pub subject: SubjectId,
    pub group_id: String,
    pub city: String,
    pub period: u32,
    /// Subject's own contribution.
    pub s_contrib: Option<f64>,
    /// Each partner's contribution, indexed by relative partner position.
    pub r: [Option<f64>; GROUP_PARTNERS],
    /// Punishment the subject gave each partner.
    pub punish: [Option<f64>; GROUP_PARTNERS],
    pub received_punishment: Option<f64>,
    /// Mean of `r` over the present values.
    pub r_avg: Option<f64>,
    pub female: Option<bool>,
    pub age: Option<f64>,
}

impl PggTrial {
    /// Mean of the punishments the subject gave this trial.
    pub fn punish_avg(&self) -> Option<f64> {
        mean_present(&self.punish)
    }
}

/// Mean over present values, `None` when nothing is present.
pub fn mean_present(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// One output row of the group agent: a trial seen from the perspective
/// of one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub group_id: String,
    pub subject: SubjectId,
    pub city: String,
    pub period: u32,
    pub s_contrib: Option<f64>,
    pub female: Option<bool>,
    pub age: Option<f64>,

    /// Relative partner index, 0..3.
    pub target: usize,
    /// Partner's contribution this trial.
    pub r: Option<f64>,
    /// Punishment the subject gave this partner.
    pub punish: Option<f64>,

    /// Own contribution expectation, including this trial.
    pub e_own: Expectation,
    /// Previous trial's average partner contribution.
    pub r_avg_prev: Expectation,
    /// Partner's own trailing average before this trial.
    pub e_specific: Expectation,
    /// All contributions so far except this partner's current one.
    pub e_sans_trial: Expectation,
    /// Peers' current-trial-aware expectations, this partner excluded.
    pub e_sans_person: Expectation,

    pub e_punish_given: Expectation,
    pub e_punish_received: Expectation,
    pub prev_received_punishment: Expectation,
}

/// Violations of each expectation formulation by the partner's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupViolations {
    pub own: Violation,
    pub specific: Violation,
    pub sans_trial: Violation,
    pub sans_person: Violation,
}

impl GroupRecord {
    pub fn violations(&self) -> GroupViolations {
        GroupViolations {
            own: Violation::between(self.r, self.e_own),
            specific: Violation::between(self.r, self.e_specific),
            sans_trial: Violation::between(self.r, self.e_sans_trial),
            sans_person: Violation::between(self.r, self.e_sans_person),
        }
    }
}
