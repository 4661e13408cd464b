//! Row builders and JSON scenario loader shared by the integration tests.

use std::path::PathBuf;

use expectancy_core::models::{DyadicTrial, PggTrial, RawPggRow, SubjectId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the JSON fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// A two-party scenario: rows plus the expected `(e_own, e_partner)` per row.
#[derive(Debug, Clone, Deserialize)]
pub struct DyadicScenario {
    pub decay: f64,
    pub depth: usize,
    pub reset_on_block: bool,
    pub rows: Vec<DyadicTrial>,
    pub expected: Vec<(Option<f64>, Option<f64>)>,
}

// ── Two-party builders ────────────────────────────────────────────────────

pub fn proposer(subject: &str, block: i64, take: f64) -> DyadicTrial {
    DyadicTrial {
        subject: SubjectId::from(subject),
        block,
        role: "p".to_string(),
        subject_take: Some(take),
        proposer_take: None,
        subject_response: None,
        condition: None,
        invest: None,
    }
}

pub fn responder(subject: &str, block: i64, partner_take: f64, accepted: bool) -> DyadicTrial {
    DyadicTrial {
        subject: SubjectId::from(subject),
        block,
        role: "r".to_string(),
        subject_take: None,
        proposer_take: Some(partner_take),
        subject_response: Some(accepted),
        condition: None,
        invest: None,
    }
}

pub fn with_role(mut trial: DyadicTrial, role: &str) -> DyadicTrial {
    trial.role = role.to_string();
    trial
}

pub fn with_condition(mut trial: DyadicTrial, condition: &str, invest: f64) -> DyadicTrial {
    trial.condition = Some(condition.to_string());
    trial.invest = Some(invest);
    trial
}

// ── Public-goods builders ─────────────────────────────────────────────────

/// A reconciled trial with every field present.
pub fn pgg_trial(
    subject: &str,
    period: u32,
    s_contrib: f64,
    r: [f64; 3],
    punish: [f64; 3],
    received_punishment: f64,
) -> PggTrial {
    PggTrial {
        subject: SubjectId::from(subject),
        group_id: "g1".to_string(),
        city: "Boston".to_string(),
        period,
        s_contrib: Some(s_contrib),
        r: r.map(Some),
        punish: punish.map(Some),
        received_punishment: Some(received_punishment),
        r_avg: Some(r.iter().sum::<f64>() / 3.0),
        female: Some(true),
        age: Some(21.0),
    }
}

/// One raw row as recorded before reconciliation.
pub fn raw_row(
    subject: &str,
    period: u32,
    phase: &str,
    senders: f64,
    others: f64,
    punishment: f64,
) -> RawPggRow {
    RawPggRow {
        subject: SubjectId::from(subject),
        group_id: "g1".to_string(),
        city: "Boston".to_string(),
        period,
        phase: phase.to_string(),
        senders_contribution: Some(senders),
        others_contribution: Some(others),
        punishment: Some(punishment),
        received_punishment: Some(1.0),
        female: Some(false),
        age: Some(23.0),
    }
}

/// The three raw rows of one trial, in recording order.
pub fn raw_triplet(
    subject: &str,
    period: u32,
    phase: &str,
    senders: f64,
    others: [f64; 3],
    punish: [f64; 3],
) -> Vec<RawPggRow> {
    (0..3)
        .map(|i| raw_row(subject, period, phase, senders, others[i], punish[i]))
        .collect()
}
