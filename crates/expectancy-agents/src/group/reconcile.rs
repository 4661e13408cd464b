//! Triplet reconciliation of raw public-goods rows.
//!
//! Raw data records every trial three times, once per partner, in a fixed
//! cyclic order. Position `k mod 3` is assigned over the whole unfiltered
//! stream, rows outside the wanted phase are dropped, and the three
//! position streams are zipped back into one row per trial.

use expectancy_core::config::{GroupConfig, TripletPolicy};
use expectancy_core::constants::GROUP_PARTNERS;
use expectancy_core::errors::{ExpectancyResult, ReconcileError};
use expectancy_core::models::{mean_present, PggTrial, RawPggRow};
use tracing::{info, warn};

/// Reconciles raw rows for one phase under one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripletReconciler {
    phase: String,
    policy: TripletPolicy,
}

impl TripletReconciler {
    pub fn new(phase: impl Into<String>, policy: TripletPolicy) -> Self {
        Self {
            phase: phase.into(),
            policy,
        }
    }

    pub fn from_config(config: &GroupConfig) -> Self {
        Self::new(config.phase.clone(), config.triplet_policy)
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn policy(&self) -> TripletPolicy {
        self.policy
    }

    pub fn reconcile(&self, rows: &[RawPggRow]) -> ExpectancyResult<Vec<PggTrial>> {
        reconcile_triplets(rows, &self.phase, self.policy)
    }
}

/// Merge three raw rows per trial into one [`PggTrial`].
///
/// Under [`TripletPolicy::Strict`] the stream length must be a multiple
/// of three, the phase filter must keep every position equally often, and
/// each triplet must agree on subject, group and period.
/// Under [`TripletPolicy::Lenient`] the position streams are zipped
/// as-is and truncated to the shortest one.
pub fn reconcile_triplets(
    rows: &[RawPggRow],
    phase: &str,
    policy: TripletPolicy,
) -> ExpectancyResult<Vec<PggTrial>> {
    let span = reconcile_span!(rows.len(), phase);
    let _guard = span.enter();

    if policy == TripletPolicy::Strict && rows.len() % GROUP_PARTNERS != 0 {
        return Err(ReconcileError::IncompleteTriplet { rows: rows.len() }.into());
    }

    let mut positions: [Vec<&RawPggRow>; GROUP_PARTNERS] = Default::default();
    for (index, row) in rows.iter().enumerate() {
        if row.phase == phase {
            positions[index % GROUP_PARTNERS].push(row);
        }
    }

    let [first, second, third] = &positions;
    let trials = first.len().min(second.len()).min(third.len());
    if first.len() != trials || second.len() != trials || third.len() != trials {
        match policy {
            TripletPolicy::Strict => {
                return Err(ReconcileError::RaggedPositions {
                    first: first.len(),
                    second: second.len(),
                    third: third.len(),
                }
                .into());
            }
            TripletPolicy::Lenient => warn!(
                first = first.len(),
                second = second.len(),
                third = third.len(),
                "ragged triplets, truncating"
            ),
        }
    }

    let mut out = Vec::with_capacity(trials);
    for (triplet, ((a, b), c)) in first.iter().zip(second.iter()).zip(third.iter()).enumerate() {
        let members = [*a, *b, *c];
        if policy == TripletPolicy::Strict {
            check_aligned(triplet, &members)?;
        }
        out.push(merge(&members));
    }

    info!(raw_rows = rows.len(), trials = out.len(), "reconciled triplets");
    Ok(out)
}

fn check_aligned(triplet: usize, members: &[&RawPggRow; GROUP_PARTNERS]) -> Result<(), ReconcileError> {
    let anchor = members[0];
    for other in &members[1..] {
        if other.subject != anchor.subject {
            return Err(misaligned(triplet, "subject", &anchor.subject, &other.subject));
        }
        if other.group_id != anchor.group_id {
            return Err(misaligned(triplet, "group", &anchor.group_id, &other.group_id));
        }
        if other.period != anchor.period {
            return Err(misaligned(triplet, "period", &anchor.period, &other.period));
        }
    }
    Ok(())
}

fn misaligned(
    triplet: usize,
    field: &'static str,
    expected: &dyn std::fmt::Display,
    found: &dyn std::fmt::Display,
) -> ReconcileError {
    ReconcileError::MisalignedTriplet {
        triplet,
        field,
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

/// Identifying columns come from the first row of the triplet.
fn merge(members: &[&RawPggRow; GROUP_PARTNERS]) -> PggTrial {
    let anchor = members[0];
    let r = members.map(|m| m.others_contribution);
    PggTrial {
        subject: anchor.subject.clone(),
        group_id: anchor.group_id.clone(),
        city: anchor.city.clone(),
        period: anchor.period,
        s_contrib: anchor.senders_contribution,
        r,
        punish: members.map(|m| m.punishment),
        received_punishment: anchor.received_punishment,
        r_avg: mean_present(&r),
        female: anchor.female,
        age: anchor.age,
    }
}
