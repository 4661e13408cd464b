//! Per-block aggregation of annotated two-party trials.
//!
//! Each (subject, block) pair collapses to one row of column means, with
//! the previous block's condition and mean partner take carried along so
//! carry-over effects between partners can be modelled downstream.

use std::collections::BTreeMap;

use expectancy_core::models::{AnnotatedTrial, SubjectId};
use expectancy_core::Expectation;
use expectancy_decay::plain_mean;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub subject: SubjectId,
    pub block: i64,
    /// Condition of the block's first trial.
    pub condition: Option<String>,
    pub invest: Expectation,
    /// Mean amount the partner took, not negated.
    pub proposer_take: Expectation,
    pub subject_take: Expectation,
    pub e_own: Expectation,
    pub e_partner: Expectation,
    /// Mean of `proposer_take - e_partner`.
    pub partner_violation: Expectation,
    pub partner_violation_abs: Expectation,
    /// Mean of `proposer_take - e_own`.
    pub own_violation: Expectation,
    pub own_violation_abs: Expectation,
    /// `None` on a subject's first block.
    pub prev_condition: Option<String>,
    pub prev_proposer_take: Expectation,
}

/// Summarise annotated trials per (subject, block), ordered by subject then
/// block. Means skip missing and undefined entries.
pub fn summarize_blocks(rows: &[AnnotatedTrial]) -> Vec<BlockSummary> {
    let mut blocks: BTreeMap<(&SubjectId, i64), Vec<&AnnotatedTrial>> = BTreeMap::new();
    for row in rows {
        blocks
            .entry((&row.trial.subject, row.trial.block))
            .or_default()
            .push(row);
    }

    let mut out: Vec<BlockSummary> = Vec::with_capacity(blocks.len());
    for ((subject, block), trials) in blocks {
        let previous = out.last().filter(|prev| &prev.subject == subject);
        let prev_condition = previous.and_then(|prev| prev.condition.clone());
        let prev_proposer_take = previous.map_or(Expectation::Undefined, |prev| prev.proposer_take);

        let mean = |f: fn(&AnnotatedTrial) -> Expectation| mean_of(&trials, f);

        let summary = BlockSummary {
            subject: subject.clone(),
            block,
            condition: trials.first().and_then(|t| t.trial.condition.clone()),
            invest: mean(|t| t.trial.invest.into()),
            proposer_take: mean(|t| t.trial.proposer_take.into()),
            subject_take: mean(|t| t.trial.subject_take.into()),
            e_own: mean(|t| t.e_own),
            e_partner: mean(|t| t.e_partner),
            partner_violation: mean(|t| t.partner_violation().signed),
            partner_violation_abs: mean(|t| t.partner_violation().magnitude),
            own_violation: mean(|t| t.own_violation().signed),
            own_violation_abs: mean(|t| t.own_violation().magnitude),
            prev_condition,
            prev_proposer_take,
        };
        out.push(summary);
    }
    out
}

fn mean_of(trials: &[&AnnotatedTrial], f: fn(&AnnotatedTrial) -> Expectation) -> Expectation {
    let values: Vec<Option<f64>> = trials.iter().map(|&t| f(t).value()).collect();
    plain_mean(&values)
}
