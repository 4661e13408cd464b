use std::collections::BTreeMap;

use expectancy_core::config::DyadicConfig;
use expectancy_core::errors::{ExpectancyError, ExpectancyResult};
use expectancy_core::models::{AnnotatedTrial, DyadicExpectations, DyadicTrial, HistoryUpdate, SubjectId};
use expectancy_core::traits::ISequentialAgent;
use expectancy_decay::Estimator;
use rayon::prelude::*;
use tracing::info;

use super::DyadicAgent;

/// Routes two-party trials to one [`DyadicAgent`] per subject.
///
/// Agents are created when a subject's first row arrives and live until
/// [`DyadicProcessor::reset_subject`] or the processor is dropped. Rows of
/// different subjects may interleave; rows of one subject must be in order.
#[derive(Debug, Clone)]
pub struct DyadicProcessor {
    estimator: Estimator,
    reset_on_block: bool,
    stake: f64,
    agents: BTreeMap<SubjectId, DyadicAgent>,
}

impl DyadicProcessor {
    pub fn new(config: &DyadicConfig) -> ExpectancyResult<Self> {
        Ok(Self {
            estimator: Estimator::new(config.decay, config.depth)?,
            reset_on_block: config.reset_on_block,
            stake: config.stake,
            agents: BTreeMap::new(),
        })
    }

    pub fn process_row(&mut self, row: &DyadicTrial) -> DyadicExpectations {
        let (estimator, reset_on_block) = (self.estimator, self.reset_on_block);
        self.agents
            .entry(row.subject.clone())
            .or_insert_with(|| DyadicAgent::with_estimator(estimator, reset_on_block))
            .process_row(row)
    }

    /// Fold a whole stream, attaching expectations to every row.
    pub fn annotate<I>(&mut self, rows: I) -> Vec<AnnotatedTrial>
    where
        I: IntoIterator<Item = DyadicTrial>,
    {
        let rows = rows.into_iter();
        let span = annotate_span!("dyadic", rows.size_hint().0);
        let _guard = span.enter();

        let stake = self.stake;
        let mut unhandled = 0usize;
        let annotated: Vec<AnnotatedTrial> = rows
            .map(|trial| {
                let expectations = self.process_row(&trial);
                if matches!(expectations.update, HistoryUpdate::Unhandled { .. }) {
                    unhandled += 1;
                }
                AnnotatedTrial::new(trial, expectations, stake)
            })
            .collect();

        info!(
            rows = annotated.len(),
            subjects = self.agents.len(),
            unhandled,
            "annotated two-party trials"
        );
        annotated
    }

    /// Annotate with one worker per subject. Output order matches input order.
    ///
    /// Equivalent to [`DyadicProcessor::annotate`] on a fresh processor:
    /// subjects share no state, and each subject's rows are still folded
    /// sequentially.
    pub fn annotate_parallel(
        config: &DyadicConfig,
        rows: Vec<DyadicTrial>,
    ) -> ExpectancyResult<Vec<AnnotatedTrial>> {
        let estimator = Estimator::new(config.decay, config.depth)?;
        let total = rows.len();

        let mut partitions: BTreeMap<SubjectId, Vec<(usize, DyadicTrial)>> = BTreeMap::new();
        for (index, row) in rows.into_iter().enumerate() {
            partitions.entry(row.subject.clone()).or_default().push((index, row));
        }

        let mut indexed: Vec<(usize, AnnotatedTrial)> = partitions
            .into_par_iter()
            .flat_map_iter(|(_, subject_rows)| {
                let mut agent = DyadicAgent::with_estimator(estimator, config.reset_on_block);
                subject_rows
                    .into_iter()
                    .map(|(index, trial)| {
                        let expectations = agent.process_row(&trial);
                        (index, AnnotatedTrial::new(trial, expectations, config.stake))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        indexed.sort_unstable_by_key(|(index, _)| *index);

        info!(rows = total, "annotated two-party trials in parallel");
        Ok(indexed.into_iter().map(|(_, annotated)| annotated).collect())
    }

    pub fn stake(&self) -> f64 {
        self.stake
    }

    pub fn agent(&self, subject: &SubjectId) -> Option<&DyadicAgent> {
        self.agents.get(subject)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &SubjectId> {
        self.agents.keys()
    }

    /// Clear one subject's history.
    pub fn reset_subject(&mut self, subject: &SubjectId) -> ExpectancyResult<()> {
        let agent = self
            .agents
            .get_mut(subject)
            .ok_or_else(|| ExpectancyError::UnknownSubject {
                subject: subject.to_string(),
            })?;
        agent.reset();
        Ok(())
    }
}
