use std::collections::BTreeMap;

use expectancy_core::config::GroupConfig;
use expectancy_core::constants::GROUP_PARTNERS;
use expectancy_core::errors::{ExpectancyError, ExpectancyResult};
use expectancy_core::models::{GroupRecord, PggTrial, RawPggRow, SubjectId};
use expectancy_core::traits::ISequentialAgent;
use expectancy_decay::Estimator;
use tracing::info;

use super::{GroupAgent, TripletReconciler};

/// Routes public-goods trials to one [`GroupAgent`] per subject.
#[derive(Debug, Clone)]
pub struct GroupProcessor {
    estimator: Estimator,
    reconciler: TripletReconciler,
    agents: BTreeMap<SubjectId, GroupAgent>,
}

impl GroupProcessor {
    pub fn new(config: &GroupConfig) -> ExpectancyResult<Self> {
        Ok(Self {
            estimator: Estimator::new(config.decay, config.depth)?,
            reconciler: TripletReconciler::from_config(config),
            agents: BTreeMap::new(),
        })
    }

    pub fn process_trial(&mut self, trial: &PggTrial) -> [GroupRecord; GROUP_PARTNERS] {
        let estimator = self.estimator;
        self.agents
            .entry(trial.subject.clone())
            .or_insert_with(|| GroupAgent::with_estimator(estimator))
            .process_row(trial)
    }

    /// Fold reconciled trials, three output records per trial.
    pub fn process_trials<'a, I>(&mut self, trials: I) -> Vec<GroupRecord>
    where
        I: IntoIterator<Item = &'a PggTrial>,
    {
        let trials = trials.into_iter();
        let span = annotate_span!("group", trials.size_hint().0);
        let _guard = span.enter();

        let records: Vec<GroupRecord> = trials.flat_map(|trial| self.process_trial(trial)).collect();
        info!(
            records = records.len(),
            subjects = self.agents.len(),
            "processed public-goods trials"
        );
        records
    }

    /// Reconcile raw rows, then fold them.
    pub fn process_raw(&mut self, rows: &[RawPggRow]) -> ExpectancyResult<Vec<GroupRecord>> {
        let trials = self.reconciler.reconcile(rows)?;
        Ok(self.process_trials(&trials))
    }

    pub fn agent(&self, subject: &SubjectId) -> Option<&GroupAgent> {
        self.agents.get(subject)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &SubjectId> {
        self.agents.keys()
    }

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
