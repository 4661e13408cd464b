use expectancy_core::config::DyadicConfig;
use expectancy_core::errors::{ConfigError, ExpectancyResult};
use expectancy_core::models::{DyadicExpectations, DyadicTrial, HistoryUpdate, Role};
use expectancy_core::traits::ISequentialAgent;
use expectancy_decay::{Estimator, HistoryBuffer};
use tracing::debug;

/// Running expectations for one subject in the ultimatum / trust game.
///
/// Expectations for a trial are snapshotted before the trial is folded in,
/// so the estimate for row `n` is a function of rows `1..n-1` only.
#[derive(Debug, Clone)]
pub struct DyadicAgent {
    estimator: Estimator,
    reset_on_block: bool,
    /// Amounts the subject took as proposer.
    own_offers: HistoryBuffer,
    /// Amounts partners took while the subject responded.
    partner_offers: HistoryBuffer,
    /// Responses as 1.0 (accept) / 0.0 (reject).
    response_history: HistoryBuffer,
    last_block: Option<i64>,
    rows_seen: usize,
}

impl DyadicAgent {
    pub fn new(decay: f64, depth: usize, reset_on_block: bool) -> Result<Self, ConfigError> {
        Ok(Self::with_estimator(
            Estimator::new(decay, depth)?,
            reset_on_block,
        ))
    }

    pub fn from_config(config: &DyadicConfig) -> ExpectancyResult<Self> {
        Ok(Self::new(config.decay, config.depth, config.reset_on_block)?)
    }

    pub fn with_estimator(estimator: Estimator, reset_on_block: bool) -> Self {
        Self {
            estimator,
            reset_on_block,
            own_offers: HistoryBuffer::new(),
            partner_offers: HistoryBuffer::new(),
            response_history: HistoryBuffer::new(),
            last_block: None,
            rows_seen: 0,
        }
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn own_offers(&self) -> &HistoryBuffer {
        &self.own_offers
    }

    pub fn partner_offers(&self) -> &HistoryBuffer {
        &self.partner_offers
    }

    pub fn response_history(&self) -> &HistoryBuffer {
        &self.response_history
    }

    pub fn last_block(&self) -> Option<i64> {
        self.last_block
    }

    fn clear_histories(&mut self) {
        self.own_offers.clear();
        self.partner_offers.clear();
        self.response_history.clear();
    }
}

impl ISequentialAgent for DyadicAgent {
    type Row = DyadicTrial;
    type Output = DyadicExpectations;

    fn process_row(&mut self, row: &DyadicTrial) -> DyadicExpectations {
        if self.reset_on_block && self.last_block != Some(row.block) {
            if let Some(previous) = self.last_block {
                debug!(subject = %row.subject, from = previous, to = row.block, "block changed, clearing history");
            }
            self.clear_histories();
            self.last_block = Some(row.block);
        }

        let e_own = self.estimator.of(&self.own_offers);
        let e_partner = self.estimator.of(&self.partner_offers);
        let e_response = self.estimator.of(&self.response_history);

        // Append only after the snapshot above.
        let update = match row.role() {
            Some(Role::Proposer) => {
                self.own_offers.push(row.subject_take);
                HistoryUpdate::Proposer
            }
            Some(Role::Responder) => {
                self.partner_offers.push(row.proposer_take);
                self.response_history
                    .push(row.subject_response.map(|accepted| if accepted { 1.0 } else { 0.0 }));
                HistoryUpdate::Responder
            }
            None => {
                debug!(subject = %row.subject, role = %row.role, "unrecognised role, history untouched");
                HistoryUpdate::Unhandled {
                    role: row.role.clone(),
                }
            }
        };
        self.rows_seen += 1;

        DyadicExpectations {
            e_own,
            e_partner,
            e_response,
            update,
        }
    }

    fn reset(&mut self) {
        self.clear_histories();
        self.last_block = None;
        self.rows_seen = 0;
    }

    fn rows_seen(&self) -> usize {
        self.rows_seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectancy_core::models::SubjectId;
    use expectancy_core::Expectation;

    fn row(block: i64, role: &str, subject_take: f64, proposer_take: f64) -> DyadicTrial {
        DyadicTrial {
            subject: SubjectId::from("1"),
            block,
            role: role.to_string(),
            subject_take: Some(subject_take),
            proposer_take: Some(proposer_take),
            subject_response: Some(true),
            condition: None,
            invest: None,
        }
    }

    #[test]
    fn no_reset_without_flag() {
        let mut agent = DyadicAgent::new(1.0, 400, false).unwrap();
        agent.process_row(&row(1, "p", 4.0, 0.0));
        let out = agent.process_row(&row(2, "p", 6.0, 0.0));
        assert_eq!(out.e_own, Expectation::Defined(4.0));
    }

    #[test]
    fn explicit_reset_forgets_block() {
        let mut agent = DyadicAgent::new(1.0, 400, true).unwrap();
        agent.process_row(&row(3, "r", 0.0, 8.0));
        agent.reset();
        assert_eq!(agent.last_block(), None);
        assert_eq!(agent.rows_seen(), 0);
        assert!(agent.partner_offers().is_empty());
    }
}
