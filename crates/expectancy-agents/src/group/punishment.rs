use expectancy_core::models::PggTrial;
use expectancy_core::Expectation;
use expectancy_decay::{plain_mean, HistoryBuffer};
use serde::{Deserialize, Serialize};

/// Punishment expectations for one trial, from earlier trials only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PunishmentExpectations {
    /// Mean punishment the subject handed out per partner.
    pub e_given: Expectation,
    /// Mean punishment the subject received.
    pub e_received: Expectation,
    /// Punishment received on the previous trial.
    pub prev_received: Expectation,
}

/// Unweighted punishment history. No decay and no window: every earlier
/// trial counts equally.
#[derive(Debug, Clone, Default)]
pub struct PunishmentLedger {
    given: HistoryBuffer,
    received: HistoryBuffer,
}

impl PunishmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read expectations, then record this trial.
    pub fn observe(&mut self, row: &PggTrial) -> PunishmentExpectations {
        let expectations = PunishmentExpectations {
            e_given: plain_mean(self.given.as_slice()),
            e_received: plain_mean(self.received.as_slice()),
            prev_received: self.received.last(),
        };
        self.received.push(row.received_punishment);
        self.given.push(row.punish_avg());
        expectations
    }

    pub fn given(&self) -> &HistoryBuffer {
        &self.given
    }

    pub fn received(&self) -> &HistoryBuffer {
        &self.received
    }

    pub fn clear(&mut self) {
        self.given.clear();
        self.received.clear();
    }
}
