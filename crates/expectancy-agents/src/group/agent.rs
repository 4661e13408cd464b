use expectancy_core::config::GroupConfig;
use expectancy_core::constants::GROUP_PARTNERS;
use expectancy_core::errors::{ConfigError, ExpectancyResult};
use expectancy_core::models::{GroupRecord, PggTrial};
use expectancy_core::traits::ISequentialAgent;
use expectancy_core::Expectation;
use expectancy_decay::{weighted_average, Estimator, HistoryBuffer};

use super::punishment::{PunishmentExpectations, PunishmentLedger};

/// The three received-contribution expectations for every partner.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ReceivedExpectations {
    r_avg_prev: Expectation,
    specific: [Expectation; GROUP_PARTNERS],
    sans_trial: [Expectation; GROUP_PARTNERS],
    sans_person: [Expectation; GROUP_PARTNERS],
}

/// Running expectations for one subject in the public-goods game.
///
/// Three formulations of "what I expected partner `i` to contribute" are
/// produced side by side:
///
/// - `specific`: partner `i`'s own history, current trial excluded.
/// - `sans_trial`: every contribution so far except partner `i`'s current
///   one. Partner `i`'s term is its `specific` value, down-weighted by
///   `decay · (n_i - 1) / n_i`; the other two partners enter with their
///   current-trial-inclusive averages at weight 1.
/// - `sans_person`: mean of the other two partners' inclusive averages.
#[derive(Debug, Clone)]
pub struct GroupAgent {
    estimator: Estimator,
    /// Own contributions, current trial included once observed.
    own_offers: HistoryBuffer,
    /// Per-trial mean of the partners' contributions.
    group_avg_offers: HistoryBuffer,
    partner_offers: [HistoryBuffer; GROUP_PARTNERS],
    punishment: PunishmentLedger,
    rows_seen: usize,
}

impl GroupAgent {
    pub fn new(decay: f64, depth: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_estimator(Estimator::new(decay, depth)?))
    }

    pub fn from_config(config: &GroupConfig) -> ExpectancyResult<Self> {
        Ok(Self::new(config.decay, config.depth)?)
    }

    pub fn with_estimator(estimator: Estimator) -> Self {
        Self {
            estimator,
            own_offers: HistoryBuffer::new(),
            group_avg_offers: HistoryBuffer::new(),
            partner_offers: Default::default(),
            punishment: PunishmentLedger::new(),
            rows_seen: 0,
        }
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn partner_offers(&self, partner: usize) -> Option<&HistoryBuffer> {
        self.partner_offers.get(partner)
    }

    pub fn own_offers(&self) -> &HistoryBuffer {
        &self.own_offers
    }

    pub fn punishment(&self) -> &PunishmentLedger {
        &self.punishment
    }

    /// Reflective: includes the current trial's own contribution.
    fn update_own(&mut self, row: &PggTrial) -> Expectation {
        self.own_offers.push(row.s_contrib);
        self.estimator.of(&self.own_offers)
    }

    fn update_received(&mut self, row: &PggTrial) -> ReceivedExpectations {
        let specific: [Expectation; GROUP_PARTNERS] =
            std::array::from_fn(|i| self.estimator.of(&self.partner_offers[i]));
        let r_avg_prev = self.group_avg_offers.last();

        self.group_avg_offers.push(row.r_avg);
        for (history, value) in self.partner_offers.iter_mut().zip(row.r) {
            history.push(value);
        }

        let inclusive: [Expectation; GROUP_PARTNERS] =
            std::array::from_fn(|i| self.estimator.of(&self.partner_offers[i]));

        let sans_trial = std::array::from_fn(|i| {
            let terms: Vec<(Expectation, f64)> = (0..GROUP_PARTNERS)
                .map(|j| {
                    if j == i {
                        (specific[i], self.self_weight(i))
                    } else {
                        (inclusive[j], 1.0)
                    }
                })
                .collect();
            weighted_average(&terms)
        });

        let sans_person = std::array::from_fn(|i| {
            let peers = (0..GROUP_PARTNERS)
                .filter(|&j| j != i)
                .map(|j| inclusive[j])
                .fold(Expectation::Defined(0.0), |acc, e| acc + e);
            peers / (GROUP_PARTNERS - 1) as f64
        });

        ReceivedExpectations {
            r_avg_prev,
            specific,
            sans_trial,
            sans_person,
        }
    }

    /// Weight of partner `i`'s own term once its current contribution is
    /// left out: it has contributed one observation fewer.
    fn self_weight(&self, partner: usize) -> f64 {
        let n = self.partner_offers[partner].len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        self.estimator.decay() * (n - 1.0) / n
    }

    fn record(
        row: &PggTrial,
        target: usize,
        e_own: Expectation,
        received: &ReceivedExpectations,
        punishment: &PunishmentExpectations,
    ) -> GroupRecord {
        GroupRecord {
            group_id: row.group_id.clone(),
            subject: row.subject.clone(),
            city: row.city.clone(),
            period: row.period,
            s_contrib: row.s_contrib,
            female: row.female,
            age: row.age,
            target,
            r: row.r[target],
            punish: row.punish[target],
            e_own,
            r_avg_prev: received.r_avg_prev,
            e_specific: received.specific[target],
            e_sans_trial: received.sans_trial[target],
            e_sans_person: received.sans_person[target],
            e_punish_given: punishment.e_given,
            e_punish_received: punishment.e_received,
            prev_received_punishment: punishment.prev_received,
        }
    }
}

impl ISequentialAgent for GroupAgent {
    type Row = PggTrial;
    type Output = [GroupRecord; GROUP_PARTNERS];

    fn process_row(&mut self, row: &PggTrial) -> [GroupRecord; GROUP_PARTNERS] {
        let e_own = self.update_own(row);
        let received = self.update_received(row);
        let punishment = self.punishment.observe(row);
        self.rows_seen += 1;

        std::array::from_fn(|target| Self::record(row, target, e_own, &received, &punishment))
    }

    fn reset(&mut self) {
        self.own_offers.clear();
        self.group_avg_offers.clear();
        for history in &mut self.partner_offers {
            history.clear();
        }
        self.punishment.clear();
        self.rows_seen = 0;
    }

    fn rows_seen(&self) -> usize {
        self.rows_seen
    }
}
