use expectancy_agents::{decay_grid, summarize_blocks, sweep_decays, DyadicProcessor};
use expectancy_core::config::{DyadicConfig, SweepConfig};
use expectancy_core::models::SubjectId;
use expectancy_core::Expectation;
use test_fixtures::{proposer, responder, with_condition};

fn close(actual: Expectation, expected: f64) {
    let v = actual.value().expect("defined");
    assert!((v - expected).abs() < 1e-9, "expected {expected}, got {v}");
}

// ── Block summary ─────────────────────────────────────────────────────────

#[test]
fn blocks_summarise_with_previous_block_context() {
    let config = DyadicConfig {
        reset_on_block: true,
        ..DyadicConfig::default()
    };
    let rows = vec![
        with_condition(responder("1", 1, 6.0, true), "generous", 2.0),
        with_condition(responder("1", 1, 8.0, false), "generous", 4.0),
        with_condition(responder("1", 2, 5.0, true), "selfish", 1.0),
        with_condition(responder("1", 2, 7.0, true), "selfish", 1.0),
        with_condition(responder("2", 1, 3.0, true), "reciprocity", 0.0),
    ];
    let annotated = DyadicProcessor::new(&config).unwrap().annotate(rows);
    let summaries = summarize_blocks(&annotated);

    assert_eq!(summaries.len(), 3);
    let first = &summaries[0];
    assert_eq!(first.subject, SubjectId::from("1"));
    assert_eq!(first.condition.as_deref(), Some("generous"));
    close(first.proposer_take, 7.0);
    close(first.invest, 3.0);
    // Only the second row had an expectation: 8 - 6.
    close(first.partner_violation, 2.0);
    assert_eq!(first.prev_condition, None);
    assert!(first.prev_proposer_take.is_undefined());

    let second = &summaries[1];
    assert_eq!(second.prev_condition.as_deref(), Some("generous"));
    close(second.prev_proposer_take, 7.0);
    close(second.partner_violation, 2.0);

    // New subject: no carry-over.
    let third = &summaries[2];
    assert_eq!(third.subject, SubjectId::from("2"));
    assert_eq!(third.prev_condition, None);
    assert!(third.partner_violation.is_undefined());
}

// ── Decay grid and sweep ─────────────────────────────────────────────────

#[test]
fn default_grid_spans_one_to_ninety_nine_hundredths() {
    let grid = decay_grid(&SweepConfig::default()).unwrap();
    assert_eq!(grid.len(), 99);
    assert!((grid[0] - 0.01).abs() < 1e-12);
    assert!((grid[49] - 0.5).abs() < 1e-12);
    assert_eq!(grid[98], 0.99);
}

#[test]
fn single_step_grid_is_start() {
    let config = SweepConfig {
        start: 0.3,
        end: 0.9,
        steps: 1,
    };
    assert_eq!(decay_grid(&config).unwrap(), vec![0.3]);
}

#[test]
fn invalid_grid_is_rejected() {
    let config = SweepConfig {
        start: 0.0,
        end: 0.5,
        steps: 3,
    };
    assert!(decay_grid(&config).is_err());
}

#[test]
fn sweep_reannotates_per_decay() {
    let rows = vec![proposer("1", 1, 0.0), proposer("1", 1, 10.0), proposer("1", 1, 0.0)];
    let base = DyadicConfig::default();
    let results = sweep_decays(&rows, &base, &[1.0, 0.5]).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].decay, 1.0);
    close(results[0].rows[2].e_own, 5.0);
    assert_eq!(results[1].decay, 0.5);
    close(results[1].rows[2].e_own, 10.0 / 1.5);
}

#[test]
fn sweep_rejects_out_of_range_decay() {
    let rows = vec![proposer("1", 1, 1.0)];
    assert!(sweep_decays(&rows, &DyadicConfig::default(), &[0.5, 1.5]).is_err());
}
