use expectancy_agents::{DyadicAgent, DyadicProcessor};
use expectancy_core::config::DyadicConfig;
use expectancy_core::errors::ExpectancyError;
use expectancy_core::models::*;
use expectancy_core::traits::ISequentialAgent;
use expectancy_core::Expectation;
use test_fixtures::*;

fn assert_expectation(actual: Expectation, expected: Option<f64>) {
    match (actual.value(), expected) {
        (None, None) => {}
        (Some(a), Some(e)) => assert!((a - e).abs() < 1e-9, "expected {e}, got {a}"),
        _ => panic!("expected {expected:?}, got {actual:?}"),
    }
}

fn config(decay: f64, depth: usize, reset_on_block: bool) -> DyadicConfig {
    DyadicConfig {
        decay,
        depth,
        reset_on_block,
        ..DyadicConfig::default()
    }
}

// ── Worked example ────────────────────────────────────────────────────────

#[test]
fn proposer_responder_proposer_sequence() {
    let mut agent = DyadicAgent::new(1.0, 400, false).unwrap();

    let first = agent.process_row(&proposer("1", 1, 5.0));
    assert!(first.e_own.is_undefined());
    assert!(first.e_partner.is_undefined());

    let second = agent.process_row(&responder("1", 1, 7.0, true));
    assert_eq!(second.e_own, Expectation::Defined(5.0));
    assert!(second.e_partner.is_undefined());

    let third = agent.process_row(&proposer("1", 1, 3.0));
    assert_eq!(third.e_own, Expectation::Defined(5.0));
    assert_eq!(third.e_partner, Expectation::Defined(7.0));
}

#[test]
fn fixture_scenarios_match_expected_estimates() {
    let scenarios: Vec<DyadicScenario> = load_fixture("dyadic_scenarios.json");
    assert!(!scenarios.is_empty());
    for scenario in scenarios {
        let mut agent =
            DyadicAgent::new(scenario.decay, scenario.depth, scenario.reset_on_block).unwrap();
        for (row, (e_own, e_partner)) in scenario.rows.iter().zip(&scenario.expected) {
            let out = agent.process_row(row);
            assert_expectation(out.e_own, *e_own);
            assert_expectation(out.e_partner, *e_partner);
        }
    }
}

// ── Block resets ──────────────────────────────────────────────────────────

#[test]
fn reset_on_block_isolates_new_block() {
    let mut agent = DyadicAgent::new(1.0, 400, true).unwrap();
    agent.process_row(&proposer("1", 1, 9.0));
    agent.process_row(&responder("1", 1, 9.0, false));

    let first_of_block_two = agent.process_row(&proposer("1", 2, 1.0));
    assert!(first_of_block_two.e_own.is_undefined());
    assert!(first_of_block_two.e_partner.is_undefined());
    assert!(first_of_block_two.e_response.is_undefined());
    assert_eq!(agent.last_block(), Some(2));
}

#[test]
fn reset_applies_on_every_transition() {
    let mut agent = DyadicAgent::new(1.0, 400, true).unwrap();
    agent.process_row(&proposer("1", 1, 2.0));
    agent.process_row(&proposer("1", 2, 4.0));
    // Back to block 1: still a transition, history starts over.
    let out = agent.process_row(&proposer("1", 1, 6.0));
    assert!(out.e_own.is_undefined());
    let out = agent.process_row(&proposer("1", 1, 8.0));
    assert_eq!(out.e_own, Expectation::Defined(6.0));
}

#[test]
fn without_reset_history_spans_blocks() {
    let mut agent = DyadicAgent::new(1.0, 400, false).unwrap();
    agent.process_row(&proposer("1", 1, 2.0));
    let out = agent.process_row(&proposer("1", 2, 4.0));
    assert_eq!(out.e_own, Expectation::Defined(2.0));
}

// ── Role handling ─────────────────────────────────────────────────────────

#[test]
fn unknown_role_is_reported_and_leaves_history_untouched() {
    let mut agent = DyadicAgent::new(1.0, 400, false).unwrap();
    agent.process_row(&proposer("1", 1, 5.0));

    let odd = with_role(proposer("1", 1, 100.0), "observer");
    let out = agent.process_row(&odd);
    assert_eq!(
        out.update,
        HistoryUpdate::Unhandled {
            role: "observer".to_string()
        }
    );
    assert_eq!(out.e_own, Expectation::Defined(5.0));
    assert_eq!(agent.own_offers().len(), 1);
    assert!(agent.partner_offers().is_empty());

    let next = agent.process_row(&proposer("1", 1, 1.0));
    assert_eq!(next.e_own, Expectation::Defined(5.0));
}

#[test]
fn responder_rows_feed_response_history() {
    let mut agent = DyadicAgent::new(1.0, 400, false).unwrap();
    agent.process_row(&responder("1", 1, 8.0, false));
    agent.process_row(&responder("1", 1, 6.0, true));
    agent.process_row(&responder("1", 1, 5.0, true));
    let out = agent.process_row(&proposer("1", 1, 5.0));
    assert_eq!(out.update, HistoryUpdate::Proposer);
    assert!((out.e_response.value().unwrap() - 2.0 / 3.0).abs() < 1e-12);
    assert!((out.e_partner.value().unwrap() - 19.0 / 3.0).abs() < 1e-12);
    assert_eq!(agent.response_history().len(), 3);
}

#[test]
fn missing_offer_does_not_shift_estimate() {
    let mut agent = DyadicAgent::new(1.0, 400, false).unwrap();
    agent.process_row(&proposer("1", 1, 4.0));
    let mut gap = proposer("1", 1, 0.0);
    gap.subject_take = None;
    agent.process_row(&gap);
    let out = agent.process_row(&proposer("1", 1, 0.0));
    assert_eq!(out.e_own, Expectation::Defined(4.0));
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(DyadicAgent::new(0.0, 400, false).is_err());
    assert!(DyadicAgent::new(0.5, 0, false).is_err());
    assert!(DyadicAgent::from_config(&config(2.0, 10, true)).is_err());
}

// ── Processor ─────────────────────────────────────────────────────────────

#[test]
fn processor_keeps_subjects_independent() {
    let mut processor = DyadicProcessor::new(&config(1.0, 400, false)).unwrap();
    processor.process_row(&proposer("a", 1, 2.0));
    processor.process_row(&proposer("b", 1, 8.0));

    let a = processor.process_row(&proposer("a", 1, 0.0));
    let b = processor.process_row(&proposer("b", 1, 0.0));
    assert_eq!(a.e_own, Expectation::Defined(2.0));
    assert_eq!(b.e_own, Expectation::Defined(8.0));
    assert_eq!(processor.subjects().count(), 2);
}

#[test]
fn annotate_attaches_expectations_in_order() {
    expectancy_agents::tracing_setup::init_tracing();
    let mut processor = DyadicProcessor::new(&config(1.0, 400, false)).unwrap();
    let rows = vec![
        proposer("1", 1, 5.0),
        responder("1", 1, 7.0, true),
        proposer("1", 1, 3.0),
    ];
    let annotated = processor.annotate(rows.clone());
    assert_eq!(annotated.len(), 3);
    assert_eq!(annotated[2].trial, rows[2]);
    assert_eq!(annotated[2].e_own, Expectation::Defined(5.0));
    assert_eq!(annotated[2].e_partner, Expectation::Defined(7.0));
}

#[test]
fn annotate_recodes_received_against_configured_stake() {
    let cfg = DyadicConfig {
        stake: 4.0,
        ..config(1.0, 400, false)
    };
    let rows = vec![responder("1", 1, 7.0, true), proposer("1", 1, 3.0)];

    let annotated = DyadicProcessor::new(&cfg).unwrap().annotate(rows.clone());
    assert_eq!(annotated[0].received, Some(-3.0));
    assert_eq!(annotated[1].received, None);

    let defaults = DyadicProcessor::new(&DyadicConfig::default())
        .unwrap()
        .annotate(rows.clone());
    assert_eq!(defaults[0].received, Some(3.0));

    let parallel = DyadicProcessor::annotate_parallel(&cfg, rows).unwrap();
    assert_eq!(parallel, annotated);

    let json = serde_json::to_value(&annotated[0]).unwrap();
    assert_eq!(json["received"], serde_json::json!(-3.0));
}

#[test]
fn parallel_annotation_matches_sequential() {
    let cfg = config(0.8, 3, true);
    let rows: Vec<DyadicTrial> = (0..40)
        .map(|i| {
            let subject = ["a", "b", "c"][i % 3];
            let block = (i / 10) as i64;
            if i % 2 == 0 {
                proposer(subject, block, (i % 7) as f64)
            } else {
                responder(subject, block, (i % 5) as f64, i % 4 == 1)
            }
        })
        .collect();

    let sequential = DyadicProcessor::new(&cfg).unwrap().annotate(rows.clone());
    let parallel = DyadicProcessor::annotate_parallel(&cfg, rows).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn reset_subject_requires_known_subject() {
    let mut processor = DyadicProcessor::new(&config(1.0, 400, false)).unwrap();
    processor.process_row(&proposer("a", 1, 2.0));
    processor.reset_subject(&SubjectId::from("a")).unwrap();
    assert_eq!(processor.agent(&SubjectId::from("a")).unwrap().rows_seen(), 0);

    let err = processor.reset_subject(&SubjectId::from("zz")).unwrap_err();
    assert!(matches!(err, ExpectancyError::UnknownSubject { .. }));
}

#[test]
fn violations_against_partner_expectation() {
    let mut processor = DyadicProcessor::new(&config(1.0, 400, false)).unwrap();
    let annotated = processor.annotate(vec![
        responder("1", 1, 6.0, true),
        responder("1", 1, 9.0, false),
    ]);
    assert!(annotated[0].partner_violation().signed.is_undefined());
    let v = annotated[1].partner_violation();
    assert_eq!(v.signed, Expectation::Defined(3.0));
    assert_eq!(v.magnitude, Expectation::Defined(3.0));
}
