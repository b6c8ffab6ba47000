//! Integration tests for the forwarder decision flow.
//!
//! These tests verify the end-to-end flow:
//! 1. Shipment history starts locked and refuses decisions
//! 2. Loading records opens the gate and versions the dataset
//! 3. The orchestrator aggregates, weights, and ranks forwarders
//! 4. The decision carries its audit trail and data version
//!
//! Uses the in-memory history adapter, so no external systems are involved.

use serde_json::json;
use std::sync::Arc;

use deepcal_engine::adapters::InMemoryShipmentHistory;
use deepcal_engine::application::{DecisionOrchestrator, MakeDecisionCommand};
use deepcal_engine::config::EngineConfig;
use deepcal_engine::domain::analysis::{PairwiseJudgments, Tnn};
use deepcal_engine::domain::decision::{Decision, DecisionError};
use deepcal_engine::domain::foundation::{DomainError, ErrorCode};
use deepcal_engine::domain::freight::ShipmentRecord;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Shipments as they arrive from an upload: loosely typed, some cells broken.
fn uploaded_rows() -> Vec<ShipmentRecord> {
    let rows = json!([
        { "shipment_id": "SR-001", "forwarder": "Kenya Airways Cargo", "cost": 1200, "weight_kg": 400, "transit_days": 3, "delay_days": 0 },
        { "shipment_id": "SR-002", "forwarder": "Kenya Airways Cargo", "cost": "1500", "weight_kg": "500", "transit_days": "4", "delay_days": "0" },
        { "shipment_id": "SR-003", "forwarder": "Kenya Airways Cargo", "cost": 900, "weight_kg": 300, "transit_days": 3, "delay_days": -1 },
        { "shipment_id": "SR-004", "forwarder": "Kenya Airways Cargo", "cost": 1000, "weight_kg": 350, "transit_days": "n/a", "delay_days": 1 },
        { "shipment_id": "SR-005", "forwarder": "Bolloré", "cost": 800, "weight_kg": 400, "transit_days": 9, "delay_days": 3 },
        { "shipment_id": "SR-006", "forwarder": "Bolloré", "cost": 700, "weight_kg": 350, "transit_days": 11, "delay_days": 4 },
        { "shipment_id": "SR-007", "forwarder": "Bolloré", "cost": "", "weight_kg": 100, "transit_days": 10, "delay_days": 2 },
        { "shipment_id": "SR-008", "forwarder": "Siginon", "cost": 1100, "weight_kg": 450, "transit_days": 6, "delay_days": 0 },
        { "shipment_id": "SR-009", "forwarder": "Siginon", "cost": 1050, "weight_kg": 420, "transit_days": 7, "delay_days": 1 },
        { "shipment_id": "SR-010", "forwarder": "", "cost": 500, "weight_kg": 100, "transit_days": 5, "incoterm": "FOB" }
    ]);
    serde_json::from_value(rows).expect("fixture rows deserialize")
}

fn setup() -> (InMemoryShipmentHistory, DecisionOrchestrator) {
    let history = InMemoryShipmentHistory::new();
    let orchestrator =
        DecisionOrchestrator::new(Arc::new(history.clone()), &EngineConfig::default()).unwrap();
    (history, orchestrator)
}

fn names(decision: &Decision) -> Vec<&str> {
    decision
        .ranking
        .iter()
        .map(|r| r.alternative.name.as_str())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn decisions_wait_for_validated_history() {
    let (history, orchestrator) = setup();

    let err = orchestrator
        .make_decision(MakeDecisionCommand::default())
        .unwrap_err();
    assert_eq!(err, DecisionError::DataNotLoaded);

    let domain: DomainError = err.into();
    assert_eq!(domain.code, ErrorCode::DataNotLoaded);

    history.load(uploaded_rows(), "q1-shipments.csv").unwrap();
    assert!(orchestrator.make_decision(MakeDecisionCommand::default()).is_ok());
}

#[test]
fn end_to_end_decision_ranks_every_forwarder() {
    let (history, orchestrator) = setup();
    let version = history.load(uploaded_rows(), "q1-shipments.csv").unwrap();

    let decision = orchestrator
        .make_decision(MakeDecisionCommand::default())
        .unwrap();

    assert_eq!(decision.ranking.len(), 4);
    assert_eq!(decision.data_version, version.version);
    assert_eq!(
        decision.ranking.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    for pair in decision.ranking.windows(2) {
        assert!(pair[0].closeness_coefficient >= pair[1].closeness_coefficient);
    }
    assert!((decision.criteria_weights.sum() - 1.0).abs() < 1e-9);

    // Default judgments are knowingly inconsistent (CR ~0.22); ranking proceeds.
    assert!(!decision.is_consistent);
    assert!((decision.consistency_ratio - 0.2219).abs() < 1e-3);
}

#[test]
fn blank_forwarders_are_ranked_as_unknown() {
    let (history, orchestrator) = setup();
    history.load(uploaded_rows(), "q1-shipments.csv").unwrap();

    let profiles = orchestrator.analyze_forwarders().unwrap();
    let unknown = profiles.iter().find(|p| p.name == "Unknown").unwrap();
    assert_eq!(unknown.shipment_count, 1);
    assert_eq!(unknown.on_time_rate, 1.0);
}

#[test]
fn aggregation_absorbs_malformed_cells() {
    let (history, orchestrator) = setup();
    history.load(uploaded_rows(), "q1-shipments.csv").unwrap();

    let profiles = orchestrator.analyze_forwarders().unwrap();
    let kenya = profiles
        .iter()
        .find(|p| p.name == "Kenya Airways Cargo")
        .unwrap();

    assert_eq!(kenya.shipment_count, 4);
    // (1200 + 1500 + 900 + 1000) / (400 + 500 + 300 + 350)
    assert!((kenya.avg_cost_per_kg - 4600.0 / 1550.0).abs() < 1e-9);
    // "n/a" transit is skipped: (3 + 4 + 3) / 3
    assert!((kenya.avg_transit_days - 10.0 / 3.0).abs() < 1e-9);
    assert!((kenya.on_time_rate - 0.75).abs() < 1e-9);

    let bollore = profiles.iter().find(|p| p.name == "Bolloré").unwrap();
    // the shipment with an empty cost drops out of cost/kg entirely
    assert!((bollore.avg_cost_per_kg - 1500.0 / 750.0).abs() < 1e-9);
    assert_eq!(bollore.risk_level, 100.0);
}

#[test]
fn unpriced_shipments_do_not_win_on_cost() {
    let mut rows = vec![
        ShipmentRecord::new("Clean Freight")
            .with_cost(100.0)
            .with_weight_kg(50.0)
            .with_transit_days(5.0)
            .with_delay_days(0.0),
        ShipmentRecord::new("Patchy Freight")
            .with_cost(150.0)
            .with_weight_kg(50.0)
            .with_transit_days(5.0)
            .with_delay_days(0.0),
    ];
    for _ in 0..3 {
        rows.push(
            ShipmentRecord::new("Patchy Freight")
                .with_cost("")
                .with_weight_kg(50.0)
                .with_transit_days(5.0)
                .with_delay_days(0.0),
        );
    }
    let history = InMemoryShipmentHistory::validated(rows, "patchy.csv").unwrap();
    let orchestrator =
        DecisionOrchestrator::new(Arc::new(history), &EngineConfig::default()).unwrap();

    let decision = orchestrator
        .make_decision(MakeDecisionCommand::default())
        .unwrap();
    assert_eq!(names(&decision), vec!["Clean Freight", "Patchy Freight"]);
    assert!((decision.ranking[0].closeness_coefficient - 1.0).abs() < 1e-12);
}

#[test]
fn explicit_judgments_and_subset_drive_the_ranking() {
    let (history, orchestrator) = setup();
    history.load(uploaded_rows(), "q1-shipments.csv").unwrap();
    let subset: Option<Vec<String>> = Some(vec!["Bolloré".into(), "Kenya Airways Cargo".into()]);

    // Cost over everything else; the remaining criteria are equal.
    let cost_first = PairwiseJudgments::new()
        .with("cost", "time", Tnn::new(0.95, 0.0, 0.05))
        .with("cost", "reliability", Tnn::new(0.95, 0.0, 0.05))
        .with("cost", "risk", Tnn::new(0.95, 0.0, 0.05))
        .with("time", "reliability", Tnn::new(0.5, 0.0, 0.5))
        .with("time", "risk", Tnn::new(0.5, 0.0, 0.5))
        .with("reliability", "risk", Tnn::new(0.5, 0.0, 0.5));

    let baseline = orchestrator
        .make_decision(MakeDecisionCommand {
            forwarders: subset.clone(),
            judgments: None,
        })
        .unwrap();
    let cost_driven = orchestrator
        .make_decision(MakeDecisionCommand {
            forwarders: subset,
            judgments: Some(cost_first),
        })
        .unwrap();

    assert_eq!(names(&cost_driven).len(), 2);
    let w = cost_driven.criteria_weights;
    assert!(w.cost > w.time && w.cost > w.reliability && w.cost > w.risk);
    assert!((w.time - w.reliability).abs() < 1e-9);

    // Bolloré is cheapest per kg but worse on everything else.
    let closeness = |d: &Decision| {
        d.ranking
            .iter()
            .find(|r| r.alternative.name == "Bolloré")
            .map(|r| r.closeness_coefficient)
            .unwrap()
    };
    assert!(closeness(&cost_driven) > closeness(&baseline));
    assert_eq!(baseline.recommended().unwrap().alternative.name, "Kenya Airways Cargo");
}

#[test]
fn audit_trail_explains_the_decision() {
    let (history, orchestrator) = setup();
    let version = history.load(uploaded_rows(), "q1-shipments.csv").unwrap();

    let decision = orchestrator
        .make_decision(MakeDecisionCommand::default())
        .unwrap();
    let trail = orchestrator.audit_trail(&decision);

    assert_eq!(trail, decision.audit_text);
    assert!(trail.contains(&format!("Data version: {}", version.version)));
    assert!(trail.contains(&format!("Decision id: {}", decision.id)));
    assert!(trail.contains("inconsistent, review judgments"));
    assert!(trail.contains("reliability: ") && trail.contains("(maximize)"));
    for result in &decision.ranking {
        assert!(trail.contains(&format!("{}. {}", result.rank, result.alternative.name)));
    }
}

#[test]
fn decision_serializes_for_export() {
    let history = InMemoryShipmentHistory::validated(uploaded_rows(), "q1.csv").unwrap();
    let orchestrator =
        DecisionOrchestrator::new(Arc::new(history), &EngineConfig::default()).unwrap();
    let decision = orchestrator
        .make_decision(MakeDecisionCommand::default())
        .unwrap();

    let json = serde_json::to_value(&decision).unwrap();
    assert!(json["ranking"].is_array());
    assert!(json["criteria_weights"]["reliability"].is_number());

    let back: Decision = serde_json::from_value(json).unwrap();
    assert_eq!(back.id, decision.id);
    assert_eq!(back.timestamp, decision.timestamp);
    assert_eq!(names(&back), names(&decision));
    assert_eq!(back.audit_text, decision.audit_text);
}

#[test]
fn concurrent_decisions_share_one_orchestrator() {
    let (history, orchestrator) = setup();
    history.load(uploaded_rows(), "q1-shipments.csv").unwrap();
    let expected = names(&orchestrator.make_decision(MakeDecisionCommand::default()).unwrap())
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| orchestrator.make_decision(MakeDecisionCommand::default())))
            .collect();

        // An append mid-flight must not disturb decisions already reading a snapshot.
        history
            .append(vec![ShipmentRecord::new("Siginon")
                .with_cost(1000.0)
                .with_weight_kg(400.0)
                .with_transit_days(6.0)])
            .unwrap();

        for handle in handles {
            let decision = handle.join().unwrap().unwrap();
            assert_eq!(decision.ranking.len(), expected.len());
        }
    });
}
