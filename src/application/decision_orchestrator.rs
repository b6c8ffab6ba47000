//! DecisionOrchestrator - Turns shipment history into a ranked forwarder decision.
//!
//! Composes the aggregator, the AHP weight solver, and the TOPSIS ranker
//! behind the dataset gate. Holds no mutable state; one instance can serve
//! concurrent callers.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{EngineConfig, ValidationError};
use crate::domain::analysis::{
    AhpResult, NeutrosophicAhp, PairwiseJudgments, PairwiseMatrix, TopsisRanker,
};
use crate::domain::decision::{
    render_audit_trail, validate_judgments, CriteriaWeights, Decision, DecisionError,
    FreightCriterion, ProfileScaling, DEFAULT_JUDGMENTS, UNKNOWN_DATA_VERSION,
};
use crate::domain::foundation::{DecisionId, Timestamp};
use crate::domain::freight::{ForwarderAggregator, ForwarderProfile};
use crate::ports::{HistorySnapshot, ShipmentHistory};

/// Command to produce a forwarder decision.
#[derive(Debug, Clone, Default)]
pub struct MakeDecisionCommand {
    /// Restrict ranking to these forwarders. `None` ranks the busiest ones.
    pub forwarders: Option<Vec<String>>,
    /// Pairwise criterion judgments. `None` uses the defaults.
    pub judgments: Option<PairwiseJudgments>,
}

/// Criterion weights with the diagnostics that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaWeighting {
    pub weights: CriteriaWeights,
    pub ahp: AhpResult,
}

/// Stateless decision service.
pub struct DecisionOrchestrator {
    history: Arc<dyn ShipmentHistory>,
    aggregator: ForwarderAggregator,
    ahp: NeutrosophicAhp,
    ranker: TopsisRanker,
    scaling: ProfileScaling,
    candidate_limit: usize,
    normalize_weights: bool,
}

impl DecisionOrchestrator {
    /// Builds the service over `history` after validating `config`.
    ///
    /// # Errors
    ///
    /// The first invalid setting in `config`.
    pub fn new(
        history: Arc<dyn ShipmentHistory>,
        config: &EngineConfig,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            history,
            aggregator: ForwarderAggregator::new(),
            ahp: NeutrosophicAhp::new(config.ahp.options()),
            ranker: TopsisRanker::new(),
            scaling: config.decision.scaling(),
            candidate_limit: config.decision.candidate_limit,
            normalize_weights: config.decision.normalize_weights,
        })
    }

    /// Profiles for every forwarder in the current dataset.
    ///
    /// # Errors
    ///
    /// `DataNotLoaded` while the dataset is locked.
    pub fn analyze_forwarders(&self) -> Result<Vec<ForwarderProfile>, DecisionError> {
        let snapshot = self.snapshot()?;
        Ok(self.aggregator.aggregate(&snapshot.records))
    }

    /// Derives criterion weights from `judgments`, or from the defaults.
    ///
    /// Does not touch the dataset, so it works while the gate is locked.
    ///
    /// # Errors
    ///
    /// `UnknownCriterion` if a judgment names something other than
    /// cost, time, reliability, or risk.
    pub fn calculate_criteria_weights(
        &self,
        judgments: Option<&PairwiseJudgments>,
    ) -> Result<CriteriaWeighting, DecisionError> {
        let judgments = match judgments {
            Some(custom) => {
                validate_judgments(custom)?;
                custom
            }
            None => &*DEFAULT_JUDGMENTS,
        };

        let matrix = PairwiseMatrix::from_judgments(&FreightCriterion::names(), judgments);
        let ahp = self.ahp.calculate_weights(&matrix);

        let weights = CriteriaWeights::from_ordered(&ahp.weights);
        let weights = if self.normalize_weights {
            weights.normalized()
        } else {
            weights
        };

        Ok(CriteriaWeighting { weights, ahp })
    }

    /// Ranks forwarders and returns the decision with its audit trail.
    ///
    /// # Errors
    ///
    /// - `DataNotLoaded` while the dataset is locked
    /// - `NoAlternatives` if no forwarder is left to rank
    /// - `UnknownCriterion` for judgments outside the freight criteria
    /// - `MissingValue` if a candidate cannot be scored on every criterion
    pub fn make_decision(&self, command: MakeDecisionCommand) -> Result<Decision, DecisionError> {
        let snapshot = self.snapshot()?;
        let profiles = self.aggregator.aggregate(&snapshot.records);
        let candidates = self.select_candidates(profiles, command.forwarders.as_deref());
        if candidates.is_empty() {
            return Err(DecisionError::NoAlternatives);
        }

        let weighting = self.calculate_criteria_weights(command.judgments.as_ref())?;
        if !weighting.ahp.is_consistent {
            warn!(
                consistency_ratio = weighting.ahp.consistency_ratio,
                threshold = self.ahp.options().consistency_threshold,
                "Pairwise judgments are inconsistent; ranking anyway"
            );
        }

        for profile in candidates.iter().filter(|p| p.has_default_metrics()) {
            warn!(
                forwarder = %profile.name,
                avg_cost_per_kg = profile.avg_cost_per_kg,
                avg_transit_days = profile.avg_transit_days,
                "Ranking forwarder with no readable cost or transit data"
            );
        }

        let alternatives: Vec<_> = candidates
            .iter()
            .map(|profile| self.scaling.to_alternative(profile))
            .collect();
        let ranking = self
            .ranker
            .rank(&alternatives, &weighting.weights.to_criteria())?;

        let mut decision = Decision {
            id: DecisionId::new(),
            ranking,
            criteria_weights: weighting.weights,
            consistency_ratio: weighting.ahp.consistency_ratio,
            is_consistent: weighting.ahp.is_consistent,
            audit_text: String::new(),
            data_version: snapshot
                .version
                .map(|v| v.version)
                .unwrap_or_else(|| UNKNOWN_DATA_VERSION.to_string()),
            timestamp: Timestamp::now(),
        };
        decision.audit_text = render_audit_trail(&decision);

        info!(
            decision_id = %decision.id,
            candidates = decision.ranking.len(),
            recommended = decision
                .recommended()
                .map(|r| r.alternative.name.as_str())
                .unwrap_or_default(),
            data_version = %decision.data_version,
            "Forwarder decision completed"
        );

        Ok(decision)
    }

    /// Full audit trail text for `decision`.
    pub fn audit_trail(&self, decision: &Decision) -> String {
        render_audit_trail(decision)
    }

    fn snapshot(&self) -> Result<HistorySnapshot, DecisionError> {
        if self.history.is_locked() {
            return Err(DecisionError::DataNotLoaded);
        }
        self.history.snapshot().ok_or(DecisionError::DataNotLoaded)
    }

    fn select_candidates(
        &self,
        profiles: Vec<ForwarderProfile>,
        requested: Option<&[String]>,
    ) -> Vec<ForwarderProfile> {
        match requested {
            Some(names) => {
                let wanted: BTreeSet<&str> = names.iter().map(String::as_str).collect();
                let known: BTreeSet<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
                for missing in wanted.difference(&known) {
                    debug!(forwarder = %missing, "Requested forwarder has no shipment history");
                }
                profiles
                    .into_iter()
                    .filter(|p| wanted.contains(p.name.as_str()))
                    .collect()
            }
            None => profiles.into_iter().take(self.candidate_limit).collect(),
        }
    }
}
