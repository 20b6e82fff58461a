//! Rule Evaluator
//!
//! Runs every compatibility check over a build in a fixed order and hands the
//! collected messages to the aggregator.

use crate::checks::clearance::{CoolerClearanceCheck, FormFactorCheck, GpuClearanceCheck};
use crate::checks::cooling::CoolingCheck;
use crate::checks::expansion::PcieCheck;
use crate::checks::graphics::GraphicsCheck;
use crate::checks::memory::MemoryCheck;
use crate::checks::performance::BalanceCheck;
use crate::checks::power::PowerCheck;
use crate::checks::socket::SocketCheck;
use crate::checks::storage::StorageCheck;
use crate::checks::CompatibilityCheck;
use crate::diagnostics::{aggregate, CompatibilityResult, Message, Severity};
use crate::hardware::ConfigurationRequest;
use crate::heuristic_config::HeuristicConfig;

pub const MISSING_REQUIRED: &str =
    "A CPU and a mainboard are required before compatibility can be checked";

pub struct RuleEvaluator {
    checks: Vec<Box<dyn CompatibilityCheck>>,
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl RuleEvaluator {
    /// Builds the check pipeline from `config`.
    ///
    /// The config is used as given; run [`HeuristicConfig::validate`] first on
    /// values that did not come from [`HeuristicConfig::load_from_file`].
    pub fn new(config: HeuristicConfig) -> Self {
        Self {
            checks: vec![
                Box::new(GraphicsCheck),
                Box::new(SocketCheck),
                Box::new(MemoryCheck::new(config.memory)),
                Box::new(PcieCheck),
                Box::new(PowerCheck::new(config.power)),
                Box::new(StorageCheck),
                Box::new(FormFactorCheck),
                Box::new(GpuClearanceCheck),
                Box::new(CoolerClearanceCheck),
                Box::new(CoolingCheck::new(config.cooling)),
                Box::new(BalanceCheck::new(config.balance)),
            ],
        }
    }

    /// Names of the registered checks, in execution order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    pub fn evaluate(&self, request: &ConfigurationRequest) -> CompatibilityResult {
        let Some(build) = request.build() else {
            log::debug!(
                "Precondition failed: cpu present={}, mainboard present={}",
                request.cpu.is_some(),
                request.mainboard.is_some()
            );
            return aggregate(vec![Message::error(MISSING_REQUIRED)]);
        };

        let mut raw = Vec::new();
        for check in &self.checks {
            let messages = check.check(&build);
            log::debug!("Check {} produced {} message(s)", check.name(), messages.len());
            raw.extend(messages);
        }

        let result = aggregate(raw);
        log::info!(
            "Compatibility of {} + {}: {} ({} errors, {} warnings)",
            build.cpu.name,
            build.mainboard.name,
            if result.is_compatible() {
                "compatible"
            } else {
                "incompatible"
            },
            result.count(Severity::Error),
            result.count(Severity::Warning)
        );
        result
    }
}

/// Evaluate with the default heuristics.
pub fn evaluate(request: &ConfigurationRequest) -> CompatibilityResult {
    RuleEvaluator::default().evaluate(request)
}
