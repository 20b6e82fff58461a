use crate::checks::CompatibilityCheck;
use crate::diagnostics::Message;
use crate::hardware::{Build, Cpu, Gpu};
use crate::heuristic_config::BalanceHeuristics;
use crate::metrics::{bottleneck_check, cpu_performance_score, gpu_performance_score};

/// CPU/GPU balance heuristic; silent when either score cannot be computed from the catalog data.
pub fn check_balance(cpu: &Cpu, gpu: &Gpu, config: &BalanceHeuristics) -> Vec<Message> {
    let cpu_score = cpu_performance_score(cpu);
    let gpu_score = gpu_performance_score(gpu);

    if cpu_score <= 0.0 || gpu_score <= 0.0 {
        log::debug!(
            "Skipping balance check: cpu score {}, gpu score {}",
            cpu_score,
            gpu_score
        );
        return Vec::new();
    }

    vec![bottleneck_check(cpu_score, gpu_score, config)]
}

pub struct BalanceCheck {
    config: BalanceHeuristics,
}

impl BalanceCheck {
    pub fn new(config: BalanceHeuristics) -> Self {
        Self { config }
    }
}

impl CompatibilityCheck for BalanceCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        match build.gpu {
            Some(gpu) => check_balance(build.cpu, gpu, &self.config),
            None => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "performance_balance"
    }
}
