//! Metric calculators: the numeric heuristics the checks lean on.
//!
//! Every function here is pure. The scores are relative figures used to compare
//! parts against each other, not benchmarks.

use crate::diagnostics::Message;
use crate::hardware::{Cooling, CoolingType, Cpu, Gpu, Mainboard};
use crate::heuristic_config::{BalanceHeuristics, CoolingHeuristics, MemoryHeuristics};
use regex::Regex;
use std::sync::OnceLock;

fn non_numeric() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9.]").expect("valid non-numeric pattern"))
}

fn first_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid number pattern"))
}

/// Numeric value of a catalog clock string such as `"3.8 GHz"` or `"2,475 MHz"`.
///
/// Units are not converted. Returns 0.0 when the string holds no number.
pub fn parse_clock(raw: &str) -> f64 {
    let stripped = non_numeric().replace_all(raw, "");
    if let Ok(value) = stripped.parse::<f64>() {
        return value;
    }

    // "3.8 / 5.3 GHz" strips to "3.85.3"; settle for the leading figure
    first_number()
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

pub fn cpu_performance_score(cpu: &Cpu) -> f64 {
    let parallelism = f64::from(cpu.cores) * f64::from(cpu.threads);
    let base = parse_clock(&cpu.base_clock);
    let boost = cpu.boost_clock.as_deref().map(parse_clock).unwrap_or(base);

    (parallelism * base + parallelism * boost) / 2.0
}

pub fn gpu_performance_score(gpu: &Gpu) -> f64 {
    let core = parse_clock(&gpu.core_clock);
    let boost = gpu.boost_clock.as_deref().map(parse_clock).unwrap_or(core);

    f64::from(gpu.memory_size) * (core + boost) / 2.0
}

/// Compare CPU and GPU scores and describe the balance between them.
pub fn bottleneck_check(cpu_score: f64, gpu_score: f64, config: &BalanceHeuristics) -> Message {
    let ratio = cpu_score / gpu_score;

    if ratio < config.cpu_bottleneck_ratio {
        Message::warning(format!(
            "CPU may bottleneck GPU (CPU/GPU performance ratio {:.2})",
            ratio
        ))
    } else if ratio > config.gpu_bottleneck_ratio {
        Message::warning(format!(
            "GPU may bottleneck CPU (CPU/GPU performance ratio {:.2})",
            ratio
        ))
    } else {
        Message::info(format!(
            "CPU and GPU performance is balanced (ratio {:.2})",
            ratio
        ))
    }
}

/// Minimum system RAM in GB suggested for a CPU and optional discrete GPU.
///
/// Zero divisors count as 1 and `max_gb` wins over `min_gb` when they cross.
pub fn min_recommended_ram(cpu: &Cpu, gpu: Option<&Gpu>, config: &MemoryHeuristics) -> u32 {
    let gpu_extra = gpu
        .map(|gpu| gpu.memory_size.div_ceil(config.gpu_memory_divisor.max(1)))
        .unwrap_or(0);
    let threads = cpu.cores.saturating_mul(cpu.threads);
    let multiplier = threads.div_ceil(config.threads_per_step.max(1));

    config
        .base_gb
        .saturating_add(gpu_extra)
        .saturating_mul(multiplier)
        .max(config.min_gb)
        .min(config.max_gb)
}

/// Highest RAM speed (MHz) both the CPU and the mainboard accept for `ram_type`.
///
/// `None` when neither side declares a ceiling.
pub fn recommended_ram_speed(cpu: &Cpu, mainboard: &Mainboard, ram_type: &str) -> Option<u32> {
    let cpu_limit = cpu.ram_support(ram_type).and_then(|s| s.max_speed);

    match (cpu_limit, mainboard.ram_speed) {
        (Some(cpu_limit), Some(board_limit)) => Some(cpu_limit.min(board_limit)),
        (limit, None) | (None, limit) => limit,
    }
}

/// Approximate heat (W) a cooler can move away, or `None` if its data is incomplete.
pub fn cooling_capacity(cooling: &Cooling, config: &CoolingHeuristics) -> Option<u32> {
    let fan_size = f64::from(cooling.fan_size?);
    let fan_factor = fan_size / config.reference_fan_mm;

    let capacity = match cooling.cooling_type {
        CoolingType::Air => {
            let height = f64::from(cooling.height?);
            config.air_base_watts * (height / config.reference_height_mm) * fan_factor
        }
        CoolingType::Liquid => {
            let noise = f64::from(cooling.noise_level?);
            config.liquid_base_watts * fan_factor * (1.0 - noise / 100.0)
        }
    };

    Some(capacity.max(0.0).round() as u32)
}
