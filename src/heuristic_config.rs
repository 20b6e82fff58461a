//! Calibration constants for the rule heuristics.
//!
//! Defaults reproduce the shop's long-standing rules of thumb. They are
//! approximations, not electrical or thermal engineering figures, so they are
//! kept in a YAML document that can be tuned without a rebuild.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerHeuristics {
    /// Allowance for board, drives and fans when a discrete GPU is present.
    pub system_headroom_watts: u32,
    /// Same allowance for builds without a discrete GPU.
    pub cpu_only_headroom_watts: u32,
    /// A sufficient PSU with less spare capacity than this is flagged.
    pub thin_margin_watts: u32,
}

impl Default for PowerHeuristics {
    fn default() -> Self {
        Self {
            system_headroom_watts: 100,
            cpu_only_headroom_watts: 50,
            thin_margin_watts: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolingHeuristics {
    pub air_base_watts: f64,
    pub liquid_base_watts: f64,
    pub reference_height_mm: f64,
    pub reference_fan_mm: f64,
    /// Capacity below `tdp * tdp_margin_factor` is reported as marginal.
    pub tdp_margin_factor: f64,
}

impl Default for CoolingHeuristics {
    fn default() -> Self {
        Self {
            air_base_watts: 100.0,
            liquid_base_watts: 200.0,
            reference_height_mm: 100.0,
            reference_fan_mm: 120.0,
            tdp_margin_factor: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceHeuristics {
    /// CPU/GPU score ratio below which the CPU is the bottleneck.
    pub cpu_bottleneck_ratio: f64,
    /// CPU/GPU score ratio above which the GPU is the bottleneck.
    pub gpu_bottleneck_ratio: f64,
}

impl Default for BalanceHeuristics {
    fn default() -> Self {
        Self {
            cpu_bottleneck_ratio: 0.7,
            gpu_bottleneck_ratio: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryHeuristics {
    pub base_gb: u32,
    /// One extra GB of system RAM per this many GB of video memory.
    pub gpu_memory_divisor: u32,
    /// The recommendation scales by one step per this many hardware threads.
    pub threads_per_step: u32,
    pub min_gb: u32,
    pub max_gb: u32,
}

impl Default for MemoryHeuristics {
    fn default() -> Self {
        Self {
            base_gb: 8,
            gpu_memory_divisor: 4,
            threads_per_step: 8,
            min_gb: 8,
            max_gb: 128,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub power: PowerHeuristics,
    pub cooling: CoolingHeuristics,
    pub balance: BalanceHeuristics,
    pub memory: MemoryHeuristics,
}

impl HeuristicConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read heuristic config: {}", path.display()))?;

        let config: HeuristicConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse heuristic config: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid heuristic config: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path`, falling back to the built-in defaults on any failure.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(&path) {
            Ok(config) => {
                log::info!("Loaded heuristic config from: {}", path.as_ref().display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load heuristic config ({:#}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize heuristic config")
    }

    pub fn validate(&self) -> Result<()> {
        let balance = &self.balance;
        if balance.cpu_bottleneck_ratio <= 0.0 {
            bail!(
                "balance.cpu_bottleneck_ratio must be positive, got {}",
                balance.cpu_bottleneck_ratio
            );
        }
        if balance.cpu_bottleneck_ratio >= balance.gpu_bottleneck_ratio {
            bail!(
                "balance.cpu_bottleneck_ratio ({}) must be below balance.gpu_bottleneck_ratio ({})",
                balance.cpu_bottleneck_ratio,
                balance.gpu_bottleneck_ratio
            );
        }

        let cooling = &self.cooling;
        if cooling.reference_height_mm <= 0.0 || cooling.reference_fan_mm <= 0.0 {
            bail!("cooling reference dimensions must be positive");
        }
        if cooling.tdp_margin_factor < 1.0 {
            bail!(
                "cooling.tdp_margin_factor must be at least 1.0, got {}",
                cooling.tdp_margin_factor
            );
        }

        let memory = &self.memory;
        if memory.gpu_memory_divisor == 0 || memory.threads_per_step == 0 {
            bail!("memory divisors must be non-zero");
        }
        if memory.min_gb > memory.max_gb {
            bail!(
                "memory.min_gb ({}) exceeds memory.max_gb ({})",
                memory.min_gb,
                memory.max_gb
            );
        }

        Ok(())
    }
}
