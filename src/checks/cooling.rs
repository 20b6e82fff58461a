use crate::checks::{not_selected, CompatibilityCheck};
use crate::diagnostics::Message;
use crate::hardware::{same_identifier, Build, Cooling, Cpu, ProductType};
use crate::heuristic_config::CoolingHeuristics;
use crate::metrics::cooling_capacity;

/// Mounting support for the CPU socket and estimated capacity against CPU TDP.
pub fn check_cooling(cpu: &Cpu, cooling: &Cooling, config: &CoolingHeuristics) -> Vec<Message> {
    let mut messages = Vec::new();

    let socket_listed = cooling
        .supported_sockets
        .iter()
        .any(|socket| same_identifier(socket, &cpu.socket_type));
    if !cooling.supported_sockets.is_empty() && !socket_listed {
        messages.push(Message::error(format!(
            "{} cannot be mounted on socket {} (supported: {})",
            cooling.name,
            cpu.socket_type,
            cooling.supported_sockets.join(", ")
        )));
    }

    let Some(capacity) = cooling_capacity(cooling, config) else {
        log::debug!(
            "Skipping cooling capacity for {}: incomplete cooler data",
            cooling.name
        );
        return messages;
    };

    let tdp = f64::from(cpu.tdp);
    let capacity_f = f64::from(capacity);

    if capacity_f < tdp {
        messages.push(Message::error(format!(
            "{} can dissipate about {}W, less than the {}W TDP of {}",
            cooling.name, capacity, cpu.tdp, cpu.name
        )));
    } else if capacity_f < tdp * config.tdp_margin_factor {
        messages.push(Message::warning(format!(
            "{} (about {}W) has little headroom over the {}W TDP of {}",
            cooling.name, capacity, cpu.tdp, cpu.name
        )));
    } else {
        messages.push(Message::info(format!(
            "{} (about {}W) is sufficient for the {}W TDP of {}",
            cooling.name, capacity, cpu.tdp, cpu.name
        )));
    }

    messages
}

pub struct CoolingCheck {
    config: CoolingHeuristics,
}

impl CoolingCheck {
    pub fn new(config: CoolingHeuristics) -> Self {
        Self { config }
    }
}

impl CompatibilityCheck for CoolingCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        match build.cooling {
            Some(cooling) => check_cooling(build.cpu, cooling, &self.config),
            None => vec![not_selected(ProductType::Cooling)],
        }
    }

    fn name(&self) -> &str {
        "cooling_capacity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::hardware::{fixtures, CoolingType};

    // Capacities below come from the 100W/200W base heuristic and are only approximate.

    fn cooler_with_capacity(height: u32) -> Cooling {
        let mut cooler = fixtures::air_cooler();
        cooler.height = Some(height);
        cooler.fan_size = Some(120);
        cooler
    }

    #[test]
    fn test_capacity_below_tdp() {
        let mut cpu = fixtures::cpu();
        cpu.tdp = 125;

        let messages = check_cooling(&cpu, &cooler_with_capacity(100), &CoolingHeuristics::default());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity, Severity::Error);
    }

    #[test]
    fn test_capacity_within_margin_warns() {
        let mut cpu = fixtures::cpu();
        cpu.tdp = 125;

        // 140W < 125W * 1.2
        let messages = check_cooling(&cpu, &cooler_with_capacity(140), &CoolingHeuristics::default());
        assert_eq!(messages[0].severity, Severity::Warning);
    }

    #[test]
    fn test_capacity_sufficient() {
        let messages = check_cooling(
            &fixtures::cpu(),
            &fixtures::air_cooler(),
            &CoolingHeuristics::default(),
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity, Severity::Info);
    }

    #[test]
    fn test_unsupported_socket() {
        let mut cooler = fixtures::air_cooler();
        cooler.supported_sockets = vec!["LGA1700".to_string()];

        let messages = check_cooling(&fixtures::cpu(), &cooler, &CoolingHeuristics::default());
        assert_eq!(messages[0].severity, Severity::Error);
        assert!(messages[0].text.contains("AM5"));
    }

    #[test]
    fn test_liquid_without_noise_data_skips_capacity() {
        let mut cooler = fixtures::air_cooler();
        cooler.cooling_type = CoolingType::Liquid;
        cooler.noise_level = None;

        let messages = check_cooling(&fixtures::cpu(), &cooler, &CoolingHeuristics::default());
        assert!(messages.is_empty());
    }
}
