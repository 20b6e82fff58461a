//! PSU wattage budget and GPU power connector checks.

use crate::checks::{not_selected, CompatibilityCheck};
use crate::diagnostics::Message;
use crate::hardware::{Build, Cpu, Gpu, PowerConnector, ProductType, Psu};
use crate::heuristic_config::PowerHeuristics;

/// Legacy 8-pin leads needed to feed a 16-pin card through an adapter.
const ADAPTER_LEADS_FOR_16_PIN: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorVerdict {
    Ok,
    Warning,
    Error,
}

/// Estimated draw against PSU wattage.
///
/// With a discrete GPU the margin is graded (thin margin warns); CPU-only builds
/// only pass or fail.
pub fn check_power_budget(
    cpu: &Cpu,
    gpu: Option<&Gpu>,
    psu: &Psu,
    config: &PowerHeuristics,
) -> Vec<Message> {
    let (required, breakdown) = match gpu {
        Some(gpu) => (
            cpu.tdp
                .saturating_add(gpu.tdp)
                .saturating_add(config.system_headroom_watts),
            format!(
                "CPU {}W + GPU {}W + {}W for the rest of the system",
                cpu.tdp, gpu.tdp, config.system_headroom_watts
            ),
        ),
        None => (
            cpu.tdp.saturating_add(config.cpu_only_headroom_watts),
            format!(
                "CPU {}W + {}W for the rest of the system",
                cpu.tdp, config.cpu_only_headroom_watts
            ),
        ),
    };

    if psu.wattage < required {
        return vec![Message::error(format!(
            "{} provides {}W but the build needs at least {}W ({})",
            psu.name, psu.wattage, required, breakdown
        ))];
    }

    let margin = psu.wattage - required;
    if gpu.is_some() && margin < config.thin_margin_watts {
        vec![Message::warning(format!(
            "{} leaves only {}W of headroom over the estimated {}W requirement",
            psu.name, margin, required
        ))]
    } else {
        vec![Message::info(format!(
            "{} ({}W) covers the estimated {}W requirement with {}W to spare",
            psu.name, psu.wattage, required, margin
        ))]
    }
}

/// Whether the PSU can feed the GPU's auxiliary power connector.
///
/// Missing data on either side is treated as no constraint.
pub fn check_power_connectors(psu: &Psu, gpu: &Gpu) -> ConnectorVerdict {
    let (Some(available), Some(connector)) = (psu.pcie_connectors, gpu.power_connector) else {
        return ConnectorVerdict::Ok;
    };

    let required = match connector {
        PowerConnector::SixteenPin => {
            return if available >= ADAPTER_LEADS_FOR_16_PIN {
                ConnectorVerdict::Warning
            } else {
                ConnectorVerdict::Error
            };
        }
        PowerConnector::SixPin | PowerConnector::EightPin => 1,
        PowerConnector::None => 0,
    };

    if available < required {
        ConnectorVerdict::Error
    } else {
        ConnectorVerdict::Ok
    }
}

fn connector_message(psu: &Psu, gpu: &Gpu) -> Option<Message> {
    let connector = gpu.power_connector?;
    let available = psu.pcie_connectors.unwrap_or_default();

    match check_power_connectors(psu, gpu) {
        ConnectorVerdict::Ok if psu.pcie_connectors.is_some() => Some(Message::info(format!(
            "{} has the PCIe power connectors {} needs ({})",
            psu.name, gpu.name, connector
        ))),
        ConnectorVerdict::Ok => None,
        ConnectorVerdict::Warning => Some(Message::warning(format!(
            "{} needs a 16-pin connector; {} requires an adapter from {} 8-pin leads, verify the PSU capacity",
            gpu.name, psu.name, ADAPTER_LEADS_FOR_16_PIN
        ))),
        ConnectorVerdict::Error => Some(Message::error(format!(
            "{} has {} PCIe power connector(s), not enough for the {} connector of {}",
            psu.name, available, connector, gpu.name
        ))),
    }
}

pub struct PowerCheck {
    config: PowerHeuristics,
}

impl PowerCheck {
    pub fn new(config: PowerHeuristics) -> Self {
        Self { config }
    }
}

impl CompatibilityCheck for PowerCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        let Some(psu) = build.psu else {
            return vec![not_selected(ProductType::Psu)];
        };

        let mut messages = check_power_budget(build.cpu, build.gpu, psu, &self.config);
        if let Some(message) = build.gpu.and_then(|gpu| connector_message(psu, gpu)) {
            messages.push(message);
        }
        messages
    }

    fn name(&self) -> &str {
        "power_supply"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::hardware::fixtures;

    // 100W / 50W headroom and the 100W margin are legacy rules of thumb.

    #[test]
    fn test_thin_margin_warns() {
        let mut cpu = fixtures::cpu();
        cpu.tdp = 65;
        let mut gpu = fixtures::gpu();
        gpu.tdp = 250;

        let messages = check_power_budget(
            &cpu,
            Some(&gpu),
            &fixtures::psu(450),
            &PowerHeuristics::default(),
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity, Severity::Warning);
        assert!(messages[0].text.contains("35W"));
        assert!(messages[0].text.contains("415W"));
    }

    #[test]
    fn test_insufficient_wattage() {
        let mut gpu = fixtures::gpu();
        gpu.tdp = 320;

        let messages = check_power_budget(
            &fixtures::cpu(),
            Some(&gpu),
            &fixtures::psu(450),
            &PowerHeuristics::default(),
        );
        assert_eq!(messages[0].severity, Severity::Error);
        assert!(messages[0].text.contains("485W"));
    }

    #[test]
    fn test_comfortable_margin() {
        let messages = check_power_budget(
            &fixtures::cpu(),
            Some(&fixtures::gpu()),
            &fixtures::psu(750),
            &PowerHeuristics::default(),
        );
        assert_eq!(messages[0].severity, Severity::Info);
    }

    #[test]
    fn test_cpu_only_has_no_warning_tier() {
        // 65W + 50W = 115W, margin 5W
        let messages = check_power_budget(
            &fixtures::cpu(),
            None,
            &fixtures::psu(120),
            &PowerHeuristics::default(),
        );
        assert_eq!(messages[0].severity, Severity::Info);

        let messages = check_power_budget(
            &fixtures::cpu(),
            None,
            &fixtures::psu(100),
            &PowerHeuristics::default(),
        );
        assert_eq!(messages[0].severity, Severity::Error);
    }

    #[test]
    fn test_huge_tdp_fails_instead_of_wrapping() {
        let mut cpu = fixtures::cpu();
        cpu.tdp = u32::MAX;

        let messages = check_power_budget(
            &cpu,
            Some(&fixtures::gpu()),
            &fixtures::psu(500),
            &PowerHeuristics::default(),
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity, Severity::Error);

        let messages =
            check_power_budget(&cpu, None, &fixtures::psu(500), &PowerHeuristics::default());
        assert_eq!(messages[0].severity, Severity::Error);
    }

    #[test]
    fn test_connector_verdicts() {
        let mut psu = fixtures::psu(850);
        let mut gpu = fixtures::gpu();

        psu.pcie_connectors = Some(1);
        gpu.power_connector = Some(PowerConnector::EightPin);
        assert_eq!(check_power_connectors(&psu, &gpu), ConnectorVerdict::Ok);

        psu.pcie_connectors = Some(0);
        assert_eq!(check_power_connectors(&psu, &gpu), ConnectorVerdict::Error);

        gpu.power_connector = Some(PowerConnector::None);
        assert_eq!(check_power_connectors(&psu, &gpu), ConnectorVerdict::Ok);

        gpu.power_connector = Some(PowerConnector::SixteenPin);
        psu.pcie_connectors = Some(3);
        assert_eq!(check_power_connectors(&psu, &gpu), ConnectorVerdict::Warning);

        psu.pcie_connectors = Some(2);
        assert_eq!(check_power_connectors(&psu, &gpu), ConnectorVerdict::Error);

        psu.pcie_connectors = None;
        assert_eq!(check_power_connectors(&psu, &gpu), ConnectorVerdict::Ok);
    }

    #[test]
    fn test_missing_psu_is_reported() {
        let request = crate::hardware::ConfigurationRequest::new()
            .with_cpu(fixtures::cpu())
            .with_mainboard(fixtures::mainboard());
        let build = request.build().unwrap();

        let messages = PowerCheck::new(PowerHeuristics::default()).check(&build);
        assert_eq!(messages, vec![not_selected(ProductType::Psu)]);
    }

    #[test]
    fn test_power_check_adds_connector_diagnostic() {
        let mut gpu = fixtures::gpu();
        gpu.power_connector = Some(PowerConnector::SixteenPin);
        let request = crate::hardware::ConfigurationRequest::new()
            .with_cpu(fixtures::cpu())
            .with_mainboard(fixtures::mainboard())
            .with_gpu(gpu)
            .with_psu(fixtures::psu(850));
        let build = request.build().unwrap();

        let messages = PowerCheck::new(PowerHeuristics::default()).check(&build);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].severity, Severity::Error);
        assert!(messages[1].text.contains("16-pin"));
    }
}
