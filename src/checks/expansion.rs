use crate::checks::CompatibilityCheck;
use crate::diagnostics::Message;
use crate::hardware::{Build, Gpu, Mainboard};

/// Graphics card against the board's x16 slots and PCIe generation.
///
/// PCIe is backwards compatible, so a newer card on an older board is a warning.
pub fn check_pcie(gpu: &Gpu, mainboard: &Mainboard) -> Vec<Message> {
    if mainboard.pcie_x16_slots == Some(0) {
        return vec![Message::error(format!(
            "{} has no PCIe x16 slot for {}",
            mainboard.name, gpu.name
        ))];
    }

    match (gpu.pcie_version, mainboard.pcie_version) {
        (Some(card), Some(board)) if card > board => vec![Message::warning(format!(
            "{} is a PCIe {:.1} card; {} runs it at PCIe {:.1} bandwidth",
            gpu.name, card, mainboard.name, board
        ))],
        (Some(card), Some(_)) => vec![Message::info(format!(
            "{} (PCIe {:.1}) is supported by the mainboard PCIe slot",
            gpu.name, card
        ))],
        _ => Vec::new(),
    }
}

pub struct PcieCheck;

impl CompatibilityCheck for PcieCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        match build.gpu {
            Some(gpu) => check_pcie(gpu, build.mainboard),
            None => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "gpu_pcie"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::hardware::fixtures;

    #[test]
    fn test_same_generation() {
        let messages = check_pcie(&fixtures::gpu(), &fixtures::mainboard());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity, Severity::Info);
    }

    #[test]
    fn test_newer_card_on_older_board() {
        let mut gpu = fixtures::gpu();
        gpu.pcie_version = Some(5.0);

        let messages = check_pcie(&gpu, &fixtures::mainboard());
        assert_eq!(messages[0].severity, Severity::Warning);
        assert!(messages[0].text.contains("PCIe 4.0 bandwidth"));
    }

    #[test]
    fn test_board_without_x16_slot() {
        let mut board = fixtures::mainboard();
        board.pcie_x16_slots = Some(0);

        let messages = check_pcie(&fixtures::gpu(), &board);
        assert_eq!(messages[0].severity, Severity::Error);
    }

    #[test]
    fn test_missing_version_data_skips() {
        let mut gpu = fixtures::gpu();
        gpu.pcie_version = None;

        assert!(check_pcie(&gpu, &fixtures::mainboard()).is_empty());
    }
}
