use crate::checks::CompatibilityCheck;
use crate::diagnostics::Message;
use crate::hardware::{same_identifier, Build, Cpu, Mainboard};

/// CPU socket must match the board exactly; a CPU chipset list, when present, must name the board's chipset.
pub fn check_socket_chipset(cpu: &Cpu, mainboard: &Mainboard) -> Vec<Message> {
    let mut messages = Vec::new();

    if !same_identifier(&cpu.socket_type, &mainboard.socket_type) {
        messages.push(Message::error(format!(
            "CPU socket {} does not match mainboard socket {}",
            cpu.socket_type, mainboard.socket_type
        )));
    }

    let chipset_listed = cpu
        .supported_chipsets
        .iter()
        .any(|chipset| same_identifier(chipset, &mainboard.chipset));
    if !cpu.supported_chipsets.is_empty() && !chipset_listed {
        messages.push(Message::error(format!(
            "{} does not support the {} chipset (supported: {})",
            cpu.name,
            mainboard.chipset,
            cpu.supported_chipsets.join(", ")
        )));
    }

    if messages.is_empty() {
        messages.push(Message::info(format!(
            "CPU and mainboard are compatible (socket {}, chipset {})",
            mainboard.socket_type, mainboard.chipset
        )));
    }

    messages
}

pub struct SocketCheck;

impl CompatibilityCheck for SocketCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        check_socket_chipset(build.cpu, build.mainboard)
    }

    fn name(&self) -> &str {
        "socket_chipset"
    }
}
