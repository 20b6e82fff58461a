use crate::checks::{not_selected, CompatibilityCheck};
use crate::diagnostics::Message;
use crate::hardware::{Build, Mainboard, ProductType, Storage, StorageInterface};

/// Count selected drives per interface against the board's M.2 slots and SATA ports.
pub fn check_storage_slots(mainboard: &Mainboard, devices: &[Storage]) -> Vec<Message> {
    if devices.is_empty() {
        return vec![not_selected(ProductType::Storage)];
    }

    let m2_count = devices
        .iter()
        .filter(|d| d.interface == StorageInterface::M2)
        .count() as u32;
    let sata_count = devices
        .iter()
        .filter(|d| d.interface == StorageInterface::Sata)
        .count() as u32;

    let mut messages = Vec::new();

    if let Some(slots) = mainboard.m2_slots {
        if m2_count > slots {
            messages.push(Message::error(format!(
                "{} M.2 drives selected but {} only has {} M.2 slot(s)",
                m2_count, mainboard.name, slots
            )));
        }
    }

    if let Some(ports) = mainboard.sata_ports {
        if sata_count > ports {
            messages.push(Message::error(format!(
                "{} SATA drives selected but {} only has {} SATA port(s)",
                sata_count, mainboard.name, ports
            )));
        }
    }

    if messages.is_empty() {
        messages.push(Message::info(format!(
            "Storage: {} M.2 and {} SATA drive(s) fit the mainboard",
            m2_count, sata_count
        )));
    }

    messages
}

pub struct StorageCheck;

impl CompatibilityCheck for StorageCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        check_storage_slots(build.mainboard, build.storage)
    }

    fn name(&self) -> &str {
        "storage_slots"
    }
}
