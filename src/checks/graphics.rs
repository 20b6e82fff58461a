use crate::checks::CompatibilityCheck;
use crate::diagnostics::Message;
use crate::hardware::{Build, Cpu, Gpu, Mainboard};

/// Work out where the display signal comes from: the CPU's integrated graphics or a discrete card.
pub fn reconcile_graphics(cpu: &Cpu, mainboard: &Mainboard, gpu: Option<&Gpu>) -> Vec<Message> {
    let mut messages = Vec::new();

    match (cpu.has_integrated_gpu, gpu) {
        (Some(false), None) => {
            messages.push(Message::error(format!(
                "{} has no integrated graphics and no graphics card is selected; the build has no video output",
                cpu.name
            )));
        }
        (Some(true), None) => {
            messages.push(Message::info(format!(
                "No graphics card selected; the integrated graphics of {} will drive the display",
                cpu.name
            )));
            match mainboard.has_video_ports {
                Some(true) => {}
                Some(false) => messages.push(Message::error(format!(
                    "{} has no video outputs, so the integrated graphics cannot be used",
                    mainboard.name
                ))),
                None => messages.push(Message::warning(format!(
                    "Could not confirm that {} has video outputs for the integrated graphics",
                    mainboard.name
                ))),
            }
        }
        (None, None) => {
            messages.push(Message::warning(format!(
                "No graphics card selected and it is unknown whether {} has integrated graphics",
                cpu.name
            )));
        }
        (Some(true), Some(gpu)) | (None, Some(gpu)) => {
            messages.push(Message::info(format!(
                "Graphics card {} will be used for display output",
                gpu.name
            )));
        }
        (Some(false), Some(gpu)) => {
            messages.push(Message::info(format!(
                "{} has no integrated graphics; {} provides display output",
                cpu.name, gpu.name
            )));
        }
    }

    messages
}

pub struct GraphicsCheck;

impl CompatibilityCheck for GraphicsCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        reconcile_graphics(build.cpu, build.mainboard, build.gpu)
    }

    fn name(&self) -> &str {
        "graphics_output"
    }
}
