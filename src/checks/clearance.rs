//! Physical fit inside the case: board form factor, card length, cooler height and radiator size.

use crate::checks::{not_selected, CompatibilityCheck};
use crate::diagnostics::Message;
use crate::hardware::{same_identifier, Build, Case, Cooling, CoolingType, Gpu, Mainboard, ProductType};

pub fn check_form_factor(case: &Case, mainboard: &Mainboard) -> Vec<Message> {
    if case.supported_form_factors.is_empty() {
        return Vec::new();
    }

    let fits = case
        .supported_form_factors
        .iter()
        .any(|ff| same_identifier(ff, &mainboard.form_factor));

    if fits {
        vec![Message::info(format!(
            "{} supports {} mainboards",
            case.name, mainboard.form_factor
        ))]
    } else {
        vec![Message::error(format!(
            "{} does not fit {} mainboards (supported: {})",
            case.name,
            mainboard.form_factor,
            case.supported_form_factors.join(", ")
        ))]
    }
}

pub fn check_gpu_length(case: &Case, gpu: &Gpu) -> Vec<Message> {
    let (Some(length), Some(max_length)) = (gpu.length, case.max_gpu_length) else {
        return Vec::new();
    };

    if length > max_length {
        vec![Message::error(format!(
            "{} is {}mm long and exceeds the {}mm GPU clearance of {} by {}mm",
            gpu.name,
            length,
            max_length,
            case.name,
            length - max_length
        ))]
    } else {
        vec![Message::info(format!(
            "{} fits in {} with {}mm to spare",
            gpu.name,
            case.name,
            max_length - length
        ))]
    }
}

/// Cooler height against the case limit, and radiator size for liquid coolers.
pub fn check_cooler_clearance(case: &Case, cooling: &Cooling) -> Vec<Message> {
    let mut messages = Vec::new();

    if let (Some(height), Some(max_height)) = (cooling.height, case.cpu_cooler_height) {
        if height > max_height {
            messages.push(Message::error(format!(
                "{} is {}mm tall and exceeds the {}mm cooler clearance of {} by {}mm",
                cooling.name,
                height,
                max_height,
                case.name,
                height - max_height
            )));
        } else {
            messages.push(Message::info(format!(
                "{} fits in {} with {}mm of height to spare",
                cooling.name,
                case.name,
                max_height - height
            )));
        }
    }

    if cooling.cooling_type == CoolingType::Liquid {
        if let (Some(radiator), Some(max_radiator)) = (cooling.radiator_size, case.max_radiator_size)
        {
            if radiator > max_radiator {
                messages.push(Message::error(format!(
                    "{} has a {}mm radiator but {} supports radiators up to {}mm",
                    cooling.name, radiator, case.name, max_radiator
                )));
            } else {
                messages.push(Message::info(format!(
                    "The {}mm radiator of {} can be mounted in {}",
                    radiator, cooling.name, case.name
                )));
            }
        }
    }

    messages
}

/// Owns the "no case selected" notice; the length and height checks stay silent without a case.
pub struct FormFactorCheck;

impl CompatibilityCheck for FormFactorCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        match build.case {
            Some(case) => check_form_factor(case, build.mainboard),
            None => vec![not_selected(ProductType::Case)],
        }
    }

    fn name(&self) -> &str {
        "case_form_factor"
    }
}

pub struct GpuClearanceCheck;

impl CompatibilityCheck for GpuClearanceCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        match (build.case, build.gpu) {
            (Some(case), Some(gpu)) => check_gpu_length(case, gpu),
            _ => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "gpu_clearance"
    }
}

pub struct CoolerClearanceCheck;

impl CompatibilityCheck for CoolerClearanceCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        match (build.case, build.cooling) {
            (Some(case), Some(cooling)) => check_cooler_clearance(case, cooling),
            _ => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "cooler_clearance"
    }
}
