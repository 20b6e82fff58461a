use crate::checks::{not_selected, CompatibilityCheck};
use crate::diagnostics::{Message, Severity};
use crate::hardware::{same_identifier, Build, Cpu, Gpu, Mainboard, ProductType, RamModule};
use crate::heuristic_config::MemoryHeuristics;
use crate::metrics::{min_recommended_ram, recommended_ram_speed};

/// Type and speed of a single RAM kit against the CPU memory controller and the board.
///
/// Speed is only judged for kits whose type is accepted; an over-rated kit is
/// clocked down rather than rejected, hence a warning.
pub fn check_ram_module(cpu: &Cpu, mainboard: &Mainboard, module: &RamModule) -> Vec<Message> {
    let mut messages = Vec::new();
    let cpu_support = cpu.ram_support(&module.ram_type);

    if !cpu.supported_ram.is_empty() && cpu_support.is_none() {
        let supported: Vec<&str> = cpu
            .supported_ram
            .iter()
            .map(|s| s.ram_type.as_str())
            .collect();
        messages.push(Message::error(format!(
            "{} is {} memory, which {} does not support (supported: {})",
            module.name,
            module.ram_type,
            cpu.name,
            supported.join(", ")
        )));
    }

    if let Some(board_type) = &mainboard.ram_type {
        if !same_identifier(board_type, &module.ram_type) {
            messages.push(Message::error(format!(
                "{} is {} memory but {} requires {}",
                module.name, module.ram_type, mainboard.name, board_type
            )));
        }
    }

    if !messages.is_empty() {
        return messages;
    }

    if let Some(cpu_max) = cpu_support.and_then(|s| s.max_speed) {
        if module.speed > cpu_max {
            messages.push(Message::warning(format!(
                "{} is rated at {} MHz but {} supports up to {} MHz; it will run at the lower speed",
                module.name, module.speed, cpu.name, cpu_max
            )));
        }
    }

    if let Some(board_max) = mainboard.ram_speed {
        if module.speed > board_max {
            messages.push(Message::warning(format!(
                "{} is rated at {} MHz but {} supports up to {} MHz; it will run at the lower speed",
                module.name, module.speed, mainboard.name, board_max
            )));
        }
    }

    messages
}

/// Per-kit checks followed by capacity, slot and type checks over the whole selection.
pub fn check_memory(
    cpu: &Cpu,
    mainboard: &Mainboard,
    gpu: Option<&Gpu>,
    modules: &[RamModule],
    config: &MemoryHeuristics,
) -> Vec<Message> {
    if modules.is_empty() {
        return vec![not_selected(ProductType::Ram)];
    }

    let mut messages: Vec<Message> = modules
        .iter()
        .flat_map(|module| check_ram_module(cpu, mainboard, module))
        .collect();

    let total_capacity = modules
        .iter()
        .fold(0u32, |total, m| total.saturating_add(m.capacity));
    let total_sticks = modules
        .iter()
        .fold(0u32, |total, m| total.saturating_add(m.sticks));
    let ram_type = &modules[0].ram_type;

    if modules
        .iter()
        .any(|m| !same_identifier(&m.ram_type, ram_type))
    {
        messages.push(Message::error(
            "Selected RAM kits are of different memory types and cannot be used together",
        ));
    }

    if let Some(slots) = mainboard.ram_slots {
        if total_sticks > slots {
            messages.push(Message::error(format!(
                "Selected RAM uses {} slots but {} only has {}",
                total_sticks, mainboard.name, slots
            )));
        }
    }

    if let Some(board_max) = mainboard.max_ram_capacity {
        if total_capacity > board_max {
            messages.push(Message::error(format!(
                "Total RAM capacity {}GB exceeds the mainboard maximum of {}GB",
                total_capacity, board_max
            )));
        }
    }

    if let Some(cpu_max) = cpu.max_memory_capacity {
        if total_capacity > cpu_max {
            messages.push(Message::error(format!(
                "Total RAM capacity {}GB exceeds the CPU maximum of {}GB",
                total_capacity, cpu_max
            )));
        }
    }

    let has_errors = messages.iter().any(|m| m.severity == Severity::Error);
    if !has_errors {
        let slowest = modules.iter().map(|m| m.speed).min().unwrap_or_default();
        let effective_speed = recommended_ram_speed(cpu, mainboard, ram_type)
            .map(|limit| slowest.min(limit))
            .unwrap_or(slowest);

        messages.push(Message::info(format!(
            "Total RAM: {}GB {} running at {} MHz",
            total_capacity, ram_type, effective_speed
        )));
    }

    let recommended = min_recommended_ram(cpu, gpu, config);
    if total_capacity < recommended {
        messages.push(Message::info(format!(
            "Total RAM {}GB is below the {}GB recommended for this CPU and graphics combination",
            total_capacity, recommended
        )));
    }

    messages
}

pub struct MemoryCheck {
    config: MemoryHeuristics,
}

impl MemoryCheck {
    pub fn new(config: MemoryHeuristics) -> Self {
        Self { config }
    }
}

impl CompatibilityCheck for MemoryCheck {
    fn check(&self, build: &Build<'_>) -> Vec<Message> {
        check_memory(
            build.cpu,
            build.mainboard,
            build.gpu,
            build.ram,
            &self.config,
        )
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::fixtures;

    fn errors(messages: &[Message]) -> Vec<&str> {
        messages
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .map(|m| m.text.as_str())
            .collect()
    }

    #[test]
    fn test_no_ram_selected() {
        let messages = check_memory(
            &fixtures::cpu(),
            &fixtures::mainboard(),
            None,
            &[],
            &MemoryHeuristics::default(),
        );
        assert_eq!(messages, vec![not_selected(ProductType::Ram)]);
    }

    #[test]
    fn test_wrong_memory_type() {
        let mut module = fixtures::ram(16);
        module.ram_type = "DDR4".to_string();

        let messages = check_ram_module(&fixtures::cpu(), &fixtures::mainboard(), &module);
        let errors = errors(&messages);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("does not support"));
        assert!(errors[1].contains("requires DDR5"));
    }

    #[test]
    fn test_overclocked_kit_only_warns() {
        let mut module = fixtures::ram(16);
        module.speed = 6400;

        let messages = check_ram_module(&fixtures::cpu(), &fixtures::mainboard(), &module);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.severity == Severity::Warning));
    }

    #[test]
    fn test_capacity_exceeds_mainboard_maximum() {
        let mut board = fixtures::mainboard();
        board.max_ram_capacity = Some(16);
        let modules = vec![fixtures::ram(16), fixtures::ram(16)];

        let messages = check_memory(
            &fixtures::cpu(),
            &board,
            None,
            &modules,
            &MemoryHeuristics::default(),
        );
        let errors = errors(&messages);
        assert_eq!(
            errors,
            vec!["Total RAM capacity 32GB exceeds the mainboard maximum of 16GB"]
        );
    }

    #[test]
    fn test_capacity_exceeds_cpu_maximum_independently() {
        let mut cpu = fixtures::cpu();
        cpu.max_memory_capacity = Some(64);
        let modules = vec![fixtures::ram(64), fixtures::ram(64)];

        let messages = check_memory(
            &cpu,
            &fixtures::mainboard(),
            None,
            &modules,
            &MemoryHeuristics::default(),
        );
        assert_eq!(
            errors(&messages),
            vec!["Total RAM capacity 128GB exceeds the CPU maximum of 64GB"]
        );
    }

    #[test]
    fn test_oversized_kits_saturate_instead_of_overflowing() {
        let mut huge = fixtures::ram(u32::MAX);
        huge.sticks = u32::MAX;
        let modules = vec![huge, fixtures::ram(16)];

        let messages = check_memory(
            &fixtures::cpu(),
            &fixtures::mainboard(),
            None,
            &modules,
            &MemoryHeuristics::default(),
        );
        let errors = errors(&messages);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains(&u32::MAX.to_string()));
    }

    #[test]
    fn test_too_many_sticks_for_slots() {
        let mut board = fixtures::mainboard();
        board.ram_slots = Some(2);
        let mut kit = fixtures::ram(32);
        kit.sticks = 2;
        let modules = vec![kit, fixtures::ram(16)];

        let messages = check_memory(
            &fixtures::cpu(),
            &board,
            None,
            &modules,
            &MemoryHeuristics::default(),
        );
        assert_eq!(errors(&messages).len(), 1);
        assert!(errors(&messages)[0].contains("3 slots"));
    }

    #[test]
    fn test_passing_selection_reports_total_and_speed() {
        let modules = vec![fixtures::ram(32), fixtures::ram(32)];
        let mut cpu = fixtures::cpu();
        cpu.cores = 4;
        cpu.threads = 8;

        let messages = check_memory(
            &cpu,
            &fixtures::mainboard(),
            None,
            &modules,
            &MemoryHeuristics::default(),
        );
        assert_eq!(
            messages,
            vec![Message::info("Total RAM: 64GB DDR5 running at 5200 MHz")]
        );
    }

    #[test]
    fn test_effective_speed_is_clamped() {
        let mut board = fixtures::mainboard();
        board.ram_speed = Some(4800);
        let mut cpu = fixtures::cpu();
        cpu.cores = 4;
        cpu.threads = 8;

        let messages = check_memory(
            &cpu,
            &board,
            None,
            &[fixtures::ram(32)],
            &MemoryHeuristics::default(),
        );
        assert_eq!(messages[0].severity, Severity::Warning);
        assert!(messages
            .iter()
            .any(|m| m.text == "Total RAM: 32GB DDR5 running at 4800 MHz"));
    }

    #[test]
    fn test_below_recommendation_is_informational() {
        // 8 cores x 16 threads pushes the recommendation to the 128GB ceiling
        let messages = check_memory(
            &fixtures::cpu(),
            &fixtures::mainboard(),
            None,
            &[fixtures::ram(16)],
            &MemoryHeuristics::default(),
        );
        assert!(messages.iter().all(|m| m.severity == Severity::Info));
        assert!(messages.iter().any(|m| m.text.contains("128GB recommended")));
    }

    #[test]
    fn test_mixed_memory_types() {
        let mut cpu = fixtures::cpu();
        cpu.supported_ram.clear();
        let mut board = fixtures::mainboard();
        board.ram_type = None;
        let mut ddr4 = fixtures::ram(16);
        ddr4.ram_type = "DDR4".to_string();

        let messages = check_memory(
            &cpu,
            &board,
            None,
            &[fixtures::ram(16), ddr4],
            &MemoryHeuristics::default(),
        );
        assert_eq!(errors(&messages).len(), 1);
        assert!(errors(&messages)[0].contains("different memory types"));
    }
}
