use pc_compat::hardware::{
    Case, ConfigurationRequest, Cooling, CoolingType, Cpu, CpuRamSupport, Gpu, Mainboard,
    PowerConnector, Psu, RamModule, Storage, StorageInterface,
};
use pc_compat::{RuleEvaluator, Severity};

fn main() -> anyhow::Result<()> {
    println!("🧪 Running sample builds through the compatibility engine");

    let evaluator = RuleEvaluator::default();

    let builds = vec![
        ("Office build (CPU + board only)", office_build()),
        ("Gaming build", gaming_build()),
        ("Gaming build on an old AM4 board", gaming_build_on_am4()),
        ("Flagship GPU in a small case", flagship_in_small_case()),
    ];

    for (label, request) in builds {
        let result = evaluator.evaluate(&request);
        println!();
        println!(
            "{} {}",
            if result.is_compatible() { "✅" } else { "❌" },
            label
        );
        println!(
            "   errors: {}, warnings: {}, info: {}",
            result.count(Severity::Error),
            result.count(Severity::Warning),
            result.count(Severity::Info)
        );
        for message in result.messages() {
            println!("   {}", message);
        }
    }

    println!();
    println!("JSON form of the gaming build:");
    println!(
        "{}",
        serde_json::to_string_pretty(&evaluator.evaluate(&gaming_build()))?
    );

    Ok(())
}

fn ryzen() -> Cpu {
    Cpu {
        name: "Ryzen 5 7600".to_string(),
        socket_type: "AM5".to_string(),
        supported_chipsets: vec!["A620".into(), "B650".into(), "X670".into()],
        supported_ram: vec![CpuRamSupport {
            ram_type: "DDR5".to_string(),
            max_speed: Some(5200),
        }],
        cores: 6,
        threads: 12,
        base_clock: "3.8 GHz".to_string(),
        boost_clock: Some("5.1 GHz".to_string()),
        tdp: 65,
        has_integrated_gpu: Some(true),
        max_memory_capacity: Some(192),
    }
}

fn b650() -> Mainboard {
    Mainboard {
        name: "B650M Pro".to_string(),
        socket_type: "AM5".to_string(),
        chipset: "B650".to_string(),
        form_factor: "Micro-ATX".to_string(),
        ram_type: Some("DDR5".to_string()),
        ram_speed: Some(6000),
        ram_slots: Some(4),
        max_ram_capacity: Some(192),
        pcie_version: Some(4.0),
        pcie_x16_slots: Some(1),
        m2_slots: Some(2),
        sata_ports: Some(4),
        has_video_ports: Some(true),
    }
}

fn office_build() -> ConfigurationRequest {
    ConfigurationRequest::new()
        .with_cpu(ryzen())
        .with_mainboard(b650())
}

fn gaming_build() -> ConfigurationRequest {
    ConfigurationRequest::new()
        .with_cpu(ryzen())
        .with_mainboard(b650())
        .with_gpu(Gpu {
            name: "RX 7800 XT".to_string(),
            memory_size: 16,
            core_clock: "1.295 GHz".to_string(),
            boost_clock: Some("2.43 GHz".to_string()),
            tdp: 263,
            pcie_version: Some(4.0),
            power_connector: Some(PowerConnector::EightPin),
            length: Some(267),
        })
        .with_psu(Psu {
            name: "650W Bronze".to_string(),
            wattage: 650,
            pcie_connectors: Some(2),
            efficiency: Some("80+ Bronze".to_string()),
        })
        .with_case(Case {
            name: "Compact Tower".to_string(),
            supported_form_factors: vec!["Micro-ATX".into(), "Mini-ITX".into()],
            max_gpu_length: Some(330),
            cpu_cooler_height: Some(160),
            max_radiator_size: Some(240),
        })
        .with_cooling(Cooling {
            name: "Dual Tower".to_string(),
            cooling_type: CoolingType::Air,
            height: Some(158),
            fan_size: Some(120),
            noise_level: Some(26.0),
            radiator_size: None,
            supported_sockets: vec!["AM4".into(), "AM5".into()],
        })
        .with_ram(RamModule {
            name: "DDR5-6000 2x16GB".to_string(),
            ram_type: "DDR5".to_string(),
            capacity: 32,
            speed: 6000,
            sticks: 2,
        })
        .with_storage(Storage {
            name: "NVMe 2TB".to_string(),
            capacity: 2000,
            interface: StorageInterface::M2,
            speed: Some(7000),
        })
}

fn gaming_build_on_am4() -> ConfigurationRequest {
    let mut board = b650();
    board.name = "B550 Tomahawk".to_string();
    board.socket_type = "AM4".to_string();
    board.chipset = "B550".to_string();
    board.ram_type = Some("DDR4".to_string());
    gaming_build().with_mainboard(board)
}

fn flagship_in_small_case() -> ConfigurationRequest {
    gaming_build()
        .with_gpu(Gpu {
            name: "RTX 4090".to_string(),
            memory_size: 24,
            core_clock: "2.23 GHz".to_string(),
            boost_clock: Some("2.52 GHz".to_string()),
            tdp: 450,
            pcie_version: Some(4.0),
            power_connector: Some(PowerConnector::SixteenPin),
            length: Some(336),
        })
}
