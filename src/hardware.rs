//! Component records for every hardware category the engine understands.
//!
//! These are plain data: the checks in [`crate::checks`] read them, nothing here
//! carries behaviour beyond small lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compare two catalog identifiers (socket, chipset, RAM type, form factor).
///
/// Catalog data is entered by hand, so "am5", "AM5 " and "AM5" all mean the same socket.
pub fn same_identifier(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Cpu,
    Gpu,
    Mainboard,
    Ram,
    Psu,
    Case,
    Cooling,
    Storage,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductType::Cpu => "CPU",
            ProductType::Gpu => "graphics card",
            ProductType::Mainboard => "mainboard",
            ProductType::Ram => "RAM kit",
            ProductType::Psu => "power supply",
            ProductType::Case => "case",
            ProductType::Cooling => "CPU cooler",
            ProductType::Storage => "storage device",
        };
        f.write_str(label)
    }
}

/// Memory generation a CPU's memory controller accepts, with its rated ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuRamSupport {
    pub ram_type: String,
    #[serde(default)]
    pub max_speed: Option<u32>, // MHz
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    pub name: String,
    pub socket_type: String,
    #[serde(default)]
    pub supported_chipsets: Vec<String>,
    #[serde(default)]
    pub supported_ram: Vec<CpuRamSupport>,
    pub cores: u32,
    pub threads: u32,
    pub base_clock: String,
    #[serde(default)]
    pub boost_clock: Option<String>,
    pub tdp: u32, // W
    #[serde(default)]
    pub has_integrated_gpu: Option<bool>,
    #[serde(default)]
    pub max_memory_capacity: Option<u32>, // GB
}

impl Cpu {
    /// The supported-RAM entry matching `ram_type`, if the CPU lists one.
    pub fn ram_support(&self, ram_type: &str) -> Option<&CpuRamSupport> {
        self.supported_ram
            .iter()
            .find(|support| same_identifier(&support.ram_type, ram_type))
    }
}

/// Auxiliary power connector a graphics card needs from the PSU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerConnector {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "6-pin")]
    SixPin,
    #[serde(rename = "8-pin")]
    EightPin,
    #[serde(rename = "16-pin", alias = "12VHPWR", alias = "12V-2x6")]
    SixteenPin,
}

impl fmt::Display for PowerConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PowerConnector::None => "no auxiliary",
            PowerConnector::SixPin => "6-pin",
            PowerConnector::EightPin => "8-pin",
            PowerConnector::SixteenPin => "16-pin",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gpu {
    pub name: String,
    pub memory_size: u32, // GB
    pub core_clock: String,
    #[serde(default)]
    pub boost_clock: Option<String>,
    pub tdp: u32, // W
    #[serde(default)]
    pub pcie_version: Option<f32>,
    #[serde(default)]
    pub power_connector: Option<PowerConnector>,
    #[serde(default)]
    pub length: Option<u32>, // mm
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mainboard {
    pub name: String,
    pub socket_type: String,
    pub chipset: String,
    pub form_factor: String,
    #[serde(default)]
    pub ram_type: Option<String>,
    #[serde(default)]
    pub ram_speed: Option<u32>, // MHz
    #[serde(default)]
    pub ram_slots: Option<u32>,
    #[serde(default)]
    pub max_ram_capacity: Option<u32>, // GB
    #[serde(default)]
    pub pcie_version: Option<f32>,
    #[serde(default)]
    pub pcie_x16_slots: Option<u32>,
    #[serde(default)]
    pub m2_slots: Option<u32>,
    #[serde(default)]
    pub sata_ports: Option<u32>,
    #[serde(default)]
    pub has_video_ports: Option<bool>,
}

/// A RAM kit as sold: `capacity` covers every stick in the kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RamModule {
    pub name: String,
    pub ram_type: String,
    pub capacity: u32, // GB
    pub speed: u32,    // MHz
    #[serde(default = "default_sticks")]
    pub sticks: u32,
}

fn default_sticks() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Psu {
    pub name: String,
    pub wattage: u32,
    /// PCIe power connectors, counted as 8-pin equivalents.
    #[serde(default)]
    pub pcie_connectors: Option<u32>,
    #[serde(default)]
    pub efficiency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    #[serde(default)]
    pub supported_form_factors: Vec<String>,
    #[serde(default)]
    pub max_gpu_length: Option<u32>, // mm
    #[serde(default)]
    pub cpu_cooler_height: Option<u32>, // mm
    #[serde(default)]
    pub max_radiator_size: Option<u32>, // mm
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoolingType {
    Air,
    #[serde(alias = "aio")]
    Liquid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cooling {
    pub name: String,
    pub cooling_type: CoolingType,
    #[serde(default)]
    pub height: Option<u32>, // mm
    #[serde(default)]
    pub fan_size: Option<u32>, // mm
    #[serde(default)]
    pub noise_level: Option<f32>, // dBA
    #[serde(default)]
    pub radiator_size: Option<u32>, // mm
    #[serde(default)]
    pub supported_sockets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageInterface {
    #[serde(rename = "m2", alias = "M.2", alias = "nvme")]
    M2,
    #[serde(rename = "sata", alias = "SATA")]
    Sata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub name: String,
    pub capacity: u32, // GB
    pub interface: StorageInterface,
    #[serde(default)]
    pub speed: Option<u32>, // MB/s
}

/// Any catalog component, tagged by its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "product_type", rename_all = "lowercase")]
pub enum Component {
    Cpu(Cpu),
    Gpu(Gpu),
    Mainboard(Mainboard),
    Ram(RamModule),
    Psu(Psu),
    Case(Case),
    Cooling(Cooling),
    Storage(Storage),
}

impl Component {
    pub fn product_type(&self) -> ProductType {
        match self {
            Component::Cpu(_) => ProductType::Cpu,
            Component::Gpu(_) => ProductType::Gpu,
            Component::Mainboard(_) => ProductType::Mainboard,
            Component::Ram(_) => ProductType::Ram,
            Component::Psu(_) => ProductType::Psu,
            Component::Case(_) => ProductType::Case,
            Component::Cooling(_) => ProductType::Cooling,
            Component::Storage(_) => ProductType::Storage,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Cpu(c) => &c.name,
            Component::Gpu(c) => &c.name,
            Component::Mainboard(c) => &c.name,
            Component::Ram(c) => &c.name,
            Component::Psu(c) => &c.name,
            Component::Case(c) => &c.name,
            Component::Cooling(c) => &c.name,
            Component::Storage(c) => &c.name,
        }
    }
}

/// The build under evaluation. Single-slot parts are optional; RAM and storage may repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRequest {
    #[serde(default)]
    pub cpu: Option<Cpu>,
    #[serde(default)]
    pub gpu: Option<Gpu>,
    #[serde(default)]
    pub mainboard: Option<Mainboard>,
    #[serde(default)]
    pub psu: Option<Psu>,
    #[serde(default)]
    pub case: Option<Case>,
    #[serde(default)]
    pub cooling: Option<Cooling>,
    #[serde(default)]
    pub ram: Vec<RamModule>,
    #[serde(default)]
    pub storage: Vec<Storage>,
}

impl ConfigurationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpu(mut self, cpu: Cpu) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn with_gpu(mut self, gpu: Gpu) -> Self {
        self.gpu = Some(gpu);
        self
    }

    pub fn with_mainboard(mut self, mainboard: Mainboard) -> Self {
        self.mainboard = Some(mainboard);
        self
    }

    pub fn with_psu(mut self, psu: Psu) -> Self {
        self.psu = Some(psu);
        self
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    pub fn with_cooling(mut self, cooling: Cooling) -> Self {
        self.cooling = Some(cooling);
        self
    }

    pub fn with_ram(mut self, module: RamModule) -> Self {
        self.ram.push(module);
        self
    }

    pub fn with_storage(mut self, device: Storage) -> Self {
        self.storage.push(device);
        self
    }

    /// Borrow the build with CPU and mainboard guaranteed present.
    ///
    /// Returns `None` when either is missing; no check can run without both.
    pub fn build(&self) -> Option<Build<'_>> {
        Some(Build {
            cpu: self.cpu.as_ref()?,
            mainboard: self.mainboard.as_ref()?,
            gpu: self.gpu.as_ref(),
            psu: self.psu.as_ref(),
            case: self.case.as_ref(),
            cooling: self.cooling.as_ref(),
            ram: &self.ram,
            storage: &self.storage,
        })
    }
}

/// A [`ConfigurationRequest`] that passed the CPU + mainboard precondition.
#[derive(Debug, Clone, Copy)]
pub struct Build<'a> {
    pub cpu: &'a Cpu,
    pub mainboard: &'a Mainboard,
    pub gpu: Option<&'a Gpu>,
    pub psu: Option<&'a Psu>,
    pub case: Option<&'a Case>,
    pub cooling: Option<&'a Cooling>,
    pub ram: &'a [RamModule],
    pub storage: &'a [Storage],
}
