pub mod catalog;
pub mod checks;
pub mod diagnostics;
pub mod evaluator;
pub mod hardware;
pub mod heuristic_config;
pub mod metrics;

pub use catalog::{check_products, CheckRequest, ComponentCatalog, InMemoryCatalog, ResolutionError};
pub use diagnostics::{aggregate, CompatibilityResult, Message, Severity};
pub use evaluator::{evaluate, RuleEvaluator};
pub use hardware::{Component, ConfigurationRequest, ProductType};
pub use heuristic_config::HeuristicConfig;
