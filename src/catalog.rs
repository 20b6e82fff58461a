//! Resolution of `{ product_id, product_type }` references into component records.
//!
//! This is the layer in front of the engine: it owns lookup failures and
//! category mismatches, so a request that cannot be resolved never reaches
//! the evaluator.

use crate::diagnostics::CompatibilityResult;
use crate::evaluator::RuleEvaluator;
use crate::hardware::{Component, ConfigurationRequest, ProductType};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_id: String,
    pub product_type: ProductType,
}

/// Body of a compatibility check request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub products: Vec<ProductRef>,
}

impl CheckRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse compatibility check request")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("Product {product_id} ({product_type}) was not found")]
    NotFound {
        product_id: String,
        product_type: ProductType,
    },
    #[error("Product {product_id} is a {actual}, not a {requested}")]
    CategoryMismatch {
        product_id: String,
        requested: ProductType,
        actual: ProductType,
    },
    #[error("Only one {product_type} can be selected, got {product_id} as well")]
    DuplicateComponent {
        product_id: String,
        product_type: ProductType,
    },
}

/// Source of component records, keyed by product id.
pub trait ComponentCatalog {
    fn lookup(&self, product_id: &str) -> Option<Component>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub product_id: String,
    #[serde(flatten)]
    pub component: Component,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: HashMap<String, Component>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product_id: impl Into<String>, component: Component) {
        self.entries.insert(product_id.into(), component);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            if catalog.entries.contains_key(&entry.product_id) {
                log::warn!(
                    "Duplicate catalog entry {}, keeping the last one",
                    entry.product_id
                );
            }
            catalog.insert(entry.product_id, entry.component);
        }
        catalog
    }

    /// Load a catalog file: a list of entries in JSON (`.json`) or YAML (anything else).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let entries: Vec<CatalogEntry> = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML catalog: {}", path.display()))?
        };

        let catalog = Self::from_entries(entries);
        log::info!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl ComponentCatalog for InMemoryCatalog {
    fn lookup(&self, product_id: &str) -> Option<Component> {
        self.entries.get(product_id).cloned()
    }
}

fn fill_slot<T>(
    slot: &mut Option<T>,
    value: T,
    product: &ProductRef,
) -> Result<(), ResolutionError> {
    if slot.is_some() {
        return Err(ResolutionError::DuplicateComponent {
            product_id: product.product_id.clone(),
            product_type: product.product_type,
        });
    }
    *slot = Some(value);
    Ok(())
}

/// Look up every referenced product and assemble the build.
pub fn resolve<C: ComponentCatalog + ?Sized>(
    catalog: &C,
    request: &CheckRequest,
) -> Result<ConfigurationRequest, ResolutionError> {
    let mut build = ConfigurationRequest::new();

    for product in &request.products {
        let component =
            catalog
                .lookup(&product.product_id)
                .ok_or_else(|| ResolutionError::NotFound {
                    product_id: product.product_id.clone(),
                    product_type: product.product_type,
                })?;

        let actual = component.product_type();
        if actual != product.product_type {
            return Err(ResolutionError::CategoryMismatch {
                product_id: product.product_id.clone(),
                requested: product.product_type,
                actual,
            });
        }

        match component {
            Component::Cpu(cpu) => fill_slot(&mut build.cpu, cpu, product)?,
            Component::Gpu(gpu) => fill_slot(&mut build.gpu, gpu, product)?,
            Component::Mainboard(board) => fill_slot(&mut build.mainboard, board, product)?,
            Component::Psu(psu) => fill_slot(&mut build.psu, psu, product)?,
            Component::Case(case) => fill_slot(&mut build.case, case, product)?,
            Component::Cooling(cooling) => fill_slot(&mut build.cooling, cooling, product)?,
            Component::Ram(module) => build.ram.push(module),
            Component::Storage(device) => build.storage.push(device),
        }
    }

    Ok(build)
}

/// Resolve and evaluate; resolution failures come back as a failed result.
pub fn check_products<C: ComponentCatalog + ?Sized>(
    catalog: &C,
    evaluator: &RuleEvaluator,
    request: &CheckRequest,
) -> CompatibilityResult {
    match resolve(catalog, request) {
        Ok(build) => evaluator.evaluate(&build),
        Err(e) => {
            log::warn!("Could not resolve compatibility request: {}", e);
            CompatibilityResult::failure(e.to_string())
        }
    }
}
