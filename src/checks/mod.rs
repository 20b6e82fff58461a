//! Constraint checks, one module per compatibility dimension.
//!
//! Each module exposes a pure function taking only the parts it inspects. The
//! small types implementing [`CompatibilityCheck`] adapt those functions to a
//! [`Build`] so the evaluator can run them as an ordered pipeline.

pub mod clearance;
pub mod cooling;
pub mod expansion;
pub mod graphics;
pub mod memory;
pub mod performance;
pub mod power;
pub mod socket;
pub mod storage;

use crate::diagnostics::Message;
use crate::hardware::{Build, ProductType};

/// Info message for an optional component the buyer has not picked yet.
pub fn not_selected(product: ProductType) -> Message {
    Message::info(format!("You have not selected a {}", product))
}

/// One compatibility dimension of a build.
pub trait CompatibilityCheck: Send + Sync {
    fn check(&self, build: &Build<'_>) -> Vec<Message>;
    fn name(&self) -> &str;
}
