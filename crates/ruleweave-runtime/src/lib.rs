//! Ruleweave Runtime - evaluates expression trees against records
//!
//! Evaluation is a pure, synchronous walk of the tree; trees and records are
//! only borrowed, so any number of evaluations may run in parallel.

pub mod error;
pub mod evaluator;
mod operators;

pub use error::{Result, RuntimeError};
pub use evaluator::Evaluator;
