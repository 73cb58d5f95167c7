//! Record data types
//!
//! Records are flat mappings from field name to [`Value`].

pub mod value;

pub use value::{Record, Value};
