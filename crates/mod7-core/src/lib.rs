//! mod7 Core
//!
//! Key format constants, validation reports, and error handling shared by
//! the generator library and the command-line interface.

pub mod error;
pub mod format;
pub mod report;

pub use error::{Error, Result};
pub use format::*;
pub use report::{KeyShape, SegmentName, ValidationReport, Violation, ViolationKind};
