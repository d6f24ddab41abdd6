//! Generation and validation of mod7 keys.
//!
//! Two key families are supported:
//!
//! - CD keys, `XXX-XXXXXXX`: a three-digit site number and a seven-digit
//!   checksum segment.
//! - OEM keys, `XXXXX-OEM-XXXXXXX-XXXXX`: a Julian day and year, the literal
//!   `OEM`, a checksum segment with a leading zero, and a filler segment.
//!
//! Generators take an injected [`RandomSource`], so every generator instance
//! owns its own RNG and tests can script the draws. Validation is a pure
//! function of its input and always produces a [`ValidationReport`].

pub mod assemble;
pub mod batch;
pub mod checksum;
pub mod generator;
pub mod oem;
pub mod parse;
pub mod random;
pub mod site;
pub mod validate;

pub use assemble::{assemble_structured_key, assemble_ten_digit_key};
pub use batch::{BatchSummary, key_lines, validate_batch};
pub use checksum::{digit_sum, generate_checksum_segment};
pub use generator::{KeyGenerator, generate_structured_key, generate_ten_digit_key};
pub use mod7_core::{KeyShape, ValidationReport, Violation, ViolationKind};
pub use oem::{generate_date_year, generate_filler};
pub use parse::{ParsedKey, RawSegment, StructuredSegments, TenDigitSegments};
pub use random::RandomSource;
pub use site::generate_site_number;
pub use validate::validate;
