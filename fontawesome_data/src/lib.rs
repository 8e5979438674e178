//! Shared data model for Font Awesome icon metadata.

pub mod defs;
pub mod safe_name;
pub mod validate;

pub use defs::*;
pub use safe_name::safe_name;
pub use validate::{ValidationError, validate_icons};
