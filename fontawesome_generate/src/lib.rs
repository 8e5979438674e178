#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Loads a Font Awesome configuration and its icon metadata into an ordered
//! list of icons ready for a code generator.

pub const GENERATE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod icon_set;
pub mod loader;

pub use error::{LoadError, RecordError};
pub use icon_set::{GeneratorInput, IconSet};
pub use loader::load_icon_set;

pub use fontawesome_data::{ConfigDef, FontAwesomeDef, IconDef, IconEntry, safe_name};
