//! Rules file configuration for patchsub.
//!
//! The rule list is normally the one compiled into the program. A YAML
//! rules file may replace it and change the output suffix. Unknown fields
//! are ignored for forward compatibility and missing fields take defaults.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{Config, DEFAULT_OUTPUT_SUFFIX};
