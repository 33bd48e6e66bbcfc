//! Standards directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the embedded standards.
pub const STANDARDS_ENV_VAR: &str = "DMP_STANDARDS_DIR";

pub const TEMPLATE_FILE: &str = "research_output_table.json";
pub const STANDARD_FIELDS_FILE: &str = "standard_fields.toml";
pub const OUTPUT_TYPES_FILE: &str = "output_types.toml";

/// Directory named by `DMP_STANDARDS_DIR`, if set and non-empty.
pub fn standards_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(STANDARDS_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Directory holding the standards shipped with this crate.
pub fn bundled_standards_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
