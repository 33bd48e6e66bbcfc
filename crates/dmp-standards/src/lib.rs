#![deny(unsafe_code)]

pub mod error;
pub mod paths;
pub mod registry;

pub use crate::error::StandardsError;
pub use crate::paths::{STANDARDS_ENV_VAR, bundled_standards_dir, standards_dir_from_env};
pub use crate::registry::{RegistrySummary, StandardsRegistry, StandardsSource};
