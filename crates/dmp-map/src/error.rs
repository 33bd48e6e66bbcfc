//! Error types for mapping operations.

use dmp_model::StandardFieldId;
use dmp_standards::StandardsError;

/// Errors from mapping operations.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// An enabled standard field has no column in the default template.
    #[error("no template column for standard field '{field}'")]
    MissingTemplateColumn { field: StandardFieldId },
    /// The default standards could not be loaded.
    #[error(transparent)]
    Standards(#[from] StandardsError),
}
