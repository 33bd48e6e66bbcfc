#![deny(unsafe_code)]

pub mod engine;
pub mod error;
mod hydrate;
mod merge;
pub mod row;
pub mod state;
pub mod utils;

pub use engine::{DEFAULT_TITLE_MAX_LENGTH, SchemaMapper};
pub use error::MappingError;
pub use row::{
    RowDisplayInfo, TITLE_DISPLAY_LIMIT, UNTITLED_RESEARCH_OUTPUT,
    create_empty_research_output_row, get_row_display_info,
};
pub use state::{DEFAULT_EXPANDED_FIELDS, EditorState, EditorSummary};
pub use utils::{CUSTOM_HEADING_SUFFIX, slugify_id, slugify_value, unreserved_heading};
