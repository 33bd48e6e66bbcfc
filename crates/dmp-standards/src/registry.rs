use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use dmp_model::{
    DefaultOutputType, ResearchOutputTableQuestion, StandardField, StandardFieldId,
};

use crate::error::StandardsError;
use crate::paths::{
    OUTPUT_TYPES_FILE, STANDARD_FIELDS_FILE, TEMPLATE_FILE, standards_dir_from_env,
};

const EMBEDDED_TEMPLATE: &str = include_str!("../data/research_output_table.json");
const EMBEDDED_STANDARD_FIELDS: &str = include_str!("../data/standard_fields.toml");
const EMBEDDED_OUTPUT_TYPES: &str = include_str!("../data/output_types.toml");

/// Where a registry was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum StandardsSource {
    Embedded,
    Directory(PathBuf),
}

#[derive(Debug, Deserialize)]
struct StandardFieldsFile {
    fields: Vec<StandardField>,
}

#[derive(Debug, Deserialize)]
struct OutputTypesFile {
    output_types: Vec<DefaultOutputType>,
}

/// Counts describing a loaded registry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RegistrySummary {
    pub source: StandardsSource,
    pub schema_version: String,
    pub column_count: usize,
    pub standard_field_count: usize,
    pub output_type_count: usize,
    pub enabled_by_default: Vec<String>,
}

/// The default question template, the initial standard fields and the
/// default output-type catalog.
#[derive(Debug, Clone)]
pub struct StandardsRegistry {
    pub source: StandardsSource,
    pub template: ResearchOutputTableQuestion,
    pub standard_fields: Vec<StandardField>,
    pub output_types: Vec<DefaultOutputType>,
}

impl StandardsRegistry {
    /// Load from `DMP_STANDARDS_DIR` when set, otherwise the embedded defaults.
    pub fn load() -> Result<Self, StandardsError> {
        match standards_dir_from_env() {
            Some(dir) => Self::load_from_dir(&dir),
            None => Self::load_embedded(),
        }
    }

    /// Load the standards compiled into this crate.
    pub fn load_embedded() -> Result<Self, StandardsError> {
        let label = Path::new("<embedded>");
        let registry = Self {
            source: StandardsSource::Embedded,
            template: parse_template(EMBEDDED_TEMPLATE, &label.join(TEMPLATE_FILE))?,
            standard_fields: parse_standard_fields(
                EMBEDDED_STANDARD_FIELDS,
                &label.join(STANDARD_FIELDS_FILE),
            )?,
            output_types: parse_output_types(
                EMBEDDED_OUTPUT_TYPES,
                &label.join(OUTPUT_TYPES_FILE),
            )?,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Load the three standards files from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, StandardsError> {
        debug!(dir = %dir.display(), "loading standards directory");
        let template_path = dir.join(TEMPLATE_FILE);
        let fields_path = dir.join(STANDARD_FIELDS_FILE);
        let output_types_path = dir.join(OUTPUT_TYPES_FILE);

        let registry = Self {
            source: StandardsSource::Directory(dir.to_path_buf()),
            template: parse_template(&read(&template_path)?, &template_path)?,
            standard_fields: parse_standard_fields(&read(&fields_path)?, &fields_path)?,
            output_types: parse_output_types(&read(&output_types_path)?, &output_types_path)?,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Check that every standard field can be emitted and is listed once.
    pub fn validate(&self) -> Result<(), StandardsError> {
        for field in StandardFieldId::ALL {
            if self.template.column_for(field).is_none() {
                return Err(StandardsError::MissingTemplateColumn { field });
            }
        }
        let mut seen = BTreeSet::new();
        for field in &self.standard_fields {
            if !seen.insert(field.id()) {
                return Err(StandardsError::DuplicateField { field: field.id() });
            }
        }
        Ok(())
    }

    pub fn standard_field(&self, id: StandardFieldId) -> Option<&StandardField> {
        self.standard_fields.iter().find(|f| f.id() == id)
    }

    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            source: self.source.clone(),
            schema_version: self.template.meta.schema_version.clone(),
            column_count: self.template.columns.len(),
            standard_field_count: self.standard_fields.len(),
            output_type_count: self.output_types.len(),
            enabled_by_default: self
                .standard_fields
                .iter()
                .filter(|f| f.enabled)
                .map(|f| f.id().to_string())
                .collect(),
        }
    }
}

fn read(path: &Path) -> Result<String, StandardsError> {
    std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))
}

fn parse_template(raw: &str, path: &Path) -> Result<ResearchOutputTableQuestion, StandardsError> {
    serde_json::from_str(raw).map_err(|source| StandardsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_standard_fields(raw: &str, path: &Path) -> Result<Vec<StandardField>, StandardsError> {
    toml::from_str::<StandardFieldsFile>(raw)
        .map(|file| file.fields)
        .map_err(|source| StandardsError::Toml {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_output_types(raw: &str, path: &Path) -> Result<Vec<DefaultOutputType>, StandardsError> {
    toml::from_str::<OutputTypesFile>(raw)
        .map(|file| file.output_types)
        .map_err(|source| StandardsError::Toml {
            path: path.to_path_buf(),
            source,
        })
}
