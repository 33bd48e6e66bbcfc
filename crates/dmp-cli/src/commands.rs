use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, info_span, warn};

use dmp_map::{
    EditorState, RowDisplayInfo, SchemaMapper, create_empty_research_output_row,
    get_row_display_info,
};
use dmp_model::{
    AnyParsedQuestion, DefaultOutputType, ResearchOutputTableQuestion, ResearchOutputTableRow,
    StandardField,
};
use dmp_standards::StandardsRegistry;

use crate::cli::{ExportArgs, FieldsArgs, ImportArgs, QuestionArgs, RowInfoArgs};

/// Load standards from `dir`, or from `DMP_STANDARDS_DIR` / the embedded defaults.
pub fn load_registry(dir: Option<&Path>) -> Result<StandardsRegistry> {
    let registry = match dir {
        Some(dir) => StandardsRegistry::load_from_dir(dir),
        None => StandardsRegistry::load(),
    }
    .context("load standards")?;
    debug!(source = ?registry.source, "loaded standards");
    Ok(registry)
}

pub fn run_export(
    args: &ExportArgs,
    registry: &StandardsRegistry,
) -> Result<ResearchOutputTableQuestion> {
    let span = info_span!("export", state = %args.state.display());
    let _guard = span.enter();

    let state: EditorState = read_json(&args.state, "editor state")?;
    let output_types = match &args.output_types {
        Some(path) => read_json::<Vec<DefaultOutputType>>(path, "output types")?,
        None => registry.output_types.clone(),
    };
    let mapper = SchemaMapper::from_registry(registry);
    let question = state
        .to_question(&mapper, Some(&output_types))
        .context("build question schema")?;
    info!(columns = question.columns.len(), "exported question");
    Ok(question)
}

pub fn run_import(args: &ImportArgs, registry: &StandardsRegistry) -> Result<EditorState> {
    let span = info_span!("import", question = %args.question.display());
    let _guard = span.enter();

    let parsed = read_question(&args.question)?;
    if parsed.as_research_output_table().is_none() {
        warn!("not a research output table question; using default fields");
    }
    let mapper = SchemaMapper::from_registry(registry);
    let state = mapper.json_to_state(Some(&parsed), &registry.standard_fields);
    info!(
        additional = state.additional_fields.len(),
        "imported editor state"
    );
    Ok(state)
}

pub fn run_empty_row(args: &QuestionArgs) -> Result<ResearchOutputTableRow> {
    let question = read_table(&args.question)?;
    Ok(create_empty_research_output_row(&question.columns))
}

pub fn run_row_info(args: &RowInfoArgs) -> Result<RowDisplayInfo> {
    let question = read_table(&args.question)?;
    let row: ResearchOutputTableRow = read_json(&args.row, "answer row")?;
    Ok(get_row_display_info(&row, &question.columns))
}

/// Initial standard fields, or just the one named by `--field`.
pub fn run_fields(
    args: &FieldsArgs,
    registry: &StandardsRegistry,
) -> Result<Vec<StandardField>> {
    match args.field {
        Some(id) => {
            let field = registry
                .standard_field(id)
                .with_context(|| format!("standards define no initial field {id}"))?;
            Ok(vec![field.clone()])
        }
        None => Ok(registry.standard_fields.clone()),
    }
}

/// Pretty JSON written to `out`, or returned for printing when `out` is `None`.
pub fn write_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<Option<String>> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
            Ok(None)
        }
        None => Ok(Some(json)),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {what} from {}", path.display()))
}

fn read_question(path: &Path) -> Result<AnyParsedQuestion> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    AnyParsedQuestion::from_json_str(&raw)
        .with_context(|| format!("parse question from {}", path.display()))
}

fn read_table(path: &Path) -> Result<ResearchOutputTableQuestion> {
    match read_question(path)? {
        AnyParsedQuestion::ResearchOutputTable(question) => Ok(question),
        AnyParsedQuestion::Other(_) => bail!(
            "{} is not a research output table question",
            path.display()
        ),
    }
}
