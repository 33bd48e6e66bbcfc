use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dmp_map::{EditorSummary, RowDisplayInfo};
use dmp_model::{ResearchOutputTableQuestion, StandardField};

pub fn fields_table(fields: &[StandardField]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Enabled"),
        header_cell("Required"),
        header_cell("Help"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for field in fields {
        table.add_row(vec![
            Cell::new(field.id()).add_attribute(Attribute::Bold),
            Cell::new(&field.label),
            flag_cell(field.enabled),
            flag_cell(field.required),
            dim_cell(&field.help_text),
        ]);
    }
    table
}

pub fn columns_table(question: &ResearchOutputTableQuestion) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Heading"),
        header_cell("Type"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (index, column) in question.columns.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&column.heading),
            Cell::new(column.content.type_name()),
            flag_cell(column.required),
        ]);
    }
    table
}

pub fn row_info_table(info: &RowDisplayInfo) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let repositories = if info.repositories.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(info.repositories.join(", "))
    };
    let output_type = if info.output_type.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&info.output_type)
    };
    table.add_row(vec![header_cell("Title"), Cell::new(&info.title)]);
    table.add_row(vec![header_cell("Output Type"), output_type]);
    table.add_row(vec![header_cell("Repositories"), repositories]);
    table
}

pub fn editor_summary_line(summary: &EditorSummary) -> String {
    format!(
        "Enabled fields: {} standard, {} additional ({} required)",
        summary.enabled_standard, summary.enabled_additional, summary.required
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmp_model::StandardFieldId;

    #[test]
    fn fields_table_lists_every_field() {
        let fields = vec![
            StandardField::new(StandardFieldId::Title, "Title").enabled(true),
            StandardField::new(StandardFieldId::Licenses, "Licenses"),
        ];
        let rendered = fields_table(&fields).to_string();
        assert!(rendered.contains("title"));
        assert!(rendered.contains("licenses"));
    }

    #[test]
    fn summary_line_reports_counts() {
        let line = editor_summary_line(&EditorSummary {
            enabled_standard: 3,
            enabled_additional: 1,
            required: 2,
        });
        assert_eq!(line, "Enabled fields: 3 standard, 1 additional (2 required)");
    }
}
