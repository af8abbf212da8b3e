//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tsr_connector::{Cell, ColumnDefinition, ColumnKind, ObjectRef, Page, Row};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a page of rows.
    pub fn format_page(&self, columns: &[ColumnDefinition], page: &Page) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_page_json(columns, page),
            OutputFormat::Table => Ok(self.format_page_table(columns, page)),
            OutputFormat::Quiet => Ok(self.format_page_quiet(page)),
        }
    }

    /// Format the declared columns.
    pub fn format_columns(&self, columns: &[ColumnDefinition]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_columns: Vec<Value> = columns
                    .iter()
                    .map(|c| json!({ "name": c.name, "type": column_kind(c.kind) }))
                    .collect();
                Ok(serde_json::to_string_pretty(&json_columns)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Column", "Type"]);
                for column in columns {
                    builder.push_record([column.name, column_kind(column.kind)]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(columns
                .iter()
                .map(|c| c.name)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a page as JSON.
    fn format_page_json(&self, columns: &[ColumnDefinition], page: &Page) -> Result<String> {
        let rows: Vec<Value> = page
            .rows
            .iter()
            .map(|row| {
                let cells: serde_json::Map<String, Value> = columns
                    .iter()
                    .zip(&row.cells)
                    .map(|(column, cell)| (column.name.to_string(), cell_json(cell)))
                    .collect();

                json!({
                    "cells": cells,
                    "metadata": row.metadata.as_ref().map(|m| json!({
                        "element": object_ref_json(&m.element),
                        "parameter": object_ref_json(&m.parameter),
                    })),
                })
            })
            .collect();

        let body = json!({
            "rows": rows,
            "has_next_page": page.has_next_page,
        });

        Ok(serde_json::to_string_pretty(&body)?)
    }

    /// Format a page as a table.
    fn format_page_table(&self, columns: &[ColumnDefinition], page: &Page) -> String {
        if page.rows.is_empty() {
            return self.colorize("No related parameters found.", "yellow");
        }

        if let Some(message) = error_message(page) {
            return self.error(message);
        }

        let mut builder = Builder::default();
        builder.push_record(columns.iter().map(|c| c.name));

        for row in &page.rows {
            builder.push_record(row.cells.iter().map(|cell| match cell {
                Cell::Double(value) => format!("{:.2}", value),
                other => other.to_string(),
            }));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a page in quiet mode (related parameter keys only).
    fn format_page_quiet(&self, page: &Page) -> String {
        if let Some(message) = error_message(page) {
            return message.to_string();
        }

        page.rows
            .iter()
            .filter_map(|row| row.cells.get(1).and_then(Cell::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// The error description of an error page, if `page` is one.
///
/// Error pages hold exactly one row without metadata.
fn error_message(page: &Page) -> Option<&str> {
    match page.rows.as_slice() {
        [Row {
            cells,
            metadata: None,
        }] => cells.first().and_then(Cell::as_str),
        _ => None,
    }
}

fn column_kind(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::String => "string",
        ColumnKind::Double => "double",
    }
}

fn cell_json(cell: &Cell) -> Value {
    match cell {
        Cell::String(value) => json!(value),
        Cell::Double(value) => json!(value),
    }
}

fn object_ref_json(object: &ObjectRef) -> Value {
    match object {
        ObjectRef::Element(element) => json!({
            "kind": "element",
            "system_id": element.system_id,
            "element_id": element.element_id,
        }),
        ObjectRef::Parameter(parameter) => json!({
            "kind": "parameter",
            "system_id": parameter.system_id(),
            "element_id": parameter.element_id(),
            "parameter_id": parameter.parameter_id(),
            "table_index": parameter.table_index(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsr_connector::projector::{error_row, relation_row, COLUMNS};
    use tsr_domain::{ParameterKey, Relation};
    use tsr_sdk::SdkError;

    fn relation_page() -> Page {
        let relation = Relation::new(
            ParameterKey::new(100, 5, 3),
            ParameterKey::new(100, 7, 9),
            0.87,
        );
        Page::last(vec![relation_row(&relation)])
    }

    fn error_page() -> Page {
        Page::last(vec![error_row(&SdkError::Channel("analytics offline".into()))])
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_page(&COLUMNS, &relation_page()).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["has_next_page"], false);
        assert_eq!(value["rows"][0]["cells"]["Related Element"], "100/5");
        assert_eq!(value["rows"][0]["cells"]["Confidence"], 0.87);
        assert_eq!(value["rows"][0]["metadata"]["element"]["element_id"], 5);
        assert_eq!(value["rows"][0]["metadata"]["parameter"]["parameter_id"], 9);
    }

    #[test]
    fn test_json_error_row_has_null_metadata() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_page(&COLUMNS, &error_page()).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value["rows"][0]["cells"]["Related Element"],
            "Channel error: analytics offline"
        );
        assert!(value["rows"][0]["metadata"].is_null());
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_page(&COLUMNS, &relation_page()).unwrap();
        assert!(output.contains("Related Parameter"));
        assert!(output.contains("100/7/9"));
        assert!(output.contains("0.87"));
    }

    #[test]
    fn test_table_error_page() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_page(&COLUMNS, &error_page()).unwrap();
        assert_eq!(output, "✗ Channel error: analytics offline");
    }

    #[test]
    fn test_empty_page() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_page(&COLUMNS, &Page::last(vec![])).unwrap();
        assert!(output.contains("No related parameters found"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_page(&COLUMNS, &relation_page()).unwrap();
        assert_eq!(output, "100/7/9");
    }

    #[test]
    fn test_columns_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_columns(&COLUMNS).unwrap();
        assert_eq!(
            output,
            "Related Element\nRelated Parameter\nRelated TableKey\nConfidence"
        );
    }
}
