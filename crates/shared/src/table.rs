//! Table widget payloads.
//!
//! The grid widget takes a list of column definitions and a list of row maps.
//! Each row keeps its raw values (for sorting and searching) next to the
//! rendered HTML and inline style of every displayed cell.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label column of the crafting matrix.
pub const ALT_FIELD: &str = "alt";

/// Prefix of the hidden numeric sort columns (`sort-atk`, `sort-name`, ...).
pub const SORT_PREFIX: &str = "sort-";

/// Name of the red-to-green cell style hook.
pub const HEAT_MAP_STYLE: &str = "cell_styler";

/// One row as the widget stores it: column key to raw value.
pub type TableRow = serde_json::Map<String, serde_json::Value>;

/// Column definition understood by the grid widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub field: String,
    pub title: String,
    #[serde(
        rename = "footerFormatter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub footer: Option<String>,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_style: Option<String>,
}

impl TableColumn {
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            footer: None,
            sortable: false,
            sort_name: None,
            cell_style: None,
        }
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Sort on the hidden `sort-<field>` column instead of the displayed text.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self.sort_name = Some(format!("{}{}", SORT_PREFIX, self.field));
        self
    }

    /// Color the cell by where its value sits in the column's range.
    pub fn heat_mapped(mut self) -> Self {
        self.cell_style = Some(HEAT_MAP_STYLE.to_string());
        self
    }

    pub fn is_heat_mapped(&self) -> bool {
        self.cell_style.as_deref() == Some(HEAT_MAP_STYLE)
    }
}

/// Inline CSS for one cell, serialized as `{"css": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    #[serde(default)]
    pub css: BTreeMap<String, String>,
}

impl CellStyle {
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.css.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.css.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }
}

/// Display form of one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCell {
    pub html: String,
    #[serde(default, skip_serializing_if = "CellStyle::is_empty")]
    pub style: CellStyle,
}

/// A row ready for the widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedRow {
    pub data: TableRow,
    pub cells: BTreeMap<String, RenderedCell>,
}

/// What the widget is asked to do with a named table element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum TableCommand {
    /// Replace the rows, keep the columns.
    Load {
        table_id: String,
        rows: Vec<RenderedRow>,
    },
    /// Destroy the table and build it again with new columns.
    Rebuild {
        table_id: String,
        columns: Vec<TableColumn>,
        rows: Vec<RenderedRow>,
    },
}

impl TableCommand {
    pub fn table_id(&self) -> &str {
        match self {
            Self::Load { table_id, .. } | Self::Rebuild { table_id, .. } => table_id,
        }
    }

    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Self::Load { rows, .. } | Self::Rebuild { rows, .. } => rows,
        }
    }
}
