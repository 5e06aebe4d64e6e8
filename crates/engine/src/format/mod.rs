//! Cell formatting - raw row values into display HTML and inline styles.
//!
//! Formatters are looked up by column key in a [`FormatterRegistry`]. Keys
//! without an entry print the plain value (or the synergy value when a realm
//! comparison is active).

pub mod html;
pub mod styler;

use std::collections::HashMap;

use serde_json::Value;

use ffrkdb_domain::common::{
    format_long, from_epoch_seconds, parse_datetime, EPOCH_TIMESTAMP_FLOOR,
};
use ffrkdb_domain::{AttackKind, RequiredAttack, Series};
use ffrkdb_shared::{RenderedCell, RenderedRow, TableColumn, TableRow};

use crate::table::{row_in_series, StatRanges, SERIES_PREFIX};

pub use styler::{cell_style, fraction_to_rgb};

/// Column holding the zoom-in link; it has no value of its own.
pub const INSPECT_FIELD: &str = "inspect";

/// Keys whose values are dates.
pub const TIMESTAMP_KEYS: [&str; 4] = ["timestamp", "opened_at", "closed_at", "kept_out_at"];

/// Everything a formatter may look at for one cell.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub key: &'a str,
    pub row: &'a TableRow,
    /// Realm being compared, if any.
    pub realm: Option<Series>,
    pub ranges: &'a StatRanges,
}

impl<'a> CellContext<'a> {
    pub fn new(
        key: &'a str,
        row: &'a TableRow,
        realm: Option<Series>,
        ranges: &'a StatRanges,
    ) -> Self {
        Self {
            key,
            row,
            realm,
            ranges,
        }
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.row.get(self.key)
    }

    pub fn search_id(&self) -> Option<String> {
        self.row
            .get("search_id")
            .filter(|v| !v.is_null())
            .map(raw_text)
    }

    fn in_compared_realm(&self) -> bool {
        self.realm.is_some_and(|realm| row_in_series(self.row, realm))
    }
}

/// Formats a cell whose value is present and not null.
pub type ValueFormatter = fn(&CellContext<'_>, &Value) -> String;

/// Formats a cell from the row alone.
pub type RowFormatter = fn(&CellContext<'_>) -> String;

#[derive(Clone, Copy)]
enum Entry {
    Value(ValueFormatter),
    Row(RowFormatter),
}

#[derive(Clone)]
pub struct FormatterRegistry {
    entries: HashMap<String, Entry>,
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormatterRegistry {
    /// A registry that prints every value as plain text.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The formatters every table view uses.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register("name", format_link_text);
        registry.register("title", format_link_text);
        registry.register("image_path", format_image);
        registry.register("series_id", format_series);
        for key in TIMESTAMP_KEYS {
            registry.register(key, format_timestamp);
        }
        registry.register("max_hp", format_max_hp);
        registry.register_row(INSPECT_FIELD, format_inspect);
        registry
    }

    pub fn register(&mut self, key: impl Into<String>, formatter: ValueFormatter) {
        self.entries.insert(key.into(), Entry::Value(formatter));
    }

    pub fn register_row(&mut self, key: impl Into<String>, formatter: RowFormatter) {
        self.entries.insert(key.into(), Entry::Row(formatter));
    }

    pub fn format(&self, ctx: &CellContext<'_>) -> String {
        let entry = self.entries.get(ctx.key).copied();
        if let Some(Entry::Row(formatter)) = entry {
            return formatter(ctx);
        }

        let Some(value) = ctx.value().filter(|v| !v.is_null()) else {
            return String::new();
        };

        if is_epoch_timestamp(value) {
            return format_epoch(value);
        }

        match entry {
            Some(Entry::Value(formatter)) => formatter(ctx, value),
            _ => format_plain(ctx, value),
        }
    }

    /// Renders the displayed columns of one row. Heat-mapped columns also get
    /// a cell style.
    pub fn render_row(
        &self,
        row: &TableRow,
        columns: &[TableColumn],
        realm: Option<Series>,
        ranges: &StatRanges,
    ) -> RenderedRow {
        let cells = columns
            .iter()
            .map(|column| {
                let ctx = CellContext::new(&column.field, row, realm, ranges);
                let style = if column.is_heat_mapped() {
                    cell_style(&ctx)
                } else {
                    Default::default()
                };
                let cell = RenderedCell {
                    html: self.format(&ctx),
                    style,
                };
                (column.field.clone(), cell)
            })
            .collect();

        RenderedRow {
            data: row.clone(),
            cells,
        }
    }

    pub fn render(
        &self,
        rows: &[TableRow],
        columns: &[TableColumn],
        realm: Option<Series>,
        ranges: &StatRanges,
    ) -> Vec<RenderedRow> {
        rows.iter()
            .map(|row| self.render_row(row, columns, realm, ranges))
            .collect()
    }
}

// =============================================================================
// Value text
// =============================================================================

/// Unescaped text of a scalar value.
fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                html::number(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::Array(items) => items.iter().map(raw_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => String::new(),
    }
}

/// Escaped display text. List cells put one entry per line.
fn text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| html::escape(&raw_text(item)))
            .collect::<Vec<_>>()
            .join("<br>"),
        other => html::escape(&raw_text(other)),
    }
}

fn is_epoch_timestamp(value: &Value) -> bool {
    value
        .as_f64()
        .is_some_and(|n| n >= EPOCH_TIMESTAMP_FLOOR as f64)
}

fn format_epoch(value: &Value) -> String {
    let raw = raw_text(value);
    value
        .as_f64()
        .and_then(|seconds| from_epoch_seconds(seconds as i64))
        .map(|dt| html::live_timestamp(&format_long(&dt), &raw))
        .unwrap_or_else(|| html::escape(&raw))
}

// =============================================================================
// Standard formatters
// =============================================================================

/// Plain text, or the synergy value for rows of the compared realm.
pub fn format_plain(ctx: &CellContext<'_>, value: &Value) -> String {
    if ctx.in_compared_realm() {
        if let Some(synergy) = ctx.row.get(&format!("{SERIES_PREFIX}{}", ctx.key)) {
            return text(synergy);
        }
    }
    text(value)
}

pub fn format_link_text(ctx: &CellContext<'_>, value: &Value) -> String {
    match ctx.search_id() {
        Some(search_id) => html::detail_link(&search_id, &text(value)),
        None => format_plain(ctx, value),
    }
}

pub fn format_image(ctx: &CellContext<'_>, value: &Value) -> String {
    let name = ctx.row.get("name").map(raw_text).unwrap_or_default();
    let image = html::thumbnail(&raw_text(value), &name);
    match ctx.search_id() {
        Some(search_id) => html::detail_link(&search_id, &image),
        None => image,
    }
}

pub fn format_series(ctx: &CellContext<'_>, value: &Value) -> String {
    match value.as_u64().and_then(|id| u32::try_from(id).ok()) {
        Some(id) => html::escape(&Series::from(id).display_name()),
        None => format_plain(ctx, value),
    }
}

pub fn format_timestamp(ctx: &CellContext<'_>, value: &Value) -> String {
    let parsed = match value {
        Value::String(s) => parse_datetime(s).ok(),
        Value::Number(n) => n.as_i64().and_then(from_epoch_seconds),
        _ => None,
    };
    match parsed {
        Some(dt) => html::live_timestamp(&format_long(&dt), &raw_text(value)),
        None => format_plain(ctx, value),
    }
}

/// HP followed by the attack needed on each side to deal it in one hit.
pub fn format_max_hp(ctx: &CellContext<'_>, value: &Value) -> String {
    let Some(hp) = value.as_f64() else {
        return format_plain(ctx, value);
    };
    let defense = ctx
        .row
        .get("defense")
        .and_then(Value::as_f64)
        .unwrap_or(f64::NAN);
    let required = RequiredAttack::for_target(hp, defense);

    format!(
        "{} {} {}",
        text(value),
        html::attack_hint(&required, AttackKind::Physical),
        html::attack_hint(&required, AttackKind::Magical)
    )
}

pub fn format_inspect(ctx: &CellContext<'_>) -> String {
    ctx.search_id()
        .map(|search_id| html::inspect_link(&search_id))
        .unwrap_or_default()
}
