//! Heat-map cell styles.

use serde_json::Value;

use ffrkdb_shared::CellStyle;

use super::CellContext;
use crate::table::{row_in_series, SERIES_PREFIX};

const UPPER_CLAMP: f64 = 0.99;

/// Red at 0, yellow at 0.5, green towards 1.
pub fn fraction_to_rgb(fraction: f64) -> String {
    let f = fraction.min(UPPER_CLAMP).max(0.0);
    let (r, g) = if f < 0.5 {
        (255.0, (255.0 * (f / 0.5)).floor())
    } else {
        ((255.0 * ((0.5 - f % 0.5) / 0.5)).floor(), 255.0)
    };
    format!("rgb({},{},0)", r as u8, g as u8)
}

/// Style for the cell at `ctx.key`.
///
/// Rows of the compared realm are highlighted and judged by their synergy
/// value; numeric values are colored against the range of the base key.
pub fn cell_style(ctx: &CellContext<'_>) -> CellStyle {
    let key = ctx.key.replacen(SERIES_PREFIX, "", 1);
    let mut style = CellStyle::default();
    let mut value = ctx.value();

    if ctx.realm.is_some_and(|realm| row_in_series(ctx.row, realm)) {
        style.set("color", "cyan");
        style.set("font-size", "110%");
        if let Some(synergy) = ctx.row.get(&format!("{SERIES_PREFIX}{key}")) {
            value = Some(synergy);
        }
    }

    if let Some(fraction) = value
        .filter(|v| is_nonzero_number(v))
        .and_then(|v| ctx.ranges.fraction(&key, v))
    {
        style.set("background-color", fraction_to_rgb(fraction));
        style.set("color", "black");
    }

    style
}

fn is_nonzero_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::StatRanges;
    use ffrkdb_domain::Series;
    use ffrkdb_shared::TableRow;
    use serde_json::json;

    fn row(value: serde_json::Value) -> TableRow {
        value.as_object().unwrap().clone()
    }

    fn ranges() -> StatRanges {
        let mut ranges = StatRanges::new();
        ranges.observe("atk", 100.0);
        ranges.observe("atk", 200.0);
        ranges
    }

    #[test]
    fn gradient_endpoints() {
        assert_eq!(fraction_to_rgb(0.0), "rgb(255,0,0)");
        assert_eq!(fraction_to_rgb(0.25), "rgb(255,127,0)");
        assert_eq!(fraction_to_rgb(0.5), "rgb(255,255,0)");
        assert_eq!(fraction_to_rgb(0.75), "rgb(127,255,0)");
        // Clamped to 0.99 so the top is never pure green.
        assert_eq!(fraction_to_rgb(1.0), "rgb(5,255,0)");
        assert_eq!(fraction_to_rgb(-3.0), "rgb(255,0,0)");
    }

    #[test]
    fn colors_numeric_cell_by_range() {
        let ranges = ranges();
        let row = row(json!({"atk": 150, "series_id": 109001}));
        let ctx = CellContext::new("atk", &row, None, &ranges);

        let style = cell_style(&ctx);

        assert_eq!(style.get("background-color"), Some("rgb(255,255,0)"));
        assert_eq!(style.get("color"), Some("black"));
        assert_eq!(style.get("font-size"), None);
    }

    #[test]
    fn realm_rows_use_synergy_value() {
        let ranges = ranges();
        let row = row(json!({"atk": 100, "series_atk": 200, "series_id": 109001}));
        let ctx = CellContext::new("atk", &row, Some(Series::FfIX), &ranges);

        let style = cell_style(&ctx);

        assert_eq!(style.get("font-size"), Some("110%"));
        assert_eq!(style.get("background-color"), Some("rgb(5,255,0)"));
        assert_eq!(style.get("color"), Some("black"));
    }

    #[test]
    fn other_realm_rows_are_not_highlighted() {
        let ranges = ranges();
        let row = row(json!({"atk": 100, "series_atk": 200, "series_id": 200001}));
        let ctx = CellContext::new("atk", &row, Some(Series::FfIX), &ranges);

        let style = cell_style(&ctx);

        assert_eq!(style.get("font-size"), None);
        assert_eq!(style.get("background-color"), Some("rgb(255,0,0)"));
    }

    #[test]
    fn text_and_unknown_keys_are_unstyled() {
        let ranges = ranges();
        let row = row(json!({"name": "Vivi", "spd": 120}));

        assert!(cell_style(&CellContext::new("name", &row, None, &ranges)).is_empty());
        assert!(cell_style(&CellContext::new("spd", &row, None, &ranges)).is_empty());
    }
}
