//! Small HTML fragments used by the cell formatters.
//!
//! Every interpolated value goes through [`escape`].

use ffrkdb_domain::{AttackKind, RequiredAttack};

/// Escape HTML special characters.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Link to a record's detail page.
pub fn detail_link(search_id: &str, inner_html: &str) -> String {
    format!(r#"<a href="/{}">{}</a>"#, escape(search_id), inner_html)
}

pub fn thumbnail(src: &str, name: &str) -> String {
    let name = escape(name);
    format!(
        r#"<img src="{}" alt="{name}" title="{name}" class="img-responsive center-block" style="height: 2em; width: 2em;">"#,
        escape(src)
    )
}

/// Empty `<abbr>` that a live-timestamp script fills with relative time.
pub fn live_timestamp(title: &str, raw: &str) -> String {
    format!(
        r#"<abbr title="{}" data-livestamp="{}"></abbr>"#,
        escape(title),
        escape(raw)
    )
}

pub fn inspect_link(search_id: &str) -> String {
    detail_link(
        search_id,
        r#"<span class="glyphicon glyphicon-zoom-in" aria-hidden="true"></span><span class="sr-only">Inspect</span>"#,
    )
}

/// Popover badge telling how much attack it takes to deal `target` damage.
pub fn attack_hint(required: &RequiredAttack, kind: AttackKind) -> String {
    let (title, icon, damage) = match kind {
        AttackKind::Physical => ("Physical", "glyphicon-info-sign", "damage"),
        AttackKind::Magical => ("Magical", "glyphicon-question-sign", "base damage"),
    };
    let message = format!(
        "You need {} {} in order to do {} {}.",
        number(required.get(kind)),
        kind.stat_label(),
        number(required.target),
        damage
    );
    let message = escape(&message);

    format!(
        r#"<a tabindex="0" class="btn btn-xs btn-default" role="button" data-toggle="popover" title="{title}" data-content="{message}"><span data-container="body" data-toggle="tooltip" title="{message}" class="glyphicon {icon}" aria-hidden="true"></span></a>"#
    )
}

/// Whole floats print without a fraction, as the page's script did.
pub fn number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}
