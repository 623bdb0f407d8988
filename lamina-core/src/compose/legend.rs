use core::fmt::Write as _;

use lamina_types::Palette;

use super::escape::escape;

const CONTAINER_STYLE: &str = "background-color: white; padding: 20px; border-radius: 10px; \
     border: 1px solid #eee; line-height: 2.0; color: black;";

/// Wrap rendered markup in the standard white container.
#[must_use]
pub fn wrap_container(markup: &str) -> String {
    format!(r#"<div style="{CONTAINER_STYLE}">{markup}</div>"#)
}

fn push_chip(out: &mut String, label: &str, palette: &Palette) {
    let _ = write!(
        out,
        r#"<span style="background-color: {}; padding: 2px 8px; border-radius: 3px; font-size: 12px;">{}</span>"#,
        palette.color_for(label).rgba(palette.alpha),
        escape(label),
    );
}

/// Render the palette as a color legend.
///
/// One block per legend group, each with a heading and a chip per label. A
/// palette without groups lists all of its labels in a single block.
#[must_use]
pub fn render_legend(palette: &Palette) -> String {
    let mut out = String::from(r#"<div class="lamina-legend">"#);
    if palette.groups.is_empty() {
        out.push_str(r#"<div class="lamina-legend-group">"#);
        for label in palette.colors.keys() {
            push_chip(&mut out, label, palette);
        }
        out.push_str("</div>");
    } else {
        for group in &palette.groups {
            let _ = write!(
                out,
                r#"<div class="lamina-legend-group"><strong>{}</strong>"#,
                escape(&group.title)
            );
            for label in &group.labels {
                push_chip(&mut out, label, palette);
            }
            out.push_str("</div>");
        }
    }
    out.push_str("</div>");
    out
}
