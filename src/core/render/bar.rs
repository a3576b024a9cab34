// src/core/render/bar.rs
use anyhow::{Result, bail};
use std::fmt::Write as _;

use crate::config::RenderConfig;
use crate::models::Dataset;
use crate::utils::{px, xml_escape};

/// Renders the dataset as a minimal SVG bar chart document.
///
/// One column per entry along a shared baseline, heights proportional to
/// the largest value, colors cycling through the configured palette, the
/// entry label under each column.
///
/// # Errors
///
/// Returns an error when the dataset is empty or sums to zero.
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn draw_bar(data: &Dataset, width: u32, height: u32, config: &RenderConfig) -> Result<String> {
    if data.is_empty() || data.sum() == 0 {
        bail!("empty or zero-sum dataset");
    }

    // sum() > 0 guarantees a non-zero maximum
    let max_value = data.iter().map(|e| e.value).max().unwrap_or(1);

    let baseline = f64::from(height) - config.bar_margin;
    let usable_height = baseline - config.bar_margin;
    let count = data.len() as f64;
    let column_width = (f64::from(width) - config.bar_gap * (count + 1.0)) / count;

    let mut doc = String::new();
    writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    )?;
    writeln!(
        doc,
        r#"  <line x1="0" y1="{0}" x2="{width}" y2="{0}" stroke="black" />"#,
        px(baseline)
    )?;

    for (i, entry) in data.iter().enumerate() {
        let bar_height = usable_height * (entry.value as f64 / max_value as f64);
        let x = config.bar_gap + (column_width + config.bar_gap) * i as f64;
        let y = baseline - bar_height;
        let color = config.color(i);

        writeln!(
            doc,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" style="fill:{}" />"#,
            px(x),
            px(y),
            px(column_width),
            px(bar_height),
            color
        )?;
        writeln!(
            doc,
            r#"  <text x="{}" y="{}">{}</text>"#,
            px(x),
            px(baseline + 20.0),
            xml_escape(&entry.label)
        )?;
    }

    doc.push_str("</svg>\n");
    Ok(doc)
}
