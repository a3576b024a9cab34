// src/core/render/pie.rs
use anyhow::{Result, bail};
use std::fmt::Write as _;

use crate::config::RenderConfig;
use crate::core::render::geometry::{Slice, degree_to_radian, point_on_circle};
use crate::models::Dataset;
use crate::utils::{px, xml_escape};

/// Renders the dataset as an SVG pie chart document.
///
/// Entries are drawn in collection order, one filled sector and one label
/// each, colors cycling through the configured palette. An unfilled
/// reference circle outlines the pie. The document is returned as a
/// string; writing it anywhere is the caller's concern.
///
/// # Arguments
///
/// * `data` - The entries to draw, already sorted by the caller
/// * `width` - Canvas width in pixels
/// * `height` - Canvas height in pixels
/// * `config` - Palette and geometry parameters
///
/// # Errors
///
/// Returns an error when the dataset is empty or sums to zero, since no
/// angular proportions exist to draw.
pub fn draw_pie(data: &Dataset, width: u32, height: u32, config: &RenderConfig) -> Result<String> {
    if data.is_empty() || data.sum() == 0 {
        bail!("empty or zero-sum dataset");
    }

    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let r = f64::from(width.min(height)) * config.radius_ratio / 2.0;

    let mut doc = String::new();
    writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    )?;
    writeln!(
        doc,
        r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="black" />"#,
        px(cx),
        px(cy),
        px(r)
    )?;

    let mut cumulative = 0.0_f64;
    for (i, entry) in data.iter().enumerate() {
        let slice_deg = 360.0 * data.percentage(&entry.label);
        let slice = Slice {
            start_deg: cumulative,
            end_deg: cumulative + slice_deg,
        };
        cumulative = slice.end_deg;

        let (sx, sy) = point_on_circle(cx, cy, r, degree_to_radian(slice.start_deg));
        let (ex, ey) = point_on_circle(cx, cy, r, degree_to_radian(slice.end_deg));
        let color = config.color(i);

        // Sector: move to the center, line out to the start-angle point,
        // arc clockwise to the end-angle point, line back to the center.
        writeln!(
            doc,
            r#"  <path d="M{},{} L{},{} A{},{} 0 {},1 {},{} L{},{}" style="fill:{};stroke:{}" />"#,
            px(cx),
            px(cy),
            px(sx),
            px(sy),
            px(r),
            px(r),
            slice.large_arc_flag(),
            px(ex),
            px(ey),
            px(cx),
            px(cy),
            color,
            color
        )?;

        let (lx, ly) = point_on_circle(
            cx,
            cy,
            r * config.label_offset,
            degree_to_radian(slice.mid_deg()),
        );
        writeln!(
            doc,
            r#"  <text x="{}" y="{}">{}</text>"#,
            px(lx),
            px(ly),
            xml_escape(&entry.label)
        )?;
    }

    doc.push_str("</svg>\n");
    Ok(doc)
}
