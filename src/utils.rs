// src/utils.rs

/// Escape the five XML special characters for safe embedding in element
/// text content and attribute values.
#[must_use]
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Truncates a coordinate toward zero for integer pixel output.
#[must_use]
#[expect(clippy::as_conversions, reason = "Pixel coordinates fit in i64")]
#[expect(
    clippy::cast_possible_truncation,
    reason = "Pixel coordinates fit in i64"
)]
pub fn px(value: f64) -> i64 {
    value.trunc() as i64
}
