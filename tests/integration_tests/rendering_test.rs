// tests/integration_tests/rendering_test.rs
use super::common::sample_dataset;
use anyhow::Result;
use csvchart::{Dataset, Entry, RenderConfig, draw_pie};

#[test]
fn test_pie_document_structure() -> Result<()> {
    let doc = draw_pie(&sample_dataset(), 1000, 800, &RenderConfig::default())?;

    assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="800">"#));
    assert!(doc.ends_with("</svg>\n"));
    assert_eq!(doc.matches("<circle ").count(), 1, "one reference circle");
    assert_eq!(doc.matches("<path ").count(), 3, "one sector per entry");
    assert_eq!(doc.matches("<text ").count(), 3, "one label per entry");
    Ok(())
}

#[test]
fn test_known_scenario_angles_and_flags() -> Result<()> {
    // [("A",50),("B",30),("C",20)]: slice angles 180/108/72 degrees,
    // cumulative boundaries [0,180],[180,288],[288,360]. Only the first
    // slice reaches a half circle, so exactly one large-arc flag is set.
    let doc = draw_pie(&sample_dataset(), 1000, 800, &RenderConfig::default())?;

    assert!(doc.contains(r#"d="M500,400 L500,120 A280,280 0 1,1 500,680 L500,400""#));
    assert_eq!(doc.matches(" 0 1,1 ").count(), 1);
    assert_eq!(doc.matches(" 0 0,1 ").count(), 2);
    Ok(())
}

#[test]
fn test_labels_round_trip_in_sorted_order() -> Result<()> {
    let mut data: Dataset = [("C", 20), ("A", 50), ("B", 30)]
        .into_iter()
        .map(|(label, value)| Entry::new(label.to_owned(), value))
        .collect();
    data.sort_by_value_desc();
    let doc = draw_pie(&data, 1000, 800, &RenderConfig::default())?;

    let positions: Vec<usize> = ["A", "B", "C"]
        .iter()
        .map(|label| {
            doc.find(&format!(">{label}</text>"))
                .expect("every label appears in the document")
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(doc.matches("</text>").count(), 3);
    Ok(())
}

#[test]
fn test_custom_palette_wraps_around() -> Result<()> {
    let config = RenderConfig {
        palette: ["indigo", "amber"].map(String::from).to_vec(),
        ..RenderConfig::default()
    };
    let data: Dataset = [("a", 4), ("b", 3), ("c", 2), ("d", 1)]
        .into_iter()
        .map(|(label, value)| Entry::new(label.to_owned(), value))
        .collect();
    let doc = draw_pie(&data, 1000, 800, &config)?;

    assert_eq!(doc.matches("fill:indigo").count(), 2);
    assert_eq!(doc.matches("fill:amber").count(), 2);
    Ok(())
}

#[cfg(feature = "bar")]
#[test]
fn test_bar_document_structure() -> Result<()> {
    use csvchart::draw_bar;

    let doc = draw_bar(&sample_dataset(), 1000, 800, &RenderConfig::default())?;

    assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="800">"#));
    assert!(doc.ends_with("</svg>\n"));
    assert_eq!(doc.matches("<rect ").count(), 3, "one column per entry");
    assert_eq!(doc.matches("<text ").count(), 3, "one label per entry");
    assert_eq!(doc.matches("<line ").count(), 1, "one baseline");
    Ok(())
}
