// File: crates/scatter-core/tests/svg.rs
// Purpose: Validate the SVG document structure produced from a scene.

use std::time::Instant;

use scatter_core::{render_svg, Axis, ChartConfig, Dataset, Field, Record, ScatterController, Theme, Viewport};

fn controller() -> ScatterController {
    let ds = Dataset::new(vec![
        Record::new("AL", [42830.0, 21.1, 13.9, 19.3, 33.5, 38.6]),
        Record::new("AK", [71583.0, 19.9, 15.0, 11.2, 29.7, 33.3]),
        Record::new("A&M", [50068.0, 16.5, 14.4, 18.2, 28.9, 36.9]),
        Record::new("NA", [f64::NAN, 18.0, 12.0, 15.0, 30.0, 40.0]),
    ]);
    ScatterController::new(ds, ChartConfig::default())
}

#[test]
fn document_mirrors_scene() {
    let mut ctl = controller();
    let svg = render_svg(ctl.initial_render(Viewport::new(1000.0, 800.0)), &Theme::light());

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"width="800" height="640""#));
    assert_eq!(svg.matches(r#"class="xAxis""#).count(), 1);
    assert_eq!(svg.matches(r#"class="yAxis""#).count(), 1);
    // the NaN-income record is left out
    assert_eq!(svg.matches(r#"class="stateCircle""#).count(), 3);
    assert_eq!(svg.matches(r#"class="stateText""#).count(), 3);
    assert!(svg.contains(">A&amp;M</text>"));
    assert_eq!(svg.matches("clickableText").count(), 6);
    assert_eq!(svg.matches(r#"class="clickableText active""#).count(), 2);
    assert!(svg.contains(r#"class="clickableText active" name="income" axis="x""#));
    assert!(svg.contains(r#"class="clickableText active" name="smokes" axis="y""#));
    assert!(svg.contains(r#"class="clickableText inactive" name="poverty" axis="x""#));
    assert!(!svg.contains("d3-tip"));
}

#[test]
fn active_class_follows_clicks() {
    let mut ctl = controller();
    ctl.initial_render(Viewport::new(1000.0, 800.0));
    ctl.on_label_click(Axis::X, Field::Age, Instant::now()).expect("click");
    let svg = render_svg(ctl.scene().expect("rendered"), &Theme::light());
    assert!(svg.contains(r#"class="clickableText active" name="age" axis="x""#));
    assert!(svg.contains(r#"class="clickableText inactive" name="income" axis="x""#));
    assert_eq!(svg.matches(r#"class="clickableText active""#).count(), 2);
}

#[test]
fn rendering_is_deterministic() {
    let mut ctl = controller();
    let a = render_svg(ctl.initial_render(Viewport::new(900.0, 700.0)), &Theme::dark());
    let b = render_svg(ctl.initial_render(Viewport::new(900.0, 700.0)), &Theme::dark());
    assert_eq!(a, b);
}

#[test]
fn tooltip_is_emitted_while_hovering() {
    let mut ctl = controller();
    ctl.initial_render(Viewport::new(1000.0, 800.0));
    let center = ctl.scene().map(|s| s.markers[0].center()).expect("marker");
    ctl.pointer_moved(center);
    let svg = render_svg(ctl.scene().expect("rendered"), &Theme::light());
    assert!(svg.contains(r#"<g class="d3-tip">"#));
    assert!(svg.contains(">AL</text></g>"));
}
