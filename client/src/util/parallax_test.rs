use super::*;

#[test]
fn vertical_offset_scales_scroll_y() {
    let offset = Offset::from_scroll(40.0, 200.0, DEFAULT_SPEED, Axis::Vertical);
    assert_eq!(offset, Offset { x: 0.0, y: 100.0 });
}

#[test]
fn horizontal_offset_ignores_scroll_y() {
    let offset = Offset::from_scroll(40.0, 200.0, 0.25, Axis::Horizontal);
    assert_eq!(offset, Offset { x: 10.0, y: 0.0 });
}

#[test]
fn transform_switches_to_3d_with_depth() {
    let offset = Offset { x: 0.0, y: 12.5 };
    assert_eq!(offset.transform(0.0), "translate(0px, 12.5px)");
    assert_eq!(offset.transform(-20.0), "translate3d(0px, 12.5px, -20px)");
}
