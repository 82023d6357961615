//! Uniform grid layout.

mod common;

use common::new_context;
use tileui::Rect;

#[test]
fn grid_divides_bounds_row_major() {
    let mut ui = new_context(vec![]);
    let handles = ui.layout_grid(3, 2, &Rect::new(0, 0, 100, 60), 10, 10, None, true);

    assert_eq!(handles.len(), 6);

    // cell width (100 - 20) / 3 = 26, cell height (60 - 10) / 2 = 25
    let expected = [(0, 0), (36, 0), (72, 0), (0, 35), (36, 35), (72, 35)];

    for (handle, (x, y)) in handles.iter().zip(expected) {
        assert_eq!(ui.get_widget_bounds(*handle), Rect::new(x, y, 26, 25));
        assert_eq!(ui.get_widget_text(*handle), "");
        assert!(ui.get_widget_enabled(*handle));
    }
}

#[test]
fn grid_offsets_follow_the_bounds_origin() {
    let mut ui = new_context(vec![]);
    let handles = ui.layout_grid(2, 1, &Rect::new(50, 40, 100, 30), 10, 0, None, false);

    assert_eq!(handles.len(), 2);
    assert_eq!(ui.get_widget_bounds(handles[0]), Rect::new(50, 40, 45, 30));
    assert_eq!(ui.get_widget_bounds(handles[1]), Rect::new(105, 40, 45, 30));
    assert!(!ui.get_widget_enabled(handles[0]));
}

#[test]
fn negative_spacing_is_clamped_to_zero() {
    let mut ui = new_context(vec![]);
    let handles = ui.layout_grid(2, 1, &Rect::new(0, 0, 100, 50), -10, -10, None, true);

    assert_eq!(handles.len(), 2);
    assert_eq!(ui.get_widget_bounds(handles[0]), Rect::new(0, 0, 50, 50));
    assert_eq!(ui.get_widget_bounds(handles[1]), Rect::new(50, 0, 50, 50));
}

#[test]
fn degenerate_grids_create_nothing() {
    let mut ui = new_context(vec![]);

    assert!(ui.layout_grid(0, 2, &Rect::new(0, 0, 100, 60), 0, 0, None, true).is_empty());
    assert!(ui.layout_grid(2, -1, &Rect::new(0, 0, 100, 60), 0, 0, None, true).is_empty());
    assert!(ui.layout_grid(2, 2, &Rect::empty(), 0, 0, None, true).is_empty());
    assert_eq!(ui.widget_count(), 0);
}
