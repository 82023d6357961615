//! Widget store, dirty marking, and clean-pass behavior over a scripted host.

mod common;

use common::{DISP_H, DISP_W, new_context};
use tileui::{Color, Context, Dimensioni, Rect, dirty_buffer_len};

#[test]
fn initial_clean_repaints_whole_display() {
    let mut ui = new_context(vec![]);
    ui.clean();

    // 25 x 15 tiles on an 800x480 display with 32x32 tiles
    assert_eq!(ui.host().blts.len(), 25 * 15);
    assert_eq!(ui.host().blts[0], (0, 0));
    assert_eq!(*ui.host().blts.last().unwrap(), (768, 448));
}

#[test]
fn adding_a_widget_dirties_exactly_its_tile() {
    let mut ui = new_context(vec![]);
    ui.clean();
    ui.host_mut().blts.clear();

    ui.add_widget(40, 40, 20, 20, None, "", true);
    ui.clean();

    assert_eq!(ui.host().blts, vec![(32, 32)]);
}

#[test]
fn straddling_widget_dirties_nine_tiles() {
    let mut ui = new_context(vec![]);
    ui.clean();
    ui.host_mut().blts.clear();

    ui.add_widget(30, 30, 40, 40, None, "", true);
    ui.clean();

    assert_eq!(
        ui.host().blts,
        vec![
            (0, 0),
            (32, 0),
            (64, 0),
            (0, 32),
            (32, 32),
            (64, 32),
            (0, 64),
            (32, 64),
            (64, 64),
        ]
    );
}

#[test]
fn clean_converges() {
    let mut ui = new_context(vec![]);
    ui.add_widget(10, 10, 100, 100, None, "a", true);
    ui.add_widget(50, 50, 100, 100, None, "b", true);

    ui.clean();
    ui.host_mut().blts.clear();
    ui.clean();

    assert!(ui.host().blts.is_empty());
}

#[test]
fn unchanged_setters_leave_the_bitmap_clean() {
    let mut ui = new_context(vec![]);
    let handle = ui.add_widget(40, 40, 20, 20, None, "x", true);
    ui.clean();
    ui.host_mut().blts.clear();

    ui.set_widget_text(handle, "x");
    ui.set_widget_style(handle, None);
    let style = ui.default_style();
    ui.set_widget_style(handle, Some(&style));
    ui.set_widget_enabled(handle, true);
    ui.clean();

    assert!(ui.host().blts.is_empty());
}

#[test]
fn changed_text_dirties_the_widget() {
    let mut ui = new_context(vec![]);
    let handle = ui.add_widget(40, 40, 20, 20, None, "x", true);
    ui.clean();
    ui.host_mut().blts.clear();

    ui.set_widget_text(handle, "y");
    ui.clean();

    assert_eq!(ui.host().blts, vec![(32, 32)]);
    assert_eq!(ui.get_widget_text(handle), "y");
}

#[test]
fn moving_a_widget_dirties_old_and_new_area() {
    let mut ui = new_context(vec![]);
    let handle = ui.add_widget(0, 0, 20, 20, None, "", true);
    ui.clean();
    ui.host_mut().blts.clear();

    ui.set_widget_bounds(handle, &Rect::new(64, 64, 20, 20));
    ui.clean();

    assert_eq!(ui.host().blts, vec![(0, 0), (64, 64)]);
    assert_eq!(ui.get_widget_bounds(handle), Rect::new(64, 64, 20, 20));
}

#[test]
fn toggling_enabled_marks_dirty_once() {
    let mut ui = new_context(vec![]);
    let handle = ui.add_widget(40, 40, 20, 20, None, "", true);
    ui.clean();
    ui.host_mut().blts.clear();

    ui.set_widget_enabled(handle, false);
    assert!(!ui.get_widget_enabled(handle));
    ui.clean();

    assert_eq!(ui.host().blts, vec![(32, 32)]);
}

#[test]
fn hit_test_prefers_later_widgets() {
    let mut ui = new_context(vec![]);
    let below = ui.add_widget(10, 10, 100, 100, None, "", true);
    let above = ui.add_widget(50, 50, 100, 100, None, "", true);

    assert_eq!(ui.widget_at(60, 60), Some(above));
    assert_eq!(ui.widget_at(20, 20), Some(below));
    assert_eq!(ui.widget_at(500, 400), None);
}

#[test]
fn hit_test_is_half_open() {
    let mut ui = new_context(vec![]);
    let handle = ui.add_widget(10, 10, 20, 20, None, "", true);

    assert_eq!(ui.widget_at(10, 10), Some(handle));
    assert_eq!(ui.widget_at(29, 29), Some(handle));
    assert_eq!(ui.widget_at(30, 29), None);
    assert_eq!(ui.widget_at(29, 30), None);
}

#[test]
fn empty_widget_is_never_hit() {
    let mut ui = new_context(vec![]);
    let handle = ui.add_widget(10, 10, 0, 0, None, "", true);

    assert_eq!(ui.widget_at(10, 10), None);
    assert_eq!(ui.get_widget_bounds(handle).width(), 0);
}

#[test]
fn empty_widget_is_never_drawn() {
    let mut ui = new_context(vec![]);
    ui.clean();
    ui.host_mut().fills.clear();
    ui.host_mut().blts.clear();

    ui.add_widget(10, 10, 0, 10, None, "hidden", true);
    ui.clean();

    // empty rects mark nothing, so nothing is repainted
    assert!(ui.host().blts.is_empty());
}

#[test]
fn handles_stay_valid_as_the_pool_grows() {
    let mut ui = new_context(vec![]);
    let first = ui.add_widget(0, 0, 10, 10, None, "first", true);

    for i in 0..20 {
        ui.add_widget(i * 10, 100, 10, 10, None, "", true);
    }

    assert_eq!(first.raw(), 0);
    assert_eq!(ui.get_widget_text(first), "first");
    assert_eq!(ui.widget_count(), 21);
}

#[test]
fn delete_widgets_empties_pool_and_repaints() {
    let mut ui = new_context(vec![]);
    ui.add_widget(0, 0, 10, 10, None, "", true);
    ui.add_widget(20, 20, 10, 10, None, "", true);
    ui.clean();
    ui.host_mut().blts.clear();

    ui.delete_widgets();
    assert_eq!(ui.widget_count(), 0);

    ui.clean();
    assert_eq!(ui.host().blts.len(), 25 * 15);
}

#[test]
fn metadata_round_trips() {
    let mut ui = new_context(vec![]);
    let handle = ui.add_widget(0, 0, 10, 10, None, "", true);

    assert_eq!(ui.get_widget_metadata(handle), 0);
    ui.set_widget_metadata(handle, 0xDEAD);
    assert_eq!(ui.get_widget_metadata(handle), 0xDEAD);
}

#[test]
fn widget_background_fill_is_clipped_to_its_tile() {
    let mut ui = new_context(vec![]);
    ui.clean();
    ui.host_mut().fills.clear();
    ui.host_mut().blts.clear();

    // spans tiles (0,0) and (1,0); each tile only ever sees its own slice
    ui.add_widget(16, 0, 32, 16, None, "", true);
    ui.clean();

    let widget_fills: Vec<&(Rect, u32)> = ui.host().fills.iter().filter(|f| f.1 != 0x101010).collect();
    assert_eq!(widget_fills.len(), 2);
    // tile at (0,0): right half of the tile
    assert_eq!(widget_fills[0].0, Rect { x1: 16, y1: 0, x2: 32, y2: 16 });
    // tile at (32,0): left half, in tile-local coordinates
    assert_eq!(widget_fills[1].0, Rect { x1: 0, y1: 0, x2: 16, y2: 16 });
}

#[test]
#[should_panic(expected = "OutOfMemory")]
fn pool_exhaustion_panics_through_the_host() {
    let dirty = vec![0u32; dirty_buffer_len(DISP_W, DISP_H, 32, 32)];
    let mut ui = Context::new(
        dirty,
        1,
        Dimensioni::new(DISP_W, DISP_H),
        Dimensioni::new(32, 32),
        Color::new(0),
        common::test_style(),
        common::TestHost::new(vec![]),
    );

    ui.add_widget(0, 0, 10, 10, None, "", true);
    ui.add_widget(0, 0, 10, 10, None, "", true);
}

#[test]
#[should_panic(expected = "DirtyBufferTooSmall")]
fn short_dirty_buffer_panics_through_the_host() {
    let _ = Context::new(
        vec![0u32; 4],
        8,
        Dimensioni::new(DISP_W, DISP_H),
        Dimensioni::new(32, 32),
        Color::new(0),
        common::test_style(),
        common::TestHost::new(vec![]),
    );
}
