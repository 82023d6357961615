#![allow(dead_code)]

use std::collections::VecDeque;
use std::rc::Rc;

use tileui::{
    Color, ColorPair, Context, Dimensioni, Event, FontId, FontMetrics, GlyphMetrics, HAlign, Host, PanicCode, Rect, Style, Tick,
    VAlign, dirty_buffer_len,
};

pub const DISP_W: i32 = 800;
pub const DISP_H: i32 = 480;
pub const TILE_W: i32 = 32;
pub const TILE_H: i32 = 32;

pub const H_PAD: i32 = 2;
pub const V_PAD: i32 = 2;
pub const LINE_HEIGHT: i32 = 16;

/// Host double with a scripted event queue; `None` entries simulate event
/// waits that time out. Draw and blit calls are recorded for inspection.
/// When the script runs dry a `Quit` is produced so a test can never hang.
pub struct TestHost {
    pub events: VecDeque<Option<Event>>,
    pub fills: Vec<(Rect, u32)>,
    pub glyphs: Vec<(u32, Rect, Rect)>,
    pub blts: Vec<(i32, i32)>,
    pub ticks: Tick,
}

impl TestHost {
    pub fn new(events: Vec<Option<Event>>) -> Self {
        Self {
            events: events.into(),
            fills: Vec::new(),
            glyphs: Vec::new(),
            blts: Vec::new(),
            ticks: 0,
        }
    }
}

impl Host for TestHost {
    fn panic(&self, code: PanicCode) -> ! { panic!("host panic: {:?}", code) }

    fn monotonic_time(&mut self) -> Tick {
        self.ticks = self.ticks.wrapping_add(1);
        self.ticks
    }

    fn get_event(&mut self, _timeout: Tick) -> Option<Event> { self.events.pop_front().unwrap_or(Some(Event::Quit)) }

    fn font_metrics(&mut self, _font: FontId) -> FontMetrics {
        FontMetrics {
            ascent: 12,
            descent: 4,
            center: 6,
            line_height: LINE_HEIGHT,
        }
    }

    fn glyph_metrics(&mut self, _font: FontId, codepoint: u32) -> Option<GlyphMetrics> {
        (codepoint >= 0x20).then_some(GlyphMetrics {
            codepoint,
            width: 6,
            height: 10,
            x_bearing: 1,
            y_bearing: 9,
            x_advance: 8,
        })
    }

    fn draw_glyph(&mut self, dest: &Rect, src: &Rect, metrics: &GlyphMetrics, _colors: &ColorPair) {
        self.glyphs.push((metrics.codepoint, *dest, *src));
    }

    fn draw_fill(&mut self, dest: &Rect, color: Color) { self.fills.push((*dest, color.raw())); }

    fn blt_tile(&mut self, x: i32, y: i32) { self.blts.push((x, y)); }
}

pub fn test_style() -> Rc<Style> {
    Rc::new(Style {
        font: FontId::new(1),
        h_align: HAlign::Center,
        v_align: VAlign::Middle,
        h_padding: H_PAD,
        v_padding: V_PAD,
        colors: [
            ColorPair {
                foreground: Color::new(0x666666),
                background: Color::new(0x222222),
            },
            ColorPair {
                foreground: Color::new(0xFFFFFF),
                background: Color::new(0x444444),
            },
            ColorPair {
                foreground: Color::new(0x000000),
                background: Color::new(0xCCCCCC),
            },
        ],
    })
}

pub fn new_context(events: Vec<Option<Event>>) -> Context<TestHost> {
    let dirty = vec![0u32; dirty_buffer_len(DISP_W, DISP_H, TILE_W, TILE_H)];

    Context::new(
        dirty,
        64,
        Dimensioni::new(DISP_W, DISP_H),
        Dimensioni::new(TILE_W, TILE_H),
        Color::new(0x101010),
        test_style(),
        TestHost::new(events),
    )
}

/// Press followed by release at the same point.
pub fn tap(events: &mut Vec<Option<Event>>, x: i32, y: i32) {
    events.push(Some(Event::Press { x, y }));
    events.push(Some(Event::Release { x, y }));
}
