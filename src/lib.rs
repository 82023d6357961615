//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
#![deny(missing_docs)]
//! `tileui` is a lightweight, hardware-agnostic GUI engine for small embedded
//! touchscreen devices. It renders a flat scene of rectangular widgets onto a
//! display that is too small in RAM to hold a full framebuffer: the display is
//! partitioned into tiles, a dirty bitmap tracks which tiles need redrawing,
//! and each dirty tile is repainted into a single reusable tile-sized back
//! buffer before being blitted to the panel. All pixel output, input
//! acquisition, font metrics, and glyph rasterization are provided by a
//! host-supplied [`Host`] capability implementation; the engine owns no
//! hardware and performs no drawing of its own.

use std::rc::Rc;

mod context;
mod dirty;
mod draw;
mod editor;
mod layout;
mod rect;
mod text;
mod widget;

pub use context::Context;
pub use editor::EditorStyle;
pub use rect::Rect;
pub use rs_math3d::{Dimensioni, Vec2i};
pub use text::decode_utf8;
pub use widget::{WidgetCallback, WidgetHandle, WidgetState};

/// Monotonic time value reported by the host. Wrap-around is tolerated by all
/// callers, so sixteen bits are enough for event-wait timeouts.
pub type Tick = u16;

/// Floating-point type edited by [`Context::edit_real`].
pub type Real = f64;

/// Number of widget states a [`Style`] carries a color pair for.
pub const N_STATES: usize = 3;

/// Fatal error codes reported through [`Host::panic`]. These signal
/// programming errors; the engine never recovers from them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanicCode {
    /// Reserved.
    Undefined,
    /// The dirty buffer handed to [`Context::new`] is smaller than
    /// [`dirty_buffer_len`] requires.
    DirtyBufferTooSmall,
    /// The widget pool is full and [`Context::add_widget`] was called.
    OutOfMemory,
    /// A widget handle does not refer to a live widget (debug contract check).
    InvalidWidgetHandle,
}

/// Opaque 32-bit color value. The engine never inspects it; interpretation is
/// entirely up to the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    /// Wraps a raw host color value.
    pub const fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw value wrapped by this color.
    pub const fn raw(self) -> u32 { self.0 }
}

/// Foreground/background color pair used when drawing a widget in one state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorPair {
    /// Text/glyph color.
    pub foreground: Color,
    /// Fill color behind the text.
    pub background: Color,
}

/// Horizontal text anchoring inside a widget's inner rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HAlign {
    /// Anchor text to the left edge.
    #[default]
    Left,
    /// Center text horizontally.
    Center,
    /// Anchor text to the right edge.
    Right,
}

/// Vertical text anchoring inside a widget's inner rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VAlign {
    /// Anchor text to the top edge.
    #[default]
    Top,
    /// Center text vertically.
    Middle,
    /// Anchor text to the bottom edge.
    Bottom,
}

/// Opaque font handle passed through to the host's metric and glyph queries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(usize);

impl FontId {
    /// Creates a font handle from a host-chosen value.
    pub const fn new(raw: usize) -> Self { Self(raw) }

    /// Returns the raw value wrapped by this handle.
    pub const fn raw(self) -> usize { self.0 }
}

/// Vertical metrics of a font, filled in by [`Host::font_metrics`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of the lowest glyph.
    pub descent: i32,
    /// Baseline offset that vertically centers a line of text.
    pub center: i32,
    /// Recommended distance between consecutive baselines.
    pub line_height: i32,
}

/// Metrics of a single glyph, filled in by [`Host::glyph_metrics`] and handed
/// back to the host in [`Host::draw_glyph`]. The host resolves the glyph's
/// pixel data from the codepoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Unicode codepoint this glyph renders.
    pub codepoint: u32,
    /// Width of the glyph bitmap in pixels.
    pub width: i32,
    /// Height of the glyph bitmap in pixels.
    pub height: i32,
    /// Horizontal offset from the pen position to the bitmap's left edge.
    pub x_bearing: i32,
    /// Vertical offset from the baseline up to the bitmap's top edge.
    pub y_bearing: i32,
    /// Horizontal pen advance to the next glyph.
    pub x_advance: i32,
}

/// Touch/system event produced by [`Host::get_event`]. A timeout is reported
/// as `None` by the host rather than as an event variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The platform requested shutdown; stops every nested event loop.
    Quit,
    /// The panel was touched at the given display coordinate.
    Press {
        /// Touch x coordinate in display pixels.
        x: i32,
        /// Touch y coordinate in display pixels.
        y: i32,
    },
    /// The touch at the given display coordinate was released.
    Release {
        /// Release x coordinate in display pixels.
        x: i32,
        /// Release y coordinate in display pixels.
        y: i32,
    },
}

/// Visual appearance shared by any number of widgets. Styles are immutable
/// and application-owned; widgets reference them through [`Rc`], and the
/// setter no-op check compares identity, not contents.
#[derive(Clone, Debug, Default)]
pub struct Style {
    /// Font used for the widget's text.
    pub font: FontId,
    /// Horizontal text anchoring.
    pub h_align: HAlign,
    /// Vertical text anchoring.
    pub v_align: VAlign,
    /// Padding applied to the left and right of the widget's inner rectangle.
    pub h_padding: i32,
    /// Padding applied to the top and bottom of the widget's inner rectangle.
    pub v_padding: i32,
    /// Color pairs indexed by [`WidgetState`].
    pub colors: [ColorPair; N_STATES],
}

/// Capability interface the application supplies at context construction.
/// One implementor exists per platform; every drawing primitive, the event
/// source, and all font knowledge live behind it.
pub trait Host {
    /// Reports a fatal programming error. Must not return.
    fn panic(&self, code: PanicCode) -> !;

    /// Returns the current monotonic tick value. Callers tolerate wrap-around.
    fn monotonic_time(&mut self) -> Tick;

    /// Blocks for up to `timeout` ticks waiting for an event. Returns `None`
    /// on timeout.
    fn get_event(&mut self, timeout: Tick) -> Option<Event>;

    /// Returns the vertical metrics of a font.
    fn font_metrics(&mut self, font: FontId) -> FontMetrics;

    /// Returns the metrics of a glyph, or `None` if the font does not define
    /// the codepoint.
    fn glyph_metrics(&mut self, font: FontId, codepoint: u32) -> Option<GlyphMetrics>;

    /// Rasterizes the `src` region of a glyph into the tile back buffer at
    /// `dest`, blending between the pair's background and foreground colors.
    fn draw_glyph(&mut self, dest: &Rect, src: &Rect, metrics: &GlyphMetrics, colors: &ColorPair);

    /// Fills a rectangle of the tile back buffer with a solid color.
    fn draw_fill(&mut self, dest: &Rect, color: Color);

    /// Copies the tile back buffer onto the display with its top-left corner
    /// at `(x, y)`.
    fn blt_tile(&mut self, x: i32, y: i32);
}

pub(crate) fn tile_count(disp: i32, tile: i32) -> i32 { (disp + tile - 1) / tile }

pub(crate) fn tile_pitch(n_tile_cols: i32) -> usize { ((n_tile_cols + 31) / 32) as usize }

/// Returns the number of `u32` words a dirty buffer needs for the given
/// display and tile dimensions: one bit per tile, each row of tiles padded to
/// a whole number of words.
pub fn dirty_buffer_len(disp_width: i32, disp_height: i32, tile_width: i32, tile_height: i32) -> usize {
    tile_pitch(tile_count(disp_width, tile_width)) * tile_count(disp_height, tile_height) as usize
}

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for a shared [`Style`].
pub fn style(style: Style) -> Rc<Style> { Rc::new(style) }
