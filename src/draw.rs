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
use rs_math3d::{Dimensioni, Vec2i};

use crate::rect::Rect;
use crate::text::{decode_utf8, string_advance};
use crate::widget::Widget;
use crate::{Color, ColorPair, FontId, GlyphMetrics, HAlign, Host, VAlign, vec2};

/// Translation and clip applied to every drawing primitive. During a clean
/// pass the translation maps the current tile's display origin to the back
/// buffer's origin, and the clip is the tile rectangle in back-buffer
/// coordinates.
#[derive(Copy, Clone)]
pub(crate) struct DrawState {
    pub(crate) translate: Vec2i,
    pub(crate) clip: Rect,
}

impl DrawState {
    pub(crate) fn new(disp: Dimensioni) -> Self {
        Self {
            translate: vec2(0, 0),
            clip: Rect::new(0, 0, disp.width, disp.height),
        }
    }
}

/// Borrow-split view over the host and the draw state so the widget pool can
/// be traversed immutably while primitives mutate both.
pub(crate) struct DrawPass<'a, H: Host> {
    host: &'a mut H,
    state: &'a mut DrawState,
}

impl<'a, H: Host> DrawPass<'a, H> {
    pub(crate) fn new(host: &'a mut H, state: &'a mut DrawState) -> Self { Self { host, state } }

    pub(crate) fn set_translation(&mut self, x: i32, y: i32) { self.state.translate = vec2(x, y); }

    /// Narrows the clip to `rect`, which is translated into the current
    /// coordinate space first. The clip never widens.
    pub(crate) fn set_clip(&mut self, rect: &Rect) {
        let mut copy = *rect;
        copy.translate(self.state.translate.x, self.state.translate.y);
        self.state.clip.intersect(&copy);
    }

    /// Fills `rect` after translation and clipping.
    pub(crate) fn fill(&mut self, rect: &Rect, color: Color) {
        let mut copy = *rect;
        copy.translate(self.state.translate.x, self.state.translate.y);
        copy.intersect(&self.state.clip);

        if !copy.is_empty() {
            self.host.draw_fill(&copy, color);
        }
    }

    /// Draws one glyph with its pen position at `(x, y)` on the baseline. The
    /// destination rectangle is clipped and the matching source region is
    /// derived in glyph-local coordinates so partially visible glyphs render
    /// only their visible slice.
    pub(crate) fn glyph(&mut self, x: i32, y: i32, metrics: &GlyphMetrics, colors: &ColorPair) {
        let x = x + self.state.translate.x + metrics.x_bearing;
        let y = y + self.state.translate.y - metrics.y_bearing;

        let mut dest = Rect::new(x, y, metrics.width, metrics.height);
        dest.intersect(&self.state.clip);

        if !dest.is_empty() {
            let src = Rect::new(dest.x1 - x, dest.y1 - y, dest.width(), dest.height());

            if !src.is_empty() {
                self.host.draw_glyph(&dest, &src, metrics, colors);
            }
        }
    }

    /// Draws a run of text anchored at `(x, y)` according to the alignment
    /// pair. Glyphs the font does not define are skipped without advancing.
    pub(crate) fn text(&mut self, x: i32, y: i32, h_align: HAlign, v_align: VAlign, text: &str, font: FontId, colors: &ColorPair) {
        let font_metrics = self.host.font_metrics(font);
        let bytes = text.as_bytes();
        let width = string_advance(self.host, bytes, font);

        let mut x = match h_align {
            HAlign::Left => x,
            HAlign::Center => x - width / 2,
            HAlign::Right => x - width,
        };

        let y = match v_align {
            VAlign::Top => y + font_metrics.ascent,
            VAlign::Middle => y + font_metrics.center,
            VAlign::Bottom => y - font_metrics.descent,
        };

        let mut i = 0;

        while i < bytes.len() {
            let (codepoint, advance) = decode_utf8(&bytes[i..]);
            i += advance;

            if let Some(glyph_metrics) = self.host.glyph_metrics(font, codepoint) {
                self.glyph(x, y, &glyph_metrics, colors);
                x += glyph_metrics.x_advance;
            }
        }
    }

    /// Draws a widget: state-selected background fill, then its text clipped
    /// to the padded inner rectangle. The draw state is snapshotted on entry
    /// and restored on exit so the narrowed clip cannot leak.
    pub(crate) fn widget(&mut self, widget: &Widget<H>) {
        if widget.rect.is_empty() {
            return;
        }

        let saved = *self.state;
        let style = &widget.style;
        let colors = style.colors[widget.state as usize];

        self.fill(&widget.rect, colors.background);

        let mut inner = widget.rect;
        inner.x1 += style.h_padding;
        inner.y1 += style.v_padding;
        inner.x2 -= style.h_padding;
        inner.y2 -= style.v_padding;

        if !inner.is_empty() {
            self.set_clip(&inner);

            if !widget.text.is_empty() {
                let text_x = match style.h_align {
                    HAlign::Left => inner.x1,
                    HAlign::Center => (inner.x1 + inner.x2) / 2,
                    HAlign::Right => inner.x2 - 1,
                };

                let text_y = match style.v_align {
                    VAlign::Top => inner.y1,
                    VAlign::Middle => (inner.y1 + inner.y2) / 2,
                    VAlign::Bottom => inner.y2 - 1,
                };

                self.text(text_x, text_y, style.h_align, style.v_align, &widget.text, style.font, &colors);
            }
        }

        *self.state = saved;
    }
}
