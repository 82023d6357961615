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
use std::rc::Rc;

use crate::rect::Rect;
use crate::widget::WidgetHandle;
use crate::{Context, Host, Style};

impl<H: Host> Context<H> {
    /// Fills `bounds` with an `n_cols` x `n_rows` grid of equally sized
    /// widgets separated by the given spacing (negative spacing is clamped to
    /// zero), walking row-major. Returns the handles in creation order.
    /// Degenerate arguments produce no widgets.
    pub fn layout_grid(
        &mut self,
        n_cols: i32,
        n_rows: i32,
        bounds: &Rect,
        h_spacing: i32,
        v_spacing: i32,
        style: Option<&Rc<Style>>,
        enabled: bool,
    ) -> Vec<WidgetHandle> {
        if n_cols <= 0 || n_rows <= 0 || bounds.is_empty() {
            return Vec::new();
        }

        let h_spacing = h_spacing.max(0);
        let v_spacing = v_spacing.max(0);

        let width = (bounds.width() - h_spacing * (n_cols - 1)) / n_cols;
        let height = (bounds.height() - v_spacing * (n_rows - 1)) / n_rows;

        let mut handles = Vec::with_capacity((n_cols * n_rows) as usize);
        let mut y = bounds.y1;

        for _ in 0..n_rows {
            let mut x = bounds.x1;

            for _ in 0..n_cols {
                handles.push(self.add_widget(x, y, width, height, style, "", enabled));
                x += width + h_spacing;
            }

            y += height + v_spacing;
        }

        handles
    }
}
