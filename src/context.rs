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

use log::{debug, trace};
use rs_math3d::Dimensioni;

use crate::dirty::DirtyMap;
use crate::draw::{DrawPass, DrawState};
use crate::rect::Rect;
use crate::widget::{Widget, WidgetCallback, WidgetHandle, WidgetState};
use crate::{Color, Event, Host, PanicCode, Style, Tick, dirty_buffer_len};

// how long a single event wait may block before the loop re-checks its flags
const EVENT_WAIT: Tick = 100;

/// Primary entry point tying together the widget pool, the dirty-tile
/// renderer, and the event loop over a [`Host`] capability implementation.
///
/// All storage is sized at construction; none of the engine's paths allocate
/// after that apart from widget text updates.
pub struct Context<H: Host> {
    host: H,
    dirty: DirtyMap,

    widgets: Vec<Widget<H>>,
    widget_capacity: usize,

    disp: Dimensioni,
    tile: Dimensioni,

    background: Color,
    default_style: Rc<Style>,

    draw_state: DrawState,

    quit_flag: bool,
    run_stack: Vec<bool>,
    run_result: i32,

    pressed: Option<WidgetHandle>,
}

impl<H: Host> Context<H> {
    /// Creates a context over a host implementation. `dirty_buffer` is the
    /// application-supplied bitmap storage, sized with [`dirty_buffer_len`];
    /// `widget_capacity` bounds the widget pool. Panics through the host with
    /// [`PanicCode::DirtyBufferTooSmall`] when the buffer cannot cover the
    /// display. The whole display starts out dirty.
    pub fn new(
        dirty_buffer: Vec<u32>,
        widget_capacity: usize,
        disp: Dimensioni,
        tile: Dimensioni,
        background: Color,
        default_style: Rc<Style>,
        host: H,
    ) -> Self {
        if dirty_buffer.len() < dirty_buffer_len(disp.width, disp.height, tile.width, tile.height) {
            host.panic(PanicCode::DirtyBufferTooSmall);
        }

        debug!(
            "context initialized: {}x{} display, {}x{} tiles, {} widget slots",
            disp.width, disp.height, tile.width, tile.height, widget_capacity
        );

        let mut ctx = Self {
            host,
            dirty: DirtyMap::new(dirty_buffer, disp, tile),
            widgets: Vec::with_capacity(widget_capacity),
            widget_capacity,
            disp,
            tile,
            background,
            default_style,
            draw_state: DrawState::new(disp),
            quit_flag: false,
            run_stack: Vec::new(),
            run_result: 0,
            pressed: None,
        };

        ctx.dirty.mark_all();
        ctx
    }

    /// Returns a shared reference to the host.
    pub fn host(&self) -> &H { &self.host }

    /// Returns a mutable reference to the host.
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    /// Returns the display dimensions in pixels.
    pub fn display_size(&self) -> Dimensioni { self.disp }

    /// Returns the tile dimensions in pixels.
    pub fn tile_size(&self) -> Dimensioni { self.tile }

    /// Returns the style widgets fall back to when none is given.
    pub fn default_style(&self) -> Rc<Style> { self.default_style.clone() }

    /// Returns the number of live widgets in the pool.
    pub fn widget_count(&self) -> usize { self.widgets.len() }

    fn widget(&self, handle: WidgetHandle) -> &Widget<H> {
        if cfg!(debug_assertions) && handle.0 >= self.widgets.len() {
            self.host.panic(PanicCode::InvalidWidgetHandle);
        }

        &self.widgets[handle.0]
    }

    fn widget_mut(&mut self, handle: WidgetHandle) -> &mut Widget<H> {
        if cfg!(debug_assertions) && handle.0 >= self.widgets.len() {
            self.host.panic(PanicCode::InvalidWidgetHandle);
        }

        &mut self.widgets[handle.0]
    }

    fn resolve_style(&self, style: Option<&Rc<Style>>) -> Rc<Style> {
        style.cloned().unwrap_or_else(|| self.default_style.clone())
    }


    /// Adds a widget to the pool and marks its area dirty. The style falls
    /// back to the context default; the widget starts with empty-callback and
    /// zero metadata. Panics through the host with [`PanicCode::OutOfMemory`]
    /// when the pool is full. Insertion order is z-order, bottom first.
    pub fn add_widget(&mut self, x: i32, y: i32, width: i32, height: i32, style: Option<&Rc<Style>>, text: &str, enabled: bool) -> WidgetHandle {
        if self.widgets.len() >= self.widget_capacity {
            self.host.panic(PanicCode::OutOfMemory);
        }

        let widget = Widget {
            style: self.resolve_style(style),
            text: String::from(text),
            state: if enabled { WidgetState::Enabled } else { WidgetState::Disabled },
            rect: Rect::new(x, y, width, height),
            callback: None,
            metadata: 0,
        };

        self.dirty.mark(&widget.rect);
        self.widgets.push(widget);

        WidgetHandle(self.widgets.len() - 1)
    }

    /// Destroys every widget. Handles become invalid, the pressed widget is
    /// forgotten, and the whole display is marked dirty.
    pub fn delete_widgets(&mut self) {
        debug!("widget pool reset ({} widgets dropped)", self.widgets.len());

        self.pressed = None;
        self.widgets.clear();
        self.dirty.mark_all();
    }

    /// Marks a widget's area dirty without changing it.
    pub fn force_widget_redraw(&mut self, handle: WidgetHandle) {
        let rect = self.widget(handle).rect;
        self.dirty.mark(&rect);
    }

    /// Installs the callback invoked when a press and release both land on
    /// the widget.
    pub fn set_widget_callback(&mut self, handle: WidgetHandle, callback: WidgetCallback<H>) {
        self.widget_mut(handle).callback = Some(callback);
    }

    /// Moves/resizes a widget, marking both the vacated and the newly covered
    /// area dirty.
    pub fn set_widget_bounds(&mut self, handle: WidgetHandle, bounds: &Rect) {
        let old = self.widget(handle).rect;
        self.dirty.mark(&old);
        self.widget_mut(handle).rect = *bounds;
        self.dirty.mark(bounds);
    }

    /// Returns a widget's bounding rectangle.
    pub fn get_widget_bounds(&self, handle: WidgetHandle) -> Rect { self.widget(handle).rect }

    /// Replaces a widget's style, falling back to the context default. Only
    /// marks dirty when the style identity actually changes.
    pub fn set_widget_style(&mut self, handle: WidgetHandle, style: Option<&Rc<Style>>) {
        let new_style = self.resolve_style(style);
        let widget = self.widget_mut(handle);

        if !Rc::ptr_eq(&widget.style, &new_style) {
            widget.style = new_style;
            let rect = widget.rect;
            self.dirty.mark(&rect);
        }
    }

    /// Returns the style a widget currently uses.
    pub fn get_widget_style(&self, handle: WidgetHandle) -> Rc<Style> { self.widget(handle).style.clone() }

    /// Replaces a widget's text. Compares bytewise first so reassigning an
    /// unchanged value leaves the dirty bitmap untouched.
    pub fn set_widget_text(&mut self, handle: WidgetHandle, text: &str) {
        let widget = self.widget_mut(handle);

        if widget.text != text {
            widget.text.clear();
            widget.text.push_str(text);
            let rect = widget.rect;
            self.dirty.mark(&rect);
        }
    }

    /// Returns a widget's text.
    pub fn get_widget_text(&self, handle: WidgetHandle) -> &str { &self.widget(handle).text }

    /// Switches a widget between the enabled and disabled states. A no-op
    /// when the state already matches, and a pressed widget is left alone;
    /// press tracking owns that transition.
    pub fn set_widget_enabled(&mut self, handle: WidgetHandle, enabled: bool) {
        let new_state = if enabled { WidgetState::Enabled } else { WidgetState::Disabled };
        let widget = self.widget_mut(handle);

        if widget.state != WidgetState::Pressed && widget.state != new_state {
            widget.state = new_state;
            let rect = widget.rect;
            self.dirty.mark(&rect);
        }
    }

    /// Returns `true` when the widget is in the enabled state.
    pub fn get_widget_enabled(&self, handle: WidgetHandle) -> bool { self.widget(handle).state == WidgetState::Enabled }

    /// Attaches an application-defined value to the widget.
    pub fn set_widget_metadata(&mut self, handle: WidgetHandle, metadata: usize) {
        self.widget_mut(handle).metadata = metadata;
    }

    /// Returns the application-defined value attached to the widget.
    pub fn get_widget_metadata(&self, handle: WidgetHandle) -> usize { self.widget(handle).metadata }

    /// Returns the topmost widget containing the point, scanning the pool
    /// from the most recently added widget down. Widgets with empty
    /// rectangles are never hit.
    pub fn widget_at(&self, x: i32, y: i32) -> Option<WidgetHandle> {
        for i in (0..self.widgets.len()).rev() {
            if self.widgets[i].rect.contains(x, y) {
                return Some(WidgetHandle(i));
            }
        }

        None
    }

    fn set_pressed(&mut self, handle: Option<WidgetHandle>) {
        if let Some(previous) = self.pressed {
            let widget = &mut self.widgets[previous.0];
            widget.state = WidgetState::Enabled;
            let rect = widget.rect;
            self.dirty.mark(&rect);
        }

        self.pressed = handle;

        if let Some(current) = self.pressed {
            let widget = &mut self.widgets[current.0];
            widget.state = WidgetState::Pressed;
            let rect = widget.rect;
            self.dirty.mark(&rect);
        }
    }


    /// Redraws and blits every dirty tile exactly once, leaving the bitmap
    /// all zero. Each bitmap word is cleared before its bits are consumed, so
    /// a tile re-dirtied while the pass runs is painted on the next pass
    /// rather than re-entered. The event loop calls this automatically; it is
    /// public for hosts that drive their own outer loop.
    pub fn clean(&mut self) {
        let tile_width = self.tile.width;
        let tile_height = self.tile.height;
        let pitch = self.dirty.pitch;

        let mut word_x = 0;
        let mut offset_y = 0;
        let mut row_end = pitch;
        let mut rect = Rect::new(0, 0, tile_width, tile_height);

        let mut i = 0;

        while i < self.dirty.words.len() {
            let mut word = self.dirty.words[i];
            self.dirty.words[i] = 0;

            while word != 0 {
                let clz = word.leading_zeros() as i32;
                let offset_x = word_x + clz * tile_width;

                word &= !(0x8000_0000u32 >> clz);

                trace!("redrawing tile at ({offset_x}, {offset_y})");

                let saved_draw_state = self.draw_state;

                // background fill goes straight to the back buffer
                self.host.draw_fill(&rect, self.background);

                rect.set_pos(offset_x, offset_y);

                let mut pass = DrawPass::new(&mut self.host, &mut self.draw_state);
                pass.set_translation(-offset_x, -offset_y);
                pass.set_clip(&rect);

                for widget in &self.widgets {
                    if rect.overlaps(&widget.rect) {
                        pass.widget(widget);
                    }
                }

                self.draw_state = saved_draw_state;
                rect.set_pos(0, 0);

                self.host.blt_tile(offset_x, offset_y);
            }

            i += 1;

            if i >= row_end {
                word_x = 0;
                offset_y += tile_height;
                row_end += pitch;
            } else {
                word_x += 32 * tile_width;
            }
        }
    }


    /// Runs the event loop until [`Context::stop`] or [`Context::quit`] ends
    /// it, returning the recorded result. Loops nest: a widget callback may
    /// call `start` again, and the inner loop runs to completion before the
    /// outer resumes. The display is brought up to date before the first
    /// event is awaited, and again after any event that changed widget state.
    pub fn start(&mut self) -> i32 {
        // only the outermost loop may reset the quit cascade
        if self.run_stack.is_empty() {
            self.quit_flag = false;
        }

        self.run_stack.push(true);
        let level = self.run_stack.len() - 1;

        let mut need_clean = true;

        loop {
            let mut triggered = None;

            if need_clean {
                need_clean = false;
                self.clean();
            }

            if let Some(event) = self.host.get_event(EVENT_WAIT) {
                match event {
                    Event::Quit => self.quit(0),

                    Event::Press { x, y } => {
                        trace!("press at ({x}, {y})");

                        if let Some(handle) = self.widget_at(x, y) {
                            if self.widgets[handle.0].state == WidgetState::Enabled {
                                self.set_pressed(Some(handle));
                                need_clean = true;
                            }
                        }
                    }

                    Event::Release { x, y } => {
                        trace!("release at ({x}, {y})");

                        // a release only triggers the widget the press landed on
                        if let Some(pressed) = self.pressed {
                            if self.widget_at(x, y) == Some(pressed) {
                                triggered = Some(pressed);
                            }
                        }

                        self.set_pressed(None);
                        need_clean = true;
                    }
                }
            }

            if let Some(handle) = triggered {
                let callback = self.widgets[handle.0].callback.clone();

                if let Some(callback) = callback {
                    callback(self, handle);
                }
            }

            if !self.run_stack[level] || self.quit_flag {
                break;
            }
        }

        self.run_stack.pop();
        self.run_result
    }

    /// Ends the innermost running event loop, recording its result. Does
    /// nothing when no loop is running.
    pub fn stop(&mut self, result: i32) {
        if let Some(run) = self.run_stack.last_mut() {
            self.run_result = result;
            *run = false;
        }
    }

    /// Ends every running event loop: stops the innermost with `result` and
    /// raises the quit flag, which each outer loop observes at its next
    /// iteration check.
    pub fn quit(&mut self, result: i32) {
        self.stop(result);
        self.quit_flag = true;
    }
}
