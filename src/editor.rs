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
use std::cell::RefCell;
use std::rc::Rc;

use crate::rect::Rect;
use crate::text::truncate_last_char;
use crate::widget::WidgetHandle;
use crate::{Context, Host, Real, Style};

/// Styling for the on-screen editors. Unset styles fall back to the
/// context's default style; label texts are drawn on the corresponding keys.
#[derive(Clone, Default)]
pub struct EditorStyle {
    /// Style for the letter/symbol keys of the string editor.
    pub char_key_style: Option<Rc<Style>>,
    /// Style for numeric keys (the whole number keypad, and the string
    /// editor's top row).
    pub num_key_style: Option<Rc<Style>>,
    /// Style for editing keys (backspace, clear, shift).
    pub edit_key_style: Option<Rc<Style>>,
    /// Style for the accept key.
    pub accept_key_style: Option<Rc<Style>>,
    /// Style for the cancel key.
    pub cancel_key_style: Option<Rc<Style>>,
    /// Style for the read-only text field above the keypad.
    pub field_style: Option<Rc<Style>>,
    /// Label of the shift key.
    pub shift_text: String,
    /// Label of the backspace key.
    pub backspace_text: String,
    /// Label of the clear key.
    pub clear_text: String,
    /// Label of the accept key.
    pub accept_text: String,
    /// Label of the cancel key.
    pub cancel_text: String,
    /// Label of the space key.
    pub space_text: String,
    /// Gap between the field and the keypad, and between keys.
    pub spacing: i32,
}

// number buffer holds up to 15 characters, mirroring a 16-byte field
const NUMBER_BUFFER_SIZE: usize = 16;

#[derive(Copy, Clone, PartialEq, Eq)]
enum NumberType {
    UnsignedInt,
    SignedInt,
    Real,
}

// cell indices of the special keys in the 4x4 number keypad
const NUMBER_KEY_BACKSPACE: usize = 3;
const NUMBER_KEY_CLEAR: usize = 7;
const NUMBER_KEY_ACCEPT: usize = 11;
const NUMBER_KEY_DP: usize = 12;
const NUMBER_KEY_MINUS: usize = 14;
const NUMBER_KEY_CANCEL: usize = 15;

// metadata discriminants; character keys carry their ASCII byte, which never
// collides with these
const NUMBER_META_BACKSPACE: usize = 0;
const NUMBER_META_CLEAR: usize = 1;
const NUMBER_META_ACCEPT: usize = 2;
const NUMBER_META_CANCEL: usize = 3;

static NUMBER_KEYPAD_TEXT: [&str; 16] = [
    "7", "8", "9", "", //
    "4", "5", "6", "", //
    "1", "2", "3", "", //
    ".", "0", "-", "",
];

struct NumberEdit {
    kind: NumberType,
    buffer: String,
    field: WidgetHandle,
    keys: Vec<WidgetHandle>,
}

fn enforce_number_format<H: Host>(ui: &mut Context<H>, edit: &NumberEdit) {
    let buffer = edit.buffer.as_bytes();
    let dp_key = edit.keys[NUMBER_KEY_DP];
    let minus_key = edit.keys[NUMBER_KEY_MINUS];

    match buffer.len() {
        0 => {
            ui.set_widget_enabled(dp_key, false);
            ui.set_widget_enabled(minus_key, edit.kind != NumberType::UnsignedInt);
        }

        1 => {
            ui.set_widget_enabled(dp_key, edit.kind == NumberType::Real && buffer[0].is_ascii_digit());
            ui.set_widget_enabled(minus_key, false);
        }

        _ => {
            ui.set_widget_enabled(dp_key, edit.kind == NumberType::Real && !buffer.contains(&b'.'));
            ui.set_widget_enabled(minus_key, false);
        }
    }

    ui.set_widget_enabled(edit.keys[NUMBER_KEY_ACCEPT], buffer.last().is_some_and(|b| b.is_ascii_digit()));
    ui.set_widget_enabled(edit.keys[NUMBER_KEY_BACKSPACE], !buffer.is_empty());
    ui.set_widget_enabled(edit.keys[NUMBER_KEY_CLEAR], !buffer.is_empty());

    ui.set_widget_text(edit.field, &edit.buffer);
}

fn number_key<H: Host>(ui: &mut Context<H>, widget: WidgetHandle, state: &Rc<RefCell<NumberEdit>>) {
    let metadata = ui.get_widget_metadata(widget);

    match metadata {
        NUMBER_META_BACKSPACE => {
            let mut edit = state.borrow_mut();

            if edit.buffer.pop().is_some() {
                enforce_number_format(ui, &edit);
            }
        }

        NUMBER_META_CLEAR => {
            let mut edit = state.borrow_mut();
            edit.buffer.clear();
            enforce_number_format(ui, &edit);
        }

        NUMBER_META_ACCEPT => ui.stop(1),

        NUMBER_META_CANCEL => ui.stop(0),

        character => {
            let mut edit = state.borrow_mut();

            if edit.buffer.len() < NUMBER_BUFFER_SIZE - 1 {
                edit.buffer.push(character as u8 as char);
                enforce_number_format(ui, &edit);
            }
        }
    }
}

fn edit_number<H: Host>(ui: &mut Context<H>, mut buffer: String, kind: NumberType, editor_style: &EditorStyle) -> Option<String> {
    buffer.truncate(NUMBER_BUFFER_SIZE - 1);

    // the editor owns the whole display; the caller rebuilds its scene after
    ui.delete_widgets();

    let field_style = editor_style.field_style.clone().unwrap_or_else(|| ui.default_style());
    let font_metrics = ui.host_mut().font_metrics(field_style.font);
    let field_height = font_metrics.line_height + 2 * field_style.v_padding;
    let spacing = editor_style.spacing;
    let disp = ui.display_size();

    // drop a real number's trailing zeros, and the point itself when the
    // number turns out whole
    if kind == NumberType::Real {
        while buffer.ends_with('0') {
            buffer.pop();
        }

        if buffer.ends_with('.') {
            buffer.pop();
        }
    }

    let field = ui.add_widget(0, 0, disp.width, field_height, Some(&field_style), &buffer, false);

    let bounds = Rect {
        x1: 0,
        y1: field_height + spacing,
        x2: disp.width,
        y2: disp.height,
    };

    let num_key_style = editor_style.num_key_style.clone().unwrap_or_else(|| ui.default_style());
    let keys = ui.layout_grid(4, 4, &bounds, spacing, spacing, Some(&num_key_style), true);

    let state = Rc::new(RefCell::new(NumberEdit {
        kind,
        buffer,
        field,
        keys: keys.clone(),
    }));

    for (i, &key) in keys.iter().enumerate() {
        ui.set_widget_text(key, NUMBER_KEYPAD_TEXT[i]);
        ui.set_widget_metadata(key, NUMBER_KEYPAD_TEXT[i].as_bytes().first().copied().unwrap_or(0) as usize);

        let state = state.clone();
        ui.set_widget_callback(key, Rc::new(move |ui, widget| number_key(ui, widget, &state)));
    }

    ui.set_widget_style(keys[NUMBER_KEY_BACKSPACE], editor_style.edit_key_style.as_ref());
    ui.set_widget_text(keys[NUMBER_KEY_BACKSPACE], &editor_style.backspace_text);
    ui.set_widget_metadata(keys[NUMBER_KEY_BACKSPACE], NUMBER_META_BACKSPACE);

    ui.set_widget_style(keys[NUMBER_KEY_CLEAR], editor_style.edit_key_style.as_ref());
    ui.set_widget_text(keys[NUMBER_KEY_CLEAR], &editor_style.clear_text);
    ui.set_widget_metadata(keys[NUMBER_KEY_CLEAR], NUMBER_META_CLEAR);

    ui.set_widget_style(keys[NUMBER_KEY_ACCEPT], editor_style.accept_key_style.as_ref());
    ui.set_widget_text(keys[NUMBER_KEY_ACCEPT], &editor_style.accept_text);
    ui.set_widget_metadata(keys[NUMBER_KEY_ACCEPT], NUMBER_META_ACCEPT);

    ui.set_widget_style(keys[NUMBER_KEY_CANCEL], editor_style.cancel_key_style.as_ref());
    ui.set_widget_text(keys[NUMBER_KEY_CANCEL], &editor_style.cancel_text);
    ui.set_widget_metadata(keys[NUMBER_KEY_CANCEL], NUMBER_META_CANCEL);

    {
        let edit = state.borrow();
        enforce_number_format(ui, &edit);
    }

    let accepted = ui.start() != 0;

    accepted.then(|| state.borrow().buffer.clone())
}

// cell indices of the special keys in the 10x5 string keypad
const STRING_KEY_SHIFT: usize = 30;
const STRING_KEY_BACKSPACE: usize = 39;
const STRING_KEY_CANCEL: usize = 40;
const STRING_KEY_CLEAR: usize = 41;
const STRING_KEY_SPACE: usize = 42;
const STRING_KEY_UNUSED_BEGIN: usize = 43;
const STRING_KEY_UNUSED_END: usize = 48;
const STRING_KEY_ACCEPT: usize = 49;

const STRING_META_CHAR: usize = 0;
const STRING_META_SHIFT: usize = 1;
const STRING_META_BACKSPACE: usize = 2;
const STRING_META_CANCEL: usize = 3;
const STRING_META_CLEAR: usize = 4;
const STRING_META_ACCEPT: usize = 5;
const STRING_META_SPACE: usize = 6;

static STRING_KEYPAD_TEXT_UPPER: [&str; 50] = [
    "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", //
    "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", //
    "A", "S", "D", "F", "G", "H", "J", "K", "L", ".", //
    "", "Z", "X", "C", "V", "B", "N", "M", ",", "", //
    "", "", "", "", "", "", "", "", "", "",
];

static STRING_KEYPAD_TEXT_LOWER: [&str; 50] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", //
    "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", //
    "a", "s", "d", "f", "g", "h", "j", "k", "l", ".", //
    "", "z", "x", "c", "v", "b", "n", "m", ",", "", //
    "", "", "", "", "", "", "", "", "", "",
];

struct StringEdit {
    buffer: String,
    capacity: usize,
    field: WidgetHandle,
    keys: Vec<WidgetHandle>,
    allow_empty: bool,
    shifted: bool,
}

fn set_char_key_labels<H: Host>(ui: &mut Context<H>, edit: &StringEdit) {
    let labels = if edit.shifted { &STRING_KEYPAD_TEXT_UPPER } else { &STRING_KEYPAD_TEXT_LOWER };

    for (i, &key) in edit.keys.iter().enumerate() {
        if ui.get_widget_metadata(key) == STRING_META_CHAR {
            ui.set_widget_text(key, labels[i]);
        }
    }
}

fn enforce_string_format<H: Host>(ui: &mut Context<H>, edit: &StringEdit) {
    let length = edit.buffer.len();
    let space = edit.capacity.saturating_sub(length);

    // flip all character keys together when the buffer fills up or frees up;
    // the first key's state stands in for the lot
    let char_keys_enabled = ui.get_widget_enabled(edit.keys[0]);
    let change = if space == 0 && char_keys_enabled {
        Some(false)
    } else if space > 0 && !char_keys_enabled {
        Some(true)
    } else {
        None
    };

    if let Some(enabled) = change {
        for &key in &edit.keys {
            if ui.get_widget_metadata(key) == STRING_META_CHAR {
                ui.set_widget_enabled(key, enabled);
            }
        }

        ui.set_widget_enabled(edit.keys[STRING_KEY_SPACE], enabled);
    }

    ui.set_widget_enabled(edit.keys[STRING_KEY_BACKSPACE], length > 0);
    ui.set_widget_enabled(edit.keys[STRING_KEY_CLEAR], length > 0);
    ui.set_widget_enabled(edit.keys[STRING_KEY_ACCEPT], length > 0 || edit.allow_empty);

    ui.set_widget_text(edit.field, &edit.buffer);
}

fn string_append<H: Host>(ui: &mut Context<H>, edit: &mut StringEdit, text: &str) {
    let space = edit.capacity.saturating_sub(edit.buffer.len());

    if space >= text.len() {
        edit.buffer.push_str(text);
        enforce_string_format(ui, edit);
    }
}

fn string_key<H: Host>(ui: &mut Context<H>, widget: WidgetHandle, state: &Rc<RefCell<StringEdit>>) {
    match ui.get_widget_metadata(widget) {
        STRING_META_CHAR => {
            let text = ui.get_widget_text(widget).to_string();
            let mut edit = state.borrow_mut();
            string_append(ui, &mut edit, &text);
        }

        STRING_META_SHIFT => {
            let mut edit = state.borrow_mut();
            edit.shifted = !edit.shifted;
            set_char_key_labels(ui, &edit);
        }

        STRING_META_BACKSPACE => {
            let mut edit = state.borrow_mut();
            truncate_last_char(&mut edit.buffer);
            enforce_string_format(ui, &edit);
        }

        STRING_META_CANCEL => ui.stop(0),

        STRING_META_CLEAR => {
            let mut edit = state.borrow_mut();
            edit.buffer.clear();
            enforce_string_format(ui, &edit);
        }

        STRING_META_ACCEPT => ui.stop(1),

        STRING_META_SPACE => {
            let mut edit = state.borrow_mut();
            string_append(ui, &mut edit, " ");
        }

        _ => (),
    }
}

impl<H: Host> Context<H> {
    /// Runs the integer editor over the current display: a read-only field
    /// above a 4x4 keypad. Returns `true` and stores the edited value when
    /// the user accepts; the value is clamped to the `i32` range. The current
    /// widget scene is destroyed either way.
    pub fn edit_integer(&mut self, value: &mut i32, is_signed: bool, editor_style: &EditorStyle) -> bool {
        let kind = if is_signed { NumberType::SignedInt } else { NumberType::UnsignedInt };

        match edit_number(self, value.to_string(), kind, editor_style) {
            Some(text) => {
                *value = text.parse::<i64>().unwrap_or(0).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                true
            }

            None => false,
        }
    }

    /// Runs the real-number editor. The initial value is shown with trailing
    /// zeros (and a dangling decimal point) removed. Returns `true` and
    /// stores the edited value when the user accepts. The current widget
    /// scene is destroyed either way.
    pub fn edit_real(&mut self, value: &mut Real, editor_style: &EditorStyle) -> bool {
        match edit_number(self, format!("{:.6}", *value), NumberType::Real, editor_style) {
            Some(text) => {
                *value = text.parse().unwrap_or(0.0);
                true
            }

            None => false,
        }
    }

    /// Runs the string editor: a read-only field above a 10x5 keypad with
    /// shiftable character keys, space, backspace, clear, accept, and
    /// cancel. `capacity` bounds the string's byte length. Backspace removes
    /// one whole UTF-8 sequence so the buffer stays valid. Returns `true` and
    /// stores the edited text when the user accepts. The current widget scene
    /// is destroyed either way.
    pub fn edit_string(&mut self, value: &mut String, capacity: usize, allow_empty: bool, editor_style: &EditorStyle) -> bool {
        let mut buffer = value.clone();

        while buffer.len() > capacity {
            truncate_last_char(&mut buffer);
        }

        self.delete_widgets();

        let field_style = editor_style.field_style.clone().unwrap_or_else(|| self.default_style());
        let font_metrics = self.host_mut().font_metrics(field_style.font);
        let field_height = font_metrics.line_height + 2 * field_style.v_padding;
        let spacing = editor_style.spacing;
        let disp = self.display_size();

        let field = self.add_widget(0, 0, disp.width, field_height, Some(&field_style), &buffer, false);

        let bounds = Rect {
            x1: 0,
            y1: field_height + spacing,
            x2: disp.width,
            y2: disp.height,
        };

        let char_key_style = editor_style.char_key_style.clone().unwrap_or_else(|| self.default_style());
        let keys = self.layout_grid(10, 5, &bounds, spacing, spacing, Some(&char_key_style), true);

        let state = Rc::new(RefCell::new(StringEdit {
            buffer,
            capacity,
            field,
            keys: keys.clone(),
            allow_empty,
            shifted: false,
        }));

        for &key in &keys {
            self.set_widget_metadata(key, STRING_META_CHAR);

            let state = state.clone();
            self.set_widget_callback(key, Rc::new(move |ui, widget| string_key(ui, widget, &state)));
        }

        // the digit/symbol row reads better in the numeric key style
        for &key in &keys[..10] {
            self.set_widget_style(key, editor_style.num_key_style.as_ref());
        }

        {
            let edit = state.borrow();
            set_char_key_labels(self, &edit);
        }

        self.set_widget_style(keys[STRING_KEY_SHIFT], editor_style.edit_key_style.as_ref());
        self.set_widget_text(keys[STRING_KEY_SHIFT], &editor_style.shift_text);
        self.set_widget_metadata(keys[STRING_KEY_SHIFT], STRING_META_SHIFT);

        self.set_widget_style(keys[STRING_KEY_BACKSPACE], editor_style.edit_key_style.as_ref());
        self.set_widget_text(keys[STRING_KEY_BACKSPACE], &editor_style.backspace_text);
        self.set_widget_metadata(keys[STRING_KEY_BACKSPACE], STRING_META_BACKSPACE);

        self.set_widget_style(keys[STRING_KEY_CANCEL], editor_style.cancel_key_style.as_ref());
        self.set_widget_text(keys[STRING_KEY_CANCEL], &editor_style.cancel_text);
        self.set_widget_metadata(keys[STRING_KEY_CANCEL], STRING_META_CANCEL);

        self.set_widget_style(keys[STRING_KEY_CLEAR], editor_style.edit_key_style.as_ref());
        self.set_widget_text(keys[STRING_KEY_CLEAR], &editor_style.clear_text);
        self.set_widget_metadata(keys[STRING_KEY_CLEAR], STRING_META_CLEAR);

        self.set_widget_style(keys[STRING_KEY_ACCEPT], editor_style.accept_key_style.as_ref());
        self.set_widget_text(keys[STRING_KEY_ACCEPT], &editor_style.accept_text);
        self.set_widget_metadata(keys[STRING_KEY_ACCEPT], STRING_META_ACCEPT);

        self.set_widget_style(keys[STRING_KEY_SPACE], editor_style.char_key_style.as_ref());
        self.set_widget_text(keys[STRING_KEY_SPACE], &editor_style.space_text);
        self.set_widget_metadata(keys[STRING_KEY_SPACE], STRING_META_SPACE);

        // stretch the space key across the unused cells next to it
        let mut span = self.get_widget_bounds(keys[STRING_KEY_SPACE]);
        let last = self.get_widget_bounds(keys[STRING_KEY_UNUSED_END]);
        span.x2 = last.x2;
        span.y2 = last.y2;
        self.set_widget_bounds(keys[STRING_KEY_SPACE], &span);

        // retire the cells the space key swallowed
        for &key in &keys[STRING_KEY_UNUSED_BEGIN..=STRING_KEY_UNUSED_END] {
            self.set_widget_bounds(key, &Rect::empty());
        }

        {
            let edit = state.borrow();
            enforce_string_format(self, &edit);
        }

        let accepted = self.start() != 0;

        if accepted {
            value.clear();
            value.push_str(&state.borrow().buffer);
        }

        accepted
    }
}
