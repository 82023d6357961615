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
use crate::{Context, Host, Style};

/// Interaction state of a widget, and the index into a style's color pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    /// The widget ignores touches.
    Disabled = 0,
    /// The widget accepts touches.
    #[default]
    Enabled = 1,
    /// The widget received a press and is awaiting the matching release.
    Pressed = 2,
}

/// Stable index identifying a widget within one pool lifetime. Handles stay
/// valid until the next [`Context::delete_widgets`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetHandle(pub(crate) usize);

impl WidgetHandle {
    /// Returns the pool index wrapped by this handle.
    pub const fn raw(self) -> usize { self.0 }
}

/// Callback invoked when a press and its release both land on a widget. State
/// the C-style user pointer would carry is captured by the closure instead.
pub type WidgetCallback<H> = Rc<dyn Fn(&mut Context<H>, WidgetHandle)>;

pub(crate) struct Widget<H: Host> {
    pub(crate) style: Rc<Style>,
    pub(crate) text: String,
    pub(crate) state: WidgetState,
    pub(crate) rect: Rect,
    pub(crate) callback: Option<WidgetCallback<H>>,
    pub(crate) metadata: usize,
}
