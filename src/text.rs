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
use crate::{FontId, Host};

// based on the public domain branchless UTF-8 decoder:
// https://github.com/skeeto/branchless-utf8/blob/master/utf8.h

static LENGTH_LUT: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, //
    1, 1, 1, 1, 1, 1, 1, 1, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    2, 2, 2, 2, 3, 3, 4, 0,
];

static MASK_LUT: [u8; 5] = [0x00, 0x7F, 0x1F, 0x0F, 0x07];

static SHIFT_LUT: [u32; 5] = [0, 18, 12, 6, 0];

/// Decodes one codepoint from the front of `input` and returns it together
/// with the number of bytes consumed. The sequence length comes from a lookup
/// on the top five bits of the lead byte; all four payload bytes are masked
/// and merged unconditionally, with reads past the end of `input` substituted
/// by zero. An illegal lead byte consumes one byte and yields an unspecified
/// codepoint, so a loop bounded by the buffer length always terminates.
pub fn decode_utf8(input: &[u8]) -> (u32, usize) {
    if input.is_empty() {
        return (0, 0);
    }

    let at = |i: usize| input.get(i).copied().unwrap_or(0);

    let lead = input[0];
    let len = LENGTH_LUT[(lead >> 3) as usize];
    let advance = (len + (len == 0) as u8) as usize;

    let mut codepoint = ((lead & MASK_LUT[len as usize]) as u32) << 18;
    codepoint |= ((at(1) & 0x3F) as u32) << 12;
    codepoint |= ((at(2) & 0x3F) as u32) << 6;
    codepoint |= (at(3) & 0x3F) as u32;
    codepoint >>= SHIFT_LUT[len as usize];

    (codepoint, advance)
}

/// Sums the horizontal pen advance of `text` in the given font. Glyphs the
/// font does not define contribute nothing.
pub(crate) fn string_advance<H: Host>(host: &mut H, text: &[u8], font: FontId) -> i32 {
    let mut cursor_x = 0;
    let mut i = 0;

    while i < text.len() {
        let (codepoint, advance) = decode_utf8(&text[i..]);
        i += advance;

        if let Some(metrics) = host.glyph_metrics(font, codepoint) {
            cursor_x += metrics.x_advance;
        }
    }

    cursor_x
}

/// Removes the last UTF-8 sequence from `buffer`: continuation bytes (top two
/// bits `10`) are dropped until a lead byte is reached, then the lead byte is
/// dropped too. The remainder is always valid UTF-8.
pub(crate) fn truncate_last_char(buffer: &mut String) {
    let bytes = buffer.as_bytes();
    let mut end = bytes.len();

    while end > 0 {
        end -= 1;

        if bytes[end] & 0xC0 != 0x80 {
            break;
        }
    }

    buffer.truncate(end);
}
