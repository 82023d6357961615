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
use rs_math3d::Dimensioni;

use crate::rect::Rect;
use crate::{tile_count, tile_pitch};

/// One bit per display tile, row-major, each row padded to whole `u32` words.
/// The most-significant bit of a word is the smallest column covered by that
/// word, which lets the clean pass consume bits with `leading_zeros`.
pub(crate) struct DirtyMap {
    pub(crate) words: Vec<u32>,
    pub(crate) pitch: usize,
    disp: Dimensioni,
    tile: Dimensioni,
}

impl DirtyMap {
    pub(crate) fn new(words: Vec<u32>, disp: Dimensioni, tile: Dimensioni) -> Self {
        Self {
            words,
            pitch: tile_pitch(tile_count(disp.width, tile.width)),
            disp,
            tile,
        }
    }

    /// Marks every tile overlapping `rect` as dirty. The rectangle is clamped
    /// to the display first; marking is idempotent.
    pub(crate) fn mark(&mut self, rect: &Rect) {
        let mut clip = Rect {
            x1: rect.x1.max(0),
            y1: rect.y1.max(0),
            x2: rect.x2.min(self.disp.width),
            y2: rect.y2.min(self.disp.height),
        };

        // to tile coordinates, rounding the far edges up
        clip.x1 /= self.tile.width;
        clip.y1 /= self.tile.height;
        clip.x2 = (clip.x2 + self.tile.width - 1) / self.tile.width;
        clip.y2 = (clip.y2 + self.tile.height - 1) / self.tile.height;

        if clip.is_empty() {
            return;
        }

        clip.x2 -= 1;
        clip.y2 -= 1;

        let left_word = u32::MAX >> (clip.x1 & 31);
        let right_word = u32::MAX << (31 - (clip.x2 & 31));

        let mut left = clip.y1 as usize * self.pitch + clip.x1 as usize / 32;
        let mut right = clip.y1 as usize * self.pitch + clip.x2 as usize / 32;

        if left == right {
            let word = left_word & right_word;

            for _ in clip.y1..=clip.y2 {
                self.words[left] |= word;
                left += self.pitch;
            }
        } else {
            for _ in clip.y1..=clip.y2 {
                self.words[left] |= left_word;

                for mid in left + 1..right {
                    self.words[mid] = u32::MAX;
                }

                self.words[right] |= right_word;

                left += self.pitch;
                right += self.pitch;
            }
        }
    }

    /// Marks the whole display as dirty.
    pub(crate) fn mark_all(&mut self) {
        let rect = Rect::new(0, 0, self.disp.width, self.disp.height);
        self.mark(&rect);
    }
}
