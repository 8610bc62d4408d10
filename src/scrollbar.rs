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
use crate::geometry::clampf;
use crate::window::Window;
use crate::{vec2, Context, Id, Rect, UiColor};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// Handle length for a track of `track_len` pixels showing `content_len` pixels of content.
pub(crate) fn handle_size(track_len: f32, content_len: f32) -> f32 {
    if content_len <= 0.0 {
        return track_len.max(5.0);
    }
    (track_len * (track_len / content_len)).floor().max(5.0)
}

/// Offset of the handle from the start of the track.
pub(crate) fn handle_offset(track_len: f32, handle_len: f32, scroll: f32, scroll_max: f32) -> f32 {
    if scroll_max <= 0.0 {
        return 0.0;
    }
    ((track_len - handle_len) * (scroll / scroll_max)).floor()
}

/// New scroll value after dragging the handle by `delta` pixels.
pub(crate) fn drag_scroll(scroll: f32, delta: f32, content_len: f32, view_len: f32, scroll_max: f32) -> f32 {
    let conversion = if view_len > 0.0 { (content_len / view_len).round() } else { 0.0 };
    clampf(scroll + delta * conversion, 0.0, scroll_max)
}

/// Track and handle rectangles of a window scrollbar, before clipping.
pub(crate) fn scrollbar_rects(window: &Window, axis: ScrollAxis, scrollbar_size: f32) -> (Rect, Rect) {
    let bar = scrollbar_size + 2.0;
    let (pos, size) = (window.pos, window.size);
    match axis {
        ScrollAxis::Vertical => {
            let top = window.title_bar_height;
            let bottom = if window.scrollbar_x { bar } else { 0.0 };
            let track_len = size.y - top - bottom;
            let handle = handle_size(track_len, window.content_size.y);
            let offset = handle_offset(track_len, handle, window.scroll.y, window.scroll_max.y);
            let x = pos.x + size.x - bar;
            (
                Rect::from_pos_size(vec2(x, pos.y + top), vec2(scrollbar_size, track_len)),
                Rect::from_pos_size(vec2(x, pos.y + top + offset), vec2(scrollbar_size, handle)),
            )
        }
        ScrollAxis::Horizontal => {
            let right = if window.scrollbar_y { bar } else { 0.0 };
            let track_len = size.x - right;
            let handle = handle_size(track_len, window.content_size.x);
            let offset = handle_offset(track_len, handle, window.scroll.x, window.scroll_max.x);
            let y = pos.y + size.y - bar;
            (
                Rect::from_pos_size(vec2(pos.x, y), vec2(track_len, scrollbar_size)),
                Rect::from_pos_size(vec2(pos.x + offset, y), vec2(handle, scrollbar_size)),
            )
        }
    }
}

impl Context {
    /// Draws a scrollbar of window `index` on its background layer and runs the handle's button behavior.
    pub(crate) fn render_scrollbar(&mut self, index: usize, id: Id, axis: ScrollAxis) {
        let window = &mut self.windows[index];
        match axis {
            ScrollAxis::Vertical => window.scroll.y = clampf(window.scroll.y, 0.0, window.scroll_max.y),
            ScrollAxis::Horizontal => window.scroll.x = clampf(window.scroll.x, 0.0, window.scroll_max.x),
        }
        let window = &self.windows[index];
        let (track, handle) = scrollbar_rects(window, axis, self.style.scrollbar_size);
        let parent_rect = self.windows[window.parent].outer_rect;
        if !parent_rect.overlaps(&track) {
            return;
        }

        let clip = window.outer_rect_clipped;
        let layer = window.bg_layer;
        let track = track.clip(&clip);
        let handle = handle.clip(&clip);
        let bg = self.colors[UiColor::ScrollbarBg];
        self.draw_list.add_rect_filled(layer, track.min, track.max, bg);

        self.button_behavior(&handle, id);
        let color = if self.active_id == id {
            UiColor::ScrollbarActive
        } else if self.hovered_id == id {
            UiColor::ScrollbarHovered
        } else {
            UiColor::ScrollbarHandle
        };
        let color = self.colors[color];
        self.draw_list.add_rect_filled(layer, handle.min, handle.max, color);
    }
}
