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
//! Widgets built on the item contract: size from [`Context::calculate_item_size`],
//! interaction from [`Context::button_behavior`], then [`Context::advance_cursor`].
//! Persistent state lives in window storage or, for the one text field being edited, in the context.
mod basic;
mod input;
mod slider;
mod tabs;
mod text;
mod tree;

pub(crate) use input::TextEditState;
pub(crate) use tabs::TabBar;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of running the press/hover state machine for one item.
pub struct ButtonState {
    /// The mouse was released over the item after pressing it.
    pub pressed: bool,
    /// The item is under the mouse and allowed to take it.
    pub hovered: bool,
    /// The item is hovered while the left button is down.
    pub held: bool,
}

impl Context {
    /// Runs the press/hover state machine for an item covering `rect`.
    pub fn button_behavior(&mut self, rect: &Rect, id: Id) -> ButtonState {
        let hoverable = self.is_item_hoverable(rect, id);
        self.item_behavior(id, hoverable)
    }

    /// State machine shared by rectangular and circular items.
    ///
    /// Hover and activation are written to the `next_*` slots and only become visible
    /// to other items when the frame ends.
    pub(crate) fn item_behavior(&mut self, id: Id, hoverable: bool) -> ButtonState {
        let mut state = ButtonState::default();
        state.hovered = hoverable && (self.active_id == id || self.active_id.is_none());
        if state.hovered {
            self.next_hovered_id = id;
        }

        state.held = state.hovered && self.io.is_mouse_down(MouseButton::Left);
        if self.active_id == id && state.held {
            self.next_active_id = id;
        }

        if state.hovered {
            if self.io.is_mouse_clicked(MouseButton::Left, false) {
                self.next_active_id = id;
            } else if self.io.is_mouse_released(MouseButton::Left) {
                self.next_active_id = Id::NONE;
                state.pressed = self.active_id == id;
            }
        }

        self.prev_item.hovered = state.hovered;
        self.prev_item.active = self.active_id == id;
        state
    }

    /// Returns `true` if an item at `pos` of `size` intersects the current window's visible area.
    pub(crate) fn should_render(&self, pos: Vec2f, size: Vec2f) -> bool {
        let window = self.current_window();
        window.visible && Rect::from_pos_size(pos, size).overlaps(&window.inner_clip_rect)
    }

    /// Picks the idle, hovered or held variant of a colour triple.
    pub(crate) fn state_color(&self, state: ButtonState, idle: UiColor, hovered: UiColor, active: UiColor) -> Vec4f {
        if state.held {
            self.colors[active]
        } else if state.hovered {
            self.colors[hovered]
        } else {
            self.colors[idle]
        }
    }

    /// Size of `text` in the current font, stopping at a `##` suffix.
    pub(crate) fn text_size(&self, text: &str) -> Vec2f { calculate_text_size(self.font.as_ref(), find_rendered_text_end(text), 0.0) }

    pub(crate) fn draw_label(&mut self, pos: Vec2f, color: Vec4f, text: &str) {
        let layer = self.current_window().fg_layer;
        let clip = self.current_window().inner_clip_rect;
        self.draw_list.add_text_clipped(layer, self.font.as_ref(), pos, clip, color, text);
    }

    /// Frame of a labelled value widget. The label takes the left third of the item (more if it
    /// is wider); a hidden label (`"##id"`) leaves the whole item to the frame.
    pub(crate) fn value_frame(&self, pos: Vec2f, size: Vec2f, label: &str) -> Rect {
        let label_width = self.text_size(label).x;
        if label_width == 0.0 {
            return Rect::from_pos_size(pos, size);
        }
        let offset = (size.x / 3.0).max(label_width + self.style.inner_spacing.x).min(size.x);
        Rect::new(vec2(pos.x + offset, pos.y), vec2(pos.x + size.x, pos.y + size.y))
    }

    /// Draws the label of a [`Context::value_frame`] item, vertically centred.
    pub(crate) fn draw_item_label(&mut self, pos: Vec2f, size: Vec2f, label: &str) {
        let text_size = self.text_size(label);
        if text_size.x > 0.0 {
            self.draw_label(vec2(pos.x, pos.y + (size.y - text_size.y) / 2.0), self.colors[UiColor::Text], label);
        }
    }

    /// Returns `true` while item `id` follows the mouse: from the click that lands on it until release.
    pub(crate) fn is_item_grabbed(&self, id: Id, state: ButtonState) -> bool {
        let left = MouseButton::Left;
        (self.active_id == id && self.io.is_mouse_down(left)) || (state.hovered && self.io.is_mouse_clicked(left, false))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::*;

    pub fn headless() -> Context {
        let mut ctx = Context::new();
        ctx.io.set_viewport_size(vec2(1280.0, 1024.0));
        ctx.io.add_mouse_pos(-100.0, -100.0);
        ctx
    }

    /// Runs a frame with a single default window around `f`.
    pub fn in_window<R: Default, F: FnOnce(&mut Context) -> R>(ctx: &mut Context, f: F) -> R {
        let mut res = R::default();
        ctx.frame(|ctx| {
            ctx.begin_window("test", None, WindowFlags::NONE);
            res = f(ctx);
            ctx.end_window();
        });
        res
    }

    /// Hovers `pos`, then presses and releases the left button, running `f` in a window each frame.
    /// Returns what `f` produced on the release frame.
    pub fn click_at<R: Default, F: FnMut(&mut Context) -> R>(ctx: &mut Context, pos: Vec2f, mut f: F) -> R {
        ctx.io.add_mouse_pos(pos.x, pos.y);
        in_window(ctx, &mut f);
        in_window(ctx, &mut f);
        ctx.io.add_mouse_button(MouseButton::Left, true);
        in_window(ctx, &mut f);
        ctx.io.add_mouse_button(MouseButton::Left, false);
        in_window(ctx, &mut f)
    }
}
