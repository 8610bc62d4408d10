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
use crate::*;

impl Context {
    /// Framed push button sized by the current row. Returns `true` on the frame it is clicked.
    pub fn button(&mut self, label: &str) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        let rect = Rect::from_pos_size(pos, size);
        let state = self.button_behavior(&rect, id);

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let color = self.state_color(state, UiColor::Button, UiColor::ButtonHovered, UiColor::ButtonActive);
            self.draw_list.add_rect_filled(layer, rect.min, rect.max, color);
            let text_size = self.text_size(label);
            let text_pos = vec2(pos.x + (size.x - text_size.x) / 2.0, pos.y + (size.y - text_size.y) / 2.0);
            self.draw_label(text_pos, self.colors[UiColor::Text], label);
        }
        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// Clickable area of an explicit size that draws nothing.
    pub fn invisible_button(&mut self, label: &str, size: Vec2f) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let state = self.button_behavior(&Rect::from_pos_size(pos, size), id);
        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// Square toggle followed by its label. Returns `true` when `value` changed.
    pub fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let frame = self.style.frame_height();
        let text_size = self.text_size(label);
        let size = self.calculate_item_size(frame);
        let hit = Rect::from_pos_size(pos, vec2(frame + self.style.inner_spacing.x + text_size.x, size.y));
        let state = self.button_behavior(&hit, id);
        if state.pressed {
            *value = !*value;
        }

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let top = pos.y + (size.y - frame) / 2.0;
            let square = Rect::from_pos_size(vec2(pos.x, top), vec2(frame, frame));
            let color = self.state_color(state, UiColor::FrameBg, UiColor::FrameBgHovered, UiColor::FrameBgActive);
            self.draw_list.add_rect_filled(layer, square.min, square.max, color);
            if *value {
                let mark = square.expand(-self.style.frame_padding.x);
                self.draw_list.add_rect_filled(layer, mark.min, mark.max, self.colors[UiColor::CheckMark]);
            }
            let text_pos = vec2(square.max.x + self.style.inner_spacing.x, pos.y + (size.y - text_size.y) / 2.0);
            self.draw_label(text_pos, self.colors[UiColor::Text], label);
        }
        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// One option of a radio group: selecting it stores `button_value` into `value`.
    /// Returns `true` when clicked.
    pub fn radio_button(&mut self, label: &str, value: &mut i32, button_value: i32) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let frame = self.style.frame_height();
        let text_size = self.text_size(label);
        let size = self.calculate_item_size(frame);
        let hit = Rect::from_pos_size(pos, vec2(frame + self.style.inner_spacing.x + text_size.x, size.y));
        let state = self.button_behavior(&hit, id);
        if state.pressed {
            *value = button_value;
        }

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let radius = frame / 2.0;
            let center = vec2(pos.x + radius, pos.y + size.y / 2.0);
            let color = self.state_color(state, UiColor::FrameBg, UiColor::FrameBgHovered, UiColor::FrameBgActive);
            self.draw_list.add_circle_filled(layer, center, radius, color, 12);
            if *value == button_value {
                let dot = (radius - self.style.frame_padding.x).max(2.0);
                self.draw_list.add_circle_filled(layer, center, dot, self.colors[UiColor::CheckMark], 12);
            }
            let text_pos = vec2(pos.x + frame + self.style.inner_spacing.x, pos.y + (size.y - text_size.y) / 2.0);
            self.draw_label(text_pos, self.colors[UiColor::Text], label);
        }
        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// Row-wide label that toggles `value` when clicked and highlights while selected.
    pub fn selectable(&mut self, label: &str, value: &mut bool) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        let rect = Rect::from_pos_size(pos, size);
        let state = self.button_behavior(&rect, id);
        if state.pressed {
            *value = !*value;
        }

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            if *value || state.hovered {
                let color = self.state_color(state, UiColor::Header, UiColor::HeaderHovered, UiColor::HeaderActive);
                self.draw_list.add_rect_filled(layer, rect.min, rect.max, color);
            }
            let text_size = self.text_size(label);
            let text_pos = vec2(pos.x + self.style.frame_padding.x, pos.y + (size.y - text_size.y) / 2.0);
            self.draw_label(text_pos, self.colors[UiColor::Text], label);
        }
        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// Horizontal bar filled to `fraction` (clamped to `[0, 1]`), with `overlay` or a percentage centred on it.
    pub fn progress_bar(&mut self, fraction: f32, overlay: Option<&str>) {
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let fraction = fraction.max(0.0).min(1.0);
            self.draw_list.add_rect_filled(layer, pos, vec2(pos.x + size.x, pos.y + size.y), self.colors[UiColor::FrameBg]);
            self.draw_list.add_rect_filled(layer, pos, vec2(pos.x + size.x * fraction, pos.y + size.y), self.colors[UiColor::ProgressBar]);

            let percent;
            let text = match overlay {
                Some(text) => text,
                None => {
                    percent = format!("{:.0}%", fraction * 100.0);
                    percent.as_str()
                }
            };
            let text_size = self.text_size(text);
            let text_pos = vec2(pos.x + (size.x - text_size.x) / 2.0, pos.y + (size.y - text_size.y) / 2.0);
            self.draw_label(text_pos, self.colors[UiColor::Text], text);
        }
        self.advance_cursor(size.x, size.y);
    }

    /// One pixel line spanning the row.
    pub fn separator(&mut self) {
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(1.0);
        if self.should_render(pos, vec2(size.x, 1.0)) {
            let layer = self.current_window().fg_layer;
            self.draw_list.add_line(layer, pos, vec2(pos.x + size.x, pos.y), self.colors[UiColor::WindowBorder], 1.0);
        }
        self.advance_cursor(size.x, 1.0);
    }

    /// Draws the whole of `texture` at `size`.
    pub fn image(&mut self, texture: TextureId, size: Vec2f) {
        self.image_ex(texture, size, vec2(0.0, 0.0), vec2(1.0, 1.0), rgba(1.0, 1.0, 1.0, 1.0), rgba(0.0, 0.0, 0.0, 0.0));
    }

    /// Draws the `uv0..uv1` part of `texture` tinted by `tint`, outlined when `border` is not transparent.
    pub fn image_ex(&mut self, texture: TextureId, size: Vec2f, uv0: Vec2f, uv1: Vec2f, tint: Vec4f, border: Vec4f) {
        let pos = self.get_cursor_pos();
        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let max = vec2(pos.x + size.x, pos.y + size.y);
            self.draw_list.add_image(layer, texture, pos, max, uv0, uv1, tint);
            if border.w > 0.0 {
                self.draw_list.add_rect(layer, pos, max, border, 1.0);
            }
        }
        self.advance_cursor(size.x, size.y);
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::test_support::*;
    use crate::*;

    // first item of the default window starts at (205, 238) with the default [300] row
    const FIRST_ITEM: (f32, f32) = (210.0, 248.0);

    #[test]
    fn button_reports_press_once() {
        let mut ctx = headless();
        let mut presses = 0;
        click_at(&mut ctx, vec2(FIRST_ITEM.0, FIRST_ITEM.1), |ctx| {
            if ctx.button("Apply") {
                presses += 1;
            }
        });
        in_window(&mut ctx, |ctx| {
            if ctx.button("Apply") {
                presses += 1;
            }
        });
        assert_eq!(presses, 1);
    }

    #[test]
    fn checkbox_toggles_on_release() {
        let mut ctx = headless();
        let mut value = false;
        let changed = click_at(&mut ctx, vec2(FIRST_ITEM.0, FIRST_ITEM.1), |ctx| ctx.checkbox("enabled", &mut value));
        assert!(changed);
        assert!(value);
    }

    #[test]
    fn radio_button_selects_its_value() {
        let mut ctx = headless();
        let mut value = 0;
        let second_row = vec2(FIRST_ITEM.0, FIRST_ITEM.1 + ctx.style.frame_height() + ctx.style.item_spacing.y);
        click_at(&mut ctx, second_row, |ctx| {
            ctx.radio_button("zero", &mut value, 0);
            ctx.radio_button("one", &mut value, 1)
        });
        assert_eq!(value, 1);
    }

    #[test]
    fn items_advance_the_cursor_by_row() {
        let mut ctx = headless();
        let ys = in_window(&mut ctx, |ctx| {
            let mut ys = vec![ctx.get_cursor_pos().y];
            ctx.button("a");
            ys.push(ctx.get_cursor_pos().y);
            ctx.separator();
            ys.push(ctx.get_cursor_pos().y);
            ctx.progress_bar(0.5, None);
            ys.push(ctx.get_cursor_pos().y);
            ys
        });
        assert_eq!(ys, vec![238.0, 263.0, 268.0, 293.0]);
    }

    #[test]
    fn image_uses_its_texture() {
        let mut ctx = headless();
        let texture = TextureId::new(9);
        in_window(&mut ctx, |ctx| ctx.image(texture, vec2(32.0, 32.0)));
        assert!(ctx.draw_list().commands().iter().any(|c| c.texture_id == texture && c.element_count == 6));
    }

    #[test]
    fn hidden_label_suffix_keeps_ids_apart() {
        let mut ctx = headless();
        let (a, b) = in_window(&mut ctx, |ctx| (ctx.get_id("Ok##first"), ctx.get_id("Ok##second")));
        assert_ne!(a, b);
        assert_eq!(ctx.text_size("Ok##first").x, ctx.text_size("Ok").x);
    }
}
