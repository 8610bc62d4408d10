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
use crate::*;

/// Position of `value` inside `[min, max]`, in `0..=1`.
fn range_fraction(value: f32, min: f32, max: f32) -> f32 {
    if max == min {
        return 0.0;
    }
    clampf((value - min) / (max - min), 0.0, 1.0)
}

/// Value under `mouse_x` for a slider whose grab of width `grab` slides over `frame`.
fn slider_value_at(frame: &Rect, grab: f32, mouse_x: f32, min: f32, max: f32) -> f32 {
    let travel = frame.width() - grab;
    let t = if travel > 0.0 { clampf((mouse_x - frame.min.x - grab / 2.0) / travel, 0.0, 1.0) } else { 0.0 };
    min + t * (max - min)
}

fn store<T: PartialEq>(value: &mut T, new_value: T) -> bool {
    let changed = *value != new_value;
    *value = new_value;
    changed
}

impl Context {
    /// Horizontal slider over `[min, max]`. Returns `true` when `value` changed.
    pub fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool {
        self.slider_float_f(label, value, min, max, &|v| format!("{v:.3}"))
    }

    /// [`Context::slider_float`] with the value text produced by `format`.
    pub fn slider_float_f(&mut self, label: &str, value: &mut f32, min: f32, max: f32, format: &dyn Fn(f32) -> String) -> bool {
        let new_value = self.slider_scalar(label, *value, min, max, false, format);
        store(value, new_value)
    }

    /// Integer slider over `[min, max]`; the grab snaps to whole values.
    pub fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32) -> bool {
        self.slider_int_f(label, value, min, max, &|v| v.to_string())
    }

    /// [`Context::slider_int`] with the value text produced by `format`.
    pub fn slider_int_f(&mut self, label: &str, value: &mut i32, min: i32, max: i32, format: &dyn Fn(i32) -> String) -> bool {
        let new_value = self.slider_scalar(label, *value as f32, min as f32, max as f32, true, &|v| format(v as i32));
        store(value, new_value as i32)
    }

    /// Value frame that follows horizontal mouse movement while held: each pixel adds `speed`.
    /// The result is clamped to `[min, max]` only when `min < max`.
    pub fn drag_float(&mut self, label: &str, value: &mut f32, speed: f32, min: f32, max: f32) -> bool {
        self.drag_float_f(label, value, speed, min, max, &|v| format!("{v:.3}"))
    }

    /// [`Context::drag_float`] with the value text produced by `format`.
    pub fn drag_float_f(&mut self, label: &str, value: &mut f32, speed: f32, min: f32, max: f32, format: &dyn Fn(f32) -> String) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        let frame = self.value_frame(pos, size, label);
        let state = self.button_behavior(&frame, id);

        let mut new_value = *value;
        if self.active_id == id && self.io.is_mouse_down(MouseButton::Left) {
            new_value += self.io.mouse_delta().x * speed;
            if min < max {
                new_value = clampf(new_value, min, max);
            }
            self.io.set_mouse_cursor(MouseCursor::ResizeEW);
        }

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let color = self.state_color(state, UiColor::FrameBg, UiColor::FrameBgHovered, UiColor::FrameBgActive);
            self.draw_list.add_rect_filled(layer, frame.min, frame.max, color);
            self.draw_value_text(&frame, &format(new_value));
            self.draw_item_label(pos, size, label);
        }
        self.advance_cursor(size.x, size.y);
        store(value, new_value)
    }

    fn slider_scalar(&mut self, label: &str, value: f32, min: f32, max: f32, round: bool, format: &dyn Fn(f32) -> String) -> f32 {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        let frame = self.value_frame(pos, size, label);
        let state = self.button_behavior(&frame, id);

        let grab = self.style.slider_size.min(frame.width());
        let mut new_value = clampf(value, min.min(max), min.max(max));
        if self.is_item_grabbed(id, state) {
            new_value = slider_value_at(&frame, grab, self.io.mouse_pos().x, min, max);
            if round {
                new_value = new_value.round();
            }
        }

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let color = self.state_color(state, UiColor::FrameBg, UiColor::FrameBgHovered, UiColor::FrameBgActive);
            self.draw_list.add_rect_filled(layer, frame.min, frame.max, color);
            let grab_x = frame.min.x + range_fraction(new_value, min, max) * (frame.width() - grab);
            let grab_color = if self.active_id == id { self.colors[UiColor::ButtonActive] } else { self.colors[UiColor::Button] };
            self.draw_list.add_rect_filled(layer, vec2(grab_x, frame.min.y), vec2(grab_x + grab, frame.max.y), grab_color);
            self.draw_value_text(&frame, &format(new_value));
            self.draw_item_label(pos, size, label);
        }
        self.advance_cursor(size.x, size.y);
        new_value
    }

    fn draw_value_text(&mut self, frame: &Rect, text: &str) {
        let text_size = self.text_size(text);
        let center = frame.center();
        self.draw_label(vec2(center.x - text_size.x / 2.0, center.y - text_size.y / 2.0), self.colors[UiColor::Text], text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::*;

    fn press_at(ctx: &mut Context, pos: Vec2f, mut f: impl FnMut(&mut Context) -> bool) {
        ctx.io.add_mouse_pos(pos.x, pos.y);
        in_window(ctx, &mut f);
        in_window(ctx, &mut f);
        ctx.io.add_mouse_button(MouseButton::Left, true);
        in_window(ctx, &mut f);
    }

    #[test]
    fn value_maps_linearly_across_the_track() {
        let frame = Rect::new(vec2(100.0, 0.0), vec2(212.0, 20.0));
        assert_eq!(slider_value_at(&frame, 12.0, 106.0, 0.0, 1.0), 0.0);
        assert_eq!(slider_value_at(&frame, 12.0, 206.0, 0.0, 1.0), 1.0);
        assert_eq!(slider_value_at(&frame, 12.0, 156.0, -1.0, 1.0), 0.0);
        assert_eq!(slider_value_at(&frame, 12.0, 0.0, 0.0, 1.0), 0.0);
        assert_eq!(range_fraction(5.0, 5.0, 5.0), 0.0);
        assert_eq!(range_fraction(15.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn click_sets_value_under_the_mouse() {
        let mut ctx = headless();
        let mut value = 0.0f32;
        click_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.slider_float("speed", &mut value, 0.0, 10.0));
        assert_eq!(value, 5.0);
    }

    #[test]
    fn held_slider_follows_the_mouse_past_its_end() {
        let mut ctx = headless();
        let mut value = 0.0f32;
        press_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.slider_float("speed", &mut value, 0.0, 10.0));
        assert_eq!(value, 5.0);

        ctx.io.add_mouse_pos(900.0, 248.0);
        let changed = in_window(&mut ctx, |ctx| ctx.slider_float("speed", &mut value, 0.0, 10.0));
        assert!(changed);
        assert_eq!(value, 10.0);
    }

    #[test]
    fn integer_slider_rounds_to_nearest_step() {
        let mut ctx = headless();
        let mut value = 0;
        click_at(&mut ctx, vec2(480.0, 248.0), |ctx| ctx.slider_int("steps", &mut value, 0, 4));
        assert_eq!(value, 4);
    }

    #[test]
    fn out_of_range_value_is_clamped_without_input() {
        let mut ctx = headless();
        let mut value = 42;
        let changed = in_window(&mut ctx, |ctx| ctx.slider_int("steps", &mut value, 0, 4));
        assert!(changed);
        assert_eq!(value, 4);
    }

    #[test]
    fn drag_adds_mouse_movement_times_speed() {
        let mut ctx = headless();
        let mut value = 1.0f32;
        press_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.drag_float("speed", &mut value, 0.5, 0.0, 0.0));
        assert_eq!(value, 1.0);

        ctx.io.add_mouse_pos(425.0, 248.0);
        let changed = in_window(&mut ctx, |ctx| ctx.drag_float("speed", &mut value, 0.5, 0.0, 0.0));
        assert!(changed);
        assert_eq!(value, 11.0);
        assert_eq!(ctx.io.mouse_cursor(), MouseCursor::ResizeEW);
    }

    #[test]
    fn drag_clamps_to_a_proper_range() {
        let mut ctx = headless();
        let mut value = 1.0f32;
        press_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.drag_float("speed", &mut value, 1.0, 0.0, 5.0));
        ctx.io.add_mouse_pos(425.0, 248.0);
        in_window(&mut ctx, |ctx| ctx.drag_float("speed", &mut value, 1.0, 0.0, 5.0));
        assert_eq!(value, 5.0);
    }
}
