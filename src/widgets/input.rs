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
use std::str::FromStr;

use crate::*;

#[derive(Clone, Debug, Default)]
/// The single text field being edited. Only one field holds the keyboard at a time.
pub(crate) struct TextEditState {
    id: Id,
    /// Caret as a byte offset into the edited buffer.
    cursor: usize,
    /// Buffer contents when editing started, restored by escape.
    initial: String,
    /// Text of a focused numeric field, kept between frames.
    scratch: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CharFilter {
    Any,
    Integer,
    Decimal,
}

impl CharFilter {
    fn accepts(self, c: char) -> bool {
        match self {
            CharFilter::Any => !c.is_control(),
            CharFilter::Integer => c.is_ascii_digit() || c == '+' || c == '-',
            CharFilter::Decimal => c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct EditOutcome {
    changed: bool,
    submit: bool,
    cancel: bool,
}

fn prev_boundary(text: &str, cursor: usize) -> Option<usize> { text[..cursor].chars().next_back().map(|c| cursor - c.len_utf8()) }

fn next_boundary(text: &str, cursor: usize) -> Option<usize> { text[cursor..].chars().next().map(|c| cursor + c.len_utf8()) }

/// Applies this frame's typed characters and editing keys to `buffer` at `cursor`.
fn apply_text_input(buffer: &mut String, cursor: &mut usize, io: &Io, filter: CharFilter) -> EditOutcome {
    let mut outcome = EditOutcome::default();
    *cursor = (*cursor).min(buffer.len());
    while !buffer.is_char_boundary(*cursor) {
        *cursor -= 1;
    }

    for &c in io.text_input() {
        if filter.accepts(c) {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
            outcome.changed = true;
        }
    }

    if io.is_key_pressed(Key::Backspace, true) {
        if let Some(prev) = prev_boundary(buffer, *cursor) {
            buffer.replace_range(prev..*cursor, "");
            *cursor = prev;
            outcome.changed = true;
        }
    }
    if io.is_key_pressed(Key::Delete, true) {
        if let Some(next) = next_boundary(buffer, *cursor) {
            buffer.replace_range(*cursor..next, "");
            outcome.changed = true;
        }
    }
    if io.is_key_pressed(Key::LeftArrow, true) {
        *cursor = prev_boundary(buffer, *cursor).unwrap_or(*cursor);
    }
    if io.is_key_pressed(Key::RightArrow, true) {
        *cursor = next_boundary(buffer, *cursor).unwrap_or(*cursor);
    }
    if io.is_key_pressed(Key::Home, false) {
        *cursor = 0;
    }
    if io.is_key_pressed(Key::End, false) {
        *cursor = buffer.len();
    }

    outcome.submit = io.is_key_pressed(Key::Enter, false) || io.is_key_pressed(Key::KeypadEnter, false);
    outcome.cancel = io.is_key_pressed(Key::Escape, false);
    outcome
}

impl Context {
    /// Single-line text field editing `buffer`. Clicking it takes the keyboard; enter, escape or
    /// a click elsewhere gives it back, escape also restoring the text it had when clicked.
    /// Returns `true` when `buffer` changed.
    pub fn input_text(&mut self, label: &str, buffer: &mut String) -> bool { self.text_field(label, None, buffer, CharFilter::Any).changed }

    /// [`Context::input_text`] showing `hint` in a faded colour while `buffer` is empty.
    pub fn input_text_hint(&mut self, label: &str, hint: &str, buffer: &mut String) -> bool {
        self.text_field(label, Some(hint), buffer, CharFilter::Any).changed
    }

    /// Text field over a float. `value` follows the text whenever it parses.
    pub fn input_float(&mut self, label: &str, value: &mut f32) -> bool { self.input_float_f(label, value, &|v| format!("{v:.3}")) }

    /// [`Context::input_float`] showing the idle value through `format`.
    pub fn input_float_f(&mut self, label: &str, value: &mut f32, format: &dyn Fn(f32) -> String) -> bool {
        self.input_number(label, value, CharFilter::Decimal, format)
    }

    /// Text field over an integer. `value` follows the text whenever it parses.
    pub fn input_int(&mut self, label: &str, value: &mut i32) -> bool { self.input_number(label, value, CharFilter::Integer, &|v| v.to_string()) }

    fn input_number<T: Copy + PartialEq + FromStr>(&mut self, label: &str, value: &mut T, filter: CharFilter, format: &dyn Fn(T) -> String) -> bool {
        let id = self.get_id(label);
        let mut text = if self.text_edit.id == id { std::mem::take(&mut self.text_edit.scratch) } else { format(*value) };
        let outcome = self.text_field(label, None, &mut text, filter);

        let mut changed = false;
        if outcome.changed {
            if let Ok(parsed) = text.trim().parse::<T>() {
                changed = parsed != *value;
                *value = parsed;
            }
        }
        if self.text_edit.id == id {
            self.text_edit.scratch = text;
        }
        changed
    }

    fn text_field(&mut self, label: &str, hint: Option<&str>, buffer: &mut String, filter: CharFilter) -> EditOutcome {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        let frame = self.value_frame(pos, size, label);
        let state = self.button_behavior(&frame, id);
        let padding = self.style.frame_padding.x;
        let inner_width = frame.width() - 2.0 * padding;

        if self.io.is_mouse_clicked(MouseButton::Left, false) {
            if state.hovered {
                if self.text_edit.id != id {
                    self.text_edit = TextEditState { id, cursor: buffer.len(), initial: buffer.clone(), scratch: String::new() };
                }
                let origin_x = frame.min.x + padding - self.caret_scroll(buffer, inner_width);
                self.text_edit.cursor = self.caret_at(buffer, self.io.mouse_pos().x - origin_x);
            } else if self.text_edit.id == id {
                self.text_edit.id = Id::NONE;
            }
        }

        let mut outcome = EditOutcome::default();
        if self.text_edit.id == id {
            let mut cursor = self.text_edit.cursor;
            outcome = apply_text_input(buffer, &mut cursor, &self.io, filter);
            self.text_edit.cursor = cursor;
            if outcome.cancel {
                let initial = std::mem::take(&mut self.text_edit.initial);
                outcome.changed = *buffer != initial;
                *buffer = initial;
            }
            if outcome.submit || outcome.cancel {
                self.text_edit.id = Id::NONE;
            } else {
                self.io.want_capture_keyboard = true;
                self.io.want_text_input = true;
            }
        }

        if self.should_render(pos, size) {
            let focused = self.text_edit.id == id;
            let layer = self.current_window().fg_layer;
            let color = if focused { self.colors[UiColor::FrameBgActive] } else { self.state_color(state, UiColor::FrameBg, UiColor::FrameBgHovered, UiColor::FrameBgActive) };
            self.draw_list.add_rect_filled(layer, frame.min, frame.max, color);

            let line_height = self.font.line_height();
            let scroll = if focused { self.caret_scroll(buffer, inner_width) } else { 0.0 };
            let origin = vec2(frame.min.x + padding - scroll, frame.min.y + (frame.height() - line_height) / 2.0);
            let text_color = self.colors[UiColor::Text];
            self.draw_list.push_clip_rect(frame, true);
            match hint {
                Some(hint) if buffer.is_empty() => {
                    let mut faded = text_color;
                    faded.w *= 0.5;
                    self.draw_list.add_text(layer, self.font.as_ref(), origin, faded, hint, 0.0);
                }
                _ => self.draw_list.add_text(layer, self.font.as_ref(), origin, text_color, buffer.as_str(), 0.0),
            }
            if focused {
                let x = origin.x + self.raw_text_width(&buffer[..self.text_edit.cursor]);
                self.draw_list.add_line(layer, vec2(x, origin.y), vec2(x, origin.y + line_height), text_color, 1.0);
            }
            self.draw_list.pop_clip_rect();
            self.draw_item_label(pos, size, label);
        }
        self.advance_cursor(size.x, size.y);
        outcome
    }

    /// Width of `text` including any `##`.
    fn raw_text_width(&self, text: &str) -> f32 { calculate_text_size(self.font.as_ref(), text, 0.0).x }

    /// Horizontal text offset that keeps the caret of the focused field inside `width`.
    fn caret_scroll(&self, text: &str, width: f32) -> f32 {
        let cursor = self.text_edit.cursor.min(text.len());
        if !text.is_char_boundary(cursor) {
            return 0.0;
        }
        (self.raw_text_width(&text[..cursor]) - width).max(0.0)
    }

    /// Byte offset of the character boundary closest to `x` pixels into `text`.
    fn caret_at(&self, text: &str, x: f32) -> usize {
        for (i, c) in text.char_indices() {
            let left = self.raw_text_width(&text[..i]);
            let right = self.raw_text_width(&text[..i + c.len_utf8()]);
            if x < (left + right) / 2.0 {
                return i;
            }
        }
        text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::*;

    fn typed(text: &str, keys: &[Key]) -> Io {
        let mut io = Io::default();
        io.add_text_utf8(text);
        for key in keys {
            io.add_key(*key, true);
        }
        io.begin_frame(false);
        io
    }

    fn press_key(ctx: &mut Context, key: Key, f: impl FnMut(&mut Context) -> bool) -> bool {
        ctx.io.add_key(key, true);
        let res = in_window(ctx, f);
        ctx.io.add_key(key, false);
        res
    }

    #[test]
    fn typing_inserts_at_the_caret() {
        let mut buffer = String::from("ac");
        let mut cursor = 1;
        let outcome = apply_text_input(&mut buffer, &mut cursor, &typed("b", &[]), CharFilter::Any);
        assert!(outcome.changed);
        assert_eq!(buffer, "abc");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn backspace_removes_a_whole_character() {
        let mut buffer = String::from("hé");
        let mut cursor = buffer.len();
        let outcome = apply_text_input(&mut buffer, &mut cursor, &typed("", &[Key::Backspace]), CharFilter::Any);
        assert!(outcome.changed);
        assert_eq!(buffer, "h");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn caret_moves_over_multibyte_characters() {
        let mut buffer = String::from("hé!");
        let mut cursor = buffer.len();
        let outcome = apply_text_input(&mut buffer, &mut cursor, &typed("", &[Key::LeftArrow]), CharFilter::Any);
        assert!(!outcome.changed);
        assert_eq!(cursor, 3);
        apply_text_input(&mut buffer, &mut cursor, &typed("", &[Key::Delete, Key::Home]), CharFilter::Any);
        assert_eq!(buffer, "hé");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn numeric_filters_reject_letters() {
        let mut buffer = String::new();
        let mut cursor = 0;
        let outcome = apply_text_input(&mut buffer, &mut cursor, &typed("-1x2", &[]), CharFilter::Integer);
        assert_eq!(buffer, "-12");
        assert!(outcome.changed);
        assert!(CharFilter::Decimal.accepts('e'));
        assert!(!CharFilter::Integer.accepts('.'));
        assert!(!CharFilter::Any.accepts('\n'));
    }

    #[test]
    fn enter_and_escape_are_reported() {
        let mut buffer = String::new();
        let mut cursor = 0;
        let outcome = apply_text_input(&mut buffer, &mut cursor, &typed("", &[Key::KeypadEnter, Key::Escape]), CharFilter::Any);
        assert!(outcome.submit);
        assert!(outcome.cancel);
        assert!(!outcome.changed);
    }

    #[test]
    fn clicked_field_takes_typing_until_enter() {
        let mut ctx = headless();
        let mut name = String::new();
        click_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.input_text("name", &mut name));

        ctx.io.add_text_utf8("hi");
        let changed = in_window(&mut ctx, |ctx| ctx.input_text("name", &mut name));
        assert!(changed);
        assert_eq!(name, "hi");
        assert!(ctx.io.want_text_input);
        assert!(ctx.io.want_capture_keyboard);

        press_key(&mut ctx, Key::Enter, |ctx| ctx.input_text("name", &mut name));
        ctx.io.add_text_utf8("x");
        let changed = in_window(&mut ctx, |ctx| ctx.input_text("name", &mut name));
        assert!(!changed);
        assert_eq!(name, "hi");
        assert!(!ctx.io.want_text_input);
    }

    #[test]
    fn escape_restores_text_from_before_editing() {
        let mut ctx = headless();
        let mut name = String::from("old");
        click_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.input_text("name", &mut name));
        ctx.io.add_text_utf8("er");
        in_window(&mut ctx, |ctx| ctx.input_text("name", &mut name));
        assert_eq!(name, "older");

        let changed = press_key(&mut ctx, Key::Escape, |ctx| ctx.input_text("name", &mut name));
        assert!(changed);
        assert_eq!(name, "old");
    }

    #[test]
    fn click_elsewhere_releases_the_keyboard() {
        let mut ctx = headless();
        let mut name = String::new();
        click_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.input_text("name", &mut name));
        click_at(&mut ctx, vec2(405.0, 400.0), |ctx| ctx.input_text("name", &mut name));
        ctx.io.add_text_utf8("z");
        in_window(&mut ctx, |ctx| ctx.input_text("name", &mut name));
        assert!(name.is_empty());
    }

    #[test]
    fn hidden_label_gives_the_field_the_whole_row() {
        let ctx = headless();
        let frame = ctx.value_frame(vec2(205.0, 238.0), vec2(300.0, 21.0), "##search");
        assert_eq!((frame.min.x, frame.max.x), (205.0, 505.0));
        let frame = ctx.value_frame(vec2(205.0, 238.0), vec2(300.0, 21.0), "name##search");
        assert_eq!(frame.min.x, 305.0);
    }

    #[test]
    fn integer_field_follows_its_text() {
        let mut ctx = headless();
        let mut value = 7;
        click_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.input_int("count", &mut value));

        ctx.io.add_text_utf8("5");
        let changed = in_window(&mut ctx, |ctx| ctx.input_int("count", &mut value));
        assert!(changed);
        assert_eq!(value, 75);

        press_key(&mut ctx, Key::Escape, |ctx| ctx.input_int("count", &mut value));
        assert_eq!(value, 7);
    }

    #[test]
    fn unparsable_float_text_keeps_the_value() {
        let mut ctx = headless();
        let mut value = 1.5f32;
        click_at(&mut ctx, vec2(405.0, 248.0), |ctx| ctx.input_float("ratio", &mut value));
        ctx.io.add_text_utf8("e");
        let changed = in_window(&mut ctx, |ctx| ctx.input_float("ratio", &mut value));
        assert!(!changed);
        assert_eq!(value, 1.5);
    }
}
