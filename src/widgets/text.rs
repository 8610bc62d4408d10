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
    /// Plain text in the default text colour.
    pub fn text(&mut self, text: &str) {
        let color = self.colors[UiColor::Text];
        self.color_text(color, text);
    }

    /// Text in `color`. Multi-line text grows the item height.
    pub fn color_text(&mut self, color: Vec4f, text: &str) {
        let pos = self.get_cursor_pos();
        let text_size = calculate_text_size(self.font.as_ref(), text, 0.0);
        let size = self.calculate_item_size(text_size.y);
        if self.should_render(pos, size) {
            self.draw_label(vec2(pos.x, pos.y + (size.y - text_size.y).max(0.0) / 2.0), color, text);
        }
        self.advance_cursor(size.x, size.y.max(text_size.y));
    }

    /// `label` on the left and `value` aligned one third into the row.
    pub fn labeled_text(&mut self, label: &str, value: &str) {
        let pos = self.get_cursor_pos();
        let label_size = self.text_size(label);
        let value_size = calculate_text_size(self.font.as_ref(), value, 0.0);
        let size = self.calculate_item_size(label_size.y.max(value_size.y));
        if self.should_render(pos, size) {
            let color = self.colors[UiColor::Text];
            let value_x = pos.x + (size.x / 3.0).max(label_size.x + self.style.inner_spacing.x);
            self.draw_label(pos, color, label);
            self.draw_label(vec2(value_x, pos.y), color, value);
        }
        self.advance_cursor(size.x, size.y);
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::test_support::*;
    use crate::*;

    #[test]
    fn text_height_follows_font() {
        let mut ctx = headless();
        let (first, second) = in_window(&mut ctx, |ctx| {
            let start = ctx.get_cursor_pos().y;
            ctx.text("one line");
            let after_one = ctx.get_cursor_pos().y;
            ctx.text("two\nlines");
            (after_one - start, ctx.get_cursor_pos().y - after_one)
        });
        assert_eq!(first, 13.0 + 4.0);
        assert_eq!(second, 26.0 + 4.0);
    }

    #[test]
    fn fixed_row_height_wins_over_text() {
        let mut ctx = headless();
        let advance = in_window(&mut ctx, |ctx| {
            ctx.layout_static(30.0, 100.0, 1);
            let start = ctx.get_cursor_pos().y;
            ctx.labeled_text("name", "value");
            ctx.get_cursor_pos().y - start
        });
        assert_eq!(advance, 34.0);
    }
}
