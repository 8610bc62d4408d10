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

#[derive(Clone, Debug)]
/// A tab bar between [`Context::begin_tab_bar`] and [`Context::end_tab_bar`].
pub(crate) struct TabBar {
    id: Id,
    origin: Vec2f,
    height: f32,
    /// Left edge of the next tab.
    cursor_x: f32,
    /// Index the next tab gets.
    index: i32,
    selected: i32,
    next_selected: i32,
    in_tab: bool,
}

impl Context {
    /// Starts a row of tabs. The selected tab index is kept in window storage under the bar id.
    /// Returns `false`, and needs no [`Context::end_tab_bar`], when the window is not visible.
    pub fn begin_tab_bar(&mut self, label: &str) -> bool {
        if !self.current_window().visible {
            return false;
        }
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let y = pos.y + size.y;
            self.draw_list.add_line(layer, vec2(pos.x, y), vec2(pos.x + size.x, y), self.colors[UiColor::ButtonActive], 1.0);
        }
        self.advance_cursor(size.x, size.y);

        let selected = self.current_window().storage.get_int(id, 0);
        self.id_stack.push(id);
        self.tab_bars.push(TabBar { id, origin: pos, height: size.y, cursor_x: pos.x, index: 0, selected, next_selected: selected, in_tab: false });
        true
    }

    /// Ends the innermost tab bar, committing a tab clicked during this frame as the selection.
    pub fn end_tab_bar(&mut self) {
        let Some(bar) = self.tab_bars.pop() else { panic!("end_tab_bar called without a matching begin_tab_bar") };
        assert!(!bar.in_tab, "end_tab_bar called while a tab is open");
        let next = if bar.next_selected >= bar.index { 0 } else { bar.next_selected };
        if next != bar.selected {
            self.current_window_mut().storage.set_int(bar.id, next);
        }
        self.id_stack.pop();
    }

    /// Tab header sized to its label. Returns `true` for the selected tab, whose content follows;
    /// close it with [`Context::end_tab`], only when this returned `true`.
    pub fn begin_tab(&mut self, label: &str) -> bool {
        let id = self.get_id(label);
        let Some(bar) = self.tab_bars.last() else { panic!("begin_tab called outside of a tab bar") };
        assert!(!bar.in_tab, "begin_tab called before end_tab");
        let open = bar.index == bar.selected;
        let pos = vec2(bar.cursor_x, bar.origin.y);
        let size = vec2(self.text_size(label).x + 2.0 * self.style.frame_padding.x, bar.height);
        let rect = Rect::from_pos_size(pos, size);
        let state = self.button_behavior(&rect, id);

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let color = if open { self.colors[UiColor::ButtonActive] } else { self.state_color(state, UiColor::Button, UiColor::ButtonHovered, UiColor::ButtonActive) };
            self.draw_list.add_rect_filled(layer, rect.min, rect.max, color);
            let text_size = self.text_size(label);
            self.draw_label(vec2(pos.x + self.style.frame_padding.x, pos.y + (size.y - text_size.y) / 2.0), self.colors[UiColor::Text], label);
        }

        let spacing = self.style.inner_spacing.x;
        let last = self.tab_bars.len() - 1;
        let bar = &mut self.tab_bars[last];
        if state.pressed {
            bar.next_selected = bar.index;
        }
        bar.cursor_x += size.x + spacing;
        bar.index += 1;
        bar.in_tab = open;
        if open {
            self.id_stack.push(id);
        }
        open
    }

    /// Closes the content of the tab opened by [`Context::begin_tab`].
    pub fn end_tab(&mut self) {
        let Some(bar) = self.tab_bars.last_mut() else { panic!("end_tab called outside of a tab bar") };
        assert!(bar.in_tab, "end_tab called without an open tab");
        bar.in_tab = false;
        self.id_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::test_support::*;
    use crate::*;

    fn two_tabs(ctx: &mut Context) -> (bool, bool) {
        let mut open = (false, false);
        if ctx.begin_tab_bar("bar") {
            open.0 = ctx.begin_tab("One");
            if open.0 {
                ctx.end_tab();
            }
            open.1 = ctx.begin_tab("Two");
            if open.1 {
                ctx.end_tab();
            }
            ctx.end_tab_bar();
        }
        open
    }

    #[test]
    fn first_tab_is_selected_by_default() {
        let mut ctx = headless();
        assert_eq!(in_window(&mut ctx, two_tabs), (true, false));
    }

    #[test]
    fn clicked_tab_becomes_selected_next_frame() {
        let mut ctx = headless();
        let on_release = click_at(&mut ctx, vec2(250.0, 248.0), two_tabs);
        assert_eq!(on_release, (true, false));
        assert_eq!(in_window(&mut ctx, two_tabs), (false, true));

        ctx.io.add_mouse_pos(-100.0, -100.0);
        assert_eq!(in_window(&mut ctx, two_tabs), (false, true));
    }

    #[test]
    fn tab_content_sits_below_the_bar_with_scoped_ids() {
        let mut ctx = headless();
        let (y, inner, outer) = in_window(&mut ctx, |ctx| {
            let mut res = (0.0, Id::NONE, Id::NONE);
            assert!(ctx.begin_tab_bar("bar"));
            if ctx.begin_tab("One") {
                res.0 = ctx.get_cursor_pos().y;
                res.1 = ctx.get_id("item");
                ctx.end_tab();
            }
            ctx.end_tab_bar();
            res.2 = ctx.get_id("item");
            res
        });
        assert_eq!(y, 263.0);
        assert_ne!(inner, outer);
    }

    #[test]
    fn selection_past_the_last_tab_falls_back_to_the_first() {
        let mut ctx = headless();
        click_at(&mut ctx, vec2(250.0, 248.0), two_tabs);
        let only_one = |ctx: &mut Context| {
            ctx.begin_tab_bar("bar");
            let open = ctx.begin_tab("One");
            if open {
                ctx.end_tab();
            }
            ctx.end_tab_bar();
            open
        };
        assert!(!in_window(&mut ctx, only_one));
        assert!(in_window(&mut ctx, only_one));
    }

    #[test]
    #[should_panic(expected = "end_tab_bar called without a matching begin_tab_bar")]
    fn end_tab_bar_without_begin_panics() {
        let mut ctx = headless();
        in_window(&mut ctx, |ctx| ctx.end_tab_bar());
    }
}
