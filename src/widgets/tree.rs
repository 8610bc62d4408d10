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
    /// Row-wide header that toggles its open state when clicked. The state is kept in
    /// window storage under the header id. While open, the content is indented and ids are
    /// scoped to the header; close it with [`Context::end_collapsing_header`], only when this returned `true`.
    pub fn collapsing_header(&mut self, label: &str) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        let rect = Rect::from_pos_size(pos, size);
        let state = self.button_behavior(&rect, id);
        let open = self.toggle_open_state(id, state.pressed);

        if self.should_render(pos, size) {
            let layer = self.current_window().fg_layer;
            let color = self.state_color(state, UiColor::Header, UiColor::HeaderHovered, UiColor::HeaderActive);
            self.draw_list.add_rect_filled(layer, rect.min, rect.max, color);
            self.draw_node_label(pos, size, open, label);
        }
        self.advance_cursor(size.x, size.y);
        if open {
            self.open_node_scope(id);
        }
        open
    }

    /// Closes the innermost open [`Context::collapsing_header`].
    pub fn end_collapsing_header(&mut self) { self.close_node_scope("end_collapsing_header called without an open header") }

    /// Tree node: an arrow and a label. While open, the content is indented one level and
    /// ids are scoped to the node; close it with [`Context::tree_pop`]. Returns `true` while open,
    /// and `tree_pop` must only be called in that case.
    pub fn tree_node(&mut self, label: &str) -> bool {
        let id = self.get_id(label);
        let pos = self.get_cursor_pos();
        let size = self.calculate_item_size(self.style.frame_height());
        let rect = Rect::from_pos_size(pos, size);
        let state = self.button_behavior(&rect, id);
        let open = self.toggle_open_state(id, state.pressed);

        if self.should_render(pos, size) {
            if state.hovered {
                let layer = self.current_window().fg_layer;
                let color = self.state_color(state, UiColor::Header, UiColor::HeaderHovered, UiColor::HeaderActive);
                self.draw_list.add_rect_filled(layer, rect.min, rect.max, color);
            }
            self.draw_node_label(pos, size, open, label);
        }
        self.advance_cursor(size.x, size.y);

        if open {
            self.open_node_scope(id);
        }
        open
    }

    /// Closes the innermost open [`Context::tree_node`].
    pub fn tree_pop(&mut self) { self.close_node_scope("tree_pop called without an open tree node") }

    fn open_node_scope(&mut self, id: Id) {
        self.id_stack.push(id);
        self.current_window_mut().layout.tree_depth += 1;
    }

    fn close_node_scope(&mut self, misuse: &str) {
        let layout = &mut self.current_window_mut().layout;
        assert!(layout.tree_depth > 0, "{misuse}");
        layout.tree_depth -= 1;
        self.id_stack.pop();
    }

    fn toggle_open_state(&mut self, id: Id, pressed: bool) -> bool {
        let storage = &mut self.current_window_mut().storage;
        let mut open = storage.get_bool(id, false);
        if pressed {
            open = !open;
            storage.set_bool(id, open);
        }
        open
    }

    fn draw_node_label(&mut self, pos: Vec2f, size: Vec2f, open: bool, label: &str) {
        let layer = self.current_window().fg_layer;
        let half = self.style.font_size / 2.0;
        let center = vec2(pos.x + self.style.frame_padding.x + half, pos.y + size.y / 2.0);
        let (a, b, c) = if open {
            (vec2(center.x - half, center.y - half / 2.0), vec2(center.x + half, center.y - half / 2.0), vec2(center.x, center.y + half / 2.0))
        } else {
            (vec2(center.x - half / 2.0, center.y - half), vec2(center.x + half / 2.0, center.y), vec2(center.x - half / 2.0, center.y + half))
        };
        self.draw_list.add_triangle_filled(layer, a, b, c, self.colors[UiColor::Text]);

        let text_size = self.text_size(label);
        let text_pos = vec2(center.x + half + self.style.inner_spacing.x, pos.y + (size.y - text_size.y) / 2.0);
        self.draw_label(text_pos, self.colors[UiColor::Text], label);
    }
}
