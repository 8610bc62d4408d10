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
use crate::geometry::{clamp_vec2, clampf, max_vec2};
use crate::layout::LayoutState;
use crate::{vec2, Condition, DrawList, Id, LayerId, MouseCursor, Rect, Storage, Vec2f, WindowFlags};

/// Pixel length of the corner grip and of the edge grips' dead zone next to it.
pub(crate) const GRIP_SIZE: f32 = 15.0;
/// Thickness of the invisible band around the edges that picks up edge resizing.
pub(crate) const GRIP_HOVER_PADDING: f32 = 4.0;
/// Radius of the close and collapse buttons.
pub(crate) const TITLE_BUTTON_RADIUS: f32 = 8.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ResizeGrip {
    Corner,
    West,
    East,
    North,
    South,
}

impl ResizeGrip {
    pub const ALL: [ResizeGrip; 5] = [ResizeGrip::Corner, ResizeGrip::East, ResizeGrip::West, ResizeGrip::North, ResizeGrip::South];

    pub fn id(self, window: Id) -> Id {
        let offset = match self {
            ResizeGrip::Corner => 1,
            ResizeGrip::West => 2,
            ResizeGrip::East => 3,
            ResizeGrip::North => 4,
            ResizeGrip::South => 5,
        };
        window.offset(offset)
    }

    pub fn cursor(self) -> MouseCursor {
        match self {
            ResizeGrip::Corner => MouseCursor::ResizeNWSE,
            ResizeGrip::West | ResizeGrip::East => MouseCursor::ResizeEW,
            ResizeGrip::North | ResizeGrip::South => MouseCursor::ResizeNS,
        }
    }
}

/// Synthetic ids for the built-in controls of a window.
pub(crate) fn vertical_scroll_id(window: Id) -> Id { window.offset(6) }
pub(crate) fn horizontal_scroll_id(window: Id) -> Id { window.offset(7) }
pub(crate) fn close_button_id(window: Id) -> Id { window.offset(8) }
pub(crate) fn collapse_button_id(window: Id) -> Id { window.offset(9) }

/// Pending "next window" overrides, consumed by the next `begin_window`.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct NextWindowData {
    pub pos: Option<(Vec2f, Condition)>,
    pub size: Option<(Vec2f, Condition)>,
    pub collapsed: Option<(bool, Condition)>,
}

impl NextWindowData {
    pub fn clear(&mut self) { *self = Self::default() }
}

/// Persistent window record. Lives in the context arena for the lifetime of the context.
#[derive(Clone, Debug)]
pub(crate) struct Window {
    pub id: Id,
    pub name: String,
    pub flags: WindowFlags,

    pub pos: Vec2f,
    pub size: Vec2f,
    pub min_size: Vec2f,
    pub max_size: Vec2f,
    pub full_size: Vec2f,
    pub content_size: Vec2f,
    pub scroll: Vec2f,
    pub scroll_max: Vec2f,

    pub outer_rect: Rect,
    pub outer_rect_clipped: Rect,
    pub inner_rect: Rect,
    pub inner_clip_rect: Rect,
    pub title_bar_height: f32,

    pub parent: usize,
    pub root: usize,
    pub children: Vec<usize>,

    pub bg_layer: LayerId,
    pub fg_layer: LayerId,

    pub active: bool,
    pub visible: bool,
    pub collapsed: bool,
    pub scrollbar_x: bool,
    pub scrollbar_y: bool,
    pub hide_frames: u32,
    pub focus_order: usize,

    pub pos_allowed: Condition,
    pub size_allowed: Condition,
    pub collapse_allowed: Condition,

    pub storage: Storage,
    pub layout: LayoutState,
}

impl Window {
    pub fn new(id: Id, name: &str, index: usize, draw_list: &mut DrawList) -> Self {
        Self {
            id,
            name: name.to_string(),
            flags: WindowFlags::NONE,
            pos: vec2(200.0, 200.0),
            size: vec2(500.0, 500.0),
            min_size: vec2(200.0, 200.0),
            max_size: vec2(10000.0, 10000.0),
            full_size: vec2(500.0, 500.0),
            content_size: Vec2f::default(),
            scroll: Vec2f::default(),
            scroll_max: Vec2f::default(),
            outer_rect: Rect::default(),
            outer_rect_clipped: Rect::default(),
            inner_rect: Rect::default(),
            inner_clip_rect: Rect::default(),
            title_bar_height: 0.0,
            parent: index,
            root: index,
            children: Vec::new(),
            bg_layer: draw_list.request_layer(name),
            fg_layer: draw_list.request_layer(name),
            active: false,
            visible: false,
            collapsed: false,
            scrollbar_x: false,
            scrollbar_y: false,
            hide_frames: 0,
            focus_order: 0,
            pos_allowed: Condition::ALWAYS | Condition::ONCE,
            size_allowed: Condition::ALWAYS | Condition::ONCE,
            collapse_allowed: Condition::ALWAYS | Condition::ONCE,
            storage: Storage::new(),
            layout: LayoutState::default(),
        }
    }

    pub fn clamp_size(&mut self) { self.size = clamp_vec2(self.size, self.min_size, self.max_size) }

    /// Applies the pending next-window overrides allowed by this window's conditions.
    pub fn apply_next_window_data(&mut self, next: &NextWindowData) {
        if let Some((collapsed, cond)) = next.collapsed {
            if self.collapse_allowed.intersects(cond) {
                self.collapsed = collapsed;
                self.collapse_allowed.remove(Condition::ONCE);
            }
        }
        if let Some((pos, cond)) = next.pos {
            if self.pos_allowed.intersects(cond) {
                self.pos = pos;
                self.pos_allowed.remove(Condition::ONCE);
            }
        }
        if let Some((size, cond)) = next.size {
            if self.size_allowed.intersects(cond) {
                self.size = size;
                self.size_allowed.remove(Condition::ONCE);
            }
        }
    }

    /// Region of the title bar that starts a window move.
    pub fn title_hit_rect(&self, title_bar_height: f32) -> Rect {
        Rect::new(vec2(self.pos.x + 2.0, self.pos.y + 2.0), vec2(self.pos.x + self.size.x - 2.0, self.pos.y + title_bar_height))
    }

    /// Area that claims the mouse for this window during hit-testing.
    pub fn hover_rect(&self) -> Rect {
        if self.flags.intersects(WindowFlags::NO_RESIZE | WindowFlags::AUTO_SIZE) {
            self.outer_rect_clipped
        } else {
            self.outer_rect_clipped.expand(2.0)
        }
    }

    pub fn grip_rect(&self, grip: ResizeGrip) -> Rect {
        let outer = self.outer_rect;
        let (tl, br) = (outer.min, outer.max);
        let (tr, bl) = (outer.top_right(), outer.bottom_left());
        let band = GRIP_HOVER_PADDING / 2.0;
        match grip {
            ResizeGrip::Corner => Rect::new(vec2(br.x - GRIP_SIZE, br.y - GRIP_SIZE), br),
            ResizeGrip::East => Rect::new(tr, vec2(tr.x, tr.y + self.size.y - GRIP_SIZE)).expand_vec2(vec2(band, 0.0)),
            ResizeGrip::West => Rect::new(tl, vec2(tl.x, tl.y + self.size.y - GRIP_SIZE)).expand_vec2(vec2(band, 0.0)),
            ResizeGrip::North => Rect::new(tl, vec2(tr.x - GRIP_SIZE, tr.y)).expand_vec2(vec2(0.0, band)),
            ResizeGrip::South => Rect::new(bl, vec2(br.x - GRIP_SIZE, br.y)).expand_vec2(vec2(0.0, band)),
        }
    }

    /// Resizes the window so that the dragged edge follows `mouse`; the opposite edge stays fixed.
    pub fn resize_to(&mut self, grip: ResizeGrip, mouse: Vec2f) {
        let far = self.outer_rect.max;
        match grip {
            ResizeGrip::Corner => self.size = vec2(mouse.x - self.pos.x, mouse.y - self.pos.y),
            ResizeGrip::East => self.size.x = mouse.x - self.pos.x,
            ResizeGrip::South => self.size.y = mouse.y - self.pos.y,
            ResizeGrip::West => self.size.x = far.x - mouse.x,
            ResizeGrip::North => self.size.y = far.y - mouse.y,
        }
        self.clamp_size();
        match grip {
            ResizeGrip::West => self.pos.x = far.x - self.size.x,
            ResizeGrip::North => self.pos.y = far.y - self.size.y,
            _ => (),
        }
        self.clamp_scroll();
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll = vec2(clampf(self.scroll.x, 0.0, self.scroll_max.x), clampf(self.scroll.y, 0.0, self.scroll_max.y));
    }

    /// Translates a dragged window, keeping half of it and its title bar on screen.
    pub fn move_by(&mut self, delta: Vec2f, mouse: Vec2f, viewport: Vec2f) {
        if mouse.x > 0.0 && mouse.x < viewport.x {
            self.pos.x += delta.x;
        }
        if mouse.y > 0.0 && mouse.y < viewport.y {
            self.pos.y += delta.y;
        }
        self.pos.x = self.pos.x.max(-self.size.x / 2.0).min(viewport.x - self.size.x / 2.0);
        self.pos.y = self.pos.y.max(0.0).min(viewport.y - 50.0);
    }

    /// Pulls a root window whose origin left the viewport back into view.
    pub fn clamp_to_viewport(&mut self, viewport: Vec2f) {
        if self.pos.x > viewport.x {
            self.pos.x = viewport.x - self.size.x / 2.0;
        }
        if self.pos.y > viewport.y {
            self.pos.y = (viewport.y - self.size.y / 2.0).max(0.0);
        }
    }

    /// Recomputes content size, scroll extents and scrollbar presence from the cursor extents of this frame.
    pub fn update_scroll_extents(&mut self, padding: Vec2f, scrollbar_size: f32) {
        if self.visible {
            let measured = self.layout.cursor_max;
            let start = self.layout.cursor_start;
            self.content_size = vec2(padding.x + measured.x - start.x, padding.y + measured.y - start.y);
        }
        let view = vec2(self.size.x, self.size.y - self.title_bar_height);
        self.scroll_max = max_vec2(vec2(self.content_size.x - view.x, self.content_size.y - view.y), Vec2f::default());
        self.scrollbar_x = self.scroll_max.x > 0.0;
        self.scrollbar_y = self.scroll_max.y > 0.0;
        if self.scrollbar_x && self.scrollbar_y {
            self.scroll_max.x += scrollbar_size + 2.0;
            self.scroll_max.y += scrollbar_size + 2.0;
        }
        if !self.scrollbar_x {
            self.scroll.x = 0.0;
        }
        if !self.scrollbar_y {
            self.scroll.y = 0.0;
        }
        self.clamp_scroll();
    }

    /// Centre of the `slot`-th title bar button counted from the right edge.
    pub fn title_button_center(&self, slot: usize, spacing: f32) -> Vec2f {
        let step = TITLE_BUTTON_RADIUS * 2.0 + spacing;
        let from_right = TITLE_BUTTON_RADIUS * 2.0 + step * slot as f32;
        vec2(self.pos.x + self.size.x - from_right, self.pos.y + self.title_bar_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        let mut list = DrawList::new();
        let mut w = Window::new(Id::new(42), "test", 0, &mut list);
        w.outer_rect = Rect::from_pos_size(w.pos, w.size);
        w
    }

    #[test]
    fn new_window_defaults() {
        let w = window();
        assert_eq!((w.pos.x, w.pos.y), (200.0, 200.0));
        assert_eq!((w.size.x, w.size.y), (500.0, 500.0));
        assert_eq!((w.min_size.x, w.max_size.x), (200.0, 10000.0));
        assert_ne!(w.bg_layer, w.fg_layer);
    }

    #[test]
    fn south_grip_respects_min_size() {
        let mut w = window();
        w.resize_to(ResizeGrip::South, vec2(400.0, 250.0));
        assert_eq!(w.size.y, 200.0);
        assert_eq!(w.pos.y, 200.0);
    }

    #[test]
    fn west_and_north_grips_keep_far_edge() {
        let mut w = window();
        w.resize_to(ResizeGrip::West, vec2(300.0, 400.0));
        assert_eq!((w.pos.x, w.size.x), (300.0, 400.0));
        w.resize_to(ResizeGrip::North, vec2(0.0, 650.0));
        assert_eq!((w.pos.y, w.size.y), (500.0, 200.0));
    }

    #[test]
    fn corner_grip_clamps_to_max() {
        let mut w = window();
        w.max_size = vec2(600.0, 600.0);
        w.resize_to(ResizeGrip::Corner, vec2(5000.0, 300.0));
        assert_eq!((w.size.x, w.size.y), (600.0, 200.0));
    }

    #[test]
    fn move_keeps_window_reachable() {
        let mut w = window();
        let viewport = vec2(800.0, 600.0);
        w.move_by(vec2(-2000.0, -2000.0), vec2(10.0, 10.0), viewport);
        assert_eq!((w.pos.x, w.pos.y), (-250.0, 0.0));
        w.move_by(vec2(5000.0, 5000.0), vec2(10.0, 10.0), viewport);
        assert_eq!((w.pos.x, w.pos.y), (550.0, 550.0));
        // mouse outside the viewport freezes that axis
        w.move_by(vec2(-100.0, -100.0), vec2(-5.0, 100.0), viewport);
        assert_eq!((w.pos.x, w.pos.y), (550.0, 450.0));
    }

    #[test]
    fn scroll_extents_follow_content() {
        let mut w = window();
        w.visible = true;
        w.title_bar_height = 33.0;
        w.layout.reset(vec2(205.0, 238.0));
        w.layout.cursor_max = vec2(405.0, 1238.0);
        w.scroll = vec2(30.0, 5000.0);
        w.update_scroll_extents(vec2(5.0, 5.0), 10.0);
        assert_eq!((w.content_size.x, w.content_size.y), (205.0, 1005.0));
        assert!(w.scrollbar_y && !w.scrollbar_x);
        assert_eq!(w.scroll_max.y, 1005.0 - 467.0);
        assert_eq!(w.scroll.x, 0.0);
        assert_eq!(w.scroll.y, w.scroll_max.y);
    }

    #[test]
    fn next_window_once_applies_a_single_time() {
        let mut w = window();
        let next = NextWindowData { pos: Some((vec2(10.0, 20.0), Condition::ONCE)), ..Default::default() };
        w.apply_next_window_data(&next);
        assert_eq!((w.pos.x, w.pos.y), (10.0, 20.0));
        w.pos = vec2(0.0, 0.0);
        w.apply_next_window_data(&next);
        assert_eq!((w.pos.x, w.pos.y), (0.0, 0.0));
        let always = NextWindowData { pos: Some((vec2(7.0, 7.0), Condition::ALWAYS)), ..Default::default() };
        w.apply_next_window_data(&always);
        assert_eq!(w.pos.x, 7.0);
    }

    #[test]
    fn grip_ids_are_distinct() {
        let id = Id::new(100);
        let mut ids: Vec<u32> = ResizeGrip::ALL.iter().map(|g| g.id(id).raw()).collect();
        ids.extend([vertical_scroll_id(id), horizontal_scroll_id(id), close_button_id(id), collapse_button_id(id)].map(|i| i.raw()));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }
}
