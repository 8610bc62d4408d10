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
use std::rc::Rc;

use tracing::{debug, trace};

use crate::draw::find_rendered_text_end;
use crate::geometry::{circle_contains, clampf, min_vec2};
use crate::scrollbar::{drag_scroll, ScrollAxis};
use crate::widgets::{TabBar, TextEditState};
use crate::window::{
    close_button_id, collapse_button_id, horizontal_scroll_id, vertical_scroll_id, NextWindowData, ResizeGrip, Window, TITLE_BUTTON_RADIUS,
};
use crate::*;

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct PrevItem {
    pub hovered: bool,
    pub active: bool,
}

/// Iterates a long list of equally tall items, laying out only the rows that are visible.
///
/// ```ignore
/// let mut clipper = Clipper::new(10_000);
/// while ctx.step_clipper(&mut clipper) {
///     for i in clipper.display_start..clipper.display_end {
///         ctx.text(&format!("row {i}"));
///     }
/// }
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Clipper {
    /// Total number of items.
    pub item_count: usize,
    /// First item to lay out in the current step.
    pub display_start: usize,
    /// One past the last item to lay out in the current step.
    pub display_end: usize,
    item_height: f32,
    start_pos_y: f32,
    step: u8,
}

impl Clipper {
    /// Creates a clipper over `item_count` items.
    pub fn new(item_count: usize) -> Self { Self { item_count, ..Self::default() } }

    fn finish(&mut self) { *self = Self::default() }
}

/// Root state of the UI. Owns every window, the input state and the draw list.
///
/// A frame is driven as `new_frame`, widget calls, then `render`; [`Context::frame`] wraps the three.
pub struct Context {
    /// Input state; platform glue feeds events here.
    pub io: Io,
    /// Metrics used by windows and widgets.
    pub style: Style,
    /// Colour table used by windows and widgets.
    pub colors: ColorScheme,
    /// Selects which internal events are traced.
    pub debug_log_flags: DebugLogFlags,

    pub(crate) color_stack: Vec<(UiColor, Vec4f)>,
    pub(crate) font: Rc<dyn Font>,

    pub(crate) draw_list: DrawList,
    pub(crate) bg_layer: LayerId,
    pub(crate) fg_layer: LayerId,
    pub(crate) debug_layer: LayerId,

    pub(crate) windows: Vec<Window>,
    pub(crate) window_ids: Storage,
    pub(crate) focused: Vec<usize>,
    pub(crate) display_order: Vec<usize>,
    pub(crate) tooltip_window: usize,
    pub(crate) tooltip_parent: Option<usize>,

    pub(crate) current_window: Option<usize>,
    pub(crate) hovered_window: Option<usize>,
    pub(crate) moving_window: Option<usize>,
    pub(crate) sizing_window: Option<usize>,
    pub(crate) scrolling_window: Option<usize>,
    pub(crate) wheeling_window: Option<usize>,
    pub(crate) active_window: Option<usize>,
    pub(crate) active_window_id: Id,

    pub(crate) hovered_id: Id,
    pub(crate) active_id: Id,
    pub(crate) next_hovered_id: Id,
    pub(crate) next_active_id: Id,
    pub(crate) just_activated: bool,
    pub(crate) prev_item: PrevItem,
    pub(crate) next_window: NextWindowData,
    pub(crate) id_stack: IdStack,
    pub(crate) mouse_owned: [bool; MouseButton::COUNT],
    pub(crate) storage: Storage,
    pub(crate) text_edit: TextEditState,
    pub(crate) tab_bars: Vec<TabBar>,
    pub(crate) in_frame: bool,
}

impl Default for Context {
    fn default() -> Self { Self::new() }
}

impl Context {
    /// Creates a context using the built-in [`MonoFont`].
    pub fn new() -> Self { Self::with_font(Rc::new(MonoFont::default())) }

    /// Creates a context that measures and draws text with `font`.
    pub fn with_font(font: Rc<dyn Font>) -> Self {
        let mut draw_list = DrawList::new();
        let bg_layer = draw_list.request_layer("background");
        let fg_layer = draw_list.request_layer("foreground");
        let debug_layer = draw_list.request_layer("debug");
        let tooltip = Window::new(hash_str("##tooltip", 0), "##tooltip", 0, &mut draw_list);
        let style = Style { font_size: font.size(), ..Style::default() };

        Self {
            io: Io::new(),
            style,
            colors: ColorScheme::default(),
            debug_log_flags: DebugLogFlags::empty(),
            color_stack: Vec::new(),
            font,
            draw_list,
            bg_layer,
            fg_layer,
            debug_layer,
            windows: vec![tooltip],
            window_ids: Storage::new(),
            focused: Vec::new(),
            display_order: Vec::new(),
            tooltip_window: 0,
            tooltip_parent: None,
            current_window: None,
            hovered_window: None,
            moving_window: None,
            sizing_window: None,
            scrolling_window: None,
            wheeling_window: None,
            active_window: None,
            active_window_id: Id::NONE,
            hovered_id: Id::NONE,
            active_id: Id::NONE,
            next_hovered_id: Id::NONE,
            next_active_id: Id::NONE,
            just_activated: false,
            prev_item: PrevItem::default(),
            next_window: NextWindowData::default(),
            id_stack: IdStack::new(),
            mouse_owned: [false; MouseButton::COUNT],
            storage: Storage::new(),
            text_edit: TextEditState::default(),
            tab_bars: Vec::new(),
            in_frame: false,
        }
    }

    /// Replaces the font used for measuring and drawing text.
    pub fn set_font(&mut self, font: Rc<dyn Font>) {
        self.style.font_size = font.size();
        self.font = font;
    }

    /// Font used for measuring and drawing text.
    pub fn font(&self) -> &dyn Font { self.font.as_ref() }

    // ---------------------------------------------------------------------
    // frame lifecycle
    // ---------------------------------------------------------------------

    /// Starts a frame: drains queued input, advances timers and clears last frame's geometry.
    pub fn new_frame(&mut self) {
        assert!(!self.in_frame, "new_frame called twice without render");
        self.io.begin_frame(self.debug_log_flags.contains(DebugLogFlags::EVENT_IO));

        for button in MouseButton::ALL {
            if self.io.is_mouse_clicked(button, false) {
                self.mouse_owned[button as usize] = self.hovered_window.is_some();
            }
        }

        self.draw_list.reset();
        self.id_stack.clear();
        self.tab_bars.clear();

        if self.io.is_mouse_down(MouseButton::Left) {
            self.next_active_id = self.active_id;
        }
        self.in_frame = true;
    }

    /// Resolves this frame's interaction: commits hovered/active ids, hit-tests windows,
    /// reorders focus and applies wheel scrolling and window moves.
    fn end_frame(&mut self) {
        if self.active_id != self.next_active_id && self.debug_log_flags.contains(DebugLogFlags::EVENT_ACTIVE_ID) {
            trace!(target: "frameui::active_id", from = self.active_id.raw(), to = self.next_active_id.raw(), frame = self.io.frame_count(), "active id changed");
        }
        self.hovered_id = self.next_hovered_id;
        self.active_id = self.next_active_id;

        self.just_activated = false;
        self.hovered_window = None;
        self.active_window = None;
        self.wheeling_window = None;
        self.next_hovered_id = Id::NONE;
        self.next_active_id = Id::NONE;
        self.prev_item = PrevItem::default();
        self.next_window.clear();

        if self.io.is_mouse_released(MouseButton::Left) {
            self.moving_window = None;
            self.sizing_window = None;
            self.scrolling_window = None;
        }
        if self.io.is_mouse_clicked(MouseButton::Left, false) {
            self.active_window_id = Id::NONE;
        }

        let viewport = self.io.viewport_size();
        self.display_order.clear();
        for i in 0..self.focused.len() {
            let root = self.focused[i];
            if self.windows[root].active {
                self.submit_window(root);
            }
            self.windows[root].clamp_to_viewport(viewport);
        }

        if let Some(active) = self.active_window {
            self.active_window_id = self.windows[active].id;
            if self.just_activated {
                self.bring_to_front(active);
            }
        }

        // a window being resized or scrolled by its bar keeps the wheel from moving it
        let dragging = self.sizing_window.is_some() || self.scrolling_window.is_some();
        if let Some(index) = self.wheeling_window.filter(|_| !dragging) {
            let wheel = self.io.mouse_wheel();
            let window = &mut self.windows[index];
            window.scroll.y = clampf(window.scroll.y - wheel * 10.0, 0.0, window.scroll_max.y);
        }

        if let Some(index) = self.moving_window {
            if self.io.is_mouse_dragging(MouseButton::Left, 2.0) && self.windows[index].flags.is_movable() {
                let delta = self.io.mouse_drag_delta(MouseButton::Left, 2.0);
                let mouse = self.io.mouse_pos();
                self.windows[index].move_by(delta, mouse, viewport);
                self.io.reset_mouse_drag_delta(MouseButton::Left);
            }
        }

        self.io.end_frame();
        self.io.want_capture_mouse =
            self.hovered_window.is_some() || self.mouse_owned[MouseButton::Left as usize] || !self.active_id.is_none() || self.moving_window.is_some();
        self.in_frame = false;
    }

    /// Hit-tests a window and its children, appending them to the display order.
    fn submit_window(&mut self, index: usize) {
        let mouse_clicked = self.io.is_mouse_clicked(MouseButton::Left, false);
        let title_bar_height = self.style.title_bar_height();
        let window = &mut self.windows[index];
        window.active = false;

        if self.io.is_mouse_hovering_rect(&window.hover_rect()) {
            self.hovered_window = Some(index);
            if mouse_clicked {
                let root = window.root;
                self.moving_window = None;
                self.active_window = Some(root);
                self.just_activated = true;
                self.mouse_owned[MouseButton::Left as usize] = true;
                if window.flags.has_title_bar() && self.io.is_mouse_hovering_rect(&window.title_hit_rect(title_bar_height)) {
                    self.moving_window = Some(index);
                }
            }
            if !window.flags.is_auto_sizing() && self.io.mouse_wheel() != 0.0 {
                self.wheeling_window = Some(index);
            }
        }

        self.display_order.push(index);
        for c in 0..self.windows[index].children.len() {
            let child = self.windows[index].children[c];
            self.submit_window(child);
        }
    }

    /// Moves a root window to the end of the focus order: swap it with the last entry, then push.
    fn bring_to_front(&mut self, index: usize) {
        let order = self.windows[index].focus_order;
        let last = self.focused.len() - 1;
        if order == last {
            return;
        }
        self.focused.swap_remove(order);
        let moved = self.focused[order];
        self.windows[moved].focus_order = order;
        self.focused.push(index);
        self.windows[index].focus_order = last;
    }

    /// Ends the frame and flattens every submitted layer into the draw list output.
    pub fn render(&mut self) {
        assert!(self.in_frame, "render called without new_frame");
        assert!(self.current_window.is_none(), "render called with a window still open");
        self.end_frame();

        self.draw_list.submit_layer(self.bg_layer);
        for i in 0..self.display_order.len() {
            let window = &mut self.windows[self.display_order[i]];
            if window.hide_frames == 0 {
                let (bg, fg) = (window.bg_layer, window.fg_layer);
                self.draw_list.submit_layer(bg);
                self.draw_list.submit_layer(fg);
            } else {
                window.hide_frames -= 1;
            }
        }
        let tooltip = &mut self.windows[self.tooltip_window];
        if tooltip.active {
            tooltip.active = false;
            let (bg, fg) = (tooltip.bg_layer, tooltip.fg_layer);
            self.draw_list.submit_layer(bg);
            self.draw_list.submit_layer(fg);
        }
        self.draw_list.submit_layer(self.fg_layer);
        self.draw_list.submit_layer(self.debug_layer);
        self.draw_list.flatten();
    }

    /// Runs one complete frame around `f`.
    pub fn frame<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.new_frame();
        f(self);
        self.render();
    }

    // ---------------------------------------------------------------------
    // draw access
    // ---------------------------------------------------------------------

    /// Geometry produced by the last [`Context::render`].
    pub fn draw_list(&self) -> &DrawList { &self.draw_list }

    /// Mutable draw list, for custom geometry on any layer.
    pub fn draw_list_mut(&mut self) -> &mut DrawList { &mut self.draw_list }

    /// Layer drawn below every window.
    pub fn bg_layer(&self) -> LayerId { self.bg_layer }

    /// Layer drawn above every window.
    pub fn fg_layer(&self) -> LayerId { self.fg_layer }

    /// Layer drawn last, for debug overlays.
    pub fn debug_layer(&self) -> LayerId { self.debug_layer }

    /// Foreground layer of the current window.
    pub fn window_fg_layer(&self) -> LayerId { self.current_window().fg_layer }

    /// Background layer of the current window.
    pub fn window_bg_layer(&self) -> LayerId { self.current_window().bg_layer }

    // ---------------------------------------------------------------------
    // ids and storage
    // ---------------------------------------------------------------------

    /// Id of `label` inside the current id scope.
    pub fn get_id(&self, label: &str) -> Id { self.id_stack.id_from_str(label) }

    /// Opens an id scope named by `label`.
    pub fn push_id_str(&mut self, label: &str) {
        let id = self.id_stack.id_from_str(label);
        self.id_stack.push(id);
    }

    /// Opens an id scope named by an integer, typically a loop index.
    pub fn push_id_int(&mut self, value: i32) {
        let id = self.id_stack.id_from_int(value);
        self.id_stack.push(id);
    }

    /// Closes the innermost id scope.
    pub fn pop_id(&mut self) { self.id_stack.pop(); }

    /// Runs `f` inside an id scope named by `label`.
    pub fn with_id<R, F: FnOnce(&mut Self) -> R>(&mut self, label: &str, f: F) -> R {
        self.push_id_str(label);
        let res = f(self);
        self.pop_id();
        res
    }

    /// Context-wide storage for widget state keyed by id.
    pub fn storage(&self) -> &Storage { &self.storage }

    /// Mutable context-wide storage.
    pub fn storage_mut(&mut self) -> &mut Storage { &mut self.storage }

    /// Storage owned by the current window.
    pub fn window_storage_mut(&mut self) -> &mut Storage { &mut self.current_window_mut().storage }

    /// Widget that owns the pointer this frame, if any.
    pub fn active_id(&self) -> Id { self.active_id }

    /// Widget under the pointer this frame, if any.
    pub fn hovered_id(&self) -> Id { self.hovered_id }

    /// Returns `true` when the last press of `button` started over a window.
    pub fn is_mouse_owned(&self, button: MouseButton) -> bool { self.mouse_owned[button as usize] }

    // ---------------------------------------------------------------------
    // colours
    // ---------------------------------------------------------------------

    /// Overrides a colour until the matching [`Context::pop_color`].
    pub fn push_color(&mut self, color: UiColor, value: Vec4f) {
        self.color_stack.push((color, self.colors[color]));
        self.colors[color] = value;
    }

    /// Restores the last `count` overridden colours.
    pub fn pop_color(&mut self, count: usize) {
        for _ in 0..count {
            let Some((color, value)) = self.color_stack.pop() else { panic!("pop_color without matching push_color") };
            self.colors[color] = value;
        }
    }

    // ---------------------------------------------------------------------
    // windows
    // ---------------------------------------------------------------------

    pub(crate) fn current_window(&self) -> &Window {
        let Some(index) = self.current_window else { panic!("no current window: call begin_window first") };
        &self.windows[index]
    }

    pub(crate) fn current_window_mut(&mut self) -> &mut Window {
        let Some(index) = self.current_window else { panic!("no current window: call begin_window first") };
        &mut self.windows[index]
    }

    /// Number of windows ever declared on this context.
    pub fn window_count(&self) -> usize { self.window_ids.len() }

    /// Id of the current window.
    pub fn window_id(&self) -> Id { self.current_window().id }

    fn begin_window_ex(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        let parent = self.current_window;
        if !flags.is_child() {
            assert!(parent.is_none(), "begin_window called inside another window; use begin_child");
        }
        let seed = if parent.is_some() { self.id_stack.top() } else { Id::NONE };
        let id = hash_str(name, seed.raw());
        self.id_stack.push(id);

        let style = self.style;
        let title_bar_height = if flags.is_child() || !flags.has_title_bar() { 0.0 } else { style.title_bar_height() };

        let index = match self.window_ids.get_handle(id) {
            Some(index) => index,
            None => self.create_window(id, name, flags, parent),
        };

        if flags.is_child() {
            let Some(p) = parent else { panic!("begin_child called outside of a window") };
            let start = self.windows[p].layout.cursor_pos(style.indent_size);
            self.windows[index].pos = start;
            self.windows[p].children.push(index);
        }

        let next = self.next_window;
        self.next_window.clear();
        {
            let window = &mut self.windows[index];
            window.active = true;
            window.flags = flags;
            window.title_bar_height = title_bar_height;
            window.children.clear();
            window.clamp_size();
            window.apply_next_window_data(&next);
            if window.collapsed {
                window.size.y = title_bar_height;
            }

            window.outer_rect = Rect::from_pos_size(window.pos, window.size);
            window.outer_rect_clipped = window.outer_rect;
            window.inner_rect = window.outer_rect;
            if window.scrollbar_x {
                window.inner_rect.max.y -= style.scrollbar_size + 2.0;
            }
            if window.scrollbar_y {
                window.inner_rect.max.x -= style.scrollbar_size + 2.0;
            }
            window.inner_rect.min.y += title_bar_height;
        }

        self.current_window = Some(index);
        if title_bar_height > 0.0 {
            self.draw_title_bar(index, open);
        }

        let clip_depth = self.draw_list.clip_depth();
        let parent_clip = self.draw_list.current_clip_rect();
        let window = &mut self.windows[index];
        window.inner_clip_rect = window.inner_rect.expand_vec2(vec2(-style.window_horizontal_padding, 0.0));
        if !window.collapsed {
            if clip_depth > 0 {
                window.inner_clip_rect = window.inner_clip_rect.clip_full(&parent_clip);
                window.outer_rect_clipped = window.outer_rect_clipped.clip_full(&parent_clip);
            }
            let clip = window.inner_clip_rect;
            self.draw_list.push_clip_rect(clip, false);
        }

        let window = &mut self.windows[index];
        let start = vec2(
            style.window_horizontal_padding + window.pos.x - window.scroll.x,
            style.window_vertical_padding + window.pos.y + title_bar_height - window.scroll.y,
        );
        window.layout.reset(start);

        if flags.is_child() {
            let parent_clip = parent.map(|p| self.windows[p].inner_clip_rect).unwrap_or(UNCLIPPED_RECT);
            let window = &mut self.windows[index];
            window.visible = window.inner_clip_rect.overlaps(&parent_clip);
            return window.visible && !window.inner_clip_rect.is_inverted();
        }
        let window = &mut self.windows[index];
        window.visible = true;
        !window.collapsed
    }

    fn create_window(&mut self, id: Id, name: &str, flags: WindowFlags, parent: Option<usize>) -> usize {
        let index = self.windows.len();
        let mut window = Window::new(id, name, index, &mut self.draw_list);
        window.focus_order = self.focused.len();
        match parent {
            Some(p) if flags.is_child() => {
                window.parent = p;
                window.root = self.windows[p].root;
            }
            _ => self.focused.push(index),
        }
        self.windows.push(window);
        self.window_ids.set_handle(id, index);
        debug!(target: "frameui::window", name, id = id.raw(), index, child = flags.is_child(), "created window");
        index
    }

    fn draw_title_bar(&mut self, index: usize, open: Option<&mut bool>) {
        let style = self.style;
        let window = &self.windows[index];
        let (id, pos, size, fg) = (window.id, window.pos, window.size, window.fg_layer);
        let title_color = if id == self.active_window_id {
            UiColor::TitleActive
        } else if window.collapsed {
            UiColor::TitleBgCollapsed
        } else {
            UiColor::TitleBg
        };
        let title_color = self.colors[title_color];
        self.draw_list.add_rect_filled(fg, pos, vec2(pos.x + size.x, pos.y + window.title_bar_height), title_color);

        let title = find_rendered_text_end(&window.name);
        let text_size = calculate_text_size(self.font.as_ref(), title, 0.0);
        let text_pos = vec2(pos.x + size.x / 2.0 - text_size.x / 2.0, pos.y + style.title_padding);
        let text_color = self.colors[UiColor::Text];
        self.draw_list.add_text(fg, self.font.as_ref(), text_pos, text_color, title, 0.0);

        let mut slot = 0;
        if let Some(open) = open {
            let center = self.windows[index].title_button_center(slot, style.item_spacing.x);
            slot += 1;
            let state = self.title_button(close_button_id(id), center);
            let color = if state.hovered { rgba(1.0, 0.0, 0.0, 1.0) } else { rgba(0.5, 0.0, 0.0, 1.0) };
            self.draw_list.add_circle_filled(fg, center, TITLE_BUTTON_RADIUS, color, 12);
            if state.pressed {
                *open = false;
            }
        }

        if self.windows[index].flags.is_collapsible() {
            let center = self.windows[index].title_button_center(slot, style.item_spacing.x);
            let state = self.title_button(collapse_button_id(id), center);
            let color = if state.hovered { rgba(1.0, 1.0, 0.0, 1.0) } else { rgba(0.5, 0.5, 0.0, 1.0) };
            self.draw_list.add_circle_filled(fg, center, TITLE_BUTTON_RADIUS, color, 12);
            if state.pressed {
                let window = &mut self.windows[index];
                window.collapsed = !window.collapsed;
                if !window.collapsed {
                    window.size = window.full_size;
                    if window.flags.is_auto_sizing() {
                        window.hide_frames = 2;
                    }
                }
            }
        }
    }

    fn title_button(&mut self, id: Id, center: Vec2f) -> ButtonState {
        let hoverable = self.is_item_hoverable_circle(center, TITLE_BUTTON_RADIUS, id);
        self.item_behavior(id, hoverable)
    }

    /// Begins a top-level window. Returns `false` when the window is collapsed; in that case
    /// the window is already closed and [`Context::end_window`] must not be called.
    ///
    /// Passing `open` adds a close button that clears the flag when clicked.
    pub fn begin_window(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        let flags = flags - WindowFlags::CHILD_WINDOW - WindowFlags::TOOLTIP;
        let shown = self.begin_window_ex(name, open, flags);
        if shown {
            self.current_window_mut().layout.default_row();
        } else {
            self.end_window();
        }
        shown
    }

    /// Ends the window opened by [`Context::begin_window`]: measures content, draws the frame,
    /// scrollbars and resize grips, and applies any resize or scrollbar drag.
    pub fn end_window(&mut self) {
        let Some(index) = self.current_window else { panic!("end_window called without a matching begin_window") };
        assert!(!self.windows[index].flags.is_child(), "end_window called on a child window; use end_child");
        let style = self.style;

        let window = &mut self.windows[index];
        // a collapsed window only drew its title bar and pushed no clip rect
        if window.collapsed {
            self.current_window = None;
            self.id_stack.pop();
            return;
        }

        window.update_scroll_extents(vec2(style.window_horizontal_padding, style.window_vertical_padding), style.scrollbar_size);
        let title_bar_height = window.title_bar_height;

        if window.flags.is_auto_sizing() {
            window.clamp_size();
            let bg_rect = Rect::from_pos_size(vec2(window.pos.x, window.pos.y + title_bar_height), vec2(window.size.x, window.size.y - title_bar_height));
            window.size = vec2(window.content_size.x + 2.0 * style.window_horizontal_padding, title_bar_height + window.content_size.y + style.window_vertical_padding);
            window.clamp_size();
            window.outer_rect = Rect::from_pos_size(window.pos, window.size);
            window.outer_rect_clipped = window.outer_rect;
            window.full_size = window.size;
            let bg = window.bg_layer;
            self.draw_list.pop_clip_rect();
            let color = self.colors[UiColor::WindowBg];
            self.draw_list.add_rect_filled(bg, bg_rect.min, bg_rect.max, color);
        } else {
            window.clamp_size();
            let bg_rect = Rect::from_pos_size(vec2(window.pos.x, window.pos.y + title_bar_height), vec2(window.size.x, window.size.y - title_bar_height));
            let bg = window.bg_layer;
            self.draw_list.pop_clip_rect();
            let color = self.colors[UiColor::WindowBg];
            self.draw_list.add_rect_filled(bg, bg_rect.min, bg_rect.max, color);

            self.window_scrollbars(index);
            if self.windows[index].flags.is_resizable() {
                self.resize_grips(index);
            }

            let window = &self.windows[index];
            let (fg, outer) = (window.fg_layer, window.outer_rect);
            let border = self.colors[UiColor::WindowBorder];
            self.draw_list.add_rect(fg, outer.min, outer.max, border, 1.0);

            self.drag_window_controls(index);
            let window = &mut self.windows[index];
            window.full_size = window.size;
        }

        self.current_window = None;
        self.id_stack.pop();
    }

    /// Runs `f` inside a top-level window. Returns `false` if the window was collapsed.
    pub fn window<F: FnOnce(&mut Self)>(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags, f: F) -> bool {
        if !self.begin_window(name, open, flags) {
            return false;
        }
        f(self);
        self.end_window();
        true
    }

    fn window_scrollbars(&mut self, index: usize) {
        let window = &self.windows[index];
        let (id, sx, sy) = (window.id, window.scrollbar_x, window.scrollbar_y);
        if sy {
            self.render_scrollbar(index, vertical_scroll_id(id), ScrollAxis::Vertical);
        }
        if sx {
            self.render_scrollbar(index, horizontal_scroll_id(id), ScrollAxis::Horizontal);
        }
    }

    fn resize_grips(&mut self, index: usize) {
        let window = &self.windows[index];
        let (id, fg, outer) = (window.id, window.fg_layer, window.outer_rect);
        let (tl, br, tr, bl) = (outer.min, outer.max, outer.top_right(), outer.bottom_left());
        for grip in ResizeGrip::ALL {
            let grip_id = grip.id(id);
            let rect = self.windows[index].grip_rect(grip);
            self.button_behavior(&rect, grip_id);

            let active = self.active_id == grip_id;
            let hovered = self.hovered_id == grip_id;
            let shade = if active {
                Some(0.99)
            } else if hovered {
                Some(0.66)
            } else {
                None
            };
            if active || hovered {
                self.io.set_mouse_cursor(grip.cursor());
            }
            match grip {
                ResizeGrip::Corner => {
                    let color = rgba(shade.unwrap_or(0.33), 0.02, 0.10, 1.0);
                    self.draw_list.add_triangle_filled(fg, br, vec2(br.x, br.y - 15.0), vec2(br.x - 15.0, br.y), color);
                }
                _ => {
                    let Some(shade) = shade else { continue };
                    let (a, b) = match grip {
                        ResizeGrip::East => (tr, br),
                        ResizeGrip::West => (tl, bl),
                        ResizeGrip::North => (tl, tr),
                        _ => (bl, br),
                    };
                    self.draw_list.add_line(fg, a, b, rgba(shade, 0.02, 0.10, 1.0), 2.0);
                }
            }
        }
    }

    /// Applies an in-progress grip resize or scrollbar drag owned by window `index`.
    fn drag_window_controls(&mut self, index: usize) {
        if !self.io.is_mouse_dragging(MouseButton::Left, 2.0) {
            return;
        }
        let mouse = self.io.mouse_pos();
        let id = self.windows[index].id;

        if let Some(grip) = ResizeGrip::ALL.into_iter().find(|g| self.active_id == g.id(id)) {
            self.sizing_window = Some(index);
            self.windows[index].resize_to(grip, mouse);
        } else if self.active_id == vertical_scroll_id(id) {
            self.scrolling_window = Some(index);
            let window = &self.windows[index];
            if mouse.y > window.pos.y && mouse.y < window.pos.y + window.size.y {
                self.drag_scrollbar(index, ScrollAxis::Vertical);
            }
        } else if self.active_id == horizontal_scroll_id(id) {
            self.scrolling_window = Some(index);
            let window = &self.windows[index];
            if mouse.x > window.pos.x && mouse.x < window.pos.x + window.size.x {
                self.drag_scrollbar(index, ScrollAxis::Horizontal);
            }
        }
    }

    fn drag_scrollbar(&mut self, index: usize, axis: ScrollAxis) {
        let delta = self.io.mouse_drag_delta(MouseButton::Left, 1.0);
        let window = &mut self.windows[index];
        match axis {
            ScrollAxis::Vertical => window.scroll.y = drag_scroll(window.scroll.y, delta.y, window.content_size.y, window.size.y, window.scroll_max.y),
            ScrollAxis::Horizontal => window.scroll.x = drag_scroll(window.scroll.x, delta.x, window.content_size.x, window.size.x, window.scroll_max.x),
        }
        self.io.reset_mouse_drag_delta(MouseButton::Left);
    }

    /// Begins a scrolling child region sized by the current layout row (200 pixels tall by default).
    /// [`Context::end_child`] must be called whatever this returns.
    pub fn begin_child(&mut self, name: &str) -> bool {
        assert!(self.current_window.is_some(), "begin_child called outside of a window");
        let size = self.calculate_item_size(200.0);
        self.set_next_window_size(size, Condition::ALWAYS);
        let flags = WindowFlags::CHILD_WINDOW | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_RESIZE | WindowFlags::NO_COLLAPSE | WindowFlags::NO_MOVE;
        let shown = self.begin_window_ex(name, None, flags);
        let window = self.current_window_mut();
        window.min_size = min_vec2(window.min_size, size);
        if shown {
            window.layout.default_row();
        }
        shown
    }

    /// Ends a child region and advances the parent layout past it.
    pub fn end_child(&mut self) {
        let Some(index) = self.current_window else { panic!("end_child called without a matching begin_child") };
        assert!(self.windows[index].flags.is_child(), "end_child called on a top-level window");
        let style = self.style;

        let window = &mut self.windows[index];
        window.update_scroll_extents(vec2(style.window_horizontal_padding, style.window_vertical_padding), style.scrollbar_size);
        window.clamp_size();
        let (parent, outer, bg) = (window.parent, window.outer_rect, window.bg_layer);
        let bg_rect = outer.clip(&self.windows[parent].outer_rect);
        self.draw_list.pop_clip_rect();
        let color = self.colors[UiColor::ChildBg];
        self.draw_list.add_rect_filled(bg, bg_rect.min, bg_rect.max, color);

        self.window_scrollbars(index);
        let id = self.windows[index].id;
        if self.io.is_mouse_dragging(MouseButton::Left, 2.0) {
            if self.active_id == vertical_scroll_id(id) {
                self.scrolling_window = Some(index);
                self.next_hovered_id = self.active_id;
                self.drag_scrollbar(index, ScrollAxis::Vertical);
            } else if self.active_id == horizontal_scroll_id(id) {
                self.scrolling_window = Some(index);
                self.next_hovered_id = self.active_id;
                self.drag_scrollbar(index, ScrollAxis::Horizontal);
            }
        }

        let window = &mut self.windows[index];
        window.full_size = window.size;
        let size = window.size;
        self.id_stack.pop();
        self.current_window = Some(parent);
        self.advance_cursor(size.x, size.y);
    }

    /// Runs `f` inside a child region.
    pub fn child<F: FnOnce(&mut Self)>(&mut self, name: &str, f: F) {
        if self.begin_child(name) {
            f(self);
        }
        self.end_child();
    }

    /// Begins the tooltip window at the mouse position. It is sized to its content and drawn above every window.
    pub fn begin_tooltip(&mut self) {
        let style = self.style;
        let mouse = self.io.mouse_pos();
        let index = self.tooltip_window;
        let window = &mut self.windows[index];
        window.flags = WindowFlags::TOOLTIP
            | WindowFlags::NO_TITLE_BAR
            | WindowFlags::NO_RESIZE
            | WindowFlags::NO_COLLAPSE
            | WindowFlags::AUTO_SIZE
            | WindowFlags::NO_MOVE;
        window.active = true;
        window.visible = true;
        window.title_bar_height = 0.0;
        window.pos = mouse;
        window.layout.reset(vec2(mouse.x + style.window_horizontal_padding, mouse.y + style.window_vertical_padding));
        window.layout.default_row();
        let clip = Rect::from_pos_size(window.pos, window.size);
        self.draw_list.push_clip_rect(clip, false);

        self.tooltip_parent = self.current_window;
        self.current_window = Some(index);
    }

    /// Ends the tooltip window.
    pub fn end_tooltip(&mut self) {
        let style = self.style;
        let index = self.tooltip_window;
        assert!(self.current_window == Some(index), "end_tooltip called without a matching begin_tooltip");
        let window = &mut self.windows[index];
        let (start, max) = (window.layout.cursor_start, window.layout.cursor_max);
        window.content_size = vec2(style.window_horizontal_padding + max.x - start.x, style.window_vertical_padding + max.y - start.y);
        window.size = vec2(window.content_size.x + style.window_horizontal_padding, window.content_size.y + style.window_vertical_padding);
        window.outer_rect = Rect::from_pos_size(window.pos, window.size);
        window.outer_rect_clipped = window.outer_rect;
        let (bg, outer) = (window.bg_layer, window.outer_rect);
        self.draw_list.pop_clip_rect();
        let color = self.colors[UiColor::WindowBg];
        self.draw_list.add_rect_filled(bg, outer.min, outer.max, color);
        self.current_window = self.tooltip_parent.take();
    }

    /// Runs `f` inside the tooltip window.
    pub fn tooltip<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.begin_tooltip();
        f(self);
        self.end_tooltip();
    }

    // ---------------------------------------------------------------------
    // window queries and overrides
    // ---------------------------------------------------------------------

    /// Position the next `begin_window` will use, subject to `cond`.
    pub fn set_next_window_pos(&mut self, pos: Vec2f, cond: Condition) { self.next_window.pos = Some((pos, cond)) }

    /// Size the next `begin_window` will use, subject to `cond`.
    pub fn set_next_window_size(&mut self, size: Vec2f, cond: Condition) { self.next_window.size = Some((size, cond)) }

    /// Collapse state the next `begin_window` will use, subject to `cond`.
    pub fn set_next_window_collapse(&mut self, collapsed: bool, cond: Condition) { self.next_window.collapsed = Some((collapsed, cond)) }

    /// Position of the current window.
    pub fn window_pos(&self) -> Vec2f { self.current_window().pos }

    /// Size of the current window.
    pub fn window_size(&self) -> Vec2f { self.current_window().size }

    /// Scroll offset of the current window.
    pub fn window_scroll(&self) -> Vec2f { self.current_window().scroll }

    /// Largest scroll offset of the current window, as measured last frame.
    pub fn window_scroll_max(&self) -> Vec2f { self.current_window().scroll_max }

    /// Moves the current window; takes effect next frame.
    pub fn set_window_pos(&mut self, pos: Vec2f) { self.current_window_mut().pos = pos }

    /// Resizes the current window within its size limits; takes effect next frame.
    pub fn set_window_size(&mut self, size: Vec2f) {
        let window = self.current_window_mut();
        window.size = size;
        window.clamp_size();
    }

    /// Scrolls the current window. Each axis only changes if the value is within its scroll range.
    pub fn set_window_scroll(&mut self, scroll: Vec2f) {
        let window = self.current_window_mut();
        if scroll.x >= 0.0 && scroll.x <= window.scroll_max.x {
            window.scroll.x = scroll.x;
        }
        if scroll.y >= 0.0 && scroll.y <= window.scroll_max.y {
            window.scroll.y = scroll.y;
        }
    }

    // ---------------------------------------------------------------------
    // items
    // ---------------------------------------------------------------------

    /// Returns `true` if the item `id` covering `rect` may take the hover this frame.
    pub fn is_item_hoverable(&self, rect: &Rect, id: Id) -> bool { self.item_claimable(id) && self.io.is_mouse_hovering_rect(rect) }

    /// Circular variant of [`Context::is_item_hoverable`].
    pub fn is_item_hoverable_circle(&self, center: Vec2f, radius: f32, id: Id) -> bool {
        self.item_claimable(id) && circle_contains(center, radius, self.io.mouse_pos())
    }

    fn item_claimable(&self, id: Id) -> bool {
        self.hovered_window.is_some()
            && self.hovered_window == self.current_window
            && (self.hovered_id.is_none() || self.hovered_id == id)
            && (self.active_id.is_none() || self.active_id == id)
    }

    /// Returns `true` if the last item was hovered.
    pub fn was_last_item_hovered(&self) -> bool { self.prev_item.hovered }

    /// Returns `true` if the last item owned the pointer.
    pub fn was_last_item_active(&self) -> bool { self.prev_item.active }

    /// Advances `clipper` by one step; see [`Clipper`].
    pub fn step_clipper(&mut self, clipper: &mut Clipper) -> bool {
        if clipper.item_count == 0 {
            return false;
        }
        match clipper.step {
            0 => {
                clipper.display_start = 0;
                clipper.display_end = 1;
                clipper.start_pos_y = self.get_cursor_pos().y;
                clipper.step = 1;
                true
            }
            1 => {
                clipper.step = 2;
                clipper.item_height = self.get_cursor_pos().y - clipper.start_pos_y;
                if clipper.item_height <= 0.0 {
                    clipper.display_start = 1;
                    clipper.display_end = clipper.item_count;
                    return true;
                }

                let (pos, size) = (self.window_pos(), self.window_size());
                let h = clipper.item_height;
                let mut start = 0;
                if clipper.start_pos_y < pos.y {
                    start = ((pos.y - clipper.start_pos_y) / h) as usize;
                }
                let end = (start + (size.y / h) as usize + 1).min(clipper.item_count) + 1;
                start = start.saturating_sub(1);
                clipper.display_end = end.min(clipper.item_count);

                if start > 0 {
                    self.skip_rows(start as f32 * h);
                }
                clipper.display_start = start + 1;
                true
            }
            _ => {
                if clipper.display_end < clipper.item_count {
                    self.skip_rows((clipper.item_count - clipper.display_end) as f32 * clipper.item_height);
                }
                clipper.finish();
                false
            }
        }
    }

    /// Advances the cursor by `height` pixels of rows without drawing them.
    fn skip_rows(&mut self, height: f32) {
        let spacing_y = self.style.item_spacing.y;
        let columns = self.current_window().layout.row.columns.max(1);
        for _ in 0..columns {
            self.advance_cursor(0.0, height - spacing_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless() -> Context {
        let mut ctx = Context::new();
        ctx.io.set_viewport_size(vec2(1280.0, 1024.0));
        ctx
    }

    fn tall_window(ctx: &mut Context, name: &str, rows: usize) {
        ctx.begin_window(name, None, WindowFlags::NONE);
        for _ in 0..rows {
            ctx.dummy(100.0, 20.0);
        }
        ctx.end_window();
    }

    #[test]
    fn window_created_once_with_defaults_and_keeps_scroll() {
        let mut ctx = headless();
        let mut first_id = Id::NONE;
        ctx.frame(|ctx| {
            assert!(ctx.begin_window("A", None, WindowFlags::NONE));
            first_id = ctx.window_id();
            assert_eq!((ctx.window_pos().x, ctx.window_pos().y), (200.0, 200.0));
            assert_eq!((ctx.window_size().x, ctx.window_size().y), (500.0, 500.0));
            for _ in 0..100 {
                ctx.dummy(100.0, 20.0);
            }
            ctx.end_window();
        });
        assert_eq!(ctx.window_count(), 1);

        ctx.frame(|ctx| {
            ctx.begin_window("A", None, WindowFlags::NONE);
            assert!(ctx.window_scroll_max().y > 50.0);
            ctx.set_window_scroll(vec2(0.0, 50.0));
            for _ in 0..100 {
                ctx.dummy(100.0, 20.0);
            }
            ctx.end_window();
        });

        ctx.frame(|ctx| {
            ctx.begin_window("A", None, WindowFlags::NONE);
            assert_eq!(ctx.window_id(), first_id);
            assert_eq!(ctx.window_scroll().y, 50.0);
            ctx.end_window();
        });
        assert_eq!(ctx.window_count(), 1);
    }

    #[test]
    fn south_resize_stops_at_min_size() {
        let mut ctx = headless();
        let body = |ctx: &mut Context| tall_window(ctx, "R", 0);

        ctx.io.add_mouse_pos(300.0, 700.0);
        ctx.frame(body);
        ctx.io.add_mouse_button(MouseButton::Left, true);
        ctx.frame(body);
        let south = ResizeGrip::South.id(hash_str("R", 0));
        assert_eq!(ctx.active_id(), south);

        ctx.io.add_mouse_pos(300.0, 300.0);
        ctx.frame(body);
        ctx.frame(|ctx| {
            ctx.begin_window("R", None, WindowFlags::NONE);
            assert_eq!(ctx.window_size().y, 200.0);
            assert_eq!(ctx.window_pos().y, 200.0);
            ctx.end_window();
        });

        ctx.io.add_mouse_button(MouseButton::Left, false);
        ctx.frame(body);
        ctx.frame(body);
        assert!(ctx.active_id().is_none());
    }

    #[test]
    fn click_brings_window_to_front() {
        let mut ctx = headless();
        let body = |ctx: &mut Context| {
            ctx.set_next_window_pos(vec2(0.0, 0.0), Condition::ONCE);
            ctx.set_next_window_size(vec2(300.0, 300.0), Condition::ONCE);
            tall_window(ctx, "A", 1);
            ctx.set_next_window_pos(vec2(600.0, 0.0), Condition::ONCE);
            ctx.set_next_window_size(vec2(300.0, 300.0), Condition::ONCE);
            tall_window(ctx, "B", 1);
        };
        ctx.io.add_mouse_pos(100.0, 150.0);
        ctx.frame(body);
        let names = |ctx: &Context| ctx.focused.iter().map(|i| ctx.windows[*i].name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&ctx), vec!["A", "B"]);
        assert_eq!(ctx.hovered_window.map(|i| ctx.windows[i].name.as_str()), Some("A"));

        ctx.io.add_mouse_button(MouseButton::Left, true);
        ctx.frame(body);
        assert_eq!(names(&ctx), vec!["B", "A"]);
        assert_eq!(ctx.active_window_id, hash_str("A", 0));
        assert!(ctx.moving_window.is_none());
        assert!(ctx.io.want_capture_mouse);
        for (order, index) in ctx.focused.iter().enumerate() {
            assert_eq!(ctx.windows[*index].focus_order, order);
        }
    }

    #[test]
    fn title_drag_moves_window() {
        let mut ctx = headless();
        let body = |ctx: &mut Context| tall_window(ctx, "M", 0);
        ctx.io.add_mouse_pos(300.0, 210.0);
        ctx.frame(body);
        ctx.io.add_mouse_button(MouseButton::Left, true);
        ctx.frame(body);
        assert!(ctx.moving_window.is_some());
        ctx.io.add_mouse_pos(350.0, 260.0);
        ctx.frame(body);
        ctx.frame(|ctx| {
            ctx.begin_window("M", None, WindowFlags::NONE);
            assert_eq!((ctx.window_pos().x, ctx.window_pos().y), (250.0, 250.0));
            ctx.end_window();
        });
    }

    #[test]
    fn wheel_scroll_is_clamped() {
        let mut ctx = headless();
        let body = |ctx: &mut Context| tall_window(ctx, "S", 100);
        ctx.io.add_mouse_pos(400.0, 400.0);
        ctx.frame(body);
        ctx.io.add_mouse_wheel(0.0, -1000.0);
        ctx.frame(body);
        let scroll = |ctx: &mut Context| {
            let mut seen = (0.0, 0.0);
            ctx.frame(|ctx| {
                ctx.begin_window("S", None, WindowFlags::NONE);
                seen = (ctx.window_scroll().y, ctx.window_scroll_max().y);
                for _ in 0..100 {
                    ctx.dummy(100.0, 20.0);
                }
                ctx.end_window();
            });
            seen
        };
        let (y, max) = scroll(&mut ctx);
        assert!(y > 0.0);
        assert_eq!(y, max);

        ctx.io.add_mouse_wheel(0.0, 1000.0);
        ctx.frame(body);
        assert_eq!(scroll(&mut ctx).0, 0.0);
    }

    #[test]
    fn child_window_advances_parent_layout() {
        let mut ctx = headless();
        ctx.frame(|ctx| {
            ctx.begin_window("P", None, WindowFlags::NONE);
            let parent_id = ctx.window_id();
            let before = ctx.get_cursor_pos();
            assert!(ctx.begin_child("C"));
            assert_ne!(ctx.window_id(), hash_str("C", 0));
            assert_eq!((ctx.window_pos().x, ctx.window_pos().y), (before.x, before.y));
            assert_eq!((ctx.window_size().x, ctx.window_size().y), (300.0, 200.0));
            ctx.dummy(10.0, 10.0);
            ctx.end_child();
            assert_eq!(ctx.window_id(), parent_id);
            assert_eq!(ctx.get_cursor_pos().y, before.y + 200.0 + ctx.style.item_spacing.y);
            ctx.end_window();
        });
        assert_eq!(ctx.window_count(), 2);
        assert_eq!(ctx.focused.len(), 1);
        assert_eq!(ctx.display_order.len(), 2);
    }

    #[test]
    fn tooltip_restores_current_window_and_draws_last() {
        let mut ctx = headless();
        ctx.io.add_mouse_pos(50.0, 60.0);
        ctx.frame(|ctx| {
            ctx.begin_window("T", None, WindowFlags::NONE);
            let id = ctx.window_id();
            ctx.tooltip(|ctx| {
                assert_eq!((ctx.window_pos().x, ctx.window_pos().y), (50.0, 60.0));
                ctx.dummy(80.0, 20.0);
            });
            assert_eq!(ctx.window_id(), id);
            ctx.end_window();
        });
        let tooltip = &ctx.windows[ctx.tooltip_window];
        assert_eq!((tooltip.size.x, tooltip.size.y), (90.0, 34.0));
        assert!(!tooltip.active);
        assert!(!ctx.draw_list().layer(tooltip.bg_layer).vertices().is_empty());
        assert_eq!(ctx.window_count(), 1);
    }

    #[test]
    fn clipper_visits_visible_rows_only() {
        let mut ctx = headless();
        let run = |ctx: &mut Context, scroll: Option<f32>| {
            let mut visited = Vec::new();
            let mut end_y = 0.0;
            ctx.frame(|ctx| {
                ctx.begin_window("L", None, WindowFlags::NONE);
                if let Some(y) = scroll {
                    ctx.set_window_scroll(vec2(0.0, y));
                }
                let mut clipper = Clipper::new(1000);
                while ctx.step_clipper(&mut clipper) {
                    for i in clipper.display_start..clipper.display_end {
                        visited.push((i, ctx.get_cursor_pos().y));
                        ctx.dummy(100.0, 20.0);
                    }
                }
                end_y = ctx.get_cursor_pos().y;
                ctx.end_window();
            });
            (visited, end_y)
        };

        let (visited, end_y) = run(&mut ctx, None);
        assert_eq!(visited.len(), 22);
        assert_eq!(visited[1].0, 1);
        assert_eq!(end_y, 238.0 + 24.0 * 1000.0);

        run(&mut ctx, Some(2400.0));
        let (visited, end_y) = run(&mut ctx, None);
        let start_y = 238.0 - 2400.0;
        assert_eq!(visited[1].0, 98);
        assert_eq!(visited[1].1, start_y + 98.0 * 24.0);
        assert_eq!(end_y, start_y + 24.0 * 1000.0);
    }

    /// Scroll and scroll range of `name` as seen at the start of the next frame.
    fn scroll_of(ctx: &mut Context, name: &str, rows: usize) -> (f32, f32) {
        let mut seen = (0.0, 0.0);
        ctx.frame(|ctx| {
            ctx.begin_window(name, None, WindowFlags::NONE);
            seen = (ctx.window_scroll().y, ctx.window_scroll_max().y);
            for _ in 0..rows {
                ctx.dummy(100.0, 20.0);
            }
            ctx.end_window();
        });
        seen
    }

    #[test]
    fn scrollbar_drag_follows_mouse_inside_window_and_clamps() {
        let mut ctx = headless();
        let body = |ctx: &mut Context| tall_window(ctx, "S", 100);
        ctx.io.add_mouse_pos(692.0, 240.0);
        ctx.frame(body);
        ctx.frame(body);
        ctx.io.add_mouse_button(MouseButton::Left, true);
        ctx.frame(body);
        assert_eq!(ctx.active_id(), vertical_scroll_id(hash_str("S", 0)));

        // below the window the handle is held but does not move
        ctx.io.add_mouse_pos(692.0, 1000.0);
        ctx.frame(body);
        assert_eq!(scroll_of(&mut ctx, "S", 100).0, 0.0);

        // 450 pixels of handle travel is far more than the content allows
        ctx.io.add_mouse_pos(692.0, 690.0);
        ctx.frame(body);
        let (y, max) = scroll_of(&mut ctx, "S", 100);
        assert!(max > 0.0);
        assert_eq!(y, max);
        assert!(ctx.scrolling_window.is_some());

        ctx.io.add_mouse_button(MouseButton::Left, false);
        ctx.frame(body);
        assert!(ctx.scrolling_window.is_none());
    }

    #[test]
    fn wheel_is_ignored_while_resizing() {
        let mut ctx = headless();
        let body = |ctx: &mut Context| tall_window(ctx, "S", 100);
        ctx.io.add_mouse_pos(300.0, 700.0);
        ctx.frame(body);
        ctx.frame(body);
        ctx.io.add_mouse_button(MouseButton::Left, true);
        ctx.frame(body);

        ctx.io.add_mouse_pos(300.0, 650.0);
        ctx.io.add_mouse_wheel(0.0, -5.0);
        ctx.frame(body);
        assert!(ctx.sizing_window.is_some());
        assert_eq!(scroll_of(&mut ctx, "S", 100).0, 0.0);

        ctx.io.add_mouse_pos(300.0, 500.0);
        ctx.io.add_mouse_button(MouseButton::Left, false);
        ctx.io.add_mouse_wheel(0.0, -5.0);
        ctx.frame(body);
        assert!(ctx.sizing_window.is_none());
        assert_eq!(scroll_of(&mut ctx, "S", 100).0, 50.0);
    }

    #[test]
    fn auto_size_pads_content_on_both_sides() {
        let mut ctx = headless();
        let body = |ctx: &mut Context| {
            ctx.begin_window("A", None, WindowFlags::AUTO_SIZE);
            ctx.dummy(300.0, 250.0);
            ctx.end_window();
        };
        ctx.frame(body);
        ctx.frame(|ctx| {
            ctx.begin_window("A", None, WindowFlags::AUTO_SIZE);
            assert_eq!((ctx.window_size().x, ctx.window_size().y), (315.0, 297.0));
            ctx.end_window();
        });
    }

    #[test]
    fn color_stack_restores() {
        let mut ctx = headless();
        let original = ctx.colors[UiColor::Button];
        ctx.push_color(UiColor::Button, rgba(0.0, 1.0, 0.0, 1.0));
        ctx.push_color(UiColor::Button, rgba(0.0, 0.0, 1.0, 1.0));
        assert_eq!(ctx.colors[UiColor::Button].z, 1.0);
        ctx.pop_color(2);
        assert_eq!(ctx.colors[UiColor::Button].x, original.x);
    }

    #[test]
    #[should_panic]
    fn end_window_without_begin_panics() {
        let mut ctx = headless();
        ctx.new_frame();
        ctx.end_window();
    }

    #[test]
    #[should_panic]
    fn nested_root_window_panics() {
        let mut ctx = headless();
        ctx.new_frame();
        ctx.begin_window("outer", None, WindowFlags::NONE);
        ctx.begin_window("inner", None, WindowFlags::NONE);
    }
}
