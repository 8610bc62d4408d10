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
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
#![deny(missing_docs)]
//! `frameui` is an immediate-mode GUI runtime in the spirit of [rxi/microui](https://github.com/rxi/microui).
//! Callers re-declare windows and widgets every frame; the context rebuilds identity, hit-testing,
//! layout and a layered, renderer-agnostic draw command stream from those calls.

use std::ops::{Index, IndexMut};

mod context;
mod draw;
mod error;
mod geometry;
mod idmngr;
mod input;
mod layout;
mod scrollbar;
mod storage;
mod widgets;
mod window;

pub use context::{Clipper, Context};
pub use draw::*;
pub use error::UiError;
pub use geometry::*;
pub use idmngr::{hash_data, hash_str, Id, IdStack};
pub use input::*;
pub use layout::RowType;
pub use rs_math3d::{color4b, Color4b, Vec2f, Vec4f};
pub use storage::{Storage, StorageValue};
pub use widgets::ButtonState;

use bitflags::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options that control how a window behaves.
    pub struct WindowFlags : u32 {
        /// Tooltip window following the mouse.
        const TOOLTIP = 64;
        /// Window nested inside another window's content region.
        const CHILD_WINDOW = 32;
        /// Size follows the content measured during the previous frame.
        const AUTO_SIZE = 16;
        /// Hides the collapse toggle.
        const NO_COLLAPSE = 8;
        /// Prevents dragging the window by its title bar.
        const NO_MOVE = 4;
        /// Disables the resize grips.
        const NO_RESIZE = 2;
        /// Hides the title bar.
        const NO_TITLE_BAR = 1;
        /// No special options.
        const NONE = 0;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Gate applied to "next window" overrides.
    pub struct Condition : u32 {
        /// Apply only the first time the window sees the override.
        const ONCE = 2;
        /// Apply every time.
        const ALWAYS = 1;
        /// Never apply.
        const NONE = 0;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    /// Categories of verbose trace output emitted by the context.
    pub struct DebugLogFlags : u32 {
        /// Transitions of the committed active id.
        const EVENT_ACTIVE_ID = 2;
        /// Every input event drained from the queue.
        const EVENT_IO = 1;
    }
}

impl WindowFlags {
    /// Returns `true` if the window draws a title bar.
    pub fn has_title_bar(&self) -> bool { !self.intersects(Self::NO_TITLE_BAR) }
    /// Returns `true` if the resize grips are active.
    pub fn is_resizable(&self) -> bool { !self.intersects(Self::NO_RESIZE) }
    /// Returns `true` if the window can be dragged.
    pub fn is_movable(&self) -> bool { !self.intersects(Self::NO_MOVE) }
    /// Returns `true` if the collapse toggle is shown.
    pub fn is_collapsible(&self) -> bool { !self.intersects(Self::NO_COLLAPSE) }
    /// Returns `true` if the window sizes itself to its content.
    pub fn is_auto_sizing(&self) -> bool { self.intersects(Self::AUTO_SIZE) }
    /// Returns `true` for child windows.
    pub fn is_child(&self) -> bool { self.intersects(Self::CHILD_WINDOW) }
    /// Returns `true` for the tooltip window.
    pub fn is_tooltip(&self) -> bool { self.intersects(Self::TOOLTIP) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
/// Identifiers for each entry of the [`ColorScheme`].
pub enum UiColor {
    /// Title bar of the focused window.
    TitleActive = 0,
    /// Title bar of unfocused windows.
    TitleBg,
    /// Title bar of collapsed windows.
    TitleBgCollapsed,
    /// Window body.
    WindowBg,
    /// Window outline.
    WindowBorder,
    /// Child window body.
    ChildBg,
    /// Idle button.
    Button,
    /// Hovered button.
    ButtonHovered,
    /// Pressed button.
    ButtonActive,
    /// Text.
    Text,
    /// Filled part of progress bars.
    ProgressBar,
    /// Check marks and radio dots.
    CheckMark,
    /// Idle widget frame.
    FrameBg,
    /// Hovered widget frame.
    FrameBgHovered,
    /// Pressed widget frame.
    FrameBgActive,
    /// Idle collapsing header.
    Header,
    /// Hovered collapsing header.
    HeaderHovered,
    /// Pressed collapsing header.
    HeaderActive,
    /// Scrollbar track.
    ScrollbarBg,
    /// Idle scrollbar handle.
    ScrollbarHandle,
    /// Scrollbar outline.
    ScrollbarFrame,
    /// Dragged scrollbar handle.
    ScrollbarActive,
    /// Hovered scrollbar handle.
    ScrollbarHovered,
}

impl UiColor {
    /// Number of entries in a [`ColorScheme`].
    pub const COUNT: usize = 23;
}

#[derive(Copy, Clone, Debug)]
/// Flat colour table indexed by [`UiColor`], stored as floating point RGBA.
pub struct ColorScheme {
    /// Colour entries.
    pub colors: [Vec4f; UiColor::COUNT],
}

impl Index<UiColor> for ColorScheme {
    type Output = Vec4f;

    fn index(&self, c: UiColor) -> &Vec4f { &self.colors[c as usize] }
}

impl IndexMut<UiColor> for ColorScheme {
    fn index_mut(&mut self, c: UiColor) -> &mut Vec4f { &mut self.colors[c as usize] }
}

impl Default for ColorScheme {
    fn default() -> Self {
        let button_hovered = rgba(0.61, 0.02, 0.10, 1.00);
        let button_active = rgba(0.87, 0.02, 0.10, 1.00);
        Self {
            colors: [
                rgba(0.33, 0.02, 0.10, 1.00),
                rgba(0.04, 0.04, 0.04, 1.00),
                rgba(0.04, 0.04, 0.04, 1.00),
                rgba(0.10, 0.10, 0.10, 0.78),
                rgba(0.33, 0.02, 0.10, 1.00),
                rgba(0.10, 0.10, 0.10, 0.78),
                rgba(0.51, 0.02, 0.10, 1.00),
                button_hovered,
                button_active,
                rgba(1.00, 1.00, 1.00, 1.00),
                rgba(0.90, 0.70, 0.00, 1.00),
                rgba(0.87, 0.02, 0.10, 1.00),
                rgba(0.23, 0.02, 0.10, 1.00),
                rgba(0.26, 0.59, 0.98, 0.40),
                rgba(0.26, 0.59, 0.98, 0.67),
                rgba(0.51, 0.02, 0.10, 1.00),
                rgba(0.26, 0.59, 0.98, 0.80),
                rgba(0.26, 0.59, 0.98, 1.00),
                rgba(0.05, 0.05, 0.05, 0.85),
                rgba(0.51, 0.02, 0.10, 1.00),
                rgba(0.00, 0.00, 0.00, 0.00),
                button_active,
                button_hovered,
            ],
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Collection of metrics that drive window and widget appearance.
pub struct Style {
    /// Vertical padding above and below the title text.
    pub title_padding: f32,
    /// Pixel height of the font used for all text.
    pub font_size: f32,
    /// Horizontal padding between the window edge and its content.
    pub window_horizontal_padding: f32,
    /// Vertical padding between the title bar and the content.
    pub window_vertical_padding: f32,
    /// Indentation applied per tree level.
    pub indent_size: f32,
    /// Thickness of window scrollbars.
    pub scrollbar_size: f32,
    /// Size of slider grabs.
    pub slider_size: f32,
    /// Spacing between consecutive items.
    pub item_spacing: Vec2f,
    /// Spacing between the elements of a composite widget (box and label of a checkbox).
    pub inner_spacing: Vec2f,
    /// Padding inside framed widgets.
    pub frame_padding: Vec2f,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            title_padding: 10.0,
            font_size: 13.0,
            window_horizontal_padding: 5.0,
            window_vertical_padding: 5.0,
            indent_size: 15.0,
            scrollbar_size: 10.0,
            slider_size: 12.0,
            item_spacing: vec2(8.0, 4.0),
            inner_spacing: vec2(4.0, 4.0),
            frame_padding: vec2(4.0, 4.0),
        }
    }
}

impl Style {
    /// Height of the title bar for windows that draw one.
    pub fn title_bar_height(&self) -> f32 { self.font_size + 2.0 * self.title_padding }

    /// Default height of a framed single-line widget.
    pub fn frame_height(&self) -> f32 { self.font_size + 2.0 * self.frame_padding.y }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// Opaque handle to a backend-owned texture; the runtime never interprets its bits.
pub struct TextureId(u64);

impl TextureId {
    /// Wraps a backend texture handle.
    pub fn new(raw: u64) -> Self { Self(raw) }

    /// Returns the raw value supplied by the backend.
    pub fn raw(self) -> u64 { self.0 }
}

/// Convenience constructor for [`Vec2f`].
pub fn vec2(x: f32, y: f32) -> Vec2f { Vec2f::new(x, y) }

/// Convenience constructor for a floating point RGBA colour.
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Vec4f { Vec4f::new(r, g, b, a) }

/// Packs a floating point colour into the 8-bit vertex format.
pub fn pack_color(c: Vec4f) -> Color4b {
    let q = |v: f32| (v.max(0.0).min(1.0) * 255.0 + 0.5) as u8;
    color4b(q(c.x), q(c.y), q(c.z), q(c.w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_scheme_aliases_scrollbar_states() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme[UiColor::ScrollbarActive].x, scheme[UiColor::ButtonActive].x);
        assert_eq!(scheme[UiColor::ScrollbarHovered].x, scheme[UiColor::ButtonHovered].x);
        assert_eq!(scheme[UiColor::WindowBg].w, 0.78);
    }

    #[test]
    fn pack_color_rounds_and_saturates() {
        let c = pack_color(rgba(1.5, 0.5, 0.0, -1.0));
        assert_eq!((c.x, c.y, c.z, c.w), (255, 128, 0, 0));
    }

    #[test]
    fn default_style_title_height() {
        let style = Style::default();
        assert_eq!(style.title_bar_height(), 33.0);
        assert_eq!(style.frame_height(), 21.0);
    }
}
