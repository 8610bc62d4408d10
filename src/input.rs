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
use tracing::{trace, warn};

use crate::geometry::{floor_vec2, length_sqr};
use crate::{vec2, Rect, UiError, Vec2f};
use bitflags::*;

/// Marker for "no known pointer position".
pub const MOUSE_POS_INVALID: f32 = -f32::MAX;

const FRAMERATE_SAMPLES: usize = 120;

macro_rules! declare_keys {
    ($($name:ident),* $(,)?) => {
        /// Keyboard keys tracked by [`Io`]. Variant names follow the physical key they denote;
        /// the `Mod*` entries are reserved slots fed by platforms that only report modifier state.
        #[allow(missing_docs)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum Key {
            $($name),*
        }

        impl Key {
            /// Every key, indexed by its discriminant.
            pub const ALL: &'static [Key] = &[$(Key::$name),*];
            /// Number of key slots.
            pub const COUNT: usize = Self::ALL.len();
        }
    };
}

declare_keys! {
    None, Tab, LeftArrow, RightArrow, UpArrow, DownArrow, PageUp, PageDown, Home, End, Insert, Delete,
    Backspace, Space, Enter, Escape, LeftCtrl, LeftShift, LeftAlt, LeftSuper, RightCtrl, RightShift,
    RightAlt, RightSuper, Menu,
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
    Apostrophe, Comma, Minus, Period, Slash, Semicolon, Equal, LeftBracket, Backslash, RightBracket,
    GraveAccent, CapsLock, ScrollLock, NumLock, PrintScreen, Pause,
    Keypad0, Keypad1, Keypad2, Keypad3, Keypad4, Keypad5, Keypad6, Keypad7, Keypad8, Keypad9,
    KeypadDecimal, KeypadDivide, KeypadMultiply, KeypadSubtract, KeypadAdd, KeypadEnter, KeypadEqual,
    ModCtrl, ModShift, ModAlt, ModSuper,
}

impl TryFrom<u32> for Key {
    type Error = UiError;

    fn try_from(code: u32) -> Result<Self, Self::Error> { Key::ALL.get(code as usize).copied().ok_or(UiError::UnknownKey(code)) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
/// Mouse buttons tracked by [`Io`].
pub enum MouseButton {
    /// Primary button.
    Left = 0,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
    /// First extra button.
    Extra1,
    /// Second extra button.
    Extra2,
}

impl MouseButton {
    /// Number of tracked buttons.
    pub const COUNT: usize = 5;
    /// Every button, indexed by its discriminant.
    pub const ALL: [MouseButton; 5] = [Self::Left, Self::Right, Self::Middle, Self::Extra1, Self::Extra2];
}

impl TryFrom<u32> for MouseButton {
    type Error = UiError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        MouseButton::ALL.get(index as usize).copied().ok_or(UiError::UnknownMouseButton(index))
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    /// Modifier keys held during the current frame.
    pub struct KeyMods : u32 {
        /// Super / command / windows key.
        const SUPER = 8;
        /// Alt / option key.
        const ALT = 4;
        /// Shift key.
        const SHIFT = 2;
        /// Control key.
        const CTRL = 1;
    }
}

impl KeyMods {
    /// Returns `true` if control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
    /// Returns `true` if alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
    /// Returns `true` if super is held.
    pub fn is_super(&self) -> bool { self.intersects(Self::SUPER) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
/// Pointer shape requested by the UI for the platform layer.
pub enum MouseCursor {
    /// Hide the cursor.
    None,
    /// Default arrow.
    #[default]
    Arrow,
    /// Text caret.
    TextInput,
    /// Four-way move.
    ResizeAll,
    /// Vertical resize.
    ResizeNS,
    /// Horizontal resize.
    ResizeEW,
    /// Diagonal resize (bottom-left to top-right).
    ResizeNESW,
    /// Diagonal resize (top-left to bottom-right).
    ResizeNWSE,
    /// Pointing hand.
    Hand,
    /// Forbidden action.
    NotAllowed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Raw input recorded by the platform layer, consumed once per frame.
pub enum InputEvent {
    /// Pointer moved.
    MousePos {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Wheel scrolled.
    MouseWheel {
        /// Horizontal delta.
        x: f32,
        /// Vertical delta.
        y: f32,
    },
    /// Button changed state.
    MouseButton {
        /// Affected button.
        button: MouseButton,
        /// New state.
        down: bool,
    },
    /// Key changed state.
    Key {
        /// Affected key.
        key: Key,
        /// New state.
        down: bool,
    },
    /// Text codepoint typed.
    Text(u32),
}

#[derive(Copy, Clone, Debug)]
/// Per-key state derived from the event queue.
pub struct KeyData {
    /// Key is held.
    pub down: bool,
    /// Seconds the key has been held, `-1` when up.
    pub down_duration: f32,
    /// `down_duration` of the previous frame.
    pub down_duration_prev: f32,
}

impl Default for KeyData {
    fn default() -> Self { Self { down: false, down_duration: -1.0, down_duration_prev: -1.0 } }
}

#[derive(Copy, Clone, Debug)]
struct MouseButtonData {
    down: bool,
    clicked: bool,
    released: bool,
    clicked_count: u32,
    last_clicked_count: u32,
    clicked_time: f64,
    clicked_pos: Vec2f,
    down_duration: f32,
    down_duration_prev: f32,
    drag_max_distance_sqr: f32,
}

impl Default for MouseButtonData {
    fn default() -> Self {
        Self {
            down: false,
            clicked: false,
            released: false,
            clicked_count: 0,
            last_clicked_count: 0,
            clicked_time: f64::MIN,
            clicked_pos: vec2(0.0, 0.0),
            down_duration: -1.0,
            down_duration_prev: -1.0,
            drag_max_distance_sqr: 0.0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Tunables of the input system.
pub struct IoConfig {
    /// Maximum seconds between two clicks of a double click.
    pub double_click_time: f32,
    /// Maximum pointer travel in pixels between two clicks of a double click.
    pub double_click_max_dist: f32,
    /// Pointer travel in pixels before a held button counts as dragging.
    pub drag_threshold: f32,
    /// Seconds before a held key starts repeating.
    pub key_repeat_delay: f32,
    /// Seconds between repeats of a held key.
    pub key_repeat_rate: f32,
    /// Maps the shortcut modifier to super instead of control.
    pub macos_behaviors: bool,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            double_click_time: 0.3,
            double_click_max_dist: 6.0,
            drag_threshold: 6.0,
            key_repeat_delay: 0.275,
            key_repeat_rate: 0.050,
            macos_behaviors: false,
        }
    }
}

/// Input state shared between the platform layer and the UI.
///
/// Platform glue feeds events through the `add_*` methods at any time; the context drains them
/// at the start of each frame and widgets query the derived state through the `is_*` methods.
#[derive(Clone, Debug)]
pub struct Io {
    /// Input tunables.
    pub config: IoConfig,
    /// Seconds elapsed since the previous frame, set by the caller before each frame.
    pub delta_time: f32,
    /// Framebuffer scale reported by the platform.
    pub framebuffer_scale: Vec2f,
    /// The UI wants mouse input this frame (pointer over a window or a drag in progress).
    pub want_capture_mouse: bool,
    /// The UI wants keyboard input this frame.
    pub want_capture_keyboard: bool,
    /// The UI expects text input this frame.
    pub want_text_input: bool,

    viewport_size: Vec2f,
    viewport_changed: bool,
    cursor: MouseCursor,
    cursor_changed: bool,

    time: f64,
    frame_count: u64,
    framerate: f32,
    framerate_samples: [f32; FRAMERATE_SAMPLES],
    framerate_idx: usize,
    framerate_count: usize,
    framerate_accum: f32,

    events: Vec<InputEvent>,
    chars: Vec<char>,
    pending_surrogate: u16,

    keys: Vec<KeyData>,
    key_mods: KeyMods,

    mouse_pos: Vec2f,
    mouse_pos_prev: Vec2f,
    mouse_delta: Vec2f,
    last_valid_mouse_pos: Vec2f,
    mouse_wheel: f32,
    mouse_wheel_h: f32,
    mouse: [MouseButtonData; MouseButton::COUNT],
}

impl Default for Io {
    fn default() -> Self { Self::new() }
}

/// Number of repeats a held input produces between `t0` and `t1` seconds of hold time.
pub fn calc_typematic_repeat_amount(t0: f32, t1: f32, delay: f32, rate: f32) -> i32 {
    if t1 == 0.0 {
        return 1;
    }
    if t0 >= t1 {
        return 0;
    }
    if rate <= 0.0 {
        return (t0 < delay && t1 >= delay) as i32;
    }
    let count = |t: f32| if t < delay { -1 } else { ((t - delay) / rate) as i32 };
    count(t1) - count(t0)
}

impl Io {
    /// Creates the input state with default tunables and a 500x500 viewport.
    pub fn new() -> Self {
        Self {
            config: IoConfig::default(),
            delta_time: 1.0 / 60.0,
            framebuffer_scale: vec2(1.0, 1.0),
            want_capture_mouse: false,
            want_capture_keyboard: false,
            want_text_input: false,
            viewport_size: vec2(500.0, 500.0),
            viewport_changed: false,
            cursor: MouseCursor::Arrow,
            cursor_changed: false,
            time: 0.0,
            frame_count: 0,
            framerate: 0.0,
            framerate_samples: [0.0; FRAMERATE_SAMPLES],
            framerate_idx: 0,
            framerate_count: 0,
            framerate_accum: 0.0,
            events: Vec::new(),
            chars: Vec::new(),
            pending_surrogate: 0,
            keys: vec![KeyData::default(); Key::COUNT],
            key_mods: KeyMods::empty(),
            mouse_pos: vec2(MOUSE_POS_INVALID, MOUSE_POS_INVALID),
            mouse_pos_prev: vec2(MOUSE_POS_INVALID, MOUSE_POS_INVALID),
            mouse_delta: vec2(0.0, 0.0),
            last_valid_mouse_pos: vec2(0.0, 0.0),
            mouse_wheel: 0.0,
            mouse_wheel_h: 0.0,
            mouse: [MouseButtonData::default(); MouseButton::COUNT],
        }
    }

    // ---------------------------------------------------------------------
    // event queue
    // ---------------------------------------------------------------------

    fn last_event<F: Fn(&InputEvent) -> bool>(&self, f: F) -> Option<&InputEvent> { self.events.iter().rev().find(|e| f(e)) }

    /// Queues a key transition. A transition equal to the last queued one for that key is dropped.
    pub fn add_key(&mut self, key: Key, down: bool) {
        if key == Key::None {
            return;
        }
        let last = self.last_event(|e| matches!(e, InputEvent::Key { key: k, .. } if *k == key));
        if let Some(InputEvent::Key { down: last_down, .. }) = last {
            if *last_down == down {
                return;
            }
        }
        self.events.push(InputEvent::Key { key, down });
    }

    /// Queues a key transition from a raw key code; unknown codes are dropped and reported.
    pub fn add_raw_key(&mut self, code: u32, down: bool) -> Result<(), UiError> {
        match Key::try_from(code) {
            Ok(key) => {
                self.add_key(key, down);
                Ok(())
            }
            Err(err) => {
                warn!(code, "dropping key event: {}", err);
                Err(err)
            }
        }
    }

    /// Queues a pointer move. A move to the last queued position is dropped.
    pub fn add_mouse_pos(&mut self, x: f32, y: f32) {
        if let Some(InputEvent::MousePos { x: lx, y: ly }) = self.last_event(|e| matches!(e, InputEvent::MousePos { .. })) {
            if *lx == x && *ly == y {
                return;
            }
        }
        self.events.push(InputEvent::MousePos { x, y });
    }

    /// Queues a button transition. A transition equal to the last queued one for that button is dropped.
    pub fn add_mouse_button(&mut self, button: MouseButton, down: bool) {
        let last = self.last_event(|e| matches!(e, InputEvent::MouseButton { button: b, .. } if *b == button));
        if let Some(InputEvent::MouseButton { down: last_down, .. }) = last {
            if *last_down == down {
                return;
            }
        }
        self.events.push(InputEvent::MouseButton { button, down });
    }

    /// Queues a button transition from a raw button index; unknown buttons are dropped and reported.
    pub fn add_raw_mouse_button(&mut self, index: u32, down: bool) -> Result<(), UiError> {
        match MouseButton::try_from(index) {
            Ok(button) => {
                self.add_mouse_button(button, down);
                Ok(())
            }
            Err(err) => {
                warn!(index, "dropping mouse button event: {}", err);
                Err(err)
            }
        }
    }

    /// Queues a wheel movement. Wheel events accumulate and are never deduplicated.
    pub fn add_mouse_wheel(&mut self, x: f32, y: f32) { self.events.push(InputEvent::MouseWheel { x, y }); }

    /// Queues a typed codepoint.
    pub fn add_text(&mut self, codepoint: u32) { self.events.push(InputEvent::Text(codepoint)); }

    /// Queues one UTF-16 code unit, pairing surrogates across calls.
    /// Unpaired surrogates are replaced by U+FFFD.
    pub fn add_text_utf16(&mut self, unit: u16) {
        if unit == 0 && self.pending_surrogate == 0 {
            return;
        }
        if unit & 0xFC00 == 0xD800 {
            if self.pending_surrogate != 0 {
                self.add_text(0xFFFD);
            }
            self.pending_surrogate = unit;
            return;
        }
        let mut cp = unit as u32;
        if self.pending_surrogate != 0 {
            if unit & 0xFC00 != 0xDC00 {
                self.add_text(0xFFFD);
            } else {
                let high = (self.pending_surrogate as u32 - 0xD800) << 10;
                cp = 0x10000 + high + (unit as u32 - 0xDC00);
            }
            self.pending_surrogate = 0;
        }
        self.add_text(cp);
    }

    /// Queues every character of a UTF-8 string.
    pub fn add_text_utf8(&mut self, text: &str) {
        for c in text.chars() {
            self.add_text(c as u32);
        }
    }

    /// Number of events waiting for the next frame.
    pub fn pending_events(&self) -> &[InputEvent] { &self.events }

    // ---------------------------------------------------------------------
    // viewport & cursor
    // ---------------------------------------------------------------------

    /// Size of the area the UI is drawn into.
    pub fn viewport_size(&self) -> Vec2f { self.viewport_size }

    /// Resizes the drawing area.
    pub fn set_viewport_size(&mut self, size: Vec2f) {
        if size.x != self.viewport_size.x || size.y != self.viewport_size.y {
            self.viewport_size = size;
            self.viewport_changed = true;
        }
    }

    /// Returns `true` if the viewport was resized since the last frame ended.
    pub fn is_viewport_changed(&self) -> bool { self.viewport_changed }

    /// Requests a pointer shape for this frame.
    pub fn set_mouse_cursor(&mut self, cursor: MouseCursor) {
        if self.cursor != cursor {
            self.cursor_changed = true;
        }
        self.cursor = cursor;
    }

    /// Pointer shape requested this frame.
    pub fn mouse_cursor(&self) -> MouseCursor { self.cursor }

    /// Returns `true` if the requested pointer shape changed this frame.
    pub fn is_cursor_changed(&self) -> bool { self.cursor_changed }

    // ---------------------------------------------------------------------
    // timing
    // ---------------------------------------------------------------------

    /// Seconds elapsed since the context was created.
    pub fn time(&self) -> f64 { self.time }

    /// Frames started since the context was created.
    pub fn frame_count(&self) -> u64 { self.frame_count }

    /// Frames per second averaged over the last 120 frames.
    pub fn framerate(&self) -> f32 { self.framerate }

    fn update_framerate(&mut self) {
        let dt = self.delta_time;
        self.framerate_accum += dt - self.framerate_samples[self.framerate_idx];
        self.framerate_samples[self.framerate_idx] = dt;
        self.framerate_idx = (self.framerate_idx + 1) % FRAMERATE_SAMPLES;
        self.framerate_count = (self.framerate_count + 1).min(FRAMERATE_SAMPLES);
        self.framerate = if self.framerate_accum > 0.0 { self.framerate_count as f32 / self.framerate_accum } else { f32::MAX };
    }

    // ---------------------------------------------------------------------
    // per-frame update
    // ---------------------------------------------------------------------

    /// Drains the event queue and advances timers. Called by the context at the start of a frame.
    pub(crate) fn begin_frame(&mut self, log_events: bool) {
        self.time += self.delta_time as f64;
        self.frame_count += 1;
        self.update_framerate();
        self.cursor = MouseCursor::Arrow;
        self.cursor_changed = false;
        self.want_capture_mouse = false;
        self.want_capture_keyboard = false;
        self.want_text_input = false;

        self.drain_events(log_events);
        self.update_keyboard();
        self.update_mouse();
    }

    /// Clears one-shot state at the end of a frame.
    pub(crate) fn end_frame(&mut self) {
        self.mouse_wheel = 0.0;
        self.mouse_wheel_h = 0.0;
        self.chars.clear();
        self.viewport_changed = false;
    }

    fn drain_events(&mut self, log_events: bool) {
        for event in self.events.drain(..) {
            if log_events {
                trace!(target: "frameui::io", frame = self.frame_count, ?event, "input event");
            }
            match event {
                InputEvent::MousePos { x, y } => {
                    if x != MOUSE_POS_INVALID && y != MOUSE_POS_INVALID {
                        self.mouse_pos = vec2(x, y);
                    }
                }
                InputEvent::MouseWheel { x, y } => {
                    self.mouse_wheel_h += x;
                    self.mouse_wheel += y;
                }
                InputEvent::MouseButton { button, down } => self.mouse[button as usize].down = down,
                InputEvent::Key { key, down } => self.keys[key as usize].down = down,
                InputEvent::Text(cp) => self.chars.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)),
            }
        }
    }

    fn update_keyboard(&mut self) {
        let held = |io: &Self, keys: [Key; 3]| keys.iter().any(|k| io.keys[*k as usize].down);
        let mut mods = KeyMods::empty();
        mods.set(KeyMods::CTRL, held(self, [Key::LeftCtrl, Key::RightCtrl, Key::ModCtrl]));
        mods.set(KeyMods::SHIFT, held(self, [Key::LeftShift, Key::RightShift, Key::ModShift]));
        mods.set(KeyMods::ALT, held(self, [Key::LeftAlt, Key::RightAlt, Key::ModAlt]));
        mods.set(KeyMods::SUPER, held(self, [Key::LeftSuper, Key::RightSuper, Key::ModSuper]));
        self.key_mods = mods;

        let dt = self.delta_time;
        for key in self.keys.iter_mut() {
            key.down_duration_prev = key.down_duration;
            key.down_duration = if key.down {
                if key.down_duration < 0.0 { 0.0 } else { key.down_duration + dt }
            } else {
                -1.0
            };
        }
    }

    fn update_mouse(&mut self) {
        if self.is_mouse_pos_valid() {
            self.mouse_pos = floor_vec2(self.mouse_pos);
            self.last_valid_mouse_pos = self.mouse_pos;
        }
        self.mouse_delta = if self.is_mouse_pos_valid() && self.mouse_pos_prev.x != MOUSE_POS_INVALID && self.mouse_pos_prev.y != MOUSE_POS_INVALID {
            vec2(self.mouse_pos.x - self.mouse_pos_prev.x, self.mouse_pos.y - self.mouse_pos_prev.y)
        } else {
            vec2(0.0, 0.0)
        };
        self.mouse_pos_prev = self.mouse_pos;

        let dt = self.delta_time;
        let time = self.time;
        let pos = self.mouse_pos;
        let last_valid = self.last_valid_mouse_pos;
        let double_click_time = self.config.double_click_time as f64;
        let max_dist_sqr = self.config.double_click_max_dist * self.config.double_click_max_dist;
        for b in self.mouse.iter_mut() {
            b.clicked = b.down && b.down_duration < 0.0;
            b.clicked_count = 0;
            b.released = !b.down && b.down_duration >= 0.0;
            b.down_duration_prev = b.down_duration;
            b.down_duration = if b.down {
                if b.down_duration < 0.0 { 0.0 } else { b.down_duration + dt }
            } else {
                -1.0
            };

            if b.clicked {
                let travel = length_sqr(vec2(pos.x - b.clicked_pos.x, pos.y - b.clicked_pos.y));
                let is_repeat = time - b.clicked_time < double_click_time && travel < max_dist_sqr;
                b.last_clicked_count = if is_repeat { b.last_clicked_count + 1 } else { 1 };
                b.clicked_time = time;
                b.clicked_pos = pos;
                b.clicked_count = b.last_clicked_count;
                b.drag_max_distance_sqr = 0.0;
            } else if b.down {
                let travel = length_sqr(vec2(last_valid.x - b.clicked_pos.x, last_valid.y - b.clicked_pos.y));
                b.drag_max_distance_sqr = b.drag_max_distance_sqr.max(travel);
            }
        }
    }

    // ---------------------------------------------------------------------
    // keyboard queries
    // ---------------------------------------------------------------------

    /// State of `key`.
    pub fn key_data(&self, key: Key) -> &KeyData { &self.keys[key as usize] }

    /// Modifiers held this frame.
    pub fn key_mods(&self) -> KeyMods { self.key_mods }

    /// Returns `true` if the platform shortcut modifier (ctrl, or super with macOS behaviour) is held.
    pub fn is_shortcut_down(&self) -> bool {
        if self.config.macos_behaviors { self.key_mods.is_super() } else { self.key_mods.is_ctrl() }
    }

    /// Returns `true` while `key` is held.
    pub fn is_key_down(&self, key: Key) -> bool { self.key_data(key).down }

    /// Returns `true` on the frame `key` went down, and on every repeat when `repeat` is set.
    pub fn is_key_pressed(&self, key: Key, repeat: bool) -> bool {
        let data = self.key_data(key);
        if !data.down {
            return false;
        }
        let t = data.down_duration;
        if t < 0.0 {
            return false;
        }
        let mut pressed = t == 0.0;
        if !pressed && repeat && t > self.config.key_repeat_delay {
            pressed = self.key_pressed_amount(key, self.config.key_repeat_delay, self.config.key_repeat_rate) > 0;
        }
        pressed
    }

    /// Returns `true` on the frame `key` was released.
    pub fn is_key_released(&self, key: Key) -> bool {
        let data = self.key_data(key);
        data.down_duration_prev >= 0.0 && !data.down
    }

    /// Number of presses (initial plus repeats) `key` produced this frame.
    pub fn key_pressed_amount(&self, key: Key, delay: f32, rate: f32) -> i32 {
        let data = self.key_data(key);
        if !data.down {
            return 0;
        }
        let t = data.down_duration;
        calc_typematic_repeat_amount(t - self.delta_time, t, delay, rate)
    }

    /// Codepoints typed this frame.
    pub fn text_input(&self) -> &[char] { &self.chars }

    // ---------------------------------------------------------------------
    // mouse queries
    // ---------------------------------------------------------------------

    /// Current pointer position (floored), or [`MOUSE_POS_INVALID`] coordinates when unknown.
    pub fn mouse_pos(&self) -> Vec2f { self.mouse_pos }

    /// Pointer movement since the previous frame.
    pub fn mouse_delta(&self) -> Vec2f { self.mouse_delta }

    /// Returns `true` when the pointer position is known.
    pub fn is_mouse_pos_valid(&self) -> bool { self.mouse_pos.x > MOUSE_POS_INVALID && self.mouse_pos.y > MOUSE_POS_INVALID }

    /// Vertical wheel movement accumulated this frame.
    pub fn mouse_wheel(&self) -> f32 { self.mouse_wheel }

    /// Horizontal wheel movement accumulated this frame.
    pub fn mouse_wheel_h(&self) -> f32 { self.mouse_wheel_h }

    /// Returns `true` while `button` is held.
    pub fn is_mouse_down(&self, button: MouseButton) -> bool { self.mouse[button as usize].down }

    /// Returns `true` if any button is held.
    pub fn is_any_mouse_down(&self) -> bool { self.mouse.iter().any(|b| b.down) }

    /// Returns `true` on the frame `button` went down, and on every repeat when `repeat` is set.
    pub fn is_mouse_clicked(&self, button: MouseButton, repeat: bool) -> bool {
        let data = &self.mouse[button as usize];
        let t = data.down_duration;
        if t == 0.0 {
            return true;
        }
        if repeat && t > self.config.key_repeat_delay {
            return calc_typematic_repeat_amount(t - self.delta_time, t, self.config.key_repeat_delay, self.config.key_repeat_rate) > 0;
        }
        false
    }

    /// Returns `true` on the frame `button` was released.
    pub fn is_mouse_released(&self, button: MouseButton) -> bool { self.mouse[button as usize].released }

    /// Returns `true` on the frame of the second click of a double click.
    pub fn is_mouse_double_clicked(&self, button: MouseButton) -> bool { self.mouse[button as usize].clicked_count == 2 }

    /// Click streak length reported on the frame of a click, `0` on other frames.
    pub fn mouse_clicked_count(&self, button: MouseButton) -> u32 { self.mouse[button as usize].clicked_count }

    /// Returns `true` while `button` is held and the pointer travelled at least `threshold` pixels.
    /// A negative threshold uses [`IoConfig::drag_threshold`].
    pub fn is_mouse_dragging(&self, button: MouseButton, threshold: f32) -> bool {
        let data = &self.mouse[button as usize];
        if !data.down {
            return false;
        }
        let threshold = if threshold < 0.0 { self.config.drag_threshold } else { threshold };
        data.drag_max_distance_sqr >= threshold * threshold
    }

    /// Pointer travel since `button` was clicked, once the drag passed `threshold`; zero otherwise.
    pub fn mouse_drag_delta(&self, button: MouseButton, threshold: f32) -> Vec2f {
        let data = &self.mouse[button as usize];
        let threshold = if threshold < 0.0 { self.config.drag_threshold } else { threshold };
        if (data.down || data.released)
            && data.drag_max_distance_sqr >= threshold * threshold
            && self.is_mouse_pos_valid()
            && data.clicked_pos.x > MOUSE_POS_INVALID
        {
            return vec2(self.last_valid_mouse_pos.x - data.clicked_pos.x, self.last_valid_mouse_pos.y - data.clicked_pos.y);
        }
        vec2(0.0, 0.0)
    }

    /// Restarts the drag origin at the current pointer position.
    pub fn reset_mouse_drag_delta(&mut self, button: MouseButton) { self.mouse[button as usize].clicked_pos = self.mouse_pos; }

    /// Returns `true` if the pointer lies within `rect` (inclusive).
    pub fn is_mouse_hovering_rect(&self, rect: &Rect) -> bool { rect.contains(self.mouse_pos) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(io: &mut Io) {
        io.begin_frame(false);
        io.end_frame();
    }

    #[test]
    fn key_table_matches_discriminants() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(*key as usize, i);
        }
        assert_eq!(Key::try_from(Key::Escape as u32), Ok(Key::Escape));
        assert_eq!(Key::try_from(Key::COUNT as u32), Err(UiError::UnknownKey(Key::COUNT as u32)));
        assert_eq!(MouseButton::try_from(7), Err(UiError::UnknownMouseButton(7)));
    }

    #[test]
    fn duplicate_events_are_dropped() {
        let mut io = Io::new();
        io.add_key(Key::A, true);
        io.add_key(Key::A, true);
        io.add_mouse_pos(3.0, 4.0);
        io.add_mouse_pos(3.0, 4.0);
        io.add_mouse_button(MouseButton::Left, true);
        io.add_mouse_button(MouseButton::Left, true);
        io.add_mouse_wheel(0.0, 1.0);
        io.add_mouse_wheel(0.0, 1.0);
        assert_eq!(io.pending_events().len(), 5);
    }

    #[test]
    fn raw_input_outside_range_is_rejected() {
        let mut io = Io::new();
        assert!(io.add_raw_key(10_000, true).is_err());
        assert!(io.add_raw_mouse_button(9, true).is_err());
        assert!(io.add_raw_mouse_button(1, true).is_ok());
        assert_eq!(io.pending_events().len(), 1);
    }

    #[test]
    fn utf16_surrogates_pair_up() {
        let mut io = Io::new();
        io.add_text_utf16(0xD83D);
        io.add_text_utf16(0xDE00);
        io.add_text_utf16('a' as u16);
        step_keep_chars(&mut io);
        assert_eq!(io.text_input(), &['\u{1F600}', 'a']);
    }

    #[test]
    fn utf16_unpaired_surrogate_is_replaced() {
        let mut io = Io::new();
        io.add_text_utf16(0xD83D);
        io.add_text_utf16('b' as u16);
        io.add_text_utf16(0xD83D);
        io.add_text_utf16(0xD83D);
        io.add_text_utf16(0xDE00);
        step_keep_chars(&mut io);
        assert_eq!(io.text_input(), &['\u{FFFD}', 'b', '\u{FFFD}', '\u{1F600}']);
    }

    fn step_keep_chars(io: &mut Io) { io.begin_frame(false); }

    #[test]
    fn double_click_within_window() {
        let mut io = Io::new();
        io.delta_time = 0.05;
        io.add_mouse_pos(100.0, 100.0);
        io.add_mouse_button(MouseButton::Left, true);
        step(&mut io);
        assert_eq!(io.mouse_clicked_count(MouseButton::Left), 1);
        io.add_mouse_button(MouseButton::Left, false);
        step(&mut io);
        io.add_mouse_pos(102.0, 101.0);
        io.add_mouse_button(MouseButton::Left, true);
        io.begin_frame(false);
        assert!(io.is_mouse_double_clicked(MouseButton::Left));
        io.end_frame();

        io.add_mouse_button(MouseButton::Left, false);
        step(&mut io);
        for _ in 0..10 {
            step(&mut io);
        }
        io.add_mouse_button(MouseButton::Left, true);
        io.begin_frame(false);
        assert!(!io.is_mouse_double_clicked(MouseButton::Left));
        assert_eq!(io.mouse_clicked_count(MouseButton::Left), 1);
    }

    #[test]
    fn far_second_click_is_not_double() {
        let mut io = Io::new();
        io.delta_time = 0.05;
        io.add_mouse_pos(100.0, 100.0);
        io.add_mouse_button(MouseButton::Left, true);
        step(&mut io);
        io.add_mouse_button(MouseButton::Left, false);
        step(&mut io);
        io.add_mouse_pos(120.0, 100.0);
        io.add_mouse_button(MouseButton::Left, true);
        io.begin_frame(false);
        assert_eq!(io.mouse_clicked_count(MouseButton::Left), 1);
    }

    #[test]
    fn drag_delta_after_threshold() {
        let mut io = Io::new();
        io.add_mouse_pos(10.0, 10.0);
        io.add_mouse_button(MouseButton::Left, true);
        step(&mut io);
        io.add_mouse_pos(12.0, 10.0);
        step(&mut io);
        assert!(!io.is_mouse_dragging(MouseButton::Left, -1.0));
        assert_eq!(io.mouse_drag_delta(MouseButton::Left, -1.0).x, 0.0);
        io.add_mouse_pos(30.0, 15.0);
        step(&mut io);
        assert!(io.is_mouse_dragging(MouseButton::Left, -1.0));
        let d = io.mouse_drag_delta(MouseButton::Left, -1.0);
        assert_eq!((d.x, d.y), (20.0, 5.0));
        io.reset_mouse_drag_delta(MouseButton::Left);
        let d = io.mouse_drag_delta(MouseButton::Left, -1.0);
        assert_eq!((d.x, d.y), (0.0, 0.0));
    }

    #[test]
    fn typematic_repeat_counts() {
        assert_eq!(calc_typematic_repeat_amount(0.0, 0.0, 0.275, 0.05), 1);
        assert_eq!(calc_typematic_repeat_amount(0.1, 0.2, 0.275, 0.05), 0);
        assert_eq!(calc_typematic_repeat_amount(0.25, 0.30, 0.275, 0.05), 1);
        assert_eq!(calc_typematic_repeat_amount(0.30, 0.45, 0.275, 0.05), 3);
        assert_eq!(calc_typematic_repeat_amount(0.2, 0.3, 0.275, 0.0), 1);
        assert_eq!(calc_typematic_repeat_amount(0.3, 0.3, 0.275, 0.05), 0);
    }

    #[test]
    fn key_press_and_release_frames() {
        let mut io = Io::new();
        io.add_key(Key::Enter, true);
        step(&mut io);
        assert!(io.is_key_pressed(Key::Enter, false));
        step(&mut io);
        assert!(io.is_key_down(Key::Enter));
        assert!(!io.is_key_pressed(Key::Enter, false));
        io.add_key(Key::Enter, false);
        step(&mut io);
        assert!(io.is_key_released(Key::Enter));
    }

    #[test]
    fn modifiers_follow_left_and_right_keys() {
        let mut io = Io::new();
        io.add_key(Key::RightShift, true);
        io.add_key(Key::LeftCtrl, true);
        step(&mut io);
        assert!(io.key_mods().is_shift());
        assert!(io.key_mods().is_ctrl());
        assert!(io.is_shortcut_down());
        io.config.macos_behaviors = true;
        assert!(!io.is_shortcut_down());
    }

    #[test]
    fn framerate_averages_delta_time() {
        let mut io = Io::new();
        io.delta_time = 0.02;
        for _ in 0..10 {
            step(&mut io);
        }
        assert!((io.framerate() - 50.0).abs() < 0.01);
    }

    #[test]
    fn invalid_mouse_pos_event_is_ignored() {
        let mut io = Io::new();
        io.add_mouse_pos(5.5, 6.7);
        step(&mut io);
        io.add_mouse_pos(MOUSE_POS_INVALID, MOUSE_POS_INVALID);
        step(&mut io);
        assert_eq!((io.mouse_pos().x, io.mouse_pos().y), (5.0, 6.0));
    }
}
