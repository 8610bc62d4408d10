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
use std::f32::consts::PI;

use crate::geometry::{length_sqr, UNCLIPPED_RECT};
use crate::{pack_color, vec2, Color4b, Rect, TextureId, Vec2f, Vec4f};

#[derive(Copy, Clone, Debug, Default)]
#[repr(C)]
/// Vertex layout shared with GPU backends.
pub struct DrawVertex {
    /// Position in pixels.
    pub pos: Vec2f,
    /// Texture coordinate.
    pub uv: Vec2f,
    /// Packed RGBA colour.
    pub color: Color4b,
}

#[derive(Copy, Clone, Debug)]
/// One backend draw call: `element_count` indices starting at `index_offset`, added to `vertex_offset`,
/// scissored to `clip_rect` and sampling `texture_id`.
pub struct DrawCommand {
    /// Base vertex added to every index of the command.
    pub vertex_offset: u32,
    /// First index of the command.
    pub index_offset: u32,
    /// Number of indices.
    pub element_count: u32,
    /// Texture to bind.
    pub texture_id: TextureId,
    /// Scissor rectangle.
    pub clip_rect: Rect,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle to a layer owned by a [`DrawList`].
pub struct LayerId(usize);

#[derive(Clone, Debug)]
/// Independently ordered batch of geometry inside a [`DrawList`].
pub struct DrawLayer {
    name: String,
    vertices: Vec<DrawVertex>,
    indices: Vec<u32>,
    commands: Vec<DrawCommand>,
    path: Vec<Vec2f>,
}

impl DrawLayer {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), vertices: Vec::new(), indices: Vec::new(), commands: Vec::new(), path: Vec::new() }
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.commands.clear();
        self.path.clear();
    }

    /// Debug name given when the layer was requested.
    pub fn name(&self) -> &str { &self.name }

    /// Vertices recorded this frame.
    pub fn vertices(&self) -> &[DrawVertex] { &self.vertices }

    /// Layer-local indices recorded this frame.
    pub fn indices(&self) -> &[u32] { &self.indices }

    /// Layer-local commands recorded this frame.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    fn push_vertex(&mut self, pos: Vec2f, uv: Vec2f, color: Color4b) { self.vertices.push(DrawVertex { pos, uv, color }) }

    fn push_quad(&mut self, p: [Vec2f; 4], uv: [Vec2f; 4], color: Color4b) {
        let base = self.vertices.len() as u32;
        for i in 0..4 {
            self.push_vertex(p[i], uv[i], color);
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Metrics and texture coordinates of one glyph.
#[derive(Copy, Clone, Debug)]
pub struct Glyph {
    /// Horizontal pen advance.
    pub advance: f32,
    /// Top-left of the glyph quad relative to the top-left of the line.
    pub offset_min: Vec2f,
    /// Bottom-right of the glyph quad relative to the top-left of the line.
    pub offset_max: Vec2f,
    /// Texture coordinate of `offset_min`.
    pub uv_min: Vec2f,
    /// Texture coordinate of `offset_max`.
    pub uv_max: Vec2f,
}

/// Glyph source supplied by a font rasterizer or atlas.
pub trait Font {
    /// Pixel size the font was rasterized at.
    fn size(&self) -> f32;
    /// Distance between two baselines.
    fn line_height(&self) -> f32 { self.size() }
    /// Metrics for `c`, or `None` if the font has no glyph for it.
    fn glyph(&self, c: char) -> Option<Glyph>;
    /// Texture holding the glyph bitmaps.
    fn texture(&self) -> TextureId;
}

/// Fixed-advance font that produces metrics but no glyph geometry.
/// Useful for headless layout and tests; real applications install an atlas-backed [`Font`].
#[derive(Copy, Clone, Debug)]
pub struct MonoFont {
    size: f32,
    advance: f32,
    texture: TextureId,
}

impl MonoFont {
    /// Creates a font of height `size` where every glyph advances by `advance` pixels.
    pub fn new(size: f32, advance: f32) -> Self { Self { size, advance, texture: TextureId::default() } }
}

impl Default for MonoFont {
    fn default() -> Self { Self::new(13.0, 7.0) }
}

impl Font for MonoFont {
    fn size(&self) -> f32 { self.size }

    fn glyph(&self, _c: char) -> Option<Glyph> {
        let origin = vec2(0.0, 0.0);
        Some(Glyph { advance: self.advance, offset_min: origin, offset_max: origin, uv_min: origin, uv_max: origin })
    }

    fn texture(&self) -> TextureId { self.texture }
}

/// Returns the part of `text` shown to the user: everything before the first `##`.
pub fn find_rendered_text_end(text: &str) -> &str {
    match text.find("##") {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Size of `text` when drawn with `font`, wrapping lines at `wrap` pixels when `wrap > 0`.
pub fn calculate_text_size(font: &dyn Font, text: &str, wrap: f32) -> Vec2f {
    let mut line_width = 0.0f32;
    let mut max_width = 0.0f32;
    let mut lines = 1;
    for c in text.chars() {
        if c == '\n' {
            max_width = max_width.max(line_width);
            line_width = 0.0;
            lines += 1;
            continue;
        }
        let advance = font.glyph(c).map(|g| g.advance).unwrap_or(0.0);
        if wrap > 0.0 && line_width > 0.0 && line_width + advance > wrap {
            max_width = max_width.max(line_width);
            line_width = 0.0;
            lines += 1;
        }
        line_width += advance;
    }
    vec2(max_width.max(line_width), lines as f32 * font.line_height())
}

/// Collection of layers flattened into one vertex/index/command stream per frame.
///
/// Layers are requested once and reused across frames; their contents are cleared by
/// [`DrawList::reset`]. Only layers passed to [`DrawList::submit_layer`] reach the output,
/// in submission order.
#[derive(Clone, Debug)]
pub struct DrawList {
    layers: Vec<DrawLayer>,
    free_layers: Vec<LayerId>,
    submitted: Vec<LayerId>,
    clip_stack: Vec<Rect>,
    white_texture: TextureId,
    white_uv: Vec2f,

    vertices: Vec<DrawVertex>,
    indices: Vec<u32>,
    commands: Vec<DrawCommand>,
}

impl Default for DrawList {
    fn default() -> Self { Self::new() }
}

impl DrawList {
    /// Creates an empty draw list.
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            free_layers: Vec::new(),
            submitted: Vec::new(),
            clip_stack: Vec::new(),
            white_texture: TextureId::default(),
            white_uv: vec2(0.0, 0.0),
            vertices: Vec::new(),
            indices: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Texture and texture coordinate of an opaque white texel used by untextured primitives.
    pub fn set_white_texture(&mut self, texture: TextureId, uv: Vec2f) {
        self.white_texture = texture;
        self.white_uv = uv;
    }

    /// Hands out a layer, reusing a returned one when available.
    pub fn request_layer(&mut self, name: &str) -> LayerId {
        match self.free_layers.pop() {
            Some(id) => {
                let layer = &mut self.layers[id.0];
                layer.reset();
                layer.name.clear();
                layer.name.push_str(name);
                id
            }
            None => {
                self.layers.push(DrawLayer::new(name));
                LayerId(self.layers.len() - 1)
            }
        }
    }

    /// Gives a layer back to the list for reuse.
    pub fn return_layer(&mut self, id: LayerId) {
        self.layers[id.0].reset();
        self.submitted.retain(|l| *l != id);
        self.free_layers.push(id);
    }

    /// Read access to a layer.
    pub fn layer(&self, id: LayerId) -> &DrawLayer { &self.layers[id.0] }

    /// Appends a layer to this frame's output order.
    pub fn submit_layer(&mut self, id: LayerId) { self.submitted.push(id) }

    /// Clears every layer and the output. Called at the start of each frame.
    pub fn reset(&mut self) {
        for layer in self.layers.iter_mut() {
            layer.reset();
        }
        self.submitted.clear();
        self.clip_stack.clear();
        self.vertices.clear();
        self.indices.clear();
        self.commands.clear();
    }

    /// Concatenates submitted layers into the output buffers.
    pub fn flatten(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.commands.clear();
        for id in &self.submitted {
            let layer = &self.layers[id.0];
            let vertex_base = self.vertices.len() as u32;
            let index_base = self.indices.len() as u32;
            self.vertices.extend_from_slice(&layer.vertices);
            self.indices.extend_from_slice(&layer.indices);
            for cmd in layer.commands.iter().filter(|c| c.element_count > 0) {
                self.commands.push(DrawCommand { vertex_offset: vertex_base, index_offset: index_base + cmd.index_offset, ..*cmd });
            }
        }
    }

    /// Flattened vertices.
    pub fn vertices(&self) -> &[DrawVertex] { &self.vertices }

    /// Flattened indices, relative to each command's `vertex_offset`.
    pub fn indices(&self) -> &[u32] { &self.indices }

    /// Flattened commands.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    // ---------------------------------------------------------------------
    // clipping
    // ---------------------------------------------------------------------

    /// Pushes a scissor rectangle; with `accumulate` it is intersected with the current one.
    pub fn push_clip_rect(&mut self, rect: Rect, accumulate: bool) {
        let rect = if accumulate { rect.clip_full(&self.current_clip_rect()) } else { rect };
        self.clip_stack.push(rect);
    }

    /// Pops the innermost scissor rectangle.
    pub fn pop_clip_rect(&mut self) {
        assert!(self.clip_stack.pop().is_some(), "clip stack underflow: pop without matching push");
    }

    /// Innermost scissor rectangle, or [`UNCLIPPED_RECT`].
    pub fn current_clip_rect(&self) -> Rect { self.clip_stack.last().copied().unwrap_or(UNCLIPPED_RECT) }

    /// Number of pushed scissor rectangles.
    pub fn clip_depth(&self) -> usize { self.clip_stack.len() }

    // ---------------------------------------------------------------------
    // primitives
    // ---------------------------------------------------------------------

    fn reserve(&mut self, layer: LayerId, texture: TextureId, index_count: u32) -> &mut DrawLayer {
        let clip = self.current_clip_rect();
        let layer = &mut self.layers[layer.0];
        match layer.commands.last_mut() {
            Some(cmd) if cmd.texture_id == texture && cmd.clip_rect.same_as(&clip) => cmd.element_count += index_count,
            _ => {
                let index_offset = layer.indices.len() as u32;
                layer.commands.push(DrawCommand { vertex_offset: 0, index_offset, element_count: index_count, texture_id: texture, clip_rect: clip });
            }
        }
        layer
    }

    fn solid_quad(&mut self, layer: LayerId, p: [Vec2f; 4], color: Color4b) {
        let (texture, uv) = (self.white_texture, self.white_uv);
        self.reserve(layer, texture, 6).push_quad(p, [uv; 4], color);
    }

    fn segment(&mut self, layer: LayerId, p0: Vec2f, p1: Vec2f, color: Color4b, thickness: f32) {
        let d = vec2(p1.x - p0.x, p1.y - p0.y);
        let len = length_sqr(d).sqrt();
        if len <= 0.0 {
            return;
        }
        let half = thickness * 0.5;
        let n = vec2(-d.y / len * half, d.x / len * half);
        self.solid_quad(
            layer,
            [vec2(p0.x + n.x, p0.y + n.y), vec2(p1.x + n.x, p1.y + n.y), vec2(p1.x - n.x, p1.y - n.y), vec2(p0.x - n.x, p0.y - n.y)],
            color,
        );
    }

    /// Straight line.
    pub fn add_line(&mut self, layer: LayerId, p0: Vec2f, p1: Vec2f, color: Vec4f, thickness: f32) { self.segment(layer, p0, p1, pack_color(color), thickness) }

    /// Open polyline through `points`.
    pub fn add_lines(&mut self, layer: LayerId, points: &[Vec2f], color: Vec4f, thickness: f32) { self.stroke(layer, points, pack_color(color), thickness, false) }

    fn stroke(&mut self, layer: LayerId, points: &[Vec2f], color: Color4b, thickness: f32, closed: bool) {
        for pair in points.windows(2) {
            self.segment(layer, pair[0], pair[1], color, thickness);
        }
        if closed && points.len() > 2 {
            self.segment(layer, points[points.len() - 1], points[0], color, thickness);
        }
    }

    fn fill_convex(&mut self, layer: LayerId, points: &[Vec2f], color: Color4b) {
        if points.len() < 3 {
            return;
        }
        let (texture, uv) = (self.white_texture, self.white_uv);
        let tris = (points.len() - 2) as u32;
        let layer = self.reserve(layer, texture, tris * 3);
        let base = layer.vertices.len() as u32;
        for p in points {
            layer.push_vertex(*p, uv, color);
        }
        for i in 1..=tris {
            layer.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    fn with_path<F: FnOnce(&mut Vec<Vec2f>)>(&mut self, layer: LayerId, build: F) -> Vec<Vec2f> {
        let mut path = std::mem::take(&mut self.layers[layer.0].path);
        path.clear();
        build(&mut path);
        path
    }

    fn restore_path(&mut self, layer: LayerId, mut path: Vec<Vec2f>) {
        path.clear();
        self.layers[layer.0].path = path;
    }

    /// Triangle outline.
    pub fn add_triangle(&mut self, layer: LayerId, a: Vec2f, b: Vec2f, c: Vec2f, color: Vec4f, thickness: f32) {
        self.stroke(layer, &[a, b, c], pack_color(color), thickness, true)
    }

    /// Filled triangle.
    pub fn add_triangle_filled(&mut self, layer: LayerId, a: Vec2f, b: Vec2f, c: Vec2f, color: Vec4f) { self.fill_convex(layer, &[a, b, c], pack_color(color)) }

    /// Rectangle outline.
    pub fn add_rect(&mut self, layer: LayerId, min: Vec2f, max: Vec2f, color: Vec4f, thickness: f32) {
        self.stroke(layer, &[min, vec2(max.x, min.y), max, vec2(min.x, max.y)], pack_color(color), thickness, true)
    }

    /// Filled rectangle.
    pub fn add_rect_filled(&mut self, layer: LayerId, min: Vec2f, max: Vec2f, color: Vec4f) {
        self.solid_quad(layer, [min, vec2(max.x, min.y), max, vec2(min.x, max.y)], pack_color(color))
    }

    fn rounded_path(path: &mut Vec<Vec2f>, min: Vec2f, max: Vec2f, radius: f32, segments: u32) {
        let r = radius.min((max.x - min.x) * 0.5).min((max.y - min.y) * 0.5).max(0.0);
        let corners = [
            (vec2(max.x - r, min.y + r), -PI * 0.5),
            (vec2(max.x - r, max.y - r), 0.0),
            (vec2(min.x + r, max.y - r), PI * 0.5),
            (vec2(min.x + r, min.y + r), PI),
        ];
        for (center, start) in corners {
            path_arc(path, center, r, start, start + PI * 0.5, segments);
        }
    }

    /// Rectangle outline with rounded corners.
    pub fn add_rect_rounded(&mut self, layer: LayerId, min: Vec2f, max: Vec2f, color: Vec4f, thickness: f32, radius: f32, segments: u32) {
        let path = self.with_path(layer, |p| Self::rounded_path(p, min, max, radius, segments));
        self.stroke(layer, &path, pack_color(color), thickness, true);
        self.restore_path(layer, path);
    }

    /// Filled rectangle with rounded corners.
    pub fn add_rect_rounded_filled(&mut self, layer: LayerId, min: Vec2f, max: Vec2f, color: Vec4f, radius: f32, segments: u32) {
        let path = self.with_path(layer, |p| Self::rounded_path(p, min, max, radius, segments));
        self.fill_convex(layer, &path, pack_color(color));
        self.restore_path(layer, path);
    }

    /// Quadrilateral outline.
    pub fn add_quad(&mut self, layer: LayerId, p: [Vec2f; 4], color: Vec4f, thickness: f32) { self.stroke(layer, &p, pack_color(color), thickness, true) }

    /// Filled convex quadrilateral.
    pub fn add_quad_filled(&mut self, layer: LayerId, p: [Vec2f; 4], color: Vec4f) { self.solid_quad(layer, p, pack_color(color)) }

    /// Circle outline approximated with `segments` edges.
    pub fn add_circle(&mut self, layer: LayerId, center: Vec2f, radius: f32, color: Vec4f, segments: u32, thickness: f32) {
        let path = self.with_path(layer, |p| path_arc(p, center, radius, 0.0, 2.0 * PI, segments.max(3)));
        self.stroke(layer, &path[..path.len() - 1], pack_color(color), thickness, true);
        self.restore_path(layer, path);
    }

    /// Filled circle approximated with `segments` edges.
    pub fn add_circle_filled(&mut self, layer: LayerId, center: Vec2f, radius: f32, color: Vec4f, segments: u32) {
        let path = self.with_path(layer, |p| path_arc(p, center, radius, 0.0, 2.0 * PI, segments.max(3)));
        self.fill_convex(layer, &path[..path.len() - 1], pack_color(color));
        self.restore_path(layer, path);
    }

    /// Quadratic bezier curve.
    pub fn add_bezier_quad(&mut self, layer: LayerId, p0: Vec2f, p1: Vec2f, p2: Vec2f, color: Vec4f, thickness: f32, segments: u32) {
        let path = self.with_path(layer, |path| {
            let n = segments.max(1);
            for i in 0..=n {
                let t = i as f32 / n as f32;
                let u = 1.0 - t;
                let (a, b, c) = (u * u, 2.0 * u * t, t * t);
                path.push(vec2(a * p0.x + b * p1.x + c * p2.x, a * p0.y + b * p1.y + c * p2.y));
            }
        });
        self.stroke(layer, &path, pack_color(color), thickness, false);
        self.restore_path(layer, path);
    }

    /// Cubic bezier curve.
    pub fn add_bezier_cubic(&mut self, layer: LayerId, p: [Vec2f; 4], color: Vec4f, thickness: f32, segments: u32) {
        let path = self.with_path(layer, |path| {
            let n = segments.max(1);
            for i in 0..=n {
                let t = i as f32 / n as f32;
                let u = 1.0 - t;
                let w = [u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t];
                let x = w[0] * p[0].x + w[1] * p[1].x + w[2] * p[2].x + w[3] * p[3].x;
                let y = w[0] * p[0].y + w[1] * p[1].y + w[2] * p[2].y + w[3] * p[3].y;
                path.push(vec2(x, y));
            }
        });
        self.stroke(layer, &path, pack_color(color), thickness, false);
        self.restore_path(layer, path);
    }

    /// Textured rectangle.
    pub fn add_image(&mut self, layer: LayerId, texture: TextureId, min: Vec2f, max: Vec2f, uv_min: Vec2f, uv_max: Vec2f, color: Vec4f) {
        let uv = [uv_min, vec2(uv_max.x, uv_min.y), uv_max, vec2(uv_min.x, uv_max.y)];
        self.reserve(layer, texture, 6).push_quad([min, vec2(max.x, min.y), max, vec2(min.x, max.y)], uv, pack_color(color));
    }

    /// Text with its top-left corner at `pos`. Wraps at `wrap` pixels when `wrap > 0`.
    pub fn add_text(&mut self, layer: LayerId, font: &dyn Font, pos: Vec2f, color: Vec4f, text: &str, wrap: f32) {
        let color = pack_color(color);
        let texture = font.texture();
        let line_height = font.line_height();
        let mut pen = pos;
        for c in text.chars() {
            if c == '\n' {
                pen = vec2(pos.x, pen.y + line_height);
                continue;
            }
            let Some(glyph) = font.glyph(c) else { continue };
            if wrap > 0.0 && pen.x > pos.x && pen.x + glyph.advance - pos.x > wrap {
                pen = vec2(pos.x, pen.y + line_height);
            }
            let min = vec2(pen.x + glyph.offset_min.x, pen.y + glyph.offset_min.y);
            let max = vec2(pen.x + glyph.offset_max.x, pen.y + glyph.offset_max.y);
            if max.x > min.x && max.y > min.y {
                let uv = [glyph.uv_min, vec2(glyph.uv_max.x, glyph.uv_min.y), glyph.uv_max, vec2(glyph.uv_min.x, glyph.uv_max.y)];
                self.reserve(layer, texture, 6).push_quad([min, vec2(max.x, min.y), max, vec2(min.x, max.y)], uv, color);
            }
            pen.x += glyph.advance;
        }
    }

    /// Text scissored to `clip`, hiding any `##` suffix.
    pub fn add_text_clipped(&mut self, layer: LayerId, font: &dyn Font, pos: Vec2f, clip: Rect, color: Vec4f, text: &str) {
        self.push_clip_rect(clip, true);
        self.add_text(layer, font, pos, color, find_rendered_text_end(text), 0.0);
        self.pop_clip_rect();
    }
}

fn path_arc(path: &mut Vec<Vec2f>, center: Vec2f, radius: f32, a_min: f32, a_max: f32, segments: u32) {
    let n = segments.max(1);
    for i in 0..=n {
        let a = a_min + (a_max - a_min) * i as f32 / n as f32;
        path.push(vec2(center.x + a.cos() * radius, center.y + a.sin() * radius));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgba;

    fn white() -> Vec4f { rgba(1.0, 1.0, 1.0, 1.0) }

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::from_pos_size(vec2(x, y), vec2(w, h)) }

    #[test]
    fn same_state_primitives_merge() {
        let mut list = DrawList::new();
        let layer = list.request_layer("bg");
        list.add_rect_filled(layer, vec2(0.0, 0.0), vec2(10.0, 10.0), white());
        list.add_rect_filled(layer, vec2(20.0, 0.0), vec2(30.0, 10.0), white());
        let cmds = list.layer(layer).commands();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].element_count, 12);
        assert_eq!(list.layer(layer).vertices().len(), 8);
    }

    #[test]
    fn clip_or_texture_change_splits_commands() {
        let mut list = DrawList::new();
        let layer = list.request_layer("fg");
        list.add_rect_filled(layer, vec2(0.0, 0.0), vec2(10.0, 10.0), white());
        list.push_clip_rect(rect(0.0, 0.0, 5.0, 5.0), false);
        list.add_rect_filled(layer, vec2(0.0, 0.0), vec2(10.0, 10.0), white());
        list.pop_clip_rect();
        list.add_image(layer, TextureId::new(9), vec2(0.0, 0.0), vec2(4.0, 4.0), vec2(0.0, 0.0), vec2(1.0, 1.0), white());
        let cmds = list.layer(layer).commands();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[1].clip_rect.max.x, 5.0);
        assert_eq!(cmds[2].texture_id, TextureId::new(9));
        assert_eq!(cmds[2].index_offset, 12);
    }

    #[test]
    fn accumulated_clip_intersects_parent() {
        let mut list = DrawList::new();
        list.push_clip_rect(rect(0.0, 0.0, 100.0, 100.0), false);
        list.push_clip_rect(rect(50.0, 50.0, 100.0, 100.0), true);
        let clip = list.current_clip_rect();
        assert_eq!((clip.min.x, clip.max.x), (50.0, 100.0));
        list.pop_clip_rect();
        list.push_clip_rect(rect(50.0, 50.0, 100.0, 100.0), false);
        assert_eq!(list.current_clip_rect().max.x, 150.0);
        list.pop_clip_rect();
        list.pop_clip_rect();
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    #[should_panic]
    fn unbalanced_clip_pop_panics() {
        let mut list = DrawList::new();
        list.pop_clip_rect();
    }

    #[test]
    fn flatten_follows_submission_order() {
        let mut list = DrawList::new();
        let back = list.request_layer("back");
        let front = list.request_layer("front");
        list.add_triangle_filled(front, vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0), white());
        list.add_rect_filled(back, vec2(0.0, 0.0), vec2(10.0, 10.0), white());
        list.submit_layer(back);
        list.submit_layer(front);
        list.flatten();
        assert_eq!(list.vertices().len(), 7);
        assert_eq!(list.indices().len(), 9);
        let cmds = list.commands();
        assert_eq!(cmds.len(), 2);
        assert_eq!((cmds[0].vertex_offset, cmds[0].index_offset, cmds[0].element_count), (0, 0, 6));
        assert_eq!((cmds[1].vertex_offset, cmds[1].index_offset, cmds[1].element_count), (4, 6, 3));
    }

    #[test]
    fn unsubmitted_layers_are_skipped_and_reset_clears() {
        let mut list = DrawList::new();
        let a = list.request_layer("a");
        let b = list.request_layer("b");
        list.add_rect_filled(a, vec2(0.0, 0.0), vec2(1.0, 1.0), white());
        list.add_rect_filled(b, vec2(0.0, 0.0), vec2(1.0, 1.0), white());
        list.submit_layer(b);
        list.flatten();
        assert_eq!(list.commands().len(), 1);
        list.reset();
        assert!(list.layer(a).vertices().is_empty());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn returned_layers_are_recycled() {
        let mut list = DrawList::new();
        let a = list.request_layer("a");
        list.return_layer(a);
        let b = list.request_layer("b");
        assert_eq!(a, b);
        assert_eq!(list.layer(b).name(), "b");
    }

    #[test]
    fn filled_circle_is_a_fan() {
        let mut list = DrawList::new();
        let layer = list.request_layer("c");
        list.add_circle_filled(layer, vec2(0.0, 0.0), 4.0, white(), 12);
        assert_eq!(list.layer(layer).vertices().len(), 12);
        assert_eq!(list.layer(layer).indices().len(), 30);
    }

    #[test]
    fn text_metrics_and_hidden_suffix() {
        let font = MonoFont::new(10.0, 6.0);
        let size = calculate_text_size(&font, "ab\nabc", 0.0);
        assert_eq!((size.x, size.y), (18.0, 20.0));
        let wrapped = calculate_text_size(&font, "abcd", 13.0);
        assert_eq!((wrapped.x, wrapped.y), (12.0, 20.0));
        assert_eq!(find_rendered_text_end("Apply##dialog"), "Apply");
        assert_eq!(find_rendered_text_end("Plain"), "Plain");
    }
}
