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
use crate::{vec2, Context, Vec2f};

/// How the widths of a row are interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RowType {
    /// Widths are ratios of the available row width.
    #[default]
    Dynamic,
    /// Widths are pixels.
    Static,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum LayoutSystem {
    #[default]
    None,
    Dynamic,
    Static,
    Manual,
    Array,
    Template,
    Space,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TemplateKind {
    Dynamic,
    Variable,
    Static,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct TemplateEntry {
    pub kind: TemplateKind,
    pub width: f32,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct LayoutRow {
    pub system: LayoutSystem,
    pub row_type: RowType,
    pub height: f32,
    pub specified_height: f32,
    pub width: f32,
    pub columns: usize,
    pub current_column: usize,
    pub max_width: f32,
    pub max_height: f32,
    pub horizontal_offset: f32,
    pub vertical_offset: f32,
    pub row_start_x: f32,
    pub sizes: Vec<f32>,
    pub entry_start: usize,
}

/// Window dimensions the row solver needs to turn ratios into pixels.
#[derive(Copy, Clone, Debug)]
pub(crate) struct RowMetrics {
    pub window_width: f32,
    pub padding: f32,
    pub spacing: Vec2f,
    pub scrollbar: f32,
    pub indent: f32,
}

impl RowMetrics {
    pub fn available_width(&self, columns: usize, tree_depth: u32) -> f32 {
        self.window_width - self.padding * 2.0 - self.spacing.x * columns.saturating_sub(1) as f32 - self.scrollbar - tree_depth as f32 * self.indent
    }
}

/// Per-window cursor and row state, rebuilt from scratch every time the window begins.
#[derive(Clone, Debug, Default)]
pub(crate) struct LayoutState {
    pub cursor_start: Vec2f,
    pub cursor_max: Vec2f,
    pub row_pos: Vec2f,
    pub accum_row_x: f32,
    pub extra_indent: f32,
    pub tree_depth: u32,
    pub row: LayoutRow,
    pub template_entries: Vec<TemplateEntry>,
}

impl LayoutState {
    pub fn reset(&mut self, cursor_start: Vec2f) {
        self.cursor_start = vec2(cursor_start.x.floor(), cursor_start.y.floor());
        self.cursor_max = self.cursor_start;
        self.row_pos = cursor_start;
        self.accum_row_x = 0.0;
        self.extra_indent = 0.0;
        self.tree_depth = 0;
        self.row = LayoutRow::default();
        self.template_entries.clear();
    }

    pub fn cursor_pos(&self, indent_size: f32) -> Vec2f {
        vec2(
            self.row_pos.x + self.accum_row_x + self.row.horizontal_offset + self.tree_depth as f32 * indent_size,
            self.row_pos.y + self.row.vertical_offset,
        )
    }

    pub fn begin_row(&mut self, system: LayoutSystem, row_type: RowType, height: f32, columns: usize) {
        assert!(self.row.current_column == 0, "a new row was started before the previous one was completed");
        self.row = LayoutRow {
            system,
            row_type,
            height,
            specified_height: height,
            columns,
            horizontal_offset: self.extra_indent,
            entry_start: self.template_entries.len(),
            ..LayoutRow::default()
        };
    }

    /// Folds the current row into the content extents and moves to the next line.
    pub fn close_row(&mut self, spacing_y: f32) {
        let row = &self.row;
        self.cursor_max.x = self.cursor_max.x.max(self.row_pos.x + row.max_width);
        self.cursor_max.y = self.cursor_max.y.max(self.row_pos.y + row.max_height);
        self.row_pos.y += row.max_height + spacing_y;
        self.row = LayoutRow::default();
        self.default_row();
    }

    /// Single static column used when a window begins or an explicit row ends.
    pub fn default_row(&mut self) {
        self.begin_row(LayoutSystem::Array, RowType::Static, 0.0, 1);
        self.row.sizes.push(300.0);
    }

    pub fn item_size(&mut self, default_height: f32, metrics: &RowMetrics) -> Vec2f {
        let height = if self.row.height == 0.0 { default_height } else { self.row.height };
        if self.row.system == LayoutSystem::Template {
            let width = self.template_entries.get(self.row.entry_start + self.row.current_column).map_or(0.0, |e| e.width);
            return vec2(width, height);
        }

        if self.row.system == LayoutSystem::Array {
            if let Some(w) = self.row.sizes.get(self.row.current_column) {
                self.row.width = *w;
            }
        }

        let mut width = self.row.width;
        if self.row.row_type == RowType::Dynamic {
            width *= metrics.available_width(self.row.columns, self.tree_depth);
        }
        vec2(width, height)
    }

    pub fn advance(&mut self, width: f32, height: f32, spacing: Vec2f) {
        let row = &mut self.row;
        row.current_column += 1;
        row.max_width = row.max_width.max(row.horizontal_offset + width);
        row.max_height = row.max_height.max(row.vertical_offset + height);

        if row.current_column < row.columns {
            row.horizontal_offset += width + spacing.x;
        }

        match row.system {
            LayoutSystem::Manual => assert!(row.current_column <= row.columns, "more items pushed than the manual row declared"),
            LayoutSystem::Space => (),
            _ if row.current_column == row.columns => {
                self.row_pos.y += row.max_height + spacing.y;
                self.cursor_max.x = self.cursor_max.x.max(self.row_pos.x + row.max_width);
                self.cursor_max.y = self.cursor_max.y.max(self.row_pos.y);

                row.current_column = 0;
                row.max_width = 0.0;
                row.max_height = 0.0;
                row.horizontal_offset = row.row_start_x + self.extra_indent;
                row.vertical_offset = 0.0;
            }
            _ => (),
        }
    }

    pub fn push_template(&mut self, kind: TemplateKind, width: f32) {
        assert!(self.row.system == LayoutSystem::Template, "template push outside of a template row");
        self.template_entries.push(TemplateEntry { kind, width });
        self.row.columns += 1;
    }

    pub fn finish_template(&mut self, metrics: &RowMetrics) {
        assert!(self.row.system == LayoutSystem::Template, "template_end without template_begin");
        let available = metrics.available_width(self.row.columns, self.tree_depth);
        let start = self.row.entry_start;
        solve_template(&mut self.template_entries[start..], available);
    }
}

/// Distributes `available` pixels over the template entries.
///
/// Static and variable entries keep at least their pushed width. The leftover is handed out
/// level by level: the narrowest group of variable entries (dynamic entries count as width 0)
/// grows until it matches the next wider group, the two groups merge, and so on until the
/// leftover runs out. When the minimum widths already fill the row, dynamic entries get 0.
pub(crate) fn solve_template(entries: &mut [TemplateEntry], available: f32) {
    let min_width: f32 = entries.iter().filter(|e| e.kind != TemplateKind::Dynamic).map(|e| e.width).sum();
    if min_width >= available {
        for e in entries.iter_mut().filter(|e| e.kind == TemplateKind::Dynamic) {
            e.width = 0.0;
        }
        return;
    }

    let mut order: Vec<usize> = (0..entries.len()).filter(|i| entries[*i].kind == TemplateKind::Variable).collect();
    order.sort_by(|a, b| entries[*b].width.total_cmp(&entries[*a].width));
    let variable_count = order.len();
    order.extend((0..entries.len()).filter(|i| entries[*i].kind == TemplateKind::Dynamic));
    if order.is_empty() {
        return;
    }

    // (width, first slot in `order`, slot count), widest first
    let mut levels: Vec<(f32, usize, usize)> = Vec::new();
    for (slot, idx) in order[..variable_count].iter().enumerate() {
        let width = entries[*idx].width;
        match levels.last_mut() {
            Some(level) if level.0 == width => level.2 += 1,
            _ => levels.push((width, slot, 1)),
        }
    }
    if order.len() > variable_count {
        for idx in &order[variable_count..] {
            entries[*idx].width = 0.0;
        }
        levels.push((0.0, variable_count, order.len() - variable_count));
    }

    let mut extra = available - min_width;
    while extra > 0.0 {
        let Some((width, start, count)) = levels.pop() else { break };
        let grow = match levels.last_mut() {
            Some(next) if (next.0 - width) * (count as f32) < extra => {
                let delta = next.0 - width;
                next.2 += count;
                extra -= delta * count as f32;
                delta
            }
            _ => {
                let share = extra / count as f32;
                extra = 0.0;
                share
            }
        };
        for idx in &order[start..start + count] {
            entries[*idx].width += grow;
        }
    }
}

impl Context {
    fn row_metrics(&self) -> RowMetrics {
        let window = self.current_window();
        RowMetrics {
            window_width: window.size.x,
            padding: self.style.window_horizontal_padding,
            spacing: self.style.item_spacing,
            scrollbar: if window.scrollbar_y { self.style.scrollbar_size + 2.0 } else { 0.0 },
            indent: self.style.indent_size,
        }
    }

    /// Starts a row of `count` equally sized columns filling the window width.
    pub fn layout_dynamic(&mut self, height: f32, count: usize) {
        let layout = &mut self.current_window_mut().layout;
        layout.begin_row(LayoutSystem::Dynamic, RowType::Dynamic, height, count);
        layout.row.width = 1.0 / count.max(1) as f32;
    }

    /// Starts a row of `count` columns, each `width` pixels wide.
    pub fn layout_static(&mut self, height: f32, width: f32, count: usize) {
        let layout = &mut self.current_window_mut().layout;
        layout.begin_row(LayoutSystem::Static, RowType::Static, height, count);
        layout.row.width = width;
    }

    /// Starts a row with one column per entry of `widths`, interpreted as pixels or ratios.
    pub fn layout_row(&mut self, row_type: RowType, height: f32, widths: &[f32]) {
        let layout = &mut self.current_window_mut().layout;
        layout.begin_row(LayoutSystem::Array, row_type, height, widths.len());
        layout.row.sizes.extend_from_slice(widths);
    }

    /// Starts a manual row; each column's width is given by [`Context::layout_row_push`].
    pub fn layout_row_begin(&mut self, row_type: RowType, height: f32, count: usize) {
        self.current_window_mut().layout.begin_row(LayoutSystem::Manual, row_type, height, count);
    }

    /// Sets the width of the next column of a manual row.
    pub fn layout_row_push(&mut self, width: f32) {
        let row = &mut self.current_window_mut().layout.row;
        assert!(row.system == LayoutSystem::Manual, "layout_row_push outside of layout_row_begin");
        row.width = width;
    }

    /// Closes a manual row.
    pub fn layout_row_end(&mut self) {
        let spacing_y = self.style.item_spacing.y;
        let layout = &mut self.current_window_mut().layout;
        assert!(layout.row.system == LayoutSystem::Manual, "layout_row_end without layout_row_begin");
        layout.close_row(spacing_y);
    }

    /// Starts a template row; push its columns then call [`Context::layout_template_end`].
    pub fn layout_template_begin(&mut self, height: f32) {
        self.current_window_mut().layout.begin_row(LayoutSystem::Template, RowType::Static, height, 0);
    }

    /// Adds a column that only receives width once variable columns are satisfied.
    pub fn layout_template_push_dynamic(&mut self) { self.current_window_mut().layout.push_template(TemplateKind::Dynamic, 0.0) }

    /// Adds a column at least `width` pixels wide that may grow.
    pub fn layout_template_push_variable(&mut self, width: f32) { self.current_window_mut().layout.push_template(TemplateKind::Variable, width) }

    /// Adds a column of exactly `width` pixels.
    pub fn layout_template_push_static(&mut self, width: f32) { self.current_window_mut().layout.push_template(TemplateKind::Static, width) }

    /// Resolves the template column widths. The row wraps after its last column.
    pub fn layout_template_end(&mut self) {
        let metrics = self.row_metrics();
        self.current_window_mut().layout.finish_template(&metrics);
    }

    /// Starts a free placement row of `height`; with [`RowType::Dynamic`] the positions pushed are ratios.
    pub fn layout_space_begin(&mut self, row_type: RowType, height: f32, count: usize) {
        let layout = &mut self.current_window_mut().layout;
        layout.begin_row(LayoutSystem::Space, row_type, height, count);
        if row_type == RowType::Static {
            layout.row.specified_height = 1.0;
        }
    }

    /// Places the next item of a space row.
    pub fn layout_space_push(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let window = self.current_window_mut();
        let window_width = window.size.x;
        let row = &mut window.layout.row;
        assert!(row.system == LayoutSystem::Space, "layout_space_push outside of layout_space_begin");
        row.horizontal_offset = if row.row_type == RowType::Dynamic { x * window_width } else { x };
        row.vertical_offset = y * row.specified_height;
        row.width = width;
        row.height = height * row.specified_height;
    }

    /// Closes a space row.
    pub fn layout_space_end(&mut self) {
        let spacing_y = self.style.item_spacing.y;
        let layout = &mut self.current_window_mut().layout;
        assert!(layout.row.system == LayoutSystem::Space, "layout_space_end without layout_space_begin");
        layout.close_row(spacing_y);
    }

    /// Size of the next item in the current row. `default_height` is used when the row height is 0.
    pub fn calculate_item_size(&mut self, default_height: f32) -> Vec2f {
        let metrics = self.row_metrics();
        self.current_window_mut().layout.item_size(default_height, &metrics)
    }

    /// Moves the cursor past an item of the given size, wrapping rows as needed.
    pub fn advance_cursor(&mut self, width: f32, height: f32) {
        let spacing = self.style.item_spacing;
        self.current_window_mut().layout.advance(width, height, spacing);
    }

    /// Screen position where the next item will be placed.
    pub fn get_cursor_pos(&self) -> Vec2f { self.current_window().layout.cursor_pos(self.style.indent_size) }

    /// Shifts subsequent items right by `amount` pixels (the style indent when `None`).
    pub fn indent(&mut self, amount: Option<f32>) {
        let amount = amount.unwrap_or(self.style.indent_size);
        let layout = &mut self.current_window_mut().layout;
        layout.extra_indent += amount;
        layout.row.horizontal_offset += amount;
    }

    /// Reverts a matching [`Context::indent`].
    pub fn unindent(&mut self, amount: Option<f32>) { self.indent(Some(-amount.unwrap_or(self.style.indent_size))) }

    /// Reserves an empty item of the given size.
    pub fn dummy(&mut self, width: f32, height: f32) { self.advance_cursor(width, height) }

    /// Adds one item spacing of vertical space.
    pub fn vertical_spacing(&mut self) {
        let spacing_y = self.style.item_spacing.y;
        self.current_window_mut().layout.row_pos.y += spacing_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(window_width: f32) -> RowMetrics {
        RowMetrics { window_width, padding: 5.0, spacing: vec2(8.0, 4.0), scrollbar: 0.0, indent: 15.0 }
    }

    fn entry(kind: TemplateKind, width: f32) -> TemplateEntry { TemplateEntry { kind, width } }

    #[test]
    fn dynamic_row_wraps_after_last_column() {
        let m = metrics(410.0);
        let mut layout = LayoutState::default();
        layout.reset(vec2(10.0, 20.0));
        layout.begin_row(LayoutSystem::Dynamic, RowType::Dynamic, 20.0, 2);
        layout.row.width = 0.5;

        let mut placed = Vec::new();
        for _ in 0..4 {
            let pos = layout.cursor_pos(15.0);
            let size = layout.item_size(99.0, &m);
            placed.push((pos, size));
            layout.advance(size.x, size.y, m.spacing);
        }

        // (410 - 10 - 8) / 2
        assert_eq!(placed[0].1.x, 196.0);
        assert_eq!(placed[0].1.y, 20.0);
        assert_eq!((placed[0].0.x, placed[0].0.y), (10.0, 20.0));
        assert_eq!((placed[1].0.x, placed[1].0.y), (214.0, 20.0));
        assert_eq!((placed[2].0.x, placed[2].0.y), (10.0, 44.0));
        assert_eq!((placed[3].0.x, placed[3].0.y), (214.0, 44.0));
        assert_eq!(layout.row_pos.y, 68.0);
        assert_eq!(layout.cursor_max.x, 10.0 + 196.0 * 2.0 + 8.0);
    }

    #[test]
    fn manual_row_waits_for_end() {
        let m = metrics(400.0);
        let mut layout = LayoutState::default();
        layout.reset(vec2(0.0, 0.0));
        layout.begin_row(LayoutSystem::Manual, RowType::Static, 10.0, 2);
        for w in [40.0, 60.0] {
            layout.row.width = w;
            let size = layout.item_size(0.0, &m);
            layout.advance(size.x, size.y, m.spacing);
        }
        assert_eq!(layout.row.current_column, 2);
        assert_eq!(layout.row_pos.y, 0.0);
        layout.close_row(m.spacing.y);
        assert_eq!(layout.row_pos.y, 14.0);
        assert_eq!(layout.cursor_max.x, 108.0);
        assert_eq!(layout.row.system, LayoutSystem::Array);
    }

    #[test]
    #[should_panic]
    fn overfilled_manual_row_panics() {
        let mut layout = LayoutState::default();
        layout.begin_row(LayoutSystem::Manual, RowType::Static, 10.0, 1);
        layout.advance(1.0, 1.0, vec2(0.0, 0.0));
        layout.advance(1.0, 1.0, vec2(0.0, 0.0));
    }

    #[test]
    fn array_row_reads_width_per_column() {
        let m = metrics(400.0);
        let mut layout = LayoutState::default();
        layout.begin_row(LayoutSystem::Array, RowType::Static, 0.0, 3);
        layout.row.sizes.extend_from_slice(&[10.0, 20.0, 30.0]);
        let mut widths = Vec::new();
        for _ in 0..3 {
            let size = layout.item_size(12.0, &m);
            widths.push(size.x);
            layout.advance(size.x, size.y, m.spacing);
        }
        assert_eq!(widths, vec![10.0, 20.0, 30.0]);
        assert_eq!(layout.row.current_column, 0);
    }

    #[test]
    fn space_row_places_items_without_wrapping() {
        let mut layout = LayoutState::default();
        layout.reset(vec2(0.0, 100.0));
        layout.begin_row(LayoutSystem::Space, RowType::Static, 50.0, 1);
        layout.row.specified_height = 1.0;
        layout.row.horizontal_offset = 30.0;
        layout.row.vertical_offset = 10.0;
        let pos = layout.cursor_pos(15.0);
        assert_eq!((pos.x, pos.y), (30.0, 110.0));
        layout.advance(20.0, 5.0, vec2(8.0, 4.0));
        assert_eq!(layout.row.current_column, 1);
        assert_eq!(layout.row.max_height, 15.0);
    }

    #[test]
    fn template_conserves_available_width() {
        let mut entries = vec![
            entry(TemplateKind::Static, 50.0),
            entry(TemplateKind::Variable, 100.0),
            entry(TemplateKind::Dynamic, 0.0),
            entry(TemplateKind::Variable, 30.0),
        ];
        solve_template(&mut entries, 400.0);
        let total: f32 = entries.iter().map(|e| e.width).sum();
        assert!((total - 400.0).abs() < 1e-3);
        assert_eq!(entries[0].width, 50.0);
        // narrow columns catch up with the widest before it grows
        assert!((entries[1].width - entries[3].width).abs() < 1e-3);
        assert!((entries[2].width - entries[1].width).abs() < 1e-3);
    }

    #[test]
    fn template_partial_fill_grows_narrowest_first() {
        let mut entries = vec![entry(TemplateKind::Variable, 100.0), entry(TemplateKind::Dynamic, 0.0), entry(TemplateKind::Static, 20.0)];
        solve_template(&mut entries, 180.0);
        assert_eq!(entries[0].width, 100.0);
        assert_eq!(entries[1].width, 60.0);
        assert_eq!(entries[2].width, 20.0);
    }

    #[test]
    fn template_degenerate_fit_zeroes_dynamic() {
        let mut entries = vec![entry(TemplateKind::Static, 300.0), entry(TemplateKind::Dynamic, 7.0), entry(TemplateKind::Variable, 200.0)];
        solve_template(&mut entries, 400.0);
        assert_eq!(entries[1].width, 0.0);
        assert_eq!(entries[0].width, 300.0);
        assert_eq!(entries[2].width, 200.0);
    }

    #[test]
    fn available_width_accounts_for_scrollbar_and_depth() {
        let mut m = metrics(300.0);
        assert_eq!(m.available_width(3, 0), 300.0 - 10.0 - 16.0);
        m.scrollbar = 12.0;
        assert_eq!(m.available_width(1, 2), 300.0 - 10.0 - 12.0 - 30.0);
    }
}
