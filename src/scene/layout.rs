//! Grid slots in scene space

use super::camera::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub column_spacing: f32,
    pub row_spacing: f32,
    pub top_padding: f32,
    pub bottom_padding: f32,
    /// Row that sits at `y = -top_padding`
    pub anchor_row: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 4,
            column_spacing: 2.0,
            row_spacing: 1.5,
            top_padding: 2.0,
            bottom_padding: 2.0,
            anchor_row: 2.0,
        }
    }
}

impl GridLayout {
    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// `(row, column)` of the card at `index` among visible cards
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns(), index % self.columns())
    }

    pub fn slot(&self, index: usize) -> Vec3 {
        let (row, col) = self.cell(index);
        let centre = (self.columns() as f32 - 1.0) / 2.0;
        let x = (col as f32 - centre) * self.column_spacing;
        let y = -(row as f32 - self.anchor_row) * self.row_spacing - self.top_padding;
        Vec3::new(x, y, 0.0)
    }

    /// Number of rows needed for `count` cards, at least one
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns()).max(1)
    }

    /// Height the camera has to cover, padding included
    pub fn content_height(&self, rows: usize) -> f32 {
        self.top_padding + rows.saturating_sub(1) as f32 * self.row_spacing + self.bottom_padding
    }
}
