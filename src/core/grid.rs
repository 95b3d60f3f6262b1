/// Recompute schedule after mount, in milliseconds. Images and fonts can
/// shift the grid for a while after first paint.
pub const SETTLE_DELAYS_MS: [u64; 3] = [100, 500, 1000];

/// Delay before the first horizontal line starts drawing
const FIRST_LINE_DELAY_SECS: f64 = 0.4;

/// Stagger between consecutive horizontal lines
const LINE_STAGGER_SECS: f64 = 0.05;

/// Measured bounding box in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
            && self.right.is_finite()
    }
}

/// Shape of the work grid the lines are drawn against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { columns: 2, rows: 2 }
    }
}

impl GridLayout {
    /// Thumbnails needed for a full measurement
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Two lines per row: top and bottom
    #[inline]
    pub fn line_count(&self) -> usize {
        self.rows * 2
    }
}

/// Derive horizontal line offsets relative to the section's top edge
///
/// `thumbs` are the thumbnail boxes in DOM order (row-major). Each row
/// contributes the top of its first thumbnail and the lowest bottom among its
/// thumbnails, so a taller neighbour pushes the row's bottom line down.
///
/// Returns `None` when the grid has not rendered enough thumbnails yet or a
/// measurement is not a finite number.
pub fn compute_line_positions(
    layout: GridLayout,
    section: &Rect,
    thumbs: &[Rect],
) -> Option<Vec<f64>> {
    if layout.columns == 0 || layout.rows == 0 {
        return None;
    }
    if thumbs.len() < layout.cell_count() || !section.is_finite() {
        return None;
    }

    let mut positions = Vec::with_capacity(layout.line_count());

    for row in thumbs.chunks(layout.columns).take(layout.rows) {
        if row.iter().any(|rect| !rect.is_finite()) {
            return None;
        }

        let top = row[0].top;
        let bottom = row
            .iter()
            .map(|rect| rect.bottom)
            .fold(f64::NEG_INFINITY, f64::max);

        positions.push(top - section.top);
        positions.push(bottom - section.top);
    }

    Some(positions)
}

/// A horizontal line ready to render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalLine {
    pub top_px: f64,
    pub animation_delay_secs: f64,
}

/// Render state for the decorative grid lines
///
/// Starts empty; the UI calls [`GridLines::recompute`] after each settle delay
/// and on every viewport resize.
#[derive(Debug, Clone, Default)]
pub struct GridLines {
    layout: GridLayout,
    positions: Vec<f64>,
}

impl GridLines {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            positions: Vec::new(),
        }
    }

    /// Re-measure. Keeps the previous positions if the grid is incomplete.
    ///
    /// Returns true when the positions were replaced.
    pub fn recompute(&mut self, section: &Rect, thumbs: &[Rect]) -> bool {
        match compute_line_positions(self.layout, section, thumbs) {
            Some(positions) => {
                self.positions = positions;
                true
            }
            None => {
                tracing::trace!(
                    "Grid not ready: {} of {} thumbnails measured",
                    thumbs.len(),
                    self.layout.cell_count()
                );
                false
            }
        }
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn should_render(&self) -> bool {
        self.positions.len() >= self.layout.line_count()
    }

    /// Lines with staggered draw-in delays; empty until fully measured
    pub fn lines(&self) -> Vec<HorizontalLine> {
        if !self.should_render() {
            return Vec::new();
        }

        self.positions
            .iter()
            .enumerate()
            .map(|(i, &top_px)| HorizontalLine {
                top_px,
                animation_delay_secs: FIRST_LINE_DELAY_SECS + LINE_STAGGER_SECS * i as f64,
            })
            .collect()
    }
}
