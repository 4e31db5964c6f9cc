//! Row virtualization with variable, measured row heights.
//!
//! Rendering is two-phase:
//!
//! 1. Rows are laid out with the heights in [`RowHeights`] (a fallback until
//!    something has been measured).
//! 2. Shortly after the row count changes, one frame is flagged as the
//!    measuring frame. Every mounted row reports its content height, the cache
//!    is replaced wholesale and [`RowOffsets`] is reset from the first row, so
//!    the next frame is laid out with the real heights.

use std::ops::Range;

use log::debug;

/// Height used for rows that have not been measured.
pub const FALLBACK_ROW_HEIGHT: f32 = 60.0;

/// Vertical gap added below every measured row.
pub const ROW_GAP: f32 = 8.0;

/// Rows rendered above and below the viewport.
pub const OVERSCAN: usize = 5;

/// Seconds to wait after a row count change before measuring.
pub const MEASURE_DELAY: f64 = 0.1;

/// Per-row height cache, indexed by row position.
#[derive(Debug, Default)]
pub struct RowHeights {
    len: usize,
    heights: Vec<f32>,
    measure_at: Option<f64>,
    measuring: Option<Vec<(usize, f32)>>,
}

impl RowHeights {
    pub fn height(&self, index: usize) -> f32 {
        self.heights
            .get(index)
            .copied()
            .unwrap_or(FALLBACK_ROW_HEIGHT)
    }

    /// Time at which the next measuring frame is due, if one is scheduled.
    pub fn measure_at(&self) -> Option<f64> {
        self.measure_at
    }

    fn is_measuring(&self) -> bool {
        self.measuring.is_some()
    }

    /// Tracks the current row count.
    ///
    /// A different count drops every cached height (indices from the old list
    /// mean nothing for the new one) and, for a non-empty list, schedules a
    /// measuring frame. Returns `true` when the count changed.
    pub fn sync_len(&mut self, len: usize, now: f64) -> bool {
        if len == self.len {
            return false;
        }

        debug!("Row count changed {} -> {len}, dropping height cache", self.len);
        self.len = len;
        self.heights.clear();
        self.measuring = None;
        self.measure_at = (len > 0).then_some(now + MEASURE_DELAY);
        true
    }

    /// Starts the measuring frame if it is due. Returns `true` if this frame measures.
    pub fn begin_frame(&mut self, now: f64) -> bool {
        if self.measure_at.is_some_and(|at| at <= now) {
            self.measure_at = None;
            self.measuring = Some(Vec::new());
        }
        self.is_measuring()
    }

    /// Records the content height of a mounted row. Ignored outside a measuring frame.
    pub fn record(&mut self, index: usize, content_height: f32) {
        if let Some(samples) = &mut self.measuring {
            samples.push((index, content_height + ROW_GAP));
        }
    }

    /// Ends the frame. After a measuring frame the cache is replaced with the
    /// recorded heights and `true` is returned; offsets must then be reset.
    pub fn end_frame(&mut self) -> bool {
        let Some(samples) = self.measuring.take() else {
            return false;
        };

        let mut heights = vec![FALLBACK_ROW_HEIGHT; self.len];
        for (index, height) in samples {
            if let Some(slot) = heights.get_mut(index) {
                *slot = height;
            }
        }
        debug!("Measured row heights for {} rows", self.len);
        self.heights = heights;
        true
    }
}

/// Prefix sums of row heights: `tops[i]` is the y offset of row `i`.
///
/// Computed lazily and kept until [`RowOffsets::reset_after_index`].
#[derive(Debug, Default)]
pub struct RowOffsets {
    tops: Vec<f32>,
}

impl RowOffsets {
    /// Forgets every offset from row `index` on.
    pub fn reset_after_index(&mut self, index: usize) {
        self.tops.truncate(index);
    }

    fn ensure(&mut self, len: usize, heights: &RowHeights) {
        // One extra entry holds the bottom of the last row.
        if self.tops.len() > len + 1 {
            self.tops.truncate(len + 1);
        }
        while self.tops.len() <= len {
            let next = match self.tops.len() {
                0 => 0.0,
                n => self.tops[n - 1] + heights.height(n - 1),
            };
            self.tops.push(next);
        }
    }

    pub fn offset_of(&mut self, index: usize, heights: &RowHeights) -> f32 {
        self.ensure(index, heights);
        self.tops[index]
    }

    pub fn total_height(&mut self, len: usize, heights: &RowHeights) -> f32 {
        self.offset_of(len, heights)
    }

    /// Rows intersecting `top..bottom`, widened by [`OVERSCAN`] on each side.
    pub fn visible_range(
        &mut self,
        len: usize,
        top: f32,
        bottom: f32,
        heights: &RowHeights,
    ) -> Range<usize> {
        if len == 0 {
            return 0..0;
        }
        self.ensure(len, heights);
        let tops = &self.tops[..len];

        let first = tops.partition_point(|&row_top| row_top <= top).saturating_sub(1);
        let last = tops.partition_point(|&row_top| row_top < bottom);

        first.saturating_sub(OVERSCAN)..(last + OVERSCAN).min(len)
    }
}

/// Height cache and offset table for one virtualized list.
#[derive(Debug, Default)]
pub struct VirtualRows {
    pub heights: RowHeights,
    pub offsets: RowOffsets,
}

impl VirtualRows {
    /// Call once per frame before layout.
    pub fn begin_frame(&mut self, len: usize, now: f64) -> bool {
        if self.heights.sync_len(len, now) {
            self.offsets.reset_after_index(0);
        }
        self.heights.begin_frame(now)
    }

    /// Call once per frame after every row has been drawn.
    pub fn end_frame(&mut self) -> bool {
        let measured = self.heights.end_frame();
        if measured {
            self.offsets.reset_after_index(0);
        }
        measured
    }
}
