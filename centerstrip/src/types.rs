use alloc::vec::Vec;

/// Measured intrinsic size of a child, as reported by the host framework's
/// measurement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildSize {
    pub width: u32,
    pub height: u32,
}

impl ChildSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A placed item in the strip, produced fresh by every layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    pub index: usize,
    /// Left edge relative to the layout origin. Signed: mid-transition the
    /// lens interpolation can move an item through negative coordinates.
    pub left: i64,
    pub width: u32,
}

impl PlacedItem {
    pub fn right(&self) -> i64 {
        self.left.saturating_add(self.width as i64)
    }
}

/// Semantic position of a lens item on the zoom-ratio axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LensItem {
    /// A single fixed zoom ratio (e.g. the 1.0x lens).
    Single { ratio: f32 },
    /// A lens covering a ratio interval; it sits at its start ratio.
    Range { start: f32, end: f32 },
}

impl LensItem {
    pub fn start_ratio(&self) -> f32 {
        match *self {
            Self::Single { ratio } => ratio,
            Self::Range { start, .. } => start,
        }
    }

    /// Fractional position of this item within the fully expanded track,
    /// clamped to `[0, 1]`.
    pub fn start_factor(&self, range: RatioRange) -> f32 {
        let span = range.end - range.start;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.start_ratio() - range.start) / span).clamp(0.0, 1.0)
    }
}

/// The valid zoom-ratio interval a lens strip is configured for.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatioRange {
    pub start: f32,
    pub end: f32,
}

impl RatioRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

/// A fractional sub-range of the lens content width, in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

/// Geometry snapshot published by a layout pass.
///
/// Items are index-aligned with the input children and laid out left to
/// right with non-decreasing `left`. In strip mode
/// `total_width == start_padding + Σ width + end_padding`; in lens mode the
/// paddings are the symmetric progress-scaled padding and
/// `total_width == content_width + 2 × padding`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub items: Vec<PlacedItem>,
    pub total_width: u64,
    pub viewport_width: u32,
    /// Cross-axis size: the tallest child's intrinsic height.
    pub height: u32,
    pub start_padding: u32,
    pub end_padding: u32,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Width taken by the items themselves, paddings excluded.
    pub fn content_width(&self) -> u64 {
        self.total_width
            .saturating_sub(self.start_padding as u64)
            .saturating_sub(self.end_padding as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_width.saturating_sub(self.viewport_width as u64)
    }

    /// Fractional ranges of the content width that no item covers.
    ///
    /// Normalized to `[0, 1]` of [`Self::content_width`], origin at the end
    /// of the start padding. A packed layout covers the whole track and
    /// yields no ranges; a spread lens layout exposes the stretches of the
    /// zoom axis with no lens to render an overlay hint over.
    pub fn insufficient_ranges(&self) -> Vec<Span> {
        let content = self.content_width();
        if content == 0 {
            return Vec::new();
        }
        let content = content as f32;
        let origin = self.start_padding as i64;

        let mut ranges = Vec::new();
        let mut cursor = 0.0f32;
        for item in &self.items {
            let start = ((item.left - origin) as f32 / content).clamp(0.0, 1.0);
            let end = ((item.right() - origin) as f32 / content).clamp(0.0, 1.0);
            if start > cursor {
                ranges.push(Span {
                    start: cursor,
                    end: start,
                });
            }
            cursor = cursor.max(end);
        }
        if cursor < 1.0 {
            ranges.push(Span {
                start: cursor,
                end: 1.0,
            });
        }
        ranges
    }
}
