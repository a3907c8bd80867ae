use alloc::vec::Vec;

use crate::types::{ChildSize, Geometry, PlacedItem};

/// Lays out a packed tab strip with center-reach padding at both ends.
///
/// Every child is measured at least `min_item_width` wide and the strip's
/// height is the tallest child. The start and end paddings are sized so that
/// scrolling over `[0, max_scroll_offset]` brings every item, boundary items
/// included, exactly to the viewport center at some offset.
///
/// An empty child slice produces an empty geometry.
pub fn layout_strip(children: &[ChildSize], viewport_width: u32, min_item_width: u32) -> Geometry {
    if children.is_empty() {
        return Geometry {
            viewport_width,
            ..Geometry::default()
        };
    }

    let widths: Vec<u32> = children.iter().map(|c| c.width.max(min_item_width)).collect();
    let height = children.iter().map(|c| c.height).max().unwrap_or(0);
    let accumulated: u64 = widths.iter().map(|&w| w as u64).sum();

    // Make the first item reach the container center at scroll 0, and the
    // last at scroll max.
    let start_padding = viewport_width.saturating_sub(widths[0]) / 2;
    let end_padding = viewport_width.saturating_sub(widths[widths.len() - 1]) / 2;

    let items = place_run(&widths, start_padding as i64, None);

    Geometry {
        items,
        total_width: accumulated + start_padding as u64 + end_padding as u64,
        viewport_width,
        height,
        start_padding,
        end_padding,
    }
}

/// Lays out a lens strip interpolated between its packed and spread shapes.
///
/// At `progress = 0` the items sit contiguously with zero padding; at
/// `progress = 1` item `i` sits at `round(start_factors[i] × expand_width −
/// width / 2)` inside a track `expand_width` wide, with half a viewport of
/// padding reserved on each side. Intermediate progress interpolates every
/// position linearly; both endpoints are fixed points of the interpolation.
///
/// `start_factors` is index-aligned with `children`; missing entries place
/// the item at the track start.
pub fn layout_lens(
    children: &[ChildSize],
    start_factors: &[f32],
    viewport_width: u32,
    expand_width: u32,
    progress: f32,
) -> Geometry {
    if children.is_empty() {
        return Geometry {
            viewport_width,
            ..Geometry::default()
        };
    }
    if start_factors.len() != children.len() {
        swarn!(
            children = children.len(),
            factors = start_factors.len(),
            "layout_lens: start_factors length mismatch"
        );
    }

    let t = progress.clamp(0.0, 1.0);
    let widths: Vec<u32> = children.iter().map(|c| c.width).collect();
    let height = children.iter().map(|c| c.height).max().unwrap_or(0);

    let shrink_width: i64 = widths.iter().map(|&w| w as i64).sum();
    let content_width = lerp_i64(shrink_width, expand_width as i64, t).max(0);

    // Padding only appears as the layout expands: the collapsed strip stays
    // tightly packed, the expanded strip reserves room to scroll past the
    // boundary items.
    let padding = round_to_i64((viewport_width / 2) as f32 * t).max(0) as u32;

    let items = place_run(&widths, padding as i64, Some((start_factors, expand_width, t)));

    Geometry {
        items,
        total_width: content_width as u64 + 2 * padding as u64,
        viewport_width,
        height,
        start_padding: padding,
        end_padding: padding,
    }
}

/// Places `widths` left to right from `origin`.
///
/// With `expand` set, each item's packed position is interpolated toward its
/// expanded target `round(factor × expand_width − width / 2)` by the given
/// progress before the origin shift is applied.
fn place_run(
    widths: &[u32],
    origin: i64,
    expand: Option<(&[f32], u32, f32)>,
) -> Vec<PlacedItem> {
    let mut packed: i64 = 0;
    let mut items = Vec::with_capacity(widths.len());

    for (index, &width) in widths.iter().enumerate() {
        let left = match expand {
            None => origin + packed,
            Some((factors, expand_width, t)) => {
                let factor = factors.get(index).copied().unwrap_or(0.0);
                let expanded =
                    round_to_i64(factor * expand_width as f32 - width as f32 / 2.0);
                lerp_i64(packed, expanded, t) + origin
            }
        };
        items.push(PlacedItem { index, left, width });
        packed += width as i64;
    }

    items
}

fn lerp_i64(start: i64, stop: i64, t: f32) -> i64 {
    start + round_to_i64((stop - start) as f32 * t)
}

// `f32::round` needs std; `as` casts truncate toward zero and stay core-only.
fn round_to_i64(x: f32) -> i64 {
    if x >= 0.0 { (x + 0.5) as i64 } else { (x - 0.5) as i64 }
}
