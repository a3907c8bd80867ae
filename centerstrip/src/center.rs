use crate::types::PlacedItem;

/// Scroll offset that brings `item`'s center onto the viewport's center.
///
/// The result is always a valid offset: never negative, never past the
/// maximum scrollable distance. When the content fits inside the viewport
/// there is nothing to scroll and the result is `0`.
pub fn offset_to_center(item: &PlacedItem, total_width: u64, viewport_width: u32) -> u64 {
    let center = (viewport_width / 2) as i64;
    let half = (item.width / 2) as i64;
    let raw = item.left - (center - half);
    let available = total_width.saturating_sub(viewport_width as u64);
    (raw.max(0) as u64).min(available)
}

/// Index of the item currently nearest the viewport's horizontal center.
///
/// Detection bands are built from each item's reachable centering offset
/// rather than from raw bounding boxes, which misclassify the first and last
/// item near the scroll extremes: their geometric centers can never coincide
/// with the viewport center, so their bands are widened to absorb scroll-zero
/// and scroll-max respectively. For item `i` with
/// `reachable = offset_to_center(..)` and `half = width / 2`:
///
/// - index 0 matches `[0, half]`
/// - the last index matches everything at or past `reachable - half`
/// - every other index matches `[reachable - half, reachable + half]`
///
/// The first matching band wins. Bands derived from per-item reachable
/// offsets can leave gaps when widths vary sharply; an offset falling into
/// such a gap reports index `0` rather than guessing a nearest band.
pub fn centered_index(
    offset: u64,
    items: &[PlacedItem],
    total_width: u64,
    viewport_width: u32,
) -> usize {
    let last = match items.len().checked_sub(1) {
        Some(last) => last,
        None => return 0,
    };

    for (i, item) in items.iter().enumerate() {
        let reachable = offset_to_center(item, total_width, viewport_width);
        let half = (item.width / 2) as u64;
        let matched = if i == 0 {
            offset <= half
        } else if i == last {
            offset >= reachable.saturating_sub(half)
        } else {
            offset >= reachable.saturating_sub(half) && offset <= reachable.saturating_add(half)
        };
        if matched {
            return i;
        }
    }

    0
}
