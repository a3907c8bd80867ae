use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

static INITIAL_OFFSET_PROVIDER_CALLED: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as u32
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u32(start as u32, end_exclusive as u32) as usize
    }
}

fn sizes(widths: &[u32]) -> Vec<ChildSize> {
    widths.iter().map(|&w| ChildSize::new(w, 10)).collect()
}

fn contiguous(widths: &[u32]) -> Vec<PlacedItem> {
    let mut left = 0i64;
    widths
        .iter()
        .enumerate()
        .map(|(index, &width)| {
            let item = PlacedItem { index, left, width };
            left += width as i64;
            item
        })
        .collect()
}

#[test]
fn strip_padding_and_total() {
    let children = [
        ChildSize::new(100, 40),
        ChildSize::new(60, 30),
        ChildSize::new(120, 20),
    ];
    let g = layout_strip(&children, 300, 50);

    assert_eq!(g.start_padding, 100); // (300 - 100) / 2
    assert_eq!(g.end_padding, 90); // (300 - 120) / 2
    assert_eq!(g.total_width, 280 + 100 + 90);
    assert_eq!(g.height, 40);
    assert_eq!(g.content_width(), 280);

    let lefts: Vec<i64> = g.items.iter().map(|it| it.left).collect();
    assert_eq!(lefts, [100, 200, 260]);
}

#[test]
fn strip_clamps_to_min_item_width() {
    let g = layout_strip(&[ChildSize::new(10, 10), ChildSize::new(80, 10)], 200, 50);
    assert_eq!(g.items[0].width, 50);
    assert_eq!(g.items[1].width, 80);
    assert_eq!(g.start_padding, 75); // measured width, not the intrinsic one
}

#[test]
fn strip_item_wider_than_viewport_gets_zero_padding() {
    let g = layout_strip(&[ChildSize::new(500, 10)], 300, 50);
    assert_eq!(g.start_padding, 0);
    assert_eq!(g.end_padding, 0);
    assert_eq!(g.total_width, 500);
}

#[test]
fn empty_children_yield_empty_geometry() {
    let g = layout_strip(&[], 300, 50);
    assert!(g.is_empty());
    assert_eq!(g.total_width, 0);
    assert_eq!(g.viewport_width, 300);
    assert_eq!(centered_index(0, &g.items, g.total_width, g.viewport_width), 0);
}

#[test]
fn offset_to_center_is_clamped_to_scroll_range() {
    let g = layout_strip(&sizes(&[100, 60, 120]), 300, 50);
    let available = g.max_scroll_offset();
    for item in &g.items {
        let off = offset_to_center(item, g.total_width, g.viewport_width);
        assert!(off <= available);
    }

    // Middle item: left 200, width 60 => 200 - (150 - 30) = 80.
    assert_eq!(offset_to_center(&g.items[1], g.total_width, g.viewport_width), 80);
}

#[test]
fn offset_to_center_is_zero_when_content_fits() {
    let items = contiguous(&[50, 50]);
    for item in &items {
        assert_eq!(offset_to_center(item, 100, 300), 0);
    }
}

#[test]
fn centered_index_boundary_items_claim_scroll_extremes() {
    // Three contiguous 100-wide items, viewport 100: reachable offsets are
    // exactly 0 / 100 / 200.
    let items = contiguous(&[100, 100, 100]);
    assert_eq!(centered_index(0, &items, 300, 100), 0);
    assert_eq!(centered_index(100, &items, 300, 100), 1);
    assert_eq!(centered_index(200, &items, 300, 100), 2);

    // Half-width band edges.
    assert_eq!(centered_index(50, &items, 300, 100), 0);
    assert_eq!(centered_index(51, &items, 300, 100), 1);
    assert_eq!(centered_index(149, &items, 300, 100), 1);
    assert_eq!(centered_index(151, &items, 300, 100), 2);
}

#[test]
fn centered_index_saturated_strip_reports_first() {
    // Content fits the viewport exactly: every reachable offset is 0 and the
    // first band wins at scroll 0.
    let items = contiguous(&[100, 100, 100]);
    assert_eq!(centered_index(0, &items, 300, 300), 0);
}

#[test]
fn centered_index_falls_back_to_first_on_band_gap() {
    // Sharply varying spacing leaves offsets no band claims.
    let items = [
        PlacedItem { index: 0, left: 0, width: 10 },
        PlacedItem { index: 1, left: 500, width: 10 },
        PlacedItem { index: 2, left: 990, width: 10 },
    ];
    // Band 0 ends at 5, band 1 starts at 450: offset 100 sits in the gap.
    assert_eq!(centered_index(100, &items, 1000, 100), 0);
    assert_eq!(centered_index(455, &items, 1000, 100), 1);
}

#[test]
fn strip_invariants_hold_for_random_inputs() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let count = rng.gen_range_usize(1, 9);
        let widths: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(1, 400)).collect();
        let viewport = rng.gen_range_u32(1, 600);
        let children = sizes(&widths);

        let g = layout_strip(&children, viewport, 50);
        let measured: u64 = widths.iter().map(|&w| w.max(50) as u64).sum();
        assert_eq!(
            g.total_width,
            g.start_padding as u64 + measured + g.end_padding as u64
        );
        assert_eq!(g.content_width(), measured);

        // Idempotence: a second pass over the same inputs is identical.
        assert_eq!(g, layout_strip(&children, viewport, 50));

        let available = g.max_scroll_offset();
        let mut prev = 0u64;
        for item in &g.items {
            let off = offset_to_center(item, g.total_width, g.viewport_width);
            assert!(off <= available);
            assert!(off >= prev, "offset ordering inversion at {}", item.index);
            prev = off;
        }

        // Scroll zero always detects the first item.
        assert_eq!(centered_index(0, &g.items, g.total_width, g.viewport_width), 0);
    }
}

#[test]
fn lens_collapsed_is_packed_row() {
    let children = [
        ChildSize::new(50, 50),
        ChildSize::new(50, 50),
        ChildSize::new(60, 50),
    ];
    let factors = [0.0, 0.5, 0.9];
    let g = layout_lens(&children, &factors, 300, 1900, 0.0);

    assert_eq!(g.start_padding, 0);
    assert_eq!(g.end_padding, 0);
    assert_eq!(g.total_width, 160);
    let lefts: Vec<i64> = g.items.iter().map(|it| it.left).collect();
    assert_eq!(lefts, [0, 50, 100]);
    assert!(g.insufficient_ranges().is_empty());
}

#[test]
fn lens_expanded_places_items_at_start_factors() {
    let range = RatioRange::new(0.2, 4.8);
    let items = [
        LensItem::Single { ratio: 0.2 },
        LensItem::Single { ratio: 1.0 },
        LensItem::Range { start: 3.8, end: 5.2 },
    ];
    let factors: Vec<f32> = items.iter().map(|it| it.start_factor(range)).collect();
    let children = [
        ChildSize::new(50, 50),
        ChildSize::new(50, 50),
        ChildSize::new(60, 50),
    ];
    let g = layout_lens(&children, &factors, 300, 1900, 1.0);

    assert_eq!(g.start_padding, 150); // half the viewport at full progress
    assert_eq!(g.total_width, 1900 + 300);
    // round(factor * 1900 - width / 2) + 150
    let lefts: Vec<i64> = g.items.iter().map(|it| it.left).collect();
    assert_eq!(lefts, [125, 455, 1607]);
}

#[test]
fn lens_fixed_points_are_idempotent() {
    let children = [ChildSize::new(40, 40), ChildSize::new(40, 40)];
    let factors = [0.1, 0.8];
    for t in [0.0, 1.0] {
        let a = layout_lens(&children, &factors, 200, 1000, t);
        let b = layout_lens(&children, &factors, 200, 1000, t);
        assert_eq!(a, b);
    }
}

#[test]
fn lens_progress_interpolates_between_fixed_points() {
    let children = [ChildSize::new(40, 40), ChildSize::new(40, 40)];
    let factors = [0.1, 0.8];
    let packed = layout_lens(&children, &factors, 200, 1000, 0.0);
    let spread = layout_lens(&children, &factors, 200, 1000, 1.0);

    let mut prev_total = packed.total_width;
    for step in 1..=10 {
        let t = step as f32 / 10.0;
        let g = layout_lens(&children, &factors, 200, 1000, t);
        assert!(g.total_width >= prev_total);
        prev_total = g.total_width;

        for (i, item) in g.items.iter().enumerate() {
            let lo = packed.items[i].left.min(spread.items[i].left);
            let hi = packed.items[i].left.max(spread.items[i].left);
            assert!(item.left >= lo && item.left <= hi);
        }
    }
    assert_eq!(prev_total, spread.total_width);
}

#[test]
fn lens_progress_is_clamped() {
    let children = [ChildSize::new(40, 40)];
    let factors = [0.5];
    assert_eq!(
        layout_lens(&children, &factors, 200, 1000, -3.0),
        layout_lens(&children, &factors, 200, 1000, 0.0)
    );
    assert_eq!(
        layout_lens(&children, &factors, 200, 1000, 7.5),
        layout_lens(&children, &factors, 200, 1000, 1.0)
    );
}

#[test]
fn lens_insufficient_ranges_cover_unclaimed_track() {
    let children = [ChildSize::new(100, 10), ChildSize::new(100, 10)];
    let factors = [0.0, 1.0];
    let g = layout_lens(&children, &factors, 0, 1000, 1.0);

    let ranges = g.insufficient_ranges();
    assert_eq!(ranges.len(), 1);
    let gap = ranges[0];
    assert!((gap.start - 0.05).abs() < 1e-6);
    assert!((gap.end - 0.95).abs() < 1e-6);
}

#[test]
fn start_factor_maps_and_clamps_ratio_range() {
    let range = RatioRange::new(0.2, 4.8);
    assert_eq!(LensItem::Single { ratio: 0.2 }.start_factor(range), 0.0);
    assert_eq!(LensItem::Single { ratio: 6.0 }.start_factor(range), 1.0);
    assert_eq!(LensItem::Single { ratio: 0.1 }.start_factor(range), 0.0);
    let mid = LensItem::Range { start: 2.5, end: 3.0 }.start_factor(range);
    assert!((mid - 0.5).abs() < 1e-6);

    // Degenerate range: everything lands at the track start.
    assert_eq!(
        LensItem::Single { ratio: 1.0 }.start_factor(RatioRange::new(2.0, 2.0)),
        0.0
    );
}

#[test]
fn engine_publishes_geometry_and_centers_items() {
    let mut s = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::strip()).with_initial_viewport_width(300),
    );
    assert!(s.geometry().is_empty());

    s.set_children(sizes(&[100, 60, 120]));
    assert_eq!(s.total_width(), 470);
    assert_eq!(s.count(), 3);
    assert_eq!(s.centered_index(), 0);

    assert_eq!(s.scroll_to_center(1), Some(80));
    assert_eq!(s.scroll_offset(), 80);
    assert_eq!(s.centered_index(), 1);
}

#[test]
fn engine_scroll_to_center_out_of_bounds_is_noop() {
    let mut s = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::strip()).with_initial_viewport_width(300),
    );
    s.set_children(sizes(&[100, 100]));
    s.set_scroll_offset(17);

    assert_eq!(s.offset_to_center(5), None);
    assert_eq!(s.scroll_to_center(5), None);
    assert_eq!(s.scroll_offset(), 17);
}

#[test]
fn center_change_fires_distinct_until_changed() {
    let fired = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let mut s = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::strip())
            .with_initial_viewport_width(300)
            .with_on_center_change(Some({
                let fired = Arc::clone(&fired);
                let last = Arc::clone(&last);
                move |index| {
                    fired.fetch_add(1, Ordering::Relaxed);
                    last.store(index, Ordering::Relaxed);
                }
            })),
    );

    s.set_children(sizes(&[100, 60, 120]));
    assert_eq!(fired.load(Ordering::Relaxed), 1);
    assert_eq!(last.load(Ordering::Relaxed), 0);

    // Still inside item 0's band: notified state change, same center.
    s.set_scroll_offset(10);
    assert_eq!(fired.load(Ordering::Relaxed), 1);

    s.set_scroll_offset(80);
    assert_eq!(fired.load(Ordering::Relaxed), 2);
    assert_eq!(last.load(Ordering::Relaxed), 1);
}

#[test]
fn batch_update_coalesces_notifications() {
    let changed = Arc::new(AtomicUsize::new(0));
    let mut s = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::strip())
            .with_initial_viewport_width(300)
            .with_on_change(Some({
                let changed = Arc::clone(&changed);
                move |_: &CenterStrip| {
                    changed.fetch_add(1, Ordering::Relaxed);
                }
            })),
    );

    s.batch_update(|s| {
        s.set_children(sizes(&[100, 60, 120]));
        s.set_scroll_offset(80);
        s.set_viewport_width(280);
    });
    assert_eq!(changed.load(Ordering::Relaxed), 1);
}

#[test]
fn engine_lens_mode_follows_progress() {
    let range = RatioRange::new(0.2, 4.8);
    let mut s = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::Lens {
            expand_width: 1000,
            ratio_range: range,
        })
        .with_initial_viewport_width(200),
    );
    s.batch_update(|s| {
        s.set_children([ChildSize::new(40, 40), ChildSize::new(40, 40)]);
        s.set_lens_items([
            LensItem::Single { ratio: 0.2 },
            LensItem::Single { ratio: 4.8 },
        ]);
    });

    // Collapsed: packed row.
    assert_eq!(s.total_width(), 80);
    assert_eq!(s.geometry().items[1].left, 40);

    s.set_progress(1.0);
    assert_eq!(s.progress(), 1.0);
    assert_eq!(s.total_width(), 1000 + 200);
    // round(1.0 * 1000 - 20) + 100
    assert_eq!(s.geometry().items[1].left, 1080);
    assert!(!s.insufficient_ranges().is_empty());

    // Out-of-range progress clamps.
    s.set_progress(5.0);
    assert_eq!(s.progress(), 1.0);
}

#[test]
fn engine_strip_mode_ignores_progress() {
    let mut s = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::strip()).with_initial_viewport_width(300),
    );
    s.set_children(sizes(&[100, 100]));
    let before = s.geometry().clone();
    s.set_progress(0.7);
    assert_eq!(s.geometry(), &before);
}

#[test]
fn initial_offset_provider_is_used() {
    INITIAL_OFFSET_PROVIDER_CALLED.store(0, Ordering::Relaxed);
    let s = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::strip()).with_initial_offset(InitialOffset::Provider(
            Arc::new(|| {
                INITIAL_OFFSET_PROVIDER_CALLED.fetch_add(1, Ordering::Relaxed);
                42
            }),
        )),
    );
    assert_eq!(s.scroll_offset(), 42);
    assert!(INITIAL_OFFSET_PROVIDER_CALLED.load(Ordering::Relaxed) >= 1);
}

#[test]
fn set_viewport_and_scroll_clamped_respects_max() {
    let mut s = CenterStrip::new(CenterStripOptions::new(LayoutMode::strip()));
    s.set_children(sizes(&[100, 60, 120]));
    s.set_viewport_and_scroll_clamped(300, u64::MAX);
    assert_eq!(s.scroll_offset(), s.max_scroll_offset());
}
