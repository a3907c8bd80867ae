use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::options::{CenterStripOptions, InitialOffset, LayoutMode};
use crate::types::{ChildSize, Geometry, LensItem, PlacedItem, Span};
use crate::{center, layout};

/// A headless center-aligned strip engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - The host adapter drives it by mirroring measured child sizes, the
///   viewport width, the scroll offset and (for lens mode) the animation
///   progress into it.
/// - It publishes a fresh [`Geometry`] snapshot after every relevant input
///   change and derives the centered index from the current scroll offset.
///
/// Scroll changes are requests against the host's scroll primitive: the
/// engine computes target offsets, the adapter animates toward them. For the
/// drag-release snap workflow see the `centerstrip-adapter` crate.
#[derive(Clone, Debug)]
pub struct CenterStrip {
    options: CenterStripOptions,
    children: Vec<ChildSize>,
    lens_items: Vec<LensItem>,
    start_factors: Vec<f32>,
    viewport_width: u32,
    scroll_offset: u64,
    progress: f32,
    geometry: Geometry,

    last_center: Cell<Option<usize>>,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl CenterStrip {
    /// Creates a new engine from options.
    ///
    /// `options.initial_viewport_width` and `options.initial_offset` are
    /// applied immediately; geometry stays empty until children arrive.
    pub fn new(options: CenterStripOptions) -> Self {
        let scroll_offset = options.initial_offset.resolve();
        sdebug!(
            mode = ?options.mode,
            viewport_width = options.initial_viewport_width,
            scroll_offset,
            "CenterStrip::new"
        );
        let mut s = Self {
            children: Vec::new(),
            lens_items: Vec::new(),
            start_factors: Vec::new(),
            viewport_width: options.initial_viewport_width,
            scroll_offset,
            progress: 0.0,
            geometry: Geometry::default(),
            last_center: Cell::new(None),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
            options,
        };
        s.relayout();
        s
    }

    pub fn options(&self) -> &CenterStripOptions {
        &self.options
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&CenterStrip) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_on_center_change(
        &mut self,
        on_center_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options.on_center_change = on_center_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_initial_offset(&mut self, initial_offset: u64) {
        self.options.initial_offset = InitialOffset::Value(initial_offset);
        self.notify();
    }

    fn notify_now(&self) {
        let center = self.centered_index();
        if self.last_center.replace(Some(center)) != Some(center) {
            if let Some(cb) = &self.options.on_center_change {
                cb(center);
            }
        }
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single notification.
    ///
    /// Recommended for adapters: on a typical frame the viewport width,
    /// scroll offset and progress may all change together, and each setter
    /// would otherwise notify separately.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.options.mode
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        if self.options.mode == mode {
            return;
        }
        self.options.mode = mode;
        self.relayout();
        self.notify();
    }

    pub fn count(&self) -> usize {
        self.geometry.items.len()
    }

    /// Replaces the measured children (one measurement pass's results).
    pub fn set_children(&mut self, children: impl IntoIterator<Item = ChildSize>) {
        self.children.clear();
        self.children.extend(children);
        strace!(count = self.children.len(), "set_children");
        self.relayout();
        self.notify();
    }

    /// Replaces the lens items paired index-for-index with the children.
    ///
    /// Each item's start factor is derived from its start ratio within the
    /// configured ratio range and stays fixed until the items or the range
    /// change. Ignored by strip mode.
    pub fn set_lens_items(&mut self, lens_items: impl IntoIterator<Item = LensItem>) {
        self.lens_items.clear();
        self.lens_items.extend(lens_items);
        self.relayout();
        self.notify();
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        if self.viewport_width == viewport_width {
            return;
        }
        self.viewport_width = viewport_width;
        self.relayout();
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        strace!(offset, "set_scroll_offset");
        self.scroll_offset = offset;
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_width: u32, scroll_offset: u64) {
        self.batch_update(|s| {
            s.set_viewport_width(viewport_width);
            s.set_scroll_offset(scroll_offset);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_width: u32, scroll_offset: u64) {
        self.batch_update(|s| {
            s.set_viewport_width(viewport_width);
            s.set_scroll_offset_clamped(scroll_offset);
        });
    }

    /// Collapse/expand progress, `0` = collapsed, `1` = expanded.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Mirrors the externally driven animation progress into the engine.
    ///
    /// Clamped to `[0, 1]`. Only lens mode relayouts; strip geometry does
    /// not depend on progress.
    pub fn set_progress(&mut self, progress: f32) {
        let t = progress.clamp(0.0, 1.0);
        if self.progress == t {
            return;
        }
        self.progress = t;
        if matches!(self.options.mode, LayoutMode::Lens { .. }) {
            self.relayout();
            self.notify();
        }
    }

    /// The current layout geometry snapshot.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn item(&self, index: usize) -> Option<PlacedItem> {
        self.geometry.items.get(index).copied()
    }

    pub fn total_width(&self) -> u64 {
        self.geometry.total_width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.geometry.max_scroll_offset()
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Index of the item currently nearest the viewport center.
    ///
    /// Pure function of the current geometry and scroll offset; observers
    /// get change notifications through `on_center_change`.
    pub fn centered_index(&self) -> usize {
        center::centered_index(
            self.scroll_offset,
            &self.geometry.items,
            self.geometry.total_width,
            self.viewport_width,
        )
    }

    /// Scroll offset that would center the item at `index`.
    ///
    /// `None` when no such item is placed (stale geometry, out of bounds);
    /// callers treat that as a no-op.
    pub fn offset_to_center(&self, index: usize) -> Option<u64> {
        let item = self.geometry.items.get(index)?;
        Some(center::offset_to_center(
            item,
            self.geometry.total_width,
            self.viewport_width,
        ))
    }

    /// Centers the item at `index` immediately (no animation).
    ///
    /// Returns the applied offset, or `None` if the index has no placed
    /// item. For the animated form, drive the returned target through a
    /// tween (see `centerstrip-adapter`).
    pub fn scroll_to_center(&mut self, index: usize) -> Option<u64> {
        let offset = self.offset_to_center(index)?;
        strace!(index, offset, "scroll_to_center");
        self.set_scroll_offset(offset);
        Some(offset)
    }

    /// Fractional ranges of the lens track covered by no item (overlay hint).
    pub fn insufficient_ranges(&self) -> Vec<Span> {
        self.geometry.insufficient_ranges()
    }

    fn relayout(&mut self) {
        self.geometry = match self.options.mode {
            LayoutMode::Strip { min_item_width } => {
                layout::layout_strip(&self.children, self.viewport_width, min_item_width)
            }
            LayoutMode::Lens {
                expand_width,
                ratio_range,
            } => {
                self.start_factors.clear();
                self.start_factors
                    .extend(self.lens_items.iter().map(|it| it.start_factor(ratio_range)));
                // Children may land before their lens items within one batch;
                // unmatched children sit at the track start until they do.
                self.start_factors.resize(self.children.len(), 0.0);
                layout::layout_lens(
                    &self.children,
                    &self.start_factors,
                    self.viewport_width,
                    expand_width,
                    self.progress,
                )
            }
        };
    }
}
