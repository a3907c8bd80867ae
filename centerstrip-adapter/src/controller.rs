use alloc::sync::Arc;

use centerstrip::{CenterStrip, CenterStripOptions};

use crate::{Easing, Tween};

/// Drag-lifecycle events forwarded from the host's gesture source.
///
/// The controllers treat any non-`Start` event after a `Start` as the end of
/// the drag, mirroring how gesture interaction streams report releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEvent {
    Start,
    Stop,
    Cancel,
}

/// A callback fired when a drag release lands on a different item than the
/// current selection.
pub type SelectCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Default duration of the snap-to-center animation.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 250;

/// A framework-neutral controller that re-snaps the strip to whatever item
/// is centered when a drag ends.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` / `on_scroll` when UI events occur
/// - `on_drag` for each drag-lifecycle event
/// - `tick(now_ms)` each frame while a snap animation is live
///
/// The offset returned from `tick()` is what the host writes into its real
/// scroll position; the engine state stays in sync along the way.
#[derive(Clone, Debug)]
pub struct SnapController {
    strip: CenterStrip,
    tween: Option<Tween>,
    dragging: bool,
    snap_duration_ms: u64,
    easing: Easing,
}

impl SnapController {
    pub fn new(options: CenterStripOptions) -> Self {
        Self::from_strip(CenterStrip::new(options))
    }

    pub fn from_strip(strip: CenterStrip) -> Self {
        Self {
            strip,
            tween: None,
            dragging: false,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            easing: Easing::SmoothStep,
        }
    }

    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.snap_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn strip(&self) -> &CenterStrip {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut CenterStrip {
        &mut self.strip
    }

    pub fn into_strip(self) -> CenterStrip {
        self.strip
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_width(&mut self, viewport_width: u32) {
        self.strip.set_viewport_width(viewport_width);
    }

    /// Call this when the UI reports a scroll offset change (e.g. the user's
    /// finger moving the strip).
    ///
    /// This cancels any active snap animation.
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        self.cancel_animation();
        self.strip.set_scroll_offset_clamped(scroll_offset);
    }

    /// Feeds one drag-lifecycle event into the controller.
    ///
    /// A release snaps the strip back onto the item currently nearest the
    /// viewport center.
    pub fn on_drag(&mut self, event: DragEvent, now_ms: u64) {
        match event {
            DragEvent::Start => {
                self.cancel_animation();
                self.dragging = true;
            }
            DragEvent::Stop | DragEvent::Cancel => {
                if !self.dragging {
                    return;
                }
                self.dragging = false;
                let centered = self.strip.centered_index();
                self.snap_to_index(centered, now_ms);
            }
        }
    }

    /// Starts (or retargets) a snap animation centering the item at `index`.
    ///
    /// Returns the target offset, or `None` when the index has no placed
    /// item (such requests are no-ops).
    pub fn snap_to_index(&mut self, index: usize, now_ms: u64) -> Option<u64> {
        let to = self.strip.offset_to_center(index)?;
        self.start_tween(to, now_ms);
        Some(to)
    }

    /// Advances the controller.
    ///
    /// While a snap animation is live, updates the engine's scroll offset and
    /// returns the offset the host should apply; otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;
        let off = tween.sample(now_ms);
        self.strip.set_scroll_offset_clamped(off);

        if tween.is_done(now_ms) {
            self.tween = None;
        }

        Some(self.strip.scroll_offset())
    }

    fn start_tween(&mut self, to: u64, now_ms: u64) {
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, to, self.snap_duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.strip.scroll_offset(),
                    to,
                    now_ms,
                    self.snap_duration_ms,
                    self.easing,
                ));
            }
        }
    }
}

/// A selection-aware drag controller.
///
/// The selected index is owned by the host (it usually lives in application
/// state); the controller mirrors it. On drag release:
///
/// - if the drag left a *different* item centered, the selection-changed
///   callback fires with the new index and no scroll request is issued; the
///   host confirms the selection through [`Self::set_selected`], which then
///   animates the strip onto it;
/// - if the centered item is still the selected one, the strip snaps back to
///   its center (the drag didn't cross into a new item).
#[derive(Clone)]
pub struct SelectionController {
    inner: SnapController,
    selected: usize,
    on_select: Option<SelectCallback>,
}

impl SelectionController {
    pub fn new(options: CenterStripOptions, selected: usize) -> Self {
        Self {
            inner: SnapController::new(options),
            selected,
            on_select: None,
        }
    }

    pub fn from_strip(strip: CenterStrip, selected: usize) -> Self {
        Self {
            inner: SnapController::from_strip(strip),
            selected,
            on_select: None,
        }
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.inner = self.inner.with_snap_animation(duration_ms, easing);
        self
    }

    pub fn strip(&self) -> &CenterStrip {
        self.inner.strip()
    }

    pub fn strip_mut(&mut self) -> &mut CenterStrip {
        self.inner.strip_mut()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    pub fn cancel_animation(&mut self) {
        self.inner.cancel_animation();
    }

    pub fn on_viewport_width(&mut self, viewport_width: u32) {
        self.inner.on_viewport_width(viewport_width);
    }

    pub fn on_scroll(&mut self, scroll_offset: u64) {
        self.inner.on_scroll(scroll_offset);
    }

    /// Mirrors an externally driven selection change and animates the strip
    /// onto the newly selected item.
    ///
    /// The scroll request is issued unconditionally; an index with no placed
    /// item is remembered but scrolls nowhere.
    pub fn set_selected(&mut self, index: usize, now_ms: u64) {
        self.selected = index;
        self.inner.snap_to_index(index, now_ms);
    }

    pub fn on_drag(&mut self, event: DragEvent, now_ms: u64) {
        match event {
            DragEvent::Start => {
                self.inner.cancel_animation();
                self.inner.dragging = true;
            }
            DragEvent::Stop | DragEvent::Cancel => {
                if !self.inner.dragging {
                    return;
                }
                self.inner.dragging = false;
                self.release(now_ms);
            }
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.inner.tick(now_ms)
    }

    fn release(&mut self, now_ms: u64) {
        let centered = self.inner.strip.centered_index();
        if centered != self.selected {
            if let Some(cb) = &self.on_select {
                cb(centered);
            }
        } else {
            self.inner.snap_to_index(self.selected, now_ms);
        }
    }
}

impl core::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionController")
            .field("inner", &self.inner)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
