use alloc::sync::Arc;

use crate::strip::CenterStrip;
use crate::types::RatioRange;

/// A callback fired when the engine's state changes.
pub type OnChangeCallback = Arc<dyn Fn(&CenterStrip) + Send + Sync>;

/// A callback fired when the derived centered index changes.
///
/// This is distinct-until-changed: scroll updates that keep the same item
/// centered do not re-fire it.
pub type OnCenterChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Minimum measured width of a strip item, in pixels.
///
/// Matches the minimum touch-target width tab rows are measured with.
pub const DEFAULT_MIN_ITEM_WIDTH: u32 = 50;

/// Width of the fully expanded lens track, in pixels.
pub const LENS_FULLY_EXPANDED_WIDTH: u32 = 1900;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `CenterStrip::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Which layout pass the engine runs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Packed row with center-reach padding at both ends (tab strip).
    Strip { min_item_width: u32 },
    /// Width-interpolated zoom-ratio picker.
    Lens {
        expand_width: u32,
        ratio_range: RatioRange,
    },
}

impl LayoutMode {
    /// Strip mode with the default minimum item width.
    pub fn strip() -> Self {
        Self::Strip {
            min_item_width: DEFAULT_MIN_ITEM_WIDTH,
        }
    }

    /// Lens mode with the default fully expanded track width.
    pub fn lens(ratio_range: RatioRange) -> Self {
        Self::Lens {
            expand_width: LENS_FULLY_EXPANDED_WIDTH,
            ratio_range,
        }
    }
}

/// Configuration for [`crate::CenterStrip`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct CenterStripOptions {
    pub mode: LayoutMode,

    /// Viewport width used until the first measurement pass reports one.
    pub initial_viewport_width: u32,

    /// Initial scroll offset.
    pub initial_offset: InitialOffset,

    /// Optional callback fired when the engine's internal state changes.
    pub on_change: Option<OnChangeCallback>,

    /// Optional callback fired when the derived centered index changes.
    pub on_center_change: Option<OnCenterChangeCallback>,
}

impl CenterStripOptions {
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            initial_viewport_width: 0,
            initial_offset: InitialOffset::default(),
            on_change: None,
            on_center_change: None,
        }
    }

    pub fn with_initial_viewport_width(mut self, viewport_width: u32) -> Self {
        self.initial_viewport_width = viewport_width;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&CenterStrip) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_center_change(
        mut self,
        on_center_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_center_change = on_center_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CenterStripOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CenterStripOptions")
            .field("mode", &self.mode)
            .field("initial_viewport_width", &self.initial_viewport_width)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
