//! A headless center-aligned strip layout engine.
//!
//! For adapter-level utilities (drag controllers, snap tweens), see the
//! `centerstrip-adapter` crate.
//!
//! This crate focuses on the core math behind center-snapping horizontal
//! strips (tab bars, camera lens pickers): padding that lets the first and
//! last item reach the exact viewport center, scroll offset → centered-index
//! detection, item → centering-offset mapping, and width-interpolated layout
//! between a packed and a spread configuration.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - measured child sizes (width/height)
//! - viewport width and scroll offset
//! - drag-lifecycle events and, for the lens variant, an animation progress
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod center;
mod layout;
mod options;
mod strip;
mod types;

#[cfg(test)]
mod tests;

pub use center::{centered_index, offset_to_center};
pub use layout::{layout_lens, layout_strip};
pub use options::{
    CenterStripOptions, DEFAULT_MIN_ITEM_WIDTH, InitialOffset, LENS_FULLY_EXPANDED_WIDTH,
    LayoutMode, OnCenterChangeCallback, OnChangeCallback,
};
pub use strip::CenterStrip;
pub use types::{ChildSize, Geometry, LensItem, PlacedItem, RatioRange, Span};
