//! Adapter utilities for the `centerstrip` crate.
//!
//! The `centerstrip` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the small, framework-neutral pieces a host
//! adapter needs on top of it:
//!
//! - Drag-lifecycle controllers that snap the strip back to a centered item
//!   on release (selection-aware and plain variants)
//! - Tween-based smooth scrolling toward centering offsets, with
//!   retarget-cancels-previous semantics
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;


pub use controller::{
    DEFAULT_SNAP_DURATION_MS, DragEvent, SelectCallback, SelectionController, SnapController,
};
pub use tween::{Easing, Tween};
