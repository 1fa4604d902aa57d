#![forbid(unsafe_code)]

//! Rendering adapter contract.
//!
//! The engine never creates visual elements. During [`Menu::fill`](crate::Menu::fill)
//! it tells a [`RenderAdapter`] where each slot and navigation control should
//! go; the adapter materializes them in whatever UI framework the host uses and
//! forwards control activations back as [`Menu::bump`](crate::Menu::bump) calls.

use slotmenu_core::geometry::{Point, Size};

use crate::navigation::BumpDirection;

/// Intended placement of one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlacement<'a> {
    /// Zero-based slot index; also the slot's display order.
    pub index: usize,
    /// Option label to show in the slot.
    pub label: &'a str,
    /// Slot position, scroll offset included.
    pub position: Point,
    /// Slot size: template width, profile height.
    pub size: Size,
}

impl SlotPlacement<'_> {
    /// Element name for the slot: its index in decimal.
    pub fn name(&self) -> String {
        self.index.to_string()
    }
}

/// Intended placement of a navigation control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationPlacement {
    /// Bump the control triggers.
    pub direction: BumpDirection,
    /// Control position; not affected by scrolling.
    pub position: Point,
    /// Same size as a slot.
    pub size: Size,
}

impl NavigationPlacement {
    /// Element name for the control.
    pub const fn name(&self) -> &'static str {
        self.direction.control_name()
    }
}

/// Host-side materialization of menu elements.
pub trait RenderAdapter {
    /// Dimensions of the host's slot template before any height override.
    fn slot_template(&self) -> Size;

    /// Create (or update) the visual element for a slot.
    fn materialize_slot(&mut self, slot: &SlotPlacement<'_>);

    /// Create the visual element for a navigation control.
    ///
    /// The host binds activation of the element to
    /// [`Menu::bump`](crate::Menu::bump) with `control.direction`.
    fn materialize_navigation(&mut self, control: &NavigationPlacement);
}

/// Owned copy of a [`SlotPlacement`] kept by [`RecordingAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSlot {
    pub index: usize,
    pub name: String,
    pub label: String,
    pub position: Point,
    pub size: Size,
}

impl From<&SlotPlacement<'_>> for RecordedSlot {
    fn from(slot: &SlotPlacement<'_>) -> Self {
        Self {
            index: slot.index,
            name: slot.name(),
            label: slot.label.to_owned(),
            position: slot.position,
            size: slot.size,
        }
    }
}

/// Headless adapter that records every materialization request.
///
/// Useful for snapshotting a layout, for hosts that pull placements instead of
/// being pushed them, and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    template: Size,
    slots: Vec<RecordedSlot>,
    controls: Vec<NavigationPlacement>,
}

impl RecordingAdapter {
    /// Record against a slot template of the given size.
    pub fn new(template: Size) -> Self {
        Self {
            template,
            slots: Vec::new(),
            controls: Vec::new(),
        }
    }

    /// Slots materialized so far, in request order.
    pub fn slots(&self) -> &[RecordedSlot] {
        &self.slots
    }

    /// Navigation controls materialized so far, in request order.
    pub fn controls(&self) -> &[NavigationPlacement] {
        &self.controls
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.controls.clear();
    }
}

impl RenderAdapter for RecordingAdapter {
    fn slot_template(&self) -> Size {
        self.template
    }

    fn materialize_slot(&mut self, slot: &SlotPlacement<'_>) {
        self.slots.push(RecordedSlot::from(slot));
    }

    fn materialize_navigation(&mut self, control: &NavigationPlacement) {
        self.controls.push(*control);
    }
}
