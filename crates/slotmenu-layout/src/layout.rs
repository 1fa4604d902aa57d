#![forbid(unsafe_code)]

//! Slot position and size computation.
//!
//! [`LayoutEngine`] is a pure function of its inputs: a registry snapshot,
//! the host's slot template, the menu configuration, a slot index, and a
//! scroll offset. Nothing is cached.
//!
//! # Placement rules
//!
//! With `h` the profile height, `w` the template width and `m` the margin:
//!
//! | Kind                   | Slot `i` (no scroll)      | Navigation reserve |
//! |------------------------|---------------------------|--------------------|
//! | `Vertical`/`Submenu`   | `(0, -(h + 2m) * i)`      | `y -= h + m`       |
//! | `Horizontal`/`BiMenu`  | `((w + 2m) * i, 0)`       | `x += w + m`       |
//!
//! Scrolling translates the whole container by `offset * bump_distance`
//! along the axis. Slot size is the template with its height forced to `h`;
//! the width is left as the template has it. Only the height is forced, and
//! hosts may depend on that.

use slotmenu_core::geometry::{Point, Size};

use crate::config::MenuConfiguration;
use crate::navigation::BumpDirection;
use crate::registry::SlotSizeRegistry;
use crate::Axis;

/// Computes slot placements for a registry snapshot and slot template.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    registry: &'a SlotSizeRegistry,
    template: Size,
}

impl<'a> LayoutEngine<'a> {
    /// Create an engine reading heights from `registry` and widths from `template`.
    pub const fn new(registry: &'a SlotSizeRegistry, template: Size) -> Self {
        Self { registry, template }
    }

    /// The host slot template.
    #[inline]
    pub const fn template(&self) -> Size {
        self.template
    }

    /// Height forced onto every slot of `config`.
    #[inline]
    pub fn slot_height(&self, config: &MenuConfiguration) -> f32 {
        self.registry.height_of(config.size_profile())
    }

    /// Size of each slot: template width, profile height.
    #[inline]
    pub fn size_of(&self, config: &MenuConfiguration) -> Size {
        self.template.with_height(self.slot_height(config))
    }

    /// Slot extent along the layout axis.
    fn extent(&self, config: &MenuConfiguration) -> f32 {
        match config.axis() {
            Axis::Vertical => self.slot_height(config),
            Axis::Horizontal => self.template.width,
        }
    }

    /// Distance between the starts of consecutive slots.
    #[inline]
    pub fn pitch(&self, config: &MenuConfiguration) -> f32 {
        self.extent(config) + 2.0 * config.slot_margin()
    }

    /// Space kept ahead of slot 0 for the backward control.
    #[inline]
    pub fn navigation_reserve(&self, config: &MenuConfiguration) -> f32 {
        if config.use_navigation_buttons() {
            self.extent(config) + config.slot_margin()
        } else {
            0.0
        }
    }

    /// Position of slot `index` inside an unscrolled container.
    pub fn slot_position(&self, config: &MenuConfiguration, index: usize) -> Point {
        let distance = self.pitch(config) * index as f32 + self.navigation_reserve(config);
        config.axis().flow(distance)
    }

    /// Container translation for `scroll_offset`.
    ///
    /// Always zero for menus without navigation buttons.
    pub fn container_offset(&self, config: &MenuConfiguration, scroll_offset: i32) -> Point {
        if !config.use_navigation_buttons() {
            return Point::ORIGIN;
        }
        config
            .axis()
            .along(scroll_offset as f32 * self.registry.bump_distance())
    }

    /// Position of slot `index` with `scroll_offset` applied.
    pub fn position_of(&self, config: &MenuConfiguration, index: usize, scroll_offset: i32) -> Point {
        self.slot_position(config, index) + self.container_offset(config, scroll_offset)
    }

    /// Position of a navigation control.
    ///
    /// Controls sit outside the scrolled container. The backward control
    /// occupies the reserve at the container anchor; the forward control sits
    /// where slot `slot_limit` would be, just past the visible window.
    pub fn navigation_position(&self, config: &MenuConfiguration, direction: BumpDirection) -> Point {
        match direction {
            BumpDirection::Backward => Point::ORIGIN,
            BumpDirection::Forward => self.slot_position(config, config.slot_limit()),
        }
    }

    /// Backward bumps needed to bring the last slot inside the visible window.
    ///
    /// After that many bumps the last slot starts before the forward control.
    /// Zero when every slot already fits within `slot_limit`, or when the
    /// bump distance is not a positive finite number.
    pub fn max_scroll_steps(&self, config: &MenuConfiguration, slot_count: usize) -> u32 {
        let hidden = slot_count.saturating_sub(config.slot_limit());
        let bump = self.registry.bump_distance();
        if hidden == 0 || !(bump.is_finite() && bump > 0.0) {
            return 0;
        }

        let overflow = hidden as f32 * self.pitch(config);
        if !(overflow.is_finite() && overflow > 0.0) {
            return 0;
        }
        // Float-to-int casts saturate.
        (overflow / bump).ceil() as u32
    }
}
