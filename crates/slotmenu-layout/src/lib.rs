#![forbid(unsafe_code)]

//! Menu layout and navigation engine.
//!
//! This crate computes where each option of a console-style menu goes and
//! tracks scroll ("bump") navigation, without owning any rendering resources:
//!
//! - [`SlotSizeRegistry`] / [`RegistryHandle`] - size-profile heights and bump distance
//! - [`MenuConfiguration`] - validated, immutable menu parameters (via [`MenuConfigurationBuilder`])
//! - [`LayoutEngine`] - pure slot position/size computation
//! - [`NavigationController`] - scroll offset state machine
//! - [`Menu`] - the live entity tying the above together
//! - [`RenderAdapter`] - the contract a host UI implements to materialize slots
//!
//! # Example
//!
//! ```
//! use slotmenu_layout::{Menu, MenuConfiguration, MenuKind, RecordingAdapter, RegistryHandle};
//! use slotmenu_core::geometry::{Point, Size};
//!
//! let registry = RegistryHandle::default();
//! let config = MenuConfiguration::builder()
//!     .kind(MenuKind::Vertical)
//!     .build()
//!     .unwrap();
//!
//! let mut menu = Menu::new(config, registry);
//! let mut adapter = RecordingAdapter::new(Size::new(240.0, 40.0));
//! menu.fill(["Start", "Options", "Quit"], &mut adapter).unwrap();
//!
//! assert_eq!(menu.position_of(1).unwrap(), Point::new(0.0, -119.0));
//! assert_eq!(adapter.slots().len(), 3);
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod layout;
pub mod menu;
pub mod navigation;
pub mod registry;

pub use adapter::{NavigationPlacement, RecordedSlot, RecordingAdapter, RenderAdapter, SlotPlacement};
pub use config::{MenuConfiguration, MenuConfigurationBuilder};
pub use error::{ConfigurationError, MenuError, Result};
pub use layout::LayoutEngine;
pub use menu::{BinaryChoice, Menu};
pub use navigation::{BumpDirection, BumpOutcome, NavigationController, ScrollPolicy};
pub use registry::{RegistryHandle, SizeProfile, SlotSizeRegistry};
pub use slotmenu_core::geometry::{Point, Size};

/// The primary axis a menu lays its slots along and scrolls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Slots stack downward from the container anchor.
    #[default]
    Vertical,
    /// Slots run rightward from the container anchor.
    Horizontal,
}

impl Axis {
    /// Sign of the direction slots advance in, in host coordinates.
    ///
    /// Host Y grows upward, so vertical menus advance toward negative `y`.
    /// A forward bump moves the container the same way, which is why this is
    /// also the sign a forward bump applies to the scroll offset.
    #[inline]
    pub const fn flow_sign(self) -> i32 {
        match self {
            Self::Vertical => -1,
            Self::Horizontal => 1,
        }
    }

    /// A point `distance` units along this axis (raw host orientation).
    #[inline]
    pub const fn along(self, distance: f32) -> Point {
        match self {
            Self::Vertical => Point::new(0.0, distance),
            Self::Horizontal => Point::new(distance, 0.0),
        }
    }

    /// A point `distance` units in the direction slots advance.
    #[inline]
    pub fn flow(self, distance: f32) -> Point {
        self.along(self.flow_sign() as f32 * distance)
    }
}

/// The four menu kinds.
///
/// `Submenu` lays out like `Vertical` and `BiMenu` like `Horizontal`; they
/// differ in meaning only. A `BiMenu` is a positive/negative choice and must be
/// filled with exactly two options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MenuKind {
    /// A column of options.
    #[default]
    Vertical,
    /// A row of options.
    Horizontal,
    /// A column overlaid on another menu.
    Submenu,
    /// A two-option positive/negative row.
    BiMenu,
}

impl MenuKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Vertical, Self::Horizontal, Self::Submenu, Self::BiMenu];

    /// Axis used for layout and scrolling.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Vertical | Self::Submenu => Axis::Vertical,
            Self::Horizontal | Self::BiMenu => Axis::Horizontal,
        }
    }

    /// Exact option count this kind requires, if any.
    #[inline]
    pub const fn required_option_count(self) -> Option<usize> {
        match self {
            Self::BiMenu => Some(2),
            _ => None,
        }
    }
}
