#![forbid(unsafe_code)]

//! slotmenu public facade crate.
//!
//! Re-exports the geometry primitives and the menu layout engine under one
//! name, plus a prelude for the common menu lifecycle:
//!
//! ```
//! use slotmenu::prelude::*;
//!
//! let config = MenuConfiguration::builder()
//!     .kind(MenuKind::Horizontal)
//!     .navigation_buttons(true)
//!     .build()?;
//! let mut menu = Menu::new(config, RegistryHandle::default());
//! let mut adapter = RecordingAdapter::new(Size::new(120.0, 30.0));
//!
//! menu.fill(["Attack", "Defend", "Flee"], &mut adapter)?;
//! assert_eq!(adapter.controls().len(), 2);
//! # Ok::<(), slotmenu::Error>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use slotmenu_core::geometry::{Point, Size};

// --- Layout re-exports -----------------------------------------------------

pub use slotmenu_layout::{
    Axis, BinaryChoice, BumpDirection, BumpOutcome, ConfigurationError, LayoutEngine, Menu,
    MenuConfiguration, MenuConfigurationBuilder, MenuKind, NavigationController,
    NavigationPlacement, RecordedSlot, RecordingAdapter, RegistryHandle, RenderAdapter,
    ScrollPolicy, SizeProfile, SlotPlacement, SlotSizeRegistry,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for slotmenu operations.
pub use slotmenu_layout::MenuError as Error;

/// Standard result type for slotmenu APIs.
pub use slotmenu_layout::Result;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BinaryChoice, Error, Menu, MenuConfiguration, MenuKind, Point, RecordingAdapter,
        RegistryHandle, RenderAdapter, Result, Size, SizeProfile,
    };

    pub use crate::{core, layout};
}

pub use slotmenu_core as core;
pub use slotmenu_layout as layout;
