#![forbid(unsafe_code)]

//! Smoke tests for the facade re-exports.

use slotmenu::prelude::*;
use slotmenu::{BumpDirection, ScrollPolicy};

#[test]
fn prelude_drives_full_lifecycle() {
    let registry = RegistryHandle::default();
    registry.configure(SizeProfile::Large, 120.0);

    let config = MenuConfiguration::builder()
        .kind(MenuKind::Vertical)
        .size_profile(SizeProfile::Large)
        .slot_limit(1)
        .navigation_buttons(true)
        .scroll_policy(ScrollPolicy::Clamped)
        .build()
        .unwrap();
    let mut menu = Menu::new(config, registry);
    let mut adapter = RecordingAdapter::new(Size::new(200.0, 40.0));

    menu.fill(["One", "Two"], &mut adapter).unwrap();
    assert_eq!(menu.size_of().unwrap(), Size::new(200.0, 120.0));

    // Backward reveals the hidden second slot.
    let offset = menu.bump_backward().unwrap();
    assert_eq!(offset, 1);
    assert_eq!(menu.scroll_offset(), 1);
    assert_eq!(menu.bump_forward().unwrap(), 0);

    let controls = adapter.controls();
    assert_eq!(controls[0].direction, BumpDirection::Backward);
    assert_eq!(controls[1].direction, BumpDirection::Forward);
}

#[test]
fn facade_error_is_menu_error() {
    let config = MenuConfiguration::builder()
        .kind(MenuKind::Submenu)
        .build()
        .unwrap();
    let mut menu = Menu::new(config, RegistryHandle::default());
    let err: slotmenu::Error = menu.bump_forward().unwrap_err();
    assert!(matches!(err, slotmenu::layout::MenuError::UnsupportedOperation { .. }));
}

#[test]
fn module_aliases_reach_crates() {
    let p = slotmenu::core::geometry::Point::new(1.0, 2.0);
    assert_eq!(p, Point::new(1.0, 2.0));
    let engine_registry = slotmenu::layout::SlotSizeRegistry::new();
    assert_eq!(engine_registry.height_of(SizeProfile::Small), 99.0);
}
