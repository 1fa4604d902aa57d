#![forbid(unsafe_code)]

//! Menu configuration and its builder.
//!
//! Setters on [`MenuConfigurationBuilder`] never fail; every check happens once
//! in [`MenuConfigurationBuilder::build`].
//!
//! ```
//! use slotmenu_layout::{ConfigurationError, MenuConfiguration, MenuKind, SizeProfile};
//!
//! let config = MenuConfiguration::builder()
//!     .kind(MenuKind::Horizontal)
//!     .size_profile(SizeProfile::Large)
//!     .slot_margin(4.0)
//!     .navigation_buttons(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.slot_limit(), 2);
//!
//! let err = MenuConfiguration::builder().slot_limit(0).build().unwrap_err();
//! assert_eq!(err, ConfigurationError::ZeroSlotLimit);
//! ```

use crate::error::ConfigurationError;
use crate::navigation::ScrollPolicy;
use crate::registry::SizeProfile;
use crate::{Axis, MenuKind};

/// Default space left on each side of a slot.
pub const DEFAULT_SLOT_MARGIN: f32 = 10.0;
/// Default visible slot capacity.
pub const DEFAULT_SLOT_LIMIT: usize = 2;

/// Validated, immutable menu parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "MenuConfigurationBuilder", into = "MenuConfigurationBuilder")
)]
pub struct MenuConfiguration {
    kind: MenuKind,
    size_profile: SizeProfile,
    slot_margin: f32,
    slot_limit: usize,
    use_navigation_buttons: bool,
    scroll_policy: ScrollPolicy,
}

impl Default for MenuConfiguration {
    fn default() -> Self {
        Self {
            kind: MenuKind::Vertical,
            size_profile: SizeProfile::Small,
            slot_margin: DEFAULT_SLOT_MARGIN,
            slot_limit: DEFAULT_SLOT_LIMIT,
            use_navigation_buttons: false,
            scroll_policy: ScrollPolicy::Clamped,
        }
    }
}

impl MenuConfiguration {
    /// Start a builder populated with the defaults.
    pub fn builder() -> MenuConfigurationBuilder {
        MenuConfigurationBuilder::new()
    }

    /// A builder holding this configuration's values.
    pub fn to_builder(&self) -> MenuConfigurationBuilder {
        MenuConfigurationBuilder::from(*self)
    }

    #[inline]
    pub const fn kind(&self) -> MenuKind {
        self.kind
    }

    /// Layout/scroll axis implied by the kind.
    #[inline]
    pub const fn axis(&self) -> Axis {
        self.kind.axis()
    }

    #[inline]
    pub const fn size_profile(&self) -> SizeProfile {
        self.size_profile
    }

    /// Space left on each side of a slot along the layout axis.
    #[inline]
    pub const fn slot_margin(&self) -> f32 {
        self.slot_margin
    }

    /// Visible slot capacity.
    ///
    /// Advisory: `fill` keeps every option it is given. The limit sizes the
    /// visible window for scroll clamping and for placing the forward control.
    #[inline]
    pub const fn slot_limit(&self) -> usize {
        self.slot_limit
    }

    #[inline]
    pub const fn use_navigation_buttons(&self) -> bool {
        self.use_navigation_buttons
    }

    #[inline]
    pub const fn scroll_policy(&self) -> ScrollPolicy {
        self.scroll_policy
    }
}

/// Fluent builder for [`MenuConfiguration`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MenuConfigurationBuilder {
    kind: MenuKind,
    size_profile: SizeProfile,
    slot_margin: f32,
    slot_limit: usize,
    use_navigation_buttons: bool,
    scroll_policy: ScrollPolicy,
}

impl Default for MenuConfigurationBuilder {
    fn default() -> Self {
        MenuConfiguration::default().into()
    }
}

impl MenuConfigurationBuilder {
    /// A builder populated with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the menu kind.
    #[must_use]
    pub fn kind(mut self, kind: MenuKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the slot size profile.
    #[must_use]
    pub fn size_profile(mut self, profile: SizeProfile) -> Self {
        self.size_profile = profile;
        self
    }

    /// Set the slot margin. Checked at build time.
    #[must_use]
    pub fn slot_margin(mut self, margin: f32) -> Self {
        self.slot_margin = margin;
        self
    }

    /// Set the visible slot capacity. Checked at build time.
    #[must_use]
    pub fn slot_limit(mut self, limit: usize) -> Self {
        self.slot_limit = limit;
        self
    }

    /// Enable or disable the backward/forward navigation controls.
    #[must_use]
    pub fn navigation_buttons(mut self, enabled: bool) -> Self {
        self.use_navigation_buttons = enabled;
        self
    }

    /// Set how bumps are bounded.
    #[must_use]
    pub fn scroll_policy(mut self, policy: ScrollPolicy) -> Self {
        self.scroll_policy = policy;
        self
    }

    /// Validate and finalize.
    pub fn build(&self) -> Result<MenuConfiguration, ConfigurationError> {
        if !self.slot_margin.is_finite() {
            return Err(ConfigurationError::NonFiniteMargin(self.slot_margin));
        }
        if self.slot_margin < 0.0 {
            return Err(ConfigurationError::NegativeMargin(self.slot_margin));
        }
        if self.slot_limit == 0 {
            return Err(ConfigurationError::ZeroSlotLimit);
        }

        Ok(MenuConfiguration {
            kind: self.kind,
            size_profile: self.size_profile,
            slot_margin: self.slot_margin,
            slot_limit: self.slot_limit,
            use_navigation_buttons: self.use_navigation_buttons,
            scroll_policy: self.scroll_policy,
        })
    }
}

impl From<MenuConfiguration> for MenuConfigurationBuilder {
    fn from(config: MenuConfiguration) -> Self {
        Self {
            kind: config.kind,
            size_profile: config.size_profile,
            slot_margin: config.slot_margin,
            slot_limit: config.slot_limit,
            use_navigation_buttons: config.use_navigation_buttons,
            scroll_policy: config.scroll_policy,
        }
    }
}

impl TryFrom<MenuConfigurationBuilder> for MenuConfiguration {
    type Error = ConfigurationError;

    fn try_from(builder: MenuConfigurationBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
