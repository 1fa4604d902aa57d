#![forbid(unsafe_code)]

//! The live menu entity.
//!
//! A [`Menu`] owns its configuration, a copy of the filled option labels, and
//! (with navigation buttons enabled) a [`NavigationController`]. It reads slot
//! heights and the bump distance from its [`RegistryHandle`] on every query,
//! so registry changes apply without refilling.

use slotmenu_core::geometry::{Point, Size};

use crate::adapter::{NavigationPlacement, RenderAdapter, SlotPlacement};
use crate::config::MenuConfiguration;
use crate::error::{MenuError, Result};
use crate::layout::LayoutEngine;
use crate::navigation::{BumpDirection, NavigationController};
use crate::registry::RegistryHandle;

/// Default label for the positive option of a binary choice.
pub const DEFAULT_POSITIVE_LABEL: &str = "YES";
/// Default label for the negative option of a binary choice.
pub const DEFAULT_NEGATIVE_LABEL: &str = "NO";

/// Positive/negative labels for a two-option menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryChoice {
    pub positive: String,
    pub negative: String,
}

impl Default for BinaryChoice {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_LABEL, DEFAULT_NEGATIVE_LABEL)
    }
}

impl BinaryChoice {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    /// Labels in display order: positive first.
    pub fn labels(&self) -> [&str; 2] {
        [&self.positive, &self.negative]
    }
}

/// A menu: configuration, filled options, and scroll state.
#[derive(Debug, Clone)]
pub struct Menu {
    config: MenuConfiguration,
    registry: RegistryHandle,
    slots: Vec<String>,
    template: Size,
    navigation: Option<NavigationController>,
}

impl Menu {
    /// Create an unfilled menu reading sizes from `registry`.
    pub fn new(config: MenuConfiguration, registry: RegistryHandle) -> Self {
        let navigation = config
            .use_navigation_buttons()
            .then(|| NavigationController::new(config.scroll_policy()));
        Self {
            config,
            registry,
            slots: Vec::new(),
            template: Size::ZERO,
            navigation,
        }
    }

    #[inline]
    pub fn config(&self) -> &MenuConfiguration {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &RegistryHandle {
        &self.registry
    }

    /// Filled option labels in display order.
    #[inline]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// True once a non-empty option list has been filled.
    #[inline]
    pub fn is_filled(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Slot template captured from the adapter at the last fill.
    #[inline]
    pub fn template(&self) -> Size {
        self.template
    }

    /// Current scroll offset in bumps; always 0 without navigation buttons.
    #[inline]
    pub fn scroll_offset(&self) -> i32 {
        self.navigation.map_or(0, |nav| nav.offset())
    }

    /// Replace the option list and ask `adapter` to materialize it.
    ///
    /// The options are copied; later changes to the caller's collection are
    /// not observed. Every slot is reported to the adapter in index order,
    /// followed by the backward and forward controls when navigation buttons
    /// are enabled and at least one option was given. The scroll offset is
    /// reset to zero.
    ///
    /// A `BiMenu` must receive exactly two options. Otherwise the call fails
    /// with [`MenuError::InvalidOptionCount`] and the menu is left unchanged.
    pub fn fill<I, S, A>(&mut self, options: I, adapter: &mut A) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        A: RenderAdapter + ?Sized,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "menu_fill",
            kind = ?self.config.kind(),
            options = options.len()
        )
        .entered();

        if let Some(expected) = self.config.kind().required_option_count() {
            if options.len() != expected {
                return Err(MenuError::InvalidOptionCount {
                    kind: self.config.kind(),
                    expected,
                    actual: options.len(),
                });
            }
        }

        #[cfg(feature = "tracing")]
        if options.len() > self.config.slot_limit() {
            tracing::debug!(
                options = options.len(),
                slot_limit = self.config.slot_limit(),
                "fill exceeds visible slot limit"
            );
        }

        self.slots = options;
        self.template = adapter.slot_template();
        if let Some(navigation) = self.navigation.as_mut() {
            navigation.reset();
        }

        let registry = self.registry.snapshot();
        let engine = LayoutEngine::new(&registry, self.template);
        let size = engine.size_of(&self.config);
        for (index, label) in self.slots.iter().enumerate() {
            adapter.materialize_slot(&SlotPlacement {
                index,
                label,
                position: engine.position_of(&self.config, index, 0),
                size,
            });
        }

        // No controls for an empty menu.
        if self.navigation.is_some() && !self.slots.is_empty() {
            for direction in [BumpDirection::Backward, BumpDirection::Forward] {
                adapter.materialize_navigation(&NavigationPlacement {
                    direction,
                    position: engine.navigation_position(&self.config, direction),
                    size,
                });
            }
        }

        Ok(())
    }

    /// Fill with the two labels of `choice`, positive first.
    pub fn fill_binary<A>(&mut self, choice: &BinaryChoice, adapter: &mut A) -> Result<()>
    where
        A: RenderAdapter + ?Sized,
    {
        self.fill(choice.labels(), adapter)
    }

    /// Apply a forward bump and return the new scroll offset.
    pub fn bump_forward(&mut self) -> Result<i32> {
        self.bump(BumpDirection::Forward)
    }

    /// Apply a backward bump and return the new scroll offset.
    pub fn bump_backward(&mut self) -> Result<i32> {
        self.bump(BumpDirection::Backward)
    }

    /// Apply one bump in `direction` and return the new scroll offset.
    ///
    /// Fails with [`MenuError::UnsupportedOperation`] if the menu has no
    /// navigation buttons, and with [`MenuError::Unfilled`] if there is
    /// nothing to scroll.
    pub fn bump(&mut self, direction: BumpDirection) -> Result<i32> {
        let Some(mut navigation) = self.navigation else {
            return Err(MenuError::UnsupportedOperation {
                operation: direction.operation(),
            });
        };
        self.ensure_filled()?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "menu_bump",
            direction = ?direction,
            offset = navigation.offset()
        )
        .entered();

        let max_steps = self.with_engine(|engine| engine.max_scroll_steps(&self.config, self.slots.len()));
        let outcome = navigation.bump(self.config.axis(), direction, max_steps);
        self.navigation = Some(navigation);

        #[cfg(feature = "tracing")]
        if outcome.clamped {
            tracing::debug!(offset = outcome.offset, max_steps, "bump clamped");
        }

        Ok(outcome.offset)
    }

    /// Current position of slot `index`, scroll offset included.
    pub fn position_of(&self, index: usize) -> Result<Point> {
        self.ensure_filled()?;
        if index >= self.slots.len() {
            return Err(MenuError::SlotOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        let offset = self.scroll_offset();
        Ok(self.with_engine(|engine| engine.position_of(&self.config, index, offset)))
    }

    /// Current slot size.
    pub fn size_of(&self) -> Result<Size> {
        self.ensure_filled()?;
        Ok(self.with_engine(|engine| engine.size_of(&self.config)))
    }

    /// Placements for every slot at the current scroll offset.
    pub fn layout(&self) -> Result<Vec<SlotPlacement<'_>>> {
        self.ensure_filled()?;
        let offset = self.scroll_offset();
        Ok(self.with_engine(|engine| {
            let size = engine.size_of(&self.config);
            self.slots
                .iter()
                .enumerate()
                .map(|(index, label)| SlotPlacement {
                    index,
                    label,
                    position: engine.position_of(&self.config, index, offset),
                    size,
                })
                .collect()
        }))
    }

    /// Placements of the backward and forward controls, or `None` if the
    /// menu has no navigation buttons.
    pub fn navigation_layout(&self) -> Result<Option<[NavigationPlacement; 2]>> {
        if self.navigation.is_none() {
            return Ok(None);
        }
        self.ensure_filled()?;
        Ok(Some(self.with_engine(|engine| {
            let size = engine.size_of(&self.config);
            [BumpDirection::Backward, BumpDirection::Forward].map(|direction| {
                NavigationPlacement {
                    direction,
                    position: engine.navigation_position(&self.config, direction),
                    size,
                }
            })
        })))
    }

    fn ensure_filled(&self) -> Result<()> {
        if self.slots.is_empty() {
            return Err(MenuError::Unfilled);
        }
        Ok(())
    }

    fn with_engine<R>(&self, f: impl FnOnce(&LayoutEngine<'_>) -> R) -> R {
        let registry = self.registry.snapshot();
        f(&LayoutEngine::new(&registry, self.template))
    }
}
