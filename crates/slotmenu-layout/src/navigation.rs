#![forbid(unsafe_code)]

//! Bump navigation state machine.
//!
//! The only state is a signed scroll offset counted in bumps. A forward bump
//! moves the slot container in the direction slots advance: down for vertical
//! menus (offset decreases) and right for horizontal ones (offset increases).
//! A backward bump does the opposite.
//!
//! Slots past the visible window lie further along the flow direction, so
//! backward bumps are the ones that pull them into view.
//!
//! Under [`ScrollPolicy::Clamped`] the offset is bounded in *progress* space,
//! where progress is `offset * axis.flow_sign()`. Progress stays in
//! `[-max_steps, 0]`: forward bumps stop once slot 0 is back at its resting
//! place, and backward bumps stop once the last slot has entered the window.
//! The caller supplies `max_steps`, normally from
//! [`LayoutEngine::max_scroll_steps`](crate::LayoutEngine::max_scroll_steps).

use crate::Axis;

/// How far a menu may be bumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollPolicy {
    /// Keep progress between the first slot and the end of the list.
    #[default]
    Clamped,
    /// No bounds; content can be bumped entirely out of view.
    Unbounded,
}

/// Direction of a bump event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpDirection {
    /// Move the container the way slots advance, back toward slot 0.
    Forward,
    /// Move the container against slot flow, revealing later slots.
    Backward,
}

impl BumpDirection {
    /// Name of the navigation control bound to this direction.
    pub const fn control_name(self) -> &'static str {
        match self {
            Self::Forward => "ForwardButton",
            Self::Backward => "BackButton",
        }
    }

    /// Name of the operation, used in error reports.
    pub(crate) const fn operation(self) -> &'static str {
        match self {
            Self::Forward => "bump_forward",
            Self::Backward => "bump_backward",
        }
    }
}

/// Result of applying one bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpOutcome {
    /// Scroll offset after the bump.
    pub offset: i32,
    /// True if the policy held the offset short of where the bump would have moved it.
    pub clamped: bool,
}

/// Scroll offset state for a menu with navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationController {
    offset: i32,
    policy: ScrollPolicy,
}

impl NavigationController {
    /// Start at offset zero.
    pub const fn new(policy: ScrollPolicy) -> Self {
        Self { offset: 0, policy }
    }

    /// Current scroll offset, in bumps.
    #[inline]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    #[inline]
    pub const fn policy(&self) -> ScrollPolicy {
        self.policy
    }

    /// Net forward bumps applied on `axis`; negative once later slots are revealed.
    #[inline]
    pub fn progress(&self, axis: Axis) -> i32 {
        self.offset.saturating_mul(axis.flow_sign())
    }

    /// Return to offset zero.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Apply a forward bump.
    pub fn bump_forward(&mut self, axis: Axis, max_steps: u32) -> BumpOutcome {
        self.bump(axis, BumpDirection::Forward, max_steps)
    }

    /// Apply a backward bump.
    pub fn bump_backward(&mut self, axis: Axis, max_steps: u32) -> BumpOutcome {
        self.bump(axis, BumpDirection::Backward, max_steps)
    }

    /// Apply one bump in `direction`.
    ///
    /// `max_steps` is ignored under [`ScrollPolicy::Unbounded`].
    pub fn bump(&mut self, axis: Axis, direction: BumpDirection, max_steps: u32) -> BumpOutcome {
        let sign = axis.flow_sign();
        let delta = match direction {
            BumpDirection::Forward => sign,
            BumpDirection::Backward => -sign,
        };
        let proposed = self.offset.saturating_add(delta);

        let next = match self.policy {
            ScrollPolicy::Unbounded => proposed,
            ScrollPolicy::Clamped => {
                let max = i32::try_from(max_steps).unwrap_or(i32::MAX);
                let progress = proposed.saturating_mul(sign).clamp(-max, 0);
                progress * sign
            }
        };

        self.offset = next;
        BumpOutcome {
            offset: next,
            clamped: next != proposed,
        }
    }
}
