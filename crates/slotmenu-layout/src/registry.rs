#![forbid(unsafe_code)]

//! Size profiles and the slot size registry.
//!
//! A [`SlotSizeRegistry`] maps each [`SizeProfile`] to a slot height and also
//! holds the bump distance used by scroll navigation. Applications own one
//! behind a [`RegistryHandle`] and hand clones of it to every
//! [`Menu`](crate::Menu). Menus read the registry at layout time, never at
//! construction, so reconfiguring a profile affects every menu already using
//! it.

use std::sync::{Arc, PoisonError, RwLock};

/// Default height for [`SizeProfile::Econ`].
pub const DEFAULT_ECON_HEIGHT: f32 = 77.0;
/// Default height for [`SizeProfile::Small`].
pub const DEFAULT_SMALL_HEIGHT: f32 = 99.0;
/// Default height for [`SizeProfile::Large`].
pub const DEFAULT_LARGE_HEIGHT: f32 = 111.0;
/// Default height for [`SizeProfile::Commanding`].
pub const DEFAULT_COMMANDING_HEIGHT: f32 = 133.0;
/// Default distance the slot container moves per bump.
pub const DEFAULT_BUMP_DISTANCE: f32 = 22.0;

/// Named slot height category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeProfile {
    Econ,
    #[default]
    Small,
    Large,
    Commanding,
}

impl SizeProfile {
    /// All profiles, in code order.
    pub const ALL: [Self; 4] = [Self::Econ, Self::Small, Self::Large, Self::Commanding];

    /// Stable numeric code of this profile.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Econ => 0,
            Self::Small => 1,
            Self::Large => 2,
            Self::Commanding => 3,
        }
    }

    /// Profile for a numeric code, or `None` if the code is unknown.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Econ),
            1 => Some(Self::Small),
            2 => Some(Self::Large),
            3 => Some(Self::Commanding),
            _ => None,
        }
    }

    /// Height this profile starts with in a fresh registry.
    #[inline]
    pub const fn default_height(self) -> f32 {
        match self {
            Self::Econ => DEFAULT_ECON_HEIGHT,
            Self::Small => DEFAULT_SMALL_HEIGHT,
            Self::Large => DEFAULT_LARGE_HEIGHT,
            Self::Commanding => DEFAULT_COMMANDING_HEIGHT,
        }
    }
}

/// Slot heights per profile plus the bump distance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlotSizeRegistry {
    econ: f32,
    small: f32,
    large: f32,
    commanding: f32,
    bump_distance: f32,
}

impl Default for SlotSizeRegistry {
    fn default() -> Self {
        Self {
            econ: DEFAULT_ECON_HEIGHT,
            small: DEFAULT_SMALL_HEIGHT,
            large: DEFAULT_LARGE_HEIGHT,
            commanding: DEFAULT_COMMANDING_HEIGHT,
            bump_distance: DEFAULT_BUMP_DISTANCE,
        }
    }
}

impl SlotSizeRegistry {
    /// A registry holding the default heights and bump distance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the height for `profile`.
    pub fn configure(&mut self, profile: SizeProfile, height: f32) {
        #[cfg(feature = "tracing")]
        tracing::debug!(profile = ?profile, height, "slot size profile configured");

        *self.slot_mut(profile) = height;
    }

    /// Current height for `profile`.
    #[inline]
    pub fn height_of(&self, profile: SizeProfile) -> f32 {
        match profile {
            SizeProfile::Econ => self.econ,
            SizeProfile::Small => self.small,
            SizeProfile::Large => self.large,
            SizeProfile::Commanding => self.commanding,
        }
    }

    /// Current height for a raw profile code.
    ///
    /// Unknown codes resolve to the `Small` height. This is defined behavior,
    /// so hosts that store profiles numerically always get a usable height.
    pub fn height_of_code(&self, code: u8) -> f32 {
        self.height_of(SizeProfile::from_code(code).unwrap_or(SizeProfile::Small))
    }

    /// Distance the slot container moves per bump.
    #[inline]
    pub fn bump_distance(&self) -> f32 {
        self.bump_distance
    }

    /// Overwrite the bump distance.
    pub fn set_bump_distance(&mut self, distance: f32) {
        #[cfg(feature = "tracing")]
        tracing::debug!(distance, "bump distance configured");

        self.bump_distance = distance;
    }

    fn slot_mut(&mut self, profile: SizeProfile) -> &mut f32 {
        match profile {
            SizeProfile::Econ => &mut self.econ,
            SizeProfile::Small => &mut self.small,
            SizeProfile::Large => &mut self.large,
            SizeProfile::Commanding => &mut self.commanding,
        }
    }
}

/// Shared, lockable handle to a [`SlotSizeRegistry`].
///
/// Clones share the same registry. Independent handles (e.g. one per test)
/// never observe each other's configuration.
#[derive(Debug, Clone, Default)]
pub struct RegistryHandle {
    inner: Arc<RwLock<SlotSizeRegistry>>,
}

impl RegistryHandle {
    /// Wrap an existing registry.
    pub fn new(registry: SlotSizeRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Overwrite the height for `profile` in the shared registry.
    pub fn configure(&self, profile: SizeProfile, height: f32) {
        self.update(|registry| registry.configure(profile, height));
    }

    /// Overwrite the shared bump distance.
    pub fn set_bump_distance(&self, distance: f32) {
        self.update(|registry| registry.set_bump_distance(distance));
    }

    /// Current height for `profile`.
    pub fn height_of(&self, profile: SizeProfile) -> f32 {
        self.read(|registry| registry.height_of(profile))
    }

    /// Current bump distance.
    pub fn bump_distance(&self) -> f32 {
        self.read(SlotSizeRegistry::bump_distance)
    }

    /// Copy of the registry as it is right now.
    pub fn snapshot(&self) -> SlotSizeRegistry {
        self.read(|registry| *registry)
    }

    /// Run `f` with shared access to the registry.
    pub fn read<R>(&self, f: impl FnOnce(&SlotSizeRegistry) -> R) -> R {
        // The registry is plain data; a panic mid-write cannot leave it torn.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Run `f` with exclusive access to the registry.
    pub fn update<R>(&self, f: impl FnOnce(&mut SlotSizeRegistry) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl From<SlotSizeRegistry> for RegistryHandle {
    fn from(registry: SlotSizeRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_profile_table() {
        let registry = SlotSizeRegistry::new();
        assert_eq!(registry.height_of(SizeProfile::Econ), 77.0);
        assert_eq!(registry.height_of(SizeProfile::Small), 99.0);
        assert_eq!(registry.height_of(SizeProfile::Large), 111.0);
        assert_eq!(registry.height_of(SizeProfile::Commanding), 133.0);
        assert_eq!(registry.bump_distance(), 22.0);
        for profile in SizeProfile::ALL {
            assert_eq!(registry.height_of(profile), profile.default_height());
        }
    }

    #[test]
    fn configure_overwrites_single_profile() {
        let mut registry = SlotSizeRegistry::new();
        registry.configure(SizeProfile::Large, 150.0);
        assert_eq!(registry.height_of(SizeProfile::Large), 150.0);
        assert_eq!(registry.height_of(SizeProfile::Small), 99.0);
        assert_eq!(registry.height_of(SizeProfile::Econ), 77.0);
    }

    #[test]
    fn codes_round_trip() {
        for profile in SizeProfile::ALL {
            assert_eq!(SizeProfile::from_code(profile.code()), Some(profile));
        }
        assert_eq!(SizeProfile::from_code(4), None);
        assert_eq!(SizeProfile::from_code(u8::MAX), None);
    }

    #[test]
    fn unknown_code_falls_back_to_small() {
        let mut registry = SlotSizeRegistry::new();
        registry.configure(SizeProfile::Small, 64.0);
        assert_eq!(registry.height_of_code(2), 111.0);
        assert_eq!(registry.height_of_code(9), 64.0);
        assert_eq!(registry.height_of_code(u8::MAX), 64.0);
    }

    #[test]
    fn handle_clones_share_state() {
        let a = RegistryHandle::default();
        let b = a.clone();
        b.configure(SizeProfile::Econ, 10.0);
        b.set_bump_distance(5.0);
        assert_eq!(a.height_of(SizeProfile::Econ), 10.0);
        assert_eq!(a.bump_distance(), 5.0);
    }

    #[test]
    fn independent_handles_are_isolated() {
        let a = RegistryHandle::default();
        let b = RegistryHandle::default();
        a.configure(SizeProfile::Small, 1.0);
        assert_eq!(b.height_of(SizeProfile::Small), 99.0);
    }

    #[test]
    fn snapshot_is_detached() {
        let handle = RegistryHandle::from(SlotSizeRegistry::new());
        let before = handle.snapshot();
        handle.configure(SizeProfile::Small, 50.0);
        assert_eq!(before.height_of(SizeProfile::Small), 99.0);
        assert_eq!(handle.snapshot().height_of(SizeProfile::Small), 50.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn registry_deserializes_with_defaults() {
        let registry: SlotSizeRegistry =
            serde_json::from_str(r#"{ "small": 64.0, "bump_distance": 30.0 }"#).unwrap();
        assert_eq!(registry.height_of(SizeProfile::Small), 64.0);
        assert_eq!(registry.height_of(SizeProfile::Large), 111.0);
        assert_eq!(registry.bump_distance(), 30.0);
    }
}
