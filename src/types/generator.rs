use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, Utc};

use super::error::GenerateError;
use super::policy::Policy;
use super::translation::Translation;
use super::vendor::{HP_COMWARE, HUAWEI, VendorProfile};

/// Every vendor profile this crate can generate for.
pub static PROFILES: [&VendorProfile; 2] = [&HP_COMWARE, &HUAWEI];

/// An ACL generator for one vendor.
///
/// The engine is shared by all vendors; a generator only carries the
/// [`VendorProfile`] that parameterizes it. Generators are `Copy` and hold
/// no state, so independent vendors can run over the same policy
/// concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    profile: &'static VendorProfile,
}

impl Generator {
    #[must_use]
    pub const fn new(profile: &'static VendorProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn hp_comware() -> Self {
        Self::new(&HP_COMWARE)
    }

    #[must_use]
    pub fn huawei() -> Self {
        Self::new(&HUAWEI)
    }

    /// Look up a generator by its registry name (the platform tag).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        PROFILES
            .iter()
            .copied()
            .find(|p| p.platform == name)
            .map(Self::new)
    }

    #[must_use]
    pub fn platform(&self) -> &'static str {
        self.profile.platform
    }

    #[must_use]
    pub fn suffix(&self) -> &'static str {
        self.profile.suffix
    }

    #[must_use]
    pub fn profile(&self) -> &'static VendorProfile {
        self.profile
    }

    /// Translate every filter targeting this vendor.
    ///
    /// `exp_weeks` is the expiration horizon counted from today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if any targeted filter fails validation.
    /// Generation stops at the first failing filter.
    pub fn translate(&self, policy: &Policy, exp_weeks: u32) -> Result<Translation, GenerateError> {
        self.translate_on(policy, exp_weeks, Utc::now().date_naive())
    }

    /// Like [`translate`](Self::translate), with an explicit current date.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if any targeted filter fails validation.
    pub fn translate_on(
        &self,
        policy: &Policy,
        exp_weeks: u32,
        today: NaiveDate,
    ) -> Result<Translation, GenerateError> {
        crate::generate::translate(self.profile, policy, exp_weeks, today)
    }

    /// Translate and render the configuration text in one step.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if any targeted filter fails validation.
    pub fn generate(&self, policy: &Policy, exp_weeks: u32) -> Result<String, GenerateError> {
        Ok(self.translate(policy, exp_weeks)?.to_string())
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generator({}, *{})", self.profile.platform, self.profile.suffix)
    }
}

/// Name to generator mapping for plugin hosts, keyed by platform tag.
#[must_use]
pub fn generators() -> BTreeMap<&'static str, Generator> {
    PROFILES
        .iter()
        .map(|&p| (p.platform, Generator::new(p)))
        .collect()
}
