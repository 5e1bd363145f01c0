use std::fmt;

use chrono::NaiveDate;

use super::header::ResolvedHeader;

/// One generated filter: its resolved preamble and rule lines in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFilter {
    pub(crate) header: ResolvedHeader,
    pub(crate) rules: Vec<String>,
}

impl RenderedFilter {
    #[must_use]
    pub fn header(&self) -> &ResolvedHeader {
        &self.header
    }

    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }
}

impl fmt::Display for RenderedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for rule in &self.rules {
            write!(f, "\n{rule}")?;
        }
        Ok(())
    }
}

/// The output of one generation pass for a single vendor.
///
/// `Display` yields the device configuration text: every filter in policy
/// order, newline separated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Translation {
    pub(crate) platform: &'static str,
    pub(crate) filters: Vec<RenderedFilter>,
    pub(crate) expires: Option<NaiveDate>,
}

impl Translation {
    #[must_use]
    pub fn platform(&self) -> &'static str {
        self.platform
    }

    #[must_use]
    pub fn filters(&self) -> &[RenderedFilter] {
        &self.filters
    }

    /// Date the policy expires, computed from the expiration horizon.
    /// Not rendered into the configuration.
    #[must_use]
    pub fn expires(&self) -> Option<NaiveDate> {
        self.expires
    }

    /// Total number of rule lines across all filters.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.filters.iter().map(|f| f.rules.len()).sum()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}
