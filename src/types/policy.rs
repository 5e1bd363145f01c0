use super::term::Term;

/// A `target` line of a filter header: the platform it applies to, followed
/// by platform-specific options. The first option is the filter name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub platform: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<String>,
}

impl Target {
    pub fn new<I, S>(platform: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            platform: platform.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw per-filter metadata as produced by the policy parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Header {
    pub targets: Vec<Target>,
    /// Comment fragments, concatenated without a separator when rendered.
    pub comment: Vec<String>,
}

impl Header {
    /// Platform tags this filter is generated for.
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.platform.as_str())
    }

    #[must_use]
    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms().any(|p| p == platform)
    }

    /// Options of the first target naming `platform`.
    #[must_use]
    pub fn filter_options(&self, platform: &str) -> Option<&[String]> {
        self.targets
            .iter()
            .find(|t| t.platform == platform)
            .map(|t| t.options.as_slice())
    }

    #[must_use]
    pub fn filter_name(&self, platform: &str) -> Option<&str> {
        self.filter_options(platform)
            .and_then(<[String]>::first)
            .map(String::as_str)
    }
}

/// A header and the ordered terms it applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Filter {
    pub header: Header,
    pub terms: Vec<Term>,
}

/// An ordered sequence of filters. Read-only input to every generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Policy {
    pub filters: Vec<Filter>,
}
