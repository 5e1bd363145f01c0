use ipnetwork::Ipv4Network;

use super::policy::{Filter, Header, Policy, Target};
use super::term::{PortRange, Term};
use crate::parse::ParseError;

/// Builder for constructing a [`Policy`].
///
/// Filters and terms are defined via closures. Target lines are kept as raw
/// text and parsed when the policy is built.
///
/// # Example
///
/// ```
/// use aclgen::PolicyBuilder;
///
/// let policy = PolicyBuilder::new()
///     .filter(|f| {
///         f.target("hpcomware edge advanced auto")
///             .comment("edge ingress")
///             .term("dns", |t| {
///                 t.destination_address("8.8.8.8/32".parse().unwrap())
///                     .destination_port(53)
///                     .protocol("udp")
///                     .action("accept")
///             })
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(policy.filters.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PolicyBuilder {
    filters: Vec<FilterBuilder>,
}

/// Intermediate builder passed to the filter definition closure.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    targets: Vec<String>,
    comment: Vec<String>,
    terms: Vec<Term>,
}

/// Intermediate builder passed to the term definition closure.
#[derive(Debug)]
pub struct TermBuilder {
    term: Term,
}

impl PolicyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a filter. Filters keep their definition order.
    #[must_use]
    pub fn filter(mut self, f: impl FnOnce(FilterBuilder) -> FilterBuilder) -> Self {
        self.filters.push(f(FilterBuilder::default()));
        self
    }

    /// Parse every target line and assemble the policy.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a target line is malformed.
    pub fn build(self) -> Result<Policy, ParseError> {
        let filters = self
            .filters
            .into_iter()
            .map(FilterBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Policy { filters })
    }
}

impl FilterBuilder {
    /// Add a target line such as `"hpcomware foo advanced auto"`.
    #[must_use]
    pub fn target(mut self, line: &str) -> Self {
        self.targets.push(line.to_owned());
        self
    }

    /// Append a comment fragment.
    #[must_use]
    pub fn comment(mut self, text: &str) -> Self {
        self.comment.push(text.to_owned());
        self
    }

    #[must_use]
    pub fn term(mut self, name: &str, f: impl FnOnce(TermBuilder) -> TermBuilder) -> Self {
        let builder = f(TermBuilder {
            term: Term {
                name: name.to_owned(),
                ..Term::default()
            },
        });
        self.terms.push(builder.term);
        self
    }

    fn build(self) -> Result<Filter, ParseError> {
        let targets = self
            .targets
            .iter()
            .map(|line| line.parse::<Target>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Filter {
            header: Header {
                targets,
                comment: self.comment,
            },
            terms: self.terms,
        })
    }
}

impl TermBuilder {
    #[must_use]
    pub fn source_address(mut self, net: Ipv4Network) -> Self {
        self.term.source_address.push(net);
        self
    }

    #[must_use]
    pub fn destination_address(mut self, net: Ipv4Network) -> Self {
        self.term.destination_address.push(net);
        self
    }

    #[must_use]
    pub fn source_port(mut self, port: impl Into<PortRange>) -> Self {
        self.term.source_port.push(port.into());
        self
    }

    #[must_use]
    pub fn destination_port(mut self, port: impl Into<PortRange>) -> Self {
        self.term.destination_port.push(port.into());
        self
    }

    #[must_use]
    pub fn protocol(mut self, protocol: &str) -> Self {
        self.term.protocol.push(protocol.to_owned());
        self
    }

    #[must_use]
    pub fn action(mut self, action: &str) -> Self {
        self.term.action.push(action.to_owned());
        self
    }
}
