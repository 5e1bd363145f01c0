use std::fmt;
use std::ops::RangeInclusive;

use ipnetwork::Ipv4Network;

/// A closed port interval `[low, high]`.
///
/// A single port is a range whose bounds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortRange {
    pub low: u16,
    pub high: u16,
}

impl PortRange {
    /// The "any port" sentinel, `[0, 65535]`.
    pub const ANY: PortRange = PortRange {
        low: 0,
        high: u16::MAX,
    };

    #[must_use]
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub const fn single(port: u16) -> Self {
        Self {
            low: port,
            high: port,
        }
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }
}

impl From<u16> for PortRange {
    fn from(port: u16) -> Self {
        Self::single(port)
    }
}

impl From<(u16, u16)> for PortRange {
    fn from((low, high): (u16, u16)) -> Self {
        Self::new(low, high)
    }
}

impl From<RangeInclusive<u16>> for PortRange {
    fn from(range: RangeInclusive<u16>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// An address match value after normalization.
///
/// Every `/0` network collapses to [`AddressMatch::Any`], so an explicit
/// `0.0.0.0/0` and an omitted address set render identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMatch {
    Any,
    Network(Ipv4Network),
}

impl From<Ipv4Network> for AddressMatch {
    fn from(net: Ipv4Network) -> Self {
        if net.prefix() == 0 {
            AddressMatch::Any
        } else {
            AddressMatch::Network(net)
        }
    }
}

impl fmt::Display for AddressMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressMatch::Any => write!(f, "any"),
            AddressMatch::Network(net) => write!(f, "{net}"),
        }
    }
}

/// One policy rule as handed over by the policy parser, with address and
/// port groups already resolved.
///
/// Every field keeps its declaration order; that order drives the order of
/// the rendered rule lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Term {
    pub name: String,
    pub source_address: Vec<Ipv4Network>,
    pub destination_address: Vec<Ipv4Network>,
    pub source_port: Vec<PortRange>,
    pub destination_port: Vec<PortRange>,
    pub protocol: Vec<String>,
    pub action: Vec<String>,
}

/// The match fields of a term, in expansion order, plus the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SourceAddress,
    SourcePort,
    DestinationAddress,
    DestinationPort,
    Protocol,
    Action,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::SourceAddress => "source-address",
            Field::SourcePort => "source-port",
            Field::DestinationAddress => "destination-address",
            Field::DestinationPort => "destination-port",
            Field::Protocol => "protocol",
            Field::Action => "action",
        };
        f.write_str(name)
    }
}

/// A term after "any" defaults are filled in and the action is mapped to a
/// vendor keyword. Borrows names and protocols from the source [`Term`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTerm<'t> {
    pub name: &'t str,
    pub source_address: Vec<AddressMatch>,
    pub source_port: Vec<PortRange>,
    pub destination_address: Vec<AddressMatch>,
    pub destination_port: Vec<PortRange>,
    pub protocol: &'t [String],
    /// `None` only when the source term listed no action at all.
    pub action: Option<&'t str>,
}
