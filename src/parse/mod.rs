//! Textual inputs: filter target lines and port ranges.

mod error;
mod grammar;

use std::str::FromStr;

pub use error::{InputKind, ParseError};

use crate::{PortRange, Target};

/// Parse a target line such as `"hpcomware foo advanced auto"`.
///
/// # Errors
///
/// Returns [`ParseError`] if the line does not start with a platform name.
pub fn parse_target(input: &str) -> Result<Target, ParseError> {
    use winnow::Parser;
    grammar::target
        .parse(input)
        .map_err(|e| ParseError::new(InputKind::Target, e.to_string()))
}

/// Parse a port (`"53"`) or an inclusive range (`"1024-65535"`).
///
/// # Errors
///
/// Returns [`ParseError`] for non-numeric input, out-of-range ports, or a
/// range whose low bound exceeds its high bound.
pub fn parse_port_range(input: &str) -> Result<PortRange, ParseError> {
    use winnow::Parser;
    grammar::port_range
        .parse(input)
        .map_err(|e| ParseError::new(InputKind::PortRange, e.to_string()))
}

impl FromStr for Target {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_target(s)
    }
}

impl FromStr for PortRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_port_range(s)
    }
}
