use crate::{AddressMatch, PortRange, RuleTuple, VendorProfile};

const SOURCE: &str = "source";
const SOURCE_PORT: &str = "source-port";
const DESTINATION: &str = "destination";
const DESTINATION_PORT: &str = "destination-port";

/// Render an address clause: `<direction> any` or
/// `<direction> <network> <mask>`, with the vendor's token for host masks.
#[must_use]
pub fn render_address(addr: &AddressMatch, direction: &str, profile: &VendorProfile) -> String {
    match addr {
        AddressMatch::Any => format!("{direction} any"),
        AddressMatch::Network(net) if net.prefix() == 32 => {
            format!("{direction} {} {}", net.network(), profile.host_mask)
        }
        AddressMatch::Network(net) => format!("{direction} {} {}", net.network(), net.mask()),
    }
}

/// Render a port clause: `<direction> eq <port>` or
/// `<direction> range <low> <high>`.
///
/// Returns `None` when the vendor omits the clause for the full port range.
#[must_use]
pub fn render_port(port: PortRange, direction: &str, profile: &VendorProfile) -> Option<String> {
    if profile.omit_full_port_range && port.is_any() {
        return None;
    }
    if port.is_single() {
        Some(format!("{direction} eq {}", port.low))
    } else {
        Some(format!("{direction} range {} {}", port.low, port.high))
    }
}

/// Render one rule line for a product tuple.
#[must_use]
pub fn render_rule(profile: &VendorProfile, action: &str, tuple: &RuleTuple<'_>) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(7);
    if let Some(prefix) = profile.line_prefix {
        tokens.push(prefix.to_owned());
    }
    tokens.push(action.to_owned());
    tokens.push(tuple.protocol.to_owned());
    tokens.push(render_address(&tuple.source_address, SOURCE, profile));
    tokens.extend(render_port(tuple.source_port, SOURCE_PORT, profile));
    tokens.push(render_address(
        &tuple.destination_address,
        DESTINATION,
        profile,
    ));
    tokens.extend(render_port(tuple.destination_port, DESTINATION_PORT, profile));
    tokens.join(" ")
}
