use crate::{AddressMatch, NormalizedTerm, PortRange, Term, VendorProfile};

/// Fill empty match fields with their "any" sentinel and map the action to
/// the vendor keyword.
///
/// An empty destination-address set writes the "any" sentinel into the
/// *source*-address field and leaves the destination empty. Expanding such a
/// term fails with [`EmptyFieldSet`](crate::GenerateError::EmptyFieldSet).
#[must_use]
pub fn normalize_term<'t>(term: &'t Term, profile: &VendorProfile) -> NormalizedTerm<'t> {
    let mut source_address = addresses(&term.source_address);
    let destination_address = addresses(&term.destination_address);
    if term.source_address.is_empty() || term.destination_address.is_empty() {
        source_address = vec![AddressMatch::Any];
    }

    NormalizedTerm {
        name: &term.name,
        source_address,
        source_port: ports(&term.source_port),
        destination_address,
        destination_port: ports(&term.destination_port),
        protocol: &term.protocol,
        action: map_action(profile.action_map, &term.action),
    }
}

fn addresses(nets: &[ipnetwork::Ipv4Network]) -> Vec<AddressMatch> {
    nets.iter().copied().map(AddressMatch::from).collect()
}

fn ports(ports: &[PortRange]) -> Vec<PortRange> {
    if ports.is_empty() {
        vec![PortRange::ANY]
    } else {
        ports.to_vec()
    }
}

/// The first mapped action present wins; otherwise the first listed token
/// passes through unchanged.
fn map_action<'t>(map: &[(&'static str, &'static str)], actions: &'t [String]) -> Option<&'t str> {
    map.iter()
        .find(|(generic, _)| actions.iter().any(|a| a == generic))
        .map(|&(_, keyword)| keyword)
        .or_else(|| actions.first().map(String::as_str))
}
