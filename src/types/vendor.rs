/// Maximum rendered length of a filter description, in characters.
pub const MAX_COMMENT_LEN: usize = 127;

/// Shape of the per-filter preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSyntax {
    /// `acl advanced name <n> match-order <order>`
    Comware,
    /// `undo acl name <n>` followed by `acl name <n> advance`
    Huawei,
}

/// Everything that differs between the supported device families.
///
/// A single generator engine is driven by one of these; the two supported
/// vendors are [`HP_COMWARE`] and [`HUAWEI`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorProfile {
    /// Platform tag matched against filter targets; also the registry name.
    pub platform: &'static str,
    /// Conventional file suffix for the generated configuration.
    pub suffix: &'static str,
    pub filter_type: &'static str,
    pub max_name_len: usize,
    pub max_rule_num: u64,
    /// Id the device assigns to the first auto-numbered rule.
    pub first_rule_id: u64,
    pub step_increment: u32,
    pub header_syntax: HeaderSyntax,
    /// Resolve `match-order` from the filter options (`config` or `auto`).
    pub resolves_match_order: bool,
    /// Keyword every rule line starts with, ahead of the action.
    pub line_prefix: Option<&'static str>,
    /// Mask token rendered for a `/32` host.
    pub host_mask: &'static str,
    /// Drop the port clause entirely for `[0, 65535]`.
    pub omit_full_port_range: bool,
    /// Generic action to vendor keyword, checked in order.
    pub action_map: &'static [(&'static str, &'static str)],
}

pub static HP_COMWARE: VendorProfile = VendorProfile {
    platform: "hpcomware",
    suffix: ".hpc",
    filter_type: "advanced",
    max_name_len: 63,
    max_rule_num: 65_534,
    first_rule_id: 0,
    step_increment: 1,
    header_syntax: HeaderSyntax::Comware,
    resolves_match_order: true,
    line_prefix: Some("acl"),
    host_mask: "0",
    omit_full_port_range: false,
    action_map: &[("accept", "permit")],
};

pub static HUAWEI: VendorProfile = VendorProfile {
    platform: "huawei",
    suffix: ".hua",
    filter_type: "advance",
    max_name_len: 127,
    max_rule_num: 4_294_967_294,
    first_rule_id: 10,
    step_increment: 10,
    header_syntax: HeaderSyntax::Huawei,
    resolves_match_order: false,
    line_prefix: None,
    host_mask: "32",
    omit_full_port_range: true,
    action_map: &[("accept", "permit"), ("deny", "deny")],
};
