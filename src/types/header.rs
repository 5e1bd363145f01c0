use std::fmt;

use tracing::warn;

use super::error::GenerateError;
use super::policy::Header;
use super::vendor::{HeaderSyntax, MAX_COMMENT_LEN, VendorProfile};

/// Rule evaluation order of a Comware ACL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrder {
    Auto,
    Config,
}

impl fmt::Display for MatchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOrder::Auto => f.write_str("auto"),
            MatchOrder::Config => f.write_str("config"),
        }
    }
}

/// A filter header with every vendor-specific field resolved and validated.
///
/// Built from a raw [`Header`] by [`ResolvedHeader::resolve`]; the raw
/// header is never modified. `Display` renders the filter preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    pub filter_name: String,
    pub filter_type: &'static str,
    pub match_order: Option<MatchOrder>,
    pub step_increment: u32,
    /// Concatenated comment, at most [`MAX_COMMENT_LEN`] characters.
    pub comment: String,
    pub syntax: HeaderSyntax,
}

impl ResolvedHeader {
    /// Resolve the header fields for `profile`'s platform.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingFilterName`] if the platform's target
    /// carries no options, and [`GenerateError::FilterNameLength`] if the
    /// name is longer than the vendor allows.
    pub fn resolve(header: &Header, profile: &VendorProfile) -> Result<Self, GenerateError> {
        let options = header.filter_options(profile.platform).unwrap_or_default();
        let filter_name = options
            .first()
            .ok_or_else(|| GenerateError::MissingFilterName {
                platform: profile.platform.to_owned(),
            })?
            .clone();

        let len = filter_name.chars().count();
        if len > profile.max_name_len {
            return Err(GenerateError::FilterNameLength {
                filter: filter_name,
                len,
                max: profile.max_name_len,
            });
        }

        let match_order = profile.resolves_match_order.then(|| {
            if options.iter().any(|o| o == "config") {
                MatchOrder::Config
            } else {
                MatchOrder::Auto
            }
        });

        let comment = truncate_comment(&filter_name, header.comment.concat());

        Ok(Self {
            filter_name,
            filter_type: profile.filter_type,
            match_order,
            step_increment: profile.step_increment,
            comment,
            syntax: profile.header_syntax,
        })
    }

    /// Purely numeric names are rendered as ACL numbers instead of named ACLs.
    /// Only ASCII digits count; any other name is a named ACL.
    #[must_use]
    pub fn is_numbered(&self) -> bool {
        !self.filter_name.is_empty() && self.filter_name.chars().all(|c| c.is_ascii_digit())
    }
}

fn truncate_comment(filter: &str, comment: String) -> String {
    let len = comment.chars().count();
    if len <= MAX_COMMENT_LEN {
        return comment;
    }
    warn!(
        filter,
        len,
        max = MAX_COMMENT_LEN,
        "filter comment too long, truncating"
    );
    comment.chars().take(MAX_COMMENT_LEN).collect()
}

impl fmt::Display for ResolvedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.filter_name;
        match self.syntax {
            HeaderSyntax::Comware => {
                write!(f, "acl {}", self.filter_type)?;
                if self.is_numbered() {
                    write!(f, " {name}")?;
                } else {
                    write!(f, " name {name}")?;
                }
                if let Some(order) = self.match_order {
                    write!(f, " match-order {order}")?;
                }
            }
            HeaderSyntax::Huawei => {
                if self.is_numbered() {
                    write!(f, "undo acl {name}\nacl {name}")?;
                } else {
                    write!(f, "undo acl name {name}\nacl name {name} {}", self.filter_type)?;
                }
            }
        }
        write!(
            f,
            "\ndescription {}\nstep {}",
            self.comment, self.step_increment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::policy::Target;
    use crate::types::vendor::{HP_COMWARE, HUAWEI};

    fn header(platform: &str, options: &[&str], comment: &[&str]) -> Header {
        Header {
            targets: vec![Target::new(platform, options.iter().copied())],
            comment: comment.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    #[test]
    fn comware_named_auto() {
        let h = header("hpcomware", &["foo", "advanced", "auto"], &["foooad bar"]);
        let resolved = ResolvedHeader::resolve(&h, &HP_COMWARE).unwrap();
        assert_eq!(resolved.match_order, Some(MatchOrder::Auto));
        assert_eq!(
            resolved.to_string(),
            "acl advanced name foo match-order auto\ndescription foooad bar\nstep 1"
        );
    }

    #[test]
    fn comware_numbered_config() {
        let h = header("hpcomware", &["3001", "config"], &["x"]);
        let resolved = ResolvedHeader::resolve(&h, &HP_COMWARE).unwrap();
        assert!(resolved.is_numbered());
        assert_eq!(
            resolved.to_string(),
            "acl advanced 3001 match-order config\ndescription x\nstep 1"
        );
    }

    #[test]
    fn huawei_named() {
        let h = header("huawei", &["foo"], &["foo", "bar"]);
        let resolved = ResolvedHeader::resolve(&h, &HUAWEI).unwrap();
        assert_eq!(resolved.match_order, None);
        assert_eq!(
            resolved.to_string(),
            "undo acl name foo\nacl name foo advance\ndescription foobar\nstep 10"
        );
    }

    #[test]
    fn huawei_numbered() {
        let h = header("huawei", &["3000"], &[]);
        let resolved = ResolvedHeader::resolve(&h, &HUAWEI).unwrap();
        assert_eq!(
            resolved.to_string(),
            "undo acl 3000\nacl 3000\ndescription \nstep 10"
        );
    }

    #[test]
    fn comment_fragments_concatenate_without_separator() {
        let h = header("hpcomware", &["foo"], &["foo", "bar"]);
        let resolved = ResolvedHeader::resolve(&h, &HP_COMWARE).unwrap();
        assert_eq!(resolved.comment, "foobar");
    }

    #[test]
    fn long_comment_truncated() {
        let long = "c".repeat(200);
        let h = header("huawei", &["foo"], &[long.as_str()]);
        let resolved = ResolvedHeader::resolve(&h, &HUAWEI).unwrap();
        assert_eq!(resolved.comment.chars().count(), MAX_COMMENT_LEN);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(130);
        let h = header("huawei", &["foo"], &[long.as_str()]);
        let resolved = ResolvedHeader::resolve(&h, &HUAWEI).unwrap();
        assert_eq!(resolved.comment, "é".repeat(MAX_COMMENT_LEN));
    }

    #[test]
    fn name_limits_per_vendor() {
        let at_limit = "n".repeat(63);
        let over = "n".repeat(64);
        let comware = |name: &str| ResolvedHeader::resolve(&header("hpcomware", &[name], &[]), &HP_COMWARE);
        assert!(comware(&at_limit).is_ok());
        assert!(matches!(
            comware(&over),
            Err(GenerateError::FilterNameLength { len: 64, max: 63, .. })
        ));
        assert!(ResolvedHeader::resolve(&header("huawei", &[over.as_str()], &[]), &HUAWEI).is_ok());
    }

    #[test]
    fn missing_name() {
        let h = header("huawei", &[], &[]);
        assert!(matches!(
            ResolvedHeader::resolve(&h, &HUAWEI),
            Err(GenerateError::MissingFilterName { platform }) if platform == "huawei"
        ));
    }

    #[test]
    fn empty_name_is_not_numbered() {
        let resolved = ResolvedHeader {
            filter_name: String::new(),
            filter_type: "advance",
            match_order: None,
            step_increment: 10,
            comment: String::new(),
            syntax: HeaderSyntax::Huawei,
        };
        assert!(!resolved.is_numbered());
    }

    #[test]
    fn non_ascii_digits_render_as_named() {
        let h = header("huawei", &["３０００"], &[]);
        let resolved = ResolvedHeader::resolve(&h, &HUAWEI).unwrap();
        assert!(!resolved.is_numbered());
        assert!(resolved
            .to_string()
            .starts_with("undo acl name ３０００\nacl name ３０００ advance\n"));

        let h = header("hpcomware", &["٣٠٠٠"], &[]);
        let resolved = ResolvedHeader::resolve(&h, &HP_COMWARE).unwrap();
        assert!(resolved
            .to_string()
            .starts_with("acl advanced name ٣٠٠٠ match-order auto\n"));
    }
}
