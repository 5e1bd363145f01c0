use thiserror::Error;

use super::term::Field;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Filter name cannot exceed {max} characters, filter name is {len} characters")]
    FilterNameLength {
        filter: String,
        len: usize,
        max: usize,
    },

    #[error("term '{term}' has an empty {field} set")]
    EmptyFieldSet { term: String, field: Field },

    #[error("filter targeting '{platform}' has no filter name")]
    MissingFilterName { platform: String },

    #[error("filter '{filter}' renders {rules} rules, exceeding the maximum rule number {max}")]
    TooManyRules {
        filter: String,
        rules: usize,
        max: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_name_length_message() {
        let err = GenerateError::FilterNameLength {
            filter: "x".repeat(64),
            len: 64,
            max: 63,
        };
        assert_eq!(
            err.to_string(),
            "Filter name cannot exceed 63 characters, filter name is 64 characters"
        );
    }

    #[test]
    fn empty_field_set_message() {
        let err = GenerateError::EmptyFieldSet {
            term: "allow_dns".into(),
            field: Field::Protocol,
        };
        assert_eq!(err.to_string(), "term 'allow_dns' has an empty protocol set");
    }

    #[test]
    fn missing_filter_name_message() {
        let err = GenerateError::MissingFilterName {
            platform: "huawei".into(),
        };
        assert_eq!(
            err.to_string(),
            "filter targeting 'huawei' has no filter name"
        );
    }

    #[test]
    fn too_many_rules_message() {
        let err = GenerateError::TooManyRules {
            filter: "edge".into(),
            rules: 70_000,
            max: 65_534,
        };
        assert_eq!(
            err.to_string(),
            "filter 'edge' renders 70000 rules, exceeding the maximum rule number 65534"
        );
    }
}
