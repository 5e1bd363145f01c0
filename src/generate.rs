use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::render::render_rule;
use crate::{
    Expansion, Field, GenerateError, Policy, RenderedFilter, ResolvedHeader, Translation,
    VendorProfile, normalize_term,
};

/// Assemble the configuration for every filter targeting `profile`.
///
/// Filters for other platforms are skipped. Each targeted filter gets a
/// resolved header, and every term is normalized, expanded and rendered in
/// declaration order.
pub(crate) fn translate(
    profile: &'static VendorProfile,
    policy: &Policy,
    exp_weeks: u32,
    today: NaiveDate,
) -> Result<Translation, GenerateError> {
    let expires = today.checked_add_days(Days::new(u64::from(exp_weeks) * 7));
    debug!(platform = profile.platform, ?expires, "computed policy expiration");

    let mut filters = Vec::new();
    for filter in &policy.filters {
        if !filter.header.has_platform(profile.platform) {
            debug!(platform = profile.platform, "skipping filter for another platform");
            continue;
        }

        let header = ResolvedHeader::resolve(&filter.header, profile)?;
        let mut rules = Vec::new();
        for term in &filter.terms {
            let normalized = normalize_term(term, profile);
            let expansion = Expansion::new(&normalized)?;
            let action = normalized.action.ok_or_else(|| GenerateError::EmptyFieldSet {
                term: term.name.clone(),
                field: Field::Action,
            })?;
            rules.extend(expansion.map(|tuple| render_rule(profile, action, &tuple)));
        }

        check_capacity(profile, &header, rules.len())?;
        debug!(
            platform = profile.platform,
            filter = %header.filter_name,
            rules = rules.len(),
            "rendered filter"
        );
        filters.push(RenderedFilter { header, rules });
    }

    Ok(Translation {
        platform: profile.platform,
        filters,
        expires,
    })
}

/// Rules are numbered from the vendor's first id in steps of the increment;
/// the last one must stay within the vendor's rule-number range.
fn check_capacity(
    profile: &VendorProfile,
    header: &ResolvedHeader,
    rules: usize,
) -> Result<(), GenerateError> {
    let Some(last) = rules.checked_sub(1) else {
        return Ok(());
    };
    let highest = u64::try_from(last)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(header.step_increment))
        .saturating_add(profile.first_rule_id);
    if highest > profile.max_rule_num {
        return Err(GenerateError::TooManyRules {
            filter: header.filter_name.clone(),
            rules,
            max: profile.max_rule_num,
        });
    }
    Ok(())
}
