//! Validation for the hosted content URL and the default orientation set.

use std::collections::HashSet;

use crate::schema::SpiceRushConfig;

/// Schemes the web surface is allowed to start on.
const ALLOWED_SCHEMES: &[&str] = &["https", "http", "file"];

/// Validate that the content URL parses and uses a loadable scheme.
pub(crate) fn validate_content(errors: &mut Vec<String>, config: &SpiceRushConfig) {
    check_content_url(errors, &config.content.url);
}

pub(crate) fn check_content_url(errors: &mut Vec<String>, url: &str) {
    let raw = url.trim();
    if raw.is_empty() {
        errors.push("content.url is empty".into());
        return;
    }

    match url::Url::parse(raw) {
        Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => {}
        Ok(parsed) => errors.push(format!(
            "content.url scheme '{}' is not one of {ALLOWED_SCHEMES:?}",
            parsed.scheme()
        )),
        Err(e) => errors.push(format!("content.url '{raw}' is not a valid URL: {e}")),
    }
}

/// Validate that the default orientation set is non-empty and has no repeats.
pub(crate) fn validate_orientation(errors: &mut Vec<String>, config: &SpiceRushConfig) {
    let list = &config.orientation.default;
    if list.is_empty() {
        errors.push("orientation.default must name at least one orientation".into());
        return;
    }

    let mut seen = HashSet::new();
    for o in list {
        if !seen.insert(*o) {
            errors.push(format!("orientation.default lists '{o}' more than once"));
        }
    }
}
