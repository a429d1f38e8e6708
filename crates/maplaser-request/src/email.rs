//! Email address validation for the submit gate.
//!
//! The accepted shape is deliberately simple: `local@label.label.suffix` where
//! - `local` is one or more of `A-Z a-z 0-9 _ . + -`
//! - every domain label is one or more of `A-Z a-z 0-9 -`
//! - the final suffix is alphanumeric and at least two characters long
//!
//! There must be at least one label before the suffix, so `user@localhost`
//! is rejected.

/// Check whether a string looks like an email address.
pub fn is_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    let Some((labels, suffix)) = domain.rsplit_once('.') else {
        return false;
    };

    if suffix.len() < 2 || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    labels
        .split('.')
        .all(|label| !label.is_empty() && label.chars().all(is_label_char))
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-')
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
