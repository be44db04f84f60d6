use crate::errors::DomainError;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks the syntax of a user-supplied host name and returns it without a
/// trailing dot.
///
/// Labels are 1 to 63 characters of letters, digits, `-` and `_`, and may
/// not begin or end with `-`. The whole name is at most 253 characters.
pub fn validate_domain_name(input: &str) -> Result<String, DomainError> {
    let name = input.trim();
    let name = name.strip_suffix('.').unwrap_or(name);

    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain name is empty".to_string(),
        ));
    }
    if name.len() > MAX_DOMAIN_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' is {} characters, limit is {}",
            name,
            name.len(),
            MAX_DOMAIN_LEN
        )));
    }

    for label in name.split('.') {
        check_label(name, label)?;
    }

    Ok(name.to_string())
}

fn check_label(name: &str, label: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidDomainName(format!("'{}': {}", name, reason));

    if label.is_empty() {
        return Err(invalid("empty label"));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(invalid(&format!("label '{}' exceeds 63 characters", label)));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(invalid(&format!(
            "label '{}' starts or ends with a hyphen",
            label
        )));
    }
    if let Some(c) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(&format!("invalid character '{}'", c)));
    }
    Ok(())
}
