use crate::DomainError;

/// Service and protocol labels prepended to every looked-up domain.
pub const SERVICE_LABEL: &str = "_gotify._tcp";

/// Builds the SRV owner name for `domain`.
///
/// Surrounding whitespace and a trailing root dot are dropped, and a leading
/// service label is stripped before it is prepended again, so feeding the
/// result back in yields the same name.
pub fn srv_query_name(domain: &str) -> Result<String, DomainError> {
    let trimmed = domain.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

    let bare = match trimmed.strip_prefix(SERVICE_LABEL) {
        Some("") => "",
        Some(rest) => rest.strip_prefix('.').unwrap_or(trimmed),
        None => trimmed,
    };

    if bare.is_empty() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' does not name a domain",
            domain
        )));
    }

    Ok(format!("{}.{}", SERVICE_LABEL, bare))
}
