/// Normalizes a signup address: trimmed, lowercased, with a non-empty local
/// part and a dotted domain. Returns `None` for anything else.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    if email.chars().any(char::is_whitespace) {
        return None;
    }

    let (local, domain) = email.split_once('@')?;
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if local.is_empty() || !domain_ok {
        return None;
    }

    Some(email)
}
