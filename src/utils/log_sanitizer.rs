//! Masking of e-mail addresses before they reach the log.

const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps the first three characters of the local part and the whole domain.
/// Counts characters, not bytes, so non-ASCII names are cut safely.
///
/// # Examples
/// ```
/// use user_crud_api::utils::mask_email;
///
/// assert_eq!(mask_email("contatolsr@hotmail.com"), "con***@hotmail.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(s: &str) -> String {
    s.chars().take(VISIBLE_CHARS).collect()
}
