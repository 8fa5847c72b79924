//! Email validation functions
//!
//! Accepts one RFC 5322 `mailbox`: a bare `addr-spec`, an `angle-addr` with an
//! optional display name, and comments anywhere outside quoted strings. The
//! `addr-spec` grammar is checked by `email_address`; its RFC 5321 length
//! limits are not applied.

use email_address::{EmailAddress, Error, Options};

/// Validates that `value` is exactly one RFC 5322 mailbox.
///
/// Address lists and group syntax are rejected.
pub fn is_valid_mailbox(value: &str) -> bool {
    let Some(stripped) = strip_comments(value) else {
        return false;
    };
    let mailbox = stripped.trim();

    let addr_spec = match mailbox.strip_suffix('>') {
        Some(rest) => {
            let Some((display, addr)) = rest.rsplit_once('<') else {
                return false;
            };
            if !is_phrase(display) {
                return false;
            }
            addr.trim()
        }
        None => mailbox,
    };

    is_valid_addr_spec(addr_spec)
}

fn addr_spec_options() -> Options {
    Options::default().without_display_text()
}

fn is_valid_addr_spec(addr: &str) -> bool {
    let Some((local, domain)) = addr.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    match EmailAddress::parse_with_options(&format!("{local}@example.com"), addr_spec_options()) {
        Ok(_) => true,
        Err(Error::LocalPartTooLong) => match unquote(local) {
            Some(inner) => is_quoted_content(inner),
            None => is_dot_atom(local),
        },
        Err(_) => false,
    }
}

fn is_valid_domain(domain: &str) -> bool {
    match EmailAddress::parse_with_options(&format!("a@{domain}"), addr_spec_options()) {
        Ok(_) => true,
        Err(Error::DomainTooLong | Error::SubDomainTooLong) if !domain.starts_with('[') => {
            domain.split('.').all(|label| {
                label.starts_with(char::is_alphanumeric)
                    && label.ends_with(char::is_alphanumeric)
                    && label.chars().all(is_atext)
            })
        }
        Err(_) => false,
    }
}

/// Removes comments outside quoted strings. `None` when parentheses or
/// quotes do not balance.
fn strip_comments(value: &str) -> Option<String> {
    let mut out = String::with_capacity(value.len());
    let mut depth = 0usize;
    let mut quoted = false;
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' if quoted || depth > 0 => {
                let escaped = chars.next()?;
                if depth == 0 {
                    out.push(c);
                    out.push(escaped);
                }
            }
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth = depth.checked_sub(1)?,
            _ if depth > 0 => {}
            '"' => {
                quoted = !quoted;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    (depth == 0 && !quoted).then_some(out)
}

/// Display name: words made of atoms or quoted strings (dots allowed, as
/// most mailers emit `J. Smith`).
fn is_phrase(display: &str) -> bool {
    let mut quoted = false;
    let mut chars = display.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' if quoted => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '"' => quoted = !quoted,
            _ if quoted => {}
            c if c.is_whitespace() || c == '.' || is_atext(c) => {}
            _ => return false,
        }
    }

    !quoted
}

fn unquote(local: &str) -> Option<&str> {
    local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|inner| !inner.is_empty())
}

fn is_dot_atom(s: &str) -> bool {
    s.split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_quoted_content(s: &str) -> bool {
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) if !next.is_control() => {}
                _ => return false,
            },
            '"' => return false,
            c if c.is_control() && c != '\t' => return false,
            _ => {}
        }
    }
    true
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}
