//! Shape checks behind the auth forms. Nothing here talks to a server:
//! a field is "valid" when it looks right.

pub const PASSWORD_MIN_CHARS: usize = 8;
pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const OTP_LENGTH: usize = 6;

pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PASSWORD: &str = "Password must be at least 8 characters";
pub const MSG_FULL_NAME: &str = "Full name is required";
pub const MSG_CONFIRM: &str = "Please confirm your password";
pub const MSG_MISMATCH: &str = "Passwords don't match";
pub const MSG_TERMS: &str = "You must accept the terms and conditions";
pub const MSG_OTP: &str = "Please enter the 6-digit code";

/// Standard address shape: `local@label.label.tld`.
///
/// The local part uses letters, digits and `_ ' + - .`, never starts or
/// ends with a dot, never ends with an apostrophe and never holds `..`.
/// The domain has at least two labels; each starts with a letter or digit
/// and continues with letters, digits or `-`. The last label is two or
/// more letters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.starts_with('.') || local.contains("..") {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.');
    if !local.chars().all(allowed) {
        return false;
    }
    // last char may not be '.' or '\''
    !matches!(local.chars().last(), Some('.') | Some('\''))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let (tld, hosts) = match labels.split_last() {
        Some(parts) => parts,
        None => return false,
    };
    let host_ok = |label: &&str| {
        let mut chars = label.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
            }
            _ => false,
        }
    };
    hosts.iter().all(host_ok) && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Length in UTF-16 code units, the unit the browser's `maxlength` and
/// the form rules count in. An emoji outside the BMP counts as two.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn has_min_chars(value: &str, min: usize) -> bool {
    utf16_len(value) >= min
}

pub fn is_valid_otp(value: &str) -> bool {
    utf16_len(value) == OTP_LENGTH
}

/// What the OTP input keeps from raw keyboard/paste input: at most six
/// code units, whitespace dropped.
pub fn sanitize_otp_input(raw: &str) -> String {
    let mut units = 0;
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .take_while(|c| {
            units += c.len_utf16();
            units <= OTP_LENGTH
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for ok in [
            "you@example.com",
            "first.last@sub.example.co",
            "o'brien+tag@mail-host.io",
            "a_b-c@x1.org",
        ] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "you@",
            "you@example",
            ".you@example.com",
            "you.@example.com",
            "yo..u@example.com",
            "you@exa..mple.com",
            "you@-example.com",
            "you@example.c",
            "you@example.c0m",
            "you@@example.com",
            "y ou@example.com",
            "you'@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn otp_input_is_capped() {
        assert_eq!(sanitize_otp_input("12 34 56 78"), "123456");
        assert_eq!(sanitize_otp_input("12"), "12");
        assert_eq!(sanitize_otp_input("12345😀"), "12345");
    }

    #[test]
    fn lengths_count_utf16_units() {
        assert_eq!(utf16_len("😀😀😀😀"), 8);
        assert!(has_min_chars("😀😀😀😀", PASSWORD_MIN_CHARS));
        assert!(!has_min_chars("ééééééé", PASSWORD_MIN_CHARS));
        assert!(is_valid_otp("😀😀😀"));
    }
}
