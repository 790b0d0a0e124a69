//! Random string generation.

use rand::Rng;

use crate::error::{Error, Result};

/// Default charset: ASCII letters and digits.
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random string of `length` characters drawn from `charset`.
///
/// Uses the thread-local RNG, which is cryptographically secure, so the
/// output is suitable for secrets and passwords.
pub fn random_string(length: usize, charset: &str) -> Result<String> {
    if length == 0 {
        return Err(Error::InvalidArgument("length must be positive".to_string()));
    }

    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return Err(Error::InvalidArgument("charset must not be empty".to_string()));
    }

    let mut rng = rand::thread_rng();
    Ok((0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        assert_eq!(random_string(16, DEFAULT_CHARSET).unwrap().len(), 16);
        assert_eq!(random_string(1, DEFAULT_CHARSET).unwrap().len(), 1);
    }

    #[test]
    fn draws_only_from_charset() {
        let value = random_string(256, "abc").unwrap();
        assert!(value.chars().all(|c| "abc".contains(c)));
    }

    #[test]
    fn rejects_zero_length() {
        assert!(matches!(
            random_string(0, DEFAULT_CHARSET).unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn rejects_empty_charset() {
        assert!(matches!(
            random_string(8, "").unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn consecutive_calls_differ() {
        // 64 chars over a 62-symbol charset; a collision would mean a
        // broken RNG, not bad luck.
        let a = random_string(64, DEFAULT_CHARSET).unwrap();
        let b = random_string(64, DEFAULT_CHARSET).unwrap();
        assert_ne!(a, b);
    }
}
