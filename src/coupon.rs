//! Limited-time promo code generation
//!
//! Codes are cosmetic: fixed alphabet, fixed length, no uniqueness or
//! cryptographic guarantee.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet codes are drawn from
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters per code
pub const CODE_LEN: usize = 8;

/// Seconds a code stays valid after issue
pub const CODE_LIFETIME_SECS: i64 = 600;

/// An issued promo code with its expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Coupon {
    /// Issue a fresh code valid for [`CODE_LIFETIME_SECS`] from `now`
    pub fn issue<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Self {
        Self {
            code: generate_code(rng),
            issued_at: now,
            expires_at: now + Duration::seconds(CODE_LIFETIME_SECS),
        }
    }

    /// Whole seconds until expiry, floored at zero
    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Countdown in the `m:ss` form shown next to the code
    pub fn countdown(&self, now: DateTime<Utc>) -> String {
        format_countdown(self.seconds_remaining(now))
    }
}

/// Draw a [`CODE_LEN`]-character code uniformly from [`CODE_ALPHABET`]
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Render whole seconds as `m:ss`
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_code_shape() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = generate_code(&mut rng);
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_code(&mut SmallRng::seed_from_u64(42));
        let b = generate_code(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lifetime() {
        let mut rng = SmallRng::seed_from_u64(1);
        let issued = Utc::now();
        let coupon = Coupon::issue(&mut rng, issued);

        assert_eq!(coupon.seconds_remaining(issued), CODE_LIFETIME_SECS);
        assert!(!coupon.is_expired(issued));

        let later = issued + Duration::seconds(CODE_LIFETIME_SECS);
        assert!(coupon.is_expired(later));
        assert_eq!(coupon.seconds_remaining(later), 0);
        assert_eq!(coupon.seconds_remaining(later + Duration::seconds(30)), 0);
    }

    #[test]
    fn test_countdown_format() {
        assert_eq!(format_countdown(600), "10:00");
        assert_eq!(format_countdown(69), "1:09");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(-5), "0:00");
    }
}
