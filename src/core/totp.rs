//! RFC 6238 TOTP code generation over HMAC-SHA1 (RFC 4226).

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::core::base32;

/// Display string produced when the secret decodes to nothing usable.
///
/// This is a sentinel value, not an error: code generation is total and
/// downstream display logic depends on the exact text.
pub const INVALID_KEY: &str = "Invalid key";

/// TOTP generator for a single credential.
pub struct Totp {
    secret: String,
    digits: u32,
    period: u64,
}

impl Totp {
    /// Create a generator from a Base32 secret.
    ///
    /// A zero period is normalized to 30 seconds so generation never
    /// divides by zero, even for records that bypassed input validation.
    pub fn new(secret: &str, digits: u32, period: u32) -> Self {
        Self {
            secret: secret.to_string(),
            digits,
            period: if period == 0 { 30 } else { u64::from(period) },
        }
    }

    /// Generate the code for the current time window.
    ///
    /// Returns [`INVALID_KEY`] when the secret contains no decodable key
    /// material. Two calls within the same period window produce identical
    /// output.
    pub fn generate(&self) -> String {
        self.generate_at(unix_now())
    }

    /// Generate the code for an explicit Unix timestamp.
    pub fn generate_at(&self, unix_seconds: u64) -> String {
        let key = base32::decode(&self.secret);
        if key.is_empty() {
            return INVALID_KEY.to_string();
        }

        let counter = unix_seconds / self.period;

        let mut mac = Hmac::<Sha1>::new_from_slice(&key)
            .expect("HMAC accepts keys of any length");
        mac.update(&counter.to_be_bytes());
        let digest = mac.finalize().into_bytes();

        // Dynamic truncation (RFC 4226 §5.3): the last nibble picks a
        // 4-byte window, the top bit is masked off.
        let offset = (digest[19] & 0x0f) as usize;
        let truncated = u32::from_be_bytes([
            digest[offset] & 0x7f,
            digest[offset + 1],
            digest[offset + 2],
            digest[offset + 3],
        ]);

        let code = truncated % 10u32.pow(self.digits);
        format!("{:0width$}", code, width = self.digits as usize)
    }

    /// Seconds until the current code expires.
    pub fn seconds_remaining(&self) -> u64 {
        self.period - unix_now() % self.period
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
