//! Input-boundary validation.
//!
//! The store deliberately accepts whatever a caller hands it; these checks
//! run at the CLI boundary before anything reaches storage.

use crate::error::{Result, ValidationError};

/// Validate a digit count. Codes must be 6 to 8 digits long.
pub fn validate_digits(digits: u32) -> Result<()> {
    if !(6..=8).contains(&digits) {
        return Err(ValidationError::InvalidDigits.into());
    }
    Ok(())
}

/// Validate a period. Zero would make the counter undefined.
pub fn validate_period(period: u32) -> Result<()> {
    if period == 0 {
        return Err(ValidationError::ZeroPeriod.into());
    }
    Ok(())
}

/// Parse and validate a digit count argument.
pub fn parse_digits(raw: &str) -> Result<u32> {
    let digits = raw
        .parse()
        .map_err(|_| ValidationError::UnparsableDigits(raw.to_string()))?;
    validate_digits(digits)?;
    Ok(digits)
}

/// Parse and validate a period argument.
pub fn parse_period(raw: &str) -> Result<u32> {
    let period = raw
        .parse()
        .map_err(|_| ValidationError::UnparsablePeriod(raw.to_string()))?;
    validate_period(period)?;
    Ok(period)
}

/// Validate a secret's character set.
///
/// Alphanumerics plus the grouping separators the Base32 decoder strips
/// (space, hyphen) are allowed; anything else is rejected up front so a
/// typo does not silently decode to a different key.
pub fn validate_secret(secret: &str) -> Result<()> {
    for c in secret.chars() {
        if c != ' ' && c != '-' && !c.is_ascii_alphanumeric() {
            return Err(ValidationError::InvalidSecret.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_range_is_inclusive() {
        assert!(validate_digits(6).is_ok());
        assert!(validate_digits(7).is_ok());
        assert!(validate_digits(8).is_ok());
        assert!(validate_digits(5).is_err());
        assert!(validate_digits(9).is_err());
        assert!(validate_digits(0).is_err());
    }

    #[test]
    fn zero_period_rejected() {
        assert!(validate_period(0).is_err());
        assert!(validate_period(1).is_ok());
        assert!(validate_period(30).is_ok());
    }

    #[test]
    fn parse_rejects_garbage_and_out_of_range() {
        assert_eq!(parse_digits("7").unwrap(), 7);
        assert!(parse_digits("seven").is_err());
        assert!(parse_digits("9").is_err());
        assert_eq!(parse_period("60").unwrap(), 60);
        assert!(parse_period("0").is_err());
        assert!(parse_period("-30").is_err());
    }

    #[test]
    fn secret_charset() {
        assert!(validate_secret("JBSWY3DPEHPK3PXP").is_ok());
        assert!(validate_secret("JBSW Y3DP-EHPK 3PXP").is_ok());
        assert!(validate_secret("").is_ok());
        assert!(validate_secret("JBSW!Y3DP").is_err());
        assert!(validate_secret("secret=").is_err());
    }
}
