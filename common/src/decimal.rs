//! Exact-decimal arithmetic for prices and amounts.
//!
//! The matching engine must never let a binary float touch the value path —
//! every price and amount is parsed from a decimal string, added/subtracted/
//! compared exactly, and serialized back to a canonical decimal string. We
//! get this from `rust_decimal` (the same crate `Order`/`Trade` already use
//! for every monetary field) rather than hand-rolling a bignum: it stores a
//! 96-bit integer mantissa plus a scale, so parse → arithmetic → serialize is
//! exact for anything this engine will ever see.

use crate::error::EngineError;

/// Re-exported so callers only need `common::Decimal`, never `rust_decimal` directly.
pub type Decimal = rust_decimal::Decimal;

/// Parses a decimal string per the wire format: optional sign, integer part,
/// optional `.` + fractional part. Leading zeros are allowed; trailing zeros
/// are preserved until [`canonical`] is applied.
pub fn parse(s: &str) -> Result<Decimal, EngineError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| EngineError::InvalidDecimal(s.to_string()))
}

/// Canonical string form: minimal representation, no superfluous trailing
/// fractional zeros, no trailing `.`.
///
/// ```text
/// canonical(parse("0.0023").unwrap())   == "0.0023"
/// canonical(parse("63500.00").unwrap()) == "63500"
/// canonical(parse("4.5000").unwrap())   == "4.5"
/// ```
pub fn canonical(d: Decimal) -> String {
    d.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_trailing_zeros() {
        assert_eq!(canonical(parse("0.0023").unwrap()), "0.0023");
        assert_eq!(canonical(parse("63500.00").unwrap()), "63500");
        assert_eq!(canonical(parse("4.5000").unwrap()), "4.5");
        assert_eq!(canonical(parse("0.00230").unwrap()), "0.0023");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse("abc").is_err());
        assert!(parse("1.2.3").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn preserves_ordering_and_arithmetic() {
        let a = parse("1.1").unwrap();
        let b = parse("2.2").unwrap();
        assert!(a < b);
        assert_eq!(canonical(a + b), "3.3");
        assert_eq!(a.min(b), a);
    }
}
