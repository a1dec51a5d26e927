//! Rupee formatting for dashboard figures
//!
//! Large amounts collapse to crore (`Cr`, 10^7) or lakh (`L`, 10^5) with one
//! decimal; anything smaller is shown in whole rupees with Indian digit
//! grouping (`12,34,567`).

use rust_decimal::{Decimal, RoundingStrategy};

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;

/// Short-form rupee amount, e.g. `₹1.2Cr`, `₹4.5L`, `₹45,600`
pub fn format_inr(amount: Decimal) -> String {
    let crore = Decimal::from(CRORE);
    let lakh = Decimal::from(LAKH);

    if amount >= crore {
        return format!("₹{:.1}Cr", one_decimal(amount / crore));
    }
    if amount >= lakh {
        return format!("₹{:.1}L", one_decimal(amount / lakh));
    }

    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = whole.abs().trunc().to_string();
    format!("{sign}₹{}", group_indian(&digits))
}

fn one_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Group a plain digit string: last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn inr(s: &str) -> String {
        format_inr(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_crore_and_lakh() {
        assert_eq!(inr("12500000"), "₹1.3Cr");
        assert_eq!(inr("10000000"), "₹1.0Cr");
        assert_eq!(inr("450000"), "₹4.5L");
        assert_eq!(inr("100000"), "₹1.0L");
    }

    #[test]
    fn test_small_amounts_use_indian_grouping() {
        assert_eq!(inr("0"), "₹0");
        assert_eq!(inr("999"), "₹999");
        assert_eq!(inr("45600.5"), "₹45,601");
        assert_eq!(inr("99999.4"), "₹99,999");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(inr("-1234"), "-₹1,234");
        assert_eq!(inr("-0.2"), "₹0");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
        assert_eq!(group_indian("1000"), "1,000");
    }
}
