use crate::phase::Phase;
use crate::types::SaleConfig;

const PERCENT_DENOMINATOR: i128 = 100;

/// `payment * token_cents / token_price`, truncated. `None` on overflow or zero price.
pub fn base_tokens(payment: i128, token_cents: i128, token_price: i128) -> Option<i128> {
    payment.checked_mul(token_cents)?.checked_div(token_price)
}

/// Adds `tokens * bonus_percent / 100`, truncated, on top of the already truncated base.
pub fn with_bonus(tokens: i128, bonus_percent: u32) -> Option<i128> {
    let bonus = tokens.checked_mul(bonus_percent as i128)? / PERCENT_DENOMINATOR;
    tokens.checked_add(bonus)
}

pub fn tokens_for_payment(payment: i128, config: &SaleConfig, phase: Phase) -> Option<i128> {
    let tokens = base_tokens(payment, config.token_cents, config.token_price)?;
    if phase.has_bonus() {
        with_bonus(tokens, config.bonus_percent)
    } else {
        Some(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbitrary::{Arbitrary, Unstructured};

    const E15: i128 = 1_000_000_000_000_000;
    const E18: i128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_one_unit_of_payment() {
        assert_eq!(base_tokens(E18, E18, E15), Some(1_000 * E18));
        assert_eq!(with_bonus(1_000 * E18, 5), Some(1_050 * E18));
    }

    #[test]
    fn test_remainders_are_dropped() {
        // 7 * 10 / 3 = 23.33
        assert_eq!(base_tokens(7, 10, 3), Some(23));
        // 23 * 5 / 100 = 1.15
        assert_eq!(with_bonus(23, 5), Some(24));
        assert_eq!(with_bonus(19, 5), Some(19));
    }

    #[test]
    fn test_overflow_and_zero_price() {
        assert_eq!(base_tokens(i128::MAX, 2, 1), None);
        assert_eq!(base_tokens(1, 1, 0), None);
        assert_eq!(with_bonus(i128::MAX, 1), None);
    }

    #[derive(derive_arbitrary::Arbitrary, Debug)]
    struct PurchaseCase {
        payment: u64,
        token_cents: u32,
        price: u32,
        bonus_percent: u8,
    }

    #[test]
    fn test_bonus_matches_floor_of_scaled_base() {
        // fixed input so the generated cases are the same on every run
        let mut seed = [0u8; 4096];
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = (i * 37 % 251) as u8;
        }
        let mut u = Unstructured::new(&seed);

        for _ in 0..200 {
            let case = PurchaseCase::arbitrary(&mut u).unwrap();
            let price = case.price as i128 + 1;
            let payment = case.payment as i128;
            let cents = case.token_cents as i128;
            let bonus = case.bonus_percent as u32;

            let base = base_tokens(payment, cents, price).unwrap();
            assert_eq!(base, payment * cents / price);
            assert!(base * price <= payment * cents);

            let total = with_bonus(base, bonus).unwrap();
            assert_eq!(total, base * (100 + bonus as i128) / 100);
            assert!(total >= base);
        }
    }
}
