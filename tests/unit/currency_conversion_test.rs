// Property-based tests for EUR fee conversion and display formatting
//
// - EUR conversion is the identity
// - convert(convert_inverse(x, C), C) == x within decimal tolerance
// - Percentages are never converted (checked at the resolver level)
// - format(parse(format(x))) == format(x)

use paycompare::core::{parse_amount, Currency, ExchangeRates};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

fn cents(max: i64) -> impl Strategy<Value = Decimal> {
    (0i64..max).prop_map(|value| Decimal::new(value, 2))
}

proptest! {
    #[test]
    fn test_eur_conversion_is_identity(amount in cents(1_000_000_000)) {
        let rates = ExchangeRates::default();
        prop_assert_eq!(rates.convert(amount, Currency::EUR), amount);
        prop_assert_eq!(rates.convert_inverse(amount, Currency::EUR), amount);
    }

    #[test]
    fn test_round_trip_within_tolerance(
        amount in cents(100_000_000_000),
        currency in prop::sample::select(vec![Currency::GBP, Currency::DKK])
    ) {
        let rates = ExchangeRates::default();
        let round_trip = rates.convert(rates.convert_inverse(amount, currency), currency);
        prop_assert!(
            (round_trip - amount).abs() <= dec!(0.0000000001),
            "{} became {} after a {} round trip", amount, round_trip, currency
        );
    }

    #[test]
    fn test_conversion_preserves_ordering(
        a in cents(10_000_000),
        b in cents(10_000_000),
        currency in currency()
    ) {
        let rates = ExchangeRates::default();
        prop_assert_eq!(
            a.cmp(&b),
            rates.convert(a, currency).cmp(&rates.convert(b, currency))
        );
    }

    #[test]
    fn test_formatting_is_idempotent(amount in cents(100_000_000_000), currency in currency()) {
        let formatted = currency.format_amount(amount);
        prop_assert_eq!(currency.format_amount(parse_amount(&formatted)), formatted);
    }

    #[test]
    fn test_formatting_shape(amount in cents(100_000_000_000), currency in currency()) {
        let formatted = currency.format_amount(amount);
        let digits = formatted.strip_prefix(currency.symbol()).unwrap();
        let (whole, fraction) = digits.split_once('.').unwrap();

        prop_assert_eq!(fraction.len(), 2);
        for (i, group) in whole.split(',').enumerate() {
            if i == 0 {
                prop_assert!(!group.is_empty() && group.len() <= 3);
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}

#[test]
fn test_known_conversions() {
    let rates = ExchangeRates::default();
    assert_eq!(rates.convert(dec!(1.18), Currency::GBP), dec!(1));
    assert_eq!(rates.convert(dec!(0.134), Currency::DKK), dec!(1));
    assert_eq!(rates.convert_inverse(dec!(250000), Currency::GBP), dec!(295000));
}

#[test]
fn test_same_separators_for_every_currency() {
    assert_eq!(Currency::EUR.format_amount(dec!(1234567.8)), "€1,234,567.80");
    assert_eq!(Currency::GBP.format_amount(dec!(1234567.8)), "£1,234,567.80");
    assert_eq!(Currency::DKK.format_amount(dec!(1234567.8)), "kr1,234,567.80");
}
