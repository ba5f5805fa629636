//! Currency formatting
//!
//! Amounts are rounded half away from zero on their shortest decimal form,
//! the digits `f64`'s `Display` prints, so `1.005` becomes `1,01` even though
//! the stored binary value is `1.00499...`.
//! Non-finite input is not rejected: NaN prints as `NaN` and infinities as `∞`,
//! each still wrapped with the currency symbol.

use rust_decimal::prelude::*;

use crate::{group_digits, Locale, SymbolPosition, TransactionType};

/// Render `amount` as a currency string, e.g. `R$ 1.234,56` or `-R$ 5,00`
pub fn format_currency(amount: f64, locale: &Locale) -> String {
    if amount.is_nan() {
        return attach_symbol("NaN", false, locale);
    }
    if amount.is_infinite() {
        return attach_symbol("∞", amount < 0.0, locale);
    }

    let (digits, negative) = round_amount(amount, locale.decimal_places);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut number = group_digits(int_part, &locale.thousands_separator);
    if let Some(frac) = frac_part {
        number.push_str(&locale.decimal_separator);
        number.push_str(frac);
    }

    attach_symbol(&number, negative, locale)
}

/// Plain amount for income, `- ` followed by the amount for outcome
pub fn signed_currency_label(amount: f64, kind: TransactionType, locale: &Locale) -> String {
    match kind {
        TransactionType::Income => format_currency(amount, locale),
        TransactionType::Outcome => format!("- {}", format_currency(amount, locale)),
    }
}

/// Absolute value rounded to `places` digits, plus whether a minus sign is due.
/// A value that rounds to zero never carries a sign.
fn round_amount(amount: f64, places: u32) -> (String, bool) {
    let width = places as usize;
    match amount.to_string().parse::<Decimal>() {
        Ok(shortest) => {
            let rounded = shortest.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            let negative = rounded.is_sign_negative() && !rounded.is_zero();
            (format!("{:.*}", width, rounded.abs()), negative)
        }
        // Magnitudes beyond the decimal range: no fractional digits left to round
        Err(_) => {
            let rounded = amount.abs().round();
            (format!("{:.*}", width, rounded), amount < 0.0)
        }
    }
}

fn attach_symbol(number: &str, negative: bool, locale: &Locale) -> String {
    let sign = if negative { "-" } else { "" };
    match locale.symbol_position {
        SymbolPosition::Before => format!(
            "{}{}{}{}",
            sign, locale.currency_symbol, locale.symbol_spacing, number
        ),
        SymbolPosition::After => format!(
            "{}{}{}{}",
            sign, number, locale.symbol_spacing, locale.currency_symbol
        ),
    }
}
