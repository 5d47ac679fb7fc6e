//! Ringgit display formatting.
//!
//! Format: optional sign + `RM ` + absolute amount with `,` thousands
//! separators and exactly two decimals. Rounding starts from the shortest
//! decimal form that round-trips the `f64` and resolves halves away from
//! zero, so `0.995` shows as `RM 1.00`.

/// Currency symbol placed before every amount.
pub const CURRENCY_PREFIX: &str = "RM";

/// Placeholder shown instead of an amount while balances are hidden.
pub const HIDDEN_BALANCE: &str = "RM \u{2022}\u{2022}\u{2022}\u{2022}";

/// Text shown for a NaN amount.
const NAN_TEXT: &str = "NaN";

/// Text shown for an infinite amount.
const INFINITY_TEXT: &str = "\u{221e}";

/// Number of decimals every amount is shown with.
const DECIMALS: usize = 2;

/// Formats `amount` as ringgit.
///
/// With `show_sign`, non-zero amounts get a `+` or `-` in front of the
/// currency symbol; zero never carries a sign.
///
/// ```
/// use myduit::format::format_currency;
///
/// assert_eq!(format_currency(1234.5, false), "RM 1,234.50");
/// assert_eq!(format_currency(-50.0, true), "-RM 50.00");
/// assert_eq!(format_currency(-50.0, false), "RM 50.00");
/// ```
#[must_use]
pub fn format_currency(amount: f64, show_sign: bool) -> String {
    let formatted = format_amount(amount.abs());
    if show_sign && amount != 0.0_f64 {
        let sign = if amount > 0.0_f64 { '+' } else { '-' };
        return format!("{sign}{CURRENCY_PREFIX} {formatted}");
    }
    format!("{CURRENCY_PREFIX} {formatted}")
}

/// Formats `amount` unsigned, or returns [`HIDDEN_BALANCE`] when balances
/// are hidden.
#[inline]
#[must_use]
pub fn format_balance(amount: f64, show_balance: bool) -> String {
    if show_balance {
        format_currency(amount, false)
    } else {
        HIDDEN_BALANCE.to_owned()
    }
}

/// Formats a percentage rounded to a whole number (e.g. `"22%"`).
#[inline]
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Renders a non-negative amount with grouping and two decimals.
fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_owned();
    }
    if value.is_infinite() {
        return INFINITY_TEXT.to_owned();
    }

    // `Display` for f64 never uses exponent notation.
    let shortest = value.to_string();
    let (whole, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole.bytes().map(|byte| byte - b'0').collect();
    let mut fraction_digits = fraction.bytes().map(|byte| byte - b'0');
    for _ in 0..DECIMALS {
        digits.push(fraction_digits.next().unwrap_or(0));
    }
    if fraction_digits.next().is_some_and(|digit| digit >= 5) {
        round_up(&mut digits);
    }

    let cents = digits.split_off(digits.len() - DECIMALS);
    let mut out = group_thousands(&digits);
    out.push('.');
    out.extend(cents.iter().map(|&digit| char::from(b'0' + digit)));
    out
}

/// Adds one unit in the last place, carrying through nines.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Joins whole-number digits with `,` every three places.
fn group_thousands(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() * 2);
    for (idx, &digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}
