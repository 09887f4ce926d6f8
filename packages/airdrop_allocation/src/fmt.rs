//! Fixed-point amount formatting for hover labels.

use cosmwasm_std::Decimal;

/// Renders `value` rounded half-up to `decimal_places`, with the integer
/// part grouped by thousands: `1234.5` at 2 places becomes `1,234.50`.
pub fn format_amount(value: Decimal, decimal_places: u32) -> String {
    let decimal_places = decimal_places.min(Decimal::DECIMAL_PLACES);
    let unit = 10u128.pow(Decimal::DECIMAL_PLACES - decimal_places);
    let scaled = value.atomics().u128().saturating_add(unit / 2) / unit;

    let scale = 10u128.pow(decimal_places);
    let integer = group_thousands(scaled / scale);
    if decimal_places == 0 {
        integer
    } else {
        format!(
            "{}.{:0width$}",
            integer,
            scaled % scale,
            width = decimal_places as usize
        )
    }
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
