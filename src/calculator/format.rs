//! Number and expression formatting for display.

/// Significant fractional digits used once a number is too long to show.
const EXPONENT_DIGITS: usize = 5;

/// Render `value` as its shortest round-tripping decimal string, switching to
/// exponential notation (`1.23457e+21`) when that string is longer than
/// `max_length` characters.
pub fn format_number(value: f64, max_length: usize) -> String {
    let plain = value.to_string();
    if plain.len() <= max_length {
        return plain;
    }

    let exponential = format!("{:.*e}", EXPONENT_DIGITS, value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Group the integer digits of `value` in threes with `,`.
pub fn add_thousands_separator(value: f64) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Keep the tail of a long expression, prefixed with `...`, so the most
/// recently typed characters stay visible.
pub fn truncate_expression(expression: &str, max_length: usize) -> String {
    let count = expression.chars().count();
    if count <= max_length {
        return expression.to_string();
    }

    let tail: String = expression.chars().skip(count - max_length).collect();
    format!("...{tail}")
}
