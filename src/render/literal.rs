//! Python literal formatting for identifiers, strings and scalar values.

/// Python `repr()` of a string.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, the active quote character and anything
/// [`is_printable`] rejects are escaped.
pub fn py_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Whether Python's `str.isprintable()` would accept the character.
///
/// Rejects control, format and private use characters, and every separator
/// other than the ASCII space. Unassigned code points are not tracked.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c as u32,
        // format characters (Cf)
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
            // private use (Co)
            | 0xE000..=0xF8FF
            | 0xF0000..=0xFFFFD
            | 0x100000..=0x10FFFD
    )
}

/// Python `repr()` of an optional string: `None` when absent.
pub fn py_repr_opt(s: Option<&str>) -> String {
    match s {
        Some(s) => py_repr(s),
        None => "None".to_string(),
    }
}

pub fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Python `repr()` of a float. Whole numbers keep a trailing `.0`; magnitudes
/// from `1e16` up or below `1e-4` use exponent notation with a signed,
/// two-digit minimum exponent.
pub fn py_float(value: f64) -> String {
    if value.is_nan() {
        "float('nan')".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "float('inf')".to_string()
        } else {
            "float('-inf')".to_string()
        }
    } else if value != 0.0 && (value.abs() >= 1e16 || value.abs() < 1e-4) {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => match exp.strip_prefix('-') {
                Some(digits) => format!("{}e-{:0>2}", mantissa, digits),
                None => format!("{}e+{:0>2}", mantissa, exp),
            },
            None => formatted,
        }
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// A Python list of string literals: `['a', 'b']`.
pub fn py_str_list<S: AsRef<str>>(items: &[S]) -> String {
    format!(
        "[{}]",
        items
            .iter()
            .map(|item| py_repr(item.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// Strip exactly one leading and one trailing single quote, as reflected
/// string defaults often carry SQL quoting.
pub fn strip_sql_quotes(value: &str) -> &str {
    let value = value.strip_prefix('\'').unwrap_or(value);
    value.strip_suffix('\'').unwrap_or(value)
}
