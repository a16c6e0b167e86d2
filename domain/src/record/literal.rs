//! Literal rendering of answer values
//!
//! Gold files store answers in Python literal notation, which the retrieval
//! training side reads back with `ast.literal_eval`. The rendering is pinned
//! per JSON shape so that output is byte-identical across runs and tools:
//!
//! | JSON value | Top level       | Nested          |
//! |------------|-----------------|-----------------|
//! | string     | raw text        | quoted literal  |
//! | array      | `[a, b]`        | `[a, b]`        |
//! | object     | `{'k': v}`      | `{'k': v}`      |
//! | bool       | `True`/`False`  | `True`/`False`  |
//! | null       | `None`          | `None`          |
//! | number     | shortest repr   | shortest repr   |

use serde_json::{Number, Value};
use std::fmt::Write;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Render an `answers` value as it appears in the second gold field
///
/// A top-level string is emitted unquoted; every other shape uses its
/// literal form.
pub fn render_answers(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => render_literal(other),
    }
}

/// Render any value in literal form (strings quoted)
pub fn render_literal(value: &Value) -> String {
    let mut out = String::new();
    write_literal(&mut out, value);
    out
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(number) => write_number(out, number),
        Value::String(text) => write_quoted(out, text),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_literal(out, item);
            }
            out.push('}');
        }
    }
}

fn write_number(out: &mut String, number: &Number) {
    // `arbitrary_precision` keeps the number's source text
    let text = number.to_string();
    let magnitude = text.strip_prefix('-').unwrap_or(&text);

    if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
        // Integers print exactly; `-0` is plain zero
        if magnitude.bytes().all(|b| b == b'0') {
            out.push('0');
        } else {
            out.push_str(&text);
        }
    } else {
        // Literals beyond f64 range (`1e400`) parse to infinity
        out.push_str(&float_repr(text.parse::<f64>().unwrap_or(f64::NAN)));
    }
}

/// Shortest round-trip float representation
///
/// Fixed notation (always with a fractional part) for decimal exponents in
/// `-4..16`, scientific notation with a signed two-digit exponent otherwise.
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "-1.25e-7"
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::from(sign);
    if (-4..16).contains(&exponent) {
        if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.extend(std::iter::repeat_n('0', int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-exponent - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "e{}{:02}", exp_sign, exponent.abs());
    }
    out
}

fn write_quoted(out: &mut String, text: &str) {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => write_escaped_codepoint(out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn write_escaped_codepoint(out: &mut String, ch: char) {
    let code = ch as u32;
    let _ = if code < 0x100 {
        write!(out, "\\x{:02x}", code)
    } else if code < 0x10000 {
        write!(out, "\\u{:04x}", code)
    } else {
        write!(out, "\\U{:08x}", code)
    };
}

/// Characters escaped inside quoted literals: every general category that
/// is not printable (controls, format, surrogates, private use, unassigned,
/// and separators other than the ASCII space).
fn is_unprintable(ch: char) -> bool {
    if ch == ' ' {
        return false;
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
