//! Conversion engine
//!
//! Pure functions that move one reply value into one [`Slot`].
//!
//! ## Rules
//! - `Skip` destinations consume any value without looking at it
//! - `Nil` leaves every destination untouched and is never an error
//! - `Error` replies become the conversion failure
//! - bulk strings are parsed (numbers, bools) or copied (strings, bytes)
//! - integers are range-checked against the destination width
//! - arrays only bind to sequence destinations, element by element

use std::num::{IntErrorKind, ParseIntError};

use bytes::Bytes;

use super::Slot;
use crate::error::{Result, ScanError};
use crate::value::Value;

/// Convert one reply value into a destination
pub fn convert(slot: Slot<'_>, value: &Value) -> Result<()> {
    match (slot, value) {
        (Slot::Discard, _) => Ok(()),
        (_, Value::Nil) => Ok(()),
        (_, Value::Error(message)) => Err(ScanError::Reply(message.clone())),
        (Slot::Any(dest), value) => {
            *dest = value.clone();
            Ok(())
        }
        (slot, Value::Bulk(bytes)) => convert_bulk(slot, bytes),
        (slot, Value::Int(n)) => convert_int(slot, *n),
        (slot, Value::Array(items)) => convert_seq(slot, items),
    }
}

/// Convert a bulk string into a destination
pub fn convert_bulk(slot: Slot<'_>, bytes: &[u8]) -> Result<()> {
    let to = slot.type_name();

    match slot {
        Slot::Discard => {}
        Slot::Signed(dest) => {
            let text = numeric_text(bytes, to)?;
            dest.parse_from(text)
                .map_err(|e| int_error(e, text, to))?;
        }
        Slot::Unsigned(dest) => {
            let text = numeric_text(bytes, to)?;
            dest.parse_from(text)
                .map_err(|e| int_error(e, text, to))?;
        }
        Slot::F32(dest) => {
            let text = numeric_text(bytes, to)?;
            let value: f32 = text.parse().map_err(|_| parse_error(text, to))?;
            check_float_range(value.is_infinite(), text, to)?;
            *dest = value;
        }
        Slot::F64(dest) => {
            let text = numeric_text(bytes, to)?;
            let value: f64 = text.parse().map_err(|_| parse_error(text, to))?;
            check_float_range(value.is_infinite(), text, to)?;
            *dest = value;
        }
        Slot::Bool(dest) => {
            *dest = parse_bool(bytes)?;
        }
        Slot::Str(dest) => {
            *dest = String::from_utf8_lossy(bytes).into_owned();
        }
        Slot::Bytes(dest) => {
            dest.clear();
            dest.extend_from_slice(bytes);
        }
        Slot::Any(dest) => {
            *dest = Value::Bulk(Bytes::copy_from_slice(bytes));
        }
        Slot::Values(_) | Slot::Seq(_) => {
            return Err(ScanError::TypeMismatch {
                from: "bulk string",
                to,
            });
        }
    }

    Ok(())
}

/// Convert an integer reply into a destination
pub fn convert_int(slot: Slot<'_>, n: i64) -> Result<()> {
    let to = slot.type_name();
    let out_of_range = || ScanError::Range {
        value: n.to_string(),
        target: to,
    };

    match slot {
        Slot::Discard => {}
        Slot::Signed(dest) => {
            if !dest.store(n) {
                return Err(out_of_range());
            }
        }
        Slot::Unsigned(dest) => {
            let Ok(unsigned) = u64::try_from(n) else {
                return Err(out_of_range());
            };
            if !dest.store(unsigned) {
                return Err(out_of_range());
            }
        }
        Slot::Bool(dest) => {
            *dest = n != 0;
        }
        Slot::Any(dest) => {
            *dest = Value::Int(n);
        }
        _ => {
            return Err(ScanError::TypeMismatch { from: "integer", to });
        }
    }

    Ok(())
}

/// Convert an array reply into a destination
///
/// Typed sequences are resized to exactly `items.len()` and filled in order;
/// the first element that fails to convert aborts the whole conversion.
pub fn convert_seq(slot: Slot<'_>, items: &[Value]) -> Result<()> {
    match slot {
        Slot::Discard => {}
        Slot::Any(dest) => {
            *dest = Value::Array(items.to_vec());
        }
        Slot::Values(dest) => {
            dest.clear();
            dest.extend_from_slice(items);
        }
        Slot::Seq(dest) => {
            dest.reset(items.len());
            for (index, item) in items.iter().enumerate() {
                let element = dest.element(index);
                match item {
                    Value::Bulk(bytes) => convert_bulk(element, bytes)?,
                    Value::Int(n) => convert_int(element, *n)?,
                    other => {
                        return Err(ScanError::TypeMismatch {
                            from: other.kind_name(),
                            to: element.type_name(),
                        });
                    }
                }
            }
        }
        other => {
            return Err(ScanError::TypeMismatch {
                from: "array",
                to: other.type_name(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Text parsing helpers
// =============================================================================

fn parse_error(text: &str, target: &'static str) -> ScanError {
    ScanError::Parse {
        text: text.to_string(),
        target,
    }
}

/// Numbers must be valid UTF-8 before they can be parsed at all
fn numeric_text<'a>(bytes: &'a [u8], target: &'static str) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|_| ScanError::Parse {
        text: String::from_utf8_lossy(bytes).into_owned(),
        target,
    })
}

fn int_error(err: ParseIntError, text: &str, target: &'static str) -> ScanError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ScanError::Range {
            value: text.to_string(),
            target,
        },
        _ => parse_error(text, target),
    }
}

/// Finite text that parsed to infinity overflowed the destination width
fn check_float_range(infinite: bool, text: &str, target: &'static str) -> Result<()> {
    if !infinite {
        return Ok(());
    }
    let magnitude = text
        .trim_start_matches(|c| c == '+' || c == '-')
        .to_ascii_lowercase();
    if magnitude == "inf" || magnitude == "infinity" {
        Ok(())
    } else {
        Err(ScanError::Range {
            value: text.to_string(),
            target,
        })
    }
}

fn parse_bool(bytes: &[u8]) -> Result<bool> {
    match bytes {
        b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Ok(true),
        b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Ok(false),
        _ => Err(ScanError::Parse {
            text: String::from_utf8_lossy(bytes).into_owned(),
            target: "bool",
        }),
    }
}
