//! Boolean conversion helpers.
//!
//! Conversions between booleans, integers and strings, with `Option<bool>`
//! standing in for a possibly-absent boolean. Functions that can be given a
//! value matching neither of their configured alternatives return an error;
//! everything else is a total function over its inputs.

use crate::{Result, TextError};

/// Negates a possibly-absent boolean; absent stays absent.
pub fn negate(value: Option<bool>) -> Option<bool> {
    value.map(|v| !v)
}

/// Checks if a possibly-absent boolean is present and `true`.
pub fn is_true(value: Option<bool>) -> bool {
    value == Some(true)
}

/// Checks if a possibly-absent boolean is absent or `false`.
pub fn is_not_true(value: Option<bool>) -> bool {
    !is_true(value)
}

/// Checks if a possibly-absent boolean is present and `false`.
pub fn is_false(value: Option<bool>) -> bool {
    value == Some(false)
}

/// Checks if a possibly-absent boolean is absent or `true`.
pub fn is_not_false(value: Option<bool>) -> bool {
    !is_false(value)
}

/// Converts a possibly-absent boolean to `bool`, treating absent as `false`.
pub fn to_bool(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Converts a possibly-absent boolean to `bool` with a configurable default.
pub fn to_bool_default_if_none(value: Option<bool>, default: bool) -> bool {
    value.unwrap_or(default)
}

/// Converts an integer to a boolean: zero is `false`, anything else `true`.
pub fn to_bool_from_int(value: i32) -> bool {
    value != 0
}

/// Converts an integer to a possibly-absent boolean: zero is `Some(false)`,
/// anything else `Some(true)`.
pub fn to_bool_object_from_int(value: i32) -> Option<bool> {
    Some(value != 0)
}

/// Converts an integer to a boolean by comparing against configured values.
///
/// `true_value` is checked first, so when both configured values are equal
/// the result is `true`.
///
/// # Errors
///
/// Returns [`TextError::InvalidParameter`] when `value` matches neither
/// configured value.
///
/// # Examples
///
/// ```
/// use textkit::boolean::to_bool_from_ints;
///
/// assert_eq!(to_bool_from_ints(1, 1, 2).unwrap(), true);
/// assert_eq!(to_bool_from_ints(2, 1, 2).unwrap(), false);
/// assert_eq!(to_bool_from_ints(2, 2, 2).unwrap(), true);
/// assert!(to_bool_from_ints(3, 1, 2).is_err());
/// ```
pub fn to_bool_from_ints(value: i32, true_value: i32, false_value: i32) -> Result<bool> {
    if value == true_value {
        Ok(true)
    } else if value == false_value {
        Ok(false)
    } else {
        Err(TextError::invalid_parameter(
            "The integer did not match either specified value",
        ))
    }
}

/// Converts an integer to a possibly-absent boolean by comparing against
/// configured true, false and absent values, checked in that order.
///
/// # Errors
///
/// Returns [`TextError::InvalidParameter`] when `value` matches none of the
/// three configured values.
pub fn to_bool_object_from_ints(
    value: i32,
    true_value: i32,
    false_value: i32,
    none_value: i32,
) -> Result<Option<bool>> {
    if value == true_value {
        Ok(Some(true))
    } else if value == false_value {
        Ok(Some(false))
    } else if value == none_value {
        Ok(None)
    } else {
        Err(TextError::invalid_parameter(
            "The integer did not match any specified value",
        ))
    }
}

/// Converts a string to a possibly-absent boolean using the standard truth
/// vocabulary.
///
/// Case-insensitive: `true`/`t`/`yes`/`y`/`on` give `Some(true)`,
/// `false`/`f`/`no`/`n`/`off` give `Some(false)`, anything else `None`.
/// Matching is switched on length first so no allocation or lowercasing of
/// the whole input is needed.
///
/// # Examples
///
/// ```
/// use textkit::boolean::to_bool_object;
///
/// let cases = [
///     ("true", Some(true)),
///     ("YES", Some(true)),
///     ("on", Some(true)),
///     ("y", Some(true)),
///     ("false", Some(false)),
///     ("Off", Some(false)),
///     ("n", Some(false)),
///     ("ono", None),
///     ("truth", None),
///     ("", None),
/// ];
/// for (input, expected) in cases {
///     assert_eq!(to_bool_object(input), expected);
/// }
/// ```
pub fn to_bool_object(value: &str) -> Option<bool> {
    let mut chars = value.chars().map(|c| c.to_ascii_lowercase());
    match value.chars().count() {
        1 => match chars.next() {
            Some('y') | Some('t') => Some(true),
            Some('n') | Some('f') => Some(false),
            _ => None,
        },
        2 => {
            let pair = (chars.next(), chars.next());
            match pair {
                (Some('o'), Some('n')) => Some(true),
                (Some('n'), Some('o')) => Some(false),
                _ => None,
            }
        }
        3 => {
            let triple = (chars.next(), chars.next(), chars.next());
            match triple {
                (Some('y'), Some('e'), Some('s')) => Some(true),
                (Some('o'), Some('f'), Some('f')) => Some(false),
                _ => None,
            }
        }
        4 => {
            if value.eq_ignore_ascii_case("true") {
                Some(true)
            } else {
                None
            }
        }
        5 => {
            if value.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Converts a string to `bool`; anything outside the truth vocabulary is
/// `false`.
pub fn to_bool_str(value: &str) -> bool {
    to_bool_object(value) == Some(true)
}

/// Converts a string to a boolean by comparing against configured strings.
///
/// # Errors
///
/// Returns [`TextError::InvalidParameter`] when `value` matches neither
/// configured string.
pub fn to_bool_from_strs(value: &str, true_str: &str, false_str: &str) -> Result<bool> {
    if value == true_str {
        Ok(true)
    } else if value == false_str {
        Ok(false)
    } else {
        Err(TextError::invalid_parameter(
            "The string did not match either specified value",
        ))
    }
}

/// Converts a boolean to 1 or 0.
pub fn to_integer(value: bool) -> i32 {
    if value { 1 } else { 0 }
}

/// Converts a boolean to one of two configured integers.
pub fn to_integer_values(value: bool, true_value: i32, false_value: i32) -> i32 {
    if value { true_value } else { false_value }
}

/// Converts a possibly-absent boolean to a possibly-absent integer.
pub fn to_integer_object(value: Option<bool>) -> Option<i32> {
    value.map(to_integer)
}

/// Converts a boolean to one of two configured strings.
pub fn to_str<'a>(value: bool, true_str: &'a str, false_str: &'a str) -> &'a str {
    if value { true_str } else { false_str }
}

/// Converts a boolean to `"true"` or `"false"`.
pub fn to_str_true_false(value: bool) -> &'static str {
    to_str(value, "true", "false")
}

/// Converts a boolean to `"on"` or `"off"`.
pub fn to_str_on_off(value: bool) -> &'static str {
    to_str(value, "on", "off")
}

/// Converts a boolean to `"yes"` or `"no"`.
pub fn to_str_yes_no(value: bool) -> &'static str {
    to_str(value, "yes", "no")
}

/// Converts a possibly-absent boolean to one of two configured strings;
/// absent stays absent.
pub fn to_str_opt<'a>(value: Option<bool>, true_str: &'a str, false_str: &'a str) -> Option<&'a str> {
    value.map(|v| to_str(v, true_str, false_str))
}

/// Logical AND over a slice of booleans.
///
/// # Errors
///
/// Returns [`TextError::InvalidParameter`] for an empty slice.
pub fn and(values: &[bool]) -> Result<bool> {
    if values.is_empty() {
        return Err(TextError::invalid_parameter("Array is empty"));
    }
    Ok(values.iter().all(|&v| v))
}

/// Logical OR over a slice of booleans.
///
/// # Errors
///
/// Returns [`TextError::InvalidParameter`] for an empty slice.
pub fn or(values: &[bool]) -> Result<bool> {
    if values.is_empty() {
        return Err(TextError::invalid_parameter("Array is empty"));
    }
    Ok(values.iter().any(|&v| v))
}

/// Logical XOR over a slice of booleans.
///
/// # Errors
///
/// Returns [`TextError::InvalidParameter`] for an empty slice.
pub fn xor(values: &[bool]) -> Result<bool> {
    if values.is_empty() {
        return Err(TextError::invalid_parameter("Array is empty"));
    }
    Ok(values.iter().fold(false, |acc, &v| acc ^ v))
}
