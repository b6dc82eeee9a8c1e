use serde_json::{Number, Value};

use crate::error::{DecodeError, Result};
use crate::value::kind_name;

/// Coerce a generic value into a signed integer.
///
/// Accepts any JSON number (fractions truncate toward zero) or a string
/// holding a base-10 signed integer literal.
pub fn to_integer(value: &Value) -> Result<i64> {
	match value {
		Value::Number(number) => Ok(number_to_i64(number)),
		Value::String(text) => text.parse::<i64>().map_err(|_| DecodeError::InvalidNumericLiteral {
			target: "integer",
			literal: text.clone(),
		}),
		other => Err(DecodeError::Coercion {
			target: "integer",
			got: kind_name(other),
		}),
	}
}

/// Coerce a generic value into an unsigned integer.
///
/// Accepts any JSON number or a string holding a base-10 unsigned literal.
/// Negative numeric inputs are not range-checked; they wrap through the
/// signed representation so narrowing to the target width truncates.
pub fn to_unsigned(value: &Value) -> Result<u64> {
	match value {
		Value::Number(number) => Ok(number_to_u64(number)),
		Value::String(text) => text.parse::<u64>().map_err(|_| DecodeError::InvalidNumericLiteral {
			target: "unsigned integer",
			literal: text.clone(),
		}),
		other => Err(DecodeError::Coercion {
			target: "unsigned integer",
			got: kind_name(other),
		}),
	}
}

/// Coerce a generic value into a float.
///
/// Accepts any JSON number or a string holding a base-10 floating literal.
pub fn to_float(value: &Value) -> Result<f64> {
	match value {
		Value::Number(number) => Ok(number.as_f64().unwrap_or(0.0)),
		Value::String(text) => text.parse::<f64>().map_err(|_| DecodeError::InvalidNumericLiteral {
			target: "float",
			literal: text.clone(),
		}),
		other => Err(DecodeError::Coercion {
			target: "float",
			got: kind_name(other),
		}),
	}
}

fn number_to_i64(number: &Number) -> i64 {
	if let Some(signed) = number.as_i64() {
		return signed;
	}
	if let Some(unsigned) = number.as_u64() {
		return unsigned as i64;
	}
	number.as_f64().unwrap_or(0.0) as i64
}

fn number_to_u64(number: &Number) -> u64 {
	if let Some(unsigned) = number.as_u64() {
		return unsigned;
	}
	if let Some(signed) = number.as_i64() {
		return signed as u64;
	}
	let float = number.as_f64().unwrap_or(0.0);
	if float.is_sign_negative() { (float as i64) as u64 } else { float as u64 }
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{to_float, to_integer, to_unsigned};
	use crate::error::DecodeError;

	#[test]
	fn integer_truncates_fraction_toward_zero() {
		assert_eq!(to_integer(&json!(3.9)).unwrap(), 3);
		assert_eq!(to_integer(&json!(-3.9)).unwrap(), -3);
	}

	#[test]
	fn integer_accepts_decimal_string() {
		assert_eq!(to_integer(&json!("42")).unwrap(), 42);
		assert_eq!(to_integer(&json!("-17")).unwrap(), -17);
	}

	#[test]
	fn integer_rejects_boolean() {
		let err = to_integer(&json!(true)).unwrap_err();
		assert!(matches!(err, DecodeError::Coercion { target: "integer", got: "boolean" }));
	}

	#[test]
	fn integer_rejects_unparsable_string() {
		let err = to_integer(&json!("forty-two")).unwrap_err();
		assert!(matches!(err, DecodeError::InvalidNumericLiteral { target: "integer", .. }));
	}

	#[test]
	fn unsigned_wraps_negative_input() {
		assert_eq!(to_unsigned(&json!(-1)).unwrap(), u64::MAX);
		assert_eq!(to_unsigned(&json!(-1.0)).unwrap(), u64::MAX);
	}

	#[test]
	fn unsigned_accepts_full_range_string() {
		assert_eq!(to_unsigned(&json!("18446744073709551615")).unwrap(), u64::MAX);
	}

	#[test]
	fn unsigned_rejects_signed_string() {
		let err = to_unsigned(&json!("-1")).unwrap_err();
		assert!(matches!(err, DecodeError::InvalidNumericLiteral { target: "unsigned integer", .. }));
	}

	#[test]
	fn float_accepts_number_and_string() {
		assert_eq!(to_float(&json!(2.5)).unwrap(), 2.5);
		assert_eq!(to_float(&json!(7)).unwrap(), 7.0);
		assert_eq!(to_float(&json!("3.25")).unwrap(), 3.25);
	}

	#[test]
	fn float_rejects_null() {
		let err = to_float(&json!(null)).unwrap_err();
		assert!(matches!(err, DecodeError::Coercion { target: "float", got: "null" }));
	}
}
