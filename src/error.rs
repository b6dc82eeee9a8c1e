use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while parsing JSON input and populating record fields.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Input text is not syntactically valid JSON.
	#[error("malformed input: {0}")]
	MalformedInput(#[from] serde_json::Error),
	/// Parsed document root is not a JSON object.
	#[error("malformed input: root is {got}, expected an object")]
	MalformedRoot {
		/// Dynamic type of the root value.
		got: &'static str,
	},
	/// Exact-match field received an incompatible dynamic type.
	#[error("type mismatch at {field}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Declared name of the offending field.
		field: &'static str,
		/// Declared kind of the field.
		expected: &'static str,
		/// Dynamic type of the source value.
		got: &'static str,
	},
	/// Numeric coercion received a dynamic type it cannot convert.
	#[error("cannot coerce {got} to {target}")]
	Coercion {
		/// Numeric family requested by the field.
		target: &'static str,
		/// Dynamic type of the source value.
		got: &'static str,
	},
	/// Numeric string literal did not parse for the requested family.
	#[error("invalid {target} literal {literal:?}")]
	InvalidNumericLiteral {
		/// Numeric family requested by the field.
		target: &'static str,
		/// Offending string literal.
		literal: String,
	},
}
