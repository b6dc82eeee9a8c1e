use serde_json::{Map, Value};

use crate::coerce::{to_float, to_integer, to_unsigned};
use crate::error::{DecodeError, Result};
use crate::record::{FieldKind, FieldSlot, Record};
use crate::value::kind_name;

/// Behavior switches for a decode call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
	/// Surface errors from nested record decodes instead of discarding them.
	pub propagate_nested_errors: bool,
}

impl DecodeOptions {
	/// Preset that treats nested record failures as terminal.
	pub fn strict() -> Self {
		Self {
			propagate_nested_errors: true,
		}
	}
}

/// Decode a JSON object into `target` with default options.
///
/// Fields whose source key is absent from the input keep their current value;
/// partial population is expected and not an error. On failure the decode
/// aborts immediately and fields written before the error stay written.
pub fn from_str(json: &str, target: &mut dyn Record) -> Result<()> {
	from_str_with(json, target, &DecodeOptions::default())
}

/// Decode a JSON object into `target` with explicit options.
pub fn from_str_with(json: &str, target: &mut dyn Record, opt: &DecodeOptions) -> Result<()> {
	let root: Value = serde_json::from_str(json)?;
	let Value::Object(map) = root else {
		return Err(DecodeError::MalformedRoot { got: kind_name(&root) });
	};
	populate(&map, target, opt)
}

fn populate(map: &Map<String, Value>, target: &mut dyn Record, opt: &DecodeOptions) -> Result<()> {
	for desc in target.descriptors() {
		let Some(value) = map.get(desc.source_key()) else {
			continue;
		};
		let Some(slot) = target.field_slot(desc.name) else {
			continue;
		};
		assign(slot, value, desc.name, opt)?;
	}
	Ok(())
}

fn assign(slot: FieldSlot<'_>, value: &Value, field: &'static str, opt: &DecodeOptions) -> Result<()> {
	match slot {
		FieldSlot::Str(dest) => match value {
			Value::String(text) => *dest = text.clone(),
			other => return Err(mismatch(field, FieldKind::Str, other)),
		},
		FieldSlot::I8(dest) => *dest = to_integer(value)? as i8,
		FieldSlot::I16(dest) => *dest = to_integer(value)? as i16,
		FieldSlot::I32(dest) => *dest = to_integer(value)? as i32,
		FieldSlot::I64(dest) => *dest = to_integer(value)?,
		FieldSlot::Isize(dest) => *dest = to_integer(value)? as isize,
		FieldSlot::U8(dest) => *dest = to_unsigned(value)? as u8,
		FieldSlot::U16(dest) => *dest = to_unsigned(value)? as u16,
		FieldSlot::U32(dest) => *dest = to_unsigned(value)? as u32,
		FieldSlot::U64(dest) => *dest = to_unsigned(value)?,
		FieldSlot::Usize(dest) => *dest = to_unsigned(value)? as usize,
		FieldSlot::F32(dest) => *dest = to_float(value)? as f32,
		FieldSlot::F64(dest) => *dest = to_float(value)?,
		FieldSlot::Bool(dest) => match value {
			Value::Bool(flag) => *dest = *flag,
			other => return Err(mismatch(field, FieldKind::Bool, other)),
		},
		FieldSlot::Record(record) => {
			// Non-object input leaves the field untouched.
			if let Value::Object(map) = value {
				record.reset();
				let nested = populate(map, record, opt);
				if opt.propagate_nested_errors {
					nested?;
				}
			}
		}
		FieldSlot::Seq(seq) => {
			// Non-array input leaves the field untouched.
			if let Value::Array(items) = value {
				seq.reset_len(items.len());
				for (index, item) in items.iter().enumerate() {
					let Some(elem) = seq.slot_at(index) else {
						break;
					};
					assign(elem, item, field, opt)?;
				}
			}
		}
	}
	Ok(())
}

fn mismatch(field: &'static str, expected: FieldKind, got: &Value) -> DecodeError {
	DecodeError::TypeMismatch {
		field,
		expected: expected.name(),
		got: kind_name(got),
	}
}
