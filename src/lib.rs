//! Decode JSON text into statically typed records.
//!
//! Each record type carries a table of field descriptors (name, optional
//! serialization tag, value kind) and hands out mutable slots for its fields.
//! The decoder parses the input into a generic JSON value tree, then walks the
//! descriptor table, coercing each matching JSON value into the field's
//! declared type and recursing into nested records and sequences.

mod coerce;
mod decode;
mod error;
mod macros;
mod record;
mod value;

/// Pure scalar coercion functions.
pub use coerce::{to_float, to_integer, to_unsigned};
/// Decode entry points and behavior switches.
pub use decode::{DecodeOptions, from_str, from_str_with};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Field descriptor tables and slot dispatch types.
pub use record::{FieldDescriptor, FieldKind, FieldSlot, Record, Sequence, Slot};
/// Dynamic JSON kind names used in diagnostics.
pub use value::kind_name;
