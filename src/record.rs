/// Declared value kind of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Exact-match string field.
	Str,
	/// Signed integer family, any width.
	Int,
	/// Unsigned integer family, any width.
	Uint,
	/// Floating family (`f32`, `f64`).
	Float,
	/// Exact-match boolean field.
	Bool,
	/// Nested record field.
	Record,
	/// Sequence field (`Vec` of any slot type).
	Seq,
}

impl FieldKind {
	/// Human-readable kind name used in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			FieldKind::Str => "string",
			FieldKind::Int => "integer",
			FieldKind::Uint => "unsigned integer",
			FieldKind::Float => "float",
			FieldKind::Bool => "boolean",
			FieldKind::Record => "record",
			FieldKind::Seq => "sequence",
		}
	}
}

/// Metadata for one field of a record type.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
	/// Declared field name.
	pub name: &'static str,
	/// Optional serialization tag, possibly carrying `,`-separated modifiers.
	pub tag: Option<&'static str>,
	/// Declared value kind.
	pub kind: FieldKind,
}

impl FieldDescriptor {
	/// Source key this field reads from: the tag text before the first `,`
	/// when a non-empty tag is declared, otherwise the field name.
	pub fn source_key(&self) -> &'static str {
		let key = self.tag.and_then(|tag| tag.split(',').next()).unwrap_or("");
		if key.is_empty() { self.name } else { key }
	}
}

/// Mutable borrow of one field, dispatched by declared type.
pub enum FieldSlot<'a> {
	Str(&'a mut String),
	I8(&'a mut i8),
	I16(&'a mut i16),
	I32(&'a mut i32),
	I64(&'a mut i64),
	Isize(&'a mut isize),
	U8(&'a mut u8),
	U16(&'a mut u16),
	U32(&'a mut u32),
	U64(&'a mut u64),
	Usize(&'a mut usize),
	F32(&'a mut f32),
	F64(&'a mut f64),
	Bool(&'a mut bool),
	Record(&'a mut dyn Record),
	Seq(&'a mut dyn Sequence),
}

impl FieldSlot<'_> {
	/// Declared kind this slot dispatches to.
	pub fn kind(&self) -> FieldKind {
		match self {
			FieldSlot::Str(_) => FieldKind::Str,
			FieldSlot::I8(_) | FieldSlot::I16(_) | FieldSlot::I32(_) | FieldSlot::I64(_) | FieldSlot::Isize(_) => FieldKind::Int,
			FieldSlot::U8(_) | FieldSlot::U16(_) | FieldSlot::U32(_) | FieldSlot::U64(_) | FieldSlot::Usize(_) => FieldKind::Uint,
			FieldSlot::F32(_) | FieldSlot::F64(_) => FieldKind::Float,
			FieldSlot::Bool(_) => FieldKind::Bool,
			FieldSlot::Record(_) => FieldKind::Record,
			FieldSlot::Seq(_) => FieldKind::Seq,
		}
	}
}

/// A record type with a fixed, statically known field set.
///
/// Implemented by the [`record!`](crate::record) macro. The decoder walks
/// [`descriptors`](Record::descriptors) in declaration order and writes
/// through the slots handed out by [`field_slot`](Record::field_slot).
pub trait Record {
	/// Field descriptor table, in declaration order.
	fn descriptors(&self) -> &'static [FieldDescriptor];
	/// Mutable slot for the field with the given declared name.
	fn field_slot(&mut self, name: &'static str) -> Option<FieldSlot<'_>>;
	/// Restore every field to its zero value.
	fn reset(&mut self);
}

/// A type that can stand behind a [`FieldSlot`].
pub trait Slot {
	/// Declared kind recorded in descriptor tables.
	const KIND: FieldKind;
	/// Mutable slot over `self`.
	fn slot(&mut self) -> FieldSlot<'_>;
}

/// A resizable sequence whose elements expose slots.
pub trait Sequence {
	/// Clear the sequence and fill it with `len` zero-valued elements.
	fn reset_len(&mut self, len: usize);
	/// Mutable slot for the element at `index`, if in bounds.
	fn slot_at(&mut self, index: usize) -> Option<FieldSlot<'_>>;
}

macro_rules! scalar_slot {
	($($ty:ty => $variant:ident / $kind:ident;)*) => {$(
		impl Slot for $ty {
			const KIND: FieldKind = FieldKind::$kind;

			fn slot(&mut self) -> FieldSlot<'_> {
				FieldSlot::$variant(self)
			}
		}
	)*};
}

scalar_slot! {
	String => Str / Str;
	i8 => I8 / Int;
	i16 => I16 / Int;
	i32 => I32 / Int;
	i64 => I64 / Int;
	isize => Isize / Int;
	u8 => U8 / Uint;
	u16 => U16 / Uint;
	u32 => U32 / Uint;
	u64 => U64 / Uint;
	usize => Usize / Uint;
	f32 => F32 / Float;
	f64 => F64 / Float;
	bool => Bool / Bool;
}

impl<T: Slot + Default> Slot for Vec<T> {
	const KIND: FieldKind = FieldKind::Seq;

	fn slot(&mut self) -> FieldSlot<'_> {
		FieldSlot::Seq(self)
	}
}

impl<T: Slot + Default> Sequence for Vec<T> {
	fn reset_len(&mut self, len: usize) {
		self.clear();
		self.resize_with(len, T::default);
	}

	fn slot_at(&mut self, index: usize) -> Option<FieldSlot<'_>> {
		self.get_mut(index).map(Slot::slot)
	}
}
