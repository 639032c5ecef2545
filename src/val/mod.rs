//! The query language's value domain.
//!
//! Every host argument classifies into exactly one of eight kinds. The
//! classifier is total and is the sole source of truth for `type()`,
//! the `is*` predicates and the coercions.

use rmpv::ValueRef;

use crate::doc;
use crate::sql::SqlValue;

/// The eight kinds of the value domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
	Missing,
	Null,
	Boolean,
	Number,
	String,
	Binary,
	Array,
	Object,
}

impl Kind {
	/// The literal name exposed by `type()`.
	pub const fn as_str(self) -> &'static str {
		match self {
			Kind::Missing => "missing",
			Kind::Null => "null",
			Kind::Boolean => "boolean",
			Kind::Number => "number",
			Kind::String => "string",
			Kind::Binary => "binary",
			Kind::Array => "array",
			Kind::Object => "object",
		}
	}
}

/// One host argument classified into the value domain.
///
/// Document variants are views borrowing the argument's blob; they are
/// read-only and live for one function call.
#[derive(Debug)]
pub enum Value<'a> {
	Missing,
	Null,
	Bool(bool),
	Number(f64),
	Text(&'a str),
	Bytes(&'a [u8]),
	Array(Vec<ValueRef<'a>>),
	Object(Vec<(ValueRef<'a>, ValueRef<'a>)>),
}

impl<'a> Value<'a> {
	pub(crate) fn from_node(node: ValueRef<'a>) -> Value<'a> {
		match node {
			ValueRef::Nil => Value::Null,
			ValueRef::Boolean(v) => Value::Bool(v),
			ValueRef::Integer(v) => Value::Number(v.as_f64().unwrap_or(0.0)),
			ValueRef::F32(v) => Value::Number(f64::from(v)),
			ValueRef::F64(v) => Value::Number(v),
			// document strings are UTF-8 by contract; a broken one is
			// treated as undecodable
			ValueRef::String(v) => match v.into_str() {
				Some(s) => Value::Text(s),
				None => Value::Null,
			},
			ValueRef::Binary(v) => Value::Bytes(v),
			ValueRef::Array(v) => Value::Array(v),
			ValueRef::Map(v) => Value::Object(v),
			ValueRef::Ext(_, v) => Value::Bytes(v),
		}
	}

	pub fn kind(&self) -> Kind {
		match self {
			Value::Missing => Kind::Missing,
			Value::Null => Kind::Null,
			Value::Bool(_) => Kind::Boolean,
			Value::Number(_) => Kind::Number,
			Value::Text(_) => Kind::String,
			Value::Bytes(_) => Kind::Binary,
			Value::Array(_) => Kind::Array,
			Value::Object(_) => Kind::Object,
		}
	}
}

/// Classify a host argument.
///
/// Total: every argument maps to exactly one variant. Rules, in order:
/// host NULL is missing, numbers are numbers, text is a string, a
/// zero-byte blob is the query-language null, a blob that fails to
/// decode is also null, and any other blob takes its document root's
/// own tag.
pub fn classify(arg: &SqlValue) -> Value<'_> {
	match arg {
		SqlValue::Null => Value::Missing,
		SqlValue::Integer(v) => Value::Number(*v as f64),
		SqlValue::Float(v) => Value::Number(*v),
		SqlValue::Text(v) => Value::Text(v),
		SqlValue::Blob(v) if v.is_empty() => Value::Null,
		SqlValue::Blob(v) => match doc::decode_root(v) {
			Ok(root) => Value::from_node(root),
			Err(_) => Value::Null,
		},
	}
}

/// Shorthand for the derived tag of an argument.
pub fn kind_of(arg: &SqlValue) -> Kind {
	classify(arg).kind()
}
