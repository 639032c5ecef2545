use std::borrow::Cow;

/// A value in one of the host engine's five storage classes.
///
/// The query language's eight-tag domain is folded onto these five:
/// missing travels as `Null`, and the query-language null, arrays,
/// objects and binary data all travel as blobs. A zero-length blob is
/// the canonical null.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
	Null,
	Integer(i64),
	Float(f64),
	Text(String),
	Blob(Vec<u8>),
}

impl SqlValue {
	/// Whether this is the host NULL, i.e. the argument is missing.
	pub fn is_null(&self) -> bool {
		matches!(self, SqlValue::Null)
	}

	/// The textual form of the value, as the host engine renders it.
	/// Numbers format to locale-independent decimal text.
	pub fn as_text(&self) -> Cow<'_, str> {
		match self {
			SqlValue::Null => Cow::Borrowed(""),
			SqlValue::Integer(v) => Cow::Owned(v.to_string()),
			SqlValue::Float(v) => Cow::Owned(v.to_string()),
			SqlValue::Text(v) => Cow::Borrowed(v),
			SqlValue::Blob(v) => String::from_utf8_lossy(v),
		}
	}

	/// The raw byte form: textual bytes for strings and numbers, the
	/// bytes themselves for blobs, empty for NULL.
	pub fn as_bytes(&self) -> Cow<'_, [u8]> {
		match self {
			SqlValue::Null => Cow::Borrowed(&[]),
			SqlValue::Integer(v) => Cow::Owned(v.to_string().into_bytes()),
			SqlValue::Float(v) => Cow::Owned(v.to_string().into_bytes()),
			SqlValue::Text(v) => Cow::Borrowed(v.as_bytes()),
			SqlValue::Blob(v) => Cow::Borrowed(v),
		}
	}

	/// Byte length under the host's conversion rules: 0 for NULL, the
	/// length of the text form for numbers.
	pub fn byte_len(&self) -> usize {
		self.as_bytes().len()
	}
}

/// The single result of one function invocation, before it is written
/// back to the host.
///
/// `Missing` sets no result at all, which the host reads as NULL;
/// `Null` is the query-language null, written as a zero-length blob.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
	Missing,
	Null,
	Int(i32),
	Int64(i64),
	Double(f64),
	Text(String),
	Blob(Vec<u8>),
	/// Echo a host value unchanged.
	Value(SqlValue),
}

impl Reply {
	/// Collapse onto the host storage classes. This is the only place
	/// the value domain crosses back over the host boundary.
	pub fn into_host(self) -> SqlValue {
		match self {
			Reply::Missing => SqlValue::Null,
			Reply::Null => SqlValue::Blob(Vec::new()),
			Reply::Int(v) => SqlValue::Integer(v as i64),
			Reply::Int64(v) => SqlValue::Integer(v),
			Reply::Double(v) => SqlValue::Float(v),
			Reply::Text(v) => SqlValue::Text(v),
			Reply::Blob(v) => SqlValue::Blob(v),
			Reply::Value(v) => v,
		}
	}
}
