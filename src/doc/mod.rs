//! Read-only views into binary-encoded documents.
//!
//! Documents are stored as compact MessagePack trees. Arguments decode
//! on demand into [`rmpv::ValueRef`] views that borrow the argument
//! buffer and stay valid for the duration of one function call; nothing
//! here copies document structure or outlives the invocation.

use std::borrow::Cow;

use rmpv::ValueRef;

use crate::err::Error;
use crate::sql::Reply;

/// Decode the root of a non-empty document blob.
///
/// Zero-length blobs are the query-language null and must be handled
/// before calling this; a blob that fails to decode is a hard error.
pub fn decode_root(blob: &[u8]) -> Result<ValueRef<'_>, Error> {
	rmpv::decode::read_value_ref(&mut &blob[..]).map_err(|_| Error::InvalidDocument)
}

/// True for an explicit document null member.
pub fn is_null(node: &ValueRef) -> bool {
	matches!(node, ValueRef::Nil)
}

/// Numeric coercion for fold members: numbers are themselves, booleans
/// count as 0 or 1, anything else contributes 0.0.
pub fn as_f64(node: &ValueRef) -> f64 {
	match node {
		ValueRef::Integer(v) => v.as_f64().unwrap_or(0.0),
		ValueRef::F32(v) => f64::from(*v),
		ValueRef::F64(v) => *v,
		ValueRef::Boolean(true) => 1.0,
		_ => 0.0,
	}
}

/// The byte form a scalar member compares as. Collections have no
/// scalar form and never compare equal.
pub fn scalar_bytes<'a>(node: &'a ValueRef<'a>) -> Option<Cow<'a, [u8]>> {
	match node {
		ValueRef::Boolean(true) => Some(Cow::Borrowed(b"true")),
		ValueRef::Boolean(false) => Some(Cow::Borrowed(b"false")),
		ValueRef::Integer(v) => Some(Cow::Owned(v.to_string().into_bytes())),
		ValueRef::F32(v) => Some(Cow::Owned(v.to_string().into_bytes())),
		ValueRef::F64(v) => Some(Cow::Owned(v.to_string().into_bytes())),
		ValueRef::String(v) => v.into_str().map(|s| Cow::Borrowed(s.as_bytes())),
		ValueRef::Binary(v) => Some(Cow::Borrowed(v)),
		_ => None,
	}
}

/// Write a document member back as a host-facing reply. Nested
/// containers re-serialise into a fresh document blob.
pub fn reply_from(node: &ValueRef) -> Reply {
	match node {
		ValueRef::Nil => Reply::Null,
		ValueRef::Boolean(v) => Reply::Int(*v as i32),
		ValueRef::Integer(v) => match v.as_i64() {
			Some(v) => Reply::Int64(v),
			None => Reply::Double(v.as_f64().unwrap_or(0.0)),
		},
		ValueRef::F32(v) => Reply::Double(f64::from(*v)),
		ValueRef::F64(v) => Reply::Double(*v),
		// document strings are UTF-8 by contract; a broken one is
		// treated as undecodable
		ValueRef::String(v) => match v.into_str() {
			Some(s) => Reply::Text(s.to_owned()),
			None => Reply::Null,
		},
		ValueRef::Binary(v) => Reply::Blob(v.to_vec()),
		ValueRef::Ext(_, v) => Reply::Blob(v.to_vec()),
		node => {
			// serialising an in-memory view into a Vec cannot fail
			let mut buf = Vec::new();
			rmpv::encode::write_value_ref(&mut buf, node).expect("encode document view");
			Reply::Blob(buf)
		}
	}
}
