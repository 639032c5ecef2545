//! Type tests and coercions over the value domain.

use crate::err::Error;
use crate::fnc::args;
use crate::sql::{Reply, SqlValue};
use crate::val;

/// The type name of the argument, one of the eight domain tags.
pub fn of(args: &[SqlValue]) -> Result<Reply, Error> {
	let [arg] = args::exact::<1>("type", args)?;
	Ok(Reply::Text(val::kind_of(arg).as_str().to_owned()))
}

pub mod is {
	use crate::err::Error;
	use crate::fnc::args;
	use crate::sql::{Reply, SqlValue};
	use crate::val::{kind_of, Kind};

	fn test(name: &str, args: &[SqlValue], pred: impl Fn(Kind) -> bool) -> Result<Reply, Error> {
		let [arg] = args::exact::<1>(name, args)?;
		Ok(Reply::Int(pred(kind_of(arg)) as i32))
	}

	pub fn array(args: &[SqlValue]) -> Result<Reply, Error> {
		test("isarray", args, |kind| kind == Kind::Array)
	}

	/// Booleans, numbers and strings are the atoms of the domain.
	pub fn atom(args: &[SqlValue]) -> Result<Reply, Error> {
		test("isatom", args, |kind| {
			matches!(kind, Kind::Boolean | Kind::Number | Kind::String)
		})
	}

	pub fn boolean(args: &[SqlValue]) -> Result<Reply, Error> {
		test("isboolean", args, |kind| kind == Kind::Boolean)
	}

	pub fn number(args: &[SqlValue]) -> Result<Reply, Error> {
		test("isnumber", args, |kind| kind == Kind::Number)
	}

	pub fn object(args: &[SqlValue]) -> Result<Reply, Error> {
		test("isobject", args, |kind| kind == Kind::Object)
	}

	pub fn string(args: &[SqlValue]) -> Result<Reply, Error> {
		test("isstring", args, |kind| kind == Kind::String)
	}
}

pub mod to {
	use rmpv::ValueRef;

	use crate::doc;
	use crate::err::Error;
	use crate::fnc::args;
	use crate::sql::{Reply, SqlValue};
	use crate::val::{self, Value};

	/// Unwrap a single-element array or single-entry object one level;
	/// atoms echo, everything else is null.
	pub fn atom(args: &[SqlValue]) -> Result<Reply, Error> {
		let [arg] = args::exact::<1>("toatom", args)?;
		Ok(match arg {
			SqlValue::Null => Reply::Missing,
			SqlValue::Integer(_) | SqlValue::Float(_) | SqlValue::Text(_) => {
				Reply::Value(arg.clone())
			}
			SqlValue::Blob(blob) if blob.is_empty() => Reply::Null,
			SqlValue::Blob(blob) => match doc::decode_root(blob) {
				Ok(ValueRef::Array(items)) => match &items[..] {
					[only] => doc::reply_from(only),
					_ => Reply::Null,
				},
				Ok(ValueRef::Map(entries)) => match &entries[..] {
					[(_, only)] => doc::reply_from(only),
					_ => Reply::Null,
				},
				// binary data is not an atom
				Ok(ValueRef::Binary(_)) | Ok(ValueRef::Ext(..)) | Err(_) => Reply::Null,
				Ok(node) => doc::reply_from(&node),
			},
		})
	}

	/// Truthiness of the classified argument: zero and NaN numbers,
	/// empty strings and empty collections are false; binary data is
	/// true.
	pub fn boolean(args: &[SqlValue]) -> Result<Reply, Error> {
		let [arg] = args::exact::<1>("toboolean", args)?;
		Ok(match val::classify(arg) {
			Value::Missing => Reply::Missing,
			Value::Null => Reply::Int(0),
			Value::Bool(v) => Reply::Int(v as i32),
			Value::Number(v) => Reply::Int((v != 0.0 && !v.is_nan()) as i32),
			Value::Text(v) => Reply::Int(!v.is_empty() as i32),
			Value::Bytes(_) => Reply::Int(1),
			Value::Array(v) => Reply::Int(!v.is_empty() as i32),
			Value::Object(v) => Reply::Int(!v.is_empty() as i32),
		})
	}

	/// Numbers echo, strings parse, everything document-shaped is null.
	pub fn number(args: &[SqlValue]) -> Result<Reply, Error> {
		let [arg] = args::exact::<1>("tonumber", args)?;
		Ok(match arg {
			SqlValue::Null => Reply::Missing,
			SqlValue::Integer(_) | SqlValue::Float(_) => Reply::Value(arg.clone()),
			SqlValue::Text(text) => match parse_double(text) {
				// NaN and overflow are rejected with the IEEE predicate
				Some(num) if num.is_finite() => Reply::Double(num),
				_ => Reply::Null,
			},
			SqlValue::Blob(_) => Reply::Null,
		})
	}

	/// Numbers format, strings echo, everything document-shaped is null.
	pub fn string(args: &[SqlValue]) -> Result<Reply, Error> {
		let [arg] = args::exact::<1>("tostring", args)?;
		Ok(match arg {
			SqlValue::Null => Reply::Missing,
			SqlValue::Integer(v) => Reply::Text(v.to_string()),
			SqlValue::Float(v) => Reply::Text(v.to_string()),
			SqlValue::Text(_) => Reply::Value(arg.clone()),
			SqlValue::Blob(_) => Reply::Null,
		})
	}

	/// Parse the longest leading numeric prefix, the way the host's
	/// standard string-to-double conversion does. Hex, infinity and nan
	/// spellings are not recognised.
	fn parse_double(text: &str) -> Option<f64> {
		let s = text.trim_start();
		let bytes = s.as_bytes();
		let mut end = 0;
		if matches!(bytes.first(), Some(b'+' | b'-')) {
			end += 1;
		}
		let int_digits = digits_from(bytes, end);
		end += int_digits;
		let mut frac_digits = 0;
		if bytes.get(end) == Some(&b'.') {
			frac_digits = digits_from(bytes, end + 1);
			end += 1 + frac_digits;
		}
		if int_digits == 0 && frac_digits == 0 {
			return None;
		}
		if matches!(bytes.get(end), Some(b'e' | b'E')) {
			let mut exp_end = end + 1;
			if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
				exp_end += 1;
			}
			let exp_digits = digits_from(bytes, exp_end);
			if exp_digits > 0 {
				end = exp_end + exp_digits;
			}
		}
		s[..end].parse().ok()
	}

	fn digits_from(bytes: &[u8], start: usize) -> usize {
		let mut i = start;
		while matches!(bytes.get(i), Some(b'0'..=b'9')) {
			i += 1;
		}
		i - start
	}
}
