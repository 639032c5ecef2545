//! Byte-oriented string operations.
//!
//! Lengths and searches work on the raw byte form; case folds are
//! ASCII-only. No Unicode mapping is applied anywhere here.

use crate::err::Error;
use crate::fnc::args;
use crate::sql::{Reply, SqlValue};

/// Byte length of the argument's textual form.
pub fn length(args: &[SqlValue]) -> Result<Reply, Error> {
	let [arg] = args::exact::<1>("length", args)?;
	Ok(Reply::Int64(arg.byte_len() as i64))
}

pub fn lower(args: &[SqlValue]) -> Result<Reply, Error> {
	let [arg] = args::exact::<1>("lower", args)?;
	Ok(Reply::Text(arg.as_text().to_ascii_lowercase()))
}

pub fn upper(args: &[SqlValue]) -> Result<Reply, Error> {
	let [arg] = args::exact::<1>("upper", args)?;
	Ok(Reply::Text(arg.as_text().to_ascii_uppercase()))
}

/// Substring test over the raw bytes.
pub fn contains(args: &[SqlValue]) -> Result<Reply, Error> {
	let [haystack, needle] = args::exact::<2>("contains", args)?;
	let haystack = haystack.as_bytes();
	let needle = needle.as_bytes();
	let found = needle.is_empty()
		|| haystack.windows(needle.len()).any(|window| window == needle.as_ref());
	Ok(Reply::Int(found as i32))
}

pub fn ltrim(args: &[SqlValue]) -> Result<Reply, Error> {
	trimmed("ltrim", args, true, false)
}

pub fn rtrim(args: &[SqlValue]) -> Result<Reply, Error> {
	trimmed("rtrim", args, false, true)
}

pub fn trim(args: &[SqlValue]) -> Result<Reply, Error> {
	trimmed("trim", args, true, true)
}

/// Strip characters from the chosen ends. The optional second argument
/// gives the character set; the default set is ASCII whitespace.
fn trimmed(name: &str, args: &[SqlValue], start: bool, end: bool) -> Result<Reply, Error> {
	let (val, set) = match args {
		[v] => (v.as_text(), None),
		[v, s] => (v.as_text(), Some(s.as_text())),
		_ => {
			return Err(Error::InvalidArguments {
				name: name.to_owned(),
				message: String::from("Expected 1 or 2 arguments."),
			})
		}
	};
	let set = set.as_deref();
	let mut out: &str = &val;
	if start {
		out = out.trim_start_matches(|c| in_set(set, c));
	}
	if end {
		out = out.trim_end_matches(|c| in_set(set, c));
	}
	Ok(Reply::Text(out.to_owned()))
}

fn in_set(set: Option<&str>, c: char) -> bool {
	match set {
		Some(set) => set.contains(c),
		None => c.is_ascii_whitespace(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text(s: &str) -> SqlValue {
		SqlValue::Text(s.to_owned())
	}

	#[test]
	fn length_counts_bytes() {
		assert_eq!(length(&[text("hello")]).unwrap(), Reply::Int64(5));
		assert_eq!(length(&[SqlValue::Integer(123)]).unwrap(), Reply::Int64(3));
		assert_eq!(length(&[SqlValue::Blob(vec![0, 1, 2])]).unwrap(), Reply::Int64(3));
	}

	#[test]
	fn case_folds_are_ascii_only() {
		assert_eq!(lower(&[text("AbC")]).unwrap(), Reply::Text(String::from("abc")));
		assert_eq!(upper(&[text("AbC")]).unwrap(), Reply::Text(String::from("ABC")));
		// non-ASCII passes through untouched
		assert_eq!(lower(&[text("Äb")]).unwrap(), Reply::Text(String::from("Äb")));
	}

	#[test]
	fn contains_searches_substrings() {
		fn test(base: &str, sub: &str, expected: i32) {
			assert_eq!(contains(&[text(base), text(sub)]).unwrap(), Reply::Int(expected));
		}

		test("", "", 1);
		test("a", "", 1);
		test("", "a", 0);
		test("abcde", "bcd", 1);
		test("abcde", "cbcd", 0);
	}

	#[test]
	fn trims_default_to_whitespace() {
		assert_eq!(trim(&[text("  hi \t")]).unwrap(), Reply::Text(String::from("hi")));
		assert_eq!(ltrim(&[text("  hi ")]).unwrap(), Reply::Text(String::from("hi ")));
		assert_eq!(rtrim(&[text("  hi ")]).unwrap(), Reply::Text(String::from("  hi")));
	}

	#[test]
	fn trims_take_a_character_set() {
		let set = text("xy");
		assert_eq!(
			trim(&[text("xyhixy"), set.clone()]).unwrap(),
			Reply::Text(String::from("hi"))
		);
		assert_eq!(
			ltrim(&[text("xyhixy"), set.clone()]).unwrap(),
			Reply::Text(String::from("hixy"))
		);
		assert_eq!(rtrim(&[text("xyhixy"), set]).unwrap(), Reply::Text(String::from("xyhi")));
	}

	#[test]
	fn trim_round_trip() {
		// trim(ltrim(rtrim(s, c), c), c) == trim(s, c)
		for s in ["xxhello worldxx", "no-edges", "xxx", ""] {
			let set = text("x");
			let Reply::Text(r) = rtrim(&[text(s), set.clone()]).unwrap() else {
				panic!("expected text");
			};
			let Reply::Text(l) = ltrim(&[text(&r), set.clone()]).unwrap() else {
				panic!("expected text");
			};
			let via_edges = trim(&[text(&l), set.clone()]).unwrap();
			let direct = trim(&[text(s), set]).unwrap();
			assert_eq!(via_edges, direct);
		}
	}
}
