//! Regular expression functions.
//!
//! Patterns use the host's default syntax and are compiled per
//! invocation; a pattern that fails to compile is a hard error.

use regex::Regex;

use crate::err::Error;
use crate::fnc::args::{self, as_double};
use crate::sql::{Reply, SqlValue};

fn compile(pattern: &SqlValue) -> Result<Regex, Error> {
	Ok(Regex::new(&pattern.as_text())?)
}

/// Unanchored pattern search; serves both `regexp_like` and
/// `regexp_contains`.
pub fn like(args: &[SqlValue]) -> Result<Reply, Error> {
	let [subject, pattern] = args::exact::<2>("regexp_like", args)?;
	let re = compile(pattern)?;
	Ok(Reply::Int(re.is_match(&subject.as_text()) as i32))
}

/// Byte offset of the first match, or -1.
pub fn position(args: &[SqlValue]) -> Result<Reply, Error> {
	let [subject, pattern] = args::exact::<2>("regexp_position", args)?;
	let re = compile(pattern)?;
	let position = match re.find(&subject.as_text()) {
		Some(found) => found.start() as i64,
		None => -1,
	};
	Ok(Reply::Int64(position))
}

/// Replace the first n non-overlapping matches: all of them when n is
/// absent or negative, none when n is zero. Zero matches return the
/// subject unchanged.
pub fn replace(args: &[SqlValue]) -> Result<Reply, Error> {
	let (subject, pattern, replacement, limit) = match args {
		[s, p, r] => (s, p, r, None),
		[s, p, r, n] => (s, p, r, Some(as_double(n)? as i64)),
		_ => {
			return Err(Error::InvalidArguments {
				name: String::from("regexp_replace"),
				message: String::from("Expected 3 or 4 arguments."),
			})
		}
	};
	let re = compile(pattern)?;
	let subject = subject.as_text();
	let replacement = replacement.as_text();
	let replaced = match limit {
		Some(0) => return Ok(Reply::Text(subject.into_owned())),
		Some(n) if n > 0 => re.replacen(&subject, n as usize, replacement.as_ref()),
		_ => re.replace_all(&subject, replacement.as_ref()),
	};
	Ok(Reply::Text(replaced.into_owned()))
}
