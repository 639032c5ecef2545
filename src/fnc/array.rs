//! Array aggregates over scalar and document-array arguments.
//!
//! Every aggregate folds its whole argument list through one of two
//! generic folds: a numeric fold feeding doubles and a value fold
//! feeding document members. Both stop early on the callback's demand.

use std::ops::ControlFlow;

use rmpv::ValueRef;

use crate::doc;
use crate::err::Error;
use crate::sql::{Reply, SqlValue};

/// Outcome of folding an argument list.
enum Fold {
	/// Every argument was consumed, or the callback stopped early.
	Complete,
	/// A non-foldable argument ended the fold with a fixed reply.
	Abort(Reply),
}

/// Feed every number across the arguments to `op`: numeric arguments
/// feed once, document arrays feed each member coerced to double. A
/// NULL argument aborts with missing; any other argument aborts with
/// null. A non-array document feeds nothing.
fn fold_numbers(
	args: &[SqlValue],
	mut op: impl FnMut(f64) -> ControlFlow<()>,
) -> Result<Fold, Error> {
	for arg in args {
		match arg {
			SqlValue::Integer(v) => {
				if op(*v as f64).is_break() {
					return Ok(Fold::Complete);
				}
			}
			SqlValue::Float(v) => {
				if op(*v).is_break() {
					return Ok(Fold::Complete);
				}
			}
			SqlValue::Blob(v) if v.is_empty() => return Ok(Fold::Abort(Reply::Null)),
			SqlValue::Blob(v) => {
				if let ValueRef::Array(items) = doc::decode_root(v)? {
					for item in &items {
						if op(doc::as_f64(item)).is_break() {
							return Ok(Fold::Complete);
						}
					}
				}
			}
			SqlValue::Null => return Ok(Fold::Abort(Reply::Missing)),
			SqlValue::Text(_) => return Ok(Fold::Abort(Reply::Null)),
		}
	}
	Ok(Fold::Complete)
}

/// Feed every member of the document arrays across the arguments to
/// `op`. Blob roots must be arrays; scalars and non-array documents
/// abort the fold with null, NULL arguments with missing.
fn fold_items(
	args: &[SqlValue],
	mut op: impl FnMut(&ValueRef<'_>) -> ControlFlow<()>,
) -> Result<Fold, Error> {
	for arg in args {
		match arg {
			SqlValue::Blob(v) if v.is_empty() => return Ok(Fold::Abort(Reply::Null)),
			SqlValue::Blob(v) => match doc::decode_root(v)? {
				ValueRef::Array(items) => {
					for item in &items {
						if op(item).is_break() {
							return Ok(Fold::Complete);
						}
					}
				}
				_ => return Ok(Fold::Abort(Reply::Null)),
			},
			SqlValue::Null => return Ok(Fold::Abort(Reply::Missing)),
			_ => return Ok(Fold::Abort(Reply::Null)),
		}
	}
	Ok(Fold::Complete)
}

/// Add up every number across the arguments; empty input sums to 0.
pub fn sum(args: &[SqlValue]) -> Result<Reply, Error> {
	let mut sum = 0.0;
	match fold_numbers(args, |num| {
		sum += num;
		ControlFlow::Continue(())
	})? {
		Fold::Abort(reply) => Ok(reply),
		Fold::Complete => Ok(Reply::Double(sum)),
	}
}

/// Mean of every number across the arguments; empty input averages to 0.
pub fn avg(args: &[SqlValue]) -> Result<Reply, Error> {
	let mut sum = 0.0;
	let mut count = 0u64;
	match fold_numbers(args, |num| {
		sum += num;
		count += 1;
		ControlFlow::Continue(())
	})? {
		Fold::Abort(reply) => Ok(reply),
		Fold::Complete if count == 0 => Ok(Reply::Double(0.0)),
		Fold::Complete => Ok(Reply::Double(sum / count as f64)),
	}
}

/// Count the members that are not null.
pub fn count(args: &[SqlValue]) -> Result<Reply, Error> {
	let mut count = 0i64;
	match fold_items(args, |item| {
		if !doc::is_null(item) {
			count += 1;
		}
		ControlFlow::Continue(())
	})? {
		Fold::Abort(reply) => Ok(reply),
		Fold::Complete => Ok(Reply::Int64(count)),
	}
}

/// Count every member.
pub fn length(args: &[SqlValue]) -> Result<Reply, Error> {
	let mut count = 0i64;
	match fold_items(args, |_| {
		count += 1;
		ControlFlow::Continue(())
	})? {
		Fold::Abort(reply) => Ok(reply),
		Fold::Complete => Ok(Reply::Int64(count)),
	}
}

/// True if any member's scalar form equals the second argument
/// bytewise. The comparand is drawn from the second argument, which
/// itself participates in (and, being a scalar, terminates) the fold;
/// that is part of this function's contract. Always returns 0 or 1.
pub fn contains(args: &[SqlValue]) -> Result<Reply, Error> {
	let Some(needle) = args.get(1) else {
		return Err(Error::InvalidArguments {
			name: String::from("array_contains"),
			message: String::from("Expected at least 2 arguments."),
		});
	};
	let needle = needle.as_bytes().into_owned();
	let mut found = false;
	fold_items(args, |item| {
		if doc::scalar_bytes(item).is_some_and(|form| form.as_ref() == needle.as_slice()) {
			found = true;
			ControlFlow::Break(())
		} else {
			ControlFlow::Continue(())
		}
	})?;
	Ok(Reply::Int(found as i32))
}

/// The first member that is not null; null if there is none.
pub fn ifnull(args: &[SqlValue]) -> Result<Reply, Error> {
	let mut found = None;
	fold_items(args, |item| {
		if doc::is_null(item) {
			ControlFlow::Continue(())
		} else {
			found = Some(doc::reply_from(item));
			ControlFlow::Break(())
		}
	})?;
	Ok(found.unwrap_or(Reply::Null))
}

/// Largest number across the arguments; null when there are none.
pub fn max(args: &[SqlValue]) -> Result<Reply, Error> {
	let mut best = f64::NEG_INFINITY;
	let mut nonempty = false;
	match fold_numbers(args, |num| {
		best = num.max(best);
		nonempty = true;
		ControlFlow::Continue(())
	})? {
		Fold::Abort(reply) => Ok(reply),
		Fold::Complete if nonempty => Ok(Reply::Double(best)),
		Fold::Complete => Ok(Reply::Null),
	}
}

/// Smallest number across the arguments; null when there are none.
pub fn min(args: &[SqlValue]) -> Result<Reply, Error> {
	let mut best = f64::INFINITY;
	let mut nonempty = false;
	match fold_numbers(args, |num| {
		best = num.min(best);
		nonempty = true;
		ControlFlow::Continue(())
	})? {
		Fold::Abort(reply) => Ok(reply),
		Fold::Complete if nonempty => Ok(Reply::Double(best)),
		Fold::Complete => Ok(Reply::Null),
	}
}

#[cfg(test)]
mod tests {
	use rmpv::Value as Mp;

	use super::*;

	fn doc(value: Mp) -> SqlValue {
		let mut buf = Vec::new();
		rmpv::encode::write_value(&mut buf, &value).unwrap();
		SqlValue::Blob(buf)
	}

	fn nums(values: &[f64]) -> SqlValue {
		doc(Mp::Array(values.iter().map(|v| (*v).into()).collect()))
	}

	#[test]
	fn sum_mixes_scalars_and_arrays() {
		let args = [nums(&[1.0, 2.0, 3.0]), SqlValue::Integer(4), nums(&[5.5])];
		assert_eq!(sum(&args).unwrap(), Reply::Double(15.5));
	}

	#[test]
	fn sum_is_distributive_over_argument_lists() {
		let a = nums(&[1.0, 2.0]);
		let b = nums(&[3.5, 4.5]);
		let both = sum(&[a.clone(), b.clone()]).unwrap();
		let Reply::Double(lhs) = sum(&[a]).unwrap() else {
			panic!("expected double");
		};
		let Reply::Double(rhs) = sum(&[b]).unwrap() else {
			panic!("expected double");
		};
		assert_eq!(both, Reply::Double(lhs + rhs));
	}

	#[test]
	fn empty_aggregates() {
		assert_eq!(sum(&[]).unwrap(), Reply::Double(0.0));
		assert_eq!(avg(&[]).unwrap(), Reply::Double(0.0));
		assert_eq!(count(&[]).unwrap(), Reply::Int64(0));
		assert_eq!(length(&[]).unwrap(), Reply::Int64(0));
		assert_eq!(max(&[]).unwrap(), Reply::Null);
		assert_eq!(min(&[]).unwrap(), Reply::Null);
	}

	#[test]
	fn null_argument_aborts_a_numeric_fold() {
		let args = [nums(&[1.0]), SqlValue::Null];
		assert_eq!(sum(&args).unwrap(), Reply::Missing);
		let args = [nums(&[1.0]), SqlValue::Text(String::from("x"))];
		assert_eq!(sum(&args).unwrap(), Reply::Null);
	}

	#[test]
	fn avg_divides_by_member_count() {
		let args = [nums(&[1.0, 2.0, 3.0]), SqlValue::Integer(6)];
		assert_eq!(avg(&args).unwrap(), Reply::Double(3.0));
	}

	#[test]
	fn count_skips_null_members() {
		let arg = doc(Mp::Array(vec![1.into(), Mp::Nil, "x".into()]));
		assert_eq!(count(&[arg.clone()]).unwrap(), Reply::Int64(2));
		assert_eq!(length(&[arg]).unwrap(), Reply::Int64(3));
	}

	#[test]
	fn contains_compares_scalar_forms() {
		let arg = doc(Mp::Array(vec!["a".into(), "b".into(), "c".into()]));
		let needle = SqlValue::Text(String::from("b"));
		assert_eq!(contains(&[arg.clone(), needle]).unwrap(), Reply::Int(1));
		let needle = SqlValue::Text(String::from("z"));
		assert_eq!(contains(&[arg, needle]).unwrap(), Reply::Int(0));
	}

	#[test]
	fn contains_matches_numbers_by_text_form() {
		let arg = doc(Mp::Array(vec![1.into(), 2.into()]));
		assert_eq!(contains(&[arg, SqlValue::Integer(2)]).unwrap(), Reply::Int(1));
	}

	#[test]
	fn ifnull_takes_the_first_non_null_member() {
		let arg = doc(Mp::Array(vec![Mp::Nil, Mp::Nil, 7.into()]));
		assert_eq!(ifnull(&[arg]).unwrap(), Reply::Int64(7));
		let arg = doc(Mp::Array(vec![Mp::Nil]));
		assert_eq!(ifnull(&[arg]).unwrap(), Reply::Null);
	}

	#[test]
	fn max_and_min_over_members() {
		let args = [nums(&[1.0, 9.0, -3.0])];
		assert_eq!(max(&args).unwrap(), Reply::Double(9.0));
		assert_eq!(min(&args).unwrap(), Reply::Double(-3.0));
	}

	#[test]
	fn undecodable_documents_are_hard_errors() {
		let args = [SqlValue::Blob(vec![0xc1])];
		assert!(matches!(sum(&args), Err(Error::InvalidDocument)));
		assert!(matches!(length(&args), Err(Error::InvalidDocument)));
	}
}
