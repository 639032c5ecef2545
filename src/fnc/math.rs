//! Scalar math over doubles.
//!
//! Every argument must already be numeric; there is no text coercion.
//! A non-numeric argument is the hard mismatch error and the statement
//! aborts.

use std::f64::consts;

use crate::err::Error;
use crate::fnc::args::{self, as_double};
use crate::sql::{Reply, SqlValue};

fn unary(name: &str, args: &[SqlValue], f: impl Fn(f64) -> f64) -> Result<Reply, Error> {
	let [arg] = args::exact::<1>(name, args)?;
	Ok(Reply::Double(f(as_double(arg)?)))
}

pub fn abs(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("abs", args, f64::abs)
}

pub fn acos(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("acos", args, f64::acos)
}

pub fn asin(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("asin", args, f64::asin)
}

pub fn atan(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("atan", args, f64::atan)
}

pub fn atan2(args: &[SqlValue]) -> Result<Reply, Error> {
	let [y, x] = args::exact::<2>("atan2", args)?;
	Ok(Reply::Double(as_double(y)?.atan2(as_double(x)?)))
}

pub fn ceil(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("ceil", args, f64::ceil)
}

pub fn cos(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("cos", args, f64::cos)
}

pub fn degrees(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("degrees", args, f64::to_degrees)
}

pub fn e(args: &[SqlValue]) -> Result<Reply, Error> {
	args::exact::<0>("e", args)?;
	Ok(Reply::Double(consts::E))
}

pub fn exp(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("exp", args, f64::exp)
}

pub fn floor(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("floor", args, f64::floor)
}

/// Natural logarithm.
pub fn ln(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("ln", args, f64::ln)
}

/// Base-10 logarithm.
pub fn log(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("log", args, f64::log10)
}

pub fn pi(args: &[SqlValue]) -> Result<Reply, Error> {
	args::exact::<0>("pi", args)?;
	Ok(Reply::Double(consts::PI))
}

pub fn power(args: &[SqlValue]) -> Result<Reply, Error> {
	let [x, y] = args::exact::<2>("power", args)?;
	Ok(Reply::Double(as_double(x)?.powf(as_double(y)?)))
}

pub fn radians(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("radians", args, f64::to_radians)
}

/// Round half away from zero, optionally at a decimal place.
pub fn round(args: &[SqlValue]) -> Result<Reply, Error> {
	round_to("round", args, f64::round)
}

pub fn sign(args: &[SqlValue]) -> Result<Reply, Error> {
	let [arg] = args::exact::<1>("sign", args)?;
	let num = as_double(arg)?;
	Ok(Reply::Int(if num > 0.0 {
		1
	} else if num < 0.0 {
		-1
	} else {
		0
	}))
}

pub fn sin(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("sin", args, f64::sin)
}

pub fn sqrt(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("sqrt", args, f64::sqrt)
}

pub fn tan(args: &[SqlValue]) -> Result<Reply, Error> {
	unary("tan", args, f64::tan)
}

/// Truncate towards zero, optionally at a decimal place.
pub fn trunc(args: &[SqlValue]) -> Result<Reply, Error> {
	round_to("trunc", args, f64::trunc)
}

// The optional second argument gives the number of decimal places:
// f(x * 10^p) / 10^p.
fn round_to(name: &str, args: &[SqlValue], f: impl Fn(f64) -> f64) -> Result<Reply, Error> {
	match args {
		[v] => Ok(Reply::Double(f(as_double(v)?))),
		[v, places] => {
			let value = as_double(v)?;
			let scale = 10f64.powf(as_double(places)?);
			Ok(Reply::Double(f(value * scale) / scale))
		}
		_ => Err(Error::InvalidArguments {
			name: name.to_owned(),
			message: String::from("Expected 1 or 2 arguments."),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rounding_ties_away_from_zero() {
		let round1 = |v: f64, p: i64| {
			round(&[SqlValue::Float(v), SqlValue::Integer(p)]).unwrap()
		};
		assert_eq!(round1(2.5, 0), Reply::Double(3.0));
		assert_eq!(round1(-2.5, 0), Reply::Double(-3.0));
		assert_eq!(round(&[SqlValue::Float(2.4)]).unwrap(), Reply::Double(2.0));
	}

	#[test]
	fn rounding_scales_by_decimal_places() {
		for p in 0..=6i64 {
			let scale = 10f64.powi(p as i32);
			for v in [0.0, 1.23456789, -987.654321, 41999.9921] {
				let got = round(&[SqlValue::Float(v), SqlValue::Integer(p)]).unwrap();
				assert_eq!(got, Reply::Double((v * scale).round() / scale));
			}
		}
	}

	#[test]
	fn trunc_drops_the_fraction() {
		assert_eq!(trunc(&[SqlValue::Float(2.9)]).unwrap(), Reply::Double(2.0));
		assert_eq!(trunc(&[SqlValue::Float(-2.9)]).unwrap(), Reply::Double(-2.0));
		let args = [SqlValue::Float(2.987), SqlValue::Integer(2)];
		assert_eq!(trunc(&args).unwrap(), Reply::Double(2.98));
	}

	#[test]
	fn sign_is_a_three_way_int() {
		assert_eq!(sign(&[SqlValue::Float(7.5)]).unwrap(), Reply::Int(1));
		assert_eq!(sign(&[SqlValue::Integer(-3)]).unwrap(), Reply::Int(-1));
		assert_eq!(sign(&[SqlValue::Integer(0)]).unwrap(), Reply::Int(0));
	}

	#[test]
	fn constants_take_no_arguments() {
		assert_eq!(e(&[]).unwrap(), Reply::Double(consts::E));
		assert_eq!(pi(&[]).unwrap(), Reply::Double(consts::PI));
		assert!(pi(&[SqlValue::Integer(1)]).is_err());
	}

	#[test]
	fn unit_conversions() {
		assert_eq!(degrees(&[SqlValue::Float(consts::PI)]).unwrap(), Reply::Double(180.0));
		assert_eq!(radians(&[SqlValue::Float(180.0)]).unwrap(), Reply::Double(consts::PI));
	}

	#[test]
	fn non_numeric_arguments_are_mismatch_errors() {
		let bad = [SqlValue::Text(String::from("2"))];
		for f in [abs, acos, ceil, exp, floor, ln, log, round, sign, sqrt, trunc] {
			assert!(matches!(f(&bad), Err(Error::InvalidNumeric)));
		}
		let args = [SqlValue::Float(1.0), SqlValue::Text(String::from("2"))];
		assert!(matches!(round(&args), Err(Error::InvalidNumeric)));
		assert!(matches!(atan2(&args), Err(Error::InvalidNumeric)));
		assert!(matches!(power(&args), Err(Error::InvalidNumeric)));
	}
}
