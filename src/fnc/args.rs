use crate::err::Error;
use crate::sql::SqlValue;

/// Borrow the arguments as a fixed-size array, failing the way the host
/// reports a wrong argument count.
pub fn exact<'a, const N: usize>(
	name: &str,
	args: &'a [SqlValue],
) -> Result<&'a [SqlValue; N], Error> {
	args.try_into().map_err(|_| Error::InvalidArguments {
		name: name.to_owned(),
		// This match will be optimized away.
		message: match N {
			0 => String::from("Expected no arguments."),
			1 => String::from("Expected 1 argument."),
			n => format!("Expected {n} arguments."),
		},
	})
}

/// A numeric argument. There is no text coercion: anything other than a
/// number is the hard mismatch error.
pub fn as_double(arg: &SqlValue) -> Result<f64, Error> {
	match arg {
		SqlValue::Integer(v) => Ok(*v as f64),
		SqlValue::Float(v) => Ok(*v),
		_ => Err(Error::InvalidNumeric),
	}
}
