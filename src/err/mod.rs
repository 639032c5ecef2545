use thiserror::Error;

/// An error raised while resolving or evaluating a query function.
///
/// Every variant is a hard error: it escapes to the host engine and
/// aborts the calling statement. The soft null / missing outcomes never
/// travel through here; they are ordinary [`Reply`](crate::sql::Reply)
/// values.
#[derive(Error, Debug)]
pub enum Error {
	/// The function does not exist at the requested arity
	#[error("There was a problem running the {name}() function. {message}")]
	InvalidFunction {
		name: String,
		message: String,
	},

	/// The wrong quantity of arguments was given
	#[error("Incorrect arguments for function {name}(). {message}")]
	InvalidArguments {
		name: String,
		message: String,
	},

	/// A math function received a non-numeric argument
	#[error("Invalid numeric value")]
	InvalidNumeric,

	/// A non-empty blob argument failed to decode as a document
	#[error("Invalid document data")]
	InvalidDocument,

	/// The catalogue entry exists for name resolution only
	#[error("unimplemented N1QL function")]
	Unimplemented,

	/// A regular expression pattern failed to compile
	#[error("Invalid regular expression: {0}")]
	Regex(#[from] regex::Error),
}

impl Error {
	/// The host result code this error is reported with.
	pub fn code(&self) -> i32 {
		match self {
			Error::InvalidNumeric => crate::sql::code::MISMATCH,
			_ => crate::sql::code::ERROR,
		}
	}
}
