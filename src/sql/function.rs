use std::collections::HashMap;

use crate::err::Error;

use super::value::{Reply, SqlValue};

/// The implementation of one scalar query function.
///
/// Functions are pure with respect to their arguments and hold no
/// state, so they may be shared freely across host threads.
pub type ScalarFn = fn(&[SqlValue]) -> Result<Reply, Error>;

/// One registration table entry.
///
/// Arity -1 means variadic. The same name may appear once per distinct
/// arity; the host binds each entry separately.
#[derive(Clone, Copy)]
pub struct FunctionSpec {
	pub name: &'static str,
	pub arity: i32,
	pub func: ScalarFn,
}

/// The set of query functions bound to one host database.
///
/// Names resolve case-insensitively, the way the host engine resolves
/// function names. Registration is idempotent: re-registering an entry
/// replaces it.
#[derive(Default)]
pub struct FunctionRegistry {
	map: HashMap<(String, i32), ScalarFn>,
}

impl FunctionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, spec: &FunctionSpec) {
		self.map.insert((spec.name.to_ascii_lowercase(), spec.arity), spec.func);
	}

	/// Resolve a call site. An exact arity match wins over a variadic
	/// entry of the same name.
	pub fn lookup(&self, name: &str, argc: usize) -> Option<ScalarFn> {
		let name = name.to_ascii_lowercase();
		self.map
			.get(&(name.clone(), argc as i32))
			.or_else(|| self.map.get(&(name, -1)))
			.copied()
	}

	/// Resolve and invoke, translating the reply onto the host storage
	/// classes. A missing result surfaces as host NULL.
	pub fn call(&self, name: &str, args: &[SqlValue]) -> Result<SqlValue, Error> {
		match self.lookup(name, args.len()) {
			Some(func) => Ok(func(args)?.into_host()),
			None => Err(Error::InvalidFunction {
				name: name.to_owned(),
				message: String::from("no such query function found"),
			}),
		}
	}
}
