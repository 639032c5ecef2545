//! The query functions published to the host engine.
//!
//! One module per function group, and a single flat registration table
//! binding names and arities to implementations. The table is
//! compile-time constant; there is no runtime configuration.

use once_cell::sync::Lazy;

use crate::err::Error;
use crate::sql::{FunctionRegistry, FunctionSpec, Reply, SqlValue};

pub mod args;
pub mod array;
pub mod cond;
pub mod math;
pub mod regexp;
pub mod string;
pub mod r#type;

/// Every function in the catalogue. Arity -1 is variadic; a name may
/// appear once per distinct arity and the host binds each entry
/// separately.
pub const CATALOGUE: &[FunctionSpec] = &[
	FunctionSpec { name: "array_append", arity: -1, func: unimplemented },
	FunctionSpec { name: "array_avg", arity: -1, func: array::avg },
	FunctionSpec { name: "array_contains", arity: -1, func: array::contains },
	FunctionSpec { name: "array_count", arity: -1, func: array::count },
	FunctionSpec { name: "array_ifnull", arity: -1, func: array::ifnull },
	FunctionSpec { name: "array_length", arity: -1, func: array::length },
	FunctionSpec { name: "array_max", arity: -1, func: array::max },
	FunctionSpec { name: "array_min", arity: -1, func: array::min },
	FunctionSpec { name: "array_sum", arity: -1, func: array::sum },
	//
	FunctionSpec { name: "ifmissing", arity: -1, func: cond::ifmissing },
	FunctionSpec { name: "ifmissingornull", arity: -1, func: cond::ifmissingornull },
	FunctionSpec { name: "ifnull", arity: -1, func: cond::ifnull },
	FunctionSpec { name: "missingif", arity: 2, func: cond::missingif },
	FunctionSpec { name: "nullif", arity: 2, func: cond::nullif },
	//
	FunctionSpec { name: "contains", arity: 2, func: string::contains },
	FunctionSpec { name: "length", arity: 1, func: string::length },
	FunctionSpec { name: "lower", arity: 1, func: string::lower },
	FunctionSpec { name: "ltrim", arity: 1, func: string::ltrim },
	FunctionSpec { name: "ltrim", arity: 2, func: string::ltrim },
	FunctionSpec { name: "rtrim", arity: 1, func: string::rtrim },
	FunctionSpec { name: "rtrim", arity: 2, func: string::rtrim },
	FunctionSpec { name: "trim", arity: 1, func: string::trim },
	FunctionSpec { name: "trim", arity: 2, func: string::trim },
	FunctionSpec { name: "upper", arity: 1, func: string::upper },
	//
	FunctionSpec { name: "regexp_contains", arity: 2, func: regexp::like },
	FunctionSpec { name: "regexp_like", arity: 2, func: regexp::like },
	FunctionSpec { name: "regexp_position", arity: 2, func: regexp::position },
	FunctionSpec { name: "regexp_replace", arity: 3, func: regexp::replace },
	FunctionSpec { name: "regexp_replace", arity: 4, func: regexp::replace },
	//
	FunctionSpec { name: "isarray", arity: 1, func: r#type::is::array },
	FunctionSpec { name: "isatom", arity: 1, func: r#type::is::atom },
	FunctionSpec { name: "isboolean", arity: 1, func: r#type::is::boolean },
	FunctionSpec { name: "isnumber", arity: 1, func: r#type::is::number },
	FunctionSpec { name: "isobject", arity: 1, func: r#type::is::object },
	FunctionSpec { name: "isstring", arity: 1, func: r#type::is::string },
	FunctionSpec { name: "type", arity: 1, func: r#type::of },
	FunctionSpec { name: "toarray", arity: 1, func: unimplemented },
	FunctionSpec { name: "toatom", arity: 1, func: r#type::to::atom },
	FunctionSpec { name: "toboolean", arity: 1, func: r#type::to::boolean },
	FunctionSpec { name: "tonumber", arity: 1, func: r#type::to::number },
	FunctionSpec { name: "toobject", arity: 1, func: unimplemented },
	FunctionSpec { name: "tostring", arity: 1, func: r#type::to::string },
	//
	FunctionSpec { name: "abs", arity: 1, func: math::abs },
	FunctionSpec { name: "acos", arity: 1, func: math::acos },
	FunctionSpec { name: "asin", arity: 1, func: math::asin },
	FunctionSpec { name: "atan", arity: 1, func: math::atan },
	FunctionSpec { name: "atan2", arity: 2, func: math::atan2 },
	FunctionSpec { name: "ceil", arity: 1, func: math::ceil },
	FunctionSpec { name: "cos", arity: 1, func: math::cos },
	FunctionSpec { name: "degrees", arity: 1, func: math::degrees },
	FunctionSpec { name: "e", arity: 0, func: math::e },
	FunctionSpec { name: "exp", arity: 1, func: math::exp },
	FunctionSpec { name: "ln", arity: 1, func: math::ln },
	FunctionSpec { name: "log", arity: 1, func: math::log },
	FunctionSpec { name: "floor", arity: 1, func: math::floor },
	FunctionSpec { name: "pi", arity: 0, func: math::pi },
	FunctionSpec { name: "power", arity: 2, func: math::power },
	FunctionSpec { name: "radians", arity: 1, func: math::radians },
	FunctionSpec { name: "round", arity: 1, func: math::round },
	FunctionSpec { name: "round", arity: 2, func: math::round },
	FunctionSpec { name: "sign", arity: 1, func: math::sign },
	FunctionSpec { name: "sin", arity: 1, func: math::sin },
	FunctionSpec { name: "sqrt", arity: 1, func: math::sqrt },
	FunctionSpec { name: "tan", arity: 1, func: math::tan },
	FunctionSpec { name: "trunc", arity: 1, func: math::trunc },
	FunctionSpec { name: "trunc", arity: 2, func: math::trunc },
];

/// Publish the whole catalogue into a host registry. Idempotent per
/// registry.
pub fn register_all(registry: &mut FunctionRegistry) {
	for spec in CATALOGUE {
		registry.register(spec);
	}
	tracing::debug!(functions = CATALOGUE.len(), "registered query function catalogue");
}

static REGISTRY: Lazy<FunctionRegistry> = Lazy::new(|| {
	let mut registry = FunctionRegistry::new();
	register_all(&mut registry);
	registry
});

/// Resolve and run a catalogue function against the process-wide
/// registry.
pub fn run(name: &str, args: &[SqlValue]) -> Result<SqlValue, Error> {
	REGISTRY.call(name, args)
}

// Entries that exist so that name and arity resolution stays accurate,
// but have no implementation yet.
fn unimplemented(_: &[SqlValue]) -> Result<Reply, Error> {
	tracing::warn!("calling unimplemented N1QL function; query will fail");
	Err(Error::Unimplemented)
}
