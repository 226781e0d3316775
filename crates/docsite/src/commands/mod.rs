//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod dump;

pub(crate) use check::CheckArgs;
pub(crate) use dump::DumpArgs;
