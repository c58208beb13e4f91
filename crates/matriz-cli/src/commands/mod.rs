//! Command implementations

pub(crate) mod ops;
pub(crate) mod show;
