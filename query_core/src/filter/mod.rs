//! Filter composition
//!
//! This module provides the predicate tree and the sparse filter builder
//! that composes it.

pub mod predicate;
pub mod spec;

#[cfg(test)]
mod tests;

pub use predicate::Predicate;
pub use spec::FilterSpec;
