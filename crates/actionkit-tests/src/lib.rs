//! Integration test crate for ActionKit.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the actionkit crates to verify they work together.

#[cfg(test)]
mod channels;

#[cfg(test)]
mod markers;

#[cfg(test)]
mod range;
