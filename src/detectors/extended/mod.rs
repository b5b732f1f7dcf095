//! Long-tail detectors
//!
//! These languages have no dedicated core detector. They are consulted only
//! after every core detector declined, so their exclusion rules can assume
//! the mainstream languages are already ruled out.

pub mod data;
pub mod functional;
pub mod infra;
pub mod markup;
pub mod scripting;
pub mod systems;
