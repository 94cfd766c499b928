//! A library which implements the sliding tile ("Fifteen") puzzle on boards of any size, along
//! with a constructive solver for it.

#![deny(missing_docs)]

pub mod error;
pub mod fifteen;
pub mod moves;
