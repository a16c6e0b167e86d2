//! Use cases

pub mod convert;
