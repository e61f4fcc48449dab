//! Library half of the `orchard` binary: argument parsing and the reference session.

pub mod args;
pub mod session;
