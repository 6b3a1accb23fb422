//!
//! Module with all dtos that are passed between server and users
//!

pub mod input;
pub mod output;

pub(crate) mod datetime;
