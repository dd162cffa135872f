//! Registry construction.
//!
//! Turns a configuration into the frozen CPU metadata and instruction table
//! a simulator or debugger decodes against.

pub mod registry;

pub use registry::Registry;
