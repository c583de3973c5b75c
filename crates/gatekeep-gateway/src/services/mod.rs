//! Built-in demo handlers.

pub mod demo;
