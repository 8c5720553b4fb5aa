#![forbid(unsafe_code)]

pub mod content;
pub mod demo;
pub mod evaluator;
pub mod model;
pub mod query;
pub mod time;

pub use time::Clock;
