//! Core types for Story Spark.

pub mod outcome;
pub mod story;

pub use outcome::*;
pub use story::*;
