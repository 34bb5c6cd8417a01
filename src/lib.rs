//! Story Spark — AI user-story generation core.
//!
//! Turns a feature title and description into a structured user story
//! (narrative, acceptance criteria, difficulty, priority, time estimate)
//! by calling an external text-generation backend. Model calls run
//! behind bounded retries with exponential backoff, and every flow
//! returns a [`types::StoryOutcome`] envelope instead of raising.
//!
//! # Quick Start
//!
//! ```no_run
//! use storyspark::types::StoryOutcome;
//!
//! # async fn example() {
//! let outcome = storyspark::generation::generate("Login", "Users need to log in").await;
//! match outcome {
//!     StoryOutcome::Success { data } => println!("{}", data.user_story),
//!     StoryOutcome::Failure { message, .. } => eprintln!("{message}"),
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod provider;
pub mod store;
pub mod types;
pub mod util;
