//! Prompt construction, draft parsing, and generation flows.

pub mod convenience;
pub mod draft;
pub mod flows;
pub mod prompt;

pub use convenience::{generate, regenerate};
pub use draft::parse_draft;
pub use flows::{generate_user_story, regenerate_user_story};
