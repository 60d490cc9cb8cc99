//! Terminal rendition of the cocktail-of-the-day page.
//!
//! Everything a browser session would keep in ambient storage lives in an
//! explicit [`SessionContext`] handed to each step.
mod args;
mod cocktail_api;
mod pipeline;
mod session_context;

pub use args::*;
pub use cocktail_api::*;
pub use pipeline::*;
pub use session_context::*;
