mod aggregate_rating;
mod api_error;
mod cocktail_detail;
mod generic_error;
mod message;
mod mood_entry;
mod rating_submission;
mod top_rated;
pub mod resources_xml;

pub use aggregate_rating::*;
pub use api_error::*;
pub use cocktail_detail::*;
pub use generic_error::*;
pub use message::*;
pub use mood_entry::*;
pub use rating_submission::*;
pub use top_rated::*;
