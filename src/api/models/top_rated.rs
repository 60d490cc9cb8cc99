use crate::api::models::AggregateRating;

/// Winner of a period's top-rated query.
#[derive(Debug, Clone, PartialEq)]
pub struct TopRated {
    pub cocktail_id: String,
    pub rating: AggregateRating
}
