use std::collections::HashSet;
use uuid::Uuid;
use crate::api::models::CocktailDetail;

/// Per-session client state: the cached cocktail of the day and the ids rated so far.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: Uuid,
    pub cached_cocktail: Option<CocktailDetail>,
    pub rated_ids: HashSet<String>
}

impl SessionContext {
    pub fn new() -> Self {
        SessionContext {
            id: Uuid::new_v4(),
            cached_cocktail: None,
            rated_ids: HashSet::new()
        }
    }

    pub fn has_rated(&self, cocktail_id: &str) -> bool {
        self.rated_ids.contains(cocktail_id)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        SessionContext::new()
    }
}
