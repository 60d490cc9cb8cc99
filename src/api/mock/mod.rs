mod recipe_source;

pub use recipe_source::MockRecipeSource;
