mod resources_element;

pub use resources_element::*;
