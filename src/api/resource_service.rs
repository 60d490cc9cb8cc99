use handlebars::Handlebars;
use hard_xml::XmlRead;
use serde::Serialize;
use crate::api::models::resources_xml::ResourcesElement;

const BUNDLED_STRINGS_XML: &str = include_str!("../../resources/strings.xml");

/// Named message strings, optionally handlebars templates, used for logs and responses.
#[derive(Clone)]
pub struct ResourceService {
    resource_element: ResourcesElement
}

impl ResourceService {
    pub fn new(resource_element: ResourcesElement) -> ResourceService {
        ResourceService {
            resource_element
        }
    }

    pub fn bundled() -> ResourceService {
        match ResourcesElement::from_str(BUNDLED_STRINGS_XML.trim()) {
            Ok(resource_element) => ResourceService::new(resource_element),
            Err(error) => panic!("Bundled strings.xml is malformed: {}", error)
        }
    }

    pub fn get_resource_string_by_name(&self, name: &str) -> Option<String> {
        self.resource_element.find(name).map(|resource_string| resource_string.text.clone())
    }

    pub fn render_resource_template_string_by_name<T: Serialize>(&self, name: &str, data: &T) -> Option<String> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        let template_string = self.get_resource_string_by_name(name)?;
        match handlebars.render_template(template_string.as_str(), data) {
            Ok(rendered) => Some(rendered),
            Err(_) => None
        }
    }

    /// Like `get_resource_string_by_name`, but a missing string yields its name.
    pub fn string(&self, name: &str) -> String {
        self.get_resource_string_by_name(name).unwrap_or_else(|| name.to_string())
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.render_resource_template_string_by_name(name, data).unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_templates_without_html_escaping() {
        let resource_service = ResourceService::bundled();
        let rendered = resource_service.render(
            "upstream_retry_warn_message_template",
            &json!({ "url": "https://example.test/lookup.php?i=11007", "attempt": 1, "error": "timed out", "delay_ms": 250 })
        );
        assert_eq!(rendered, "Recipe API request to https://example.test/lookup.php?i=11007 failed on attempt 1: timed out; retrying in 250ms");
    }

    #[test]
    fn missing_names_fall_back_to_the_name() {
        let resource_service = ResourceService::bundled();
        assert_eq!(resource_service.string("no_such_string"), "no_such_string");
        assert_eq!(resource_service.get_resource_string_by_name("no_such_string"), None);
        assert_eq!(resource_service.string("rating_saved_message"), "Rating submitted successfully");
    }
}
