use hard_xml::{ XmlRead, XmlWrite };

/// `<resources><string name="...">text</string>...</resources>`
#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "resources")]
pub struct ResourcesElement {
    #[xml(child = "string")]
    pub strings: Vec<ResourceString>
}

#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "string")]
pub struct ResourceString {
    #[xml(attr = "name")]
    pub name: String,
    #[xml(text)]
    pub text: String
}

impl ResourcesElement {
    pub fn find(&self, name: &str) -> Option<&ResourceString> {
        self.strings.iter().find(|resource_string| resource_string.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_STRINGS: &str = r#"<resources><string name="no_top_rated_message">No top-rated cocktail this period</string><string name="rating_saved_message">Rating submitted successfully</string></resources>"#;

    #[test]
    fn reads_named_strings() {
        let resources = ResourcesElement::from_str(TWO_STRINGS).unwrap();
        assert_eq!(resources.strings.len(), 2);
        assert_eq!(resources.find("rating_saved_message").unwrap().text, "Rating submitted successfully");
        assert!(resources.find("missing").is_none());
    }

    #[test]
    fn writes_the_same_document_back() {
        let resources = ResourcesElement {
            strings: vec![
                ResourceString {
                    name: "no_top_rated_message".to_string(),
                    text: "No top-rated cocktail this period".to_string()
                },
                ResourceString {
                    name: "rating_saved_message".to_string(),
                    text: "Rating submitted successfully".to_string()
                }
            ]
        };
        assert_eq!(resources.to_string().unwrap(), TWO_STRINGS);
    }

    #[test]
    fn bundled_strings_parse() {
        let bundled = ResourcesElement::from_str(include_str!("../../../../resources/strings.xml").trim()).unwrap();
        assert!(bundled.find("no_mood_match_message").is_some());
    }
}
