use std::fs;
use hard_xml::XmlRead;
use crate::api::models::resources_xml::ResourcesElement;
use crate::api::config::config_path;
use crate::api::ResourceService;

pub struct ResourceServiceFactory {}

impl ResourceServiceFactory {
    /// Strings come from `STRINGS_XML_FILE_PATH` when set, otherwise the bundled table.
    pub fn create_or_panic() -> ResourceService {
        let strings_xml_file_path = match dotenv::var("STRINGS_XML_FILE_PATH") {
            Ok(strings_xml_file_path) => strings_xml_file_path,
            Err(_) => return ResourceService::bundled()
        };
        let file_path = config_path(&strings_xml_file_path);
        let resource_xml_content = match fs::read_to_string(&file_path) {
            Ok(content) => content,
            Err(error) => panic!("Couldn't read strings file \"{}\": {}", file_path.display(), error)
        };
        match ResourcesElement::from_str(resource_xml_content.trim()) {
            Ok(resource_element) => ResourceService::new(resource_element),
            Err(error) => panic!("Couldn't parse strings file \"{}\": {}", file_path.display(), error)
        }
    }
}
