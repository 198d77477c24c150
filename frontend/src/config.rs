use gloo_console::log;
use shared_data::{config::CONFIG_ELEMENT_ID, PageConfig};

/// Reads the config the server embedded in the page. Served as plain static
/// files there won't be one, which just means the classic page.
pub fn load_page_config() -> PageConfig {
	let Some(json) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
		.and_then(|el| el.text_content())
	else {
		return PageConfig::default();
	};

	PageConfig::from_json(&json).unwrap_or_else(|e| {
		log!(format!("Couldn't parse #{CONFIG_ELEMENT_ID}, using the default page: {e}"));
		PageConfig::default()
	})
}
