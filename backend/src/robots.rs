use sitewriter::{ChangeFreq, UrlEntry};

#[must_use]
pub fn robots_txt(site_url: &str) -> String {
	format!("User-agent: *\nAllow: /\nSitemap: {site_url}sitemap.xml\n")
}

/// There's only the one page, so there's only the one entry. `None` if
/// `site_url` doesn't parse as a url.
#[must_use]
pub fn sitemap_xml(site_url: &str) -> Option<String> {
	let entry = UrlEntry {
		loc: site_url.parse().ok()?,
		lastmod: None,
		changefreq: Some(ChangeFreq::Monthly),
		priority: None
	};

	Some(sitewriter::generate_str(&[entry]))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn robots_points_at_the_sitemap() {
		let robots = robots_txt("https://aiep.example/");
		assert!(robots.starts_with("User-agent: *\n"));
		assert!(robots.contains("Sitemap: https://aiep.example/sitemap.xml"));
	}

	#[test]
	fn sitemap_lists_the_landing_page() {
		let xml = sitemap_xml("https://aiep.example/").unwrap();
		assert!(xml.contains("<loc>https://aiep.example/</loc>"));
	}

	#[test]
	fn garbage_site_url_has_no_sitemap() {
		assert!(sitemap_xml("not a url").is_none());
	}
}
