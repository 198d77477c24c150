use std::str::FromStr;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTACT_EMAIL: &str = "hello@yourdomain.com";

/// The id of the `<script type="application/json">` element the server drops the config into.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Indigo,
	Sunset,
}

impl Theme {
	/// Custom properties every other stylesheet reads from.
	#[must_use]
	pub const fn css_vars(self) -> &'static str {
		match self {
			Self::Indigo => r"
* {
	--accent: #4f46e5;
	--accent-soft: #eef2ff;
	--accent-text: #ffffff;
	--page-top: #eef2ff;
	--page-bottom: #ffffff;
	--main-text: #111827;
	--muted-text: #6b7280;
	--card-background: #ffffff;
	--border-color: #e5e7eb;
	--success-text: #047857;
	--success-background: #ecfdf5;
	--success-border: #a7f3d0;
}
",
			Self::Sunset => r"
* {
	--accent: #ea580c;
	--accent-soft: #fff7ed;
	--accent-text: #ffffff;
	--page-top: #fff7ed;
	--page-bottom: #fffbeb;
	--main-text: #1c1917;
	--muted-text: #78716c;
	--card-background: #ffffff;
	--border-color: #fed7aa;
	--success-text: #047857;
	--success-background: #ecfdf5;
	--success-border: #a7f3d0;
}
",
		}
	}
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct VideoEmbed {
	pub title: String,
	pub src: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ContactLink {
	pub label: String,
	pub href: String,
}

impl ContactLink {
	#[must_use]
	pub fn ask_a_question(email: &str) -> Self {
		Self { label: "Ask a Question".into(), href: format!("mailto:{email}") }
	}
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PageConfig {
	pub theme: Theme,
	#[serde(default)]
	pub video: Option<VideoEmbed>,
	#[serde(default)]
	pub contact_links: Vec<ContactLink>,
}

impl Default for PageConfig {
	fn default() -> Self {
		PageVariant::Classic.config()
	}
}

impl PageConfig {
	#[must_use]
	pub fn with_video(mut self, src: impl Into<String>) -> Self {
		self.video = Some(VideoEmbed {
			title: "Program overview video".into(),
			src: src.into(),
		});
		self
	}

	#[must_use]
	pub fn with_contact_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
		self.contact_links.push(ContactLink { label: label.into(), href: href.into() });
		self
	}

	/// Swaps the address the "Ask a Question" link mails to, keeping its position.
	#[must_use]
	pub fn with_contact_email(mut self, email: &str) -> Self {
		let ask = ContactLink::ask_a_question(email);
		match self.contact_links.iter_mut().find(|l| l.href.starts_with("mailto:")) {
			Some(link) => *link = ask,
			None => self.contact_links.insert(0, ask),
		}
		self
	}

	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// The two forks of the page. They differ only in palette and what the
/// video/footer slots get filled with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PageVariant {
	#[default]
	Classic,
	Showcase,
}

impl PageVariant {
	#[must_use]
	pub fn config(self) -> PageConfig {
		let theme = match self {
			Self::Classic => Theme::Indigo,
			Self::Showcase => Theme::Sunset,
		};

		PageConfig {
			theme,
			video: None,
			contact_links: vec![ContactLink::ask_a_question(DEFAULT_CONTACT_EMAIL)],
		}
	}
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown page variant '{0}' (expected 'classic' or 'showcase')")]
pub struct UnknownVariant(pub String);

impl FromStr for PageVariant {
	type Err = UnknownVariant;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"classic" => Ok(Self::Classic),
			"showcase" => Ok(Self::Showcase),
			_ => Err(UnknownVariant(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_the_classic_page() {
		let config = PageConfig::default();
		assert_eq!(config.theme, Theme::Indigo);
		assert!(config.video.is_none());
		assert_eq!(config.contact_links, vec![ContactLink {
			label: "Ask a Question".into(),
			href: "mailto:hello@yourdomain.com".into()
		}]);
	}

	#[test]
	fn variants_parse_case_insensitively() {
		assert_eq!("Showcase".parse::<PageVariant>(), Ok(PageVariant::Showcase));
		assert_eq!(" classic ".parse::<PageVariant>(), Ok(PageVariant::Classic));
		assert_eq!("fancy".parse::<PageVariant>(), Err(UnknownVariant("fancy".into())));
	}

	#[test]
	fn unknown_variant_names_the_choices() {
		let err = "fancy".parse::<PageVariant>().unwrap_err();
		assert_eq!(err.to_string(), "unknown page variant 'fancy' (expected 'classic' or 'showcase')");
	}

	#[test]
	fn showcase_uses_the_sunset_palette() {
		let config = PageVariant::Showcase.config();
		assert_eq!(config.theme, Theme::Sunset);
		assert!(config.theme.css_vars().contains("--accent: #ea580c"));
	}

	#[test]
	fn contact_email_replaces_the_mailto_link_in_place() {
		let config = PageVariant::Showcase.config()
			.with_contact_link("WhatsApp", "https://wa.me/351000000000")
			.with_contact_email("team@example.org");

		assert_eq!(config.contact_links[0].href, "mailto:team@example.org");
		assert_eq!(config.contact_links[1].label, "WhatsApp");
		assert_eq!(config.contact_links.len(), 2);
	}

	#[test]
	fn json_without_optional_fields_still_parses() {
		let config = PageConfig::from_json(r#"{"theme":"sunset"}"#).unwrap();
		assert_eq!(config.theme, Theme::Sunset);
		assert!(config.video.is_none());
		assert!(config.contact_links.is_empty());
	}

	#[test]
	fn json_survives_the_trip_through_the_shell() {
		let config = PageConfig::default().with_video("https://player.example/embed/1");
		let back = PageConfig::from_json(&config.to_json().unwrap()).unwrap();
		assert_eq!(back, config);
	}
}
