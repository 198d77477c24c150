use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf
};
use shared_data::{config::UnknownVariant, PageConfig, PageVariant};

pub struct ServerConfig {
	pub addr: SocketAddr,
	pub dist_dir: PathBuf,
	/// Always ends in a `/`.
	pub site_url: String,
	pub page: PageConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("LANDING_PORT must be a port number, got '{0}'")]
	Port(String),
	#[error("LANDING_BIND must be an IP address, got '{0}'")]
	Bind(String),
	#[error("PAGE_VARIANT: {0}")]
	Variant(#[from] UnknownVariant),
}

impl ServerConfig {
	/// Reads the environment, with `.env` filling in whatever isn't set.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		// empty values count as unset, same as leaving the line out of .env
		let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

		let port = match var("LANDING_PORT") {
			Some(p) => p.trim().parse::<u16>().map_err(|_| ConfigError::Port(p))?,
			None => 8080,
		};

		let ip = match var("LANDING_BIND") {
			Some(b) => b.trim().parse::<IpAddr>().map_err(|_| ConfigError::Bind(b))?,
			None => IpAddr::V4(Ipv4Addr::LOCALHOST),
		};

		let variant = match var("PAGE_VARIANT") {
			Some(v) => v.parse::<PageVariant>()?,
			None => PageVariant::default(),
		};

		let mut site_url = var("SITE_URL").unwrap_or_else(|| format!("http://localhost:{port}/"));
		if !site_url.ends_with('/') {
			site_url.push('/');
		}

		Ok(Self {
			addr: SocketAddr::new(ip, port),
			dist_dir: var("DIST_DIR").map_or_else(|| PathBuf::from("frontend/dist"), PathBuf::from),
			site_url,
			page: page_config(variant, &var),
		})
	}
}

fn page_config(variant: PageVariant, var: &impl Fn(&str) -> Option<String>) -> PageConfig {
	let mut page = variant.config();

	if let Some(email) = var("CONTACT_EMAIL") {
		page = page.with_contact_email(email.trim());
	}

	if let Some(src) = var("VIDEO_EMBED_URL") {
		page = page.with_video(src);
	}

	// The extra footer links are what set the showcase page apart; the
	// classic one only ever has the mailto.
	if variant == PageVariant::Showcase {
		for (key, label) in [("WHATSAPP_URL", "WhatsApp"), ("INSTAGRAM_URL", "Instagram")] {
			if let Some(href) = var(key) {
				page = page.with_contact_link(label, href);
			}
		}
	}

	page
}
