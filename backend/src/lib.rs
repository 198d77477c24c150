use axum::{extract::State, response::Html, routing::get, Router};
use http::header;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use config::ServerConfig;

pub mod config;
pub mod robots;
pub mod shell;

// Nothing on the page changes after startup, so everything is rendered once.
struct Pages {
	shell: String,
	robots: String,
	sitemap: String,
}

/// Everything the landing page needs: the shell at `/`, the wasm bundle
/// under `/pkg`, and the two files crawlers ask for.
pub fn router(config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
	let sitemap = robots::sitemap_xml(&config.site_url)
		.ok_or_else(|| format!("SITE_URL '{}' is not a valid url", config.site_url))?;

	let pages = Arc::new(Pages {
		shell: shell::render_shell(&config.page, &config.site_url)?,
		robots: robots::robots_txt(&config.site_url),
		sitemap,
	});

	Ok(Router::new()
		.route("/", get(get_index))
		.route("/robots.txt", get(get_robots_txt))
		.route("/sitemap.xml", get(get_sitemap_xml))
		.nest_service("/pkg", ServeDir::new(&config.dist_dir))
		.layer(TraceLayer::new_for_http())
		.with_state(pages))
}

async fn get_index(State(pages): State<Arc<Pages>>) -> Html<String> {
	Html(pages.shell.clone())
}

async fn get_robots_txt(State(pages): State<Arc<Pages>>) -> String {
	pages.robots.clone()
}

async fn get_sitemap_xml(State(pages): State<Arc<Pages>>) -> ([(header::HeaderName, &'static str); 1], String) {
	([(header::CONTENT_TYPE, "application/xml")], pages.sitemap.clone())
}
