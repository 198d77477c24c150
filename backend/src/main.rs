use backend::config::ServerConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	let config = match ServerConfig::from_env() {
		Ok(config) => config,
		Err(err) => {
			tracing::error!("Couldn't read configuration: {err}");
			return Ok(())
		}
	};

	// The page still works without the bundle thanks to the <noscript> copy,
	// but it's almost certainly not what was meant.
	if !config.dist_dir.join("frontend.js").is_file() {
		tracing::warn!(
			"No frontend.js in {}; run wasm-bindgen --target web on the frontend binary first",
			config.dist_dir.display()
		);
	}

	let app = backend::router(&config)?;
	let listener = TcpListener::bind(config.addr).await?;

	tracing::info!("Serving {} on {}", config.site_url, config.addr);

	axum::serve(listener, app).await?;

	Ok(())
}
