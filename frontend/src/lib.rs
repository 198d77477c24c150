pub mod config;
pub mod enroll;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod info;
pub mod nav;
pub mod overview;
pub mod page;
pub mod schedule;
pub mod scroll;
pub mod style;
pub mod widgets;

pub use page::{LandingPage, LandingProps};

pub fn render() {
	let config = config::load_page_config();
	yew::Renderer::<LandingPage>::with_props(LandingProps { config }).render();
}
