use shared_data::content::{ENROLL_SECTION, NAV_LINKS, PROGRAM_NAME};
use yew::prelude::*;
use crate::scroll::scroll_callback;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
	html! {
		<header>
			<div id="nav-bar">
				<div id="brand">
					<div id="brand-mark" aria-hidden="true">{ "🚀" }</div>
					<span>{ PROGRAM_NAME }</span>
				</div>
				<nav id="nav-links">
				{
					NAV_LINKS.iter().map(|link| html! {
						<a href={ link.target.anchor() }>{ link.label }</a>
					}).collect::<Html>()
				}
				</nav>
				<button onclick={ scroll_callback(ENROLL_SECTION) }>{ "Apply Now" }</button>
			</div>
		</header>
	}
}
