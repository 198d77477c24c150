use shared_data::{
	config::ContactLink,
	content::{copyright_line, SectionId, CTA_BLURB, CTA_TITLE, ENROLL_SECTION}
};
use yew::prelude::*;
use crate::{scroll::scroll_callback, widgets::Section};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
	pub contact_links: Vec<ContactLink>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
	let year = js_sys::Date::new_0().get_full_year();

	html! {
		<footer>
			<Section id={ SectionId::Cta } class="grid-2">
				<div>
					<h3>{ CTA_TITLE }</h3>
					<p class="muted">{ CTA_BLURB }</p>
				</div>
				<div class="button-row">
					<button onclick={ scroll_callback(ENROLL_SECTION) }>{ "Apply Now" }</button>
					{
						props.contact_links.iter().map(|link| html! {
							<a class="button outline" href={ link.href.clone() }>{ &link.label }</a>
						}).collect::<Html>()
					}
				</div>
				<div id="copyright" class="muted">{ copyright_line(year) }</div>
			</Section>
		</footer>
	}
}
