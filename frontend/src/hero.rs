use shared_data::content::{
	SectionId,
	ENROLL_SECTION,
	HERO_BADGES,
	HERO_BLURB,
	HERO_FOOTNOTE,
	HERO_PILL,
	HERO_TITLE,
	STUDENT_BUILDS
};
use yew::prelude::*;
use crate::{
	scroll::scroll_callback,
	widgets::{card, pill, Section}
};

#[function_component(Hero)]
pub fn hero() -> Html {
	// first badge gets the accent colour, the rest stay plain
	let badges = HERO_BADGES.iter()
		.enumerate()
		.map(|(idx, text)| html! {
			<span class={ classes!("badge", (idx == 0).then_some("accent")) }>{ *text }</span>
		})
		.collect::<Html>();

	html! {
		<Section id={ SectionId::Hero } class="grid-2">
			<div>
				{ pill(HERO_PILL) }
				<h1>{ HERO_TITLE }</h1>
				<p class="muted">{ HERO_BLURB }</p>
				<div class="badge-row">{ badges }</div>
				<div class="button-row">
					<button onclick={ scroll_callback(ENROLL_SECTION) }>{ "Apply Now →" }</button>
				</div>
				<p class="muted">{ HERO_FOOTNOTE }</p>
			</div>
			<div class="card">
				<h3>{ "</> What students build" }</h3>
				<div class="grid-2">
					{ STUDENT_BUILDS.iter().map(card).collect::<Html>() }
				</div>
			</div>
		</Section>
	}
}
