use shared_data::content::{Card, SectionId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
	pub id: SectionId,
	#[prop_or_default]
	pub class: Classes,
	#[prop_or_default]
	pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
	html! {
		<section id={ props.id.as_str() } class={ props.class.clone() }>
			{ for props.children.iter() }
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct HeadingProps {
	pub icon: &'static str,
	pub title: &'static str,
}

/// Icon + `<h2>` at the top of every content section.
#[function_component(SectionHeading)]
pub fn section_heading(props: &HeadingProps) -> Html {
	html! {
		<div class="section-heading">
			<span aria-hidden="true">{ props.icon }</span>
			<h2>{ props.title }</h2>
		</div>
	}
}

pub fn pill(text: &'static str) -> Html {
	html! { <span class="pill">{ text }</span> }
}

pub fn card(card: &Card) -> Html {
	html! {
		<div class="card">
			<h4>{ card.title }</h4>
			<p class="muted">{ card.description }</p>
		</div>
	}
}
