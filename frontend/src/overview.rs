use shared_data::content::{Audience, SectionId};
use yew::prelude::*;
use crate::widgets::Section;

#[function_component(AudienceTabs)]
pub fn audience_tabs() -> Html {
	let selected = use_state_eq(Audience::default);

	let tabs = Audience::ALL.into_iter().map(|audience| {
		let selected_handle = selected.clone();
		let onclick = Callback::from(move |_| selected_handle.set(audience));
		let is_selected = *selected == audience;

		html! {
			<button
				role="tab"
				aria-selected={ is_selected.to_string() }
				class={ classes!(is_selected.then_some("selected")) }
				{ onclick }
			>
				{ audience.label() }
			</button>
		}
	}).collect::<Html>();

	let features = selected.features()
		.iter()
		.map(|feature| html! {
			<div class="feature">
				<span aria-hidden="true">{ feature.icon }</span>
				<div>
					<h4>{ feature.title }</h4>
					<p class="muted">{ feature.text }</p>
				</div>
			</div>
		})
		.collect::<Html>();

	html! {
		<Section id={ SectionId::Overview }>
			<div class="tab-list" role="tablist">{ tabs }</div>
			<div class="card grid-3" role="tabpanel">{ features }</div>
		</Section>
	}
}
