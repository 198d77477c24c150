use shared_data::content::{SectionId, FAQ};
use yew::prelude::*;
use crate::widgets::{Section, SectionHeading};

/// Single-open, collapsible: clicking the open entry closes it, clicking
/// another one moves the selection there.
#[must_use]
pub fn toggle_entry(open: Option<usize>, clicked: usize) -> Option<usize> {
	(open != Some(clicked)).then_some(clicked)
}

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
	let open = use_state_eq(|| None);

	let entries = FAQ.iter().enumerate().map(|(idx, entry)| {
		let is_open = *open == Some(idx);
		let onclick = {
			let open = open.clone();
			Callback::from(move |_| open.set(toggle_entry(*open, idx)))
		};

		html! {
			<div class="faq-item">
				<button aria-expanded={ is_open.to_string() } { onclick }>
					<span>{ entry.question }</span>
					<span aria-hidden="true">{ if is_open { "−" } else { "+" } }</span>
				</button>
				if is_open {
					<div class="faq-answer muted">{ entry.answer }</div>
				}
			</div>
		}
	}).collect::<Html>();

	html! {
		<Section id={ SectionId::Faq }>
			<SectionHeading icon="💬" title="FAQ" />
			{ entries }
		</Section>
	}
}

#[cfg(test)]
mod tests {
	use super::toggle_entry;

	#[test]
	fn opening_and_closing_the_same_entry() {
		let open = toggle_entry(None, 2);
		assert_eq!(open, Some(2));
		assert_eq!(toggle_entry(open, 2), None);
	}

	#[test]
	fn only_one_entry_is_ever_open() {
		assert_eq!(toggle_entry(Some(0), 3), Some(3));
	}
}
