use shared_data::content::SectionId;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Something that can find a page section by id and bring it into view.
pub trait SectionScroller {
	type Section;

	fn find_section(&self, id: &str) -> Option<Self::Section>;
	fn scroll_into_view(&self, section: &Self::Section);
}

impl SectionScroller for Document {
	type Section = Element;

	fn find_section(&self, id: &str) -> Option<Element> {
		self.get_element_by_id(id)
	}

	fn scroll_into_view(&self, section: &Element) {
		let options = ScrollIntoViewOptions::new();
		options.set_behavior(ScrollBehavior::Smooth);
		section.scroll_into_view_with_scroll_into_view_options(&options);
	}
}

/// Smooth-scrolls to the element with `id`. Returns whether there was one;
/// a missing section is not an error, it just means nothing happens.
pub fn scroll_to<S: SectionScroller>(scroller: &S, id: &str) -> bool {
	let Some(section) = scroller.find_section(id) else {
		return false;
	};

	scroller.scroll_into_view(&section);
	true
}

pub fn scroll_to_section(id: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.is_some_and(|doc| scroll_to(&doc, id))
}

/// A click handler for call-to-action buttons.
#[must_use]
pub fn scroll_callback(target: SectionId) -> Callback<MouseEvent> {
	Callback::from(move |_| {
		scroll_to_section(target.as_str());
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;

	struct FakePage {
		ids: Vec<&'static str>,
		scrolled: RefCell<Vec<usize>>,
	}

	impl FakePage {
		fn new(ids: &[&'static str]) -> Self {
			Self { ids: ids.to_vec(), scrolled: RefCell::default() }
		}
	}

	impl SectionScroller for FakePage {
		type Section = usize;

		fn find_section(&self, id: &str) -> Option<usize> {
			self.ids.iter().position(|i| *i == id)
		}

		fn scroll_into_view(&self, section: &usize) {
			self.scrolled.borrow_mut().push(*section);
		}
	}

	#[test]
	fn scrolls_exactly_the_matching_section() {
		let page = FakePage::new(&["hero", "curriculum", "schedule", "faq"]);

		assert!(scroll_to(&page, "schedule"));
		assert_eq!(*page.scrolled.borrow(), [2]);
	}

	#[test]
	fn missing_section_is_a_no_op() {
		let page = FakePage::new(&["hero"]);

		assert!(!scroll_to(&page, "schedule"));
		assert!(page.scrolled.borrow().is_empty());
	}

	#[test]
	fn repeated_scrolls_hit_the_same_section() {
		let page = FakePage::new(&["schedule", "faq"]);

		scroll_to(&page, "faq");
		scroll_to(&page, "faq");
		assert_eq!(*page.scrolled.borrow(), [1, 1]);
	}
}
