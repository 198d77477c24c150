// Run with `wasm-pack test --headless --chrome frontend`.
#![cfg(target_arch = "wasm32")]

use std::{cell::Cell, rc::Rc};
use frontend::{
	enroll::{watch_frame_loads, EnrollmentForm, EnrollmentFormProps},
	info::Curriculum,
	scroll::scroll_to_section
};
use gloo_timers::future::TimeoutFuture;
use shared_data::{
	content::CURRICULUM,
	enrollment::{FormField, CONFIRMATION}
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
	Document,
	Element,
	Event,
	HtmlFormElement,
	HtmlIFrameElement,
	HtmlInputElement,
	HtmlTextAreaElement
};
use yew::{AppHandle, BaseComponent, Callback, Renderer};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn host() -> Element {
	let host = document().create_element("div").unwrap();
	document().body().unwrap().append_child(&host).unwrap();
	host
}

async fn settle() {
	TimeoutFuture::new(10).await;
}

async fn mount<C>(host: &Element) -> AppHandle<C>
where
	C: BaseComponent,
	C::Properties: Default,
{
	let handle = Renderer::<C>::with_root(host.clone()).render();
	settle().await;
	handle
}

fn load_event() -> Event {
	Event::new("load").unwrap()
}

fn form(host: &Element) -> Option<HtmlFormElement> {
	host.query_selector("form")
		.unwrap()
		.map(|f| f.dyn_into().unwrap())
}

fn fill(host: &Element, field: FormField, value: &str) {
	let el = host.query_selector(&format!("[name=\"{}\"]", field.entry_name()))
		.unwrap()
		.unwrap();

	match el.dyn_into::<HtmlInputElement>() {
		Ok(input) => input.set_value(value),
		Err(el) => el.dyn_into::<HtmlTextAreaElement>().unwrap().set_value(value),
	}
}

fn fill_valid(host: &Element) {
	fill(host, FormField::ParentName, "Marta Silva");
	fill(host, FormField::Email, "marta@example.com");
	fill(host, FormField::Phone, "+351 900 000 000");
	fill(host, FormField::Student, "Rui, 13");
	fill(host, FormField::Notes, "Do we need to bring a laptop?");
}

#[wasm_bindgen_test]
async fn any_missing_required_field_blocks_submission() {
	let required = FormField::ALL.into_iter().filter(|f| f.required());

	for missing in required {
		let host = host();
		let _handle = mount::<EnrollmentForm>(&host).await;

		fill_valid(&host);
		fill(&host, missing, "");

		let enroll = form(&host).unwrap();
		assert!(!enroll.check_validity(), "{missing:?} left empty but the form validated");

		enroll.request_submit().unwrap();
		settle().await;
		assert!(form(&host).is_some(), "{missing:?} left empty but the form went away");
	}
}

#[wasm_bindgen_test]
async fn malformed_email_is_rejected_and_full_form_is_accepted() {
	let host = host();
	let _handle = mount::<EnrollmentForm>(&host).await;

	fill_valid(&host);
	assert!(form(&host).unwrap().check_validity());

	fill(&host, FormField::Email, "not-an-email");
	assert!(!form(&host).unwrap().check_validity());
}

#[wasm_bindgen_test]
async fn frame_load_swaps_form_for_confirmation() {
	let host = host();
	let _handle = mount::<EnrollmentForm>(&host).await;
	assert!(form(&host).is_some());

	let frame = host.query_selector("iframe").unwrap().unwrap();
	frame.dispatch_event(&load_event()).unwrap();
	settle().await;

	assert!(form(&host).is_none());
	let confirmation = host.query_selector(".enroll-confirmation").unwrap().unwrap();
	assert_eq!(confirmation.text_content().as_deref(), Some(CONFIRMATION));

	// a second load has nothing left to change
	frame.dispatch_event(&load_event()).unwrap();
	settle().await;
	assert_eq!(host.query_selector_all(".enroll-confirmation").unwrap().length(), 1);
}

#[wasm_bindgen_test]
async fn unmounted_form_stops_listening_to_its_frame() {
	let host = host();
	let loads = Rc::new(Cell::new(0));
	let props = EnrollmentFormProps {
		on_frame_load: Some({
			let loads = Rc::clone(&loads);
			Callback::from(move |()| loads.set(loads.get() + 1))
		}),
	};

	let handle = Renderer::<EnrollmentForm>::with_root_and_props(host.clone(), props).render();
	settle().await;
	let frame = host.query_selector("iframe").unwrap().unwrap();

	frame.dispatch_event(&load_event()).unwrap();
	settle().await;
	assert_eq!(loads.get(), 1);

	handle.destroy();
	settle().await;

	// the element outlives the component; only the subscription should be gone
	frame.dispatch_event(&load_event()).unwrap();
	settle().await;
	assert_eq!(loads.get(), 1);
}

#[wasm_bindgen_test]
fn dropped_listener_stops_hearing_loads() {
	let frame = document().create_element("iframe")
		.unwrap()
		.dyn_into::<HtmlIFrameElement>()
		.unwrap();

	let loads = Rc::new(Cell::new(0));
	let listener = {
		let loads = Rc::clone(&loads);
		watch_frame_loads(&frame, move || loads.set(loads.get() + 1))
	};

	frame.dispatch_event(&load_event()).unwrap();
	assert_eq!(loads.get(), 1);

	drop(listener);
	frame.dispatch_event(&load_event()).unwrap();
	assert_eq!(loads.get(), 1);
}

#[wasm_bindgen_test]
fn scrolling_to_a_missing_section_does_nothing() {
	assert!(!scroll_to_section("no-such-section"));
}

#[wasm_bindgen_test]
fn scrolling_to_schedule_finds_it() {
	let section = document().create_element("section").unwrap();
	section.set_id("schedule");
	document().body().unwrap().append_child(&section).unwrap();

	assert!(scroll_to_section("schedule"));
	section.remove();
}

#[wasm_bindgen_test]
async fn curriculum_renders_weeks_in_order() {
	let host = host();
	let _handle = mount::<Curriculum>(&host).await;

	let badges = host.query_selector_all(".week-badge").unwrap();
	let weeks = (0..badges.length())
		.filter_map(|i| badges.item(i))
		.filter_map(|n| n.text_content())
		.collect::<Vec<_>>();

	let expected = (1..=10).map(|w| format!("Week {w}")).collect::<Vec<_>>();
	assert_eq!(weeks, expected);

	let first_title = host.query_selector(".curriculum-week h3 span:last-child")
		.unwrap()
		.and_then(|n| n.text_content());
	assert_eq!(first_title.as_deref(), Some(CURRICULUM[0].title));
}
