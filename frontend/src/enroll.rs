use std::rc::Rc;
use gloo_console::log;
use gloo_events::EventListener;
use shared_data::{
	ENROLL_STYLE,
	enrollment::{
		FormField,
		SubmissionStatus,
		CONFIRMATION,
		FORM_ACTION,
		FORM_METHOD,
		SUBMISSION_FRAME,
		SUBMIT_LABEL
	}
};
use web_sys::HtmlIFrameElement;
use yew::prelude::*;

#[derive(PartialEq, Eq, Default, Debug)]
pub struct FormStatus(pub SubmissionStatus);

pub struct FrameLoaded;

impl Reducible for FormStatus {
	type Action = FrameLoaded;

	fn reduce(self: Rc<Self>, _: FrameLoaded) -> Rc<Self> {
		// Already terminal; hand back the same state so nothing re-renders.
		if self.0.is_submitted() {
			return self;
		}

		Rc::new(Self(self.0.on_frame_load()))
	}
}

/// Runs `on_load` whenever `frame` finishes loading, for as long as the
/// returned listener is alive.
#[must_use]
pub fn watch_frame_loads(frame: &HtmlIFrameElement, on_load: impl Fn() + 'static) -> EventListener {
	EventListener::new(frame, "load", move |_| on_load())
}

fn field_input(field: FormField) -> Html {
	match field.kind().input_type() {
		Some(input_type) => html! {
			<input
				name={ field.entry_name() }
				type={ input_type }
				placeholder={ field.placeholder() }
				required={ field.required() }
			/>
		},
		None => html! {
			<textarea
				name={ field.entry_name() }
				placeholder={ field.placeholder() }
				required={ field.required() }
			/>
		}
	}
}

#[derive(Properties, PartialEq, Default)]
pub struct EnrollmentFormProps {
	/// Told about every load of the submission frame, for as long as the
	/// form is mounted.
	#[prop_or_default]
	pub on_frame_load: Option<Callback<()>>,
}

#[function_component(EnrollmentForm)]
pub fn enrollment_form(props: &EnrollmentFormProps) -> Html {
	let status = use_reducer_eq(FormStatus::default);
	let frame = use_node_ref();

	{
		let frame = frame.clone();
		let dispatcher = status.dispatcher();
		use_effect_with(props.on_frame_load.clone(), move |on_frame_load| {
			let on_frame_load = on_frame_load.clone();
			let listener = frame.cast::<HtmlIFrameElement>()
				.map(|f| watch_frame_loads(&f, move || {
					dispatcher.dispatch(FrameLoaded);
					if let Some(cb) = &on_frame_load {
						cb.emit(());
					}
				}));

			if listener.is_none() {
				log!("Enrollment frame never mounted; submissions won't be acknowledged");
			}

			// Dropping the listener unsubscribes, so a load after unmount goes nowhere
			move || drop(listener)
		});
	}

	let body = if status.0.is_submitted() {
		html! { <div class="enroll-confirmation">{ CONFIRMATION }</div> }
	} else {
		html! {
			<form id="enroll-form" action={ FORM_ACTION } method={ FORM_METHOD } target={ SUBMISSION_FRAME }>
				{ for FormField::ALL.into_iter().map(field_input) }
				<button type="submit">{ SUBMIT_LABEL }</button>
			</form>
		}
	};

	// The frame keeps its slot in both states so swapping the form out never
	// re-inserts it (which would fire a stray load).
	html! {
		<>
			<style>{ ENROLL_STYLE }</style>
			<iframe
				ref={ frame }
				name={ SUBMISSION_FRAME }
				title={ SUBMISSION_FRAME }
				class="submission-frame"
				tabindex="-1"
				aria-hidden="true"
			/>
			{ body }
		</>
	}
}
