use shared_data::content::{SectionId, SCHEDULE};
use yew::prelude::*;
use crate::{
	enroll::EnrollmentForm,
	widgets::{Section, SectionHeading}
};

#[function_component(ScheduleAndPricing)]
pub fn schedule_and_pricing() -> Html {
	html! {
		<Section id={ SectionId::Schedule }>
			<SectionHeading icon="📅" title="Schedule & Pricing" />
			<div class="grid-3">
				<div class="card">
					<h4>{ "🕒 Sessions" }</h4>
					<p class="muted">{ SCHEDULE.sessions }</p>
					<h4>{ "📍 Location" }</h4>
					<p class="muted">{ SCHEDULE.location }</p>
				</div>
				<div class="card">
					<h4>{ "Tuition" }</h4>
					<div class="price">{ SCHEDULE.tuition }</div>
					<p class="muted">{ SCHEDULE.tuition_note }</p>
					<span class="badge">{ SCHEDULE.scholarship }</span>
				</div>
				<div class="card">
					<h4>{ "Enroll" }</h4>
					<EnrollmentForm />
				</div>
			</div>
		</Section>
	}
}
