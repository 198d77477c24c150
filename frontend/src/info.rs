use shared_data::{
	config::VideoEmbed,
	content::{SectionId, CURRICULUM, INSTRUCTOR, OUTCOMES, TESTIMONIALS}
};
use yew::prelude::*;
use crate::widgets::{card, pill, Section, SectionHeading};

#[function_component(Curriculum)]
pub fn curriculum() -> Html {
	html! {
		<Section id={ SectionId::Curriculum }>
			<SectionHeading icon="💡" title="10‑Week Curriculum" />
			<div class="grid-2">
			{
				// CURRICULUM is already in week order, so no sorting here
				CURRICULUM.iter().map(|week| html! {
					<div class="card curriculum-week" key={ week.week }>
						<h3>
							<span class="badge week-badge">{ format!("Week {}", week.week) }</span>
							<span>{ week.title }</span>
						</h3>
						<p class="muted">{ week.description }</p>
					</div>
				}).collect::<Html>()
			}
			</div>
		</Section>
	}
}

#[function_component(Outcomes)]
pub fn outcomes() -> Html {
	html! {
		<Section id={ SectionId::Outcomes }>
			<SectionHeading icon="✅" title="What You’ll Gain" />
			<div class="grid-3">
				{ OUTCOMES.iter().map(card).collect::<Html>() }
			</div>
		</Section>
	}
}

#[function_component(InstructorBio)]
pub fn instructor_bio() -> Html {
	html! {
		<Section id={ SectionId::Instructor }>
			<SectionHeading icon="👥" title="Your Instructor" />
			<div class="card" id="instructor-card">
				<div class="avatar">{ INSTRUCTOR.initials }</div>
				<div>
					<h3>{ INSTRUCTOR.name }</h3>
					<p class="muted">{ INSTRUCTOR.bio }</p>
					<div class="badge-row">
						{ INSTRUCTOR.highlights.into_iter().map(pill).collect::<Html>() }
					</div>
				</div>
			</div>
		</Section>
	}
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
	html! {
		<Section id={ SectionId::SocialProof }>
			<SectionHeading icon="⭐" title="What Families Say" />
			<div class="grid-3">
			{
				TESTIMONIALS.iter().map(|quote| html! {
					<div class="card muted">{ format!("“{}”", quote.text) }</div>
				}).collect::<Html>()
			}
			</div>
		</Section>
	}
}

#[derive(Properties, PartialEq)]
pub struct VideoProps {
	pub video: VideoEmbed,
}

#[function_component(VideoSection)]
pub fn video_section(props: &VideoProps) -> Html {
	html! {
		<Section id={ SectionId::Video }>
			<SectionHeading icon="🎬" title="See It in Action" />
			<iframe
				class="video-frame"
				src={ props.video.src.clone() }
				title={ props.video.title.clone() }
				allow="accelerometer; encrypted-media; gyroscope; picture-in-picture"
				allowfullscreen={ true }
			/>
		</Section>
	}
}
