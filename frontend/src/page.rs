use shared_data::PageConfig;
use yew::prelude::*;
use crate::{
	faq::FaqAccordion,
	footer::Footer,
	hero::Hero,
	info::{Curriculum, InstructorBio, Outcomes, Testimonials, VideoSection},
	nav::NavBar,
	overview::AudienceTabs,
	schedule::ScheduleAndPricing,
	style::{SharedStyle, ThemeStyle, PAGE_STYLE}
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
	pub config: PageConfig,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingProps) -> Html {
	let PageConfig { theme, video, contact_links } = &props.config;

	html! {
		<>
			<ThemeStyle theme={ *theme } />
			<SharedStyle />
			<style>{ PAGE_STYLE }</style>
			<NavBar />
			<Hero />
			<AudienceTabs />
			<Curriculum />
			<Outcomes />
			<InstructorBio />
			<ScheduleAndPricing />
			<Testimonials />
			if let Some(video) = video {
				<VideoSection video={ video.clone() } />
			}
			<FaqAccordion />
			<Footer contact_links={ contact_links.clone() } />
		</>
	}
}
