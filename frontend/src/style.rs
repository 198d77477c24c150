use shared_data::Theme;
use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ shared_data::BASE_STYLE }</style> }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProps {
	pub theme: Theme,
}

#[function_component(ThemeStyle)]
pub fn theme_style(props: &ThemeProps) -> Html {
	html! { <style>{ props.theme.css_vars() }</style> }
}

pub const PAGE_STYLE: &str = r"
header {
	position: sticky;
	top: 0;
	z-index: 50;
	backdrop-filter: blur(8px);
	background-color: rgba(255, 255, 255, 0.7);
	border-bottom: 1px solid var(--border-color);
}
#nav-bar {
	max-width: 72rem;
	margin: 0 auto;
	display: flex;
	align-items: center;
	justify-content: space-between;
	padding: 0.75rem 1.5rem;
}
#brand {
	display: flex;
	align-items: center;
	gap: 0.5rem;
	font-weight: 600;
}
#brand-mark {
	display: grid;
	place-items: center;
	height: 2rem;
	width: 2rem;
	border-radius: 0.75rem;
	background-color: var(--accent);
	color: var(--accent-text);
}
#nav-links {
	display: none;
	gap: 1.5rem;
	font-size: 0.875rem;
}
#nav-links a:hover {
	color: var(--accent);
}
@media (min-width: 768px) {
	#nav-links {
		display: flex;
	}
}
#hero {
	padding-top: 5rem;
}
#hero h1 {
	font-size: 3rem;
	font-weight: 800;
	line-height: 1.1;
}
.badge-row, .button-row {
	display: flex;
	flex-wrap: wrap;
	gap: 0.75rem;
	margin-top: 1.5rem;
}
.section-heading {
	display: flex;
	align-items: center;
	gap: 0.5rem;
}
.tab-list {
	display: grid;
	grid-template-columns: repeat(3, 1fr);
	background-color: var(--accent-soft);
	border-radius: 0.5rem;
	padding: 0.25rem;
}
.tab-list button {
	background-color: transparent;
	border-color: transparent;
	color: var(--main-text);
}
.tab-list button.selected {
	background-color: var(--card-background);
	border-color: var(--border-color);
}
.feature {
	display: flex;
	gap: 0.75rem;
}
.week-badge {
	margin-right: 0.5rem;
}
#instructor-card {
	display: flex;
	flex-wrap: wrap;
	gap: 1.5rem;
}
.avatar {
	display: grid;
	place-items: center;
	height: 5rem;
	width: 5rem;
	border-radius: 9999px;
	background-color: var(--accent-soft);
	font-weight: 600;
}
.price {
	font-size: 1.875rem;
	font-weight: 700;
}
.video-frame {
	width: 100%;
	aspect-ratio: 16 / 9;
	border: 0;
	border-radius: 1rem;
}
.faq-item {
	border-bottom: 1px solid var(--border-color);
}
.faq-item button {
	width: 100%;
	justify-content: space-between;
	background-color: transparent;
	border: none;
	color: var(--main-text);
	padding: 1rem 0;
	font-weight: 500;
}
.faq-answer {
	padding-bottom: 1rem;
}
footer {
	border-top: 1px solid var(--border-color);
	margin-top: 3rem;
	padding-bottom: 3rem;
}
#faq {
	padding-bottom: 6rem;
}
#copyright {
	font-size: 0.75rem;
	margin-top: 1.5rem;
}
";
