pub mod content;
pub mod config;
pub mod enrollment;

pub use config::{PageConfig, PageVariant, Theme};

pub const BASE_STYLE: &str = r#"
* {
	box-sizing: border-box;
	font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
	color: var(--main-text);
}
body {
	margin: 0;
	background: linear-gradient(to bottom, var(--page-top), var(--page-bottom) 40%);
	min-height: 100vh;
}
a {
	text-decoration: none;
}
section {
	width: 100%;
	max-width: 72rem;
	margin: 0 auto;
	padding: 5rem 1.5rem 0 1.5rem;
}
h2 {
	font-size: 1.875rem;
	margin: 0 0 1.5rem 0;
}
.muted {
	color: var(--muted-text);
}
.card {
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 1rem;
	padding: 1.5rem;
}
.grid-2, .grid-3 {
	display: grid;
	gap: 1rem;
}
@media (min-width: 768px) {
	.grid-2 {
		grid-template-columns: repeat(2, 1fr);
	}
	.grid-3 {
		grid-template-columns: repeat(3, 1fr);
	}
}
.pill, .badge {
	display: inline-flex;
	align-items: center;
	border-radius: 9999px;
	border: 1px solid var(--border-color);
	padding: 0.25rem 0.75rem;
	font-size: 0.875rem;
	background-color: var(--card-background);
}
.badge.accent {
	background-color: var(--accent);
	color: var(--accent-text);
	border-color: var(--accent);
}
button, .button {
	display: inline-flex;
	align-items: center;
	justify-content: center;
	border-radius: 0.375rem;
	border: 1px solid var(--accent);
	background-color: var(--accent);
	color: var(--accent-text);
	padding: 0.5rem 1rem;
	cursor: pointer;
	font-size: 1rem;
}
button.outline, .button.outline {
	background-color: transparent;
	color: var(--accent);
}
input, textarea {
	width: 100%;
	border-radius: 0.375rem;
	border: 1px solid var(--border-color);
	padding: 0.5rem 0.75rem;
	font-size: 1rem;
}
textarea {
	min-height: 96px;
	resize: vertical;
}
"#;

pub const ENROLL_STYLE: &str = r"
#enroll-form {
	display: grid;
	gap: 0.75rem;
}
.submission-frame {
	display: none;
	width: 0;
	height: 0;
	border: 0;
}
.enroll-confirmation {
	font-size: 0.875rem;
	color: var(--success-text);
	background-color: var(--success-background);
	border: 1px solid var(--success-border);
	border-radius: 0.5rem;
	padding: 0.75rem;
}
";
