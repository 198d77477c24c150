use const_format::concatcp;
use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::{
	config::CONFIG_ELEMENT_ID,
	content::{FAQ, CURRICULUM, HERO_BLURB, HERO_TITLE, PROGRAM_NAME, SCHEDULE},
	enrollment::{FormField, FORM_ACTION, FORM_METHOD, SUBMIT_LABEL},
	PageConfig,
	BASE_STYLE
};

const PAGE_TITLE: &str = concatcp!(PROGRAM_NAME, " — Lisbon, ages 12–16");

// Only applies to the <noscript> copy; the wasm app brings its own styles.
const FALLBACK_STYLE: &str = concatcp!(BASE_STYLE, r"
#no-js {
	max-width: 48rem;
	margin: 0 auto;
	padding: 2rem 1.5rem;
}
#no-js form {
	display: grid;
	gap: 0.75rem;
}
#no-js dt {
	font-weight: 600;
	margin-top: 1rem;
}
");

const BOOTSTRAP: &str = "import init from '/pkg/frontend.js'; init();";

struct FallbackField(FormField);

impl RenderOnce for FallbackField {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let field = self.0;
		match (field.kind().input_type(), field.required()) {
			(None, _) => tmpl << html! {
				textarea(name = field.entry_name(), placeholder = field.placeholder()) : "";
			},
			(Some(input_type), true) => tmpl << html! {
				input(name = field.entry_name(), type = input_type, placeholder = field.placeholder(), required = "required");
			},
			(Some(input_type), false) => tmpl << html! {
				input(name = field.entry_name(), type = input_type, placeholder = field.placeholder());
			},
		};
	}
}

/// What people without javascript get: the same content, minus the
/// interactivity, and a form that navigates to Google's thank-you page.
struct NoScriptFallback;

impl RenderOnce for NoScriptFallback {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			div(id = "no-js") {
				h1 : HERO_TITLE;
				p : HERO_BLURB;
				h2 : "10-Week Curriculum";
				ol {
					@ for week in &CURRICULUM {
						li {
							strong : week.title;
							: " — ";
							: week.description;
						}
					}
				}
				h2 : "Schedule & Pricing";
				p : SCHEDULE.sessions;
				p {
					: SCHEDULE.tuition;
					: " • ";
					: SCHEDULE.tuition_note;
				}
				h2 : "Enroll";
				form(action = FORM_ACTION, method = FORM_METHOD) {
					@ for field in FormField::ALL {
						: FallbackField(field);
					}
					input(type = "submit", value = SUBMIT_LABEL);
				}
				h2 : "FAQ";
				dl {
					@ for entry in &FAQ {
						dt : entry.question;
						dd : entry.answer;
					}
				}
			}
		};
	}
}

/// The document every visit to `/` gets. `config` rides along as JSON for
/// the wasm app to pick up.
pub fn render_shell(config: &PageConfig, site_url: &str) -> Result<String, Box<dyn std::error::Error>> {
	// No `<` at all inside the script, so neither `</script>` nor `<!--`
	// in a configured URL can change how the element is parsed
	let config_json = config.to_json()?.replace('<', "\\u003c");

	let page = html! {
		: doctype::HTML;
		html(lang = "en") {
			head {
				meta(charset = "utf-8");
				meta(name = "viewport", content = "width=device-width, initial-scale=1");
				meta(name = "description", content = HERO_BLURB);
				link(rel = "canonical", href = site_url);
				title : PAGE_TITLE;
				style : Raw(config.theme.css_vars());
				style : Raw(FALLBACK_STYLE);
				script(type = "application/json", id = CONFIG_ELEMENT_ID) : Raw(&config_json);
				script(type = "module") : Raw(BOOTSTRAP);
			}
			body {
				noscript : NoScriptFallback;
			}
		}
	}.into_string()?;

	Ok(page)
}
