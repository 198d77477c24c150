// Everything the page says lives here so the wasm app and the server-rendered
// noscript fallback can't drift apart.

pub const PROGRAM_NAME: &str = "AI Entrepreneurs Program";
pub const PROGRAM_CITY: &str = "Lisbon";

pub const HERO_PILL: &str = "10-week in‑person • Lisbon • Ages 12–16";
pub const HERO_TITLE: &str = "Turn Curiosity into Creations — with AI";
pub const HERO_BLURB: &str = "A hands-on after‑school program where teens learn to build with Generative AI, \
	practice Stanford‑style Design Thinking, and launch real mini‑ventures—culminating in a public showcase.";
pub const HERO_BADGES: [&str; 3] = [
	"Max 25 seats",
	"$390 total • 10% sibling discount",
	"Wednesdays 18:00 or Saturdays 10:00 (Lisbon)",
];
pub const HERO_FOOTNOTE: &str = "No prior coding required • 100% project-based • English-friendly international cohort";

/// Sections that navigation and call-to-action controls can target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
	Hero,
	Overview,
	Curriculum,
	Outcomes,
	Instructor,
	Schedule,
	SocialProof,
	Video,
	Faq,
	Cta,
}

impl SectionId {
	/// Page order, top to bottom.
	pub const ORDER: [Self; 10] = [
		Self::Hero,
		Self::Overview,
		Self::Curriculum,
		Self::Outcomes,
		Self::Instructor,
		Self::Schedule,
		Self::SocialProof,
		Self::Video,
		Self::Faq,
		Self::Cta,
	];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Hero => "hero",
			Self::Overview => "overview",
			Self::Curriculum => "curriculum",
			Self::Outcomes => "outcomes",
			Self::Instructor => "instructor",
			Self::Schedule => "schedule",
			Self::SocialProof => "social-proof",
			Self::Video => "video",
			Self::Faq => "faq",
			Self::Cta => "cta",
		}
	}

	#[must_use]
	pub fn anchor(self) -> String {
		format!("#{}", self.as_str())
	}
}

/// Every "Apply Now" button lands here; the enrollment form lives in this section.
pub const ENROLL_SECTION: SectionId = SectionId::Schedule;

pub struct NavLink {
	pub target: SectionId,
	pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
	NavLink { target: SectionId::Overview, label: "Overview" },
	NavLink { target: SectionId::Curriculum, label: "Curriculum" },
	NavLink { target: SectionId::Outcomes, label: "Outcomes" },
	NavLink { target: SectionId::Instructor, label: "Instructor" },
	NavLink { target: SectionId::Schedule, label: "Schedule & Pricing" },
	NavLink { target: SectionId::Faq, label: "FAQ" },
];

/// A titled blurb. Used for the "what students build" grid and the outcome cards.
pub struct Card {
	pub title: &'static str,
	pub description: &'static str,
}

pub const STUDENT_BUILDS: [Card; 4] = [
	Card { title: "AI‑assisted Apps", description: "From idea to prototype with Lovable/Bolt, shipped online." },
	Card { title: "Mini‑Ventures", description: "Real users, real feedback, and simple business models." },
	Card { title: "Brand & Pitch", description: "Logos, landing pages, 2‑minute pitch videos." },
	Card { title: "Showcase Portfolio", description: "A shareable page of all demos, assets, and learnings." },
];

pub const OUTCOMES: [Card; 6] = [
	Card { title: "Creator Mindset", description: "Shift from consumer to builder through weekly shipping and feedback." },
	Card { title: "AI Fluency", description: "Prompting, prototyping, and practical tools for real‑world use." },
	Card { title: "Business Basics", description: "User research, MVPs, positioning, pricing, and simple unit economics." },
	Card { title: "Team Skills", description: "Collaboration, communication, and iterative problem‑solving." },
	Card { title: "Portfolio", description: "A shareable page of demos, assets, and pitch recording." },
	Card { title: "Confidence", description: "Public showcase with parents and guests; certificate ceremony." },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Audience {
	#[default]
	Parents,
	Students,
	Schools,
}

/// One bullet of an audience tab. `icon` is a plain glyph; which one is purely cosmetic.
pub struct Feature {
	pub icon: &'static str,
	pub title: &'static str,
	pub text: &'static str,
}

impl Audience {
	pub const ALL: [Self; 3] = [Self::Parents, Self::Students, Self::Schools];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Parents => "For Parents",
			Self::Students => "For Students",
			Self::Schools => "For Schools",
		}
	}

	#[must_use]
	pub const fn features(self) -> &'static [Feature; 3] {
		match self {
			Self::Parents => &[
				Feature { icon: "🛡", title: "Safe & Structured", text: "Clear weekly goals, code of conduct, and ethical AI usage." },
				Feature { icon: "✅", title: "Visible Progress", text: "Weekly demos and a living portfolio you can follow at home." },
				Feature { icon: "🪙", title: "Practical Value", text: "Early exposure to AI skills, problem‑solving, and entrepreneurship." },
			],
			Self::Students => &[
				Feature { icon: "✨", title: "Build Cool Stuff", text: "Apps, games, logos, and videos—ship from day one." },
				Feature { icon: "👥", title: "Team Up", text: "Form teams, get feedback, and learn fast through iteration." },
				Feature { icon: "🏆", title: "Showtime", text: "Present at a public showcase and earn your certificate." },
			],
			Self::Schools => &[
				Feature { icon: "📖", title: "Designed for Terms", text: "10 concise weeks, 2‑hour sessions, clear outcomes per week." },
				Feature { icon: "📊", title: "Portfolio Evidence", text: "Shareable artifacts and rubric scores for each learner." },
				Feature { icon: "🏫", title: "No IT Hassle", text: "Cloud tools; bring laptops. Zero heavy installs." },
			],
		}
	}
}

pub struct CurriculumWeek {
	pub week: u8,
	pub title: &'static str,
	pub description: &'static str,
}

pub const CURRICULUM: [CurriculumWeek; 10] = [
	CurriculumWeek { week: 1, title: "Build your first AI app", description: "Mentimeter kick‑off, Shark Tank inspo, Lovable/Bolt prototype, team feedback." },
	CurriculumWeek { week: 2, title: "Design Thinking field sprint", description: "Observe/interview local businesses, synthesize needs, paper prototype." },
	CurriculumWeek { week: 3, title: "Learn from success & failure", description: "Marshmallow challenge; analyze real startups; snapshot business models." },
	CurriculumWeek { week: 4, title: "Team formation + research", description: "Narrow to 2 ideas; AI‑assisted user & competitor research; differentiation." },
	CurriculumWeek { week: 5, title: "Define → Ideate → Prototype", description: "Create interview script, collect 10 responses, feature cutline, v0 prototype." },
	CurriculumWeek { week: 6, title: "MVP & simple business model", description: "Ship MVP link (Replit/GitHub Pages), pricing hypothesis, unit economics." },
	CurriculumWeek { week: 7, title: "Branding & go‑to‑market", description: "Logo in Canva, 20‑sec intro video, positioning one‑liner, landing teaser." },
	CurriculumWeek { week: 8, title: "Sales experiments (ethical)", description: "Run small tests; track sign‑ups/objections; iterate product & pricing." },
	CurriculumWeek { week: 9, title: "Pitchcraft + polish", description: "Refine MVP and assets; two rounds of pitches with rubric‑based feedback." },
	CurriculumWeek { week: 10, title: "Showcase & celebration", description: "Parent audience, live demos, certificates, awards, next‑steps plan." },
];

pub struct Instructor {
	pub name: &'static str,
	pub initials: &'static str,
	pub bio: &'static str,
	pub highlights: [&'static str; 3],
}

pub const INSTRUCTOR: Instructor = Instructor {
	name: "Arjun Nair",
	initials: "AN",
	bio: "Co‑founder of Great Learning — delivering AI & tech programs for 12+ years in 170+ countries to 10M+ learners. \
		Passionate about helping teens become creators and leaders.",
	highlights: ["Safe, ethical AI", "Project‑based", "10 weeks"],
};

pub struct Schedule {
	pub sessions: &'static str,
	pub location: &'static str,
	pub tuition: &'static str,
	pub tuition_note: &'static str,
	pub scholarship: &'static str,
}

pub const SCHEDULE: Schedule = Schedule {
	sessions: "2 hours once a week • Choose: Wed 18:00 or Sat 10:00 (Lisbon)",
	location: "Lisbon (central). Details shared upon enrollment.",
	tuition: "$390",
	tuition_note: "Covers all 10 weeks • 10% sibling discount • Max 25 seats",
	scholarship: "Scholarships by request",
};

pub struct TestimonialQuote {
	pub text: &'static str,
}

pub const TESTIMONIALS: [TestimonialQuote; 3] = [
	TestimonialQuote { text: "My child came home excited every week." },
	TestimonialQuote { text: "The final showcase was outstanding." },
	TestimonialQuote { text: "They actually built and shipped something!" },
];

pub struct FaqEntry {
	pub question: &'static str,
	pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 4] = [
	FaqEntry {
		question: "Do students need prior coding experience?",
		answer: "No. We start with visual tools and AI‑assisted builders. Curious beginners do great here.",
	},
	FaqEntry {
		question: "What do students need to bring?",
		answer: "A laptop, charger, and willing mindset. We provide the rest.",
	},
	FaqEntry {
		question: "How do you ensure safety and ethics?",
		answer: "We teach a short responsible‑AI module and follow a clear code of conduct, including privacy‑first research and parent consent for public posts.",
	},
	FaqEntry {
		question: "What if my child misses a class?",
		answer: "We share weekly recaps and project checklists so they can catch up quickly.",
	},
];

pub const CTA_TITLE: &str = "Ready to reserve a seat?";
pub const CTA_BLURB: &str = "Seats are limited to 25. Apply now to choose your preferred time: Wednesday 18:00 or Saturday 10:00.";

#[must_use]
pub fn copyright_line(year: u32) -> String {
	format!("© {year} {PROGRAM_NAME} — {PROGRAM_CITY}")
}
