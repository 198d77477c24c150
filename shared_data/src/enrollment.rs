//! The enrollment form's contract with the outside world.
//!
//! Responses go straight to a Google Form; the field names below are that
//! form's own entry ids and can't be changed from this side.

pub const FORM_ACTION: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfs6CvLDhmJyn-ufBvtmvpokTwklsvyh9uoewoQS934bqo9wQ/formResponse";
pub const FORM_METHOD: &str = "POST";

/// `name` of the invisible frame the form posts into, so the page itself never navigates.
pub const SUBMISSION_FRAME: &str = "hidden_iframe";

pub const CONFIRMATION: &str = "Thanks! We’ve received your interest. We’ll get back to you shortly.";
pub const SUBMIT_LABEL: &str = "Submit Interest";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputKind {
	Text,
	Email,
	MultiLine,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
	ParentName,
	Email,
	Phone,
	Student,
	Notes,
}

impl FormField {
	/// In the order they're shown.
	pub const ALL: [Self; 5] = [
		Self::ParentName,
		Self::Email,
		Self::Phone,
		Self::Student,
		Self::Notes,
	];

	#[must_use]
	pub const fn entry_name(self) -> &'static str {
		match self {
			Self::ParentName => "entry.996326909",
			Self::Email => "entry.1924727914",
			Self::Phone => "entry.456613422",
			Self::Student => "entry.2045828393",
			Self::Notes => "entry.2112294450",
		}
	}

	#[must_use]
	pub const fn placeholder(self) -> &'static str {
		match self {
			Self::ParentName => "Parent name",
			Self::Email => "Email",
			Self::Phone => "Phone / WhatsApp",
			Self::Student => "Student name & age",
			Self::Notes => "Any questions or notes?",
		}
	}

	#[must_use]
	pub const fn kind(self) -> InputKind {
		match self {
			Self::Email => InputKind::Email,
			Self::Notes => InputKind::MultiLine,
			Self::ParentName | Self::Phone | Self::Student => InputKind::Text,
		}
	}

	/// Enforced by the browser through the `required` attribute, nothing else.
	#[must_use]
	pub const fn required(self) -> bool {
		matches!(self, Self::ParentName | Self::Email | Self::Student)
	}
}

impl InputKind {
	/// The `type` attribute for `<input>`s; `None` means this renders as a `<textarea>`.
	#[must_use]
	pub const fn input_type(self) -> Option<&'static str> {
		match self {
			Self::Text => Some("text"),
			Self::Email => Some("email"),
			Self::MultiLine => None,
		}
	}
}

/// Whether the form has been sent off yet.
///
/// There's no way to tell a delivered submission from a failed one: the frame
/// fires `load` for Google's error page just like it does for the thank-you
/// page, so anything that loads counts as sent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Submitted,
}

impl SubmissionStatus {
	/// Only ever moves forward; once submitted, further loads change nothing.
	#[must_use]
	pub const fn on_frame_load(self) -> Self {
		Self::Submitted
	}

	#[must_use]
	pub const fn is_submitted(self) -> bool {
		matches!(self, Self::Submitted)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_three_fields_are_required() {
		let required = FormField::ALL.into_iter()
			.filter(|f| f.required())
			.collect::<Vec<_>>();
		assert_eq!(required, [FormField::ParentName, FormField::Email, FormField::Student]);
	}

	#[test]
	fn entry_names_are_distinct() {
		let mut names = FormField::ALL.map(FormField::entry_name).to_vec();
		names.sort_unstable();
		names.dedup();
		assert_eq!(names.len(), FormField::ALL.len());
	}

	#[test]
	fn only_notes_is_a_textarea() {
		assert_eq!(FormField::Notes.kind().input_type(), None);
		assert_eq!(FormField::Email.kind().input_type(), Some("email"));
		assert_eq!(FormField::Phone.kind().input_type(), Some("text"));
	}

	#[test]
	fn status_starts_idle_and_never_goes_back() {
		let status = SubmissionStatus::default();
		assert!(!status.is_submitted());

		let status = status.on_frame_load();
		assert_eq!(status, SubmissionStatus::Submitted);
		assert_eq!(status.on_frame_load(), SubmissionStatus::Submitted);
	}
}
