//! Contact page
//!
//! Messages go through a [`ContactTransport`]. The site has no mail backend,
//! so the default transport only logs the message.

use crate::app::PageContext;
use crate::content::CONTACT_DETAILS;
use crate::form::{FormController, SubmitOutcome};
use crate::toast::Toast;
use crate::views::{ContactView, field_views};
use async_trait::async_trait;
use std::rc::Rc;
use szokewash_forms::{ContactMessage, ContactSchema};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
	#[error("Message could not be sent: {0}")]
	SendFailed(String),
}

/// Delivers a validated contact message.
#[async_trait(?Send)]
pub trait ContactTransport {
	async fn send(&self, message: ContactMessage) -> Result<(), ContactError>;
}

/// Writes the message to the log and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransport;

#[async_trait(?Send)]
impl ContactTransport for LogTransport {
	async fn send(&self, message: ContactMessage) -> Result<(), ContactError> {
		tracing::info!(
			name = %message.name,
			email = %message.email,
			phone = message.phone.as_deref().unwrap_or("-"),
			length = message.message.chars().count(),
			"contact message received"
		);
		Ok(())
	}
}

pub struct ContactPage {
	ctx: PageContext,
	transport: Rc<dyn ContactTransport>,
	form: FormController<ContactSchema>,
}

impl ContactPage {
	pub fn new(ctx: PageContext, transport: Rc<dyn ContactTransport>) -> Self {
		Self {
			ctx,
			transport,
			form: FormController::new(ContactSchema::new()),
		}
	}

	pub fn set_field(&self, name: &str, value: impl Into<String>) {
		self.form.set_field(name, value);
	}

	pub fn form(&self) -> &FormController<ContactSchema> {
		&self.form
	}

	pub async fn submit(&self) -> SubmitOutcome<Result<(), ContactError>> {
		let transport = Rc::clone(&self.transport);
		let outcome = self
			.form
			.submit(|message| async move { transport.send(message).await })
			.await;

		if let SubmitOutcome::Accepted(result) = &outcome {
			match result {
				Ok(()) => {
					self.ctx.toaster.add(Toast::success(
						"Üzenet elküldve!",
						"Hamarosan felvesszük Önnel a kapcsolatot.",
					));
					self.form.reset();
				}
				Err(error) => {
					tracing::warn!(error = %error, "contact message not delivered");
					self.ctx.toaster.add(Toast::destructive(
						"Hiba történt",
						"Az üzenet küldése nem sikerült. Kérjük, próbálja újra később.",
					));
				}
			}
		}
		outcome
	}

	pub fn view(&self) -> ContactView {
		let busy = self.form.is_submitting();
		ContactView {
			title: "Írjon nekünk",
			fields: field_views(&self.form),
			details: CONTACT_DETAILS,
			submit_label: if busy { "Küldés..." } else { "Üzenet küldése" },
			disabled: busy,
		}
	}
}
