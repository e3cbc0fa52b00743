//! Sign-in / sign-up page
//!
//! Redirects home as soon as a session exists, whether it was there on
//! mount or shows up later.

use crate::app::PageContext;
use crate::error::PageError;
use crate::form::{FormController, SubmitOutcome};
use crate::reactive::{Effect, Signal};
use crate::session::{SessionState, use_session};
use crate::toast::Toast;
use crate::views::{AuthView, field_views};
use std::rc::Rc;
use szokewash_client::AuthError;
use szokewash_forms::AuthSchema;

/// Which flow the page is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
	SignIn,
	SignUp,
}

impl AuthMode {
	pub fn toggled(self) -> Self {
		match self {
			AuthMode::SignIn => AuthMode::SignUp,
			AuthMode::SignUp => AuthMode::SignIn,
		}
	}

	fn title(self) -> &'static str {
		match self {
			AuthMode::SignIn => "Bejelentkezés",
			AuthMode::SignUp => "Regisztráció",
		}
	}

	fn subtitle(self) -> &'static str {
		match self {
			AuthMode::SignIn => "Jelentkezzen be az időpontfoglaláshoz",
			AuthMode::SignUp => "Hozzon létre fiókot az időpontfoglaláshoz",
		}
	}

	fn toggle_prompt(self) -> &'static str {
		match self {
			AuthMode::SignIn => "Még nincs fiókja?",
			AuthMode::SignUp => "Már van fiókja?",
		}
	}

	fn toggle_action(self) -> &'static str {
		match self {
			AuthMode::SignIn => "Regisztráljon",
			AuthMode::SignUp => "Jelentkezzen be",
		}
	}

	fn success_toast(self) -> Toast {
		match self {
			AuthMode::SignIn => Toast::success("Sikeres bejelentkezés", "Üdvözöljük!"),
			AuthMode::SignUp => Toast::success(
				"Sikeres regisztráció",
				"Fiókja létrejött. Most már bejelentkezhet.",
			),
		}
	}
}

const BUSY_LABEL: &str = "Kérem várjon...";

/// User-facing toast for a failed sign-in or sign-up.
pub fn auth_error_toast(error: &AuthError) -> Toast {
	match error {
		AuthError::InvalidCredentials => {
			Toast::destructive("Sikertelen bejelentkezés", "Hibás email vagy jelszó.")
		}
		AuthError::AlreadyRegistered => Toast::destructive(
			"Regisztráció sikertelen",
			"Ez az email cím már regisztrálva van.",
		),
		AuthError::Unknown(message) => Toast::destructive("Hiba történt", message.clone()),
	}
}

pub struct AuthPage {
	ctx: PageContext,
	mode: Signal<AuthMode>,
	form: FormController<AuthSchema>,
	_redirect: Effect,
}

impl AuthPage {
	/// Mount the page under the session provider.
	pub fn mount(ctx: PageContext) -> Result<Self, PageError> {
		let session = use_session()?;
		Ok(Self::with_session(ctx, session))
	}

	/// Mount the page against an explicit session state.
	pub fn with_session(ctx: PageContext, session: SessionState) -> Self {
		let redirect = {
			let (navigator, home) = (Rc::clone(&ctx.navigator), ctx.home);
			Effect::new(move || {
				if session.is_signed_in() {
					tracing::debug!(?home, "session present on auth page, redirecting home");
					navigator.navigate(home);
				}
			})
		};

		Self {
			ctx,
			mode: Signal::new(AuthMode::SignIn),
			form: FormController::new(AuthSchema::new()),
			_redirect: redirect,
		}
	}

	pub fn mode(&self) -> AuthMode {
		self.mode.get()
	}

	/// Switch between sign-in and sign-up, keeping what was typed.
	pub fn toggle_mode(&self) {
		self.mode.update(|mode| *mode = mode.toggled());
		self.form.clear_errors();
	}

	pub fn set_field(&self, name: &str, value: impl Into<String>) {
		self.form.set_field(name, value);
	}

	pub fn form(&self) -> &FormController<AuthSchema> {
		&self.form
	}

	/// Validate and run the current flow.
	pub async fn submit(&self) -> SubmitOutcome<Result<(), AuthError>> {
		let mode = self.mode.get_untracked();
		let client = Rc::clone(&self.ctx.client);

		let outcome = self
			.form
			.submit(|credentials| async move {
				match mode {
					AuthMode::SignIn => {
						client
							.sign_in(&credentials.email, &credentials.password)
							.await
					}
					AuthMode::SignUp => {
						client
							.sign_up(&credentials.email, &credentials.password)
							.await
					}
				}
			})
			.await;

		if let SubmitOutcome::Accepted(result) = &outcome {
			match result {
				Ok(()) => {
					tracing::info!(?mode, "authentication succeeded");
					self.ctx.toaster.add(mode.success_toast());
					self.ctx.go_home();
				}
				Err(error) => {
					tracing::warn!(?mode, error = %error, "authentication failed");
					self.ctx.toaster.add(auth_error_toast(error));
				}
			}
		}
		outcome
	}

	pub fn view(&self) -> AuthView {
		let mode = self.mode.get();
		let busy = self.form.is_submitting();
		AuthView {
			title: mode.title(),
			subtitle: mode.subtitle(),
			fields: field_views(&self.form),
			submit_label: if busy { BUSY_LABEL } else { mode.title() },
			disabled: busy,
			toggle_prompt: mode.toggle_prompt(),
			toggle_action: mode.toggle_action(),
		}
	}
}
