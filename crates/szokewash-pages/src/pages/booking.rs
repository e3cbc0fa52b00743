//! Appointment booking page
//!
//! The form only exists while a session is present. While the session is
//! loading the page waits; without a session it shows a call to action and
//! nothing else.

use crate::app::PageContext;
use crate::clock::Clock;
use crate::error::PageError;
use crate::form::{FormController, SubmitOutcome};
use crate::reactive::{Effect, Signal};
use crate::router::Route;
use crate::session::{SessionState, use_session};
use crate::toast::Toast;
use crate::views::{BookingFormView, BookingView, ServiceOption, field_views};
use chrono::NaiveDate;
use std::rc::Rc;
use szokewash_client::StorageError;
use szokewash_forms::{BookingSchema, ServiceType};

/// The mounted booking form.
pub struct BookingForm {
	controller: FormController<BookingSchema>,
}

impl BookingForm {
	fn new(today: NaiveDate) -> Self {
		Self {
			controller: FormController::new(BookingSchema::new().with_min_date(today)),
		}
	}

	pub fn controller(&self) -> &FormController<BookingSchema> {
		&self.controller
	}

	// The earliest date is today as of the latest render
	fn refresh_min_date(&self, today: NaiveDate) {
		let current = self.controller.with_schema(BookingSchema::min_date);
		if current != Some(today) {
			self.controller
				.set_schema(BookingSchema::new().with_min_date(today));
		}
	}
}

#[derive(Clone)]
enum BookingState {
	Loading,
	SignInRequired,
	Ready(Rc<BookingForm>),
}

pub struct BookingPage {
	ctx: PageContext,
	clock: Rc<dyn Clock>,
	state: Signal<BookingState>,
	_mount: Effect,
}

impl BookingPage {
	/// Mount the page under the session provider.
	pub fn mount(ctx: PageContext, clock: Rc<dyn Clock>) -> Result<Self, PageError> {
		let session = use_session()?;
		Ok(Self::with_session(ctx, session, clock))
	}

	/// Mount the page against an explicit session state.
	pub fn with_session(ctx: PageContext, session: SessionState, clock: Rc<dyn Clock>) -> Self {
		let state = Signal::new(BookingState::Loading);
		let mount = {
			let (state, clock) = (state.clone(), Rc::clone(&clock));
			Effect::new(move || {
				let next = if session.is_loading() {
					BookingState::Loading
				} else if !session.is_signed_in() {
					BookingState::SignInRequired
				} else {
					match state.get_untracked() {
						ready @ BookingState::Ready(_) => ready,
						_ => {
							tracing::debug!("session confirmed, mounting booking form");
							BookingState::Ready(Rc::new(BookingForm::new(clock.today())))
						}
					}
				};
				state.set(next);
			})
		};

		Self {
			ctx,
			clock,
			state,
			_mount: mount,
		}
	}

	/// The booking form, if a session is present.
	pub fn form(&self) -> Option<Rc<BookingForm>> {
		match self.state.get() {
			BookingState::Ready(form) => Some(form),
			_ => None,
		}
	}

	pub fn set_field(&self, name: &str, value: impl Into<String>) -> Result<(), PageError> {
		let form = self.form().ok_or(PageError::FormUnavailable)?;
		form.controller.set_field(name, value);
		Ok(())
	}

	/// Follow the call to action shown when no session is present.
	pub fn go_to_sign_in(&self) {
		self.ctx.navigator.navigate(Route::Auth);
	}

	/// Validate and store the booking.
	///
	/// A stored booking empties the form; a failed insert keeps every value
	/// so the visitor can retry.
	pub async fn submit(&self) -> Result<SubmitOutcome<Result<(), StorageError>>, PageError> {
		let form = self.form().ok_or(PageError::FormUnavailable)?;
		form.refresh_min_date(self.clock.today());

		let client = Rc::clone(&self.ctx.client);
		let outcome = form
			.controller
			.submit(|record| async move { client.insert_booking(record).await })
			.await;

		if let SubmitOutcome::Accepted(result) = &outcome {
			match result {
				Ok(()) => {
					self.ctx.toaster.add(Toast::success(
						"Sikeres foglalás!",
						"Időpontfoglalását rögzítettük. Hamarosan felvesszük Önnel a kapcsolatot.",
					));
					form.controller.reset();
				}
				Err(error) => {
					tracing::warn!(error = %error, "booking could not be stored");
					self.ctx.toaster.add(Toast::destructive(
						"Hiba történt",
						"A foglalás nem sikerült. Kérjük, próbálja újra később.",
					));
				}
			}
		}
		Ok(outcome)
	}

	pub fn view(&self) -> BookingView {
		match self.state.get() {
			BookingState::Loading => BookingView::Loading,
			BookingState::SignInRequired => BookingView::SignInRequired {
				title: "Bejelentkezés szükséges",
				message: "Az időpontfoglaláshoz kérjük, jelentkezzen be vagy regisztráljon.",
				cta_label: "Bejelentkezés",
				cta: Route::Auth,
			},
			BookingState::Ready(form) => {
				let today = self.clock.today();
				form.refresh_min_date(today);
				let busy = form.controller.is_submitting();
				BookingView::Form(BookingFormView {
					title: "Időpontfoglalás",
					subtitle: "Töltse ki az alábbi űrlapot az időpont lefoglalásához",
					fields: field_views(&form.controller),
					service_options: ServiceType::ALL.into_iter().map(ServiceOption::from).collect(),
					min_date: today,
					submit_label: if busy {
						"Foglalás folyamatban..."
					} else {
						"Időpont foglalása"
					},
					disabled: busy,
				})
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::clock::FixedClock;
	use crate::router::{History, Navigator};
	use crate::toast::Toaster;
	use rstest::rstest;
	use szokewash_client::{MockSessionClient, Session};

	fn page(session: SessionState) -> (BookingPage, Rc<History>) {
		let history = Rc::new(History::new(Route::Booking));
		let ctx = PageContext::new(
			Rc::new(MockSessionClient::new()),
			history.clone(),
			Toaster::new(),
		);
		let clock = Rc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
		(BookingPage::with_session(ctx, session, clock), history)
	}

	#[rstest]
	fn test_loading_shows_waiting_state() {
		let session = SessionState::resolved(None);
		session.loading.set(true);

		let (page, _) = page(session);

		assert_eq!(page.view(), BookingView::Loading);
		assert_eq!(page.set_field("customer_name", "x"), Err(PageError::FormUnavailable));
	}

	#[rstest]
	fn test_cta_navigates_to_auth() {
		let (page, history) = page(SessionState::resolved(None));

		page.go_to_sign_in();

		assert_eq!(history.current(), Route::Auth);
	}

	#[rstest]
	fn test_form_survives_unrelated_session_updates() {
		// Arrange
		let session = SessionState::resolved(Some(Session::new("u", "a@b.hu")));
		let (page, _) = page(session.clone());
		page.set_field("customer_name", "Kovács Béla").unwrap();

		// Act
		session.loading.set(false);

		// Assert
		let form = page.form().unwrap();
		assert_eq!(form.controller().value("customer_name"), "Kovács Béla");
	}

	#[rstest]
	fn test_form_view_lists_services_and_min_date() {
		let (page, _) = page(SessionState::resolved(Some(Session::new("u", "a@b.hu"))));

		let view = page.view();

		let form = view.form().unwrap();
		assert_eq!(form.min_date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
		assert_eq!(form.service_options.len(), 4);
		assert_eq!(form.service_options[0].label, "Külső mosás");
		assert_eq!(form.fields.len(), 9);
		assert_eq!(form.submit_label, "Időpont foglalása");
	}
}
