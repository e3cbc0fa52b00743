//! Site routes and navigation

use std::cell::RefCell;
use std::fmt;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
	Home,
	Services,
	Gallery,
	About,
	Contact,
	Auth,
	Booking,
	NotFound,
}

impl Route {
	/// Routes shown in the navigation bar, in order.
	pub const NAVIGATION: [Route; 5] = [
		Route::Home,
		Route::Services,
		Route::Gallery,
		Route::About,
		Route::Contact,
	];

	pub fn path(&self) -> &'static str {
		match self {
			Route::Home => "/",
			Route::Services => "/szolgaltatasok",
			Route::Gallery => "/galeria",
			Route::About => "/rolunk",
			Route::Contact => "/kapcsolat",
			Route::Auth => "/auth",
			Route::Booking => "/idopontfoglalas",
			Route::NotFound => "/404",
		}
	}

	/// Resolve a request path; anything unknown is [`Route::NotFound`].
	///
	/// # Examples
	///
	/// ```
	/// use szokewash_pages::Route;
	///
	/// assert_eq!(Route::from_path("/kapcsolat"), Route::Contact);
	/// assert_eq!(Route::from_path("/kapcsolat/"), Route::Contact);
	/// assert_eq!(Route::from_path("/auth?next=/"), Route::Auth);
	/// assert_eq!(Route::from_path("/nincs-ilyen"), Route::NotFound);
	/// ```
	pub fn from_path(path: &str) -> Self {
		let path = path.split(['?', '#']).next().unwrap_or_default();
		let path = match path.trim_end_matches('/') {
			"" => "/",
			trimmed => trimmed,
		};
		match path {
			"/" => Route::Home,
			"/szolgaltatasok" => Route::Services,
			"/galeria" => Route::Gallery,
			"/rolunk" => Route::About,
			"/kapcsolat" => Route::Contact,
			"/auth" => Route::Auth,
			"/idopontfoglalas" => Route::Booking,
			_ => Route::NotFound,
		}
	}

	/// Navigation label.
	pub fn label(&self) -> &'static str {
		match self {
			Route::Home => "Főoldal",
			Route::Services => "Szolgáltatások",
			Route::Gallery => "Galéria",
			Route::About => "Rólunk",
			Route::Contact => "Kapcsolat",
			Route::Auth => "Bejelentkezés",
			Route::Booking => "Időpontfoglalás",
			Route::NotFound => "Az oldal nem található",
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}

/// Changes the page being shown.
pub trait Navigator {
	fn navigate(&self, route: Route);

	fn current(&self) -> Route;
}

/// In-memory navigation history.
///
/// Navigating to the page already shown does not add an entry.
///
/// # Examples
///
/// ```
/// use szokewash_pages::{History, Navigator, Route};
///
/// let history = History::new(Route::Auth);
/// history.navigate(Route::Home);
/// history.navigate(Route::Home);
/// assert_eq!(history.entries(), vec![Route::Auth, Route::Home]);
/// ```
pub struct History {
	entries: RefCell<Vec<Route>>,
}

impl History {
	pub fn new(start: Route) -> Self {
		Self {
			entries: RefCell::new(vec![start]),
		}
	}

	pub fn entries(&self) -> Vec<Route> {
		self.entries.borrow().clone()
	}

	/// Return to the previous page, if there is one.
	pub fn back(&self) -> Option<Route> {
		let mut entries = self.entries.borrow_mut();
		if entries.len() < 2 {
			return None;
		}
		entries.pop();
		entries.last().copied()
	}
}

impl Default for History {
	fn default() -> Self {
		Self::new(Route::Home)
	}
}

impl Navigator for History {
	fn navigate(&self, route: Route) {
		let mut entries = self.entries.borrow_mut();
		if entries.last() == Some(&route) {
			return;
		}
		tracing::debug!(to = route.path(), "navigate");
		entries.push(route);
	}

	fn current(&self) -> Route {
		self.entries
			.borrow()
			.last()
			.copied()
			.unwrap_or(Route::Home)
	}
}
