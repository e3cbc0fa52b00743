//! Collaborators shared by every page

use crate::router::{Navigator, Route};
use crate::toast::Toaster;
use std::rc::Rc;
use szokewash_client::SessionClient;
use szokewash_conf::SiteSettings;

/// What a page controller needs from the outside world.
#[derive(Clone)]
pub struct PageContext {
	pub client: Rc<dyn SessionClient>,
	pub navigator: Rc<dyn Navigator>,
	pub toaster: Toaster,
	/// Where visitors are sent once they are signed in
	pub home: Route,
}

impl PageContext {
	pub fn new(
		client: Rc<dyn SessionClient>,
		navigator: Rc<dyn Navigator>,
		toaster: Toaster,
	) -> Self {
		Self {
			client,
			navigator,
			toaster,
			home: Route::Home,
		}
	}

	/// Take the home destination from the site settings.
	///
	/// A path that names no known page leaves the home route unchanged.
	pub fn with_site(mut self, site: &SiteSettings) -> Self {
		match Route::from_path(&site.home_path) {
			Route::NotFound => {
				tracing::warn!(path = %site.home_path, "home path names no page, keeping default");
			}
			route => self.home = route,
		}
		self
	}

	pub fn go_home(&self) {
		self.navigator.navigate(self.home);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::History;
	use rstest::rstest;
	use szokewash_client::MockSessionClient;

	fn site(home_path: &str) -> SiteSettings {
		SiteSettings {
			home_path: home_path.to_string(),
		}
	}

	#[rstest]
	#[case("/", Route::Home)]
	#[case("/idopontfoglalas", Route::Booking)]
	#[case("/szolgaltatasok/", Route::Services)]
	#[case("/nincs-ilyen", Route::Home)]
	fn test_home_from_site_settings(#[case] path: &str, #[case] expected: Route) {
		let ctx = PageContext::new(
			Rc::new(MockSessionClient::new()),
			Rc::new(History::new(Route::Auth)),
			Toaster::new(),
		);

		let ctx = ctx.with_site(&site(path));

		assert_eq!(ctx.home, expected);
	}

	#[rstest]
	fn test_go_home_uses_configured_route() {
		let history = Rc::new(History::new(Route::Auth));
		let ctx = PageContext::new(Rc::new(MockSessionClient::new()), history.clone(), Toaster::new())
			.with_site(&site("/kapcsolat"));

		ctx.go_home();

		assert_eq!(history.current(), Route::Contact);
	}
}
