/// Errors raised by page controllers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
	/// A page was mounted outside the provider it depends on
	#[error("no {0} provider has been initialised")]
	MissingProvider(&'static str),

	/// The booking form was used while no session is present
	#[error("the booking form is not available without a session")]
	FormUnavailable,
}
