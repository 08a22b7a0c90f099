mod auth;
mod routes;

pub use self::{auth::*, routes::*};

/// A trait to extend the [`String`] type with some useful methods that are not
/// available in the standard library.
pub trait StringExt {
	/// Wraps the [`String`] into an option depending on whether it's empty.
	/// Returns [`None`] if the string is empty otherwise returns the string
	/// wrapped in a [`Some()`]
	fn some_if_not_empty(self) -> Option<String>;
}

impl StringExt for String {
	fn some_if_not_empty(self) -> Option<String> {
		if self.is_empty() {
			None
		} else {
			Some(self)
		}
	}
}

/// A module containing constants that are used throughout the application.
pub mod constants {
	/// The name of the cookie that stores the session token
	pub const AUTH_TOKEN: &str = "auth-token";
	/// The endpoint that all GraphQL documents are posted to
	pub const GRAPHQL_ENDPOINT: &str = "/api/graphql";
	/// The SVG sprite that the side menu icons are served from
	pub const ICON_SPRITE: &str = "/icons/sidemenu.svg";
}

#[cfg(test)]
mod tests {
	use super::StringExt;

	#[test]
	fn empty_string_becomes_none() {
		assert_eq!(String::new().some_if_not_empty(), None);
		assert_eq!(
			"token".to_string().some_if_not_empty(),
			Some("token".to_string())
		);
	}
}
