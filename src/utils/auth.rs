use codee::string::FromToStringCodec;
use leptos::SignalGetUntracked;
use leptos_use::use_cookie;

use crate::utils::constants;

/// The auth state stores the information about the user's session. This
/// frontend never validates the token itself, it only checks whether one is
/// held; validation happens on the server when the token is presented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
	/// The user is logged out
	#[default]
	LoggedOut,
	/// The user is logged in
	LoggedIn {
		/// The session token. Sent as a bearer token with every GraphQL
		/// request and stored in the browser cookies
		auth_token: String,
	},
}

impl AuthState {
	/// Load the auth state from the browser cookie storage. This is used to
	/// get the auth state when the app is first loaded
	pub fn load() -> Self {
		let auth_token = use_cookie::<String, FromToStringCodec>(constants::AUTH_TOKEN)
			.0
			.get_untracked();

		match auth_token {
			Some(token) if !token.is_empty() => AuthState::LoggedIn { auth_token: token },
			_ => AuthState::LoggedOut,
		}
	}

	/// Is the user logged in
	pub fn is_logged_in(&self) -> bool {
		matches!(self, Self::LoggedIn { .. })
	}

	/// Get the session token, if one is held
	pub fn token(&self) -> Option<String> {
		match self {
			Self::LoggedOut => None,
			Self::LoggedIn { auth_token } => Some(auth_token.clone()),
		}
	}
}

/// Synchronous credential check. Returns the session token if one is
/// currently held in the cookie storage.
pub fn auth_token() -> Option<String> {
	AuthState::load().token()
}

#[cfg(test)]
mod tests {
	use super::AuthState;

	#[test]
	fn logged_out_state_has_no_token() {
		let state = AuthState::LoggedOut;
		assert!(!state.is_logged_in());
		assert_eq!(state.token(), None);
	}

	#[test]
	fn logged_in_state_exposes_token() {
		let state = AuthState::LoggedIn {
			auth_token: "abc".to_string(),
		};
		assert!(state.is_logged_in());
		assert_eq!(state.token(), Some("abc".to_string()));
	}
}
