use std::fmt::Display;

use strum::EnumIter;

/// The list of all the routes on the frontend. The side menu entries all
/// point at top-level sections; [`AppRoutes::Login`] is only reachable when
/// no session is held.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AppRoutes {
	/// The photo timeline, the landing page of the application
	#[default]
	Photos,
	/// The albums overview page
	Albums,
	/// The map-based browsing page. Only linked to when the map feature
	/// flag is enabled
	Places,
	/// The face-grouping overview page
	People,
	/// The settings page
	Settings,
	/// The login page
	Login,
}

impl Display for AppRoutes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::Photos => "/photos",
				Self::Albums => "/albums",
				Self::Places => "/places",
				Self::People => "/people",
				Self::Settings => "/settings",
				Self::Login => "/login",
			}
		)
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::AppRoutes;

	#[test]
	fn every_route_is_an_absolute_path() {
		for route in AppRoutes::iter() {
			let path = route.to_string();
			assert!(path.starts_with('/'), "{:?} renders as `{}`", route, path);
			assert!(!path.ends_with('/'), "{:?} renders as `{}`", route, path);
		}
	}
}
