use crate::prelude::*;

/// One statically configured entry of the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
	/// The destination of the entry
	pub to: AppRoutes,
	/// Whether the active indicator requires an exact location match
	pub exact: bool,
	/// The translation key of the label
	pub label_key: &'static str,
	/// The English fallback label
	pub default_label: &'static str,
	/// The gradient class of the icon tile
	pub gradient: &'static str,
	/// The icon name within the sprite
	pub icon: &'static str,
}

/// The side menu entries, in display order. The enumeration is static and
/// stable across renders; the Places entry is included only while the map
/// feature flag is on.
pub fn nav_items(map_enabled: bool) -> Vec<NavItem> {
	let mut items = vec![
		NavItem {
			to: AppRoutes::Photos,
			exact: true,
			label_key: "sidemenu.photos",
			default_label: "Photos",
			gradient: "from-[#AAD4F8] to-[#80B2E8]",
			icon: "photos",
		},
		NavItem {
			to: AppRoutes::Albums,
			exact: true,
			label_key: "sidemenu.albums",
			default_label: "Albums",
			gradient: "from-[#F8AAAA] to-[#E88380]",
			icon: "albums",
		},
	];

	if map_enabled {
		items.push(NavItem {
			to: AppRoutes::Places,
			exact: true,
			label_key: "sidemenu.places",
			default_label: "Places",
			gradient: "from-[#B8EF7F] to-[#8CD77B]",
			icon: "places",
		});
	}

	items.push(NavItem {
		to: AppRoutes::People,
		exact: true,
		label_key: "sidemenu.people",
		default_label: "People",
		gradient: "from-[#F6F16E] to-[#F3C688]",
		icon: "people",
	});
	items.push(NavItem {
		to: AppRoutes::Settings,
		exact: true,
		label_key: "sidemenu.settings",
		default_label: "Settings",
		gradient: "from-[#C7E2E2] to-[#96AFBA]",
		icon: "settings",
	});

	items
}

/// Decides whether the Places entry is shown. No query (no credential), a
/// pending query and a failed query all count as disabled.
pub fn places_enabled(result: Option<&Result<MapboxTokenResponse, ApiError>>) -> bool {
	result
		.and_then(|result| result.as_ref().ok())
		.is_some_and(MapboxTokenResponse::map_enabled)
}

/// The primary navigation bar for the top level app sections
#[component]
pub fn SideMenu() -> impl IntoView {
	let t = use_translation();

	// The feature query is only registered for a logged in session, so no
	// unauthorized fetch ever goes out.
	let mapbox = auth_token().map(|_| mapbox_enabled_query().use_query(|| MapboxEnabledTag));
	let map_enabled = move || {
		mapbox
			.as_ref()
			.is_some_and(|query| places_enabled(query.data.get().as_ref()))
	};

	view! {
		<ul class="flex justify-around absolute w-full bottom-0 bg-white py-4 px-2 shadow-separator z-10">
			{move || {
				nav_items(map_enabled())
					.into_iter()
					.map(|item| {
						view! {
							<SideButton
								to={item.to}
								exact={item.exact}
								label={t(item.label_key, item.default_label)}
								gradient={item.gradient.to_string()}
								icon={item.icon.to_string()}
							/>
						}
					})
					.collect_view()
			}}
		</ul>
	}
}

#[cfg(test)]
mod tests {
	use super::{nav_items, places_enabled};
	use crate::{
		api::{ApiError, MapboxTokenResponse},
		utils::AppRoutes,
	};

	#[test]
	fn fixed_entries_are_always_present() {
		let routes = nav_items(false)
			.iter()
			.map(|item| item.to)
			.collect::<Vec<_>>();

		assert_eq!(
			routes,
			vec![
				AppRoutes::Photos,
				AppRoutes::Albums,
				AppRoutes::People,
				AppRoutes::Settings,
			]
		);
	}

	#[test]
	fn places_sits_between_albums_and_people_when_enabled() {
		let routes = nav_items(true)
			.iter()
			.map(|item| item.to)
			.collect::<Vec<_>>();

		assert_eq!(
			routes,
			vec![
				AppRoutes::Photos,
				AppRoutes::Albums,
				AppRoutes::Places,
				AppRoutes::People,
				AppRoutes::Settings,
			]
		);
	}

	#[test]
	fn places_is_disabled_without_a_resolved_truthy_flag() {
		assert!(!places_enabled(None));
		assert!(!places_enabled(Some(&Err(ApiError::Request(
			"connection refused".to_string()
		)))));
		assert!(!places_enabled(Some(&Ok(MapboxTokenResponse {
			mapbox_token: None,
		}))));
		assert!(!places_enabled(Some(&Ok(MapboxTokenResponse {
			mapbox_token: Some(String::new()),
		}))));
	}

	#[test]
	fn places_is_enabled_for_a_configured_token() {
		assert!(places_enabled(Some(&Ok(MapboxTokenResponse {
			mapbox_token: Some("pk.abc".to_string()),
		}))));
	}
}
