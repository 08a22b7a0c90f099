use crate::prelude::*;

/// Matches a location against a nav destination. `exact` requires the full
/// path to be equal; otherwise the destination may also be a prefix of the
/// location on a segment boundary.
pub fn route_is_active(current: &str, to: &str, exact: bool) -> bool {
	let current = current.trim_end_matches('/');
	let to = to.trim_end_matches('/');

	if exact || current == to {
		current == to
	} else {
		current
			.strip_prefix(to)
			.is_some_and(|rest| rest.starts_with('/'))
	}
}

/// One entry of the side menu: a link with an icon on a gradient tile and an
/// accessible label, highlighted while its destination matches the current
/// location.
#[component]
pub fn SideButton(
	/// The destination of the link
	to: AppRoutes,
	/// Whether the destination must match the location exactly
	#[prop(optional)]
	exact: bool,
	/// The accessible label of the link
	#[prop(into)]
	label: MaybeSignal<String>,
	/// The gradient class of the icon tile
	#[prop(into)]
	gradient: MaybeSignal<String>,
	/// The name of the icon within the sprite
	#[prop(into)]
	icon: MaybeSignal<String>,
) -> impl IntoView {
	let location = use_location();
	let active = move || route_is_active(&location.pathname.get(), &to.to_string(), exact);

	view! {
		<A
			href={to.to_string()}
			class={move || {
				format!(
					"w-12 h-12 rounded-lg {}",
					if active() { "ring-4 ring-gray-200" } else { "" },
				)
			}}
		>
			<li class={move || format!("bg-gradient-to-br {} w-full h-full rounded-lg", gradient.get())}>
				<span class="hidden">{move || label.get()}</span>
				<div class="p-1.5">
					<Icon icon={icon}/>
				</div>
			</li>
		</A>
	}
}

#[cfg(test)]
mod tests {
	use super::route_is_active;

	#[test]
	fn exact_matching_requires_the_full_path() {
		assert!(route_is_active("/photos", "/photos", true));
		assert!(route_is_active("/photos/", "/photos", true));
		assert!(!route_is_active("/photos/123", "/photos", true));
		assert!(!route_is_active("/albums", "/photos", true));
	}

	#[test]
	fn prefix_matching_stops_at_segment_boundaries() {
		assert!(route_is_active("/albums", "/albums", false));
		assert!(route_is_active("/albums/42", "/albums", false));
		assert!(!route_is_active("/albumsextra", "/albums", false));
		assert!(!route_is_active("/people", "/albums", false));
	}
}
