use leptos_meta::Title;

use crate::prelude::*;

/// Formats the document title of a view. Every page shares the application
/// suffix; a view without a title falls back to the bare application name.
pub fn page_title(title: &str) -> String {
	if title.is_empty() {
		"Photoview".to_string()
	} else {
		format!("{title} - Photoview")
	}
}

/// The page chrome every view renders into: the header bar on top, the side
/// menu for authorized viewers, and the given content in a scrollable
/// container.
#[component]
pub fn Layout(
	/// The title of the view, reflected in the document title
	#[prop(into, optional)]
	title: MaybeSignal<String>,
	/// The content of the view
	children: Children,
) -> impl IntoView {
	view! {
		<SidebarProvider>
			<Title text={move || title.get()}/>
			<div class="h-full flex flex-col overflow-hidden relative">
				<Header/>
				<div class="">
					<Authorized>
						<SideMenu/>
					</Authorized>
					<div
						class="px-3 py-3 w-full overflow-y-scroll h-screen flex-grow"
						id="layout-content"
					>
						{children()}
						<div class="h-6"></div>
					</div>
				</div>
			</div>
		</SidebarProvider>
	}
}

#[cfg(test)]
mod tests {
	use super::page_title;

	#[test]
	fn titled_views_carry_the_application_suffix() {
		assert_eq!(page_title("Albums"), "Albums - Photoview");
		assert_eq!(page_title("My album"), "My album - Photoview");
	}

	#[test]
	fn untitled_views_fall_back_to_the_application_name() {
		assert_eq!(page_title(""), "Photoview");
	}
}
