use crate::prelude::*;

/// The header bar rendered at the top of every page
#[component]
pub fn Header() -> impl IntoView {
	view! {
		<header class="flex items-center justify-between w-full h-[70px] px-4 shadow-separator">
			<h1 class="text-xl">
				<A href={AppRoutes::Photos.to_string()} class="flex items-center gap-2">
					<img class="h-10" src="/photoview-logo.svg" alt=""/>
					"Photoview"
				</A>
			</h1>
		</header>
	}
}
