use crate::prelude::*;

/// The face grouping overview page
#[component]
pub fn PeoplePage() -> impl IntoView {
	let t = use_translation();

	view! {
		<Layout title={t("sidemenu.people", "People")}>
			<h1 class="text-2xl mb-4">{t("sidemenu.people", "People")}</h1>
		</Layout>
	}
}
