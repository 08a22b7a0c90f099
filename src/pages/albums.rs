use crate::prelude::*;

/// The albums overview page
#[component]
pub fn AlbumsPage() -> impl IntoView {
	let t = use_translation();

	view! {
		<Layout title={t("sidemenu.albums", "Albums")}>
			<h1 class="text-2xl mb-4">{t("sidemenu.albums", "Albums")}</h1>
		</Layout>
	}
}
