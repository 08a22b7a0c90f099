use crate::prelude::*;

/// The photo timeline, the landing page of the application
#[component]
pub fn PhotosPage() -> impl IntoView {
	let t = use_translation();

	view! {
		<Layout title={t("sidemenu.photos", "Photos")}>
			<h1 class="text-2xl mb-4">{t("sidemenu.photos", "Photos")}</h1>
		</Layout>
	}
}
