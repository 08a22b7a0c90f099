use crate::prelude::*;

/// The settings page
#[component]
pub fn SettingsPage() -> impl IntoView {
	let t = use_translation();

	view! {
		<Layout title={t("sidemenu.settings", "Settings")}>
			<h1 class="text-2xl mb-4">{t("sidemenu.settings", "Settings")}</h1>
		</Layout>
	}
}
