use leptos::*;

/// The locales the interface ships strings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
	/// English, the fallback locale
	#[default]
	English,
	/// German
	German,
}

/// The context that holds the active locale
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext(pub RwSignal<Locale>);

/// Provides the locale context to the component tree
pub fn provide_locale() {
	provide_context(LocaleContext(create_rw_signal(Locale::default())));
}

/// Returns a `(key, default)` lookup bound to the active locale. Keys that
/// have no translation for the locale fall back to the given default text.
pub fn use_translation() -> impl Fn(&str, &str) -> String + Copy {
	let locale = use_context::<LocaleContext>().map(|context| context.0);

	move |key, default| {
		let locale = locale.map(|signal| signal.get()).unwrap_or_default();
		translate(locale, key).unwrap_or(default).to_string()
	}
}

fn translate(locale: Locale, key: &str) -> Option<&'static str> {
	match locale {
		Locale::English => match key {
			"sidemenu.photos" => Some("Photos"),
			"sidemenu.albums" => Some("Albums"),
			"sidemenu.places" => Some("Places"),
			"sidemenu.people" => Some("People"),
			"sidemenu.settings" => Some("Settings"),
			_ => None,
		},
		Locale::German => match key {
			"sidemenu.photos" => Some("Fotos"),
			"sidemenu.albums" => Some("Alben"),
			"sidemenu.places" => Some("Orte"),
			"sidemenu.people" => Some("Personen"),
			"sidemenu.settings" => Some("Einstellungen"),
			_ => None,
		},
	}
}

#[cfg(test)]
mod tests {
	use super::{translate, Locale};

	#[test]
	fn known_keys_translate_per_locale() {
		assert_eq!(translate(Locale::English, "sidemenu.places"), Some("Places"));
		assert_eq!(translate(Locale::German, "sidemenu.places"), Some("Orte"));
	}

	#[test]
	fn unknown_keys_fall_back_to_the_default_text() {
		assert_eq!(translate(Locale::English, "sidemenu.missing"), None);
		assert_eq!(translate(Locale::German, "sidemenu.missing"), None);
	}
}
