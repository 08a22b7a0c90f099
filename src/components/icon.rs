use crate::prelude::*;

/// Icon component. Renders an icon from the side menu sprite.
#[component]
pub fn Icon(
	/// The name of the icon within the sprite
	#[prop(into)]
	icon: MaybeSignal<String>,
	/// Additional class names to apply to the icon, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	view! {
		<svg
			class={move || format!("icon {}", class.get())}
			viewBox="0 0 24 24"
			fill="white"
		>
			<use_ href={move || format!("{}#{}", constants::ICON_SPRITE, icon.get())}/>
		</svg>
	}
}
