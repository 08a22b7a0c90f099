use crate::prelude::*;

/// The shared sidebar state. Holds the detail panel content that descendants
/// of the provider may set; [`None`] means the panel is closed.
#[derive(Clone, Copy)]
pub struct SidebarState(RwSignal<Option<View>>);

impl SidebarState {
	/// Replace the panel content and open the panel
	pub fn open(&self, content: View) {
		self.0.set(Some(content));
	}

	/// Close the panel
	pub fn close(&self) {
		self.0.set(None);
	}

	/// The current panel content
	pub fn content(&self) -> Option<View> {
		self.0.get()
	}

	/// Whether the panel currently holds content
	pub fn is_open(&self) -> bool {
		self.0.with(|content| content.is_some())
	}
}

/// Provides a sidebar state scoped to its children. The context is torn down
/// together with the component that rendered it.
#[component]
pub fn SidebarProvider(
	/// The children that may read and set the sidebar state
	children: Children,
) -> impl IntoView {
	provide_context(SidebarState(create_rw_signal(None)));

	children()
}

/// The sidebar state provided by the nearest [`SidebarProvider`]
pub fn use_sidebar() -> SidebarState {
	expect_context::<SidebarState>()
}
