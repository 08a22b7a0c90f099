mod authorized;
mod header;
mod icon;
mod layout;
mod side_button;
mod side_menu;
mod sidebar;

pub use self::{
	authorized::*,
	header::*,
	icon::*,
	layout::*,
	side_button::*,
	side_menu::*,
	sidebar::*,
};
