use crate::{pages::*, prelude::*};

/// The main application component. Contains the main router and all the
/// routes.
#[component]
pub fn App() -> impl IntoView {
	view! {
		<Router>
			<Routes>
				<Route path={AppRoutes::Photos.to_string()} view={PhotosPage}/>
				<Route path={AppRoutes::Albums.to_string()} view={AlbumsPage}/>
				<Route path={AppRoutes::Places.to_string()} view={PlacesPage}/>
				<Route path={AppRoutes::People.to_string()} view={PeoplePage}/>
				<Route path={AppRoutes::Settings.to_string()} view={SettingsPage}/>
				<Route path={AppRoutes::Login.to_string()} view={LoginPage}/>
				<Route path="" view={PhotosPage}/>
			</Routes>
		</Router>
	}
}
