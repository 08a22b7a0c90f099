use leptos_query::*;

use crate::prelude::*;

/// Tag for the admin query
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct AdminTag;

/// Query for the current user's admin flag. Used by the authorization gate
/// to validate the session.
pub fn admin_query() -> QueryScope<AdminTag, Result<AdminQueryResponse, ApiError>> {
	let auth_token = auth_token();

	create_query(
		move |_| {
			let auth_token = auth_token.clone();
			async move { post_graphql(ADMIN_QUERY, auth_token).await }
		},
		QueryOptions {
			..Default::default()
		},
	)
}

/// Tag for the map feature flag query
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct MapboxEnabledTag;

/// Query for the map feature flag. Callers must only register this query
/// for a logged in session.
pub fn mapbox_enabled_query() -> QueryScope<MapboxEnabledTag, Result<MapboxTokenResponse, ApiError>>
{
	let auth_token = auth_token();

	create_query(
		move |_| {
			let auth_token = auth_token.clone();
			async move { post_graphql(MAPBOX_QUERY, auth_token).await }
		},
		QueryOptions {
			..Default::default()
		},
	)
}
