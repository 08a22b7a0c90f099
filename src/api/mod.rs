use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::constants;

/// The errors a GraphQL request can surface. All payloads are plain strings
/// so that cached query results stay [`Clone`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
	/// The request never produced a response
	#[error("request failed: {0}")]
	Request(String),
	/// The server answered with a GraphQL-level error
	#[error("graphql error: {0}")]
	GraphQl(String),
	/// The response body could not be decoded
	#[error("malformed response: {0}")]
	Response(String),
}

/// Query for the current user's admin flag
pub const ADMIN_QUERY: &str = "query adminQuery { myUser { admin } }";

/// Query for the map feature flag. A configured token means the Places
/// section is available
pub const MAPBOX_QUERY: &str = "query mapboxEnabledQuery { mapboxToken }";

#[derive(Debug, Serialize)]
struct GraphQlRequest {
	query: &'static str,
}

/// A single error entry in a GraphQL response
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
	/// The human readable message of the error
	pub message: String,
}

/// The envelope every GraphQL response arrives in
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
	/// The data of the response, if the document resolved
	pub data: Option<T>,
	/// Any errors the server reported
	pub errors: Option<Vec<GraphQlError>>,
}

/// Response body of [`ADMIN_QUERY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminQueryResponse {
	/// The currently authenticated user, if the session token resolved to
	/// one
	pub my_user: Option<MyUser>,
}

/// The authenticated user as seen by the admin query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyUser {
	/// Whether the user holds the admin role
	pub admin: bool,
}

/// Response body of [`MAPBOX_QUERY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapboxTokenResponse {
	/// The configured map token, if any
	pub mapbox_token: Option<String>,
}

impl MapboxTokenResponse {
	/// The map feature counts as enabled only for a non-empty token
	pub fn map_enabled(&self) -> bool {
		self.mapbox_token
			.as_deref()
			.is_some_and(|token| !token.is_empty())
	}
}

/// Posts a GraphQL document to the API endpoint and unwraps the response
/// envelope. The session token, when present, is sent as a bearer token.
pub async fn post_graphql<T>(
	document: &'static str,
	auth_token: Option<String>,
) -> Result<T, ApiError>
where
	T: DeserializeOwned,
{
	let endpoint = format!(
		"{}{}",
		leptos::window().location().origin().unwrap_or_default(),
		constants::GRAPHQL_ENDPOINT,
	);

	let mut request = reqwest::Client::new()
		.post(endpoint)
		.json(&GraphQlRequest { query: document });
	if let Some(token) = auth_token {
		request = request.bearer_auth(token);
	}

	let response = request
		.send()
		.await
		.map_err(|err| ApiError::Request(err.to_string()))?;

	let body = response
		.json::<GraphQlResponse<T>>()
		.await
		.map_err(|err| ApiError::Response(err.to_string()))?;

	if let Some(error) = body.errors.into_iter().flatten().next() {
		return Err(ApiError::GraphQl(error.message));
	}

	body.data
		.ok_or_else(|| ApiError::Response("response contained no data".to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn admin_response_deserializes_from_envelope() {
		let body = serde_json::from_str::<GraphQlResponse<AdminQueryResponse>>(
			r#"{"data":{"myUser":{"admin":true}}}"#,
		)
		.unwrap();

		assert_eq!(
			body.data,
			Some(AdminQueryResponse {
				my_user: Some(MyUser { admin: true }),
			})
		);
		assert!(body.errors.is_none());
	}

	#[test]
	fn missing_user_deserializes_as_none() {
		let body = serde_json::from_str::<GraphQlResponse<AdminQueryResponse>>(
			r#"{"data":{"myUser":null},"errors":[{"message":"unauthorized"}]}"#,
		)
		.unwrap();

		assert_eq!(body.data.unwrap().my_user, None);
		assert_eq!(body.errors.unwrap()[0].message, "unauthorized");
	}

	#[test]
	fn map_flag_is_truthy_only_for_a_non_empty_token() {
		let enabled = serde_json::from_str::<MapboxTokenResponse>(
			r#"{"mapboxToken":"pk.abc"}"#,
		)
		.unwrap();
		assert!(enabled.map_enabled());

		let empty =
			serde_json::from_str::<MapboxTokenResponse>(r#"{"mapboxToken":""}"#).unwrap();
		assert!(!empty.map_enabled());

		let absent =
			serde_json::from_str::<MapboxTokenResponse>(r#"{"mapboxToken":null}"#).unwrap();
		assert!(!absent.map_enabled());
	}
}
