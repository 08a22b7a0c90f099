use crate::prelude::*;

/// The authorization predicate: the session must resolve to a user, and the
/// user must hold the admin role when one is required. Pending and failed
/// queries evaluate to unauthorized.
pub fn viewer_authorized(
	result: Option<&Result<AdminQueryResponse, ApiError>>,
	admin_only: bool,
) -> bool {
	result
		.and_then(|result| result.as_ref().ok())
		.and_then(|data| data.my_user.as_ref())
		.is_some_and(|user| !admin_only || user.admin)
}

/// Renders its children only when the current session resolves to a user.
/// Without a credential the validating query is never issued and nothing is
/// rendered.
#[component]
pub fn Authorized(
	/// Whether the viewer must also hold the admin role
	#[prop(optional)]
	admin_only: bool,
	/// The children to gate
	children: ChildrenFn,
) -> impl IntoView {
	let query = auth_token().map(|_| admin_query().use_query(|| AdminTag));

	move || {
		query
			.as_ref()
			.is_some_and(|query| viewer_authorized(query.data.get().as_ref(), admin_only))
			.then(|| children())
	}
}

#[cfg(test)]
mod tests {
	use super::viewer_authorized;
	use crate::api::{AdminQueryResponse, ApiError, MyUser};

	#[test]
	fn no_query_means_unauthorized() {
		assert!(!viewer_authorized(None, false));
	}

	#[test]
	fn pending_or_failed_queries_are_unauthorized() {
		assert!(!viewer_authorized(
			Some(&Err(ApiError::GraphQl("unauthorized".to_string()))),
			false,
		));
		assert!(!viewer_authorized(
			Some(&Ok(AdminQueryResponse { my_user: None })),
			false,
		));
	}

	#[test]
	fn a_resolved_user_is_authorized() {
		let response = AdminQueryResponse {
			my_user: Some(MyUser { admin: false }),
		};

		assert!(viewer_authorized(Some(&Ok(response.clone())), false));
		assert!(!viewer_authorized(Some(&Ok(response)), true));
	}

	#[test]
	fn admin_only_requires_the_admin_role() {
		let response = AdminQueryResponse {
			my_user: Some(MyUser { admin: true }),
		};

		assert!(viewer_authorized(Some(&Ok(response)), true));
	}
}
