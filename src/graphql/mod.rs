//! GraphQL API Module
//!
//! Schema construction, the axum handlers, and the shared resolver plumbing.
//! Every resolver reads the [`ServerState`] out of the schema data and
//! normalizes its errors into [`AppError`] before they cross the boundary.

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::Mutation;
pub use query::Query;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, ErrorExtensions, Result, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use http::HeaderMap;

use crate::auth::identity_from_headers;
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::RepoError;
use crate::graphql::types::AuthPayload;
use crate::utils::AppError;

/// The executable schema
pub type ServiceSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema with the server state attached as context data
pub fn build_schema(state: ServerState) -> ServiceSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(state)
        .finish()
}

/// Router state for the GraphQL endpoints
#[derive(Clone)]
struct GraphQLState {
    schema: ServiceSchema,
    server: ServerState,
}

/// GraphQL routes: POST executes, GET serves GraphiQL
pub fn router(state: ServerState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(GraphQLState {
            schema,
            server: state,
        })
}

/// Execute a GraphQL request with the caller's optional identity attached.
/// An absent or invalid bearer token never rejects the request; identity
/// enforcement, if any, is each operation's own concern.
async fn graphql_handler(
    State(gql): State<GraphQLState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let identity = identity_from_headers(&headers, gql.server.get_jwt_service());
    if let Some(user) = &identity {
        tracing::debug!(username = %user.username, "request authenticated");
    }

    gql.schema
        .execute(req.into_inner().data(identity))
        .await
        .into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

// ── Shared resolver plumbing ────────────────────────────────────────

/// Normalize a repository error for the API boundary
pub(crate) fn repo_error(err: RepoError) -> async_graphql::Error {
    AppError::from(err).extend()
}

/// Issue a token for `user` and pair it with the user in an [`AuthPayload`]
pub(crate) fn auth_payload(state: &ServerState, user: User) -> Result<AuthPayload> {
    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.username, &user.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)).extend())?;

    Ok(AuthPayload {
        token,
        user: user.into(),
    })
}
