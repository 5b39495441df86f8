//! Axum HTTP adapter for the GraphQL schema.
//!
//! - `POST /graphql`: JSON body `{ query, variables, operationName }`
//! - `GET /graphql?query=...`: queries only, mutations get `405`
//! - `GET /graphql`: GraphiQL when enabled
//! - `GET /health`: liveness probe

use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql::{ParseRequestError, Request, Variables, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::error::Result;
use crate::graphql::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: BookshelfSchema,
    pub graphiql: bool,
}

/// Query-string form of a GraphQL request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetParams {
    pub query: Option<String>,
    pub variables: Option<String>,
    pub operation_name: Option<String>,
}

pub fn build_router(schema: BookshelfSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { schema, graphiql })
}

pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> Result<()> {
    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        path = GRAPHQL_PATH,
        graphiql = settings.graphiql,
        "GraphQL server listening"
    );

    axum::serve(listener, build_router(schema, settings.graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::warn!(error = %e, "Unable to listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}

async fn graphql_post(
    State(state): State<AppState>,
    req: std::result::Result<GraphQLRequest, GraphQLRejection>,
) -> Response {
    match req {
        Ok(req) => GraphQLResponse::from(state.schema.execute(req.into_inner()).await).into_response(),
        Err(rejection) => {
            tracing::debug!(error = %rejection.0, "Rejected GraphQL POST body");
            let message = match rejection.0 {
                ParseRequestError::InvalidRequest(_) => "POST body sent invalid JSON.".to_string(),
                other => other.to_string(),
            };
            error_response(StatusCode::BAD_REQUEST, &message)
        }
    }
}

async fn graphql_get(State(state): State<AppState>, Query(params): Query<GetParams>) -> Response {
    let Some(query) = params.query.filter(|q| !q.trim().is_empty()) else {
        if state.graphiql {
            return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
        }
        return error_response(StatusCode::BAD_REQUEST, "Must provide query string.");
    };

    let mut request = Request::new(query);
    if let Some(raw) = params.variables.filter(|v| !v.trim().is_empty()) {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => request = request.variables(Variables::from_json(value)),
            Err(_) => return error_response(StatusCode::BAD_REQUEST, "Variables are invalid JSON."),
        }
    }
    if let Some(name) = params.operation_name {
        request = request.operation_name(name);
    }

    if selects_mutation(&request) {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            Json(json!({
                "errors": [{ "message": "Can only perform a mutation operation from a POST request." }]
            })),
        )
            .into_response();
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

/// Whether the operation `request` would run is a mutation.
///
/// Unparseable documents, and documents with several operations but no
/// operation name, return false and are reported by the schema.
pub fn selects_mutation(request: &Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    if request.operation_name.is_none() && document.operations.iter().count() > 1 {
        return false;
    }

    document.operations.iter().any(|(name, operation)| {
        let selected = match request.operation_name.as_deref() {
            Some(wanted) => name.is_some_and(|n| n.as_str() == wanted),
            None => true,
        };
        selected && operation.node.ty == OperationType::Mutation
    })
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "errors": [{ "message": message }] }))).into_response()
}

async fn health_handler() -> impl IntoResponse {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_mutation() {
        assert!(selects_mutation(&Request::new(
            r#"mutation { addBook(name: "x", authorId: 1) { id } }"#
        )));
        assert!(!selects_mutation(&Request::new("{ books { id } }")));
        assert!(!selects_mutation(&Request::new("query { books { id } }")));
        assert!(!selects_mutation(&Request::new("{ books {")));
    }

    #[test]
    fn test_selects_mutation_honours_operation_name() {
        let document = r#"
            query Read { books { id } }
            mutation Write { addBook(name: "x", authorId: 1) { id } }
        "#;

        assert!(!selects_mutation(
            &Request::new(document).operation_name("Read")
        ));
        assert!(selects_mutation(
            &Request::new(document).operation_name("Write")
        ));
    }

    #[test]
    fn test_selects_mutation_ambiguous_document_left_to_schema() {
        let document = r#"
            query Read { books { id } }
            mutation Write { addBook(name: "x", authorId: 1) { id } }
        "#;

        assert!(!selects_mutation(&Request::new(document)));
    }
}
