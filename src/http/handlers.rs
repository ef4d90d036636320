//! Request handlers.
//!
//! # Responsibilities
//! - Dispatch `/test/{name}` to the matching fixture view
//! - Serve the index page and the discovery/status JSON
//!
//! # Design Decisions
//! - Dispatch is a pure lookup with no parameters and no side effects;
//!   unknown names get the framework's plain not-found response
//! - `render_fixture` is the only place views are wired to names

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::fixtures::FIXTURES;
use crate::templates::*;

/// Service status reported by `/status`.
#[derive(Serialize)]
pub struct ServiceStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub fixtures: usize,
}

/// Handler for the fixture index page.
pub async fn index() -> impl IntoResponse {
    IndexTemplate { fixtures: FIXTURES }
}

/// Handler for `/test/{name}`.
pub async fn fixture_page(Path(name): Path<String>) -> Result<Response, StatusCode> {
    render_fixture(&name).ok_or(StatusCode::NOT_FOUND)
}

/// Handler for `/status`.
pub async fn get_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        fixtures: FIXTURES.len(),
    })
}

/// Handler for `/fixtures`.
pub async fn get_fixtures() -> Json<&'static [&'static str]> {
    Json(FIXTURES)
}

/// Static name-to-view table. Returns `None` for unregistered names.
fn render_fixture(name: &str) -> Option<Response> {
    let page = match name {
        "DuplicateEntriesOnSameSinkTest" => DuplicateEntriesOnSameSinkTest.into_response(),
        "SameEntryDifferentKeyTest" => SameEntryDifferentKeyTest.into_response(),
        "DifferentEntriesOnDifferentSinksTest" => {
            DifferentEntriesOnDifferentSinksTest.into_response()
        }
        "SameEntryDifferentSinksTest" => SameEntryDifferentSinksTest.into_response(),
        "OneEntryWithOneDependencyTest" => OneEntryWithOneDependencyTest.into_response(),
        "OneEntryWithOneAlreadyDeclaredDependencyTest" => {
            OneEntryWithOneAlreadyDeclaredDependencyTest.into_response()
        }
        "OneEntryWithOneAlreadyDeclaredDependencyInPreviousSinkTest" => {
            OneEntryWithOneAlreadyDeclaredDependencyInPreviousSinkTest.into_response()
        }
        "OneEntryWithOneAlreadyDeclaredDependencyInNextSinkTest" => {
            OneEntryWithOneAlreadyDeclaredDependencyInNextSinkTest.into_response()
        }
        "OneDependencyWithNoDependantsTest" => OneDependencyWithNoDependantsTest.into_response(),
        "SameEntryWithinAPartialTest" => SameEntryWithinAPartialTest.into_response(),
        "SameEntryWithinNestedPartialsTest" => SameEntryWithinNestedPartialsTest.into_response(),
        "SinkBeforeNestedContentWithEntry" => SinkBeforeNestedContentWithEntry.into_response(),
        "SinkBeforeNestedContentWithNestedEntries" => {
            SinkBeforeNestedContentWithNestedEntries.into_response()
        }
        _ => return None,
    };
    Some(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_fixture_renders() {
        for name in FIXTURES {
            let response =
                render_fixture(name).unwrap_or_else(|| panic!("no view wired for {name}"));
            assert_eq!(response.status(), StatusCode::OK, "{name} should render");
        }
    }

    #[test]
    fn unknown_names_do_not_render() {
        assert!(render_fixture("NonexistentTest").is_none());
        assert!(render_fixture("").is_none());
    }
}
