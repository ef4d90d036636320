//! Fixture registry.
//!
//! # Responsibilities
//! - Hold the canonical list of fixture page names
//! - Answer name lookups for the dispatcher and discovery endpoints
//!
//! # Design Decisions
//! - The registry is a static table built at compile time; adding a page
//!   means extending it and providing a matching view template
//! - Names are case-sensitive and must be unique

/// Canonical fixture names, in the order `/fixtures` lists them.
///
/// Each name identifies one scenario page exercised by the browser-side
/// bundling test suite.
pub const FIXTURES: &[&str] = &[
    "DuplicateEntriesOnSameSinkTest",
    "SameEntryDifferentKeyTest",
    "DifferentEntriesOnDifferentSinksTest",
    "SameEntryDifferentSinksTest",
    "OneEntryWithOneDependencyTest",
    "OneEntryWithOneAlreadyDeclaredDependencyTest",
    "OneEntryWithOneAlreadyDeclaredDependencyInPreviousSinkTest",
    "OneEntryWithOneAlreadyDeclaredDependencyInNextSinkTest",
    "OneDependencyWithNoDependantsTest",
    "SameEntryWithinAPartialTest",
    "SameEntryWithinNestedPartialsTest",
    "SinkBeforeNestedContentWithEntry",
    "SinkBeforeNestedContentWithNestedEntries",
];

/// Returns true if `name` identifies a registered fixture page.
pub fn is_registered(name: &str) -> bool {
    FIXTURES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in FIXTURES {
            assert!(seen.insert(name), "duplicate fixture name: {name}");
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert!(is_registered("DuplicateEntriesOnSameSinkTest"));
        assert!(!is_registered("duplicateentriesonsamesinktest"));
        assert!(!is_registered("NonexistentTest"));
    }
}
