//! Askama templates.
//!
//! Template structs for the fixture pages and the index. One struct per
//! view; struct and template file are named after the fixture they render.

use askama::Template;
use askama_web::WebTemplate;

/// Index page listing every fixture.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub fixtures: &'static [&'static str],
}

#[derive(Template, WebTemplate)]
#[template(path = "test/DuplicateEntriesOnSameSinkTest.html")]
pub struct DuplicateEntriesOnSameSinkTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/SameEntryDifferentKeyTest.html")]
pub struct SameEntryDifferentKeyTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/DifferentEntriesOnDifferentSinksTest.html")]
pub struct DifferentEntriesOnDifferentSinksTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/SameEntryDifferentSinksTest.html")]
pub struct SameEntryDifferentSinksTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/OneEntryWithOneDependencyTest.html")]
pub struct OneEntryWithOneDependencyTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/OneEntryWithOneAlreadyDeclaredDependencyTest.html")]
pub struct OneEntryWithOneAlreadyDeclaredDependencyTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/OneEntryWithOneAlreadyDeclaredDependencyInPreviousSinkTest.html")]
pub struct OneEntryWithOneAlreadyDeclaredDependencyInPreviousSinkTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/OneEntryWithOneAlreadyDeclaredDependencyInNextSinkTest.html")]
pub struct OneEntryWithOneAlreadyDeclaredDependencyInNextSinkTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/OneDependencyWithNoDependantsTest.html")]
pub struct OneDependencyWithNoDependantsTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/SameEntryWithinAPartialTest.html")]
pub struct SameEntryWithinAPartialTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/SameEntryWithinNestedPartialsTest.html")]
pub struct SameEntryWithinNestedPartialsTest;

#[derive(Template, WebTemplate)]
#[template(path = "test/SinkBeforeNestedContentWithEntry.html")]
pub struct SinkBeforeNestedContentWithEntry;

#[derive(Template, WebTemplate)]
#[template(path = "test/SinkBeforeNestedContentWithNestedEntries.html")]
pub struct SinkBeforeNestedContentWithNestedEntries;
