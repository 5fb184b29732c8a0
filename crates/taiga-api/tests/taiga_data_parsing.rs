//! Integration tests for parsing Taiga API data.
//!
//! These tests validate that the taiga-api models deserialize response bodies as
//! the Taiga backend produces them.

use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use taiga_api::{Attachment, HistoryEntry, Issue, ListEnvelope, Project, ProjectListEntry};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture<T: DeserializeOwned>(name: &str) -> T {
    let fixture_path = fixtures_dir().join(name);
    let json_data = fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize {name}: {e}"))
}

#[test]
fn test_deserialize_issue_list() {
    let issues: Vec<Issue> = load_fixture("issue_list.json");
    assert_eq!(issues.len(), 2, "Expected 2 issues in test data");

    let open = &issues[0];
    assert_eq!(open.id, 1452);
    assert_eq!(open.reference, 31);
    assert_eq!(open.version, 4);
    assert_eq!(open.issue_type, Some(7));
    assert_eq!(open.watchers.as_deref(), Some(&[118, 203][..]));
    assert_eq!(open.milestone, None);
    assert_eq!(open.is_closed, Some(false));
    assert_eq!(
        open.due_date,
        NaiveDate::from_ymd_opt(2026, 11, 2),
        "due date should parse as a calendar date"
    );
    assert_eq!(open.tags.as_ref().map(Vec::len), Some(2));

    let blocked = &issues[1];
    assert_eq!(blocked.assigned_to, None);
    assert_eq!(blocked.is_blocked, Some(true));
    assert_eq!(
        blocked.blocked_note.as_deref(),
        Some("Waiting for the stats rewrite")
    );
}

#[test]
fn test_issue_reserializes_without_server_noise() {
    let issues: Vec<Issue> = load_fixture("issue_list.json");
    let value = serde_json::to_value(&issues[0]).unwrap();

    assert_eq!(value["ref"], 31);
    assert_eq!(value["type"], 7);
    assert!(value.get("status_extra_info").is_none());
    assert!(value.get("milestone").is_none());
}

#[test]
fn test_deserialize_project_detail() {
    let project: Project = load_fixture("project_detail.json");

    assert_eq!(project.id, 17);
    assert_eq!(project.slug, "ana-storefront");
    assert_eq!(project.version, 12);
    assert_eq!(project.is_private, Some(true));
    assert_eq!(project.total_story_points, Some(240.0));
    assert_eq!(
        project.tags,
        Some(vec!["shop".to_string(), "web".to_string()])
    );
    assert_eq!(
        project.modified_date.map(|date| date.year()),
        Some(2026)
    );
}

#[test]
fn test_deserialize_paginated_project_list() {
    let page: ListEnvelope<ProjectListEntry> = load_fixture("project_list_page.json");
    let entries = page.into_items();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].i_am_owner, Some(true));
    assert_eq!(entries[1].my_permissions, vec!["view_project".to_string()]);

    let projects: Vec<Project> = entries.into_iter().map(Project::from).collect();
    assert_eq!(projects[1].name, "Warehouse");
    assert_eq!(projects[1].description, "Stock tracking");
}

#[test]
fn test_deserialize_history_keeps_server_order() {
    let history: Vec<HistoryEntry> = load_fixture("issue_history.json");
    assert_eq!(history.len(), 2);

    let change = &history[0];
    assert_eq!(change.entry_type, Some(1));
    assert_eq!(change.comment, "Reproduced on Firefox and Chrome.");
    assert_eq!(
        change.user.as_ref().and_then(|user| user.username.as_deref()),
        Some("bruno")
    );
    assert!(change.values_diff.is_some());

    let creation = &history[1];
    assert_eq!(creation.entry_type, Some(2));
    assert!(creation.comment.is_empty());
    assert_eq!(creation.is_snapshot, Some(true));
}

#[test]
fn test_deserialize_attachment_list() {
    let attachments: Vec<Attachment> = load_fixture("attachment_list.json");
    assert_eq!(attachments.len(), 1);

    let screenshot = &attachments[0];
    assert_eq!(screenshot.object_id, 1452);
    assert_eq!(screenshot.project, 17);
    assert_eq!(screenshot.size, Some(48213));
    assert_eq!(screenshot.preview_url, None);
    assert!(!screenshot.is_deprecated);
}
