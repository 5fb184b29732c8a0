//! Request-level contract of the entity services against a mock Taiga server.

use chrono::NaiveDate;
use serde_json::json;
use taiga_api::{
    AttachmentUpload, Epic, Error, HistoryEntry, Issue, Milestone, Project, Resource,
    ResourceService, Taiga, Task, UserStory, WikiPage,
};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn taiga(server: &MockServer) -> Taiga {
    Taiga::new(server.uri()).unwrap()
}

/// Mount a server that fails the test on any request.
async fn silent_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn edit_patches_refreshed_version_for_every_resource() {
    async fn check<R>(service: &ResourceService<R>, server: &MockServer, mut resource: R)
    where
        R: Resource,
    {
        let endpoint = R::ENDPOINT.as_str();
        let id = resource.id();
        let item = format!("/api/v1/{endpoint}/{id}");

        // The PATCH carries the caller's fields with the server's version.
        let mut remote = serde_json::to_value(&resource).unwrap();
        remote["version"] = json!(40);
        let expected = remote.clone();

        Mock::given(method("GET"))
            .and(path(item.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(&remote))
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("PATCH"))
            .and(path(item.as_str()))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(&expected))
            .expect(1)
            .mount(server)
            .await;

        let saved = service.edit(&mut resource).await.unwrap();
        assert_eq!(resource.version(), 40, "{endpoint}");
        assert_eq!(saved.version(), 40, "{endpoint}");
    }

    let server = MockServer::start().await;
    let taiga = taiga(&server).await;

    check(
        &taiga.project,
        &server,
        Project {
            id: 1,
            name: "Roadmap".into(),
            description: "Plans".into(),
            version: 2,
            ..Project::default()
        },
    )
    .await;
    check(
        &taiga.issue,
        &server,
        Issue {
            id: 2,
            project: 1,
            subject: "Crash".into(),
            version: 2,
            ..Issue::default()
        },
    )
    .await;
    check(
        &taiga.task,
        &server,
        Task {
            id: 3,
            project: 1,
            subject: "Fix crash".into(),
            version: 2,
            ..Task::default()
        },
    )
    .await;
    check(
        &taiga.epic,
        &server,
        Epic {
            id: 4,
            project: 1,
            subject: "Stability".into(),
            version: 2,
            ..Epic::default()
        },
    )
    .await;
    check(
        &taiga.user_story,
        &server,
        UserStory {
            id: 5,
            project: 1,
            subject: "As a user I do not crash".into(),
            version: 2,
            ..UserStory::default()
        },
    )
    .await;
    check(
        &taiga.milestone,
        &server,
        Milestone {
            id: 7,
            project: 1,
            name: "Sprint 3".into(),
            estimated_start: NaiveDate::from_ymd_opt(2026, 10, 5),
            estimated_finish: NaiveDate::from_ymd_opt(2026, 10, 19),
            version: 2,
            ..Milestone::default()
        },
    )
    .await;
    check(
        &taiga.wiki,
        &server,
        WikiPage {
            id: 6,
            project: 1,
            slug: "home".into(),
            content: "Hello".into(),
            version: 2,
            ..WikiPage::default()
        },
    )
    .await;
}

#[tokio::test]
async fn edit_without_id_never_reaches_server() {
    let server = silent_server().await;
    let taiga = taiga(&server).await;

    let mut task = Task {
        project: 1,
        subject: "Unsaved".into(),
        ..Task::default()
    };
    assert!(matches!(
        taiga.task.edit(&mut task).await,
        Err(Error::ValidationError(_))
    ));

    let mut project = Project {
        name: "Unsaved".into(),
        description: "Nope".into(),
        ..Project::default()
    };
    assert!(matches!(
        taiga.project.edit(&mut project).await,
        Err(Error::ValidationError(_))
    ));
}

#[tokio::test]
async fn create_checks_mandatory_fields_locally() {
    let server = silent_server().await;
    let taiga = taiga(&server).await;

    let project = Project {
        name: "No description".into(),
        ..Project::default()
    };
    assert!(matches!(
        taiga.project.create(&project).await,
        Err(Error::ValidationError(_))
    ));

    let issue = Issue {
        subject: "No project".into(),
        ..Issue::default()
    };
    assert!(matches!(
        taiga.issue.create(&issue).await,
        Err(Error::ValidationError(_))
    ));

    let task = Task {
        project: 1,
        ..Task::default()
    };
    assert!(matches!(
        taiga.task.create(&task).await,
        Err(Error::ValidationError(_))
    ));

    let milestone = Milestone {
        project: 1,
        name: "Sprint 1".into(),
        ..Milestone::default()
    };
    assert!(matches!(
        taiga.milestone.create(&milestone).await,
        Err(Error::ValidationError(_))
    ));

    let page = WikiPage {
        project: 1,
        slug: "empty".into(),
        ..WikiPage::default()
    };
    assert!(matches!(
        taiga.wiki.create(&page).await,
        Err(Error::ValidationError(_))
    ));
}

#[tokio::test]
async fn list_attachments_sends_parent_for_every_kind() {
    let server = MockServer::start().await;
    for endpoint in ["issues", "tasks", "userstories", "epics"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/{endpoint}/attachments").as_str()))
            .and(query_param("object_id", "9"))
            .and(query_param("project", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "object_id": 9, "project": 3, "name": format!("{endpoint}.txt")}
            ])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let taiga = taiga(&server).await;
    let issue = Issue {
        id: 9,
        project: 3,
        ..Issue::default()
    };
    let task = Task {
        id: 9,
        project: 3,
        ..Task::default()
    };
    let story = UserStory {
        id: 9,
        project: 3,
        ..UserStory::default()
    };
    let epic = Epic {
        id: 9,
        project: 3,
        ..Epic::default()
    };

    assert_eq!(taiga.issue.list_attachments(&issue).await.unwrap()[0].name, "issues.txt");
    assert_eq!(taiga.task.list_attachments(&task).await.unwrap()[0].name, "tasks.txt");
    assert_eq!(
        taiga.user_story.list_attachments(&story).await.unwrap()[0].name,
        "userstories.txt"
    );
    assert_eq!(taiga.epic.list_attachments(&epic).await.unwrap()[0].name, "epics.txt");
}

#[tokio::test]
async fn attachment_upload_through_resource_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tasks/attachments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12, "object_id": 9, "project": 3, "name": "plan.txt"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let taiga = taiga(&server).await;
    let task = Task {
        id: 9,
        project: 3,
        ..Task::default()
    };
    let attachment = taiga
        .task
        .create_attachment(AttachmentUpload::new("plan.txt", "step one"), &task)
        .await
        .unwrap();
    assert_eq!(attachment.object_id, 9);
}

#[tokio::test]
async fn empty_comment_never_reaches_server() {
    let server = silent_server().await;
    let taiga = taiga(&server).await;

    let epic = Epic {
        id: 4,
        project: 1,
        ..Epic::default()
    };
    taiga
        .history
        .create_history_entry(&HistoryEntry::comment(""), &epic, Epic::ENDPOINT)
        .await
        .unwrap();
}

#[tokio::test]
async fn comment_on_task_uses_remote_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "project": 1, "subject": "Fix crash", "version": 12
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/tasks/3"))
        .and(body_json(json!({"version": 12, "comment": "Done in #42"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let taiga = taiga(&server).await;
    let task = Task {
        id: 3,
        project: 1,
        version: 1,
        ..Task::default()
    };
    taiga
        .history
        .create_history_entry(&HistoryEntry::comment("Done in #42"), &task, Task::ENDPOINT)
        .await
        .unwrap();
}

#[tokio::test]
async fn mapped_services_list_within_project() {
    let server = MockServer::start().await;
    for endpoint in ["epics", "issues", "milestones", "tasks", "userstories", "wiki"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/{endpoint}").as_str()))
            .and(query_param("project", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut taiga = taiga(&server).await;
    let mapped = taiga.configure_mapped_services(7).clone();
    assert!(taiga.are_mapped_services_configured());

    assert!(mapped.epic.list(None).await.unwrap().is_empty());
    assert!(mapped.issue.list(None).await.unwrap().is_empty());
    assert!(mapped.milestone.list(None).await.unwrap().is_empty());
    assert!(mapped.task.list(None).await.unwrap().is_empty());
    assert!(mapped.user_story.list(None).await.unwrap().is_empty());
    assert!(mapped.wiki.list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn server_rejection_surfaces_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/issues/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "project": 1, "subject": "Crash", "version": 5
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/issues/2"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"version":"The version doesn't match with the current one"}"#),
        )
        .mount(&server)
        .await;

    let taiga = taiga(&server).await;
    let mut issue = Issue {
        id: 2,
        project: 1,
        subject: "Crash".into(),
        ..Issue::default()
    };
    match taiga.issue.edit(&mut issue).await {
        Err(Error::BadRequest(body)) => assert!(body.contains("version doesn't match")),
        other => panic!("unexpected result: {other:?}"),
    }
}
