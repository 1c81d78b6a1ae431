//! Wire types for the Taskboard API.
//!
//! The server wraps created entities in `{"data": ...}` and list endpoints
//! in `{"tasks": [...]}`. Entity ids come back as Mongo-style `_id` strings.

use serde::Deserialize;

/// Generic `{"data": ...}` envelope used by create/auth endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Login response payload.
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    pub token: String,
}

/// A created entity where only the id matters to the runner.
#[derive(Debug, Deserialize)]
pub struct Created {
    #[serde(rename = "_id")]
    pub id: String,
}

/// A section within a project.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Section-creation response payload: the project's full updated section list.
#[derive(Debug, Deserialize)]
pub struct SectionsPayload {
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A subtask on a task.
#[derive(Debug, Clone, Deserialize)]
pub struct Subtask {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A task, as returned by create/list/search endpoints.
///
/// Only the fields the runner reads are modeled; the server sends more.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// List endpoints return `{"tasks": [...]}` without the data envelope.
#[derive(Debug, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Find the section with the given name in a freshly returned section list.
///
/// The server returns the whole updated list on each creation. Matching by
/// name instead of taking the last element keeps the runner correct even if
/// the server changes its ordering.
pub fn pick_section_by_name<'a>(sections: &'a [Section], name: &str) -> Option<&'a Section> {
    sections.iter().find(|s| s.name == name)
}

/// Find the subtask with the given title in an updated task's subtask list.
pub fn pick_subtask_by_title<'a>(subtasks: &'a [Subtask], title: &str) -> Option<&'a Subtask> {
    subtasks.iter().find(|s| s.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_auth_envelope() {
        let body = r#"{"data":{"token":"abc123"}}"#;
        let parsed: Envelope<AuthPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.token, "abc123");
    }

    #[test]
    fn parses_created_entity_with_extra_fields() {
        let body = r##"{"data":{"_id":"64b","name":"Test Project","color":"#06b6d4"}}"##;
        let parsed: Envelope<Created> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.id, "64b");
    }

    #[test]
    fn parses_sections_payload() {
        let body = r#"{"data":{"sections":[
            {"_id":"s1","name":"To Do","order":0},
            {"_id":"s2","name":"In Progress","order":1}
        ]}}"#;
        let parsed: Envelope<SectionsPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.sections.len(), 2);
        assert_eq!(parsed.data.sections[1].name, "In Progress");
    }

    #[test]
    fn pick_section_is_order_independent() {
        let sections = vec![
            Section {
                id: "s2".to_string(),
                name: "In Progress".to_string(),
                order: Some(1),
            },
            Section {
                id: "s1".to_string(),
                name: "To Do".to_string(),
                order: Some(0),
            },
        ];
        let found = pick_section_by_name(&sections, "To Do").unwrap();
        assert_eq!(found.id, "s1");
        assert!(pick_section_by_name(&sections, "Done").is_none());
    }

    #[test]
    fn pick_subtask_matches_title_not_position() {
        let subtasks = vec![
            Subtask {
                id: "sub0".to_string(),
                title: "Existing subtask".to_string(),
                completed: true,
            },
            Subtask {
                id: "sub1".to_string(),
                title: "Research design trends".to_string(),
                completed: false,
            },
        ];
        let found = pick_subtask_by_title(&subtasks, "Research design trends").unwrap();
        assert_eq!(found.id, "sub1");
        assert!(!found.completed);
    }

    #[test]
    fn task_list_tolerates_missing_subtasks_and_extra_fields() {
        let body = r#"{"tasks":[{"_id":"t1","title":"Design Homepage","status":"todo","priority":"high"}]}"#;
        let parsed: TaskList = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.tasks.len(), 1);
        assert_eq!(parsed.tasks[0].title, "Design Homepage");
        assert!(parsed.tasks[0].subtasks.is_empty());
    }
}
