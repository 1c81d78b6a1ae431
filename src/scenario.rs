//! The sequential smoke scenario.
//!
//! A fixed, ordered walk through the Taskboard API: authenticate, build a
//! workspace → project → sections → tasks hierarchy, then exercise task
//! update, subtask, comment, dependency, section-move, my-tasks and search
//! endpoints. Each step consumes only identifiers produced by earlier steps,
//! and the first failure aborts the rest of the run. Nothing created on the
//! server is cleaned up afterwards, so re-running the scenario against the
//! same server accumulates duplicate data.

use chrono::{Duration, Utc};
use serde_json::json;

use crate::client::{ApiClient, NewTask};
use crate::config::Config;
use crate::error::ApiError;
use crate::model::{Section, Task};
use crate::progress;

const WORKSPACE_NAME: &str = "Integration Test WS";
const PROJECT_NAME: &str = "Test Project";
const SECTION_NAMES: [&str; 3] = ["To Do", "In Progress", "Done"];
const SUBTASK_TITLE: &str = "Research design trends";
const SEARCH_QUERY: &str = "Design";

/// Identifiers and counts collected over a successful run.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub workspace_id: String,
    pub project_id: String,
    pub section_ids: Vec<String>,
    pub task_ids: Vec<String>,
    pub subtask_id: String,
    pub project_task_count: usize,
    pub my_task_count: usize,
    pub search_hit_count: usize,
}

/// Title, section index and initial state for one of the three seed tasks.
struct TaskSeed {
    title: &'static str,
    section: usize,
    status: &'static str,
    priority: &'static str,
}

const TASK_SEEDS: [TaskSeed; 3] = [
    TaskSeed {
        title: "Design Homepage",
        section: 0,
        status: "todo",
        priority: "high",
    },
    TaskSeed {
        title: "Build API",
        section: 1,
        status: "in_progress",
        priority: "urgent",
    },
    TaskSeed {
        title: "Setup Database",
        section: 2,
        status: "completed",
        priority: "medium",
    },
];

/// Run the full scenario against the server named in `config`.
///
/// Steps execute strictly in order; the first [`ApiError`] propagates out
/// and no further requests are issued.
pub async fn run_scenario(config: &Config) -> Result<ScenarioOutcome, ApiError> {
    let mut client = ApiClient::new(config).map_err(|source| ApiError::Transport {
        step: "client setup",
        source,
    })?;

    progress::banner("Taskboard smoke test");

    // 1. Login
    progress::step(1, "Authenticating user...");
    client.login(&config.email, &config.password).await?;
    progress::success("user authenticated");

    // 2. Workspace
    progress::step(2, "Creating workspace...");
    let workspace_id = client
        .create_workspace(WORKSPACE_NAME, "Testing tasks")
        .await?;
    progress::success(&format!("workspace created: {}", workspace_id));

    // 3. Project
    progress::step(3, "Creating project...");
    let project_id = client
        .create_project(
            PROJECT_NAME,
            "Project for task testing",
            &workspace_id,
            "#06b6d4",
        )
        .await?;
    progress::success(&format!("project created: {}", project_id));

    // 4. Sections, in board order
    progress::step(4, "Adding sections...");
    let mut sections: Vec<Section> = Vec::with_capacity(SECTION_NAMES.len());
    for (order, name) in SECTION_NAMES.iter().enumerate() {
        let section = client.add_section(&project_id, name, order).await?;
        progress::success(&format!("section created: {}", name));
        sections.push(section);
    }

    // 5. Tasks, one per section, due a week out
    progress::step(5, "Creating tasks...");
    let due_date = (Utc::now() + Duration::days(7)).to_rfc3339();
    let mut tasks: Vec<Task> = Vec::with_capacity(TASK_SEEDS.len());
    for seed in &TASK_SEEDS {
        let task = client
            .create_task(&NewTask {
                title: seed.title,
                project: &project_id,
                section: &sections[seed.section].id,
                status: seed.status,
                priority: seed.priority,
                due_date: due_date.clone(),
            })
            .await?;
        progress::success(&format!("task created: {}", seed.title));
        tasks.push(task);
    }

    // 6. Project task list
    progress::step(6, "Fetching all tasks...");
    let project_tasks = client.list_tasks(&project_id).await?;
    progress::success(&format!("fetched {} tasks", project_tasks.len()));

    // All remaining single-task operations target the first created task.
    let task_id = tasks[0].id.clone();

    // 7. Status/priority update
    progress::step(7, "Updating task...");
    client
        .update_task(
            &task_id,
            &json!({ "status": "in_progress", "priority": "urgent" }),
        )
        .await?;
    progress::success("task updated");

    // 8. Subtask
    progress::step(8, "Adding subtask...");
    let subtask_id = client.add_subtask(&task_id, SUBTASK_TITLE).await?;
    progress::success("subtask added");

    // 9. Complete the subtask
    progress::step(9, "Completing subtask...");
    client.update_subtask(&task_id, &subtask_id, true).await?;
    progress::success("subtask marked as completed");

    // 10. Comment
    progress::step(10, "Adding comment...");
    client
        .add_comment(&task_id, "Started working on this task")
        .await?;
    progress::success("comment added");

    // 11. Dependency: first task depends on the third
    progress::step(11, "Adding task dependency...");
    client.add_dependency(&task_id, &tasks[2].id).await?;
    progress::success("task dependency added");

    // 12. Move the task into "In Progress"
    progress::step(12, "Moving task between sections...");
    client
        .update_task(&task_id, &json!({ "section": sections[1].id }))
        .await?;
    progress::success("task moved to new section");

    // 13. Personal task list
    progress::step(13, "Fetching my tasks...");
    let my_tasks = client.my_tasks().await?;
    progress::success(&format!("fetched {} personal tasks", my_tasks.len()));

    // 14. Search
    progress::step(14, "Searching tasks...");
    let search_hits = client.search_tasks(SEARCH_QUERY).await?;
    progress::success(&format!("found {} matching tasks", search_hits.len()));
    if search_hits.is_empty() {
        // Non-fatal, but worth flagging: "Design Homepage" was created above.
        tracing::warn!(query = SEARCH_QUERY, "search returned no hits");
    }

    let outcome = ScenarioOutcome {
        workspace_id,
        project_id,
        section_ids: sections.into_iter().map(|s| s.id).collect(),
        task_ids: tasks.into_iter().map(|t| t.id).collect(),
        subtask_id,
        project_task_count: project_tasks.len(),
        my_task_count: my_tasks.len(),
        search_hit_count: search_hits.len(),
    };

    print_summary(&outcome);
    Ok(outcome)
}

fn print_summary(outcome: &ScenarioOutcome) {
    progress::banner("All steps passed");
    println!("Test data created:");
    println!("  workspace: {}", outcome.workspace_id);
    println!("  project:   {}", outcome.project_id);
    println!("  tasks:     {}", outcome.task_ids.len());
}
