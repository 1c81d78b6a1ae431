//! Typed HTTP client for the Taskboard API.
//!
//! One method per endpoint the smoke scenario touches. Every method checks
//! the status code the scenario expects for that step and captures the
//! response body so a failure can be reported verbatim. After `login` the
//! client attaches `Authorization: Bearer <token>` to every request.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::ApiError;
use crate::model::{
    pick_section_by_name, pick_subtask_by_title, AuthPayload, Created, Envelope, Section,
    SectionsPayload, Task, TaskList,
};

/// Fields for task creation.
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub project: &'a str,
    pub section: &'a str,
    pub status: &'a str,
    pub priority: &'a str,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

/// Taskboard API client bound to one base URL and (after login) one token.
pub struct ApiClient {
    http: Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from config.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base: config.api_base.clone(),
            token: None,
        })
    }

    /// Authenticate and store the bearer token for all subsequent requests.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String, ApiError> {
        let step = "login";
        let body = self
            .execute(
                step,
                StatusCode::OK,
                self.http
                    .post(format!("{}/auth/login", self.base))
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;
        let parsed: Envelope<AuthPayload> = parse(step, &body)?;
        self.token = Some(parsed.data.token.clone());
        Ok(parsed.data.token)
    }

    /// Create a workspace, returning its id. Expects HTTP 201.
    pub async fn create_workspace(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, ApiError> {
        let step = "create workspace";
        let body = self
            .execute(
                step,
                StatusCode::CREATED,
                self.http
                    .post(format!("{}/workspaces", self.base))
                    .json(&json!({ "name": name, "description": description })),
            )
            .await?;
        let parsed: Envelope<Created> = parse(step, &body)?;
        Ok(parsed.data.id)
    }

    /// Create a project in a workspace, returning its id. Expects HTTP 201.
    pub async fn create_project(
        &self,
        name: &str,
        description: &str,
        workspace_id: &str,
        color: &str,
    ) -> Result<String, ApiError> {
        let step = "create project";
        let body = self
            .execute(
                step,
                StatusCode::CREATED,
                self.http.post(format!("{}/projects", self.base)).json(&json!({
                    "name": name,
                    "description": description,
                    "workspace": workspace_id,
                    "color": color,
                })),
            )
            .await?;
        let parsed: Envelope<Created> = parse(step, &body)?;
        Ok(parsed.data.id)
    }

    /// Add a section to a project. Expects HTTP 200.
    ///
    /// The server answers with the project's full updated section list; the
    /// new section is located in it by name rather than by position, so a
    /// server-side reordering cannot make the runner pick the wrong one.
    pub async fn add_section(
        &self,
        project_id: &str,
        name: &str,
        order: usize,
    ) -> Result<Section, ApiError> {
        let step = "add section";
        let body = self
            .execute(
                step,
                StatusCode::OK,
                self.http
                    .post(format!("{}/projects/{}/sections", self.base, project_id))
                    .json(&json!({ "name": name, "order": order })),
            )
            .await?;
        let parsed: Envelope<SectionsPayload> = parse(step, &body)?;
        pick_section_by_name(&parsed.data.sections, name)
            .cloned()
            .ok_or_else(|| ApiError::Shape {
                step,
                detail: format!("no section named {:?} in response", name),
            })
    }

    /// Create a task. Expects HTTP 201.
    pub async fn create_task(&self, task: &NewTask<'_>) -> Result<Task, ApiError> {
        let step = "create task";
        let body = self
            .execute(
                step,
                StatusCode::CREATED,
                self.http.post(format!("{}/tasks", self.base)).json(task),
            )
            .await?;
        let parsed: Envelope<Task> = parse(step, &body)?;
        Ok(parsed.data)
    }

    /// List a project's tasks. Expects HTTP 200.
    pub async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        let step = "list tasks";
        let body = self
            .execute(
                step,
                StatusCode::OK,
                self.http
                    .get(format!("{}/tasks?project={}", self.base, project_id)),
            )
            .await?;
        let parsed: TaskList = parse(step, &body)?;
        Ok(parsed.tasks)
    }

    /// Apply a partial update to a task. Expects HTTP 200.
    ///
    /// Used both for status/priority changes and for moving a task to a
    /// different section.
    pub async fn update_task(
        &self,
        task_id: &str,
        fields: &serde_json::Value,
    ) -> Result<(), ApiError> {
        let step = "update task";
        self.execute(
            step,
            StatusCode::OK,
            self.http
                .put(format!("{}/tasks/{}", self.base, task_id))
                .json(fields),
        )
        .await?;
        Ok(())
    }

    /// Add a subtask to a task, returning the new subtask's id. Expects HTTP 200.
    ///
    /// The server answers with the updated task; the new subtask is located
    /// by title, not by position.
    pub async fn add_subtask(&self, task_id: &str, title: &str) -> Result<String, ApiError> {
        let step = "add subtask";
        let body = self
            .execute(
                step,
                StatusCode::OK,
                self.http
                    .post(format!("{}/tasks/{}/subtasks", self.base, task_id))
                    .json(&json!({ "title": title })),
            )
            .await?;
        let parsed: Envelope<Task> = parse(step, &body)?;
        pick_subtask_by_title(&parsed.data.subtasks, title)
            .map(|s| s.id.clone())
            .ok_or_else(|| ApiError::Shape {
                step,
                detail: format!("no subtask titled {:?} in response", title),
            })
    }

    /// Set a subtask's completion flag. Expects HTTP 200.
    pub async fn update_subtask(
        &self,
        task_id: &str,
        subtask_id: &str,
        completed: bool,
    ) -> Result<(), ApiError> {
        let step = "update subtask";
        self.execute(
            step,
            StatusCode::OK,
            self.http
                .put(format!(
                    "{}/tasks/{}/subtasks/{}",
                    self.base, task_id, subtask_id
                ))
                .json(&json!({ "completed": completed })),
        )
        .await?;
        Ok(())
    }

    /// Add a comment to a task. Expects HTTP 200.
    pub async fn add_comment(&self, task_id: &str, content: &str) -> Result<(), ApiError> {
        let step = "add comment";
        self.execute(
            step,
            StatusCode::OK,
            self.http
                .post(format!("{}/tasks/{}/comments", self.base, task_id))
                .json(&json!({ "content": content })),
        )
        .await?;
        Ok(())
    }

    /// Record that `task_id` depends on `dependency_id`. Expects HTTP 200.
    pub async fn add_dependency(
        &self,
        task_id: &str,
        dependency_id: &str,
    ) -> Result<(), ApiError> {
        let step = "add dependency";
        self.execute(
            step,
            StatusCode::OK,
            self.http
                .post(format!("{}/tasks/{}/dependencies", self.base, task_id))
                .json(&json!({ "dependencyId": dependency_id })),
        )
        .await?;
        Ok(())
    }

    /// List tasks assigned to the authenticated user. Expects HTTP 200.
    pub async fn my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let step = "my tasks";
        let body = self
            .execute(
                step,
                StatusCode::OK,
                self.http.get(format!("{}/tasks/my-tasks", self.base)),
            )
            .await?;
        let parsed: TaskList = parse(step, &body)?;
        Ok(parsed.tasks)
    }

    /// Search tasks by keyword. Expects HTTP 200.
    pub async fn search_tasks(&self, query: &str) -> Result<Vec<Task>, ApiError> {
        let step = "search tasks";
        let body = self
            .execute(
                step,
                StatusCode::OK,
                self.http.get(format!(
                    "{}/tasks/search?q={}",
                    self.base,
                    urlencoding::encode(query)
                )),
            )
            .await?;
        let parsed: TaskList = parse(step, &body)?;
        Ok(parsed.tasks)
    }

    /// Send a request, attach the bearer token if present, and enforce the
    /// step's expected status. Returns the raw body for the caller to parse.
    async fn execute(
        &self,
        step: &'static str,
        expected: StatusCode,
        request: RequestBuilder,
    ) -> Result<String, ApiError> {
        let request = match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { step, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { step, source })?;

        if status != expected {
            tracing::error!(step, %status, body = %body, "unexpected response");
            return Err(ApiError::UnexpectedStatus {
                step,
                expected: expected.as_u16(),
                got: status.as_u16(),
                body,
            });
        }

        tracing::debug!(step, %status, "request completed");
        Ok(body)
    }
}

/// Parse a response body, converting serde failures into shape errors that
/// carry the offending body.
fn parse<T: DeserializeOwned>(step: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Shape {
        step,
        detail: format!("{}, body: {}", e, body),
    })
}
