//! HTTP client for the widget platform REST API
//!
//! One method per domain operation, each a thin mapping of HTTP method, path
//! template, query parameters and body. Every request carries the account
//! token as a bearer credential. Optional string filters use the empty string
//! to mean "no filter" and are passed through verbatim, keeping the argument
//! contract total after validation. The client holds no state besides the
//! connection pool; entities are never cached locally.

use crate::config::Config;
use crate::error::ToolError;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::{json, Value};

/// Widget platform API client.
#[derive(Clone)]
pub struct PlatformClient {
    http: Client,
    base_url: String,
    token: String,
}

impl PlatformClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        self.http.request(method, url).bearer_auth(&self.token)
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-2xx statuses surface as `Upstream` with the body verbatim; a
    /// request that could not complete at all surfaces as `Transport`.
    async fn send(&self, request: RequestBuilder) -> Result<Value, ToolError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ToolError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        // Some endpoints (embed code) answer with plain text.
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    // --- Widgets ---

    pub async fn get_widget(&self, widget_id: &str) -> Result<Value, ToolError> {
        self.send(self.request(Method::GET, &format!("widgets/{widget_id}")))
            .await
    }

    pub async fn get_widget_schema(&self, widget_type: &str) -> Result<Value, ToolError> {
        // Widget type slugs use hyphens in API paths.
        let slug = widget_type.replace('_', "-");
        self.send(self.request(Method::GET, &format!("widget-types/{slug}/schema")))
            .await
    }

    pub async fn update_widget(&self, widget_id: &str, data: &Value) -> Result<Value, ToolError> {
        let request = self
            .request(Method::PUT, &format!("widgets/{widget_id}"))
            .json(&json!({ "data": data }));
        self.send(request).await
    }

    pub async fn list_widgets(
        &self,
        page: u64,
        limit: u64,
        project_id: &str,
        search: &str,
        widget_type: &str,
    ) -> Result<Value, ToolError> {
        let request = self.request(Method::GET, "widgets").query(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("projectId", project_id.to_string()),
            ("search", search.to_string()),
            ("type", widget_type.to_string()),
        ]);
        self.send(request).await
    }

    pub async fn create_widget(
        &self,
        widget_type: &str,
        data: &Value,
        name: &str,
        project_id: &str,
    ) -> Result<Value, ToolError> {
        let mut body = json!({
            "type": widget_type,
            "data": data,
            "name": name,
            "status": "draft",
        });
        if !project_id.is_empty() {
            body["projectId"] = json!(project_id);
        }
        self.send(self.request(Method::POST, "widgets").json(&body))
            .await
    }

    pub async fn get_widget_types(&self) -> Result<Value, ToolError> {
        self.send(self.request(Method::GET, "widget-types")).await
    }

    pub async fn get_widget_editor_url(&self, widget_id: &str) -> Result<Value, ToolError> {
        self.send(self.request(Method::GET, &format!("widgets/{widget_id}/editor")))
            .await
    }

    pub async fn get_widget_embed_code(&self, widget_id: &str) -> Result<Value, ToolError> {
        self.send(self.request(Method::GET, &format!("widgets/{widget_id}/embed-code")))
            .await
    }

    // --- Projects ---

    pub async fn list_projects(&self, page: u64, limit: u64) -> Result<Value, ToolError> {
        let request = self
            .request(Method::GET, "projects")
            .query(&[("page", page.to_string()), ("limit", limit.to_string())]);
        self.send(request).await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Value, ToolError> {
        self.send(self.request(Method::GET, &format!("projects/{project_id}")))
            .await
    }

    // --- CRM ---

    pub async fn list_contacts(
        &self,
        project_id: &str,
        page: u64,
        limit: u64,
    ) -> Result<Value, ToolError> {
        let request = self
            .request(Method::GET, &format!("projects/{project_id}/contacts"))
            .query(&[("page", page.to_string()), ("limit", limit.to_string())]);
        self.send(request).await
    }

    pub async fn get_contact(&self, project_id: &str, contact_id: &str) -> Result<Value, ToolError> {
        self.send(self.request(
            Method::GET,
            &format!("projects/{project_id}/contacts/{contact_id}"),
        ))
        .await
    }

    pub async fn list_submissions(
        &self,
        project_id: &str,
        page: u64,
        limit: u64,
        widget_id: &str,
    ) -> Result<Value, ToolError> {
        let request = self
            .request(Method::GET, &format!("projects/{project_id}/submissions"))
            .query(&[
                ("page", page.to_string()),
                ("limit", limit.to_string()),
                ("widgetId", widget_id.to_string()),
            ]);
        self.send(request).await
    }

    pub async fn get_submission(
        &self,
        project_id: &str,
        submission_id: &str,
    ) -> Result<Value, ToolError> {
        self.send(self.request(
            Method::GET,
            &format!("projects/{project_id}/submissions/{submission_id}"),
        ))
        .await
    }

    // --- Analytics ---

    pub async fn get_widget_analytics(
        &self,
        widget_id: &str,
        from: &str,
        to: &str,
        breakdown: &str,
        events: &[String],
    ) -> Result<Value, ToolError> {
        let mut params: Vec<(&str, String)> = vec![
            ("from", from.to_string()),
            ("to", to.to_string()),
            ("breakdown", breakdown.to_string()),
        ];
        for event in events {
            params.push(("events", event.clone()));
        }
        let request = self
            .request(Method::GET, &format!("widgets/{widget_id}/analytics"))
            .query(&params);
        self.send(request).await
    }
}
