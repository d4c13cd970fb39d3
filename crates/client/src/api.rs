//! HTTP client for the portfolio API envelope contract.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use portfolio_core::category::Category;
use portfolio_core::project::{CreateProject, ProjectRecord, UpdateProject};

/// The two project collections as returned by the list operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectCollections {
    #[serde(default)]
    pub personal: Vec<ProjectRecord>,
    #[serde(default)]
    pub group: Vec<ProjectRecord>,
}

impl ProjectCollections {
    pub fn collection(&self, category: Category) -> &Vec<ProjectRecord> {
        match category {
            Category::Personal => &self.personal,
            Category::Group => &self.group,
        }
    }

    pub fn collection_mut(&mut self, category: Category) -> &mut Vec<ProjectRecord> {
        match category {
            Category::Personal => &mut self.personal,
            Category::Group => &mut self.group,
        }
    }
}

/// Errors from the client side of the API contract.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but with a failure envelope or a body that is
    /// not the expected envelope.
    #[error("Server error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The envelope's `error` string, or the raw body when unparsable.
        message: String,
    },
}

#[derive(Deserialize)]
struct ListEnvelope {
    success: bool,
    data: Option<ProjectCollections>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ProjectEnvelope {
    success: bool,
    project: Option<ProjectRecord>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct DeletedEnvelope {
    success: bool,
    #[serde(rename = "deletedProject")]
    deleted_project: Option<ProjectRecord>,
    error: Option<String>,
}

/// HTTP client for a portfolio API server.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch both collections.
    pub async fn list(&self) -> Result<ProjectCollections, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/projects", self.base_url))
            .send()
            .await?;

        let (status, envelope) = Self::read_envelope::<ListEnvelope>(response).await?;
        match envelope {
            ListEnvelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            other => Err(Self::envelope_error(status, other.error)),
        }
    }

    /// Create a project in a category; returns the server-assigned record.
    pub async fn create(
        &self,
        category: Category,
        input: &CreateProject,
    ) -> Result<ProjectRecord, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/projects/{category}", self.base_url))
            .json(input)
            .send()
            .await?;

        let (status, envelope) = Self::read_envelope::<ProjectEnvelope>(response).await?;
        match envelope {
            ProjectEnvelope {
                success: true,
                project: Some(project),
                ..
            } => Ok(project),
            other => Err(Self::envelope_error(status, other.error)),
        }
    }

    /// Apply a partial update; returns the merged record.
    pub async fn update(
        &self,
        category: Category,
        id: &str,
        patch: &UpdateProject,
    ) -> Result<ProjectRecord, ClientError> {
        let response = self
            .client
            .put(format!("{}/api/projects/{category}/{id}", self.base_url))
            .json(patch)
            .send()
            .await?;

        let (status, envelope) = Self::read_envelope::<ProjectEnvelope>(response).await?;
        match envelope {
            ProjectEnvelope {
                success: true,
                project: Some(project),
                ..
            } => Ok(project),
            other => Err(Self::envelope_error(status, other.error)),
        }
    }

    /// Delete a project; returns the removed record.
    pub async fn delete(
        &self,
        category: Category,
        id: &str,
    ) -> Result<ProjectRecord, ClientError> {
        let response = self
            .client
            .delete(format!("{}/api/projects/{category}/{id}", self.base_url))
            .send()
            .await?;

        let (status, envelope) = Self::read_envelope::<DeletedEnvelope>(response).await?;
        match envelope {
            DeletedEnvelope {
                success: true,
                deleted_project: Some(record),
                ..
            } => Ok(record),
            other => Err(Self::envelope_error(status, other.error)),
        }
    }

    // ---- private helpers ----

    /// Read the response body and parse it as an envelope, keeping the
    /// status code for error reporting. A body that is not the expected
    /// envelope shape is itself surfaced as an API error.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<(u16, T), ClientError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(envelope) => Ok((status, envelope)),
            Err(err) => {
                tracing::debug!(status, error = %err, "Unparsable response body");
                Err(ClientError::Api {
                    status,
                    message: body,
                })
            }
        }
    }

    fn envelope_error(status: u16, error: Option<String>) -> ClientError {
        ClientError::Api {
            status,
            message: error.unwrap_or_else(|| "Unexpected response from server".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_default_missing_keys() {
        let collections: ProjectCollections = serde_json::from_str(r#"{"personal": []}"#).unwrap();
        assert!(collections.personal.is_empty());
        assert!(collections.group.is_empty());
    }

    #[test]
    fn failure_envelope_parses_without_payload() {
        let envelope: ProjectEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "nope"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.project.is_none());
        assert_eq!(envelope.error.as_deref(), Some("nope"));
    }
}
