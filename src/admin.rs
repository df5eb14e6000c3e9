//! Client for the administrative HTTP API.
//!
//! The administrative service (group registration, maze listing, challenge
//! bootstrap) is an external collaborator: this module only consumes its
//! boundary and decodes the fields the discovery client needs. The server
//! side is not part of this crate.
//!
//! # Endpoints
//!
//! | Method | Path | Returns |
//! |--------|------|---------|
//! | POST | `/grupo` | `{"GrupoId": <uuid>}` |
//! | GET | `/labirintos/{group}` | `{"Labirintos": [...]}` |
//! | GET | `/iniciar/{group}` | `{"Conexao": "<ws url>"}` |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::identifiers::{GroupId, MazeId, VertexId};

// ============================================================================
// DTOs
// ============================================================================

/// One maze as listed by the administrative service.
#[derive(Debug, Clone, Deserialize)]
pub struct MazeInfo {
    /// Maze identifier, used in the navigation URL.
    #[serde(rename = "LabirintoId")]
    pub id: MazeId,

    /// Entry vertex to seed discovery with.
    #[serde(rename = "Entrada")]
    pub entry: VertexId,

    /// Free-form difficulty label.
    #[serde(rename = "Dificuldade")]
    pub difficulty: String,
}

#[derive(Debug, Serialize)]
struct CreateGroupBody<'a> {
    #[serde(rename = "Nome")]
    nome: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateGroupReply {
    #[serde(rename = "GrupoId")]
    grupo_id: GroupId,
}

#[derive(Debug, Deserialize)]
struct ListMazesReply {
    #[serde(rename = "Labirintos")]
    labirintos: Vec<MazeInfo>,
}

#[derive(Debug, Deserialize)]
struct StartChallengeReply {
    #[serde(rename = "Conexao")]
    conexao: String,
}

// ============================================================================
// AdminClient
// ============================================================================

/// Thin HTTP client for the administrative service.
#[derive(Debug, Clone)]
pub struct AdminClient {
    base_url: String,
    http: reqwest::Client,
}

impl AdminClient {
    /// Creates a client for the service at `base_url`
    /// (e.g. `http://localhost:8000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Registers a group and returns its service-issued id.
    ///
    /// # Errors
    ///
    /// - [`Error::Admin`] on a non-success status
    /// - [`Error::Http`] on a transport failure
    pub async fn create_group(&self, name: &str) -> Result<GroupId> {
        let url = format!("{}/grupo", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&CreateGroupBody { nome: name })
            .send()
            .await?;

        let reply: CreateGroupReply = Self::decode(response).await?;
        debug!(group = %reply.grupo_id, name, "Group registered");
        Ok(reply.grupo_id)
    }

    /// Lists the mazes available to `group`.
    ///
    /// # Errors
    ///
    /// - [`Error::Admin`] on a non-success status
    /// - [`Error::Http`] on a transport failure
    pub async fn list_mazes(&self, group: GroupId) -> Result<Vec<MazeInfo>> {
        let url = format!("{}/labirintos/{group}", self.base_url);
        let response = self.http.get(&url).send().await?;

        let reply: ListMazesReply = Self::decode(response).await?;
        debug!(group = %group, mazes = reply.labirintos.len(), "Mazes listed");
        Ok(reply.labirintos)
    }

    /// Starts the challenge for `group` and returns the navigation
    /// WebSocket URL.
    ///
    /// # Errors
    ///
    /// - [`Error::Admin`] on a non-success status
    /// - [`Error::Http`] on a transport failure
    pub async fn start_challenge(&self, group: GroupId) -> Result<String> {
        let url = format!("{}/iniciar/{group}", self.base_url);
        let response = self.http.get(&url).send().await?;

        let reply: StartChallengeReply = Self::decode(response).await?;
        debug!(group = %group, url = %reply.conexao, "Challenge started");
        Ok(reply.conexao)
    }

    /// Maps a non-success status to [`Error::Admin`], otherwise decodes JSON.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::admin(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}

// ============================================================================
// Tests
// ============================================================================
