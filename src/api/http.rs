//! HTTP implementation of the API traits.
//!
//! This is the only place that knows about status codes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::payload::{
    ErrorBody, GroupRequest, ItemsRequest, LocationRequest, OkResponse, RankRequest, StarRequest,
};
use super::{AdminApi, JudgeApi};
use crate::admin::{JudgeEdit, ProjectEdit, RowKind};
use crate::config::ClientConfig;
use crate::error::{JuryError, Result};
use crate::model::{AdminJudge, AdminProject, AdminStats, ClockState, JudgeProfile, ProjectId};

const USER_AGENT_VALUE: &str = concat!("jury-core/", env!("CARGO_PKG_VERSION"));

/// Which credentials a request carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Judge,
    Admin,
}

/// reqwest-backed client for both the judge and admin APIs
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    judge_token: Option<String>,
    admin_password: Option<String>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| JuryError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        let base_url = Url::parse(&config.api_url).map_err(|e| JuryError::Config {
            message: format!("invalid api_url {}: {}", config.api_url, e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(JuryError::Config {
                message: format!("api_url cannot be a base: {}", config.api_url),
            });
        }

        Ok(Self {
            client,
            base_url,
            judge_token: config.judge_token,
            admin_password: config.admin_password,
        })
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Endpoint URL under the base; each segment is percent-encoded, so ids
    /// containing `/` or `?` stay inside their segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| JuryError::Config {
                message: format!("api_url cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, auth: Auth, segments: &[&str]) -> Result<T> {
        let response = self.send::<()>(Method::GET, auth, segments, None).await?;
        let path = response.url().path().to_string();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| JuryError::InvalidResponse {
            message: format!("GET {}: {}", path, e),
        })
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        auth: Auth,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        let mut request = self.client.request(method.clone(), url);

        request = match auth {
            Auth::Judge => match &self.judge_token {
                Some(token) => request.bearer_auth(token),
                None => request,
            },
            Auth::Admin => match &self.admin_password {
                Some(password) => request.basic_auth("admin", Some(password)),
                None => request,
            },
        };
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, %path, status = status.as_u16(), "api response");

        if status.is_success() {
            return Ok(response);
        }

        let message = ErrorBody::message_from(&response.text().await.unwrap_or_default());
        match status {
            StatusCode::UNAUTHORIZED => Err(JuryError::Unauthorized { message }),
            StatusCode::FORBIDDEN => {
                warn!(%path, %message, "request rejected during deliberation");
                Err(JuryError::DeliberationLocked { message })
            }
            StatusCode::NOT_FOUND => Err(JuryError::NotFound { resource: path }),
            _ => Err(JuryError::Server {
                status: status.as_u16(),
                message,
            }),
        }
    }

    async fn send_ok<B: Serialize + ?Sized>(
        &self,
        method: Method,
        auth: Auth,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<()> {
        self.send(method, auth, segments, body).await.map(|_| ())
    }
}

#[async_trait]
impl JudgeApi for HttpClient {
    async fn fetch_profile(&self) -> Result<JudgeProfile> {
        self.get_json(Auth::Judge, &["judge"]).await
    }

    async fn submit_ranking(&self, ranking: &[ProjectId]) -> Result<()> {
        self.send_ok(
            Method::POST,
            Auth::Judge,
            &["judge", "rank"],
            Some(&RankRequest { ranking }),
        )
        .await
    }

    async fn set_star(&self, project_id: &str, starred: bool) -> Result<()> {
        self.send_ok(
            Method::PUT,
            Auth::Judge,
            &["judge", "star", project_id],
            Some(&StarRequest { starred }),
        )
        .await
    }

    async fn deliberation_active(&self) -> Result<bool> {
        let status: OkResponse = self.get_json(Auth::Judge, &["judge", "deliberation"]).await?;
        Ok(status.ok)
    }
}

#[async_trait]
impl AdminApi for HttpClient {
    async fn list_projects(&self) -> Result<Vec<AdminProject>> {
        self.get_json(Auth::Admin, &["project", "list"]).await
    }

    async fn list_judges(&self) -> Result<Vec<AdminJudge>> {
        self.get_json(Auth::Admin, &["judge", "list"]).await
    }

    async fn stats(&self) -> Result<AdminStats> {
        self.get_json(Auth::Admin, &["admin", "stats"]).await
    }

    async fn clock(&self) -> Result<ClockState> {
        self.get_json(Auth::Admin, &["admin", "clock"]).await
    }

    async fn pause_clock(&self) -> Result<()> {
        self.send_ok::<()>(Method::POST, Auth::Admin, &["admin", "clock", "pause"], None)
            .await
    }

    async fn unpause_clock(&self) -> Result<()> {
        self.send_ok::<()>(Method::POST, Auth::Admin, &["admin", "clock", "unpause"], None)
            .await
    }

    async fn reset_clock(&self) -> Result<()> {
        self.send_ok::<()>(Method::POST, Auth::Admin, &["admin", "clock", "reset"], None)
            .await
    }

    async fn edit_project(&self, edit: &ProjectEdit) -> Result<()> {
        self.send_ok(Method::PUT, Auth::Admin, &["project", edit.id.as_str()], Some(edit))
            .await
    }

    async fn edit_judge(&self, edit: &JudgeEdit) -> Result<()> {
        self.send_ok(Method::PUT, Auth::Admin, &["judge", edit.id.as_str()], Some(edit))
            .await
    }

    async fn set_hidden(&self, kind: RowKind, ids: &[String], hidden: bool) -> Result<()> {
        let verb = if hidden { "hide" } else { "unhide" };
        self.send_ok(
            Method::PUT,
            Auth::Admin,
            &[kind.resource(), verb],
            Some(&ItemsRequest { items: ids }),
        )
        .await
    }

    async fn set_prioritized(&self, ids: &[String], prioritized: bool) -> Result<()> {
        let verb = if prioritized {
            "prioritize"
        } else {
            "unprioritize"
        };
        self.send_ok(
            Method::PUT,
            Auth::Admin,
            &["project", verb],
            Some(&ItemsRequest { items: ids }),
        )
        .await
    }

    async fn move_table(&self, project_id: &str, location: u64) -> Result<()> {
        self.send_ok(
            Method::PUT,
            Auth::Admin,
            &["project", "move", project_id],
            Some(&LocationRequest { location }),
        )
        .await
    }

    async fn move_group(&self, kind: RowKind, id: &str, group: u64) -> Result<()> {
        self.send_ok(
            Method::PUT,
            Auth::Admin,
            &[kind.resource(), "move-group", id],
            Some(&GroupRequest { group }),
        )
        .await
    }

    async fn delete(&self, kind: RowKind, id: &str) -> Result<()> {
        self.send_ok::<()>(Method::DELETE, Auth::Admin, &[kind.resource(), id], None)
            .await
    }
}
