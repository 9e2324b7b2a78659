//! Backend endpoints and request plumbing.
//!
//! The backend keeps no session, so every authenticated call replays the
//! stored credentials through [`authed_post`], which fails closed when no
//! identity is present. Non-2xx responses are failures regardless of body.

use common::error::ApiError;
use common::model::identity::Identity;
use common::model::training::{Record, RosterRow, TrainingDetail};
use common::requests::{Credentials, LoginRequest, LoginResponse};
use gloo_net::http::{Request, Response};

const LOGIN_URL: &str = "/api/auth/login";
const ROSTER_CSV_URL: &str = "/api/training-search/csv";

fn training_detail_url(web_id: &str) -> String {
    format!("/api/training-detail/{web_id}")
}

fn trainee_detail_url(application_id: &str) -> String {
    format!("/api/trainee/detail/{application_id}")
}

/// Static document downloads offered on the home view.
pub fn download_url(id: u32) -> String {
    format!("/api/download/{id}")
}

fn net(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    ApiError::Rejected { status, message }
}

/// Verifies credentials against the backend. Returns the account's full
/// name on success; a rejected login surfaces as [`ApiError::Auth`] with
/// the backend's message.
pub async fn login(id: &str, password: &str) -> Result<String, ApiError> {
    let response = Request::post(LOGIN_URL)
        .json(&LoginRequest { id, password })
        .map_err(net)?
        .send()
        .await
        .map_err(net)?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    let body: LoginResponse = response.json().await.map_err(net)?;
    if !body.success {
        return Err(ApiError::Auth(
            body.error.unwrap_or_else(|| "ログイン失敗".to_string()),
        ));
    }
    body.full_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::Auth("ログイン失敗".to_string()))
}

/// One-shot roster load. No credentials; the roster endpoint is served from
/// the portal's own cache.
pub async fn fetch_roster() -> Result<Vec<RosterRow>, ApiError> {
    let response = Request::get(ROSTER_CSV_URL).send().await.map_err(net)?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    response.json().await.map_err(net)
}

/// POSTs the current credentials to `url`. The single place the
/// "re-authenticate per request" behavior lives; fails closed with
/// [`ApiError::NotLoggedIn`] when identity is absent.
async fn authed_post(url: &str, identity: Option<&Identity>) -> Result<Response, ApiError> {
    let identity = identity.ok_or(ApiError::NotLoggedIn)?;
    let response = Request::post(url)
        .json(&Credentials {
            login_id: &identity.id,
            password: &identity.password,
        })
        .map_err(net)?
        .send()
        .await
        .map_err(net)?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    Ok(response)
}

/// Drill-down level 1: per-training detail keyed by the roster row's
/// `Web連携ID`.
pub async fn fetch_training_detail(
    web_id: &str,
    identity: Option<&Identity>,
) -> Result<TrainingDetail, ApiError> {
    let response = authed_post(&training_detail_url(web_id), identity).await?;
    response.json().await.map_err(net)
}

/// Drill-down level 2: matched individuals for one application id.
pub async fn fetch_trainee_detail(
    application_id: &str,
    identity: Option<&Identity>,
) -> Result<Vec<Record>, ApiError> {
    let response = authed_post(&trainee_detail_url(application_id), identity).await?;
    response.json().await.map_err(net)
}
