//! Contributor list sourced from the GitHub contributors API.
//!
//! One unauthenticated GET on mount, no retry, no pagination. The fetch
//! returns an explicit result and the view renders a distinct state for each
//! of loading / loaded / empty / failed, so a failed fetch is never mistaken
//! for a project without contributors.

use gloo::net::http::Request;
use serde::Deserialize;
use thiserror::Error;

/// Fixed public endpoint listing contributors to the product repository.
pub const CONTRIBUTORS_URL: &str =
    "https://api.github.com/repos/piyushgarg-dev/review-app/contributors";

/// The subset of the GitHub contributors payload we care about.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawContributor {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
}

/// Normalized contributor record shown on the About page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub id: u64,
    pub username: String,
    pub avatar: String,
    pub profile_link: String,
}

impl From<RawContributor> for Contributor {
    fn from(raw: RawContributor) -> Self {
        Self {
            id: raw.id,
            username: raw.login,
            avatar: raw.avatar_url,
            profile_link: raw.html_url,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Decode(String),
}

/// Fetches and normalizes the contributor list.
pub async fn fetch_contributors(url: &str) -> Result<Vec<Contributor>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let raw: Vec<RawContributor> = response
        .json()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(raw.into_iter().map(Contributor::from).collect())
}

/// Render state of the contributor list. `Empty` and `Failed` are distinct
/// on purpose: an empty repository and a dead network look different.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(Vec<Contributor>),
    Empty,
    Failed(String),
}

impl FetchState {
    pub fn from_result(result: Result<Vec<Contributor>, FetchError>) -> Self {
        match result {
            Ok(list) if list.is_empty() => Self::Empty,
            Ok(list) => Self::Loaded(list),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_github_payload_to_contributors() {
        let payload = r#"[{
            "login": "a",
            "id": 1,
            "avatar_url": "x",
            "html_url": "y",
            "contributions": 12,
            "site_admin": false
        }]"#;
        let raw: Vec<RawContributor> = serde_json::from_str(payload).unwrap();
        let mapped: Vec<Contributor> = raw.into_iter().map(Contributor::from).collect();
        assert_eq!(
            mapped,
            vec![Contributor {
                id: 1,
                username: "a".into(),
                avatar: "x".into(),
                profile_link: "y".into(),
            }]
        );
    }

    #[test]
    fn loaded_list_mirrors_the_response() {
        let list = vec![Contributor {
            id: 1,
            username: "a".into(),
            avatar: "x".into(),
            profile_link: "y".into(),
        }];
        assert_eq!(
            FetchState::from_result(Ok(list.clone())),
            FetchState::Loaded(list)
        );
    }

    #[test]
    fn empty_response_is_empty_not_failed() {
        assert_eq!(FetchState::from_result(Ok(Vec::new())), FetchState::Empty);
    }

    #[test]
    fn failure_is_failed_not_empty() {
        let state = FetchState::from_result(Err(FetchError::Status(403)));
        assert_eq!(state, FetchState::Failed("unexpected status 403".into()));
        assert_ne!(state, FetchState::Empty);
    }

    #[test]
    fn rejects_malformed_payload() {
        let result: Result<Vec<RawContributor>, _> = serde_json::from_str(r#"{"not":"a list"}"#);
        assert!(result.is_err());
    }
}
