use thiserror::Error;

/// Failure taxonomy for calls against the portal backend.
///
/// Display strings are user-facing Japanese; they are rendered inline on
/// the login form and in toast notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// An authenticated call was attempted with no identity present.
    #[error("ログインしていません")]
    NotLoggedIn,
    /// The fetch itself failed (connection refused, DNS, malformed body).
    #[error("ネットワークエラー")]
    Network(String),
    /// The login endpoint answered but rejected the credentials.
    #[error("{0}")]
    Auth(String),
    /// Non-2xx response to any call; treated as failure regardless of body.
    #[error("サーバーエラー ({status})")]
    Rejected { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failure_displays_the_backend_message() {
        assert_eq!(ApiError::Auth("ログイン失敗".into()).to_string(), "ログイン失敗");
    }

    #[test]
    fn network_failure_hides_the_transport_detail() {
        let err = ApiError::Network("fetch aborted".into());
        assert_eq!(err.to_string(), "ネットワークエラー");
    }

    #[test]
    fn rejection_shows_the_status() {
        let err = ApiError::Rejected {
            status: 502,
            message: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "サーバーエラー (502)");
    }
}
