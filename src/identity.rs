use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::config::Config;
use crate::errors::Result;

/// A session as reported by the identity provider. `expire_at` is epoch
/// milliseconds.
#[derive(Deserialize, Debug, Clone)]
pub struct ProviderSession {
    pub user_id: String,
    pub expire_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProviderOrganization {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Seam over the external identity provider. Lookups return `Ok(None)` for a
/// clean "does not exist" answer; any transport or decoding problem is an
/// `Err` and is treated as a denial by `validate_session`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn get_session(&self, session_id: &str) -> Result<Option<ProviderSession>>;
    async fn org_member_ids(&self, organization_id: &str) -> Result<Option<Vec<String>>>;
    async fn get_organization(&self, id_or_slug: &str) -> Result<Option<ProviderOrganization>>;
}

#[derive(Debug, Clone, Copy)]
pub struct SessionVerdict {
    pub granted: bool,
    pub reason: &'static str,
}

impl SessionVerdict {
    fn granted() -> Self {
        Self {
            granted: true,
            reason: "access granted",
        }
    }

    fn denied(reason: &'static str) -> Self {
        Self {
            granted: false,
            reason,
        }
    }
}

/// Fail-closed session check: unknown session, missing organization,
/// non-member user, expired session, and any provider error all deny.
pub async fn validate_session(
    provider: &dyn IdentityProvider,
    session_id: &str,
    organization_id: &str,
) -> SessionVerdict {
    let session = match provider.get_session(session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => return SessionVerdict::denied("session not found"),
        Err(error) => {
            error!("Identity provider Error:{:#?}", error);
            return SessionVerdict::denied("identity provider unavailable");
        }
    };

    let members = match provider.org_member_ids(organization_id).await {
        Ok(Some(members)) => members,
        Ok(None) => return SessionVerdict::denied("organization not found"),
        Err(error) => {
            error!("Identity provider Error:{:#?}", error);
            return SessionVerdict::denied("identity provider unavailable");
        }
    };

    if !members.contains(&session.user_id) {
        warn!(%organization_id, "user not in organization");
        return SessionVerdict::denied("user not in organization");
    }

    if session.expire_at <= Utc::now().timestamp_millis() {
        return SessionVerdict::denied("session expired");
    }

    SessionVerdict::granted()
}

/// Clerk-style REST client. Every request carries the secret key as a bearer
/// token and runs under the configured timeout.
pub struct ClerkGateway {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

#[derive(Deserialize, Debug)]
struct MembershipList {
    data: Vec<Membership>,
}

#[derive(Deserialize, Debug)]
struct Membership {
    public_user_data: PublicUserData,
}

#[derive(Deserialize, Debug)]
struct PublicUserData {
    user_id: String,
}

impl ClerkGateway {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.provider_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.clerk_api_url.trim_end_matches('/').to_string(),
            secret_key: config.clerk_secret_key.clone(),
        })
    }

    async fn get(&self, path: &str) -> Result<Option<reqwest::Response>> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(response.error_for_status()?))
    }
}

#[async_trait]
impl IdentityProvider for ClerkGateway {
    async fn get_session(&self, session_id: &str) -> Result<Option<ProviderSession>> {
        match self.get(&format!("sessions/{session_id}")).await? {
            Some(response) => Ok(Some(response.json::<ProviderSession>().await?)),
            None => Ok(None),
        }
    }

    async fn org_member_ids(&self, organization_id: &str) -> Result<Option<Vec<String>>> {
        let response = self
            .get(&format!("organizations/{organization_id}/memberships"))
            .await?;
        match response {
            Some(response) => {
                let memberships = response.json::<MembershipList>().await?;
                Ok(Some(
                    memberships
                        .data
                        .into_iter()
                        .map(|member| member.public_user_data.user_id)
                        .collect(),
                ))
            }
            None => Ok(None),
        }
    }

    async fn get_organization(&self, id_or_slug: &str) -> Result<Option<ProviderOrganization>> {
        match self.get(&format!("organizations/{id_or_slug}")).await? {
            Some(response) => Ok(Some(response.json::<ProviderOrganization>().await?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::errors::Error;
    use std::collections::HashMap;

    /// In-memory provider for tests: sessions by id, member lists by org id.
    #[derive(Default)]
    pub struct MockProvider {
        pub sessions: HashMap<String, ProviderSession>,
        pub members: HashMap<String, Vec<String>>,
        pub organizations: HashMap<String, ProviderOrganization>,
        pub failing: bool,
    }

    impl MockProvider {
        pub fn with_member_session(
            session_id: &str,
            user_id: &str,
            organization_id: &str,
            expire_at: i64,
        ) -> Self {
            let mut provider = Self::default();
            provider.sessions.insert(
                session_id.to_string(),
                ProviderSession {
                    user_id: user_id.to_string(),
                    expire_at,
                },
            );
            provider
                .members
                .insert(organization_id.to_string(), vec![user_id.to_string()]);
            provider
        }
    }

    #[async_trait]
    impl IdentityProvider for MockProvider {
        async fn get_session(&self, session_id: &str) -> Result<Option<ProviderSession>> {
            if self.failing {
                return Err(Error::InternalServerError);
            }
            Ok(self.sessions.get(session_id).cloned())
        }

        async fn org_member_ids(&self, organization_id: &str) -> Result<Option<Vec<String>>> {
            if self.failing {
                return Err(Error::InternalServerError);
            }
            Ok(self.members.get(organization_id).cloned())
        }

        async fn get_organization(
            &self,
            id_or_slug: &str,
        ) -> Result<Option<ProviderOrganization>> {
            if self.failing {
                return Err(Error::InternalServerError);
            }
            Ok(self.organizations.get(id_or_slug).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MockProvider;
    use super::*;

    fn far_future() -> i64 {
        Utc::now().timestamp_millis() + 60_000
    }

    #[tokio::test]
    async fn live_member_session_is_granted() {
        let provider =
            MockProvider::with_member_session("sess_1", "user_1", "org_acme", far_future());
        let verdict = validate_session(&provider, "sess_1", "org_acme").await;
        assert!(verdict.granted);
    }

    #[tokio::test]
    async fn unknown_session_is_denied() {
        let provider =
            MockProvider::with_member_session("sess_1", "user_1", "org_acme", far_future());
        let verdict = validate_session(&provider, "sess_missing", "org_acme").await;
        assert!(!verdict.granted);
        assert_eq!(verdict.reason, "session not found");
    }

    #[tokio::test]
    async fn expired_session_is_denied() {
        let expired = Utc::now().timestamp_millis() - 1_000;
        let provider = MockProvider::with_member_session("sess_1", "user_1", "org_acme", expired);
        let verdict = validate_session(&provider, "sess_1", "org_acme").await;
        assert!(!verdict.granted);
        assert_eq!(verdict.reason, "session expired");
    }

    #[tokio::test]
    async fn non_member_is_denied() {
        let mut provider =
            MockProvider::with_member_session("sess_1", "user_1", "org_acme", far_future());
        provider
            .members
            .insert("org_acme".to_string(), vec!["user_other".to_string()]);
        let verdict = validate_session(&provider, "sess_1", "org_acme").await;
        assert!(!verdict.granted);
        assert_eq!(verdict.reason, "user not in organization");
    }

    #[tokio::test]
    async fn unknown_organization_is_denied() {
        let provider =
            MockProvider::with_member_session("sess_1", "user_1", "org_acme", far_future());
        let verdict = validate_session(&provider, "sess_1", "org_other").await;
        assert!(!verdict.granted);
        assert_eq!(verdict.reason, "organization not found");
    }

    #[tokio::test]
    async fn provider_error_fails_closed() {
        let mut provider =
            MockProvider::with_member_session("sess_1", "user_1", "org_acme", far_future());
        provider.failing = true;
        let verdict = validate_session(&provider, "sess_1", "org_acme").await;
        assert!(!verdict.granted);
        assert_eq!(verdict.reason, "identity provider unavailable");
    }

    #[tokio::test]
    async fn expired_non_member_is_still_denied() {
        let expired = Utc::now().timestamp_millis() - 1_000;
        let mut provider = MockProvider::with_member_session("sess_1", "user_1", "org_acme", expired);
        provider
            .members
            .insert("org_acme".to_string(), vec!["user_other".to_string()]);
        let verdict = validate_session(&provider, "sess_1", "org_acme").await;
        assert!(!verdict.granted);
    }
}
