use crate::domain::model::ProfileData;
use crate::domain::ports::{ConfigProvider, ProfileSource};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

/// 對 GitHub 公開 API 發出的唯一請求：不帶認證、不重試
pub struct GithubProfileClient {
    client: Client,
    endpoint: String,
}

impl GithubProfileClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.profile_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProfileSource for GithubProfileClient {
    async fn fetch_profile(&self) -> Result<ProfileData> {
        tracing::debug!("Making profile request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Profile response status: {}", status);

        if !status.is_success() {
            return Err(SiteError::ProfileStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let profile: ProfileData = serde_json::from_slice(&body)?;
        Ok(profile)
    }
}
