use std::sync::Arc;
use std::time::Duration;

use eyre::{Result, eyre};
use log::{debug, info};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde_json::Value;

use crate::models::from_object;
use crate::models::profile::{ContactInfoDocument, ProfileDocument};
use crate::models::voyager::{ContactInfoView, ProfileView};
use crate::scraper::{CredentialsRejected, ProfileSource};
use crate::utils::config::LinkedinConfig;

const AUTH_HEADERS: [(&str, &str); 5] = [
    (
        "X-Li-User-Agent",
        "LIAuthLibrary:0.0.3 com.linkedin.android:4.1.881 Asus_ASUS_Z01QD:android_9",
    ),
    ("User-Agent", "ANDROID OS"),
    ("X-User-Language", "en"),
    ("X-User-Locale", "en_US"),
    ("Accept-Language", "en-us"),
];

const VOYAGER_HEADERS: [(&str, &str); 4] = [
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    ("Accept-Language", "en-AU,en-GB;q=0.9,en-US;q=0.8,en;q=0.7"),
    ("X-Li-Lang", "en_US"),
    ("X-RestLi-Protocol-Version", "2.0.0"),
];

#[derive(Debug, Clone)]
pub struct LinkedinSession {
    csrf_token: String,
}

pub struct LinkedinClient {
    base_url: Url,
    client: reqwest::Client,
    jar: Arc<Jar>,
}

impl LinkedinClient {
    pub fn new(config: &LinkedinConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| eyre!("invalid linkedin base_url {:?}: {}", config.base_url, e))?;
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(LinkedinClient {
            base_url,
            client,
            jar,
        })
    }

    /// Appends each segment percent-encoded, so `/ ? #` inside one never reshape the path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| eyre!("linkedin base_url {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn with_headers(mut req: RequestBuilder, headers: &[(&str, &str)]) -> RequestBuilder {
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        req
    }

    fn session_cookie(&self) -> Option<String> {
        let cookies = self.jar.cookies(&self.base_url)?;
        jsessionid(cookies.to_str().ok()?).map(str::to_string)
    }

    async fn voyager(&self, session: &LinkedinSession, target: &str, view: &str) -> Result<Value> {
        let url = self.endpoint(&["voyager", "api", "identity", "profiles", target, view])?;
        let path = url.path().to_string();
        debug!("GET {}", url);

        let response = Self::with_headers(self.client.get(url), &VOYAGER_HEADERS)
            .header("csrf-token", &session.csrf_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(eyre!("request to {} failed with status {}", path, status));
        }

        let body: Value = response.json().await?;

        // voyager reports some failures inside a 200 body
        if let Some(code) = body.get("status").and_then(Value::as_u64)
            && code != 200
        {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message");
            return Err(eyre!("request to {} failed with status {}: {}", path, code, message));
        }

        Ok(body)
    }
}

impl ProfileSource for LinkedinClient {
    type Session = LinkedinSession;

    async fn authenticate(&self, username: &str, password: &str) -> Result<LinkedinSession> {
        let url = self.endpoint(&["uas", "authenticate"])?;
        info!("authenticating against {}", self.base_url);

        Self::with_headers(self.client.get(url.clone()), &AUTH_HEADERS)
            .send()
            .await?
            .error_for_status()?;

        let cookie = self
            .session_cookie()
            .ok_or_else(|| eyre!("no JSESSIONID cookie received from {}", url))?;

        let response = Self::with_headers(self.client.post(url), &AUTH_HEADERS)
            .form(&[
                ("session_key", username),
                ("session_password", password),
                ("JSESSIONID", cookie.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CredentialsRejected::Unauthorized.into());
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| eyre!("unexpected authentication response ({}): {}", status, e))?;

        match body.get("login_result").and_then(Value::as_str) {
            Some("PASS") => {
                info!("authentication successful");
                Ok(LinkedinSession {
                    csrf_token: cookie.trim_matches('"').to_string(),
                })
            }
            Some(challenge) => Err(CredentialsRejected::Challenge(challenge.to_string()).into()),
            None => Err(eyre!("authentication failed with status {}", status)),
        }
    }

    async fn fetch_profile(
        &self,
        session: &LinkedinSession,
        target: &str,
    ) -> Result<ProfileDocument> {
        info!("fetching profile for {}", target);

        let body = self.voyager(session, target, "profileView").await?;
        let view: ProfileView = from_object(body, "profile view")?;

        Ok(view.into())
    }

    async fn fetch_contact_info(
        &self,
        session: &LinkedinSession,
        target: &str,
    ) -> Result<ContactInfoDocument> {
        info!("fetching contact info for {}", target);

        let body = self.voyager(session, target, "profileContactInfo").await?;
        let view: ContactInfoView = from_object(body, "contact info view")?;

        Ok(view.into())
    }
}

/// Extracts the raw `JSESSIONID` value from a `Cookie` header.
fn jsessionid(cookies: &str) -> Option<&str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix("JSESSIONID="))
}
