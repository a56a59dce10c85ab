use std::fmt;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use log::{debug, info, warn};
use thiserror::Error;

use crate::models::profile::{ContactInfoDocument, ProfileDocument};
use crate::resume::assembler::TextResumeAssembler;
use crate::scraper::{CredentialsRejected, ProfileSource};
use crate::utils::config::LinkedinConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Target,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::Target => "target profile",
        })
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("please enter LinkedIn credentials and the target profile username (missing: {})", join_fields(.missing))]
    MissingInput { missing: Vec<Field> },

    #[error("an error occurred: {0:#}")]
    Retrieval(eyre::Report),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

/// Everything one resume generation needs; nothing outlives the call.
#[derive(Clone)]
pub struct ResumeRequest {
    pub username: String,
    pub password: String,
    pub target: String,
}

impl fmt::Debug for ResumeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeRequest")
            .field("username", &self.username)
            .field("password", &"********")
            .field("target", &self.target)
            .finish()
    }
}

impl ResumeRequest {
    pub fn missing(&self) -> Vec<Field> {
        [
            (Field::Username, &self.username),
            (Field::Password, &self.password),
            (Field::Target, &self.target),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub min_delay: Duration,
}

impl From<&LinkedinConfig> for RetryPolicy {
    fn from(config: &LinkedinConfig) -> Self {
        RetryPolicy {
            max_retries: config.max_retries,
            min_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedResume {
    pub target: String,
    pub body: String,
}

/// Validates the request, retrieves both documents and formats them.
pub async fn generate<S: ProfileSource>(
    request: &ResumeRequest,
    source: &S,
    retry: RetryPolicy,
) -> Result<GeneratedResume, GenerateError> {
    let missing = request.missing();
    if !missing.is_empty() {
        return Err(GenerateError::MissingInput { missing });
    }

    let (profile, contact) = (|| retrieve(request, source))
        .retry(
            ExponentialBuilder::default()
                .with_min_delay(retry.min_delay)
                .with_max_times(retry.max_retries),
        )
        .when(|err: &eyre::Report| err.downcast_ref::<CredentialsRejected>().is_none())
        .notify(|err: &eyre::Report, after: Duration| {
            warn!("retrieval failed ({:#}), retrying in {:?}", err, after);
        })
        .await
        .map_err(GenerateError::Retrieval)?;

    debug!("retrieved profile: {:#?}", profile);
    debug!("retrieved contact info: {:#?}", contact);

    let body = TextResumeAssembler::new(&profile, &contact).assemble();
    info!("resume for {} assembled ({} bytes)", request.target, body.len());

    Ok(GeneratedResume {
        target: request.target.clone(),
        body,
    })
}

async fn retrieve<S: ProfileSource>(
    request: &ResumeRequest,
    source: &S,
) -> eyre::Result<(ProfileDocument, ContactInfoDocument)> {
    let session = source
        .authenticate(&request.username, &request.password)
        .await?;
    let profile = source.fetch_profile(&session, &request.target).await?;
    let contact = source.fetch_contact_info(&session, &request.target).await?;

    Ok((profile, contact))
}
