pub mod linkedin;

use eyre::Result;
use thiserror::Error;

use crate::models::profile::{ContactInfoDocument, ProfileDocument};

/// The remote side refused these credentials; repeating the login will not help.
#[derive(Debug, Error)]
pub enum CredentialsRejected {
    #[error("authentication rejected: unauthorized")]
    Unauthorized,

    #[error("authentication challenge: {0}")]
    Challenge(String),
}

/// Anything that can log in and hand back the two documents a resume is built from.
pub trait ProfileSource {
    type Session;

    async fn authenticate(&self, username: &str, password: &str) -> Result<Self::Session>;

    async fn fetch_profile(
        &self,
        session: &Self::Session,
        target: &str,
    ) -> Result<ProfileDocument>;

    async fn fetch_contact_info(
        &self,
        session: &Self::Session,
        target: &str,
    ) -> Result<ContactInfoDocument>;
}
