use std::collections::HashMap;

use serde::Deserialize;

use crate::models::profile::{
    Certification, ContactInfoDocument, EducationEntry, ExperienceEntry, Language,
    ProfileDocument, Skill, Website,
};

const STANDARD_WEBSITE: &str = "com.linkedin.voyager.identity.profile.StandardWebsite";
const CUSTOM_WEBSITE: &str = "com.linkedin.voyager.identity.profile.CustomWebsite";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ElementView<T> {
    pub elements: Vec<T>,
}

impl<T> Default for ElementView<T> {
    fn default() -> Self {
        ElementView {
            elements: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileHeader {
    first_name: Option<String>,
    last_name: Option<String>,
    headline: Option<String>,
    location_name: Option<String>,
    summary: Option<String>,
}

/// Body of `identity/profiles/{id}/profileView`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileView {
    profile: ProfileHeader,
    position_view: ElementView<ExperienceEntry>,
    education_view: ElementView<EducationEntry>,
    skill_view: ElementView<Skill>,
    certification_view: ElementView<Certification>,
    language_view: ElementView<Language>,
}

impl From<ProfileView> for ProfileDocument {
    fn from(view: ProfileView) -> Self {
        ProfileDocument {
            first_name: view.profile.first_name,
            last_name: view.profile.last_name,
            headline: view.profile.headline,
            location_name: view.profile.location_name,
            summary: view.profile.summary,
            experience: view.position_view.elements,
            education: view.education_view.elements,
            skills: view.skill_view.elements,
            certifications: view.certification_view.elements,
            languages: view.language_view.elements,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WebsiteType {
    category: Option<String>,
    label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VoyagerWebsite {
    url: Option<String>,
    r#type: HashMap<String, WebsiteType>,
}

impl From<VoyagerWebsite> for Website {
    fn from(site: VoyagerWebsite) -> Self {
        let mut kinds = site.r#type;
        let label = if let Some(standard) = kinds.remove(STANDARD_WEBSITE) {
            standard.category
        } else if let Some(custom) = kinds.remove(CUSTOM_WEBSITE) {
            custom.label
        } else {
            None
        };

        Website {
            label,
            url: site.url,
        }
    }
}

/// Body of `identity/profiles/{id}/profileContactInfo`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfoView {
    email_address: Option<String>,
    websites: Vec<VoyagerWebsite>,
}

impl From<ContactInfoView> for ContactInfoDocument {
    fn from(view: ContactInfoView) -> Self {
        ContactInfoDocument {
            email_address: view.email_address,
            websites: view.websites.into_iter().map(Website::from).collect(),
        }
    }
}
