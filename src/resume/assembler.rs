use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::profile::{
    Certification, ContactInfoDocument, EducationEntry, ExperienceEntry, NOT_PROVIDED,
    ProfileDocument,
};

static TEMPLATE: &str = include_str!("template.txt");
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<<([A-Z_]+)>>").expect("placeholder pattern is valid"));

pub struct TextResumeAssembler<'a> {
    profile: &'a ProfileDocument,
    contact: &'a ContactInfoDocument,
}

impl<'a> TextResumeAssembler<'a> {
    pub fn new(profile: &'a ProfileDocument, contact: &'a ContactInfoDocument) -> Self {
        Self { profile, contact }
    }

    pub fn assemble(&self) -> String {
        let values: HashMap<&str, String> = HashMap::from([
            ("NAME", self.profile.full_name()),
            ("HEADLINE", self.profile.headline().to_string()),
            ("LOCATION", self.profile.location().to_string()),
            ("EMAIL", self.contact.email().to_string()),
            ("GITHUB", self.contact.portfolio().to_string()),
            ("WEBSITES", self.websites()),
            ("SUMMARY", self.profile.summary().to_string()),
            ("EXPERIENCE", Self::blocks(&self.profile.experience, Self::experience)),
            ("EDUCATION", Self::blocks(&self.profile.education, Self::education)),
            ("SKILLS", self.skills()),
            ("CERTIFICATIONS", self.certifications()),
            ("LANGUAGES", self.languages()),
        ]);

        // single pass: substituted profile text is never rescanned
        PLACEHOLDER
            .replace_all(TEMPLATE, |caps: &Captures| {
                values
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    fn websites(&self) -> String {
        if self.contact.websites.is_empty() {
            return NOT_PROVIDED.to_string();
        }

        self.contact
            .websites
            .iter()
            .map(|site| {
                let url = site.url.as_deref().unwrap_or(NOT_PROVIDED);
                match &site.label {
                    Some(label) => format!("{}: {}", label, url),
                    None => url.to_string(),
                }
            })
            .collect::<Vec<String>>()
            .join(", ")
    }

    fn experience(exp: &ExperienceEntry) -> String {
        format!(
            "{} at {} ({} - {})\nLocation: {}\nDescription: {}",
            exp.title(),
            exp.company(),
            exp.start(),
            exp.end(),
            exp.location(),
            exp.description()
        )
    }

    fn education(edu: &EducationEntry) -> String {
        format!(
            "{} - {} ({} - {})\nField of Study: {}",
            edu.school(),
            edu.degree(),
            edu.start(),
            edu.end(),
            edu.field_of_study()
        )
    }

    fn certification(cert: &Certification) -> String {
        format!("{} by {} ({})", cert.name(), cert.authority(), cert.start())
    }

    fn blocks<T>(entries: &[T], render: fn(&T) -> String) -> String {
        entries
            .iter()
            .map(render)
            .collect::<Vec<String>>()
            .join("\n\n")
    }

    fn skills(&self) -> String {
        self.profile
            .skills
            .iter()
            .map(|skill| skill.name())
            .collect::<Vec<&str>>()
            .join(", ")
    }

    fn certifications(&self) -> String {
        self.profile
            .certifications
            .iter()
            .map(Self::certification)
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn languages(&self) -> String {
        self.profile
            .languages
            .iter()
            .map(|lang| format!("{} ({})", lang.name(), lang.proficiency()))
            .collect::<Vec<String>>()
            .join(", ")
    }
}
