use serde::Deserialize;

pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_AVAILABLE: &str = "N/A";
pub const PORTFOLIO_LABEL: &str = "PORTFOLIO";

/// A date where month and/or year may be unknown.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct PartialDate {
    pub month: Option<u32>,
    pub year: Option<u32>,
}

impl PartialDate {
    /// Renders as `month/year`, or an empty string when nothing is known.
    pub fn display(date: Option<&PartialDate>) -> String {
        match date {
            Some(PartialDate { month: None, year: None }) | None => String::new(),
            Some(date) => format!(
                "{}/{}",
                date.month.map(|m| m.to_string()).unwrap_or_default(),
                date.year.map(|y| y.to_string()).unwrap_or_default()
            ),
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimePeriod {
    pub start_date: Option<PartialDate>,
    pub end_date: Option<PartialDate>,
}

fn start_of(period: &Option<TimePeriod>) -> String {
    PartialDate::display(period.as_ref().and_then(|p| p.start_date.as_ref()))
}

fn end_of(period: &Option<TimePeriod>) -> String {
    PartialDate::display(period.as_ref().and_then(|p| p.end_date.as_ref()))
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company_name: Option<String>,
    pub title: Option<String>,
    pub location_name: Option<String>,
    pub time_period: Option<TimePeriod>,
    pub description: Option<String>,
}

impl ExperienceEntry {
    pub fn company(&self) -> &str {
        or_default(&self.company_name, NOT_AVAILABLE)
    }

    pub fn title(&self) -> &str {
        or_default(&self.title, NOT_AVAILABLE)
    }

    pub fn location(&self) -> &str {
        or_default(&self.location_name, NOT_AVAILABLE)
    }

    pub fn description(&self) -> &str {
        or_default(&self.description, "No description available")
    }

    pub fn start(&self) -> String {
        start_of(&self.time_period)
    }

    /// Falls back to `Present` for ongoing positions.
    pub fn end(&self) -> String {
        match end_of(&self.time_period) {
            end if end.is_empty() => "Present".to_string(),
            end => end,
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub school_name: Option<String>,
    pub degree_name: Option<String>,
    pub field_of_study: Option<String>,
    pub time_period: Option<TimePeriod>,
}

impl EducationEntry {
    pub fn school(&self) -> &str {
        or_default(&self.school_name, "Unknown School")
    }

    pub fn degree(&self) -> &str {
        or_default(&self.degree_name, "")
    }

    pub fn field_of_study(&self) -> &str {
        or_default(&self.field_of_study, NOT_AVAILABLE)
    }

    pub fn start(&self) -> String {
        start_of(&self.time_period)
    }

    pub fn end(&self) -> String {
        end_of(&self.time_period)
    }
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: Option<String>,
}

impl Skill {
    pub fn name(&self) -> &str {
        or_default(&self.name, NOT_AVAILABLE)
    }
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: Option<String>,
    pub authority: Option<String>,
    pub time_period: Option<TimePeriod>,
}

impl Certification {
    pub fn name(&self) -> &str {
        or_default(&self.name, "Unknown Certification")
    }

    pub fn authority(&self) -> &str {
        or_default(&self.authority, "Unknown Authority")
    }

    pub fn start(&self) -> String {
        start_of(&self.time_period)
    }
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

impl Language {
    pub fn name(&self) -> &str {
        or_default(&self.name, NOT_AVAILABLE)
    }

    pub fn proficiency(&self) -> &str {
        or_default(&self.proficiency, NOT_AVAILABLE)
    }
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileDocument {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub location_name: Option<String>,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
}

impl ProfileDocument {
    /// First and last name joined by a single space, untrimmed.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            or_default(&self.first_name, ""),
            or_default(&self.last_name, "")
        )
    }

    pub fn headline(&self) -> &str {
        or_default(&self.headline, "No headline available")
    }

    pub fn location(&self) -> &str {
        or_default(&self.location_name, "Unknown location")
    }

    pub fn summary(&self) -> &str {
        or_default(&self.summary, "No summary available")
    }
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct Website {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct ContactInfoDocument {
    pub email_address: Option<String>,
    pub websites: Vec<Website>,
}

impl ContactInfoDocument {
    pub fn email(&self) -> &str {
        or_default(&self.email_address, NOT_PROVIDED)
    }

    /// URL of the first website labelled exactly `PORTFOLIO`.
    pub fn portfolio(&self) -> &str {
        self.websites
            .iter()
            .find(|site| site.label.as_deref() == Some(PORTFOLIO_LABEL))
            .and_then(|site| site.url.as_deref())
            .unwrap_or(NOT_PROVIDED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::from_object;
    use serde_json::json;

    #[test]
    fn test_date_with_both_parts() {
        let date = PartialDate {
            month: Some(5),
            year: Some(2020),
        };
        assert_eq!(PartialDate::display(Some(&date)), "5/2020");
    }

    #[test]
    fn test_empty_or_absent_date_is_blank() {
        assert_eq!(PartialDate::display(Some(&PartialDate::default())), "");
        assert_eq!(PartialDate::display(None), "");
    }

    #[test]
    fn test_date_with_only_year_keeps_separator() {
        let date = PartialDate {
            month: None,
            year: Some(1999),
        };
        assert_eq!(PartialDate::display(Some(&date)), "/1999");
    }

    #[test]
    fn test_empty_documents_use_fallbacks() {
        let profile = from_object::<ProfileDocument>(json!({}), "profile").unwrap();
        assert_eq!(profile.full_name(), " ");
        assert_eq!(profile.headline(), "No headline available");
        assert_eq!(profile.location(), "Unknown location");
        assert_eq!(profile.summary(), "No summary available");

        let contact = from_object::<ContactInfoDocument>(json!({}), "contact").unwrap();
        assert_eq!(contact.email(), "Not provided");
        assert_eq!(contact.portfolio(), "Not provided");
    }

    #[test]
    fn test_nulls_behave_like_missing_keys() {
        let profile: ProfileDocument = from_object(
            json!({
                "firstName": null,
                "experience": null,
                "education": [{ "schoolName": null, "timePeriod": null }]
            }),
            "profile",
        )
        .unwrap();
        assert!(profile.experience.is_empty());
        assert_eq!(profile.education[0].school(), "Unknown School");
        assert_eq!(profile.education[0].degree(), "");
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(from_object::<ProfileDocument>(json!([1, 2, 3]), "profile").is_err());
        assert!(from_object::<ContactInfoDocument>(json!("nope"), "contact").is_err());
    }

    #[test]
    fn test_portfolio_lookup_is_exact() {
        let contact: ContactInfoDocument = from_object(
            json!({
                "websites": [
                    { "url": "https://blog" },
                    { "label": "portfolio", "url": "https://lower" },
                    { "label": "PORTFOLIO", "url": "https://x" },
                    { "label": "PORTFOLIO", "url": "https://second" }
                ]
            }),
            "contact",
        )
        .unwrap();
        assert_eq!(contact.portfolio(), "https://x");
    }

    #[test]
    fn test_experience_without_end_is_present() {
        let entry: ExperienceEntry = serde_json::from_value(json!({
            "timePeriod": { "startDate": { "month": 3, "year": 2019 } }
        }))
        .unwrap();
        assert_eq!(entry.start(), "3/2019");
        assert_eq!(entry.end(), "Present");

        let entry: ExperienceEntry = serde_json::from_value(json!({
            "timePeriod": { "endDate": {} }
        }))
        .unwrap();
        assert_eq!(entry.end(), "Present");
    }
}
