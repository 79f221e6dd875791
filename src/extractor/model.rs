use serde::{Deserialize, Serialize};

/// Sentinels returned when a probe finds nothing. Extraction never fails
/// and never returns an empty field.
pub const TITLE_NOT_FOUND: &str = "Job title not found";
pub const COMPANY_NOT_FOUND: &str = "Company not found";
pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Best-effort scrape of one job posting page.
///
/// Every field is populated, with a sentinel where the page gave nothing.
/// Created once per session from the fetched page and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedJobData {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub benefits: String,
    pub requirements: String,
    pub url: String,
}

impl ScrapedJobData {
    /// Render the scrape as the job-text block handed to the model.
    pub fn as_prompt(&self) -> String {
        format!(
            "Job posting ({url})\n\
             Title: {title}\n\
             Company: {company}\n\
             Location: {location}\n\
             Salary: {salary}\n\
             Description: {description}\n\
             Benefits: {benefits}\n\
             Requirements: {requirements}",
            url = self.url,
            title = self.title,
            company = self.company,
            location = self.location,
            salary = self.salary,
            description = self.description,
            benefits = self.benefits,
            requirements = self.requirements,
        )
    }
}

/// Collapse whitespace runs so nested-markup text reads as one line.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize_whitespace("  Senior\n\t Engineer  "), "Senior Engineer");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn prompt_contains_every_field() {
        let data = ScrapedJobData {
            title: "Engineer".into(),
            company: "Acme".into(),
            location: "Milan".into(),
            salary: NOT_SPECIFIED.into(),
            description: "Build things".into(),
            benefits: NOT_SPECIFIED.into(),
            requirements: "experience with rust".into(),
            url: "https://www.linkedin.com/jobs/view/1".into(),
        };
        let prompt = data.as_prompt();
        for needle in ["Engineer", "Acme", "Milan", "Build things", "rust"] {
            assert!(prompt.contains(needle));
        }
    }
}
