use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Bundled work history, newest first.
const EMBEDDED_JOBS: &str = include_str!("../content/jobs.json");

// ============================================================================
// Job record
// ============================================================================

/// One entry of the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    /// Also used as the tab label.
    pub company: String,
    pub location: String,
    /// Free-form date range, e.g. "June 2020 - August 2022".
    pub range: String,
    pub url: String,
    /// HTML fragment rendered as-is inside the panel.
    pub description: String,
}

impl JobRecord {
    pub fn validate(&self) -> Result<(), String> {
        if self.company.trim().is_empty() {
            return Err("company must not be empty".into());
        }
        if self.title.trim().is_empty() {
            return Err(format!("title must not be empty ({})", self.company));
        }
        Ok(())
    }
}

// ============================================================================
// Ordered list
// ============================================================================

/// Read-only ordered job list. Indices are stable for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobList(Vec<JobRecord>);

impl JobList {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self(jobs)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let jobs: Vec<JobRecord> =
            serde_json::from_str(json).context("failed to parse job list")?;
        for (i, job) in jobs.iter().enumerate() {
            if let Err(e) = job.validate() {
                bail!("invalid job #{}: {}", i, e);
            }
        }
        log::debug!("job list loaded: {} entries", jobs.len());
        Ok(Self(jobs))
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_JOBS).context("embedded jobs.json")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JobRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRecord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[JobRecord] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_jobs_load() {
        let jobs = JobList::embedded().unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs.get(0).unwrap().company, "Hanu Software (An Insight Company)");
        assert_eq!(jobs.get(2).unwrap().title, "Deep Learning R&D Intern");
        assert!(jobs.iter().all(|j| j.description.starts_with("<ul>")));
    }

    #[test]
    fn test_order_is_preserved() {
        let json = r#"[
            {"title":"B","company":"Second","location":"","range":"","url":"","description":""},
            {"title":"A","company":"First","location":"","range":"","url":"","description":""}
        ]"#;
        let jobs = JobList::from_json(json).unwrap();
        let companies: Vec<_> = jobs.iter().map(|j| j.company.as_str()).collect();
        assert_eq!(companies, ["Second", "First"]);
    }

    #[test]
    fn test_empty_company_is_rejected() {
        let json = r#"[{"title":"T","company":"  ","location":"","range":"","url":"","description":""}]"#;
        let err = JobList::from_json(json).unwrap_err();
        assert!(err.to_string().contains("invalid job #0"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"[{"title":"T","company":"C"}]"#;
        assert!(JobList::from_json(json).is_err());
    }

    #[test]
    fn test_empty_list_is_valid() {
        let jobs = JobList::from_json("[]").unwrap();
        assert!(jobs.is_empty());
        assert!(jobs.get(0).is_none());
    }
}
