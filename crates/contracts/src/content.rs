use anyhow::Context;
use serde::{Deserialize, Serialize};

const EMBEDDED_CONTENT: &str = include_str!("../content/content.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub external: Option<String>,
}

/// Static text of the about and projects sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse site content")
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.about.paragraphs.len(), 3);
        assert!(!content.about.skills.is_empty());
        assert_eq!(content.projects.len(), 3);
        assert!(content.projects[2].github.is_none());
    }

    #[test]
    fn test_optional_links_default_to_none() {
        let json = r#"{"about":{"paragraphs":[]},"projects":[{"title":"T","description":"D"}]}"#;
        let content = SiteContent::from_json(json).unwrap();
        assert!(content.about.skills.is_empty());
        assert_eq!(content.projects[0].github, None);
        assert!(content.projects[0].tech.is_empty());
    }
}
