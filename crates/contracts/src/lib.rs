pub mod config;
pub mod content;
pub mod jobs;
pub mod tab_selector;

pub use config::{RevealConfig, RevealOrigin, SiteConfig};
pub use content::{About, Project, SiteContent};
pub use jobs::{JobList, JobRecord};
pub use tab_selector::{FocusCommand, FocusStep, TabError, TabSelector};
