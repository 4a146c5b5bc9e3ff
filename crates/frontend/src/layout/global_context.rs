use contracts::{JobList, SiteConfig, SiteContent};

/// Everything the page renders, loaded once at startup and provided via context.
#[derive(Clone, Debug)]
pub struct SiteContext {
    pub config: SiteConfig,
    pub content: SiteContent,
    pub jobs: JobList,
    pub reduced_motion: bool,
}

impl SiteContext {
    pub fn new(config: SiteConfig, reduced_motion: bool) -> Self {
        let content = SiteContent::embedded().unwrap_or_else(|e| {
            log::error!("site content failed to load: {:#}", e);
            SiteContent::default()
        });
        let jobs = JobList::embedded().unwrap_or_else(|e| {
            log::error!("job list failed to load: {:#}", e);
            JobList::default()
        });
        Self {
            config,
            content,
            jobs,
            reduced_motion,
        }
    }
}
