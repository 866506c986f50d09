//! # Page Workflow

use tracing::debug;

use crate::commerce::CommerceWorkflows;
use crate::error::WorkflowResult;

impl CommerceWorkflows {
    /// Reports a view of the home page to analytics, then returns the page
    /// content.
    pub async fn render_page(&self) -> WorkflowResult<&str> {
        let pages = &self.config.pages;

        debug!(path = %pages.home_path, "Tracking page view");
        self.collaborators
            .analytics
            .track_page_view(&pages.home_path)
            .await?;

        Ok(&pages.home_content)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::collaborators::NoOpAnalytics;
    use crate::testing::{init_tracing, Doubles};
    use crate::WorkflowConfig;

    use super::*;

    #[tokio::test]
    async fn test_render_page_returns_content() {
        init_tracing();
        let doubles = Doubles::default();
        let workflows = CommerceWorkflows::new(doubles.collaborators());

        let content = workflows.render_page().await.unwrap();
        assert!(content.contains("content"));
    }

    #[tokio::test]
    async fn test_render_page_tracks_home_view() {
        let doubles = Doubles::default();
        let workflows = CommerceWorkflows::new(doubles.collaborators());

        workflows.render_page().await.unwrap();

        assert_eq!(*doubles.analytics.views.lock().unwrap(), vec!["/home".to_string()]);
    }

    #[tokio::test]
    async fn test_render_page_configured_path() {
        let doubles = Doubles::default();
        let mut config = WorkflowConfig::default();
        config.pages.home_path = "/landing".into();
        let workflows = CommerceWorkflows::with_config(doubles.collaborators(), config).unwrap();

        workflows.render_page().await.unwrap();

        assert_eq!(*doubles.analytics.views.lock().unwrap(), vec!["/landing".to_string()]);
    }

    #[tokio::test]
    async fn test_render_page_without_analytics() {
        let doubles = Doubles::default();
        let mut collaborators = doubles.collaborators();
        collaborators.analytics = Arc::new(NoOpAnalytics);
        let workflows = CommerceWorkflows::new(collaborators);

        assert_eq!(workflows.render_page().await.unwrap(), "<div>content</div>");
    }
}
