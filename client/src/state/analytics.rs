#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::types::{GenerationMode, TemplateId, WebsiteSummary};

/// Aggregate counts over the `websites` list for the analytics page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WebsiteStats {
    pub total: usize,
    /// One row per template in catalog order, including zero counts.
    pub by_template: Vec<(TemplateId, usize)>,
    pub by_mode: Vec<(GenerationMode, usize)>,
}

impl WebsiteStats {
    #[must_use]
    pub fn from_websites(websites: &[WebsiteSummary]) -> Self {
        let by_template = TemplateId::ALL
            .into_iter()
            .map(|t| (t, websites.iter().filter(|w| w.template == t).count()))
            .collect();
        let by_mode = GenerationMode::ALL
            .into_iter()
            .map(|m| (m, websites.iter().filter(|w| w.generation_mode == m).count()))
            .collect();
        Self { total: websites.len(), by_template, by_mode }
    }

    /// Share of `count` in the total as a whole percentage (0 when empty).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent(&self, count: usize) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((count * 100) / self.total) as u32
    }

    /// Template with the most sites; ties resolve to catalog order.
    #[must_use]
    pub fn top_template(&self) -> Option<TemplateId> {
        self.by_template
            .iter()
            .filter(|(_, n)| *n > 0)
            .fold(None, |best: Option<(TemplateId, usize)>, &(t, n)| match best {
                Some((_, bn)) if bn >= n => best,
                _ => Some((t, n)),
            })
            .map(|(t, _)| t)
    }
}
