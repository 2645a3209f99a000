use super::*;

fn site(name: &str, template: TemplateId, mode: GenerationMode) -> WebsiteSummary {
    WebsiteSummary {
        id: format!("id-{name}"),
        name: name.to_owned(),
        template,
        generation_mode: mode,
        url: None,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn empty_list_has_zero_rows_for_every_category() {
    let stats = WebsiteStats::from_websites(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.by_template.len(), TemplateId::ALL.len());
    assert!(stats.by_template.iter().all(|(_, n)| *n == 0));
    assert_eq!(stats.percent(0), 0);
    assert_eq!(stats.top_template(), None);
}

#[test]
fn counts_by_template_and_mode() {
    let sites = vec![
        site("a", TemplateId::Business, GenerationMode::Standard),
        site("b", TemplateId::Business, GenerationMode::Premium),
        site("c", TemplateId::Blog, GenerationMode::Standard),
    ];
    let stats = WebsiteStats::from_websites(&sites);
    assert_eq!(stats.total, 3);
    assert!(stats.by_template.contains(&(TemplateId::Business, 2)));
    assert!(stats.by_template.contains(&(TemplateId::Blog, 1)));
    assert!(stats.by_mode.contains(&(GenerationMode::Standard, 2)));
    assert!(stats.by_mode.contains(&(GenerationMode::Premium, 1)));
    assert_eq!(stats.top_template(), Some(TemplateId::Business));
}

#[test]
fn percent_rounds_down() {
    let sites = vec![
        site("a", TemplateId::Blog, GenerationMode::Standard),
        site("b", TemplateId::Blog, GenerationMode::Standard),
        site("c", TemplateId::Landing, GenerationMode::Premium),
    ];
    let stats = WebsiteStats::from_websites(&sites);
    assert_eq!(stats.percent(2), 66);
    assert_eq!(stats.percent(1), 33);
}

#[test]
fn top_template_tie_prefers_catalog_order() {
    let sites = vec![
        site("a", TemplateId::Restaurant, GenerationMode::Standard),
        site("b", TemplateId::Portfolio, GenerationMode::Standard),
    ];
    let stats = WebsiteStats::from_websites(&sites);
    assert_eq!(stats.top_template(), Some(TemplateId::Portfolio));
}
