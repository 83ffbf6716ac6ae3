mod browser;
mod roles;
pub mod site;

pub use browser::{BrowserError, BrowserSession, StaticHttpSession};
pub use roles::JobRole;

use crate::config::CollectConfig;
use crate::dataset::Posting;
use crate::extract::HybridExtractor;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Everything gathered before the loop ended, plus the error that cut it
/// short, if any. Callers persist the postings either way.
#[derive(Debug)]
pub struct CollectionOutcome {
    pub postings: Vec<Posting>,
    pub aborted: Option<BrowserError>,
}

/// Sequential, single-session collection: one role at a time, and within a
/// role one detail page at a time.
pub struct Collector {
    config: CollectConfig,
    extractor: HybridExtractor,
}

impl Collector {
    pub fn new(config: CollectConfig) -> Self {
        Self {
            config,
            extractor: HybridExtractor::standard(),
        }
    }

    pub fn run<S: BrowserSession>(&self, session: &mut S) -> CollectionOutcome {
        let mut postings = Vec::new();
        for role in JobRole::ordered() {
            info!(role = role.label(), "collecting role");
            match self.collect_role(session, role, &mut postings) {
                Ok(()) => {}
                Err(err) if err.is_transient() => {
                    warn!(role = role.label(), error = %err, "listing did not load, skipping role");
                }
                Err(err) => {
                    warn!(error = %err, "collection aborted early, persisting what was gathered");
                    return CollectionOutcome {
                        postings,
                        aborted: Some(err),
                    };
                }
            }
        }
        CollectionOutcome {
            postings,
            aborted: None,
        }
    }

    fn collect_role<S: BrowserSession>(
        &self,
        session: &mut S,
        role: JobRole,
        postings: &mut Vec<Posting>,
    ) -> Result<(), BrowserError> {
        session.load(role.list_url(), site::LIST_ITEM_CLASS)?;

        // keep scrolling while the page grows, bounded
        for _ in 0..self.config.max_scroll_rounds {
            if !session.scroll_to_bottom()? {
                break;
            }
        }

        let links = detail_links(session.page_source());
        info!(role = role.label(), links = links.len(), "detail links found");

        let mut collected = 0usize;
        for link in links {
            if collected >= self.config.target_count {
                info!(
                    role = role.label(),
                    target = self.config.target_count,
                    "target reached, moving to next role"
                );
                break;
            }

            match session.load(&link, site::DESCRIPTION_CLASS) {
                Ok(_) => {}
                Err(err) if err.is_transient() => {
                    warn!(url = %link, error = %err, "detail page did not load, skipping");
                    continue;
                }
                Err(err) => return Err(err),
            }

            let document = Html::parse_document(session.page_source());
            let skills = self.extractor.skills(&document);
            if skills.is_empty() {
                info!(url = %link, "no identifiable skills in posting, excluded");
                continue;
            }

            postings.push(Posting {
                job_role: role,
                company: company_text(&document),
                title: title_text(&document),
                skills,
            });
            collected += 1;
        }

        info!(role = role.label(), collected, "role finished");
        Ok(())
    }
}

fn detail_links(page: &str) -> Vec<String> {
    let document = Html::parse_document(page);
    let mut links = Vec::new();
    for card in document.select(list_item_selector()) {
        if let Some(anchor) = card.select(detail_link_selector()).next() {
            if let Some(href) = anchor.value().attr("href") {
                links.push(absolute_url(href));
            }
        }
    }
    links
}

fn absolute_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", site::BASE_URL, href)
    }
}

fn title_text(document: &Html) -> String {
    selected_text(document, title_selector())
}

fn company_text(document: &Html) -> String {
    selected_text(document, company_selector())
}

fn selected_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "N/A".to_string())
}

fn list_item_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR
        .get_or_init(|| Selector::parse(site::LIST_ITEM_SELECTOR).expect("valid list selector"))
}

fn detail_link_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(site::DETAIL_LINK_SELECTOR).expect("valid detail link selector")
    })
}

fn title_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse(site::TITLE_SELECTOR).expect("valid title selector"))
}

fn company_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR
        .get_or_init(|| Selector::parse(site::COMPANY_SELECTOR).expect("valid company selector"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_links_are_absolutized() {
        let page = "<html><body><ul>\
            <li class=\"Card_Card__aaatv\"><div data-cy=\"job-card\">\
            <a href=\"/wd/12345\">공고</a></div></li>\
            <li class=\"Card_Card__aaatv\"><div data-cy=\"job-card\">\
            <a href=\"https://example.com/wd/6\">공고</a></div></li>\
            </ul></body></html>";
        let links = detail_links(page);
        assert_eq!(
            links,
            vec![
                "https://www.wanted.co.kr/wd/12345".to_string(),
                "https://example.com/wd/6".to_string(),
            ]
        );
    }

    #[test]
    fn cards_without_anchor_are_ignored() {
        let page = "<html><body>\
            <li class=\"Card_Card__aaatv\"><div data-cy=\"job-card\"></div></li>\
            </body></html>";
        assert!(detail_links(page).is_empty());
    }

    #[test]
    fn missing_header_fields_fall_back() {
        let document = Html::parse_document("<html><body></body></html>");
        assert_eq!(title_text(&document), "N/A");
        assert_eq!(company_text(&document), "N/A");
    }

    #[test]
    fn header_fields_are_trimmed() {
        let document = Html::parse_document(
            "<html><body>\
             <h1 class=\"wds-58fmok\">  백엔드 엔지니어  </h1>\
             <a class=\"JobHeader_JobHeader__Tools__Company__Link__NoBQI\"> 원티드랩 </a>\
             </body></html>",
        );
        assert_eq!(title_text(&document), "백엔드 엔지니어");
        assert_eq!(company_text(&document), "원티드랩");
    }
}
