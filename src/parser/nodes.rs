use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::text::clean_label;

pub const DEFAULT_SOCIAL_SELECTOR: &str = r#"a[data-testid="SocialIcon"]"#;
pub const DEFAULT_HEADING_SELECTOR: &str = "h3";
pub const DEFAULT_LINK_SELECTOR: &str = r#"a[data-testid="LinkButton"]"#;

/// The three element kinds the extractor cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    SocialIcon { name: String, url: String },
    Heading(String),
    LinkAnchor { name: String, url: String },
}

/// Compiled CSS selectors for social icons, section headings and link buttons.
#[derive(Debug)]
pub struct Selectors {
    social: Selector,
    heading: Selector,
    link: Selector,
}

impl Selectors {
    pub fn parse(social: &str, heading: &str, link: &str) -> Result<Self> {
        Ok(Self {
            social: compile("social icon", social)?,
            heading: compile("heading", heading)?,
            link: compile("link button", link)?,
        })
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::parse(
            DEFAULT_SOCIAL_SELECTOR,
            DEFAULT_HEADING_SELECTOR,
            DEFAULT_LINK_SELECTOR,
        )
        .expect("default selectors are valid CSS")
    }
}

fn compile(what: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid {} selector {:?}: {}", what, css, e))
}

/// Flatten a document into typed nodes.
///
/// Social icons come first, in document order. Headings and link buttons
/// follow, interleaved in document order. An element matching both the
/// social and the link button selector only counts as a social icon.
/// Anchors without an `href` are dropped, and so is anything nested inside
/// a matched social icon or link button.
pub fn collect_nodes(doc: &Html, selectors: &Selectors) -> Vec<Node> {
    let mut nodes = Vec::new();

    for el in doc.select(&selectors.social) {
        let Some(url) = el.value().attr("href") else {
            debug!("Social icon without href skipped");
            continue;
        };
        nodes.push(Node::SocialIcon {
            name: clean_label(el.value().attr("title").unwrap_or("")),
            url: url.to_string(),
        });
    }

    for el in doc.root_element().descendants().filter_map(ElementRef::wrap) {
        if selectors.social.matches(&el) || inside_matched(&el, selectors) {
            continue;
        }
        if selectors.heading.matches(&el) {
            let text = visible_text(&el).trim().to_string();
            if text.is_empty() {
                debug!("Empty heading ignored");
            } else {
                nodes.push(Node::Heading(text));
            }
        } else if selectors.link.matches(&el) {
            let Some(url) = el.value().attr("href") else {
                debug!("Link button without href skipped");
                continue;
            };
            nodes.push(Node::LinkAnchor {
                name: link_name(&el),
                url: url.to_string(),
            });
        }
    }

    nodes
}

fn inside_matched(el: &ElementRef, selectors: &Selectors) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| selectors.link.matches(&a) || selectors.social.matches(&a))
}

fn visible_text(el: &ElementRef) -> String {
    el.text().collect()
}

/// Visible text, or the `title` attribute when the text is empty.
fn link_name(el: &ElementRef) -> String {
    let text = clean_label(&visible_text(el));
    if !text.is_empty() {
        return text;
    }
    clean_label(el.value().attr("title").unwrap_or(""))
}
