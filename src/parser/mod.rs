pub mod nodes;
pub mod records;
pub mod text;

use scraper::Html;
use tracing::info;

use crate::output::LinkRecord;
pub use nodes::Selectors;
pub use records::OverlapPolicy;

/// Two-step pipeline: html → typed nodes → link records.
pub fn extract_links(html: &str, selectors: &Selectors, policy: OverlapPolicy) -> Vec<LinkRecord> {
    let doc = Html::parse_document(html);
    let nodes = nodes::collect_nodes(&doc, selectors);
    let records = records::build_records(&nodes, policy);
    info!("Extracted {} links from {} nodes", records.len(), nodes.len());
    records
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use records::{PERSONAL, UNCATEGORIZED};

    fn parse(fixture: &str, policy: OverlapPolicy) -> Vec<LinkRecord> {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
        extract_links(&html, &Selectors::default(), policy)
    }

    #[test]
    fn profile_fixture() {
        let r = parse("profile", OverlapPolicy::Keep);
        let rows: Vec<(&str, &str, &str)> = r
            .iter()
            .map(|x| (x.name.as_str(), x.url.as_str(), x.category.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Instagram", "https://instagram.com/janedoe", PERSONAL),
                ("YouTube", "https://youtube.com/@janedoe", PERSONAL),
                ("My Blog", "https://janedoe.blog", UNCATEGORIZED),
                ("Spotify", "https://open.spotify.com/artist/1", "Music"),
                ("Apple Music", "https://music.apple.com/jane", "Music"),
                ("Tour, 2025 \"Live\"", "/tour", "Music"),
                ("Latest video", "https://youtube.com/@janedoe", "Videos"),
                ("Shop", "https://shop.example/jane", "Videos"),
            ]
        );
    }

    #[test]
    fn profile_fixture_skip_seen() {
        let r = parse("profile", OverlapPolicy::SkipSeen);
        assert_eq!(r.len(), 7);
        assert!(!r.iter().any(|x| x.name == "Latest video"));
    }

    #[test]
    fn labels_keep_inner_whitespace() {
        let html = r#"<h3>Music
   Videos</h3>
            <a data-testid="LinkButton" href="/tour"><p>Tour
2025</p></a>
            <a data-testid="LinkButton" href="/shop">Shop   Shop</a>"#;
        let r = extract_links(html, &Selectors::default(), OverlapPolicy::Keep);
        assert_eq!(
            r,
            vec![
                LinkRecord::new("Tour\n2025", "/tour", "Music\n   Videos"),
                LinkRecord::new("Shop   Shop", "/shop", "Music\n   Videos"),
            ]
        );
    }

    #[test]
    fn nested_heading_does_not_move_category() {
        let html = r#"
            <h3>Music</h3>
            <a data-testid="LinkButton" href="/a"><h3>Album</h3></a>
            <a data-testid="LinkButton" href="/b">B</a>"#;
        let r = extract_links(html, &Selectors::default(), OverlapPolicy::Keep);
        assert_eq!(r[1], LinkRecord::new("B", "/b", "Music"));
    }

    #[test]
    fn no_links_fixture() {
        assert!(parse("empty", OverlapPolicy::Keep).is_empty());
    }
}
