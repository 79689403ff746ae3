use std::collections::HashSet;

use tracing::debug;

use super::nodes::Node;
use crate::output::LinkRecord;

pub const PERSONAL: &str = "personal";
pub const UNCATEGORIZED: &str = "Uncategorized";

/// What to do with a link button whose href was already recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Record every link button.
    #[default]
    Keep,
    /// Skip link buttons whose href already appears in the output.
    SkipSeen,
}

/// Fold nodes into records, tracking the current category heading.
pub fn build_records(nodes: &[Node], policy: OverlapPolicy) -> Vec<LinkRecord> {
    let mut records = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current_category: Option<&str> = None;

    for node in nodes {
        match node {
            Node::SocialIcon { name, url } => {
                seen.insert(url.as_str());
                records.push(LinkRecord::new(name, url, PERSONAL));
            }
            Node::Heading(text) => {
                current_category = Some(text.as_str());
            }
            Node::LinkAnchor { name, url } => {
                if policy == OverlapPolicy::SkipSeen && seen.contains(url.as_str()) {
                    debug!("Skipping already recorded href {}", url);
                    continue;
                }
                seen.insert(url.as_str());
                let category = current_category.unwrap_or(UNCATEGORIZED);
                records.push(LinkRecord::new(name, url, category));
            }
        }
    }

    records
}
