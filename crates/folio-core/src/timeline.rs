//! Publication/event partitions of the timeline.
//!
//! Publications and theses are listed separately from talks, exhibitions,
//! awards and other events. Both partitions keep the supplied order.

use crate::models::TimelineItem;

/// Timeline types listed as publications.
pub const PUBLICATION_KINDS: [&str; 2] = ["Publication", "Thesis"];

pub fn is_publication(item: &TimelineItem) -> bool {
    PUBLICATION_KINDS.contains(&item.kind.as_str())
}

/// Items whose type is `Publication` or `Thesis`.
pub fn publications(items: &[TimelineItem]) -> impl Iterator<Item = &TimelineItem> {
    items.iter().filter(|item| is_publication(item))
}

/// Every item that is not a publication.
pub fn events(items: &[TimelineItem]) -> impl Iterator<Item = &TimelineItem> {
    items.iter().filter(|item| !is_publication(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: &str, title: &str) -> TimelineItem {
        TimelineItem {
            kind: kind.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_partitions_are_disjoint_and_ordered() {
        let items = vec![
            item("Talk", "a"),
            item("Thesis", "b"),
            item("Award", "c"),
            item("Publication", "d"),
        ];
        let pubs: Vec<&str> = publications(&items).map(|i| i.title.as_str()).collect();
        let evts: Vec<&str> = events(&items).map(|i| i.title.as_str()).collect();
        assert_eq!(pubs, vec!["b", "d"]);
        assert_eq!(evts, vec!["a", "c"]);
    }

    #[test]
    fn test_type_match_is_exact() {
        assert!(!is_publication(&item("publication", "x")));
        assert!(!is_publication(&item("Publications", "x")));
        assert!(is_publication(&item("Thesis", "x")));
    }
}
