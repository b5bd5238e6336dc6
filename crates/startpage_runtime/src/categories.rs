//! Explicit category ordering with self-healing.

use std::cmp::Ordering;

use crate::bookmarks::bookmark_group;
use crate::model::{Bookmark, BookmarkGroup};

/// Returns the distinct category labels derived from the bookmark list, in first-seen order.
///
/// Only category groups contribute labels; favorites are a synthetic group and never appear
/// here. An empty category shows up as the general bucket via group derivation.
pub fn derived_category_labels(bookmarks: &[Bookmark]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for bookmark in bookmarks {
        if let BookmarkGroup::Category(label) = bookmark_group(bookmark) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    labels
}

/// Compares two category labels against an explicit ordering.
///
/// Labels present in `explicit_order` sort by their index there. A label in the order always
/// sorts before one that is not. When neither label is ordered the tie breaks
/// case-insensitively by name, so unordered categories render alphabetically.
pub fn compare_category_labels(explicit_order: &[String], a: &str, b: &str) -> Ordering {
    let index_a = explicit_order.iter().position(|l| l == a);
    let index_b = explicit_order.iter().position(|l| l == b);
    match (index_a, index_b) {
        (Some(ia), Some(ib)) => ia.cmp(&ib),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Derives the category labels for rendering, sorted under the explicit order.
pub fn sorted_category_labels(bookmarks: &[Bookmark], explicit_order: &[String]) -> Vec<String> {
    let mut labels = derived_category_labels(bookmarks);
    labels.sort_by(|a, b| compare_category_labels(explicit_order, a, b));
    labels
}

/// Reorders one category before another, returning whether the order changed.
///
/// The explicit order self-heals before the move: an empty order is seeded from
/// `derived_labels` (the caller passes the currently rendered, sorted list), and labels missing
/// from the order are appended, source before target. The source is then removed and
/// re-inserted at the target's pre-removal index. Self-drops leave the order untouched.
pub fn move_category(
    explicit_order: &mut Vec<String>,
    derived_labels: &[String],
    source: &str,
    target: &str,
) -> bool {
    if source == target {
        return false;
    }

    if explicit_order.is_empty() {
        explicit_order.extend(derived_labels.iter().cloned());
    }
    if !explicit_order.iter().any(|l| l == source) {
        explicit_order.push(source.to_string());
    }
    if !explicit_order.iter().any(|l| l == target) {
        explicit_order.push(target.to_string());
    }

    let old_index = explicit_order.iter().position(|l| l == source);
    let new_index = explicit_order.iter().position(|l| l == target);
    let (Some(old_index), Some(new_index)) = (old_index, new_index) else {
        return false;
    };

    let moved = explicit_order.remove(old_index);
    explicit_order.insert(new_index, moved);
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bookmark(id: &str, category: &str, is_favorite: bool) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            title: id.to_uppercase(),
            url: format!("https://example.com/{id}"),
            category: category.to_string(),
            is_favorite,
        }
    }

    #[test]
    fn derived_labels_are_distinct_and_first_seen_ordered() {
        let bookmarks = vec![
            bookmark("a", "Work", false),
            bookmark("b", "Media", false),
            bookmark("c", "Work", false),
            bookmark("d", "", false),
            bookmark("e", "Social", true),
        ];
        assert_eq!(
            derived_category_labels(&bookmarks),
            vec!["Work", "Media", "General"]
        );
    }

    #[test]
    fn comparator_covers_all_three_branches() {
        let order = vec!["Work".to_string(), "Media".to_string()];
        assert_eq!(
            compare_category_labels(&order, "Work", "Media"),
            Ordering::Less
        );
        assert_eq!(
            compare_category_labels(&order, "Media", "Work"),
            Ordering::Greater
        );
        assert_eq!(
            compare_category_labels(&order, "Work", "Social"),
            Ordering::Less
        );
        assert_eq!(
            compare_category_labels(&order, "Social", "Work"),
            Ordering::Greater
        );
        assert_eq!(
            compare_category_labels(&order, "social", "Dev"),
            Ordering::Greater
        );
        assert_eq!(
            compare_category_labels(&order, "Dev", "Dev"),
            Ordering::Equal
        );
    }

    #[test]
    fn sorted_labels_put_ordered_first_then_alphabetical() {
        let bookmarks = vec![
            bookmark("a", "Social", false),
            bookmark("b", "AI Tools", false),
            bookmark("c", "Work", false),
            bookmark("d", "Media", false),
        ];
        let order = vec!["Work".to_string()];
        assert_eq!(
            sorted_category_labels(&bookmarks, &order),
            vec!["Work", "AI Tools", "Media", "Social"]
        );
    }

    #[test]
    fn first_drag_seeds_order_from_rendered_labels() {
        let mut order: Vec<String> = Vec::new();
        let rendered = vec![
            "Media".to_string(),
            "Social".to_string(),
            "Work".to_string(),
        ];

        assert!(move_category(&mut order, &rendered, "Social", "Media"));
        assert_eq!(order, vec!["Social", "Media", "Work"]);
    }

    #[test]
    fn missing_labels_are_appended_before_the_move() {
        let mut order = vec!["Work".to_string()];
        let rendered = vec!["Work".to_string(), "Social".to_string()];

        assert!(move_category(&mut order, &rendered, "Social", "Work"));
        assert_eq!(order, vec!["Social", "Work"]);
    }

    #[test]
    fn move_inserts_at_pre_removal_target_index() {
        let mut order = vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ];
        let rendered = order.clone();

        assert!(move_category(&mut order, &rendered, "A", "C"));
        assert_eq!(order, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn self_drop_is_a_noop() {
        let mut order = vec!["Work".to_string(), "Media".to_string()];
        assert!(!move_category(&mut order, &[], "Work", "Work"));
        assert_eq!(order, vec!["Work", "Media"]);
    }

    #[test]
    fn stale_labels_survive_reorders() {
        let mut order = vec![
            "Gone".to_string(),
            "Work".to_string(),
            "Media".to_string(),
        ];
        let rendered = vec!["Work".to_string(), "Media".to_string()];

        assert!(move_category(&mut order, &rendered, "Media", "Work"));
        assert_eq!(order, vec!["Gone", "Media", "Work"]);
    }
}
