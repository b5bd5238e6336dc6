//! Bookmark group derivation and within-group reordering.

use crate::model::{Bookmark, BookmarkGroup, GENERAL_CATEGORY, PRIVATE_CATEGORY};

/// Derives the single group a bookmark renders in.
///
/// Favorites collect bookmarks flagged as favorite outside the private category. Everything
/// else lands in its category group, with an empty category treated as the general bucket. A
/// favorited private bookmark stays in the private group.
pub fn bookmark_group(bookmark: &Bookmark) -> BookmarkGroup {
    if bookmark.is_favorite && bookmark.category != PRIVATE_CATEGORY {
        BookmarkGroup::Favorites
    } else if bookmark.category.is_empty() {
        BookmarkGroup::Category(GENERAL_CATEGORY.to_string())
    } else {
        BookmarkGroup::Category(bookmark.category.clone())
    }
}

/// Returns the members of `group` in master-list order.
pub fn bookmarks_in_group<'a>(all: &'a [Bookmark], group: &BookmarkGroup) -> Vec<&'a Bookmark> {
    all.iter().filter(|b| bookmark_group(b) == *group).collect()
}

/// Reorders a bookmark within its group, returning whether the list changed.
///
/// The group's members are isolated from the master list in their current relative order, the
/// source is re-inserted at the target's index, and the list is rebuilt as all other bookmarks
/// followed by the reordered group. The rebuild makes the touched group contiguous in the master
/// list, which is the intended self-healing behavior. Self-drops and ids missing from the group
/// leave the list untouched.
pub fn move_bookmark(
    all: &mut Vec<Bookmark>,
    group: &BookmarkGroup,
    source_id: &str,
    target_id: &str,
) -> bool {
    if source_id == target_id {
        return false;
    }

    let mut source_index = None;
    let mut target_index = None;
    let mut group_len = 0usize;
    for bookmark in all.iter() {
        if bookmark_group(bookmark) == *group {
            if bookmark.id == source_id {
                source_index = Some(group_len);
            }
            if bookmark.id == target_id {
                target_index = Some(group_len);
            }
            group_len += 1;
        }
    }
    let (Some(source_index), Some(target_index)) = (source_index, target_index) else {
        return false;
    };

    let mut group_items = Vec::with_capacity(group_len);
    let mut other_items = Vec::with_capacity(all.len() - group_len);
    for bookmark in all.drain(..) {
        if bookmark_group(&bookmark) == *group {
            group_items.push(bookmark);
        } else {
            other_items.push(bookmark);
        }
    }

    let moved = group_items.remove(source_index);
    group_items.insert(target_index, moved);

    all.extend(other_items);
    all.extend(group_items);
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

    fn ids(all: &[Bookmark]) -> Vec<&str> {
        all.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn group_derivation_covers_favorites_general_and_private() {
        assert_eq!(
            bookmark_group(&bookmark("a", "Development", true)),
            BookmarkGroup::Favorites
        );
        assert_eq!(
            bookmark_group(&bookmark("b", "", false)),
            BookmarkGroup::Category("General".to_string())
        );
        assert_eq!(
            bookmark_group(&bookmark("c", "Private", true)),
            BookmarkGroup::Category("Private".to_string())
        );
        assert_eq!(
            bookmark_group(&bookmark("d", "Media", false)),
            BookmarkGroup::Category("Media".to_string())
        );
    }

    #[test]
    fn move_within_group_inserts_before_target_position() {
        let mut all = vec![
            bookmark("a", "Dev", false),
            bookmark("b", "Dev", false),
            bookmark("c", "Dev", false),
        ];
        let group = BookmarkGroup::Category("Dev".to_string());

        assert!(move_bookmark(&mut all, &group, "a", "c"));
        assert_eq!(ids(&all), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_makes_group_contiguous_and_preserves_other_order() {
        let mut all = vec![
            bookmark("d1", "Dev", false),
            bookmark("m1", "Media", false),
            bookmark("d2", "Dev", false),
            bookmark("f1", "Work", true),
            bookmark("d3", "Dev", false),
        ];
        let group = BookmarkGroup::Category("Dev".to_string());

        assert!(move_bookmark(&mut all, &group, "d3", "d1"));
        assert_eq!(ids(&all), vec!["m1", "f1", "d3", "d1", "d2"]);
    }

    #[test]
    fn favorites_group_reorders_across_categories() {
        let mut all = vec![
            bookmark("g", "Development", true),
            bookmark("y", "Media", false),
            bookmark("m", "Work", true),
        ];

        assert!(move_bookmark(&mut all, &BookmarkGroup::Favorites, "m", "g"));
        assert_eq!(ids(&all), vec!["y", "m", "g"]);
    }

    #[test]
    fn move_never_changes_the_bookmark_set() {
        let mut all = vec![
            bookmark("a", "Dev", false),
            bookmark("b", "Dev", false),
            bookmark("c", "Media", false),
        ];
        let before_len = all.len();
        assert!(move_bookmark(
            &mut all,
            &BookmarkGroup::Category("Dev".to_string()),
            "b",
            "a",
        ));
        assert_eq!(all.len(), before_len);
        let mut sorted: Vec<&str> = ids(&all);
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["a", "b", "c"]);
    }

    #[test]
    fn self_drop_and_missing_ids_are_noops() {
        let original = vec![
            bookmark("a", "Dev", false),
            bookmark("b", "Media", false),
        ];
        let group = BookmarkGroup::Category("Dev".to_string());

        let mut all = original.clone();
        assert!(!move_bookmark(&mut all, &group, "a", "a"));
        assert_eq!(all, original);

        // Target lives in another group.
        assert!(!move_bookmark(&mut all, &group, "a", "b"));
        assert_eq!(all, original);

        assert!(!move_bookmark(&mut all, &group, "ghost", "a"));
        assert_eq!(all, original);
    }
}
