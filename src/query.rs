//! Listing helpers: tag filtering, date ordering and the tag menu.

use crate::model::Post;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
        }
    }
}

/// Sorts by `created_at`. The sort is stable, so posts created in the same
/// millisecond keep their persisted order.
pub fn sort_posts(posts: &mut [Post], order: SortOrder) {
    match order {
        SortOrder::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
}

/// Keeps posts carrying `tag`, preserving relative order. `None` keeps all.
pub fn filter_by_tag(posts: Vec<Post>, tag: Option<&str>) -> Vec<Post> {
    match tag {
        Some(tag) => posts.into_iter().filter(|p| p.has_tag(tag)).collect(),
        None => posts,
    }
}

/// Filter then sort, the way the post index is presented.
pub fn select_posts(posts: Vec<Post>, tag: Option<&str>, order: SortOrder) -> Vec<Post> {
    let mut posts = filter_by_tag(posts, tag);
    sort_posts(&mut posts, order);
    posts
}

/// Distinct tags across all posts, sorted. Stored tag lists are not
/// deduplicated; only this menu is.
pub fn tag_options(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, created_at: i64, tags: &[&str]) -> Post {
        let mut post = Post::new(id.to_string(), id.to_string(), "body".to_string())
            .with_tags(tags.iter().map(|t| t.to_string()).collect());
        post.created_at = created_at;
        post
    }

    fn three_posts() -> Vec<Post> {
        vec![
            post("a", 100, &[]),
            post("b", 300, &[]),
            post("c", 200, &[]),
        ]
    }

    fn created(posts: &[Post]) -> Vec<i64> {
        posts.iter().map(|p| p.created_at).collect()
    }

    #[test]
    fn test_sort_newest() {
        let mut posts = three_posts();
        sort_posts(&mut posts, SortOrder::Newest);
        assert_eq!(created(&posts), vec![300, 200, 100]);
    }

    #[test]
    fn test_sort_oldest() {
        let mut posts = three_posts();
        sort_posts(&mut posts, SortOrder::Oldest);
        assert_eq!(created(&posts), vec![100, 200, 300]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut posts = vec![post("a", 5, &[]), post("b", 5, &[])];
        sort_posts(&mut posts, SortOrder::Newest);
        assert_eq!(posts[0].id, "a");
    }

    #[test]
    fn test_filter_by_tag_keeps_subset_in_order() {
        let posts = vec![
            post("a", 1, &["rust"]),
            post("b", 2, &["life"]),
            post("c", 3, &["rust", "life"]),
        ];
        let ids: Vec<String> = filter_by_tag(posts, Some("rust"))
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_without_tag_keeps_all() {
        let posts = vec![post("a", 1, &["x"]), post("b", 2, &[])];
        assert_eq!(filter_by_tag(posts, None).len(), 2);
    }

    #[test]
    fn test_tag_options_deduplicated_and_sorted() {
        let posts = vec![
            post("a", 1, &["Welcome", "Guide"]),
            post("b", 2, &["Guide", "AI", "Guide"]),
        ];
        assert_eq!(tag_options(&posts), vec!["AI", "Guide", "Welcome"]);
        assert_eq!(posts[1].tags.len(), 3);
    }

    #[test]
    fn test_select_posts() {
        let posts = vec![
            post("a", 100, &["t"]),
            post("b", 300, &[]),
            post("c", 200, &["t"]),
        ];
        let selected = select_posts(posts, Some("t"), SortOrder::Newest);
        assert_eq!(created(&selected), vec![200, 100]);
    }
}
