//! Property-Based Tests for Store Module
//!
//! Uses proptest to check the list/create/update/delete contracts.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::store::{IdStrategy, Post, PostStore};

// == Strategies ==
/// Generates non-empty titles
fn title_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}"
}

/// Generates a store of up to 20 posts with distinct ids
fn store_strategy() -> impl Strategy<Value = PostStore> {
    prop::collection::vec(title_strategy(), 0..20).prop_map(|titles| {
        let posts = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Post::new(i as i64 + 1, title))
            .collect();
        PostStore::from_posts(posts, IdStrategy::Length)
    })
}

/// Generates a sequence of store operations
#[derive(Debug, Clone)]
enum StoreOp {
    Create { title: String },
    Update { id: i64, title: String },
    Delete { id: i64 },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        title_strategy().prop_map(|title| StoreOp::Create { title }),
        (1i64..30, title_strategy()).prop_map(|(id, title)| StoreOp::Update { id, title }),
        (1i64..30).prop_map(|id| StoreOp::Delete { id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A positive limit returns the first min(limit, len) posts in order.
    #[test]
    fn prop_list_limit_is_prefix(store in store_strategy(), limit in 1usize..40) {
        let listed = store.list(Some(limit));
        let expected = limit.min(store.len());

        prop_assert_eq!(listed.len(), expected);
        prop_assert_eq!(listed, &store.posts()[..expected]);
    }

    // Create appends len + 1 and leaves the existing prefix untouched.
    #[test]
    fn prop_create_appends(store in store_strategy(), title in title_strategy()) {
        let mut store = store;
        let before = store.posts().to_vec();

        let post = store.create(title.clone()).unwrap();

        prop_assert_eq!(post.id, before.len() as i64 + 1);
        prop_assert_eq!(&post.title, &title);
        prop_assert_eq!(&store.posts()[..before.len()], &before[..]);
        prop_assert_eq!(store.posts().last(), Some(&post));
    }

    // Update on a missing id and delete on a missing id change nothing.
    #[test]
    fn prop_misses_leave_store_unchanged(
        store in store_strategy(),
        title in title_strategy()
    ) {
        let mut store = store;
        let before = store.posts().to_vec();
        let missing = before.len() as i64 + 100;

        prop_assert!(store.update(missing, title).is_err());
        prop_assert!(store.delete(missing).is_err());
        prop_assert_eq!(store.posts(), &before[..]);
    }

    // Delete removes exactly the matching post and keeps the order of the rest.
    #[test]
    fn prop_delete_removes_only_target(store in store_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!store.is_empty());
        let mut store = store;
        let target = store.posts()[pick.index(store.len())].id;
        let expected: Vec<Post> = store
            .posts()
            .iter()
            .filter(|p| p.id != target)
            .cloned()
            .collect();

        prop_assert_eq!(store.delete(target).unwrap(), 1);
        prop_assert_eq!(store.posts(), &expected[..]);
        prop_assert!(store.get(target).is_none());
    }

    // The monotonic strategy never hands out an id that is already stored.
    #[test]
    fn prop_monotonic_ids_unique(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let mut store = PostStore::seeded(IdStrategy::Monotonic);

        for op in ops {
            match op {
                StoreOp::Create { title } => {
                    let post = store.create(title).unwrap();
                    prop_assert_eq!(
                        store.posts().iter().filter(|p| p.id == post.id).count(),
                        1,
                        "id {} was reused",
                        post.id
                    );
                }
                StoreOp::Update { id, title } => {
                    let _ = store.update(id, title);
                }
                StoreOp::Delete { id } => {
                    let _ = store.delete(id);
                }
            }
        }

        let unique: HashSet<i64> = store.posts().iter().map(|p| p.id).collect();
        prop_assert_eq!(unique.len(), store.len());
    }
}
