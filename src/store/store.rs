//! Post Store Module
//!
//! Ordered in-memory sequence of posts with list, lookup and mutation.

use crate::error::{ApiError, Result};
use crate::store::{IdStrategy, Post};

// == Post Store ==
/// In-memory post storage. Insertion order is preserved.
#[derive(Debug, Clone)]
pub struct PostStore {
    /// Posts in insertion order
    posts: Vec<Post>,
    /// Id assignment policy
    strategy: IdStrategy,
    /// Next id for `IdStrategy::Monotonic`
    next_id: i64,
}

impl PostStore {
    // == Constructors ==
    /// Creates an empty store.
    pub fn new(strategy: IdStrategy) -> Self {
        Self::from_posts(Vec::new(), strategy)
    }

    /// Creates a store holding the three posts every fresh process starts with.
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::from_posts(
            vec![
                Post::new(1, "post 1"),
                Post::new(2, "post 2"),
                Post::new(3, "post 3"),
            ],
            strategy,
        )
    }

    /// Creates a store from an existing sequence of posts.
    pub fn from_posts(posts: Vec<Post>, strategy: IdStrategy) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            posts,
            strategy,
            next_id,
        }
    }

    // == List ==
    /// Returns the first `limit` posts, or all of them when `limit` is None.
    pub fn list(&self, limit: Option<usize>) -> &[Post] {
        match limit {
            Some(n) => &self.posts[..n.min(self.posts.len())],
            None => &self.posts,
        }
    }

    // == Get ==
    /// Returns the first post with the given id.
    pub fn get(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    // == Create ==
    /// Appends a new post and returns it.
    ///
    /// An empty title is rejected and leaves the store untouched.
    pub fn create(&mut self, title: String) -> Result<Post> {
        if title.is_empty() {
            return Err(ApiError::InvalidRequest(
                "please include a title".to_string(),
            ));
        }

        let id = match self.strategy {
            IdStrategy::Length => self.posts.len() as i64 + 1,
            IdStrategy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };

        let post = Post::new(id, title);
        self.posts.push(post.clone());
        Ok(post)
    }

    // == Update ==
    /// Overwrites the title of the first post with the given id.
    pub fn update(&mut self, id: i64, title: String) -> Result<()> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(ApiError::mutation_miss)?;
        post.title = title;
        Ok(())
    }

    // == Delete ==
    /// Removes every post with the given id.
    ///
    /// Returns the number of posts removed.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        match before - self.posts.len() {
            0 => Err(ApiError::mutation_miss()),
            removed => Ok(removed),
        }
    }

    // == Accessors ==
    /// Returns every post in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Returns the id strategy this store was built with.
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Returns the current number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns true if the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::seeded(IdStrategy::default())
    }
}
