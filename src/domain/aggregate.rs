//! Pure aggregation functions over a collection of blog posts.
//!
//! Every function here is a synchronous, side-effect-free computation over
//! an already-materialized slice. Nothing is mutated, nothing is retained
//! between calls, and the functions are safe to call from any thread.
//!
//! # Tie-breaking
//!
//! [`favorite_blog`], [`most_blogs`], and [`most_likes`] all resolve ties
//! with a `>=` comparison against the running leader, so the **last**
//! candidate reaching the maximum wins. This is observable behavior and
//! part of the API contract, not an implementation accident.

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::Blog;

/// Error returned by aggregations that need at least one post to seed
/// their running comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot aggregate an empty list of blogs")]
pub struct EmptyListError;

/// An author paired with an aggregated metric.
///
/// `metric` is a post count for [`most_blogs`] and a like total for
/// [`most_likes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub author: String,
    pub metric: i64,
}

/// Returns the constant 1 regardless of input.
///
/// Kept as a smoke-test probe for the aggregation module.
pub fn dummy(_blogs: &[Blog]) -> i64 {
    1
}

/// Sums the like counts of every post. An empty slice sums to 0.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// Returns the post with the maximum like count.
///
/// When several posts share the maximum, the last one in input order is
/// returned (replacement on `>=`).
///
/// # Errors
///
/// Returns [`EmptyListError`] if `blogs` is empty.
pub fn favorite_blog(blogs: &[Blog]) -> Result<&Blog, EmptyListError> {
    let mut favorite = blogs.first().ok_or(EmptyListError)?;

    for blog in blogs {
        if blog.likes >= favorite.likes {
            favorite = blog;
        }
    }

    Ok(favorite)
}

/// Returns the author with the greatest number of posts.
///
/// Iterates posts in input order, recomputing the post count for each
/// post's author and replacing the running leader on `>=`. A later post by
/// an author tied with the leader therefore takes the lead.
///
/// # Errors
///
/// Returns [`EmptyListError`] if `blogs` is empty.
pub fn most_blogs(blogs: &[Blog]) -> Result<AuthorSummary, EmptyListError> {
    let first = blogs.first().ok_or(EmptyListError)?;

    let count_for =
        |author: &str| blogs.iter().filter(|blog| blog.author == author).count() as i64;

    let mut leader = AuthorSummary {
        author: first.author.clone(),
        metric: count_for(&first.author),
    };

    for blog in blogs {
        let count = count_for(&blog.author);
        if count >= leader.metric {
            leader = AuthorSummary {
                author: blog.author.clone(),
                metric: count,
            };
        }
    }

    Ok(leader)
}

/// Returns the author whose posts sum to the highest like total.
///
/// Unique authors are visited in first-occurrence order, each author's
/// likes are summed, and the running leader (seeded from the first post's
/// author) is replaced on `>=`, so the last unique author tied for the
/// maximum wins.
///
/// # Errors
///
/// Returns [`EmptyListError`] if `blogs` is empty.
pub fn most_likes(blogs: &[Blog]) -> Result<AuthorSummary, EmptyListError> {
    let first = blogs.first().ok_or(EmptyListError)?;

    let likes_for = |author: &str| {
        blogs
            .iter()
            .filter(|blog| blog.author == author)
            .map(|blog| blog.likes)
            .sum::<i64>()
    };

    let mut leader = AuthorSummary {
        author: first.author.clone(),
        metric: likes_for(&first.author),
    };

    let mut unique_authors: Vec<&str> = Vec::new();
    for blog in blogs {
        if !unique_authors.contains(&blog.author.as_str()) {
            unique_authors.push(&blog.author);
        }
    }

    for author in unique_authors {
        let likes = likes_for(author);
        if likes >= leader.metric {
            leader = AuthorSummary {
                author: author.to_string(),
                metric: likes,
            };
        }
    }

    Ok(leader)
}
