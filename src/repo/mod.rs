//! Owner-scoped persistence queries.
//!
//! Every read and write in this module takes an [`OwnerId`] and binds it into
//! the WHERE clause; there is no separate authorization layer. A lookup that
//! misses because the row belongs to someone else is indistinguishable from a
//! lookup that misses because the row does not exist.

pub mod books;
pub mod goals;
pub mod progress;
pub mod reviews;
pub mod users;

/// The requesting user's id, passed uniformly as a mandatory query predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerId(pub i64);

const LIKE_ESCAPE: char = '!';

/// Escapes `%`, `_` and the escape character itself for use in a LIKE
/// pattern with `ESCAPE '!'`.
pub(crate) fn escape_like_pattern(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}
