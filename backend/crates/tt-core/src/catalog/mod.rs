//! Local catalogs backing the search, meetings and signature views.
//!
//! All three are seeded in memory; nothing here talks to the server.

pub mod client_directory;
pub mod meeting_schedule;
pub mod seed;
pub mod signature_book;

/// Keeps the items whose search fields contain `query`, ignoring case.
///
/// A query that is blank after trimming matches everything. The query itself
/// is matched untrimmed, so `"smith "` only hits text with a trailing space.
pub(crate) fn filter_by_query<'a, T, F>(items: &'a [T], query: &str, fields: F) -> Vec<&'a T>
where
    F: Fn(&T) -> [&str; 2],
{
    if query.trim().is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
