//! Sorting a filtered collection.
//!
//! All orderings work on a consumed Vec and hand back a new ordering;
//! the caller's catalog is never touched. `Vec::sort_by` is stable, so
//! movies with exactly equal keys keep their input order.

use std::cmp::Ordering;

use catalog::Movie;

use crate::criteria::SortKey;

/// Reorder movies by the given key.
///
/// Numeric keys sort descending with absent values treated as zero.
/// Dates sort descending (most recent first) with absent dates collapsed
/// to the epoch, so undated movies land at the end. Titles sort
/// ascending by their Unicode-lowercased form. [`SortKey::None`] leaves
/// the input order unchanged.
pub fn sort_movies(movies: Vec<Movie>, sort_key: SortKey) -> Vec<Movie> {
    if movies.is_empty() {
        return movies;
    }

    let mut sorted = movies;
    match sort_key {
        SortKey::Popularity => {
            sorted.sort_by(|a, b| descending_f64(a.popularity, b.popularity));
        }
        SortKey::Rating => {
            sorted.sort_by(|a, b| descending_f64(a.vote_average, b.vote_average));
        }
        SortKey::Date => {
            sorted.sort_by(|a, b| {
                // NaiveDate::default() is 1970-01-01, the epoch fallback
                // for movies with no release date on record.
                let a_date = a.release_date.unwrap_or_default();
                let b_date = b.release_date.unwrap_or_default();
                b_date.cmp(&a_date)
            });
        }
        SortKey::Title => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::None => {}
    }
    sorted
}

/// Descending comparison for float keys. NaN never occurs in decoded
/// catalog data, but an incomparable pair still must not panic.
fn descending_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn movie(id: u64, title: &str) -> Movie {
        Movie::new(id, title)
    }

    fn dated(id: u64, title: &str, year: i32, month: u32, day: u32) -> Movie {
        let mut m = movie(id, title);
        m.release_date = NaiveDate::from_ymd_opt(year, month, day);
        m
    }

    #[test]
    fn test_sort_by_popularity_descending() {
        let mut a = movie(1, "A");
        a.popularity = 10.0;
        let mut b = movie(2, "B");
        b.popularity = 99.5;
        let c = movie(3, "C"); // absent popularity decodes as 0.0

        let sorted = sort_movies(vec![a, c, b], SortKey::Popularity);
        let ids: Vec<u64> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let mut alpha = movie(1, "Alpha");
        alpha.vote_average = 5.0;
        let mut beta = movie(2, "Beta");
        beta.vote_average = 9.0;

        let sorted = sort_movies(vec![alpha, beta], SortKey::Rating);
        assert_eq!(sorted[0].title, "Beta");
        assert_eq!(sorted[1].title, "Alpha");
    }

    #[test]
    fn test_sort_by_date_most_recent_first() {
        let newer = dated(1, "Newer", 2021, 9, 15);
        let older = dated(2, "Older", 1999, 3, 31);
        let undated = movie(3, "Undated");

        let sorted = sort_movies(vec![undated, newer, older], SortKey::Date);
        let ids: Vec<u64> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_undated_sorts_after_pre_epoch_none() {
        // A missing date is the epoch, so anything released after 1970
        // outranks it, and anything before 1970 does not.
        let sixties = dated(1, "Sixties", 1960, 1, 1);
        let undated = movie(2, "Undated");

        let sorted = sort_movies(vec![sixties, undated], SortKey::Date);
        let ids: Vec<u64> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_sort_by_title_case_insensitive() {
        let sorted = sort_movies(
            vec![movie(1, "banana"), movie(2, "Apple"), movie(3, "cherry")],
            SortKey::Title,
        );
        let titles: Vec<&str> = sorted.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_title_sort_is_pairwise_ordered() {
        let sorted = sort_movies(
            vec![
                movie(1, "Zodiac"),
                movie(2, "arrival"),
                movie(3, "Blade Runner"),
                movie(4, "dune"),
            ],
            SortKey::Title,
        );
        for pair in sorted.windows(2) {
            assert!(pair[0].title.to_lowercase() <= pair[1].title.to_lowercase());
        }
    }

    #[test]
    fn test_none_preserves_input_order() {
        let sorted = sort_movies(
            vec![movie(3, "C"), movie(1, "A"), movie(2, "B")],
            SortKey::None,
        );
        let ids: Vec<u64> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let movies: Vec<Movie> = (0..10)
            .map(|i| {
                let mut m = movie(i, &format!("Movie {i}"));
                m.popularity = (i as f64) * 3.7 % 5.0;
                m
            })
            .collect();

        let sorted = sort_movies(movies.clone(), SortKey::Popularity);
        assert_eq!(sorted.len(), movies.len());

        let mut original_ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        let mut sorted_ids: Vec<u64> = sorted.iter().map(|m| m.id).collect();
        original_ids.sort_unstable();
        sorted_ids.sort_unstable();
        assert_eq!(original_ids, sorted_ids);
    }

    #[test]
    fn test_empty_collection_is_fine() {
        assert!(sort_movies(Vec::new(), SortKey::Rating).is_empty());
    }
}
