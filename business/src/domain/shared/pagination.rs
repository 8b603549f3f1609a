use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Ordering direction applied to listings (by price, ties broken by id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

impl SortDirection {
    /// Maps a raw sort value to a direction.
    ///
    /// Numeric codes take precedence over tokens: input that parses to `1` or
    /// `-1` is mapped before any token comparison. Anything that is neither a
    /// known code nor `asc`/`desc` falls back to ascending.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(1) => return SortDirection::Ascending,
            Ok(-1) => return SortDirection::Descending,
            _ => {}
        }

        if raw.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Raw pagination input as it arrives from the caller. `take` and `skip` are
/// validated upstream (positive integers); this module only defaults and maps.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub take: Option<u32>,
    pub skip: Option<u32>,
    pub sort: Option<String>,
}

/// Canonical pagination triple every listing runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
    pub direction: SortDirection,
}

impl Pagination {
    pub fn normalize(query: &PageQuery) -> Self {
        Self {
            limit: query.take.map(i64::from).unwrap_or(DEFAULT_LIMIT),
            offset: query.skip.map(i64::from).unwrap_or(DEFAULT_OFFSET),
            direction: query
                .sort
                .as_deref()
                .map(SortDirection::normalize)
                .unwrap_or(SortDirection::Ascending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_default_to_ten_zero_ascending_when_query_is_empty() {
        let page = Pagination::normalize(&PageQuery::default());

        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
        assert_eq!(page.direction, SortDirection::Ascending);
    }

    #[test]
    fn should_map_numeric_codes_to_directions() {
        let page = Pagination::normalize(&PageQuery {
            take: Some(5),
            skip: Some(0),
            sort: Some("-1".to_string()),
        });

        assert_eq!(page.limit, 5);
        assert_eq!(page.offset, 0);
        assert_eq!(page.direction, SortDirection::Descending);

        assert_eq!(SortDirection::normalize("1"), SortDirection::Ascending);
    }

    #[test]
    fn should_map_direction_tokens() {
        assert_eq!(SortDirection::normalize("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::normalize("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::normalize("DESC"), SortDirection::Descending);
    }

    #[test]
    fn should_fall_back_to_ascending_when_sort_is_unrecognized() {
        assert_eq!(SortDirection::normalize("price"), SortDirection::Ascending);
        assert_eq!(SortDirection::normalize("2"), SortDirection::Ascending);
        assert_eq!(SortDirection::normalize(""), SortDirection::Ascending);
    }

    #[test]
    fn should_pass_take_and_skip_through_unchanged() {
        let page = Pagination::normalize(&PageQuery {
            take: Some(25),
            skip: Some(50),
            sort: None,
        });

        assert_eq!(page.limit, 25);
        assert_eq!(page.offset, 50);
    }

    proptest! {
        #[test]
        fn should_normalize_any_sort_string_without_panicking(raw in ".*") {
            let direction = SortDirection::normalize(&raw);
            prop_assert!(matches!(
                direction,
                SortDirection::Ascending | SortDirection::Descending
            ));
        }

        #[test]
        fn should_be_deterministic_for_identical_queries(
            take in proptest::option::of(0u32..10_000),
            skip in proptest::option::of(0u32..10_000),
            sort in proptest::option::of("[a-z0-9-]{0,8}"),
        ) {
            let query = PageQuery { take, skip, sort };
            prop_assert_eq!(Pagination::normalize(&query), Pagination::normalize(&query));
        }
    }
}
