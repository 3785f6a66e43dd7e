//! Tests for page queries and path segments.

use super::query::{PageQuery, segment};

mod page_query {
    use super::*;

    #[test]
    fn default_is_first_page_of_ten() {
        assert_eq!(PageQuery::default(), PageQuery::new(1, 10));
    }

    #[test]
    fn pairs_are_page_then_limit() {
        let pairs = PageQuery::new(3, 50).pairs();

        assert_eq!(pairs[0], ("page", "3".to_string()));
        assert_eq!(pairs[1], ("limit", "50".to_string()));
    }

    #[test]
    fn apply_starts_query_string() {
        assert_eq!(
            PageQuery::new(1, 10).apply("transactions"),
            "transactions?page=1&limit=10"
        );
    }

    #[test]
    fn apply_extends_existing_query_string() {
        assert_eq!(
            PageQuery::new(4, 5).apply("collections?type=static"),
            "collections?type=static&page=4&limit=5"
        );
    }

    #[test]
    fn zero_values_pass_through() {
        assert_eq!(PageQuery::new(0, 0).apply("cards"), "cards?page=0&limit=0");
    }
}

mod segments {
    use super::*;
    use crate::BuildError;

    fn encoded(id: &str) -> String {
        segment(id).unwrap()
    }

    #[test]
    fn plain_ids_are_unchanged() {
        assert_eq!(encoded("cust_001"), "cust_001");
        assert_eq!(encoded("card-12.34"), "card-12.34");
    }

    #[test]
    fn slashes_and_query_characters_are_escaped() {
        assert_eq!(encoded("a/b"), "a%2Fb");
        assert_eq!(encoded("a?b#c"), "a%3Fb%23c");
    }

    #[test]
    fn spaces_and_plus_are_distinct() {
        assert_eq!(encoded("a b"), "a%20b");
        assert_eq!(encoded("a+b"), "a%2Bb");
    }

    #[test]
    fn dot_segments_are_rejected() {
        for id in [".", ".."] {
            match segment(id) {
                Err(BuildError::InvalidId { id: rejected }) => assert_eq!(rejected, id),
                other => panic!("Expected InvalidId for {id:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(matches!(segment(""), Err(BuildError::InvalidId { .. })));
    }

    #[test]
    fn dots_inside_an_id_are_kept() {
        assert_eq!(encoded("..."), "...");
        assert_eq!(encoded("a..b"), "a..b");
    }
}
