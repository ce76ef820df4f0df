use crate::errors::AppError;

/// Raw query-string pairs, in the order they were sent.
pub type QueryPairs = Vec<(String, String)>;

/// Employee ids arrive as `?id=N`. Only the first `id` counts; anything
/// non-numeric or below 1 is rejected before the store is touched.
pub fn parse_id(query: &[(String, String)]) -> Result<i32, AppError> {
    query
        .iter()
        .find(|(key, _)| key == "id")
        .and_then(|(_, raw)| raw.parse::<i32>().ok())
        .filter(|id| *id >= 1)
        .ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryPairs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn accepts_positive_ids() {
        assert_eq!(parse_id(&query(&[("id", "12")])).unwrap(), 12);
    }

    #[test]
    fn first_id_wins() {
        assert_eq!(parse_id(&query(&[("id", "3"), ("id", "9")])).unwrap(), 3);
        assert!(parse_id(&query(&[("id", "x"), ("id", "9")])).is_err());
        assert_eq!(parse_id(&query(&[("other", "1"), ("id", "4")])).unwrap(), 4);
    }

    #[test]
    fn rejects_bad_ids() {
        for bad in [
            query(&[]),
            query(&[("id", "")]),
            query(&[("id", "abc")]),
            query(&[("id", "0")]),
            query(&[("id", "-3")]),
            query(&[("id", "99999999999")]),
        ] {
            assert!(matches!(parse_id(&bad), Err(AppError::BadRequest(_))), "{:?}", bad);
        }
    }
}
