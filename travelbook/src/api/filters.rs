//! Search filters for the travel options listing.

/// Filters accepted by `GET /travel-options`.
///
/// Fields hold raw form input; blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelFilters {
    pub kind: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl TravelFilters {
    /// Non-blank filters as `(name, value)` pairs in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("type", &self.kind),
            ("source", &self.source),
            ("destination", &self.destination),
            ("date", &self.date),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
        ];

        let mut pairs: Vec<(&'static str, String)> = text
            .into_iter()
            .filter_map(|(name, value)| {
                let value = value.as_deref()?.trim();
                (!value.is_empty()).then(|| (name, value.to_string()))
            })
            .collect();

        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    /// URL-encoded query string without the leading `?`; empty when no filter is set.
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The listing endpoint with the query string attached when there is one.
    pub fn endpoint(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/travel-options".to_string()
        } else {
            format!("/travel-options?{query}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_have_no_query() {
        let filters = TravelFilters::default();
        assert_eq!(filters.to_query_string(), "");
        assert_eq!(filters.endpoint(), "/travel-options");
    }

    #[test]
    fn test_blank_values_are_omitted() {
        let filters = TravelFilters {
            kind: Some("Flight".to_string()),
            source: Some(String::new()),
            destination: Some("   ".to_string()),
            max_price: Some("5000".to_string()),
            ..TravelFilters::default()
        };
        assert_eq!(filters.to_query_string(), "type=Flight&max_price=5000");
    }

    #[test]
    fn test_values_are_encoded() {
        let filters = TravelFilters {
            source: Some("New Delhi".to_string()),
            destination: Some("Goa & Beyond".to_string()),
            limit: Some(10),
            ..TravelFilters::default()
        };
        assert_eq!(
            filters.endpoint(),
            "/travel-options?source=New%20Delhi&destination=Goa%20%26%20Beyond&limit=10"
        );
    }
}
