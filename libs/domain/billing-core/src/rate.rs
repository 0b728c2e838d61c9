use serde::{Deserialize, Serialize};

pub const ALL_SCOPE: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    pub product_id: String,
    pub rate: i64,
    pub scope: String,
}

/// Resolves the rate for `product` under `provider_id`: a provider-scoped
/// row wins over an `ALL`-scoped one; product matching is case-insensitive.
pub fn resolve_rate(rates: &[Rate], product: &str, provider_id: i64) -> Option<i64> {
    let provider_scope = provider_id.to_string();
    let candidates: Vec<&Rate> = rates
        .iter()
        .filter(|r| r.product_id.eq_ignore_ascii_case(product))
        .collect();

    candidates
        .iter()
        .find(|r| r.scope == provider_scope)
        .or_else(|| candidates.iter().find(|r| r.scope.eq_ignore_ascii_case(ALL_SCOPE)))
        .map(|r| r.rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(product: &str, rate: i64, scope: &str) -> Rate {
        Rate { product_id: product.to_string(), rate, scope: scope.to_string() }
    }

    #[test]
    fn prefers_provider_scoped_rate_over_all() {
        let rates = vec![rate("apples", 5, "ALL"), rate("apples", 6, "42")];
        assert_eq!(resolve_rate(&rates, "apples", 42), Some(6));
    }

    #[test]
    fn falls_back_to_all_scope() {
        let rates = vec![rate("apples", 5, "ALL")];
        assert_eq!(resolve_rate(&rates, "apples", 42), Some(5));
    }

    #[test]
    fn matches_product_case_insensitively() {
        let rates = vec![rate("Apples", 5, "ALL")];
        assert_eq!(resolve_rate(&rates, "apples", 42), Some(5));
    }

    #[test]
    fn returns_none_when_no_row_matches() {
        let rates = vec![rate("oranges", 5, "ALL")];
        assert_eq!(resolve_rate(&rates, "apples", 42), None);
    }
}
