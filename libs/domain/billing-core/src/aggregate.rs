use std::collections::HashMap;

use serde::Serialize;

use crate::rate::{resolve_rate, Rate};

/// The subset of a weight-service transaction the aggregator needs.
/// `produce`/`neto` are `None` when the transaction carries the "na"
/// sentinel (unusable produce, or a row with no net weight yet).
#[derive(Debug, Clone)]
pub struct BillableTransaction {
    pub truck: Option<String>,
    pub produce: Option<String>,
    pub neto: Option<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductLine {
    pub product: String,
    /// Serialised as a string per the external contract.
    pub count: String,
    pub amount: i64,
    pub rate: i64,
    pub pay: i64,
}

#[derive(Debug, Clone, Default)]
pub struct BillTotals {
    pub products: Vec<ProductLine>,
    pub total: i64,
}

/// Retains only the transactions whose truck is in the provider's fleet.
pub fn filter_provider_transactions<'a>(
    transactions: &'a [BillableTransaction],
    provider_trucks: &[String],
) -> Vec<&'a BillableTransaction> {
    transactions
        .iter()
        .filter(|t| t.truck.as_deref().is_some_and(|truck| provider_trucks.iter().any(|p| p == truck)))
        .collect()
}

/// Aggregates a provider's already-filtered transactions into per-product
/// rollups and a grand total, per §4.8 steps 5-7.
pub fn aggregate_bill(transactions: &[&BillableTransaction], rates: &[Rate], provider_id: i64) -> BillTotals {
    let mut acc: HashMap<String, (i64, i64, i64)> = HashMap::new(); // product -> (count, amount, rate)

    for tx in transactions {
        let Some(product) = tx.produce.as_deref() else { continue };
        if product.eq_ignore_ascii_case("na") {
            continue;
        }
        let Some(neto) = tx.neto else { continue };
        if neto <= 0 {
            continue;
        }
        let Some(rate) = resolve_rate(rates, product, provider_id) else { continue };

        let entry = acc.entry(product.to_string()).or_insert((0, 0, rate));
        entry.0 += 1;
        entry.1 += neto;
    }

    let products = acc
        .into_iter()
        .map(|(product, (count, amount, rate))| ProductLine {
            product,
            count: count.to_string(),
            amount,
            rate,
            pay: amount * rate,
        })
        .collect::<Vec<_>>();

    let total = products.iter().map(|p| p.pay).sum();

    BillTotals { products, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(product: &str, rate: i64, scope: &str) -> Rate {
        Rate { product_id: product.to_string(), rate, scope: scope.to_string() }
    }

    fn tx(truck: &str, produce: &str, neto: i64) -> BillableTransaction {
        BillableTransaction {
            truck: Some(truck.to_string()),
            produce: Some(produce.to_string()),
            neto: Some(neto),
        }
    }

    #[test]
    fn standard_billing_scenario() {
        let transactions = vec![tx("T", "apples", 6000)];
        let refs: Vec<&BillableTransaction> = transactions.iter().collect();
        let rates = vec![rate("apples", 5, "ALL"), rate("apples", 6, "1")];

        let totals = aggregate_bill(&refs, &rates, 1);

        assert_eq!(totals.total, 36_000);
        assert_eq!(totals.products.len(), 1);
        assert_eq!(totals.products[0].count, "1");
        assert_eq!(totals.products[0].amount, 6000);
        assert_eq!(totals.products[0].rate, 6);
    }

    #[test]
    fn falls_back_to_all_scope_rate() {
        let transactions = vec![tx("T", "apples", 6000)];
        let refs: Vec<&BillableTransaction> = transactions.iter().collect();
        let rates = vec![rate("apples", 5, "ALL")];

        let totals = aggregate_bill(&refs, &rates, 1);
        assert_eq!(totals.total, 30_000);
    }

    #[test]
    fn filters_to_providers_own_trucks() {
        let transactions = vec![tx("T", "apples", 1000), tx("U", "apples", 2000)];
        let provider_trucks = vec!["T".to_string()];
        let filtered = filter_provider_transactions(&transactions, &provider_trucks);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].truck.as_deref(), Some("T"));
    }

    #[test]
    fn skips_na_produce_and_non_positive_neto() {
        let transactions = vec![
            BillableTransaction { truck: Some("T".into()), produce: Some("na".into()), neto: Some(500) },
            BillableTransaction { truck: Some("T".into()), produce: Some("apples".into()), neto: Some(0) },
        ];
        let refs: Vec<&BillableTransaction> = transactions.iter().collect();
        let rates = vec![rate("apples", 5, "ALL")];

        let totals = aggregate_bill(&refs, &rates, 1);
        assert!(totals.products.is_empty());
        assert_eq!(totals.total, 0);
    }
}
