use libsql::Connection;
use scalehouse_billing_core::{aggregate_bill, filter_provider_transactions};

use crate::client::weight_client::WeightServiceClient;
use crate::errors::ApiError;
use crate::models::BillResponse;
use crate::repo::{provider_repo, rate_repo, truck_repo};
use crate::window::validate_window;

/// Runs the §4.8 billing procedure: resolve the provider, pull its fleet's
/// weighings from the weight-service, resolve rates, and aggregate.
///
/// If the weight-service is unreachable, the bill degrades to an empty
/// result rather than failing the request (§4.8, §9 open question (a)).
pub async fn compute_bill(
    conn: &Connection,
    weight_client: &WeightServiceClient,
    provider_id: i64,
    from: &str,
    to: &str,
) -> Result<BillResponse, ApiError> {
    validate_window(from, to)?;

    let provider = provider_repo::get_by_id(conn, provider_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("provider {provider_id} not found")))?;

    let trucks = truck_repo::list_by_provider(conn, provider_id).await?;

    let transactions = match weight_client.get_weight_in_range(from, to).await {
        Ok(transactions) => transactions,
        Err(err) => {
            tracing::warn!(provider_id, error = %err, "weight-service unavailable, degrading bill to empty");
            Vec::new()
        }
    };

    let filtered = filter_provider_transactions(&transactions, &trucks);
    let session_count = filtered.len();

    let rates = rate_repo::list_all(conn).await?;
    let totals = aggregate_bill(&filtered, &rates, provider_id);

    Ok(BillResponse {
        id: provider.id,
        name: provider.name,
        from: from.to_string(),
        to: to.to_string(),
        truck_count: trucks.len(),
        session_count,
        products: totals.products,
        total: totals.total,
    })
}
