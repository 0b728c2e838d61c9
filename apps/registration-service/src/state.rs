use std::sync::Arc;

use scalehouse_db::TursoClient;

use crate::client::billing_client::BillingClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<TursoClient>,
    pub billing_client: Arc<BillingClient>,
    pub config: Arc<Config>,
}
