use std::sync::Arc;

use scalehouse_db::TursoClient;

use crate::client::weight_client::WeightServiceClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<TursoClient>,
    pub weight_client: Arc<WeightServiceClient>,
    pub config: Arc<Config>,
}
