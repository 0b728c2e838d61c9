use std::sync::Arc;

use scalehouse_db::TursoClient;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<TursoClient>,
    pub config: Arc<Config>,
}
