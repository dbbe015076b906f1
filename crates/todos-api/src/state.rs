use std::sync::Arc;

#[derive(Clone)]
pub struct ApiState {
    pub db: Arc<todos_db::Database>,
}
