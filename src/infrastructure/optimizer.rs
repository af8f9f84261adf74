use crate::config::ServerConfig;
use crate::services::optimizer::{OptimizerPass, create_pass};
use std::sync::Arc;
use tracing::info;

pub fn setup_optimizer(config: &ServerConfig) -> Arc<dyn OptimizerPass> {
    let pass = create_pass(&config.optimizer_pass);
    info!("🔧 Optimizer pass: {}", pass.name());
    pass.into()
}
