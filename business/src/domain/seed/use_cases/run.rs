use async_trait::async_trait;

use crate::domain::seed::errors::SeedError;

#[async_trait]
pub trait RunSeedUseCase: Send + Sync {
    /// Wipes catalog and account fixtures and re-inserts them. Returns a
    /// confirmation message.
    async fn execute(&self) -> Result<String, SeedError>;
}
