use crate::domain::health::entities::ProviderStatus;

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> ProviderStatus;
}
