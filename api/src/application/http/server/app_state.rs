use std::sync::Arc;

use flavormap_core::application::FlavorMapService;

use crate::{application::in_flight::InFlightRegistry, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FlavorMapService,
    pub in_flight: InFlightRegistry,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FlavorMapService) -> Self {
        Self {
            args,
            service,
            in_flight: InFlightRegistry::default(),
        }
    }
}
