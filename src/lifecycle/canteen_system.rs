use crate::clients::OrderClient;
use crate::config::Config;
use crate::model::{Menu, TransitionPolicy};
use crate::order_actor::{self, OrderContext};
use crate::prediction::{CrowdForecaster, CrowdService, HttpCrowdForecaster, PredictionError};
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{error, info};

/// The runtime orchestrator for the canteen backend.
///
/// `CanteenSystem` is responsible for:
/// - **Lifecycle Management**: starting the Order actor and stopping it on shutdown
/// - **Dependency Wiring**: handing the menu and transition policy to the actor as its context
/// - **Gateway Setup**: building the crowd forecaster the HTTP layer talks to
///
/// # Example
///
/// ```ignore
/// let system = CanteenSystem::new(&Config::load()?)?;
///
/// let order = system.order_client.place_order(params).await?;
/// let forecast = system.crowd.predict().await;
///
/// // Every clone of `order_client` must be gone before this resolves
/// system.shutdown().await?;
/// ```
pub struct CanteenSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Crowd forecasts with fallback
    pub crowd: CrowdService,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CanteenSystem {
    /// Starts the system against the configured ML service, with the seeded menu.
    pub fn new(config: &Config) -> Result<Self, PredictionError> {
        let forecaster = HttpCrowdForecaster::new(&config.crowd_service_url, config.crowd_timeout)?;
        info!(url = %forecaster.url(), policy = ?config.transition_policy, "Starting canteen system");

        Ok(Self::with_parts(
            Arc::new(Menu::seeded()),
            config.transition_policy,
            config.channel_buffer,
            Arc::new(forecaster),
        ))
    }

    /// Starts the system from explicit parts. Must be called inside a Tokio runtime.
    pub fn with_parts(
        menu: Arc<Menu>,
        policy: TransitionPolicy,
        channel_buffer: usize,
        forecaster: Arc<dyn CrowdForecaster>,
    ) -> Self {
        let (order_actor, order_client) = order_actor::new(channel_buffer, menu.clone());
        let order_handle = tokio::spawn(order_actor.run(OrderContext { menu, policy }));

        Self {
            order_client,
            crowd: CrowdService::new(forecaster),
            handles: vec![order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client so the actor's channel closes, then waits for the actor
    /// task. Returns an error if the task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
