use cnft_tree_params::Network;
use serde::Serialize;
use tracing::{info, warn};

use crate::{errors::ReachabilityError, rpc::TreeRpc};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointStatus {
    pub endpoint: String,
    pub network: Network,
    pub slot: u64,
}

/// Asks the endpoint for its current slot, once. The network is guessed from
/// the URL and is not confirmed by the endpoint.
pub async fn check_endpoint<R: TreeRpc>(rpc: &R) -> Result<EndpointStatus, ReachabilityError> {
    let endpoint = rpc.url();
    let network = Network::detect(&endpoint);
    match rpc.get_slot().await {
        Ok(slot) => {
            info!("Connected to {} ({}) at slot {}", endpoint, network, slot);
            Ok(EndpointStatus {
                endpoint,
                network,
                slot,
            })
        }
        Err(e) => {
            let error = ReachabilityError::from(e);
            warn!("Endpoint {} is not reachable: {}", endpoint, error);
            Err(error)
        }
    }
}
