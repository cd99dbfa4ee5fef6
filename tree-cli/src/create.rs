use anyhow::Result;
use cnft_tree_client::{CreationResult, TreeRpc, TreeSession, TreeSubmitter};
use cnft_tree_params::{Network, TreeConfigCandidate};
use solana_sdk::signature::Keypair;

use crate::report::{FailureReport, ValidationReport};

#[derive(Debug)]
pub enum CreateOutcome {
    Invalid(ValidationReport),
    Failed(FailureReport),
    Created {
        result: CreationResult,
        network: Network,
    },
}

/// Validates the parameters, loads the payer, verifies the endpoint and
/// submits. The payer is only loaded once the parameters are valid.
pub async fn run_create<R, S, F>(
    session: &mut TreeSession<R, S>,
    candidate: TreeConfigCandidate,
    load_payer: F,
) -> Result<CreateOutcome>
where
    R: TreeRpc,
    S: TreeSubmitter,
    F: FnOnce() -> Result<Keypair>,
{
    if let Err(errors) = session.set_params(candidate) {
        return Ok(CreateOutcome::Invalid(ValidationReport::from(&errors)));
    }
    let payer = load_payer()?;

    if let Err(e) = session.verify_endpoint().await {
        return Ok(CreateOutcome::Failed(FailureReport::from(&e)));
    }
    match session.submit(&payer).await {
        Ok(result) => Ok(CreateOutcome::Created {
            result,
            network: session.network(),
        }),
        Err(e) => Ok(CreateOutcome::Failed(FailureReport::from(&e))),
    }
}
