use std::sync::Arc;

use anyhow::anyhow;
use cnft_tree::create::{run_create, CreateOutcome};
use cnft_tree_client::{BubblegumTreeSubmitter, SolanaTreeRpc, TreeSession};
use cnft_tree_params::TreeConfigCandidate;

fn session() -> TreeSession<SolanaTreeRpc, BubblegumTreeSubmitter<SolanaTreeRpc>> {
    let rpc = Arc::new(SolanaTreeRpc::new("http://127.0.0.1:1", None));
    let submitter = BubblegumTreeSubmitter::new(rpc.clone(), false);
    TreeSession::new(rpc, submitter)
}

#[tokio::test]
async fn test_invalid_params_reported_without_payer() {
    let mut session = session();
    let outcome = run_create(&mut session, TreeConfigCandidate::new(14, 100, 0), || {
        Err(anyhow!("failed to read payer keypair"))
    })
    .await
    .unwrap();

    match outcome {
        CreateOutcome::Invalid(report) => {
            assert!(!report.valid);
            assert!(report.errors[0].starts_with("Invalid combination"));
        }
        other => panic!("expected invalid parameters, got {:?}", other),
    }
    assert!(session.endpoint_status().is_none());
}

#[tokio::test]
async fn test_payer_is_loaded_for_valid_params() {
    let mut session = session();
    let error = run_create(&mut session, TreeConfigCandidate::new(14, 64, 0), || {
        Err(anyhow!("failed to read payer keypair"))
    })
    .await
    .unwrap_err();

    assert_eq!(error.to_string(), "failed to read payer keypair");
    assert!(session.endpoint_status().is_none());
}
