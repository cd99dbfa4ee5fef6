use std::sync::Arc;

use cnft_tree_client::{ReachabilityError, SessionError, SubmissionError, TreeSession};
use cnft_tree_params::{Network, TreeConfigCandidate, TreeParamsError, ValidationError};
use solana_sdk::signature::Keypair;

use test_utils::*;

fn session(url: &str) -> TreeSession<MockRpc, MockSubmitter> {
    TreeSession::new(Arc::new(MockRpc::new(url)), MockSubmitter::default())
}

#[tokio::test]
async fn test_submit_requires_verified_endpoint() {
    let mut session = session("https://api.devnet.solana.com");
    session
        .set_params(TreeConfigCandidate::new(14, 64, 10))
        .unwrap();

    let result = session.submit(&Keypair::new()).await;
    assert!(matches!(result, Err(SessionError::EndpointNotVerified)));
    assert!(session.submitter().calls.lock().unwrap().is_empty());
    // Nothing was attempted, the parameters are still there.
    assert!(session.validated().is_some());
}

#[tokio::test]
async fn test_submit_requires_validated_params() {
    let mut session = session("https://api.devnet.solana.com");
    session.verify_endpoint().await.unwrap();

    let result = session.submit(&Keypair::new()).await;
    assert!(matches!(result, Err(SessionError::ParamsNotValidated)));

    let errors = session
        .set_params(TreeConfigCandidate::new(14, 100, 0))
        .unwrap_err();
    assert!(errors.contains(&ValidationError::BufferNotPowerOfTwo(100)));
    let result = session.submit(&Keypair::new()).await;
    assert!(matches!(result, Err(SessionError::ParamsNotValidated)));
}

#[tokio::test]
async fn test_submit_success_consumes_params() {
    let mut session = session("https://api.devnet.solana.com");
    let status = session.verify_endpoint().await.unwrap();
    assert_eq!(status.slot, 42);
    assert_eq!(status.network, Network::Devnet);

    session.set_params(TreeConfigCandidate::new(3, 8, 0)).unwrap();
    let estimate = session.estimate().unwrap().unwrap();
    assert_eq!(estimate.size_bytes, 832);

    let result = session.submit(&Keypair::new()).await.unwrap();
    assert_eq!(result.tree_address, "tree");
    assert_eq!(session.submitter().calls.lock().unwrap().len(), 1);

    assert!(session.validated().is_none());
    let result = session.submit(&Keypair::new()).await;
    assert!(matches!(result, Err(SessionError::ParamsNotValidated)));
}

#[tokio::test]
async fn test_too_large_tree_is_not_submitted() {
    let mut session = session("https://api.mainnet-beta.solana.com");
    session.verify_endpoint().await.unwrap();
    assert_eq!(session.network(), Network::Mainnet);

    session
        .set_params(TreeConfigCandidate::new(20, 64, 10))
        .unwrap();
    let result = session.submit(&Keypair::new()).await;
    assert!(matches!(
        result,
        Err(SessionError::TooLarge(TreeParamsError::AccountTooLarge { .. }))
    ));
    assert!(session.submitter().calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let rpc = MockRpc::new("https://rpc.example.com")
        .with_slot_error("HTTP status client error (401 Unauthorized) for url");
    let mut session = TreeSession::new(Arc::new(rpc), MockSubmitter::default());

    let error = session.verify_endpoint().await.unwrap_err();
    assert!(matches!(error, ReachabilityError::Unauthorized(_)));
    assert!(session.endpoint_status().is_none());
    assert_eq!(session.network(), Network::Devnet);
}

#[tokio::test]
async fn test_new_endpoint_resets_verification() {
    let mut session = session("https://api.devnet.solana.com");
    session.verify_endpoint().await.unwrap();
    assert!(session.endpoint_status().is_some());

    session.set_endpoint(
        Arc::new(MockRpc::new("https://api.mainnet-beta.solana.com")),
        MockSubmitter::default(),
    );
    assert!(session.endpoint_status().is_none());
    assert_eq!(session.network(), Network::Mainnet);
}

#[tokio::test]
async fn test_submission_error_is_reported() {
    let submitter = MockSubmitter {
        error: Some(SubmissionError::classify("Blockhash not found")),
        ..Default::default()
    };
    let mut session = TreeSession::new(
        Arc::new(MockRpc::new("https://api.devnet.solana.com")),
        submitter,
    );
    session.verify_endpoint().await.unwrap();
    session
        .set_params(TreeConfigCandidate::new(14, 64, 10))
        .unwrap();

    let result = session.submit(&Keypair::new()).await;
    assert!(matches!(
        result,
        Err(SessionError::Submission(SubmissionError::Expired(_)))
    ));
}
