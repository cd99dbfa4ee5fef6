use cnft_tree_params::TreeParamsError;
use solana_client::client_error::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("ClientError: {0}")]
    ClientError(#[from] Box<ClientError>),

    #[error("Error: `{0}`")]
    CustomError(String),
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        RpcError::ClientError(Box::new(err))
    }
}

/// Why an RPC endpoint could not be reached. Derived from the text of the
/// underlying error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReachabilityError {
    #[error("The RPC endpoint rejected the request, check the API key or access rights: {0}")]
    Unauthorized(String),
    #[error("The RPC endpoint URL is malformed: {0}")]
    MalformedUrl(String),
    #[error("Could not reach the RPC endpoint: {0}")]
    Network(String),
}

const UNAUTHORIZED_MARKERS: [&str; 5] = ["401", "403", "unauthorized", "forbidden", "api key"];
const MALFORMED_URL_MARKERS: [&str; 5] = [
    "invalid url",
    "relative url",
    "builder error",
    "url scheme",
    "empty host",
];

impl ReachabilityError {
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if contains_any(&lower, &UNAUTHORIZED_MARKERS) {
            ReachabilityError::Unauthorized(message)
        } else if contains_any(&lower, &MALFORMED_URL_MARKERS) {
            ReachabilityError::MalformedUrl(message)
        } else {
            ReachabilityError::Network(message)
        }
    }
}

impl From<RpcError> for ReachabilityError {
    fn from(err: RpcError) -> Self {
        Self::classify(err.to_string())
    }
}

/// Failure while creating the tree, derived from the text of the error
/// returned by the signer or the cluster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("The transaction was rejected by the signer: {0}")]
    Rejected(String),
    #[error("Insufficient balance to pay for the tree account: {0}")]
    InsufficientBalance(String),
    #[error("The transaction expired before it was confirmed, please try again: {0}")]
    Expired(String),
    #[error("Tree creation failed: {0}")]
    Failed(String),
}

const REJECTED_MARKERS: [&str; 3] = ["user rejected", "rejected the request", "declined"];
const INSUFFICIENT_BALANCE_MARKERS: [&str; 4] = [
    "insufficient funds",
    "insufficient lamports",
    "insufficient balance",
    "no record of a prior credit",
];
/// `SystemError::ResultWithNegativeLamports`, only when no further hex digit
/// follows.
const SYSTEM_INSUFFICIENT_FUNDS_CODE: &str = "custom program error: 0x1";
const EXPIRED_MARKERS: [&str; 4] = [
    "blockhash not found",
    "block height exceeded",
    "expired",
    "timed out",
];

impl SubmissionError {
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if contains_any(&lower, &REJECTED_MARKERS) {
            SubmissionError::Rejected(message)
        } else if contains_any(&lower, &INSUFFICIENT_BALANCE_MARKERS)
            || contains_code(&lower, SYSTEM_INSUFFICIENT_FUNDS_CODE)
        {
            SubmissionError::InsufficientBalance(message)
        } else if contains_any(&lower, &EXPIRED_MARKERS) {
            SubmissionError::Expired(message)
        } else {
            SubmissionError::Failed(message)
        }
    }
}

impl From<RpcError> for SubmissionError {
    fn from(err: RpcError) -> Self {
        Self::classify(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("The RPC endpoint has not been verified yet")]
    EndpointNotVerified,
    #[error("The tree parameters have not been validated yet")]
    ParamsNotValidated,
    #[error(transparent)]
    TooLarge(#[from] TreeParamsError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn contains_code(haystack: &str, code: &str) -> bool {
    haystack.match_indices(code).any(|(start, _)| {
        !haystack[start + code.len()..].starts_with(|c: char| c.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reachability() {
        assert!(matches!(
            ReachabilityError::classify(
                "HTTP status client error (401 Unauthorized) for url (https://rpc.example.com/)"
            ),
            ReachabilityError::Unauthorized(_)
        ));
        assert!(matches!(
            ReachabilityError::classify("error sending request: 403 Forbidden"),
            ReachabilityError::Unauthorized(_)
        ));
        assert!(matches!(
            ReachabilityError::classify("builder error: relative URL without a base"),
            ReachabilityError::MalformedUrl(_)
        ));
        assert!(matches!(
            ReachabilityError::classify("error trying to connect: dns error"),
            ReachabilityError::Network(_)
        ));
    }

    #[test]
    fn test_classify_submission() {
        assert!(matches!(
            SubmissionError::classify("User rejected the request."),
            SubmissionError::Rejected(_)
        ));
        assert!(matches!(
            SubmissionError::classify(
                "Transaction simulation failed: Attempt to debit an account but found no record of a prior credit."
            ),
            SubmissionError::InsufficientBalance(_)
        ));
        assert!(matches!(
            SubmissionError::classify("Error processing Instruction 0: custom program error: 0x1"),
            SubmissionError::InsufficientBalance(_)
        ));
        assert!(matches!(
            SubmissionError::classify("custom program error: 0x1"),
            SubmissionError::InsufficientBalance(_)
        ));
        assert!(matches!(
            SubmissionError::classify("Blockhash not found"),
            SubmissionError::Expired(_)
        ));
        assert!(matches!(
            SubmissionError::classify("block height exceeded"),
            SubmissionError::Expired(_)
        ));
        assert!(matches!(
            SubmissionError::classify("invalid account data for instruction"),
            SubmissionError::Failed(_)
        ));
    }

    #[test]
    fn test_other_program_errors_are_not_insufficient_balance() {
        for message in [
            "Error processing Instruction 1: custom program error: 0x1771",
            "custom program error: 0x10",
            "Error processing Instruction 0: custom program error: 0x1f",
        ] {
            assert!(
                matches!(SubmissionError::classify(message), SubmissionError::Failed(_)),
                "{}",
                message
            );
        }
        let message = "custom program error: 0x10, then custom program error: 0x1.";
        assert!(matches!(
            SubmissionError::classify(message),
            SubmissionError::InsufficientBalance(_)
        ));
    }

    #[test]
    fn test_classification_keeps_original_message() {
        let message = "HTTP status client error (401 Unauthorized)";
        assert_eq!(
            ReachabilityError::classify(message),
            ReachabilityError::Unauthorized(message.to_string())
        );
        let err = SubmissionError::from(RpcError::CustomError("Blockhash not found".into()));
        assert_eq!(
            err,
            SubmissionError::Expired("Error: `Blockhash not found`".to_string())
        );
    }
}
