use std::fmt::{self, Display, Formatter};

use cnft_tree_client::{
    CreationResult, EndpointStatus, ReachabilityError, SessionError, SubmissionError,
};
use cnft_tree_params::{
    constants::LAMPORTS_PER_SOL, estimate_account_size, Network, TreeConfig, ValidatedTree,
    ValidationErrors, ALL_DEPTH_SIZE_PAIRS,
};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Tabled, Serialize)]
pub struct PairRow {
    max_depth: u32,
    max_buffer_size: u32,
    max_leaves: u64,
    estimated_size: String,
    estimated_rent_sol: String,
}

/// The permitted combinations with their estimate at canopy depth 0.
pub fn pair_rows() -> Vec<PairRow> {
    ALL_DEPTH_SIZE_PAIRS
        .iter()
        .map(|pair| {
            let (estimated_size, estimated_rent_sol) =
                match estimate_account_size(pair.max_depth, pair.max_buffer_size, 0) {
                    Ok(estimate) => (
                        estimate.size_bytes.to_string(),
                        format!("{:.6}", estimate.rent_sol()),
                    ),
                    Err(_) => ("too large".to_string(), "-".to_string()),
                };
            PairRow {
                max_depth: pair.max_depth,
                max_buffer_size: pair.max_buffer_size,
                max_leaves: pair.leaf_capacity(),
                estimated_size,
                estimated_rent_sol,
            }
        })
        .collect()
}

pub fn render_pairs(rows: Vec<PairRow>) -> String {
    Table::new(rows).to_string()
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<&Result<ValidatedTree, ValidationErrors>> for ValidationReport {
    fn from(result: &Result<ValidatedTree, ValidationErrors>) -> Self {
        match result {
            Ok(validated) => Self {
                valid: true,
                errors: vec![],
                warnings: validated.warnings.iter().map(ToString::to_string).collect(),
            },
            Err(errors) => Self::from(errors),
        }
    }
}

impl From<&ValidationErrors> for ValidationReport {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            valid: false,
            errors: errors.messages(),
            warnings: errors.warnings().iter().map(ToString::to_string).collect(),
        }
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.errors.split_first() {
            None => writeln!(f, "Parameters are valid.")?,
            Some((first, rest)) => {
                writeln!(f, "Error: {}", first)?;
                if !rest.is_empty() {
                    writeln!(f, "{} more error(s):", rest.len())?;
                    for error in rest {
                        writeln!(f, "  - {}", error)?;
                    }
                }
            }
        }
        for warning in self.warnings.iter() {
            writeln!(f, "Warning: {}", warning)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EstimateReport {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub canopy_depth: u32,
    pub leaf_capacity: u64,
    /// `None` when the account is too large.
    pub estimated_size_bytes: Option<u64>,
    pub estimated_rent_lamports: Option<u64>,
    pub onchain_size_bytes: Option<u64>,
}

impl From<&TreeConfig> for EstimateReport {
    fn from(config: &TreeConfig) -> Self {
        let estimate = config.estimate().ok();
        Self {
            max_depth: config.max_depth(),
            max_buffer_size: config.max_buffer_size(),
            canopy_depth: config.canopy_depth(),
            leaf_capacity: config.leaf_capacity(),
            estimated_size_bytes: estimate.map(|estimate| estimate.size_bytes),
            estimated_rent_lamports: estimate.map(|estimate| estimate.rent_lamports),
            onchain_size_bytes: config.onchain_size().ok(),
        }
    }
}

impl EstimateReport {
    pub fn too_large(&self) -> bool {
        self.estimated_size_bytes.is_none()
    }
}

impl Display for EstimateReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tree: depth {}, buffer {}, canopy {} ({} leaves)",
            self.max_depth, self.max_buffer_size, self.canopy_depth, self.leaf_capacity
        )?;
        match (self.estimated_size_bytes, self.estimated_rent_lamports) {
            (Some(size), Some(rent)) => {
                writeln!(f, "Estimated size: {} bytes", size)?;
                writeln!(
                    f,
                    "Estimated rent: {} lamports ({:.6} SOL)",
                    rent,
                    rent as f64 / LAMPORTS_PER_SOL as f64
                )?;
            }
            _ => writeln!(f, "Estimated size: too large")?,
        }
        if let Some(onchain_size) = self.onchain_size_bytes {
            writeln!(f, "On-chain account size: {} bytes", onchain_size)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NetworkReport {
    pub endpoint: String,
    pub network: Network,
}

impl NetworkReport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            network: Network::detect(endpoint),
        }
    }
}

impl Display for NetworkReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.network)
    }
}

#[derive(Debug, Serialize)]
pub struct EndpointReport<'a>(pub &'a EndpointStatus);

impl Display for EndpointReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Endpoint {} is reachable ({}), current slot {}",
            self.0.endpoint, self.0.network, self.0.slot
        )
    }
}

#[derive(Debug, Serialize)]
pub struct CreationReport<'a> {
    #[serde(flatten)]
    pub result: &'a CreationResult,
    pub network: Network,
    pub explorer_url: String,
    pub tree_explorer_url: String,
}

impl<'a> CreationReport<'a> {
    pub fn new(result: &'a CreationResult, network: Network) -> Self {
        Self {
            result,
            network,
            explorer_url: network.explorer_tx_url(&result.signature),
            tree_explorer_url: network.explorer_address_url(&result.tree_address),
        }
    }
}

impl Display for CreationReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree created on {}.", self.network)?;
        writeln!(f, "Signature:   {}", self.result.signature)?;
        writeln!(f, "Tree:        {}", self.result.tree_address)?;
        writeln!(f, "Tree config: {}", self.result.tree_config_address)?;
        writeln!(f, "Explorer:    {}", self.explorer_url)?;
        writeln!(f, "             {}", self.tree_explorer_url)
    }
}

/// A failed reachability check or submission, `error` names the category.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FailureReport {
    pub error: &'static str,
    pub message: String,
}

impl FailureReport {
    fn new(error: &'static str, message: impl ToString) -> Self {
        Self {
            error,
            message: message.to_string(),
        }
    }
}

impl From<&ReachabilityError> for FailureReport {
    fn from(e: &ReachabilityError) -> Self {
        let error = match e {
            ReachabilityError::Unauthorized(_) => "unauthorized",
            ReachabilityError::MalformedUrl(_) => "malformed_url",
            ReachabilityError::Network(_) => "network",
        };
        Self::new(error, e)
    }
}

impl From<&SubmissionError> for FailureReport {
    fn from(e: &SubmissionError) -> Self {
        let error = match e {
            SubmissionError::Rejected(_) => "rejected",
            SubmissionError::InsufficientBalance(_) => "insufficient_balance",
            SubmissionError::Expired(_) => "expired",
            SubmissionError::Failed(_) => "failed",
        };
        Self::new(error, e)
    }
}

impl From<&SessionError> for FailureReport {
    fn from(e: &SessionError) -> Self {
        match e {
            SessionError::EndpointNotVerified => Self::new("endpoint_not_verified", e),
            SessionError::ParamsNotValidated => Self::new("params_not_validated", e),
            SessionError::TooLarge(_) => Self::new("too_large", e),
            SessionError::Submission(e) => Self::from(e),
        }
    }
}

impl Display for FailureReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.message)
    }
}
