use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

const EXPLORER_URL: &str = "https://explorer.solana.com";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Devnet,
    Mainnet,
}

impl Network {
    /// Guesses the cluster from the endpoint URL. Anything which does not
    /// name mainnet is treated as devnet.
    pub fn detect(endpoint: &str) -> Self {
        let endpoint = endpoint.to_lowercase();
        if endpoint.contains("devnet") {
            Network::Devnet
        } else if endpoint.contains("mainnet") {
            Network::Mainnet
        } else {
            Network::Devnet
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Network::Devnet => "https://api.devnet.solana.com",
            Network::Mainnet => "https://api.mainnet-beta.solana.com",
        }
    }

    pub fn explorer_tx_url(&self, signature: &str) -> String {
        format!("{}/tx/{}{}", EXPLORER_URL, signature, self.cluster_query())
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{}{}", EXPLORER_URL, address, self.cluster_query())
    }

    fn cluster_query(&self) -> &'static str {
        match self {
            Network::Devnet => "?cluster=devnet",
            Network::Mainnet => "",
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Network::Devnet => "devnet",
            Network::Mainnet => "mainnet",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "devnet" => Ok(Network::Devnet),
            "mainnet" | "mainnet-beta" => Ok(Network::Mainnet),
            other => Err(format!("unknown network: {}", other)),
        }
    }
}
