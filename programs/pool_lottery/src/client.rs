//! Helpers for off-chain tooling that talks to a deployed lottery.
//!
//! Nothing here is enforced by the program. The draw gate in particular is a
//! courtesy rule for front ends; the program pays out to a single player.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use thiserror::Error;

use crate::constants::{LOTTERY_SEED, MIN_TICKETS_FOR_DRAW};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Unknown cluster: {0}")]
    UnknownCluster(String),

    #[error("No lottery deployment configured for {0}")]
    NoDeployment(Cluster),

    #[error("Need at least {required} tickets to be sold before picking a winner, current tickets: {sold}")]
    NotEnoughTickets { required: usize, sold: usize },
}

/// The network a client is pointed at. Each one hosts its own deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cluster {
    Localnet,
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Cluster {
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Localnet => "localnet",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
        }
    }

    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Localnet => "http://127.0.0.1:8899",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cluster {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            _ => Err(ClientError::UnknownCluster(s.to_string())),
        }
    }
}

/// Derives the lottery account address for a program deployment.
pub fn lottery_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LOTTERY_SEED], program_id)
}

/// Program ids per cluster, as supplied by the client's configuration.
#[derive(Debug, Default, Clone)]
pub struct Deployments {
    programs: BTreeMap<Cluster, Pubkey>,
}

impl Deployments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, cluster: Cluster, program_id: Pubkey) -> Self {
        self.programs.insert(cluster, program_id);
        self
    }

    pub fn program_id(&self, cluster: Cluster) -> Result<Pubkey, ClientError> {
        self.programs
            .get(&cluster)
            .copied()
            .ok_or(ClientError::NoDeployment(cluster))
    }

    /// The lottery account to call on `cluster`.
    pub fn lottery(&self, cluster: Cluster) -> Result<Pubkey, ClientError> {
        let program_id = self.program_id(cluster)?;
        Ok(lottery_address(&program_id).0)
    }
}

/// Front ends only offer a draw once enough tickets are sold.
pub fn ensure_draw_ready(sold: usize) -> Result<(), ClientError> {
    if sold < MIN_TICKETS_FOR_DRAW {
        return Err(ClientError::NotEnoughTickets {
            required: MIN_TICKETS_FOR_DRAW,
            sold,
        });
    }
    Ok(())
}

/// Remaining accounts for `pick_winner`: every distinct player, writable,
/// in first-purchase order.
pub fn winner_candidates(players: &[Pubkey]) -> Vec<AccountMeta> {
    let mut seen = BTreeSet::new();
    players
        .iter()
        .filter(|player| seen.insert(**player))
        .map(|player| AccountMeta::new(*player, false))
        .collect()
}
