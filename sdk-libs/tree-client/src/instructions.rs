use borsh::BorshSerialize;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey,
    pubkey::Pubkey,
    system_instruction, system_program,
};

pub const BUBBLEGUM_PROGRAM_ID: Pubkey = pubkey!("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY");
pub const ACCOUNT_COMPRESSION_PROGRAM_ID: Pubkey =
    pubkey!("cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK");
pub const NOOP_PROGRAM_ID: Pubkey = pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTreeArgs {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub public: Option<bool>,
}

/// The tree config account is derived from the Merkle tree address.
pub fn get_tree_config_address(merkle_tree: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[merkle_tree.as_ref()], &BUBBLEGUM_PROGRAM_ID)
}

pub fn create_tree_discriminator() -> [u8; 8] {
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(b"global:create_tree").to_bytes()[..8]);
    discriminator
}

/// Allocates the Merkle tree account, owned by the account compression
/// program.
pub fn create_tree_account_instruction(
    payer: &Pubkey,
    merkle_tree: &Pubkey,
    size: u64,
    lamports: u64,
) -> Instruction {
    system_instruction::create_account(
        payer,
        merkle_tree,
        lamports,
        size,
        &ACCOUNT_COMPRESSION_PROGRAM_ID,
    )
}

/// Bubblegum `create_tree`, the payer is also the tree creator.
pub fn create_tree_instruction(
    payer: &Pubkey,
    merkle_tree: &Pubkey,
    args: CreateTreeArgs,
) -> Result<Instruction, std::io::Error> {
    let (tree_config, _) = get_tree_config_address(merkle_tree);
    let mut data = create_tree_discriminator().to_vec();
    args.serialize(&mut data)?;

    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(tree_config, false),
            AccountMeta::new(*merkle_tree, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*payer, true),
            AccountMeta::new_readonly(NOOP_PROGRAM_ID, false),
            AccountMeta::new_readonly(ACCOUNT_COMPRESSION_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}
