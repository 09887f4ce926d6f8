use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {sender}")]
    Unauthorized { sender: String },

    // the variants below abort a table registration as a whole; a partial
    // index is never written
    #[error("Cannot register an empty allocation table")]
    EmptyTable {},

    #[error("Allocation row {position} has an empty name")]
    EmptyName { position: u64 },

    #[error("Allocation row {position} has an empty wallet address")]
    EmptyWallet { position: u64 },

    #[error("Duplicate wallet key {wallet_key} in allocation table")]
    DuplicateWallet { wallet_key: String },
}
