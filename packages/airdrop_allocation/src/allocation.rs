use cosmwasm_std::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Addresses at least this long are stored and searched in truncated form.
const TRUNCATE_THRESHOLD: usize = 10;
const PREFIX_LEN: usize = 6;
const SUFFIX_LEN: usize = 4;
/// Same ellipsis character the published allocation tables use.
const ELLIPSIS: char = '…';

/// One participant's reward entry. Position and rank are not part of the
/// record; they are derived from its place in the registered sequence.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Allocation {
    pub name: String,
    /// canonical display form, mixed case
    pub wallet_address: String,
    /// normalized lookup key, always `wallet_key(wallet_address)`
    pub wallet_key: String,
    pub drop_amount: Decimal,
    pub shard_count: Decimal,
}

/// Normalizes a wallet address into its lookup key: `lower(s[..6]) + '…' +
/// lower(s[last 4])` for inputs of 10 or more characters, plain lowercase
/// otherwise. Counted in characters, not bytes, so the key of a key is the
/// key itself.
///
/// Short inputs are kept as-is on purpose: they are assumed to already be
/// in short display form, and a short raw address never matches a
/// truncated key.
pub fn wallet_key(wallet: &str) -> String {
    let chars: Vec<char> = wallet.chars().collect();
    if chars.len() >= TRUNCATE_THRESHOLD {
        let front: String = chars[..PREFIX_LEN].iter().collect();
        let back: String = chars[chars.len() - SUFFIX_LEN..].iter().collect();
        format!(
            "{}{}{}",
            front.to_lowercase(),
            ELLIPSIS,
            back.to_lowercase()
        )
    } else {
        wallet.to_lowercase()
    }
}
