use alloy_primitives::{Address, TxHash, U256, U64};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::token::AssetToken;

/// Identifier of the chain the widget is connected to (1 = mainnet, 42 = kovan, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u64);

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        NetworkId(id)
    }
}

/// Receipt of a mined transaction, as returned by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<U64>,
    /// `1` on success, `0` when the transaction reverted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<U256>,
}

impl TransactionReceipt {
    /// A receipt is mined once it carries a block number
    pub fn is_mined(&self) -> bool {
        self.block_number.is_some()
    }

    /// Pre-byzantium receipts have no status field and count as successful
    pub fn is_success(&self) -> bool {
        self.status.map(|s| s != U64::ZERO).unwrap_or(true)
    }
}

/// Wei (native asset) balance per account
pub type AccountWeiBalances = HashMap<Address, U256>;

/// Base-unit token balances per account, per token
pub type AccountTokenBalances = HashMap<Address, HashMap<AssetToken, U256>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes_json_rpc_shape() {
        let json = r#"{
            "transactionHash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
            "blockNumber": "0x1b4",
            "status": "0x1",
            "gasUsed": "0x5208",
            "logs": []
        }"#;
        let receipt: TransactionReceipt = serde_json::from_str(json).unwrap();
        assert!(receipt.is_mined());
        assert!(receipt.is_success());
        assert_eq!(receipt.block_number, Some(U64::from(0x1b4u64)));
        assert_eq!(receipt.gas_used, Some(U256::from(21_000u64)));
    }

    #[test]
    fn test_reverted_receipt_is_not_success() {
        let receipt = TransactionReceipt {
            transaction_hash: TxHash::ZERO,
            block_number: Some(U64::from(1u64)),
            status: Some(U64::ZERO),
            gas_used: None,
        };
        assert!(!receipt.is_success());
    }

    #[test]
    fn test_network_id_is_a_plain_number_on_the_wire() {
        assert_eq!(serde_json::to_string(&NetworkId(42)).unwrap(), "42");
    }
}
