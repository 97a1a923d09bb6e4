//! Exchange and forwarder contract ABIs.
//!
//! Calldata for the `fillOrder` entry points, built from a [`SignedOrder`]
//! with `alloy-sol-types`. The forwarder takes ETH as the call value, wraps it
//! and fills the order against the exchange on the taker's behalf.

use alloy_sol_types::{sol, SolCall};
use shared::{Bytes, SignedOrder, U256};

sol! {
    struct Order {
        address makerAddress;
        address takerAddress;
        address feeRecipientAddress;
        address senderAddress;
        uint256 makerAssetAmount;
        uint256 takerAssetAmount;
        uint256 makerFee;
        uint256 takerFee;
        uint256 expirationTimeSeconds;
        uint256 salt;
        bytes makerAssetData;
        bytes takerAssetData;
    }

    interface IExchange {
        function fillOrder(Order order, uint256 takerAssetFillAmount, bytes signature) external;
    }

    interface IForwarder {
        function fillOrder(Order order, uint256 fillAmountWei, bytes signature) external payable;
    }
}

impl From<&SignedOrder> for Order {
    fn from(order: &SignedOrder) -> Self {
        Order {
            makerAddress: order.maker_address,
            takerAddress: order.taker_address,
            feeRecipientAddress: order.fee_recipient_address,
            senderAddress: order.sender_address,
            makerAssetAmount: order.maker_asset_amount,
            takerAssetAmount: order.taker_asset_amount,
            makerFee: order.maker_fee,
            takerFee: order.taker_fee,
            expirationTimeSeconds: order.expiration_time_seconds,
            salt: order.salt,
            makerAssetData: order.maker_asset_data.clone(),
            takerAssetData: order.taker_asset_data.clone(),
        }
    }
}

/// ABI-encoded forwarder `fillOrder(order, fill_amount_wei, signature)`
/// calldata. The transaction must carry `fill_amount_wei` as its value.
pub fn encode_forwarder_fill(order: &SignedOrder, fill_amount_wei: U256) -> Bytes {
    let call = IForwarder::fillOrderCall {
        order: order.into(),
        fillAmountWei: fill_amount_wei,
        signature: order.signature.clone(),
    };
    call.abi_encode().into()
}

/// ABI-encoded exchange `fillOrder(order, fill_amount, signature)` calldata.
pub fn encode_fill_order(order: &SignedOrder, fill_amount: U256) -> Bytes {
    let call = IExchange::fillOrderCall {
        order: order.into(),
        takerAssetFillAmount: fill_amount,
        signature: order.signature.clone(),
    };
    call.abi_encode().into()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::Address;

    pub(crate) fn sample_order() -> SignedOrder {
        SignedOrder {
            exchange_address: Address::repeat_byte(0x48),
            maker_address: Address::repeat_byte(0x54),
            taker_address: Address::ZERO,
            fee_recipient_address: Address::ZERO,
            sender_address: Address::ZERO,
            maker_asset_amount: U256::from(10u64).pow(U256::from(20u64)),
            taker_asset_amount: U256::from(10u64).pow(U256::from(17u64)),
            maker_fee: U256::ZERO,
            taker_fee: U256::ZERO,
            expiration_time_seconds: U256::from(1_700_000_000u64),
            salt: U256::from(42u64),
            maker_asset_data: Bytes::from(vec![0xf4, 0x72, 0x61, 0xb0]),
            taker_asset_data: Bytes::from(vec![0xf4, 0x72, 0x61, 0xb0]),
            signature: Bytes::from(vec![0x1b; 66]),
        }
    }

    #[test]
    fn test_calldata_starts_with_selector() {
        let calldata = encode_fill_order(&sample_order(), U256::from(1u64));
        assert_eq!(&calldata[..4], IExchange::fillOrderCall::SELECTOR.as_slice());
        // selector plus 32-byte words
        assert_eq!((calldata.len() - 4) % 32, 0);
    }

    #[test]
    fn test_calldata_round_trips_fill_amount() {
        let order = sample_order();
        let amount = U256::from(123_456u64);
        let calldata = encode_fill_order(&order, amount);

        let decoded = IExchange::fillOrderCall::abi_decode(&calldata, true).unwrap();
        assert_eq!(decoded.takerAssetFillAmount, amount);
        assert_eq!(decoded.order.makerAddress, order.maker_address);
        assert_eq!(decoded.signature, order.signature);
    }

    #[test]
    fn test_forwarder_calldata_carries_wei_amount() {
        let order = sample_order();
        let wei = U256::from(10u64).pow(U256::from(18u64));
        let calldata = encode_forwarder_fill(&order, wei);

        assert_eq!(&calldata[..4], IForwarder::fillOrderCall::SELECTOR.as_slice());
        let decoded = IForwarder::fillOrderCall::abi_decode(&calldata, true).unwrap();
        assert_eq!(decoded.fillAmountWei, wei);
        assert_eq!(decoded.order.salt, order.salt);
    }
}
