//! # JSON-RPC Adapters
//!
//! Production implementations of the order-fill and chain-session traits,
//! talking to an Ethereum node over JSON-RPC 2.0. The node (or the wallet
//! behind it) owns the taker's keys and signs `eth_sendTransaction` calls.

use crate::core::error::{Result, WidgetError};
use crate::core::service::{ChainSession, ForwarderConnector, OrderFiller};
use crate::services::exchange::encode_forwarder_fill;
use crate::services::forwarder::ForwarderDeployment;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use shared::{Address, NetworkId, SignedOrder, TransactionReceipt, TxHash, U256};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Per-request HTTP timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    /// `Ok(None)` when the node answered with a `null` result
    fn into_result(self, method: &str) -> Result<Option<T>> {
        match self.error {
            Some(err) => Err(WidgetError::Chain(format!(
                "{} failed: {} (code {})",
                method, err.message, err.code
            ))),
            None => Ok(self.result),
        }
    }
}

/// Minimal JSON-RPC 2.0 client over HTTP.
#[derive(Clone)]
pub struct RpcClient {
    client: Client,
    url: String,
    next_id: Arc<AtomicU64>,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            url: url.into(),
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Call `method`, returning `None` for a `null` result.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<Option<T>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::trace!(method, id, "JSON-RPC request");
        let response = self.client.post(&self.url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(WidgetError::Network(format!(
                "{} returned HTTP {}",
                method,
                response.status()
            )));
        }

        let text = response.text().await?;
        let parsed: RpcResponse<T> = serde_json::from_str(&text)?;
        parsed.into_result(method)
    }

    /// Latest wei balance of `account`
    pub async fn get_balance(&self, account: Address) -> Result<U256> {
        self.call::<U256>("eth_getBalance", json!([account, "latest"]))
            .await?
            .ok_or_else(|| WidgetError::Chain("eth_getBalance returned no balance".to_string()))
    }
}

/// Buys with ETH by sending `fillOrder` transactions to the forwarder, which
/// wraps the attached value and fills against the network's exchange.
pub struct RpcOrderFiller {
    client: RpcClient,
    network_id: NetworkId,
    deployment: ForwarderDeployment,
}

impl RpcOrderFiller {
    pub fn new(client: RpcClient, network_id: NetworkId, deployment: ForwarderDeployment) -> Self {
        Self {
            client,
            network_id,
            deployment,
        }
    }

    fn transaction_request(&self, order: &SignedOrder, fill_amount: U256, taker: Address) -> Result<Value> {
        let exchange = self.deployment.exchange;
        if order.exchange_address != Address::ZERO && order.exchange_address != exchange {
            return Err(WidgetError::Chain(format!(
                "order targets exchange {} but network {} uses {}",
                order.exchange_address, self.network_id, exchange
            )));
        }

        Ok(json!({
            "from": taker,
            "to": self.deployment.forwarder,
            "value": fill_amount,
            "data": encode_forwarder_fill(order, fill_amount),
        }))
    }
}

#[async_trait]
impl OrderFiller for RpcOrderFiller {
    async fn fill_order(&self, order: &SignedOrder, fill_amount: U256, taker: Address) -> Result<TxHash> {
        let request = self.transaction_request(order, fill_amount, taker)?;
        self.client
            .call::<TxHash>("eth_sendTransaction", json!([request]))
            .await?
            .ok_or_else(|| WidgetError::Chain("eth_sendTransaction returned no hash".to_string()))
    }
}

/// Connects [`RpcOrderFiller`]s for every network against one node.
pub struct RpcConnector {
    client: RpcClient,
}

impl RpcConnector {
    pub fn new(client: RpcClient) -> Self {
        Self { client }
    }
}

impl ForwarderConnector for RpcConnector {
    fn connect(&self, network_id: NetworkId, deployment: &ForwarderDeployment) -> Result<Arc<dyn OrderFiller>> {
        Ok(Arc::new(RpcOrderFiller::new(self.client.clone(), network_id, *deployment)))
    }
}

/// Waits for confirmations by polling `eth_getTransactionReceipt`.
pub struct RpcChainSession {
    client: RpcClient,
    poll_interval: Duration,
    timeout: Duration,
}

impl RpcChainSession {
    pub fn new(client: RpcClient, poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            client,
            poll_interval,
            timeout,
        }
    }
}

#[async_trait]
impl ChainSession for RpcChainSession {
    async fn await_transaction_mined(&self, tx_hash: TxHash) -> Result<TransactionReceipt> {
        let client = self.client.clone();
        poll_until_mined(tx_hash, self.poll_interval, self.timeout, move || {
            let client = client.clone();
            async move {
                client
                    .call::<TransactionReceipt>("eth_getTransactionReceipt", json!([tx_hash]))
                    .await
            }
        })
        .await
    }
}

/// Call `fetch` every `poll_interval` until it yields a mined receipt.
///
/// Transport errors while polling are logged and retried; only the overall
/// `timeout` ends the wait with [`WidgetError::ConfirmationTimeout`].
pub async fn poll_until_mined<F, Fut>(
    tx_hash: TxHash,
    poll_interval: Duration,
    timeout: Duration,
    mut fetch: F,
) -> Result<TransactionReceipt>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<TransactionReceipt>>>,
{
    let wait = async {
        loop {
            match fetch().await {
                Ok(Some(receipt)) if receipt.is_mined() => return Ok(receipt),
                Ok(_) => {}
                Err(e @ WidgetError::Network(_)) => {
                    tracing::warn!(tx = %tx_hash, error = %e, "Receipt poll failed, retrying");
                }
                Err(e) => return Err(e),
            }
            tokio::time::sleep(poll_interval).await;
        }
    };

    tokio::time::timeout(timeout, wait)
        .await
        .unwrap_or(Err(WidgetError::ConfirmationTimeout(tx_hash)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::exchange::tests::sample_order;
    use alloy_primitives::U64;
    use parking_lot::Mutex;

    fn receipt(mined: bool) -> TransactionReceipt {
        TransactionReceipt {
            transaction_hash: TxHash::repeat_byte(0xab),
            block_number: mined.then(|| U64::from(7u64)),
            status: Some(U64::from(1u64)),
            gas_used: None,
        }
    }

    #[test]
    fn test_rpc_error_object_maps_to_chain_error() {
        let response: RpcResponse<TxHash> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"insufficient funds"}}"#,
        )
        .unwrap();
        let err = response.into_result("eth_sendTransaction").unwrap_err();
        assert_eq!(
            err,
            WidgetError::Chain("eth_sendTransaction failed: insufficient funds (code -32000)".to_string())
        );
    }

    #[test]
    fn test_null_result_is_none() {
        let response: RpcResponse<TransactionReceipt> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":2,"result":null}"#).unwrap();
        assert_eq!(response.into_result("eth_getTransactionReceipt").unwrap(), None);
    }

    fn filler(exchange: Address) -> RpcOrderFiller {
        let deployment = ForwarderDeployment {
            exchange,
            forwarder: Address::repeat_byte(0xb6),
        };
        RpcOrderFiller::new(RpcClient::new("http://localhost:8545").unwrap(), NetworkId(50), deployment)
    }

    #[test]
    fn test_transaction_request_pays_forwarder_in_eth() {
        let order = sample_order();
        let taker = Address::repeat_byte(0x11);
        let amount = U256::from(5u64);

        let request = filler(order.exchange_address)
            .transaction_request(&order, amount, taker)
            .unwrap();
        assert_eq!(request["to"], json!(Address::repeat_byte(0xb6)));
        assert_eq!(request["from"], json!(taker));
        assert_eq!(request["value"], json!(amount));
        assert_eq!(request["data"], json!(encode_forwarder_fill(&order, amount)));
    }

    #[test]
    fn test_order_for_other_exchange_is_rejected() {
        let result = filler(Address::repeat_byte(0x01)).transaction_request(&sample_order(), U256::from(5u64), Address::ZERO);
        assert!(matches!(result, Err(WidgetError::Chain(_))));
    }

    #[tokio::test]
    async fn test_poll_returns_first_mined_receipt() {
        let responses = Mutex::new(vec![
            Ok(Some(receipt(true))),
            Ok(Some(receipt(false))),
            Err(WidgetError::Network("connection reset".to_string())),
            Ok(None),
        ]);
        let polls = Mutex::new(0usize);

        let result = poll_until_mined(TxHash::ZERO, Duration::from_millis(1), Duration::from_secs(5), || {
            *polls.lock() += 1;
            let next = responses.lock().pop().unwrap_or(Ok(None));
            async move { next }
        })
        .await
        .unwrap();

        assert!(result.is_mined());
        assert_eq!(*polls.lock(), 4);
    }

    #[tokio::test]
    async fn test_poll_times_out() {
        let result = poll_until_mined(TxHash::ZERO, Duration::from_millis(5), Duration::from_millis(30), || async {
            Ok(None)
        })
        .await;
        assert_eq!(result.unwrap_err(), WidgetError::ConfirmationTimeout(TxHash::ZERO));
    }

    #[tokio::test]
    async fn test_poll_stops_on_chain_error() {
        let result = poll_until_mined(TxHash::ZERO, Duration::from_millis(1), Duration::from_secs(5), || async {
            Err(WidgetError::Chain("bad hash".to_string()))
        })
        .await;
        assert_eq!(result.unwrap_err(), WidgetError::Chain("bad hash".to_string()));
    }
}
