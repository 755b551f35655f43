//! End-to-end tests for both connection flows, driven through the view
//! model against scripted provider doubles.

use std::sync::{Arc, Mutex};

use alloy_primitives::U256;
use async_trait::async_trait;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use chain_eth::provider::{AddChainParams, EthereumProvider, ProviderError as EthProviderError};
use chain_sol::provider::{ProviderError as SolProviderError, SolAccount, SolanaProvider};
use chain_sol::rpc::Commitment;
use wallet_connect::{Chain, EthereumConfig, SolanaConfig, WalletView};

const ADDRESS: &str = "0x00000000219ab540356cBB839Cbe05303d7705Fa";
const OTHER_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";

/// Scripted Ethereum provider; records every request it serves.
struct MockEthProvider {
    accounts: Mutex<Vec<String>>,
    reject_accounts: bool,
    active_chain_id: u64,
    balance_wei: U256,
    token_balance: U256,
    token_decimals: u8,
    fail_token_balance: bool,
    unrecognized_chain: bool,
    log: Mutex<Vec<String>>,
}

impl MockEthProvider {
    fn new() -> Self {
        Self {
            accounts: Mutex::new(vec![ADDRESS.to_string()]),
            reject_accounts: false,
            active_chain_id: 1,
            balance_wei: U256::from(1_500_000_000_000_000_000u128),
            token_balance: U256::from(40_000_000u64),
            token_decimals: 6,
            fail_token_balance: false,
            unrecognized_chain: false,
            log: Mutex::new(Vec::new()),
        }
    }

    fn set_accounts(&self, accounts: Vec<String>) {
        *self.accounts.lock().unwrap() = accounts;
    }

    fn requests(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, entry: impl Into<String>) {
        self.log.lock().unwrap().push(entry.into());
    }
}

fn uint_word(value: U256) -> Vec<u8> {
    value.to_be_bytes::<32>().to_vec()
}

#[async_trait]
impl EthereumProvider for MockEthProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, EthProviderError> {
        self.record("request_accounts");
        if self.reject_accounts {
            return Err(EthProviderError::rejected("user rejected the request"));
        }
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn chain_id(&self) -> Result<u64, EthProviderError> {
        self.record("chain_id");
        Ok(self.active_chain_id)
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), EthProviderError> {
        self.record(format!("switch_chain:{chain_id_hex}"));
        if self.unrecognized_chain {
            return Err(EthProviderError::new(
                EthProviderError::UNRECOGNIZED_CHAIN,
                "unrecognized chain",
            ));
        }
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), EthProviderError> {
        self.record(format!("add_chain:{}", params.chain_id));
        Ok(())
    }

    async fn get_balance(&self, _address: &str) -> Result<U256, EthProviderError> {
        self.record("get_balance");
        Ok(self.balance_wei)
    }

    async fn call(&self, _to: &str, data: &[u8]) -> Result<Vec<u8>, EthProviderError> {
        // A 4-byte payload is the decimals() query; longer payloads carry
        // the ABI-encoded owner for balanceOf(address).
        if data.len() == 4 {
            self.record("call:decimals");
            Ok(uint_word(U256::from(self.token_decimals)))
        } else {
            self.record("call:balance_of");
            if self.fail_token_balance {
                return Err(EthProviderError::internal("execution reverted"));
            }
            Ok(uint_word(self.token_balance))
        }
    }
}

/// Scripted Solana provider.
struct MockSolProvider {
    public_key: [u8; 32],
    reject: bool,
}

#[async_trait]
impl SolanaProvider for MockSolProvider {
    async fn connect(&self) -> Result<SolAccount, SolProviderError> {
        if self.reject {
            return Err(SolProviderError::Rejected("user dismissed the prompt".into()));
        }
        Ok(SolAccount {
            public_key: self.public_key,
        })
    }
}

fn eth_view(provider: Arc<MockEthProvider>) -> WalletView {
    WalletView::new(Some(provider), None)
}

fn sol_view(provider: Arc<MockSolProvider>, rpc_url: String) -> WalletView {
    WalletView::with_configs(
        None,
        EthereumConfig::default(),
        Some(provider),
        SolanaConfig {
            rpc_url,
            commitment: Commitment::Confirmed,
        },
    )
}

async fn mount_balance(server: &MockServer, lamports: u64) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "context": { "slot": 100 }, "value": lamports },
        })))
        .mount(server)
        .await;
}

// ─── Ethereum flow ──────────────────────────────────────────────────

#[tokio::test]
async fn ethereum_connect_without_provider_is_silent() {
    let mut view = WalletView::new(None, None);

    view.connect_ethereum().await;

    assert!(view.ethereum_session().is_none());
    assert_eq!(view.ethereum_balance("eth"), "0");
}

#[tokio::test]
async fn ethereum_connect_sets_session_and_balances() {
    let provider = Arc::new(MockEthProvider::new());
    let mut view = eth_view(provider.clone());

    view.connect_ethereum().await;

    let session = view.ethereum_session().expect("session should be set");
    assert_eq!(session.chain, Chain::Ethereum);
    assert_eq!(session.address, ADDRESS);
    assert_eq!(view.ethereum_balance("eth"), "1.5");
    assert_eq!(view.ethereum_balance("usdt"), "40");
}

#[tokio::test]
async fn ethereum_rejection_leaves_state_unchanged() {
    let provider = Arc::new(MockEthProvider {
        reject_accounts: true,
        ..MockEthProvider::new()
    });
    let mut view = eth_view(provider.clone());

    view.connect_ethereum().await;

    assert!(view.ethereum_session().is_none());
    assert!(view.ethereum_balances().is_empty());
    // Nothing past the authorization request should have been issued.
    assert_eq!(provider.requests(), ["request_accounts"]);
}

#[tokio::test]
async fn ethereum_token_failure_publishes_no_partial_snapshot() {
    let provider = Arc::new(MockEthProvider {
        fail_token_balance: true,
        ..MockEthProvider::new()
    });
    let mut view = eth_view(provider.clone());

    view.connect_ethereum().await;

    // The session survives, but the native amount must not appear alone.
    assert!(view.ethereum_session().is_some());
    assert!(view.ethereum_balances().is_empty());
    assert_eq!(view.ethereum_balance("eth"), "0");
    assert!(provider.requests().contains(&"get_balance".to_string()));
}

#[tokio::test]
async fn ethereum_matching_chain_issues_no_switch() {
    let provider = Arc::new(MockEthProvider::new());
    let mut view = eth_view(provider.clone());

    view.connect_ethereum().await;

    assert!(!provider
        .requests()
        .iter()
        .any(|r| r.starts_with("switch_chain")));
}

#[tokio::test]
async fn ethereum_chain_mismatch_issues_hex_switch() {
    let provider = Arc::new(MockEthProvider {
        active_chain_id: 137,
        ..MockEthProvider::new()
    });
    let mut view = eth_view(provider.clone());

    view.connect_ethereum().await;

    assert!(provider
        .requests()
        .contains(&"switch_chain:0x1".to_string()));
}

#[tokio::test]
async fn ethereum_unregistered_chain_registers_without_retrying_switch() {
    let provider = Arc::new(MockEthProvider {
        active_chain_id: 137,
        unrecognized_chain: true,
        ..MockEthProvider::new()
    });
    let mut view = eth_view(provider.clone());

    view.connect_ethereum().await;

    let requests = provider.requests();
    let switches = requests
        .iter()
        .filter(|r| r.starts_with("switch_chain"))
        .count();
    let switch_pos = requests.iter().position(|r| r == "switch_chain:0x1");
    let add_pos = requests.iter().position(|r| r == "add_chain:0x1");

    // Registration follows the failed switch, and no second switch is
    // issued within the same call.
    assert_eq!(switches, 1);
    assert!(switch_pos.unwrap() < add_pos.unwrap());
}

#[tokio::test]
async fn ethereum_repeat_connect_overwrites_session() {
    let provider = Arc::new(MockEthProvider::new());
    let mut view = eth_view(provider.clone());

    view.connect_ethereum().await;
    assert_eq!(view.ethereum_session().unwrap().address, ADDRESS);

    provider.set_accounts(vec![OTHER_ADDRESS.to_string()]);
    view.connect_ethereum().await;

    assert_eq!(view.ethereum_session().unwrap().address, OTHER_ADDRESS);
}

#[tokio::test]
async fn ethereum_explorer_link_for_connected_address() {
    let provider = Arc::new(MockEthProvider::new());
    let mut view = eth_view(provider);

    assert!(view.ethereum_address_url().is_none());
    view.connect_ethereum().await;

    assert_eq!(
        view.ethereum_address_url().unwrap(),
        format!("https://etherscan.io/address/{ADDRESS}")
    );
}

// ─── Solana flow ────────────────────────────────────────────────────

#[tokio::test]
async fn solana_connect_without_provider_is_silent() {
    let mut view = WalletView::new(None, None);

    view.connect_solana().await;

    assert!(view.solana_session().is_none());
    assert_eq!(view.solana_balance("sol"), "0");
}

#[tokio::test]
async fn solana_connect_sets_session_and_balance() {
    let server = MockServer::start().await;
    mount_balance(&server, 500_000_000).await;

    let public_key = [1u8; 32];
    let provider = Arc::new(MockSolProvider {
        public_key,
        reject: false,
    });
    let mut view = sol_view(provider, server.uri());

    view.connect_solana().await;

    let session = view.solana_session().expect("session should be set");
    assert_eq!(session.chain, Chain::Solana);
    assert_eq!(session.address, chain_sol::bytes_to_address(&public_key));
    assert_eq!(view.solana_balance("sol"), "0.5");
}

#[tokio::test]
async fn solana_rejection_leaves_state_unchanged() {
    let server = MockServer::start().await;
    let provider = Arc::new(MockSolProvider {
        public_key: [1u8; 32],
        reject: true,
    });
    let mut view = sol_view(provider, server.uri());

    view.connect_solana().await;

    assert!(view.solana_session().is_none());
    assert!(view.solana_balances().is_empty());
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn solana_rpc_failure_keeps_previous_balances() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = Arc::new(MockSolProvider {
        public_key: [1u8; 32],
        reject: false,
    });
    let mut view = sol_view(provider, server.uri());

    view.connect_solana().await;

    // The session is still recorded; the balance read failed and left the
    // snapshot at its previous (empty) value.
    assert!(view.solana_session().is_some());
    assert!(view.solana_balances().is_empty());
    assert_eq!(view.solana_balance("sol"), "0");
}

#[tokio::test]
async fn solana_explorer_link_for_connected_address() {
    let server = MockServer::start().await;
    mount_balance(&server, 0).await;

    let public_key = [7u8; 32];
    let provider = Arc::new(MockSolProvider {
        public_key,
        reject: false,
    });
    let mut view = sol_view(provider, server.uri());

    view.connect_solana().await;

    let expected = format!(
        "https://explorer.solana.com/address/{}",
        chain_sol::bytes_to_address(&public_key)
    );
    assert_eq!(view.solana_address_url().unwrap(), expected);
}
