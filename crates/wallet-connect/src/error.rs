use thiserror::Error;

use chain_eth::error::EthError;
use chain_eth::provider::ProviderError as EthProviderError;
use chain_sol::error::SolError;
use chain_sol::provider::ProviderError as SolProviderError;

/// Connection and balance-resolution failures.
///
/// Flows return these so callers can observe what went wrong; the view
/// boundary catches and logs them without surfacing anything to the page.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// No injected provider capability is present. Callers treat this as a
    /// silent no-op rather than a failure.
    #[error("no injected wallet provider detected")]
    ProviderAbsent,

    #[error("authorization rejected: {0}")]
    Rejected(String),

    #[error("provider request failed: {0}")]
    Provider(String),

    #[error("no accounts returned by the provider")]
    NoAccounts,

    #[error("rpc request failed: {0}")]
    Rpc(String),

    #[error("balance resolution failed: {0}")]
    Balance(String),
}

impl From<EthProviderError> for ConnectError {
    fn from(e: EthProviderError) -> Self {
        if e.is_user_rejection() {
            ConnectError::Rejected(e.message)
        } else {
            ConnectError::Provider(e.to_string())
        }
    }
}

impl From<SolProviderError> for ConnectError {
    fn from(e: SolProviderError) -> Self {
        match e {
            SolProviderError::Rejected(msg) => ConnectError::Rejected(msg),
            SolProviderError::Other(msg) => ConnectError::Provider(msg),
        }
    }
}

impl From<EthError> for ConnectError {
    fn from(e: EthError) -> Self {
        ConnectError::Balance(format!("ETH: {e}"))
    }
}

impl From<SolError> for ConnectError {
    fn from(e: SolError) -> Self {
        match e {
            SolError::Rpc(msg) => ConnectError::Rpc(msg),
            other => ConnectError::Balance(format!("SOL: {other}")),
        }
    }
}
