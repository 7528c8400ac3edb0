//! Wallet provider session
//!
//! The wallet itself (key custody, signing) is an external component; this
//! is only the connection state the creation form gates on.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletSession {
    public_key: Option<String>,
}

impl WalletSession {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected_as(public_key: impl Into<String>) -> Self {
        Self {
            public_key: Some(public_key.into()),
        }
    }

    pub fn connected(&self) -> bool {
        self.public_key.is_some()
    }

    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_state() {
        assert!(!WalletSession::disconnected().connected());

        let session = WalletSession::connected_as("8xMCommons111");
        assert!(session.connected());
        assert_eq!(session.public_key(), Some("8xMCommons111"));
    }
}
