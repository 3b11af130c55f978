// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Seed configuration.
//!
//! Clients are described in TOML as an array of tables:
//!
//! ```toml
//! [[clients]]
//! name = "Alice"
//! account = "A001"
//! balance = 1000.0
//! ```

use crate::account::Account;
use crate::ledger::Ledger;
use crate::{BankError, ConfigError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientSeed {
    pub name: String,
    pub account: String,
    pub balance: f64,
}

impl ClientSeed {
    pub fn new(name: &str, account: &str, balance: f64) -> Self {
        Self {
            name: name.to_string(),
            account: account.to_string(),
            balance,
        }
    }
}

/// Clients to register when the bank starts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BankConfig {
    #[serde(default)]
    pub clients: Vec<ClientSeed>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            clients: vec![
                ClientSeed::new("Alice", "A001", 1000.0),
                ClientSeed::new("Bob", "B001", 500.0),
                ClientSeed::new("Charlie", "C001", 750.0),
            ],
        }
    }
}

impl BankConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), clients = config.clients.len(), "loaded seed config");
        Ok(config)
    }

    /// Builds a ledger, registering clients in file order.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::DuplicateClient`] if two seeds share a name.
    pub fn into_ledger(self) -> Result<Ledger, BankError> {
        let ledger = Ledger::new();
        for seed in self.clients {
            ledger.register(seed.name, Account::new(seed.account, seed.balance))?;
        }
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_matches_demo_clients() {
        let ledger = BankConfig::default().into_ledger().unwrap();
        let summaries = ledger.summaries();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].client.as_str(), "Alice");
        assert_eq!(summaries[0].account.as_str(), "A001");
        assert_eq!(summaries[0].balance, 1000.0);
        assert_eq!(summaries[1].balance, 500.0);
        assert_eq!(summaries[2].account.as_str(), "C001");
        assert_eq!(summaries[2].balance, 750.0);
    }

    #[test]
    fn parses_toml_with_integer_balance() {
        let config = BankConfig::from_toml_str(
            r#"
            [[clients]]
            name = "Dana"
            account = "D001"
            balance = 42

            [[clients]]
            name = "Eve"
            account = "E001"
            balance = -3.5
            "#,
        )
        .unwrap();

        assert_eq!(
            config.clients,
            vec![
                ClientSeed::new("Dana", "D001", 42.0),
                ClientSeed::new("Eve", "E001", -3.5)
            ]
        );
    }

    #[test]
    fn empty_document_has_no_clients() {
        let config = BankConfig::from_toml_str("").unwrap();
        assert!(config.clients.is_empty());
        assert!(config.into_ledger().unwrap().is_empty());
    }

    #[test]
    fn duplicate_seed_is_rejected() {
        let config = BankConfig {
            clients: vec![
                ClientSeed::new("Alice", "A001", 1.0),
                ClientSeed::new("Alice", "A002", 2.0),
            ],
        };
        assert_eq!(
            config.into_ledger().unwrap_err(),
            BankError::DuplicateClient("Alice".to_string())
        );
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = BankConfig::from_toml_str("[[clients]]\nname = 7\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = BankConfig::load(Path::new("/definitely/not/here/bank.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
