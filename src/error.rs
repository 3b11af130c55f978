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

//! Error types for ledger operations and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Ledger operation errors.
///
/// Every variant is recoverable: no state is mutated when one is returned and
/// the bank stays fully usable afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Amount text is not a finite number
    #[error("not a valid number: {0:?}")]
    Parse(String),

    /// Amount exceeds the source balance or is not positive
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Transfer source and destination are the same client
    #[error("cannot transfer to the same client")]
    SameClientTransfer,

    /// No client registered under this name
    #[error("client not found: {0}")]
    ClientNotFound(String),

    /// A client with this name is already registered
    #[error("client already registered: {0}")]
    DuplicateClient(String),
}

/// Errors raised while loading the seed configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid seed data: {0}")]
    Seed(#[from] BankError),
}
