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

//! Client registry.
//!
//! The [`Ledger`] maps each client name to the single [`Client`] that owns it.
//! Names are exact-match and case-sensitive. Registration order is kept so the
//! presentation layer can enumerate clients in a stable order.
//!
//! # Thread Safety
//!
//! Clients are stored in a [`DashMap`] and handed out as `Arc<Client>`, so a
//! looked-up client stays valid while other threads keep using the ledger.

use crate::account::Account;
use crate::base::ClientName;
use crate::client::{AccountSummary, Client};
use crate::BankError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use std::sync::Arc;

/// Registry of clients keyed by name.
///
/// # Invariants
///
/// - Every registered name resolves to exactly one client with one account.
/// - A name is registered at most once; duplicates are rejected.
/// - `names()` returns names in registration order.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Clients indexed by name.
    clients: DashMap<ClientName, Arc<Client>>,
    /// Names in registration order.
    order: RwLock<Vec<ClientName>>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new client owning `account`.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::DuplicateClient`] if `name` is already taken. The
    /// existing client is left untouched.
    pub fn register(
        &self,
        name: impl Into<ClientName>,
        account: Account,
    ) -> Result<Arc<Client>, BankError> {
        let name = name.into();

        // Entry guard is held until the name is appended, so `order` never
        // lags behind a concurrent lookup.
        match self.clients.entry(name.clone()) {
            Entry::Occupied(_) => Err(BankError::DuplicateClient(name.0)),
            Entry::Vacant(entry) => {
                let client = Arc::new(Client::new(name.clone(), account));
                entry.insert(Arc::clone(&client));
                self.order.write().push(name);
                Ok(client)
            }
        }
    }

    /// Looks up a client by exact name.
    ///
    /// Returns `None` if no client is registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<Client>> {
        self.clients.get(name).map(|client| Arc::clone(client.value()))
    }

    /// Like [`lookup`](Self::lookup), but reports absence as an error.
    pub fn client(&self, name: &str) -> Result<Arc<Client>, BankError> {
        self.lookup(name)
            .ok_or_else(|| BankError::ClientNotFound(name.to_string()))
    }

    /// Returns all client names in registration order.
    pub fn names(&self) -> Vec<ClientName> {
        self.order.read().clone()
    }

    /// Returns a summary of every account in registration order.
    pub fn summaries(&self) -> Vec<AccountSummary> {
        self.names()
            .iter()
            .filter_map(|name| self.lookup(name.as_str()))
            .map(|client| client.summary())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
