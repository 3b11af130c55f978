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

//! Clients and the read-only account view handed to the presentation layer.

use crate::account::Account;
use crate::base::{AccountNumber, ClientName};
use serde::Serialize;
use std::fmt;

/// Named owner of exactly one [`Account`].
#[derive(Debug)]
pub struct Client {
    name: ClientName,
    account: Account,
}

impl Client {
    pub fn new(name: impl Into<ClientName>, account: Account) -> Self {
        Self {
            name: name.into(),
            account,
        }
    }

    pub fn name(&self) -> &ClientName {
        &self.name
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Snapshots the client's account number and current balance.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            client: self.name.clone(),
            account: self.account.account_number(),
            balance: self.account.balance(),
        }
    }
}

/// Point-in-time view of a client's account.
///
/// Serializes as `client,account,balance` for CSV reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub client: ClientName,
    pub account: AccountNumber,
    pub balance: f64,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.client, self.account, self.balance)
    }
}
