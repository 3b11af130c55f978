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

//! Presentation-facing banking API.
//!
//! The [`Bank`] is what a front end talks to. It takes client names and raw
//! amount text, validates them, and drives the [`Ledger`] and its accounts.
//!
//! # Checks
//!
//! Every call runs its checks in the same order and stops at the first failure:
//!
//! 1. Amount text must parse as a finite number ([`BankError::Parse`]).
//! 2. Every named client must exist ([`BankError::ClientNotFound`]).
//! 3. Transfers must name two different clients ([`BankError::SameClientTransfer`]).
//! 4. The account operation itself ([`BankError::InsufficientFunds`] on decline).
//!
//! A failed call never mutates any account.

use crate::account::Account;
use crate::amount::parse_amount;
use crate::base::ClientName;
use crate::client::AccountSummary;
use crate::config::BankConfig;
use crate::ledger::Ledger;
use crate::operation::{Operation, Outcome};
use crate::BankError;
use std::sync::Arc;

/// Balances of both sides after a completed transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    pub from: AccountSummary,
    pub to: AccountSummary,
    pub amount: f64,
}

/// Banking facade over a [`Ledger`].
#[derive(Debug, Default)]
pub struct Bank {
    ledger: Ledger,
}

impl Bank {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Creates a bank holding the default seed clients (Alice, Bob, Charlie).
    pub fn seeded() -> Self {
        // The default seed has distinct names, so building it cannot fail.
        let ledger = BankConfig::default()
            .into_ledger()
            .unwrap_or_default();
        Self::new(ledger)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Registers a new client with an opening balance.
    pub fn open_account(
        &self,
        name: &str,
        account_number: &str,
        initial_balance: f64,
    ) -> Result<AccountSummary, BankError> {
        let client = self
            .ledger
            .register(name, Account::new(account_number, initial_balance))?;
        tracing::debug!(client = %name, account = %account_number, initial_balance, "account opened");
        Ok(client.summary())
    }

    /// Client names in registration order, for populating selection lists.
    pub fn list_client_names(&self) -> Vec<ClientName> {
        self.ledger.names()
    }

    pub fn account_summary(&self, name: &str) -> Result<AccountSummary, BankError> {
        Ok(self.ledger.client(name)?.summary())
    }

    /// Deposits into `name`'s account.
    ///
    /// Non-positive amounts are accepted and leave the balance unchanged.
    pub fn deposit(&self, name: &str, amount_text: &str) -> Result<AccountSummary, BankError> {
        let amount = parse_amount(amount_text)?;
        let client = self.ledger.client(name)?;

        client.account().deposit(amount);
        tracing::debug!(client = %name, amount, "deposit applied");
        Ok(client.summary())
    }

    pub fn withdraw(&self, name: &str, amount_text: &str) -> Result<AccountSummary, BankError> {
        let amount = parse_amount(amount_text)?;
        let client = self.ledger.client(name)?;

        if !client.account().withdraw(amount) {
            tracing::debug!(client = %name, amount, "withdrawal declined");
            return Err(BankError::InsufficientFunds);
        }
        tracing::debug!(client = %name, amount, "withdrawal applied");
        Ok(client.summary())
    }

    /// Moves funds between two different clients.
    ///
    /// Same-client transfers are rejected here even though the account layer
    /// would treat them as a harmless round trip.
    pub fn transfer(
        &self,
        from: &str,
        to: &str,
        amount_text: &str,
    ) -> Result<TransferReceipt, BankError> {
        let amount = parse_amount(amount_text)?;
        let source = self.ledger.client(from)?;
        let target = self.ledger.client(to)?;

        if Arc::ptr_eq(&source, &target) {
            return Err(BankError::SameClientTransfer);
        }

        if !source.account().transfer(target.account(), amount) {
            tracing::debug!(from = %from, to = %to, amount, "transfer declined");
            return Err(BankError::InsufficientFunds);
        }
        tracing::debug!(from = %from, to = %to, amount, "transfer applied");
        Ok(TransferReceipt {
            from: source.summary(),
            to: target.summary(),
            amount,
        })
    }

    /// Applies a single [`Operation`].
    pub fn apply(&self, operation: &Operation) -> Result<Outcome, BankError> {
        match operation {
            Operation::Deposit { client, amount } => {
                self.deposit(client, amount).map(Outcome::Deposited)
            }
            Operation::Withdraw { client, amount } => {
                self.withdraw(client, amount).map(Outcome::Withdrawn)
            }
            Operation::Transfer { from, to, amount } => {
                self.transfer(from, to, amount).map(Outcome::Transferred)
            }
        }
    }
}
