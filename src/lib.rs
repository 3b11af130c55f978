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

//! # Mini Bank
//!
//! This library provides an in-memory banking ledger: a registry of clients,
//! each owning one account, with deposits, withdrawals, and transfers.
//!
//! ## Core Components
//!
//! - [`Account`]: Balance holder with guarded deposit/withdraw/transfer
//! - [`Ledger`]: Registry mapping client names to [`Client`] records
//! - [`Bank`]: Presentation-facing API taking names and raw amount text
//! - [`BankError`]: Error types for rejected operations
//!
//! ## Example
//!
//! ```
//! use mini_bank::{Bank, BankError};
//!
//! let bank = Bank::seeded();
//!
//! bank.deposit("Alice", "200").unwrap();
//! assert_eq!(bank.account_summary("Alice").unwrap().balance, 1200.0);
//!
//! assert_eq!(bank.withdraw("Alice", "5000"), Err(BankError::InsufficientFunds));
//!
//! let receipt = bank.transfer("Alice", "Bob", "300").unwrap();
//! assert_eq!(receipt.from.balance, 900.0);
//! assert_eq!(receipt.to.balance, 800.0);
//! ```
//!
//! ## Precision
//!
//! Balances are `f64`. Decimal fractions that are not exactly representable
//! accumulate the usual floating-point rounding error.
//!
//! ## Thread Safety
//!
//! Each account has its own lock and transfers hold both locks for the whole
//! withdraw-then-deposit step, so a [`Bank`] can be shared between threads.

pub mod account;
mod amount;
mod bank;
mod base;
mod client;
pub mod config;
pub mod error;
mod ledger;
mod operation;

pub use account::Account;
pub use amount::parse_amount;
pub use bank::{Bank, TransferReceipt};
pub use base::{AccountNumber, ClientName};
pub use client::{AccountSummary, Client};
pub use config::{BankConfig, ClientSeed};
pub use error::{BankError, ConfigError};
pub use ledger::Ledger;
pub use operation::{Operation, Outcome};
