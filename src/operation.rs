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

//! User-requested operations and their outcomes.
//!
//! An [`Operation`] carries the raw amount text exactly as the user typed it;
//! parsing happens when the operation is applied through
//! [`Bank::apply`](crate::Bank::apply).

use crate::bank::TransferReceipt;
use crate::client::AccountSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operation {
    Deposit {
        client: String,
        amount: String,
    },
    Withdraw {
        client: String,
        amount: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: String,
    },
}

impl Operation {
    /// Name of the client whose account is debited or credited first.
    pub fn client(&self) -> &str {
        match self {
            Self::Deposit { client, .. } => client,
            Self::Withdraw { client, .. } => client,
            Self::Transfer { from, .. } => from,
        }
    }

    pub fn amount(&self) -> &str {
        match self {
            Self::Deposit { amount, .. } => amount,
            Self::Withdraw { amount, .. } => amount,
            Self::Transfer { amount, .. } => amount,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Transfer { .. } => "transfer",
        }
    }
}

/// Result of a successfully applied [`Operation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Deposited(AccountSummary),
    Withdrawn(AccountSummary),
    Transferred(TransferReceipt),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposited(_) => f.write_str("deposit successful"),
            Self::Withdrawn(_) => f.write_str("withdrawal successful"),
            Self::Transferred(_) => f.write_str("transfer successful"),
        }
    }
}
