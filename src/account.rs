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

//! Account management.
//!
//! An [`Account`] holds a balance behind its own lock. All mutation goes through
//! three guarded operations:
//!
//! - `deposit`: credits a positive amount; anything else is a silent no-op.
//! - `withdraw`: debits when `0 < amount <= balance`, otherwise declines.
//! - `transfer`: withdraw from self, then deposit into the target, holding both
//!   locks so the pair changes atomically.
//!
//! # Example
//!
//! ```
//! use mini_bank::Account;
//!
//! let alice = Account::new("A001", 1000.0);
//! let bob = Account::new("B001", 500.0);
//!
//! assert!(alice.transfer(&bob, 300.0));
//! assert_eq!(alice.balance(), 700.0);
//! assert_eq!(bob.balance(), 800.0);
//! ```

use crate::base::AccountNumber;
use parking_lot::{Mutex, MutexGuard};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ptr;

#[derive(Debug)]
struct AccountData {
    account_number: AccountNumber,
    balance: f64,
}

impl AccountData {
    fn new(account_number: AccountNumber, balance: f64) -> Self {
        Self {
            account_number,
            balance,
        }
    }

    /// Increases balance. Non-positive amounts are ignored.
    fn deposit(&mut self, amount: f64) {
        if amount > 0.0 {
            self.balance += amount;
        }
    }

    /// Decreases balance if funds allow.
    fn withdraw(&mut self, amount: f64) -> bool {
        if amount > 0.0 && amount <= self.balance {
            self.balance -= amount;
            debug_assert!(
                self.balance >= 0.0,
                "Invariant violated: withdrawal left a negative balance: {}",
                self.balance
            );
            true
        } else {
            false
        }
    }
}

/// Bank account owned by exactly one client.
#[derive(Debug)]
pub struct Account {
    inner: Mutex<AccountData>,
}

impl Account {
    /// Creates an account with the given opening balance.
    ///
    /// The opening balance is taken as-is, including negative values.
    pub fn new(account_number: impl Into<AccountNumber>, initial_balance: f64) -> Self {
        Self {
            inner: Mutex::new(AccountData::new(account_number.into(), initial_balance)),
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.inner.lock().account_number.clone()
    }

    pub fn balance(&self) -> f64 {
        self.inner.lock().balance
    }

    /// Credits `amount` when it is positive. Never fails.
    pub fn deposit(&self, amount: f64) {
        self.inner.lock().deposit(amount);
    }

    /// Debits `amount` when `0 < amount <= balance`.
    ///
    /// Returns `false` and leaves the balance untouched otherwise.
    pub fn withdraw(&self, amount: f64) -> bool {
        self.inner.lock().withdraw(amount)
    }

    /// Moves `amount` from this account to `target`.
    ///
    /// Succeeds exactly when the withdrawal from `self` would. On failure
    /// neither account changes. Transferring to the same account is a
    /// balance-neutral round trip.
    pub fn transfer(&self, target: &Account, amount: f64) -> bool {
        if ptr::eq(self, target) {
            let mut data = self.inner.lock();
            if !data.withdraw(amount) {
                return false;
            }
            data.deposit(amount);
            return true;
        }

        let (mut source, mut destination) = self.lock_pair(target);
        if !source.withdraw(amount) {
            return false;
        }
        destination.deposit(amount);
        true
    }

    /// Locks `self` and `other` in address order and returns the guards as
    /// `(self, other)`.
    fn lock_pair<'a>(
        &'a self,
        other: &'a Account,
    ) -> (MutexGuard<'a, AccountData>, MutexGuard<'a, AccountData>) {
        if ptr::from_ref(self) < ptr::from_ref(other) {
            let first = self.inner.lock();
            let second = other.inner.lock();
            (first, second)
        } else {
            let second = other.inner.lock();
            let first = self.inner.lock();
            (first, second)
        }
    }
}

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let data = self.inner.lock();
        let mut state = serializer.serialize_struct("Account", 2)?;
        state.serialize_field("account", &data.account_number)?;
        state.serialize_field("balance", &data.balance)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === AccountData Internal Tests ===

    #[test]
    fn account_data_deposit_ignores_non_positive() {
        let mut data = AccountData::new(AccountNumber::from("A001"), 100.0);
        data.deposit(0.0);
        data.deposit(-25.0);
        data.deposit(f64::NAN);
        assert_eq!(data.balance, 100.0);
    }

    #[test]
    fn account_data_withdraw_exact_balance() {
        let mut data = AccountData::new(AccountNumber::from("C001"), 750.0);
        assert!(data.withdraw(750.0));
        assert_eq!(data.balance, 0.0);
        assert!(!data.withdraw(0.01));
    }

    #[test]
    fn account_data_withdraw_rejects_non_positive() {
        let mut data = AccountData::new(AccountNumber::from("A001"), 100.0);
        assert!(!data.withdraw(0.0));
        assert!(!data.withdraw(-1.0));
        assert!(!data.withdraw(f64::NAN));
        assert_eq!(data.balance, 100.0);
    }

    #[test]
    fn negative_opening_balance_blocks_withdrawals() {
        let account = Account::new("X001", -50.0);
        assert_eq!(account.balance(), -50.0);
        assert!(!account.withdraw(1.0));
        account.deposit(60.0);
        assert_eq!(account.balance(), 10.0);
    }

    #[test]
    fn self_transfer_is_round_trip() {
        let account = Account::new("A001", 100.0);
        assert!(account.transfer(&account, 40.0));
        assert_eq!(account.balance(), 100.0);
        assert!(!account.transfer(&account, 400.0));
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn lock_pair_returns_guards_in_caller_order() {
        let a = Account::new("A001", 1.0);
        let b = Account::new("B001", 2.0);
        {
            let (first, second) = a.lock_pair(&b);
            assert_eq!(first.balance, 1.0);
            assert_eq!(second.balance, 2.0);
        }
        let (first, second) = b.lock_pair(&a);
        assert_eq!(first.balance, 2.0);
        assert_eq!(second.balance, 1.0);
    }

    // === Serialization Tests ===

    #[test]
    fn serializer_writes_account_and_balance() {
        let account = Account::new("B001", 500.0);
        let json = serde_json::to_string(&account).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["account"], "B001");
        assert_eq!(parsed["balance"], 500.0);
    }

    #[test]
    fn serializer_keeps_float_artifacts() {
        let account = Account::new("A001", 0.1);
        account.deposit(0.2);

        let json = serde_json::to_string(&account).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["balance"].as_f64().unwrap(), 0.1 + 0.2);
        assert_ne!(parsed["balance"].as_f64().unwrap(), 0.3);
    }
}
