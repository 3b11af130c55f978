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

//! Parsing of user-entered amounts.

use crate::BankError;

/// Parses raw amount text into a finite `f64`.
///
/// Surrounding whitespace is ignored. Anything that does not parse, or parses
/// to an infinity or NaN, is rejected with [`BankError::Parse`] carrying the
/// original text. Sign is not checked here; non-positive amounts are handled
/// by the account operations themselves.
///
/// # Example
///
/// ```
/// use mini_bank::{BankError, parse_amount};
///
/// assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
/// assert_eq!(parse_amount("abc"), Err(BankError::Parse("abc".to_string())));
/// ```
pub fn parse_amount(text: &str) -> Result<f64, BankError> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(BankError::Parse(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(parse_amount("200"), Ok(200.0));
        assert_eq!(parse_amount("0.01"), Ok(0.01));
        assert_eq!(parse_amount("-5"), Ok(-5.0));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_amount("\t 42 \n"), Ok(42.0));
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "   ", "abc", "12abc", "1,000", "$5"] {
            assert_eq!(parse_amount(text), Err(BankError::Parse(text.to_string())));
        }
    }

    #[test]
    fn rejects_non_finite() {
        for text in ["inf", "-inf", "infinity", "NaN", "1e400"] {
            assert!(parse_amount(text).is_err(), "{text} should be rejected");
        }
    }
}
