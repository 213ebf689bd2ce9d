use {
    crate::{ALLOWANCES, BALANCES, SUPPLY},
    ferry_storage::Storage,
    ferry_types::{Addr, FerryError, FerryResult, StdError, StdResult},
};

/// An allowance of this value is treated as unlimited: spending against it
/// never draws it down.
pub const UNLIMITED: u128 = u128::MAX;

pub fn balance_of(storage: &dyn Storage, address: Addr) -> StdResult<u128> {
    BALANCES
        .may_load(storage, address)
        .map(|maybe_balance| maybe_balance.unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<u128> {
    SUPPLY
        .may_load(storage)
        .map(|maybe_supply| maybe_supply.unwrap_or_default())
}

pub fn allowance(storage: &dyn Storage, owner: Addr, spender: Addr) -> StdResult<u128> {
    ALLOWANCES
        .may_load(storage, (owner, spender))
        .map(|maybe_allowance| maybe_allowance.unwrap_or_default())
}

/// Increase the total supply by the given amount.
pub fn increase_supply(storage: &mut dyn Storage, amount: u128) -> StdResult<()> {
    SUPPLY.may_modify(storage, |supply| {
        let supply = supply.unwrap_or_default();
        let supply = supply
            .checked_add(amount)
            .ok_or(StdError::OverflowAdd { a: supply, b: amount })?;
        // Only write to storage if the supply is non-zero.
        if supply == 0 {
            Ok(None)
        } else {
            Ok(Some(supply))
        }
    })?;

    Ok(())
}

/// Decrease the total supply by the given amount.
pub fn decrease_supply(storage: &mut dyn Storage, amount: u128) -> StdResult<()> {
    SUPPLY.may_modify(storage, |supply| {
        let supply = supply.unwrap_or_default();
        let supply = supply
            .checked_sub(amount)
            .ok_or(StdError::OverflowSub { a: supply, b: amount })?;
        // If supply is reduced to zero, delete the entry.
        if supply == 0 {
            Ok(None)
        } else {
            Ok(Some(supply))
        }
    })?;

    Ok(())
}

/// Increase an account's balance by the given amount.
pub fn increase_balance(storage: &mut dyn Storage, address: Addr, amount: u128) -> StdResult<()> {
    BALANCES.may_modify(storage, address, |balance| {
        let balance = balance.unwrap_or_default();
        let balance = balance
            .checked_add(amount)
            .ok_or(StdError::OverflowAdd { a: balance, b: amount })?;
        // Only write to storage if the balance is non-zero.
        if balance == 0 {
            Ok(None)
        } else {
            Ok(Some(balance))
        }
    })?;

    Ok(())
}

/// Decrease an account's balance by the given amount.
pub fn decrease_balance(storage: &mut dyn Storage, address: Addr, amount: u128) -> FerryResult<()> {
    BALANCES.may_modify(storage, address, |balance| -> FerryResult<_> {
        let balance = balance.unwrap_or_default();
        let balance = balance
            .checked_sub(amount)
            .ok_or(FerryError::InsufficientBalance {
                account: address,
                balance,
                amount,
            })?;
        // If balance is reduced to zero, delete the entry.
        if balance == 0 {
            Ok(None)
        } else {
            Ok(Some(balance))
        }
    })?;

    Ok(())
}

/// Move tokens from one account to another.
pub fn transfer(storage: &mut dyn Storage, from: Addr, to: Addr, amount: u128) -> FerryResult<()> {
    decrease_balance(storage, from, amount)?;
    increase_balance(storage, to, amount)?;

    Ok(())
}

/// Set the allowance an owner grants a spender, replacing any previous value.
pub fn set_allowance(
    storage: &mut dyn Storage,
    owner: Addr,
    spender: Addr,
    amount: u128,
) -> StdResult<()> {
    // A zero allowance is the same as no allowance. Delete the entry.
    if amount == 0 {
        ALLOWANCES.remove(storage, (owner, spender));
        Ok(())
    } else {
        ALLOWANCES.save(storage, (owner, spender), &amount)
    }
}

/// Draw down the allowance an owner granted a spender by the given amount.
pub fn spend_allowance(
    storage: &mut dyn Storage,
    owner: Addr,
    spender: Addr,
    amount: u128,
) -> FerryResult<()> {
    ALLOWANCES.may_modify(storage, (owner, spender), |allowance| -> FerryResult<_> {
        let allowance = allowance.unwrap_or_default();
        if allowance == UNLIMITED {
            return Ok(Some(allowance));
        }

        let remaining = allowance
            .checked_sub(amount)
            .ok_or(FerryError::InsufficientAllowance {
                owner,
                spender,
                allowance,
                amount,
            })?;
        // If the allowance is exhausted, delete the entry.
        if remaining == 0 {
            Ok(None)
        } else {
            Ok(Some(remaining))
        }
    })?;

    Ok(())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, ferry_storage::MockStorage, ferry_types::ResultExt};

    #[test]
    fn minting_and_burning_move_supply() {
        let mut storage = MockStorage::new();

        increase_supply(&mut storage, 300).unwrap();
        increase_balance(&mut storage, Addr::mock(1), 300).unwrap();

        assert_eq!(total_supply(&storage).unwrap(), 300);
        assert_eq!(balance_of(&storage, Addr::mock(1)).unwrap(), 300);

        decrease_balance(&mut storage, Addr::mock(1), 300).unwrap();
        decrease_supply(&mut storage, 300).unwrap();

        assert_eq!(total_supply(&storage).unwrap(), 0);
        // Zeroed entries are deleted outright.
        assert!(!SUPPLY.exists(&storage));
        assert!(!BALANCES.exists(&storage, Addr::mock(1)));
    }

    #[test]
    fn transferring() {
        let mut storage = MockStorage::new();

        increase_balance(&mut storage, Addr::mock(1), 100).unwrap();

        transfer(&mut storage, Addr::mock(1), Addr::mock(2), 30).should_succeed();

        assert_eq!(balance_of(&storage, Addr::mock(1)).unwrap(), 70);
        assert_eq!(balance_of(&storage, Addr::mock(2)).unwrap(), 30);

        transfer(&mut storage, Addr::mock(1), Addr::mock(2), 71)
            .should_fail_with_error("insufficient balance");

        // The failed transfer must not have touched either balance.
        assert_eq!(balance_of(&storage, Addr::mock(1)).unwrap(), 70);
        assert_eq!(balance_of(&storage, Addr::mock(2)).unwrap(), 30);
    }

    #[test]
    fn spending_allowances() {
        let mut storage = MockStorage::new();

        set_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 100).unwrap();

        spend_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 60).should_succeed();
        assert_eq!(
            allowance(&storage, Addr::mock(1), Addr::mock(2)).unwrap(),
            40
        );

        spend_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 41)
            .should_fail_with_error("insufficient allowance");
        assert_eq!(
            allowance(&storage, Addr::mock(1), Addr::mock(2)).unwrap(),
            40
        );

        // Exhausting the allowance deletes the entry.
        spend_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 40).should_succeed();
        assert!(!ALLOWANCES.exists(&storage, (Addr::mock(1), Addr::mock(2))));
    }

    #[test]
    fn unlimited_allowances_are_never_drawn_down() {
        let mut storage = MockStorage::new();

        set_allowance(&mut storage, Addr::mock(1), Addr::mock(2), UNLIMITED).unwrap();

        spend_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 1_000_000).should_succeed();

        assert_eq!(
            allowance(&storage, Addr::mock(1), Addr::mock(2)).unwrap(),
            UNLIMITED
        );
    }

    #[test]
    fn revoking_an_allowance() {
        let mut storage = MockStorage::new();

        set_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 100).unwrap();
        set_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 0).unwrap();

        assert!(!ALLOWANCES.exists(&storage, (Addr::mock(1), Addr::mock(2))));

        spend_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 1)
            .should_fail_with_error("insufficient allowance");
    }

    #[test]
    fn debiting_absent_entries() {
        let mut storage = MockStorage::new();

        // An absent entry reads as zero, so any debit against it is short.
        decrease_balance(&mut storage, Addr::mock(9), 1)
            .should_fail_with_error("insufficient balance");
        spend_allowance(&mut storage, Addr::mock(1), Addr::mock(2), 1)
            .should_fail_with_error("insufficient allowance");

        // Failed debits never materialize entries.
        assert!(!BALANCES.exists(&storage, Addr::mock(9)));
        assert!(!ALLOWANCES.exists(&storage, (Addr::mock(1), Addr::mock(2))));
    }
}
