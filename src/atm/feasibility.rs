use super::denomination::Denomination;
use super::inventory::Inventory;
use super::machine::WithdrawalError;
use super::{Amount, MAX_NOTES_PER_DENOMINATION};

// The searches below walk the product of the three cassette counts. Counts
// beyond what a cassette can physically hold are rejected up front, so the
// walk stays bounded no matter what inventory a caller hands in.
pub(super) fn check_search_bound(inventory: &Inventory) -> Result<(), WithdrawalError> {
    for denomination in Denomination::ALL {
        if inventory.count(denomination) > MAX_NOTES_PER_DENOMINATION {
            return Err(WithdrawalError::InventoryTooLarge);
        }
    }

    Ok(())
}

/// Whether any combination of stocked notes sums exactly to the amount.
///
/// Brute force on purpose: every count of 50s the machine holds, times every
/// count of 20s, times every count of 10s, first match wins. The stock of a
/// real machine keeps the search space small, and the bound above keeps it
/// small even for a corrupted one.
pub fn has_feasible_combination(
    amount: Amount,
    inventory: &Inventory,
) -> Result<bool, WithdrawalError> {
    check_search_bound(inventory)?;

    // Cheap short-circuit: the whole stock can't cover the amount.
    if inventory.total_value() < amount {
        return Ok(false);
    }

    let fifty = Denomination::Fifty.value();
    let twenty = Denomination::Twenty.value();
    let ten = Denomination::Ten.value();

    for fifties in 0..=inventory.count(Denomination::Fifty) {
        for twenties in 0..=inventory.count(Denomination::Twenty) {
            for tens in 0..=inventory.count(Denomination::Ten) {
                if fifties * fifty + twenties * twenty + tens * ten == amount {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}
