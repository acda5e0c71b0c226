use super::denomination::Denomination;
use super::machine::WithdrawalError;
use super::plan::DispensePlan;
use super::{Amount, NoteCount};

/// Current stock of notes, by denomination.
///
/// An inventory is a value, not shared state: `dispense` and `refill` return
/// a new inventory instead of mutating in place, so the coordinator can swap
/// its state in one assignment and keep the old value when a request is
/// rejected halfway through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inventory {
    fifties: NoteCount,
    twenties: NoteCount,
    tens: NoteCount,
}

impl Inventory {
    pub const fn new(fifties: NoteCount, twenties: NoteCount, tens: NoteCount) -> Self {
        Self {
            fifties,
            twenties,
            tens,
        }
    }

    /// How many notes of one denomination are left.
    pub const fn count(&self, denomination: Denomination) -> NoteCount {
        match denomination {
            Denomination::Ten => self.tens,
            Denomination::Twenty => self.twenties,
            Denomination::Fifty => self.fifties,
        }
    }

    /// Every denomination with at least one note left, in canonical order.
    ///
    /// An empty vector means the machine is out of notes entirely; that is a
    /// normal answer, not an error, and callers must treat it differently
    /// from "at least one denomination left".
    pub fn available_denominations(&self) -> Vec<Denomination> {
        Denomination::ALL
            .iter()
            .copied()
            .filter(|denomination| self.count(*denomination) > 0)
            .collect()
    }

    /// The total value stored in the machine. May be zero.
    // Saturates instead of wrapping when a caller stocks absurd counts; a
    // saturated total still compares correctly against any request amount.
    pub fn total_value(&self) -> Amount {
        Denomination::ALL.iter().fold(0, |total: Amount, denomination| {
            total.saturating_add(denomination.value().saturating_mul(self.count(*denomination)))
        })
    }

    /// Remove a dispense plan's notes, returning the post-withdrawal stock.
    ///
    /// A plan asking for more notes than a cassette holds is a contract
    /// violation by the caller (plans from the planner are always covered),
    /// and is rejected instead of letting a count go negative.
    pub fn dispense(&self, plan: &DispensePlan) -> Result<Inventory, WithdrawalError> {
        let subtract = |stocked: NoteCount, dispensed: NoteCount| {
            stocked
                .checked_sub(dispensed)
                .ok_or(WithdrawalError::InsufficientInventoryForPlan)
        };

        Ok(Self {
            fifties: subtract(self.fifties, plan.fifties())?,
            twenties: subtract(self.twenties, plan.twenties())?,
            tens: subtract(self.tens, plan.tens())?,
        })
    }

    /// Load a delivery of notes into the cassettes.
    pub fn refill(&self, notes: &Inventory) -> Result<Inventory, WithdrawalError> {
        let add = |stocked: NoteCount, delivered: NoteCount| {
            stocked
                .checked_add(delivered)
                .ok_or(WithdrawalError::Overflow)
        };

        Ok(Self {
            fifties: add(self.fifties, notes.fifties)?,
            twenties: add(self.twenties, notes.twenties)?,
            tens: add(self.tens, notes.tens)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Denomination, DispensePlan, Inventory, WithdrawalError};

    #[test]
    fn test_available_denominations() {
        for (want, inventory) in vec![
            (
                vec![
                    Denomination::Ten,
                    Denomination::Twenty,
                    Denomination::Fifty,
                ],
                Inventory::new(2, 5, 5),
            ),
            (
                vec![Denomination::Ten, Denomination::Fifty],
                Inventory::new(1, 0, 3),
            ),
            (vec![Denomination::Twenty], Inventory::new(0, 7, 0)),
        ] {
            assert_eq!(want, inventory.available_denominations());
        }
    }

    #[test]
    // An empty machine answers with an empty vector, not an error.
    fn test_available_denominations_empty_machine() {
        let inventory = Inventory::new(0, 0, 0);
        assert!(inventory.available_denominations().is_empty());
    }

    #[test]
    fn test_total_value() {
        for (want, inventory) in vec![
            (280, Inventory::new(2, 5, 8)),
            (50, Inventory::new(1, 0, 0)),
            (0, Inventory::new(0, 0, 0)),
        ] {
            assert_eq!(want, inventory.total_value());
        }
    }

    #[test]
    fn test_count() {
        let inventory = Inventory::new(1, 2, 3);
        assert_eq!(1, inventory.count(Denomination::Fifty));
        assert_eq!(2, inventory.count(Denomination::Twenty));
        assert_eq!(3, inventory.count(Denomination::Ten));
    }

    #[test]
    fn test_dispense() {
        let inventory = Inventory::new(5, 5, 5);
        let plan = DispensePlan::new(2, 1, 3);

        let got = inventory.dispense(&plan).expect("the plan is covered");
        assert_eq!(Inventory::new(3, 4, 2), got);

        // The input inventory is a value and stays untouched.
        assert_eq!(Inventory::new(5, 5, 5), inventory);
    }

    #[test]
    // A plan exceeding the stock must not produce a negative count.
    fn test_dispense_more_than_stocked() {
        let inventory = Inventory::new(1, 0, 5);
        let plan = DispensePlan::new(1, 1, 0);

        let got = inventory.dispense(&plan);
        assert_eq!(Err(WithdrawalError::InsufficientInventoryForPlan), got);
    }

    #[test]
    fn test_refill() {
        let inventory = Inventory::new(1, 2, 3);
        let notes = Inventory::new(10, 0, 7);

        let got = inventory.refill(&notes).expect("the counters fit");
        assert_eq!(Inventory::new(11, 2, 10), got);
    }

    #[test]
    fn test_refill_overflow() {
        let inventory = Inventory::new(0, u32::MAX, 0);
        let notes = Inventory::new(5, 1, 5);

        let got = inventory.refill(&notes);
        assert_eq!(Err(WithdrawalError::Overflow), got);
    }

    #[test]
    // Dispensing a plan and refilling the same notes reconstructs the
    // original stock.
    fn test_dispense_then_refill_round_trip() {
        let inventory = Inventory::new(5, 5, 5);
        let plan = DispensePlan::new(2, 1, 3);

        let after = inventory.dispense(&plan).expect("the plan is covered");
        let notes = Inventory::new(plan.fifties(), plan.twenties(), plan.tens());

        assert_eq!(
            inventory,
            after.refill(&notes).expect("the counters fit")
        );
    }
}
