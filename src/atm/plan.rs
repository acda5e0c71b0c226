use super::denomination::Denomination;
use super::feasibility;
use super::inventory::Inventory;
use super::machine::WithdrawalError;
use super::{Amount, NoteCount};

/// Chosen counts per denomination, summing exactly to a withdrawal amount.
///
/// Plans coming out of [`plan`] are always covered by the inventory they
/// were computed against; the counts never exceed the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispensePlan {
    fifties: NoteCount,
    twenties: NoteCount,
    tens: NoteCount,
}

impl DispensePlan {
    pub const fn new(fifties: NoteCount, twenties: NoteCount, tens: NoteCount) -> Self {
        Self {
            fifties,
            twenties,
            tens,
        }
    }

    pub const fn fifties(&self) -> NoteCount {
        self.fifties
    }

    pub const fn twenties(&self) -> NoteCount {
        self.twenties
    }

    pub const fn tens(&self) -> NoteCount {
        self.tens
    }

    /// The total value the plan pays out.
    pub fn value(&self) -> Amount {
        self.fifties * Denomination::Fifty.value()
            + self.twenties * Denomination::Twenty.value()
            + self.tens * Denomination::Ten.value()
    }

    // How many distinct denominations the plan draws from: its tier.
    fn denominations_used(&self) -> usize {
        [self.fifties, self.twenties, self.tens]
            .iter()
            .filter(|count| **count > 0)
            .count()
    }

    fn sort_key(&self) -> (NoteCount, NoteCount, NoteCount) {
        (self.fifties, self.twenties, self.tens)
    }
}

/// Compute the notes to dispense for an amount.
///
/// Every combination within stock bounds is enumerated, then one is picked
/// by tier: plans drawing on three denominations beat plans drawing on two,
/// which beat single-denomination plans. Within a tier the plan with the
/// most 50s wins, then the most 20s; the total being fixed, that is also
/// the plan handing out the fewest small notes.
///
/// Exception: an amount of exactly 50 is paid as a single 50-note whenever
/// one is stocked, sparing the smaller cassettes.
///
/// Callers are expected to have confirmed feasibility first; an amount no
/// combination reaches is rejected as `InfeasiblePlanRequested` rather than
/// answered with an arbitrary plan.
pub fn plan(amount: Amount, inventory: &Inventory) -> Result<DispensePlan, WithdrawalError> {
    let candidates = enumerate(amount, inventory)?;
    if candidates.is_empty() {
        return Err(WithdrawalError::InfeasiblePlanRequested);
    }

    if amount == Denomination::Fifty.value() && inventory.count(Denomination::Fifty) > 0 {
        return Ok(DispensePlan::new(1, 0, 0));
    }

    if let Some(best) = best_in_tier(&candidates, 3) {
        return Ok(best);
    }
    if let Some(best) = best_in_tier(&candidates, 2) {
        return Ok(best);
    }

    // Single-denomination fallback: the first candidate in enumeration
    // order, which is what the machine has always dispensed. Not always the
    // fewest notes possible, and deliberately left that way.
    Ok(candidates[0])
}

// Every combination within stock bounds that sums exactly to the amount, in
// ascending (fifties, twenties, tens) enumeration order.
fn enumerate(amount: Amount, inventory: &Inventory) -> Result<Vec<DispensePlan>, WithdrawalError> {
    feasibility::check_search_bound(inventory)?;

    let fifty = Denomination::Fifty.value();
    let twenty = Denomination::Twenty.value();
    let ten = Denomination::Ten.value();

    let mut candidates = Vec::new();
    for fifties in 0..=inventory.count(Denomination::Fifty) {
        for twenties in 0..=inventory.count(Denomination::Twenty) {
            for tens in 0..=inventory.count(Denomination::Ten) {
                if fifties * fifty + twenties * twenty + tens * ten == amount {
                    candidates.push(DispensePlan::new(fifties, twenties, tens));
                }
            }
        }
    }

    Ok(candidates)
}

// The lexicographically greatest candidate using exactly `denominations`
// distinct denominations, if any.
fn best_in_tier(candidates: &[DispensePlan], denominations: usize) -> Option<DispensePlan> {
    candidates
        .iter()
        .filter(|candidate| candidate.denominations_used() == denominations)
        .max_by_key(|candidate| candidate.sort_key())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::super::feasibility::has_feasible_combination;
    use super::{plan, DispensePlan, Inventory, WithdrawalError};

    #[test]
    // A request for exactly 50 is paid as one 50-note, even though plans
    // drawing on more denominations exist.
    fn test_exact_fifty_dispenses_a_single_note() {
        let inventory = Inventory::new(2, 5, 5);

        let got = plan(50, &inventory);
        assert_eq!(Ok(DispensePlan::new(1, 0, 0)), got);
    }

    #[test]
    // Without a 50 in stock, a request for 50 falls through to the regular
    // tiers.
    fn test_exact_fifty_without_fifties_falls_through() {
        let inventory = Inventory::new(0, 2, 1);

        let got = plan(50, &inventory);
        assert_eq!(Ok(DispensePlan::new(0, 2, 1)), got);
    }

    #[test]
    // Among the three-denomination candidates for 130 — (1,1,6), (1,2,4),
    // (1,3,2), (2,1,1) — the one with the most 50s wins.
    fn test_three_denomination_tier_maximises_fifties() {
        let inventory = Inventory::new(2, 5, 6);

        let got = plan(130, &inventory);
        assert_eq!(Ok(DispensePlan::new(2, 1, 1)), got);
    }

    #[test]
    // 60 has no three-denomination combination; among the two-denomination
    // candidates, (1,0,1) beats (0,1,4) and (0,2,2).
    fn test_minimise_small_notes_within_a_tier() {
        let inventory = Inventory::new(1, 5, 5);

        let got = plan(60, &inventory);
        assert_eq!(Ok(DispensePlan::new(1, 0, 1)), got);
    }

    #[test]
    // With no 50s at all, the two-denomination tie-break falls to the most
    // 20s: (0,2,2) beats (0,1,4).
    fn test_two_denomination_tier_maximises_twenties_next() {
        let inventory = Inventory::new(0, 3, 6);

        let got = plan(60, &inventory);
        assert_eq!(Ok(DispensePlan::new(0, 2, 2)), got);
    }

    #[test]
    // 100 out of {2 fifties, 5 twenties} has two single-denomination
    // answers, (0,5,0) and (2,0,0). The machine returns the first one found
    // in enumeration order, not the one with fewer notes.
    fn test_single_denomination_fallback_keeps_first_match() {
        let inventory = Inventory::new(2, 5, 0);

        let got = plan(100, &inventory);
        assert_eq!(Ok(DispensePlan::new(0, 5, 0)), got);
    }

    #[test]
    // Feasibility is the caller's job; an infeasible amount fails loudly
    // instead of producing a made-up plan.
    fn test_infeasible_amount_is_rejected() {
        let inventory = Inventory::new(1, 0, 0);

        let got = plan(30, &inventory);
        assert_eq!(Err(WithdrawalError::InfeasiblePlanRequested), got);
    }

    #[test]
    fn test_implausible_stock_is_rejected() {
        let inventory = Inventory::new(501, 0, 0);

        let got = plan(50, &inventory);
        assert_eq!(Err(WithdrawalError::InventoryTooLarge), got);
    }

    #[test]
    // Over a sweep of amounts: the planner answers exactly when the
    // feasibility search says a combination exists, every plan pays out the
    // requested amount to the penny, and never more notes than are stocked.
    fn test_plans_are_sound_and_agree_with_feasibility() {
        let inventory = Inventory::new(3, 4, 5);

        for amount in (10..=400).step_by(10) {
            let feasible =
                has_feasible_combination(amount, &inventory).expect("stock is plausible");

            match plan(amount, &inventory) {
                Ok(got) => {
                    assert!(feasible, "planner found a plan for infeasible {}", amount);
                    assert_eq!(amount, got.value());
                    assert!(got.fifties() <= 3);
                    assert!(got.twenties() <= 4);
                    assert!(got.tens() <= 5);
                }
                Err(err) => {
                    assert!(!feasible, "planner missed feasible {}", amount);
                    assert_eq!(WithdrawalError::InfeasiblePlanRequested, err);
                }
            }
        }
    }
}
