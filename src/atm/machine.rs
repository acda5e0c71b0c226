use super::denomination::Denomination;
use super::inventory::Inventory;
use super::plan::{self, DispensePlan};
use super::request::{self, Request};
use super::validate;
use super::{AccountBalance, Amount};

/// Why a withdrawal was rejected.
///
/// Every rejection is a normal, expected outcome representable as data;
/// nothing here is fatal to the process. Variants carry the figures a front
/// end needs to render a message, and nothing more.
#[derive(Debug, PartialEq)]
pub enum WithdrawalError {
    /// Fallback: the request is not a valid withdrawal at all.
    InvalidWithdrawal,

    /// The amount can't be composed of whole notes.
    NotMultipleOfUnit,

    /// The amount is outside the configured limits.
    OutOfRange { min: Amount, max: Amount },

    /// The amount exceeds the customer's account balance.
    InsufficientFunds { balance: AccountBalance },

    /// The machine's total stock doesn't cover the amount.
    InsufficientInventory { available: Amount },

    /// The stock would cover the amount, but no exact combination of the
    /// stocked notes adds up to it.
    NoFeasibleCombination { available: Vec<Denomination> },

    /// The planner was invoked for an amount already known to be infeasible.
    InfeasiblePlanRequested,

    /// A dispense plan asked for more notes than a cassette holds.
    InsufficientInventoryForPlan,

    /// A cassette reports an implausible note count; the search won't run.
    InventoryTooLarge,

    /// Loading more notes into a cassette would overflow its counter.
    Overflow,
}

/// Withdrawal limits, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min: Amount,
    pub max: Amount,
}

impl Default for Limits {
    fn default() -> Self {
        Self { min: 10, max: 300 }
    }
}

/// The machine is a state machine, to which you apply requests.
///
/// It owns the note inventory and the customer's account balance, and is
/// their only writer: every mutation goes through [`Atm::apply`], which
/// swaps the inventory for a freshly computed value. A rejected request
/// leaves the state exactly as it was.
pub struct Atm {
    inventory: Inventory,
    balance: AccountBalance,
    limits: Limits,
}

impl Atm {
    pub fn new(inventory: Inventory, balance: AccountBalance, limits: Limits) -> Self {
        Self {
            inventory,
            balance,
            limits,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn balance(&self) -> AccountBalance {
        self.balance
    }

    /// Apply one request. An honoured withdrawal answers with its dispense
    /// plan; a refill answers with nothing.
    pub fn apply(&mut self, request: &Request) -> Result<Option<DispensePlan>, WithdrawalError> {
        match request.request_type {
            request::Type::Withdrawal(amount) => self.withdraw(amount).map(Some),
            request::Type::Refill(notes) => {
                self.inventory = self.inventory.refill(&notes)?;
                Ok(None)
            }
        }
    }

    fn withdraw(&mut self, amount: Amount) -> Result<DispensePlan, WithdrawalError> {
        self.validate(amount)?;

        let plan = plan::plan(amount, &self.inventory)?;
        self.inventory = self.inventory.dispense(&plan)?;
        self.balance -= AccountBalance::from(amount);

        Ok(plan)
    }

    // The verdict: the first failing check decides the rejection reason.
    //
    // Divisibility runs before the availability search because an amount
    // that is no multiple of the smallest note can never be composed of
    // notes, and the search would shadow the more precise reason. A missing
    // combination only becomes the verdict when the stock would otherwise
    // have been enough; a short stock is reported as such further down.
    fn validate(&self, amount: Amount) -> Result<(), WithdrawalError> {
        if amount == 0 {
            return Err(WithdrawalError::InvalidWithdrawal);
        }

        if !validate::is_multiple_of(amount, Denomination::unit()) {
            return Err(WithdrawalError::NotMultipleOfUnit);
        }

        let total = self.inventory.total_value();

        if !validate::are_any_notes_left(amount, &self.inventory)?
            && validate::is_any_money_left(total, amount)
        {
            return Err(WithdrawalError::NoFeasibleCombination {
                available: self.inventory.available_denominations(),
            });
        }

        if !validate::is_value_within_range(amount, self.limits.min, self.limits.max) {
            return Err(WithdrawalError::OutOfRange {
                min: self.limits.min,
                max: self.limits.max,
            });
        }

        if !validate::is_any_money_left(total, amount) {
            return Err(WithdrawalError::InsufficientInventory { available: total });
        }

        if AccountBalance::from(amount) > self.balance {
            return Err(WithdrawalError::InsufficientFunds {
                balance: self.balance,
            });
        }

        Ok(())
    }
}
