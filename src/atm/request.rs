use super::inventory::Inventory;
use super::{Amount, RequestId};

/// What a request asks the machine to do.
#[derive(Debug, PartialEq)]
pub enum Type {
    /// Pay out an amount, debiting the customer's account.
    Withdrawal(Amount),

    /// Load a delivery of notes into the cassettes.
    Refill(Inventory),
}

/// One request from the input stream, tagged with the id the stream gave it
/// so receipts can refer back to it.
#[derive(Debug, PartialEq)]
pub struct Request {
    pub(super) request_type: Type,
    pub(super) request_id: RequestId,
}

impl Request {
    pub fn new(request_type: Type, request_id: RequestId) -> Self {
        Self {
            request_type,
            request_id,
        }
    }
}
