use super::machine::{Atm, WithdrawalError};
use super::plan::DispensePlan;
use super::request::Request;
use super::RequestId;
use std::sync::mpsc::{self, Receiver, Sender};

/// The record of an honoured withdrawal: which request, which notes.
pub type Receipt = (RequestId, DispensePlan);

/// Apply a stream of requests to the machine.
///
/// One thread owns the machine state for the whole run, so requests are
/// applied strictly one at a time; receipts and rejections stream out as
/// we go instead of piling up until the input is exhausted.
pub fn process(
    mut atm: Atm,
    requests: Receiver<Request>,
    receipts_tx: Sender<Receipt>,
) -> Receiver<WithdrawalError> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        for request in requests {
            match atm.apply(&request) {
                Ok(Some(plan)) => receipts_tx.send((request.request_id, plan)).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
                Ok(None) => {} // Refills produce no receipt.
                Err(err) => tx.send(err).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
            }
        }
    });

    rx
}
