use crate::atm::plan::DispensePlan;
use crate::atm::process::Receipt;
use crate::atm::{Amount, NoteCount, RequestId};

use serde::Serialize;
use std::sync::mpsc::Receiver;

#[derive(Serialize)]
struct ReceiptRecord {
    #[serde(rename = "tx")]
    request_id: RequestId,

    amount: Amount,

    fifties: NoteCount,
    twenties: NoteCount,
    tens: NoteCount,
}

impl ReceiptRecord {
    fn new(request_id: RequestId, plan: &DispensePlan) -> Self {
        Self {
            request_id,
            amount: plan.value(),
            fifties: plan.fifties(),
            twenties: plan.twenties(),
            tens: plan.tens(),
        }
    }
}

// Writes the received receipts to the given stream.
pub fn write(
    output_stream: impl std::io::Write,
    receipts: Receiver<Receipt>,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for (request_id, plan) in receipts {
        let record = ReceiptRecord::new(request_id, &plan);
        writer.serialize(record)?;
    }

    Ok(())
}
