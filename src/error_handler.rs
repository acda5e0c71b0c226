use crate::{atm::machine::WithdrawalError, input::Error};

use std::{
    io::{self, Write},
    sync::mpsc::Receiver,
};

// Rejections are expected outcomes, not failures: the machine keeps serving
// the next request no matter what happened to the previous one. They still
// matter to whoever operates the machine, so both streams end up on stderr
// rather than being swallowed; stdout stays reserved for receipts.
pub fn drain(
    input_errors: Receiver<Error>,
    rejections: Receiver<WithdrawalError>,
) -> Vec<std::thread::JoinHandle<()>> {
    vec![
        std::thread::spawn(move || {
            for err in input_errors {
                writeln!(io::stderr(), "failed to read request: {:?}", err)
                    .expect("Writing to stderr should never fail");
            }
        }),
        std::thread::spawn(move || {
            for err in rejections {
                writeln!(io::stderr(), "rejected withdrawal: {:?}", err)
                    .expect("Writing to stderr should never fail");
            }
        }),
    ]
}
