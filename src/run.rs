use crate::atm::machine::Atm;
use crate::atm::process::process;
use crate::{error_handler, input, output};

use std::sync::mpsc;

/// Drive a full session: parse the request stream, apply every request to
/// the machine, write receipts for the honoured withdrawals, and drain the
/// rejections.
pub fn run(
    atm: Atm,
    input_stream: (impl std::io::Read + Send + 'static),
    output_stream: impl std::io::Write,
) -> Result<(), std::io::Error> {
    let (requests, input_errors) = input::parse(input_stream);

    let (receipts_tx, receipts) = mpsc::channel();
    let rejections = process(atm, requests, receipts_tx);

    let handles = error_handler::drain(input_errors, rejections);

    output::write(output_stream, receipts)?;

    for handle in handles {
        handle.join().expect("draining errors should never panic");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::atm::inventory::Inventory;
    use crate::atm::machine::{Atm, Limits};

    use rust_decimal_macros::dec;

    #[test]
    // A whole session end to end: honoured withdrawals come out as
    // receipts, the rejected row and the refill don't.
    fn test_run() {
        let data = r#"type,tx,amount,fifties,twenties,tens
withdrawal,1,80,,,
withdrawal,2,65,,,
refill,3,,1,1,1
withdrawal,4,50,,,"#;

        let atm = Atm::new(Inventory::new(2, 5, 5), dec!(500), Limits::default());
        let mut output_stream = Vec::new();

        super::run(atm, std::io::Cursor::new(data), &mut output_stream)
            .expect("the session should run to completion");

        let want = r#"tx,amount,fifties,twenties,tens
1,80,1,1,1
4,50,1,0,0
"#;
        assert_eq!(
            want.to_string(),
            String::from_utf8(output_stream).unwrap()
        );
    }
}
