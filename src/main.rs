use withdrawal_engine::atm::inventory::Inventory;
use withdrawal_engine::atm::machine::{Atm, Limits};
use withdrawal_engine::run::run;

use rust_decimal_macros::dec;
use std::fs::File;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "withdrawals.csv".to_string());
    let input = File::open(path).expect("cannot open the requests file");

    // A freshly stocked machine serving one account.
    let atm = Atm::new(Inventory::new(20, 50, 100), dec!(2500.00), Limits::default());

    run(atm, input, std::io::stdout()).expect("cannot write receipts");
}
