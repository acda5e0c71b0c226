pub mod denomination;
pub mod feasibility;
pub mod inventory;
pub mod machine;
pub mod plan;
pub mod process;
pub mod request;
pub mod validate;

// Named types don't buy any compiler help, but they keep signatures honest:
// `fn plan(amount: Amount, ...)` reads a lot better than `fn plan(a: u32, ...)`,
// and switching the width of a counter later stays a one-line change.
pub type RequestId = u32;
pub type Amount = u32;
pub type NoteCount = u32;

// The account balance is money, so it gets a decimal type. Note values and
// note counts are whole numbers by nature and stay plain integers.
pub type AccountBalance = rust_decimal::Decimal;

// A physical cassette holds a few hundred notes at most. A count above this
// is treated as corrupted data rather than something to enumerate over.
pub const MAX_NOTES_PER_DENOMINATION: NoteCount = 500;
