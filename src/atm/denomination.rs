use super::Amount;

/// One of the three note values the machine stocks.
///
/// The set is closed: the hardware has exactly one cassette per denomination,
/// so new values can only appear together with new hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denomination {
    Ten,
    Twenty,
    Fifty,
}

impl Denomination {
    /// Every denomination, in canonical ascending order.
    pub const ALL: [Denomination; 3] = [
        Denomination::Ten,
        Denomination::Twenty,
        Denomination::Fifty,
    ];

    /// The face value of a single note.
    pub const fn value(self) -> Amount {
        match self {
            Denomination::Ten => 10,
            Denomination::Twenty => 20,
            Denomination::Fifty => 50,
        }
    }

    /// The smallest note value. Every dispensable amount is a multiple of it.
    pub const fn unit() -> Amount {
        Denomination::Ten.value()
    }
}

#[test]
fn test_values() {
    for (want, denomination) in vec![
        (10, Denomination::Ten),
        (20, Denomination::Twenty),
        (50, Denomination::Fifty),
    ] {
        assert_eq!(want, denomination.value());
    }
}

#[test]
// The canonical order is ascending by value; the inventory relies on it when
// listing available denominations.
fn test_canonical_order_is_ascending() {
    let values: Vec<Amount> = Denomination::ALL.iter().map(|d| d.value()).collect();
    assert_eq!(vec![10, 20, 50], values);
}

#[test]
fn test_unit_is_the_smallest_value() {
    assert_eq!(10, Denomination::unit());
}
