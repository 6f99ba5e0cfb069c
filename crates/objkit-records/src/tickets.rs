//! Ticket queue simulation.
//!
//! A ticket costs 25. Customers pay with 25, 50 or 100 and are served one at
//! a time, strictly in order. The seller starts with no change.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A bill a customer can pay with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Bill {
    /// Exact price, no change needed.
    TwentyFive,
    /// Needs one 25 back.
    Fifty,
    /// Needs 75 back.
    Hundred,
}

impl TryFrom<u32> for Bill {
    type Error = RecordError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            25 => Ok(Self::TwentyFive),
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            other => Err(RecordError::UnsupportedBill(other)),
        }
    }
}

impl From<Bill> for u32 {
    fn from(bill: Bill) -> Self {
        match bill {
            Bill::TwentyFive => 25,
            Bill::Fifty => 50,
            Bill::Hundred => 100,
        }
    }
}

/// Bills held by the seller. Hundreds are never given back, so they are not
/// counted.
#[derive(Debug, Default)]
struct Till {
    twenty_fives: u32,
    fifties: u32,
}

impl Till {
    /// Take `bill` and hand back change. Returns `false` if change cannot be
    /// made, leaving the till untouched.
    fn accept(&mut self, bill: Bill) -> bool {
        match bill {
            Bill::TwentyFive => {
                self.twenty_fives += 1;
                true
            }
            Bill::Fifty => {
                if self.twenty_fives == 0 {
                    return false;
                }
                self.twenty_fives -= 1;
                self.fifties += 1;
                true
            }
            // 50 + 25 first, then 3 x 25.
            Bill::Hundred => {
                if self.fifties >= 1 && self.twenty_fives >= 1 {
                    self.fifties -= 1;
                    self.twenty_fives -= 1;
                    true
                } else if self.twenty_fives >= 3 {
                    self.twenty_fives -= 3;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Whether every customer in `queue` can be sold a ticket with correct
/// change.
///
/// ```
/// use objkit_records::sell_tickets;
///
/// assert!(sell_tickets(&[25, 25, 50]).unwrap());
/// assert!(!sell_tickets(&[25, 100]).unwrap());
/// ```
///
/// # Errors
///
/// [`RecordError::UnsupportedBill`] for any bill other than 25, 50 or 100.
/// The whole queue is checked before anyone is served.
pub fn sell_tickets(queue: &[u32]) -> Result<bool, RecordError> {
    let bills = queue
        .iter()
        .map(|&value| Bill::try_from(value))
        .collect::<Result<Vec<_>, _>>()?;

    let mut till = Till::default();
    Ok(bills.into_iter().all(|bill| till.accept(bill)))
}
