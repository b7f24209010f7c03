use serde::{Deserialize, Serialize};

/// The kind of buy recorded in the transaction ledger.
///
/// No sells are modeled: a position only ever grows, either from the
/// opening lump sum or from reinvested dividend cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// The opening purchase made with the initial investment.
    InitialBuy,
    /// A purchase funded by net dividend cash.
    Reinvest,
}

impl TransactionKind {
    /// Returns true for dividend-funded purchases.
    pub fn is_reinvest(&self) -> bool {
        matches!(self, TransactionKind::Reinvest)
    }
}
