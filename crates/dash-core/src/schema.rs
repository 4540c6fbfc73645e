//! Canonical schema and column-alias resolution.
//!
//! Exports from different ad platforms spell the same column differently
//! ("Event Name" vs "eventName", "Amount Spent" vs "adSpend"). Each canonical
//! [`Field`] carries an ordered alias list; resolution walks the list and
//! takes the first alias whose cell is present and non-empty. Supporting a
//! new export format means extending the table, not adding conditionals.

use crate::models::RawRow;

/// The four fields of the canonical schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EventName,
    AdSpend,
    TicketsSold,
    LinkClicks,
}

/// All canonical fields, in schema order.
pub const ALL_FIELDS: [Field; 4] = [
    Field::EventName,
    Field::AdSpend,
    Field::TicketsSold,
    Field::LinkClicks,
];

impl Field {
    /// Accepted column-name aliases for this field, in priority order.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::EventName => &["Event Name", "eventName"],
            Field::AdSpend => &["Amount Spent", "adSpend"],
            Field::TicketsSold => &["Tickets Sold", "ticketsSold"],
            Field::LinkClicks => &["Link Clicks", "linkClicks"],
        }
    }

    /// Resolve this field against a raw row.
    ///
    /// Returns the cell of the first alias that is present with a non-empty
    /// value. An empty cell under one alias falls through to the next, so a
    /// row carrying both spellings uses whichever actually holds data.
    pub fn resolve(self, row: &RawRow) -> Option<&str> {
        self.aliases()
            .iter()
            .filter_map(|alias| row.get(*alias))
            .map(|cell| cell.as_str())
            .find(|cell| !cell.is_empty())
    }
}
