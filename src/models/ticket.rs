use serde::{Deserialize, Serialize};

pub type AccountId = i64;

pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Price per ticket in whole pounds. Infants travel free.
    pub fn unit_price(self) -> u32 {
        match self {
            TicketCategory::Adult => 20,
            TicketCategory::Child => 10,
            TicketCategory::Infant => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub category: TicketCategory,
    pub count: u32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }
}
