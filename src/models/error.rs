use std::{error::Error, fmt};

use crate::gateways::gateway::GatewayError;
use crate::models::ticket::MAX_TICKETS_PER_PURCHASE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchase {
    EmptyBatch,
    OverTicketLimit { requested: u32 },
    MissingAdult,
}

impl fmt::Display for InvalidPurchase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "no tickets requested"),
            Self::OverTicketLimit { requested } => write!(
                f,
                "{requested} tickets requested, at most {MAX_TICKETS_PER_PURCHASE} allowed"
            ),
            Self::MissingAdult => write!(
                f,
                "child or infant tickets require an adult ticket"
            ),
        }
    }
}

impl Error for InvalidPurchase {}

#[derive(Debug)]
pub enum PurchaseError {
    Invalid(InvalidPurchase),
    Gateway(GatewayError),
}

impl From<InvalidPurchase> for PurchaseError {
    fn from(value: InvalidPurchase) -> Self {
        PurchaseError::Invalid(value)
    }
}

impl From<GatewayError> for PurchaseError {
    fn from(value: GatewayError) -> Self {
        PurchaseError::Gateway(value)
    }
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PurchaseError::Invalid(e) => write!(f, "Invalid purchase: {e}"),
            PurchaseError::Gateway(e) => write!(f, "Purchase failed: {e}"),
        }
    }
}

impl Error for PurchaseError {}
