use std::{error::Error, fmt};

use async_trait::async_trait;

use crate::models::ticket::AccountId;

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), GatewayError>;
}

#[async_trait]
pub trait SeatReservation: Send + Sync {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), GatewayError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    Declined,
    Unavailable,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Declined => write!(f, "Gateway request failed: Declined"),
            Self::Unavailable => write!(f, "Gateway request failed: Unavailable"),
        }
    }
}

impl Error for GatewayError {}
