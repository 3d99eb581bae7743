use crate::models::ticket::AccountId;

use super::gateway::{GatewayError, PaymentGateway, SeatReservation};

#[derive(Default, Clone)]
pub struct Blackhole {}

#[async_trait::async_trait]
impl PaymentGateway for Blackhole {
    async fn make_payment(&self, _account_id: AccountId, _amount: u32) -> Result<(), GatewayError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl SeatReservation for Blackhole {
    async fn reserve_seats(
        &self,
        _account_id: AccountId,
        _seat_count: u32,
    ) -> Result<(), GatewayError> {
        Ok(())
    }
}
