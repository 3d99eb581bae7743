use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::models::ticket::AccountId;

use super::gateway::{GatewayError, PaymentGateway, SeatReservation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCall {
    Payment { account_id: AccountId, amount: u32 },
    Reservation { account_id: AccountId, seat_count: u32 },
}

/// Records every collaborator call in order. Clones share the same log, so
/// one instance can serve as both the payment and the reservation side.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    calls: Arc<RwLock<Vec<GatewayCall>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.read().expect("recorded calls lock").clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), GatewayError> {
        self.calls
            .write()
            .expect("recorded calls lock")
            .push(GatewayCall::Payment { account_id, amount });
        Ok(())
    }
}

#[async_trait]
impl SeatReservation for RecordingGateway {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), GatewayError> {
        self.calls
            .write()
            .expect("recorded calls lock")
            .push(GatewayCall::Reservation {
                account_id,
                seat_count,
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_the_call_log() {
        let recorder = RecordingGateway::new();
        let payment = recorder.clone();
        let reservation = recorder.clone();

        payment.make_payment(7, 40).await.unwrap();
        reservation.reserve_seats(7, 2).await.unwrap();

        assert_eq!(
            vec![
                GatewayCall::Payment {
                    account_id: 7,
                    amount: 40
                },
                GatewayCall::Reservation {
                    account_id: 7,
                    seat_count: 2
                },
            ],
            recorder.calls()
        );
    }

    #[tokio::test]
    async fn test_new_recorder_starts_empty() {
        let recorder = RecordingGateway::new();
        assert!(recorder.calls().is_empty());
    }
}
