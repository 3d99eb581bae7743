use log::trace;

use crate::{
    gateways::gateway::{PaymentGateway, SeatReservation},
    models::{
        error::{InvalidPurchase, PurchaseError},
        outcome::PurchaseOutcome,
        ticket::{AccountId, TicketCategory, TicketRequest, MAX_TICKETS_PER_PURCHASE},
    },
};

/// Ticket desk for one account: prices a batch of requests, takes payment,
/// then reserves seats. Nothing is paid or reserved for a rejected batch.
pub struct BoxOffice<Payment, Reservation> {
    account_id: AccountId,
    payment: Payment,
    reservation: Reservation,
}

impl<Payment, Reservation> BoxOffice<Payment, Reservation>
where
    Payment: PaymentGateway,
    Reservation: SeatReservation,
{
    pub fn new(account_id: AccountId, payment: Payment, reservation: Reservation) -> Self {
        Self {
            account_id,
            payment,
            reservation,
        }
    }

    pub async fn purchase_tickets(
        &self,
        requests: &[TicketRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let priced = price_batch(requests)?;
        trace!(
            "priced batch for account {}: {} tickets, amount {}",
            self.account_id,
            priced.total_seats,
            priced.total_amount
        );

        self.payment
            .make_payment(self.account_id, priced.total_amount)
            .await?;
        self.reservation
            .reserve_seats(self.account_id, priced.total_seats)
            .await?;

        Ok(PurchaseOutcome {
            total_amount: priced.total_amount,
            total_seats_reserved: priced.total_seats,
        })
    }
}

struct PricedBatch {
    total_amount: u32,
    total_seats: u32,
}

fn price_batch(requests: &[TicketRequest]) -> Result<PricedBatch, InvalidPurchase> {
    if requests.is_empty() {
        return Err(InvalidPurchase::EmptyBatch);
    }

    // infants travel on an adult's lap but still occupy a reservation slot
    let total_seats = requests
        .iter()
        .fold(0u32, |total, request| total.saturating_add(request.count));
    if total_seats > MAX_TICKETS_PER_PURCHASE {
        return Err(InvalidPurchase::OverTicketLimit {
            requested: total_seats,
        });
    }

    let mut total_amount = 0;
    let mut adult_tickets = 0;
    for request in requests {
        total_amount += request.count * request.category.unit_price();
        if request.category == TicketCategory::Adult {
            adult_tickets += request.count;
        }
    }

    if adult_tickets == 0 {
        return Err(InvalidPurchase::MissingAdult);
    }

    Ok(PricedBatch {
        total_amount,
        total_seats,
    })
}
