use async_trait::async_trait;
use box_office::{
    gateways::gateway::{GatewayError, PaymentGateway, SeatReservation},
    models::{
        error::PurchaseError,
        ticket::{AccountId, TicketCategory, TicketRequest},
    },
    office::BoxOffice,
};
use rand::Rng;
use uuid::Uuid;

const DESK_ACCOUNT: AccountId = 123;

struct ConsolePayment {}

#[async_trait]
impl PaymentGateway for ConsolePayment {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), GatewayError> {
        println!("Payment of £{amount} successful for account {account_id}");
        Ok(())
    }
}

struct ConsoleReservation {}

#[async_trait]
impl SeatReservation for ConsoleReservation {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), GatewayError> {
        println!("Reserved {seat_count} seats for account {account_id}");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let office = BoxOffice::new(DESK_ACCOUNT, ConsolePayment {}, ConsoleReservation {});
    let mut rng = rand::thread_rng();

    // a family booking, a random walk-up group, and two batches the desk must turn away
    let batches = vec![
        vec![
            TicketRequest::new(TicketCategory::Adult, 2),
            TicketRequest::new(TicketCategory::Child, 3),
            TicketRequest::new(TicketCategory::Infant, 1),
        ],
        vec![
            TicketRequest::new(TicketCategory::Adult, rng.gen_range(1..=2)),
            TicketRequest::new(TicketCategory::Child, rng.gen_range(0..=3)),
        ],
        vec![
            TicketRequest::new(TicketCategory::Child, 1),
            TicketRequest::new(TicketCategory::Infant, 1),
        ],
        vec![TicketRequest::new(TicketCategory::Adult, 21)],
    ];

    for batch in batches {
        let booking = Uuid::new_v4();
        match office.purchase_tickets(&batch).await {
            Ok(outcome) => println!(
                "Booking {booking}: {}",
                serde_json::to_string(&outcome).expect("outcome serializes")
            ),
            Err(e @ PurchaseError::Invalid(_)) => println!("Booking {booking} turned away: {e}"),
            Err(e) => eprintln!("Booking {booking} failed: {e}"),
        }
    }
}
