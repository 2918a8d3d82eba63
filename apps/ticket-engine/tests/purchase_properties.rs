//! Property-based tests for order validation and pricing.
//!
//! The pricing and acceptance rules are small enough to restate as
//! predicates, so arbitrary orders can be checked against them.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use ticket_engine::{
    AccountId, Money, OrderValidationService, TicketType, TicketTypeRequest,
};

fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

fn line_item() -> impl Strategy<Value = TicketTypeRequest> {
    (ticket_type(), 1u32..=30).prop_map(|(ticket_type, quantity)| {
        TicketTypeRequest::new(ticket_type, quantity).unwrap()
    })
}

fn count(requests: &[TicketTypeRequest], wanted: TicketType) -> u32 {
    requests
        .iter()
        .filter(|r| r.ticket_type() == wanted)
        .map(TicketTypeRequest::quantity)
        .sum()
}

proptest! {
    /// Accepted orders price as 25·adults + 15·children and reserve
    /// adults + children seats, independent of the infant count.
    #[test]
    fn accepted_orders_follow_the_price_and_seat_formulas(
        requests in prop::collection::vec(line_item(), 1..6),
        account in 1i64..1000,
    ) {
        let service = OrderValidationService::with_default_policy();

        if let Ok(totals) = service.validate(AccountId::new(account), &requests) {
            let adults = count(&requests, TicketType::Adult);
            let children = count(&requests, TicketType::Child);

            prop_assert_eq!(
                totals.amount_due(service.policy()),
                Money::from_units(i64::from(25 * adults + 15 * children))
            );
            prop_assert_eq!(totals.seats_to_reserve(), adults + children);
        }
    }

    /// An order is accepted iff: non-empty, positive account, total at
    /// most 25, an adult present whenever children or infants are, and
    /// no more infants than adults.
    #[test]
    fn acceptance_matches_the_business_predicate(
        requests in prop::collection::vec(line_item(), 0..6),
        account in -2i64..100,
    ) {
        let service = OrderValidationService::with_default_policy();

        let adults = count(&requests, TicketType::Adult);
        let children = count(&requests, TicketType::Child);
        let infants = count(&requests, TicketType::Infant);
        let total = adults + children + infants;

        let should_accept = !requests.is_empty()
            && account > 0
            && total <= 25
            && (children + infants == 0 || adults >= 1)
            && infants <= adults;

        let result = service.validate(AccountId::new(account), &requests);
        prop_assert_eq!(result.is_ok(), should_accept, "result: {:?}", result);
    }

    /// Validation never panics, whatever the order shape.
    #[test]
    fn validation_is_total(
        requests in prop::collection::vec(line_item(), 0..10),
        account in i64::MIN..i64::MAX,
    ) {
        let service = OrderValidationService::with_default_policy();
        let _ = service.validate(AccountId::new(account), &requests);
    }
}
