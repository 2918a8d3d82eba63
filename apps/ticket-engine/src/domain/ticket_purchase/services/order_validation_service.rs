//! Order Validation Service
//!
//! Runs every purchase-order business rule in a fixed order.

use crate::domain::shared::AccountId;
use crate::domain::ticket_purchase::errors::PurchaseError;
use crate::domain::ticket_purchase::value_objects::{
    OrderTotals, PurchasePolicy, TicketTypeRequest,
};

/// Order Validation Service - validates purchase orders against the policy.
///
/// Validation is fail-fast and the rule order is part of the contract:
/// callers see the first violation, deterministically.
pub struct OrderValidationService {
    policy: PurchasePolicy,
}

impl OrderValidationService {
    /// Create a new validation service with the given policy.
    #[must_use]
    pub const fn new(policy: PurchasePolicy) -> Self {
        Self { policy }
    }

    /// Create with the default box office policy.
    #[must_use]
    pub fn with_default_policy() -> Self {
        Self::new(PurchasePolicy::default())
    }

    /// The policy this service validates against.
    #[must_use]
    pub const fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Validate a purchase order and aggregate its ticket counts.
    ///
    /// Rules, in order:
    ///
    /// 1. The order must contain at least one request.
    /// 2. The account identifier must be positive.
    /// 3. Categories are valid by construction ([`TicketTypeRequest`]
    ///    only holds recognized types with positive quantities).
    /// 4. Quantities are aggregated into a fresh [`OrderTotals`].
    /// 5. The aggregate must contain at least one ticket.
    /// 6. The aggregate must not exceed the per-purchase maximum.
    /// 7. Child and infant tickets require at least one adult.
    /// 8. Each infant must be matched by an adult.
    ///
    /// # Errors
    ///
    /// Returns the first [`PurchaseError`] violated by the order.
    pub fn validate(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<OrderTotals, PurchaseError> {
        if requests.is_empty() {
            return Err(PurchaseError::EmptyOrder);
        }

        if !account_id.is_valid() {
            return Err(PurchaseError::InvalidAccountId {
                account_id: account_id.get(),
            });
        }

        let totals = OrderTotals::from_requests(requests);

        // Constructors enforce positive quantities, so a non-empty order
        // cannot aggregate to zero. Kept as a safety net.
        if totals.total_tickets() == 0 {
            return Err(PurchaseError::EmptyOrder);
        }

        if totals.total_tickets() > self.policy.max_tickets_per_order() {
            return Err(PurchaseError::TooManyTickets {
                requested: totals.total_tickets(),
                max: self.policy.max_tickets_per_order(),
            });
        }

        if totals.adult_tickets() == 0
            && (totals.child_tickets() > 0 || totals.infant_tickets() > 0)
        {
            return Err(PurchaseError::NoAdultTicket);
        }

        if totals.infant_tickets() > totals.adult_tickets() {
            return Err(PurchaseError::TooManyInfants {
                infants: totals.infant_tickets(),
                adults: totals.adult_tickets(),
            });
        }

        Ok(totals)
    }
}

impl Default for OrderValidationService {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
