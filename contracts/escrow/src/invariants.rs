#![allow(dead_code)]

extern crate std;

use crate::types::{Deal, DealState};

/// INV-1: Held funds must never be negative.
pub fn assert_held_funds_non_negative(deal: &Deal) {
    assert!(
        deal.deposit >= 0 && deal.freeze_fee >= 0,
        "INV-1 violated: deal {} holds negative funds ({} / {})",
        deal.id,
        deal.deposit,
        deal.freeze_fee
    );
}

/// INV-2: Deal cost must always be positive.
pub fn assert_cost_positive(deal: &Deal) {
    assert!(
        deal.cost > 0,
        "INV-2 violated: deal {} has non-positive cost ({})",
        deal.id,
        deal.cost
    );
}

/// INV-3: A deal that is `Created` or `Cancelled` holds no funds.
pub fn assert_settled_funds_zeroed(deal: &Deal) {
    if matches!(deal.state, DealState::Created | DealState::Cancelled) {
        assert_eq!(
            (deal.deposit, deal.freeze_fee),
            (0, 0),
            "INV-3 violated: deal {} in {:?} still holds funds",
            deal.id,
            deal.state
        );
    }
}

/// INV-4: Transition validity. Only forward-or-cancel transitions are
/// allowed:
///   Created       -> Paid | Cancelled
///   Paid          -> DepositFrozen | Cancelled
///   DepositFrozen -> Complete | Cancelled
///   Complete      -> (none)
///   Cancelled     -> (none)
pub fn assert_valid_transition(from: &DealState, to: &DealState) {
    let valid = matches!(
        (from, to),
        (DealState::Created, DealState::Paid)
            | (DealState::Created, DealState::Cancelled)
            | (DealState::Paid, DealState::DepositFrozen)
            | (DealState::Paid, DealState::Cancelled)
            | (DealState::DepositFrozen, DealState::Complete)
            | (DealState::DepositFrozen, DealState::Cancelled)
    );

    assert!(
        valid,
        "INV-4 violated: invalid transition from {:?} to {:?}",
        from, to
    );
}

/// INV-5: Deal IDs are sequential starting from 0.
pub fn assert_sequential_ids(deals: &[Deal]) {
    for (i, deal) in deals.iter().enumerate() {
        assert_eq!(
            deal.id, i as u64,
            "INV-5 violated: expected id {}, got {}",
            i, deal.id
        );
    }
}

/// INV-6: Terms immutability. Fields fixed at creation (buyer, seller,
/// cost, description) remain unchanged across transitions.
pub fn assert_immutable_terms(original: &Deal, current: &Deal) {
    assert_eq!(original.id, current.id, "INV-6 violated: deal id changed");
    assert_eq!(
        original.buyer, current.buyer,
        "INV-6 violated: deal buyer changed"
    );
    assert_eq!(
        original.seller, current.seller,
        "INV-6 violated: deal seller changed"
    );
    assert_eq!(
        original.cost, current.cost,
        "INV-6 violated: deal cost changed"
    );
    assert_eq!(
        original.description, current.description,
        "INV-6 violated: deal description changed"
    );
}

/// Run all stateless deal invariants.
pub fn assert_all_deal_invariants(deal: &Deal) {
    assert_held_funds_non_negative(deal);
    assert_cost_positive(deal);
    assert_settled_funds_zeroed(deal);
}
