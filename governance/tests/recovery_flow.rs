//! End-to-end governance flows driven by a programmable clock and an
//! in-memory role store.

use warden_governance::{
    GovernanceError, RecoveryRegistry, RoleGovernor, VoteOutcome, VotingLedger,
};
use warden_nullables::{NullClock, NullRoleStore};
use warden_store::{MetaStore, RoleStore};
use warden_types::{params::DAY_SECS, Address, GovernanceParams, RoleId};

fn addr(seed: u8) -> Address {
    Address::new([seed; 32])
}

#[test]
fn recovery_accelerates_with_votes() {
    let clock = NullClock::new(0);
    let store = NullRoleStore::new();
    for seed in [1, 2, 3] {
        store.grant_role(&RoleId::ADMIN, &addr(seed)).unwrap();
    }
    let mut registry = RecoveryRegistry::new(RoleId::ADMIN, &GovernanceParams::default());

    // One admin lost their key; another proposes a replacement.
    let id = registry.create(&store, &addr(1), &addr(9), clock.now()).unwrap();

    clock.advance(10 * DAY_SECS);
    registry.vote(&addr(2), id, false).unwrap();

    // Two votes shrink the wait to 30 days; only 29 have elapsed.
    clock.advance(19 * DAY_SECS);
    assert!(matches!(
        registry.apply(&store, &addr(3), id, clock.now()),
        Err(GovernanceError::TooEarly { .. })
    ));
    assert!(!store.has_role(&RoleId::ADMIN, &addr(9)).unwrap());

    clock.advance(DAY_SECS);
    let status = registry.apply(&store, &addr(3), id, clock.now()).unwrap();
    assert!(status.completed);
    assert!(store.has_role(&RoleId::ADMIN, &addr(9)).unwrap());
}

#[test]
fn ledger_survives_restart_through_meta_store() {
    let store = NullRoleStore::new();
    for seed in [1, 2] {
        store.grant_role(&RoleId::ADMIN, &addr(seed)).unwrap();
    }
    let role = RoleId::from_label("TREASURER");
    let params = GovernanceParams {
        required_votes: 2,
        ..Default::default()
    };

    let mut governor = RoleGovernor::new(&params);
    governor.request_grant(&store, &addr(1), &role, &addr(5)).unwrap();
    store
        .put_meta(VotingLedger::meta_key(), &governor.ledger().save_state())
        .unwrap();

    // Rebuild the governor from the persisted snapshot, as a host would
    // after a restart, and finish the campaign.
    let snapshot = store.get_meta(VotingLedger::meta_key()).unwrap();
    let mut governor = RoleGovernor::with_ledger(&params, VotingLedger::load_state(&snapshot));
    assert_eq!(
        governor.request_grant(&store, &addr(2), &role, &addr(5)).unwrap(),
        VoteOutcome::Applied
    );
    assert!(store.has_role(&role, &addr(5)).unwrap());
}

#[test]
fn registry_snapshot_survives_restart_through_meta_store() {
    let clock = NullClock::new(0);
    let store = NullRoleStore::new();
    for seed in [1, 2] {
        store.grant_role(&RoleId::ADMIN, &addr(seed)).unwrap();
    }
    let params = GovernanceParams::default();

    let mut registry = RecoveryRegistry::new(RoleId::ADMIN, &params);
    let id = registry.create(&store, &addr(1), &addr(9), clock.now()).unwrap();
    registry.vote(&addr(2), id, false).unwrap();
    store
        .put_meta(RecoveryRegistry::meta_key(), &registry.save_state())
        .unwrap();

    clock.advance(30 * DAY_SECS);
    let snapshot = store.get_meta(RecoveryRegistry::meta_key()).unwrap();
    let mut registry = RecoveryRegistry::load_state(RoleId::ADMIN, &params, &snapshot);
    let status = registry.apply(&store, &addr(2), id, clock.now()).unwrap();
    assert!(status.completed);
    assert!(store.has_role(&RoleId::ADMIN, &addr(9)).unwrap());
}
