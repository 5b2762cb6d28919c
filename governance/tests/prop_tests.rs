use proptest::prelude::*;

use warden_governance::{
    RecoveryRegistry, RoleGovernor, VoteDirection, VoteOutcome, VoteTarget, VotingLedger,
};
use warden_nullables::NullRoleStore;
use warden_store::RoleStore;
use warden_types::{Address, GovernanceParams, RoleId};

proptest! {
    /// The recovery waiting period never grows as votes accumulate.
    #[test]
    fn recovery_delay_monotonic(votes in 1u32..16) {
        let registry = RecoveryRegistry::new(RoleId::ADMIN, &GovernanceParams::default());
        let before = registry.required_elapsed_secs(votes);
        let after = registry.required_elapsed_secs(votes + 1);
        prop_assert!(after <= before, "delay must not grow: {} -> {}", before, after);
    }

    /// With the default constants, four or more votes collapse the waiting
    /// period to zero.
    #[test]
    fn recovery_delay_floors_at_zero(votes in 4u32..256) {
        let registry = RecoveryRegistry::new(RoleId::ADMIN, &GovernanceParams::default());
        prop_assert_eq!(registry.required_elapsed_secs(votes), 0);
    }

    /// A duplicate vote is always rejected and never changes the count.
    #[test]
    fn duplicate_vote_never_counts(
        seed in 1u8..=255,
        others in prop::collection::hash_set(1u8..=255, 0..6),
    ) {
        let mut ledger = VotingLedger::new();
        let target = VoteTarget::new(RoleId::new([7; 32]), Address::new([9; 32]));
        ledger.cast_vote(target, VoteDirection::Approve, &Address::new([seed; 32])).unwrap();
        for other in &others {
            let _ = ledger.cast_vote(target, VoteDirection::Approve, &Address::new([*other; 32]));
        }
        let count = ledger.vote_count(target, VoteDirection::Approve);

        let repeat = ledger.cast_vote(target, VoteDirection::Approve, &Address::new([seed; 32]));
        prop_assert!(repeat.is_err());
        prop_assert_eq!(ledger.vote_count(target, VoteDirection::Approve), count);
    }

    /// The store is mutated on exactly the required-votes-th distinct vote,
    /// and the ledger is empty afterwards.
    #[test]
    fn threshold_triggers_exactly_once(required in 1u32..8) {
        let store = NullRoleStore::new();
        let role = RoleId::from_label("TREASURER");
        let account = Address::new([99; 32]);
        let admins: Vec<Address> = (0..required)
            .map(|i| Address::new([i as u8 + 1; 32]))
            .collect();
        for admin in &admins {
            store.grant_role(&RoleId::ADMIN, admin).unwrap();
        }

        let params = GovernanceParams { required_votes: required, ..Default::default() };
        let mut governor = RoleGovernor::new(&params);
        for (i, admin) in admins.iter().enumerate() {
            let nth = i as u32 + 1;
            let outcome = governor.request_grant(&store, admin, &role, &account).unwrap();
            if nth < required {
                prop_assert_eq!(outcome, VoteOutcome::Recorded(nth));
                prop_assert!(!store.has_role(&role, &account).unwrap());
            } else {
                prop_assert_eq!(outcome, VoteOutcome::Applied);
                prop_assert!(store.has_role(&role, &account).unwrap());
            }
        }
        prop_assert_eq!(governor.ledger().pending_entries(), 0);
    }
}
