use super::*;

// =============================================================
// Liveness
// =============================================================

#[test]
fn liveness_starts_live_and_stays_revoked() {
    let liveness = Liveness::new();
    assert!(liveness.is_live());
    liveness.revoke();
    assert!(!liveness.is_live());
    liveness.revoke();
    assert!(!liveness.is_live());
}

#[test]
fn liveness_clones_share_one_flag() {
    let original = Liveness::new();
    let held_by_task = original.clone();
    original.revoke();
    assert!(!held_by_task.is_live());
}

// =============================================================
// Re-entrancy
// =============================================================

#[test]
fn verify_starts_only_from_idle_unauthenticated_state() {
    let idle = SessionState::default();
    assert!(should_start_verify(&idle));
}

#[test]
fn second_mount_does_not_start_a_duplicate_check() {
    let mut in_flight = SessionState::default();
    in_flight.apply_begin_verify();
    assert!(!should_start_verify(&in_flight));
}

#[test]
fn confirmed_session_needs_no_verification() {
    let confirmed = SessionState {
        is_authenticated: true,
        ..SessionState::default()
    };
    assert!(!should_start_verify(&confirmed));
}

// =============================================================
// Write arbitration
// =============================================================

#[test]
fn live_caller_on_current_epoch_commits() {
    assert_eq!(verify_write_action(3, 3, true), WriteAction::Commit);
}

#[test]
fn unmounted_caller_settles_without_committing() {
    assert_eq!(verify_write_action(3, 3, false), WriteAction::Settle);
}

#[test]
fn logout_mid_flight_discards_the_resolution_entirely() {
    assert_eq!(verify_write_action(3, 4, true), WriteAction::Discard);
    // Even a live caller cannot resurrect a session the epoch left behind.
    assert_eq!(verify_write_action(3, 4, false), WriteAction::Discard);
}
