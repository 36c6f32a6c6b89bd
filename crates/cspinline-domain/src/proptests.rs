//! Property-based tests for the decision engine.
//!
//! These tests use proptest to verify invariants around:
//! - Monotonic downgrading toward the most restrictive fallback
//! - Determinism across repeated runs
//! - Convergence once the chain reaches a fixed point

use crate::engine::decide;
use crate::model::{Client, ClientContext, ClientFamily};
use crate::policy::EffectiveConfig;
use crate::test_support::default_config;
use cspinline_types::InlineScriptMode;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_family() -> impl Strategy<Value = ClientFamily> {
    prop_oneof![
        Just(ClientFamily::Ie),
        Just(ClientFamily::Firefox),
        Just(ClientFamily::Chromium),
        Just(ClientFamily::Webkit),
        Just(ClientFamily::Other),
    ]
}

fn arb_major_version() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![Just(None), (1u32..200).prop_map(Some)]
}

fn arb_initial_mode() -> impl Strategy<Value = InlineScriptMode> {
    prop_oneof![
        Just(InlineScriptMode::Nonce),
        Just(InlineScriptMode::UnsafeInline),
        Just(InlineScriptMode::Unsupported),
    ]
}

fn arb_context() -> impl Strategy<Value = ClientContext> {
    (arb_family(), arb_major_version()).prop_map(|(family, major_version)| {
        ClientContext::with_client(Client {
            family,
            major_version,
            user_agent: "proptest-agent".to_string(),
        })
    })
}

fn config_with_initial(initial_mode: InlineScriptMode) -> EffectiveConfig {
    EffectiveConfig {
        initial_mode,
        ..default_config()
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A context that carries a client never makes the chain fail, and the
    /// output mode is always a declared variant.
    #[test]
    fn decide_is_total_for_contexts_with_clients(
        context in arb_context(),
        initial in arb_initial_mode(),
    ) {
        let decision = decide(&context, &config_with_initial(initial)).unwrap();
        prop_assert!(decision.mode.rank() <= InlineScriptMode::Unsupported.rank());
    }

    /// Rules only ever downgrade: the final rank is at least the initial one.
    #[test]
    fn mode_transitions_are_monotonic(
        context in arb_context(),
        initial in arb_initial_mode(),
    ) {
        let decision = decide(&context, &config_with_initial(initial)).unwrap();
        prop_assert!(decision.mode.rank() >= initial.rank());
    }

    /// Every trace entry records a strict downgrade, in execution order.
    #[test]
    fn trace_entries_record_strict_downgrades(
        context in arb_context(),
        initial in arb_initial_mode(),
    ) {
        let decision = decide(&context, &config_with_initial(initial)).unwrap();
        let mut current = initial;
        for entry in &decision.trace {
            prop_assert_eq!(entry.mode_before, current);
            prop_assert!(entry.mode_after.rank() > entry.mode_before.rank());
            current = entry.mode_after;
        }
        prop_assert_eq!(current, decision.mode);
    }

    /// Two fresh runs over identical input produce identical output.
    #[test]
    fn decide_is_deterministic(
        context in arb_context(),
        initial in arb_initial_mode(),
    ) {
        let cfg = config_with_initial(initial);
        let first = decide(&context, &cfg).unwrap();
        let second = decide(&context, &cfg).unwrap();
        prop_assert_eq!(first.mode, second.mode);
        prop_assert_eq!(first.trace, second.trace);
    }

    /// Re-seeding the chain with its own output reproduces that output: the
    /// decision is a fixed point.
    #[test]
    fn decide_converges(
        context in arb_context(),
        initial in arb_initial_mode(),
    ) {
        let first = decide(&context, &config_with_initial(initial)).unwrap();
        let second = decide(&context, &config_with_initial(first.mode)).unwrap();
        prop_assert_eq!(first.mode, second.mode);
        prop_assert!(second.trace.is_empty());
    }

    /// Any IE-family client ends at the most restrictive fallback, whatever
    /// version it claims and wherever the chain started.
    #[test]
    fn ie_clients_always_end_unsupported(
        major in arb_major_version(),
        initial in arb_initial_mode(),
    ) {
        let context = ClientContext::with_client(Client {
            family: ClientFamily::Ie,
            major_version: major,
            user_agent: "proptest-agent".to_string(),
        });
        let decision = decide(&context, &config_with_initial(initial)).unwrap();
        prop_assert_eq!(decision.mode, InlineScriptMode::Unsupported);
    }

    /// With every rule disabled the chain is the identity on the mode.
    #[test]
    fn empty_policy_keeps_the_candidate_mode(
        context in arb_context(),
        initial in arb_initial_mode(),
    ) {
        let cfg = EffectiveConfig {
            profile: "test".to_string(),
            initial_mode: initial,
            rules: Default::default(),
        };
        let decision = decide(&context, &cfg).unwrap();
        prop_assert_eq!(decision.mode, initial);
        prop_assert!(decision.trace.is_empty());
    }
}
