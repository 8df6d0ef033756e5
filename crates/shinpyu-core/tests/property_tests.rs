//! Property-based tests for BookNavigator
//!
//! Uses proptest to check the navigator invariants under arbitrary input
//! sequences.

use proptest::prelude::*;
use shinpyu_core::{BookNavigator, Direction, TOTAL_LEAVES, TOTAL_SIDES};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Inputs that can reach the navigator
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Prev,
    Click(usize),
    GoTo(usize),
    Release,
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::Next),
            2 => Just(NavOp::Prev),
            2 => (0..TOTAL_LEAVES + 2).prop_map(NavOp::Click),
            1 => (0..TOTAL_LEAVES * 2).prop_map(NavOp::GoTo),
            3 => Just(NavOp::Release),
        ],
        0..max_ops,
    )
}

fn apply(nav: &mut BookNavigator, op: &NavOp) -> bool {
    let flip = match op {
        NavOp::Next => nav.next(),
        NavOp::Prev => nav.prev(),
        NavOp::Click(leaf) => nav.leaf_clicked(*leaf),
        NavOp::GoTo(target) => nav.go_to(*target),
        NavOp::Release => {
            nav.release();
            None
        }
    };
    flip.is_some()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The page index never leaves 0..=TOTAL_LEAVES
    #[test]
    fn current_stays_in_bounds(ops in nav_ops_strategy(100)) {
        let mut nav = BookNavigator::new();
        for op in &ops {
            apply(&mut nav, op);
            prop_assert!(nav.current() <= TOTAL_LEAVES);
        }
    }

    /// While the lock is held nothing moves the page index
    #[test]
    fn locked_navigator_ignores_input(ops in nav_ops_strategy(50)) {
        let mut nav = BookNavigator::new();
        nav.next();
        let locked_at = nav.current();
        for op in ops.iter().filter(|op| !matches!(op, NavOp::Release)) {
            prop_assert!(!apply(&mut nav, op));
            prop_assert_eq!(nav.current(), locked_at);
        }
    }

    /// Every accepted transition takes the lock
    #[test]
    fn accepted_transition_locks(ops in nav_ops_strategy(100)) {
        let mut nav = BookNavigator::new();
        for op in &ops {
            if apply(&mut nav, op) {
                prop_assert!(nav.is_flipping());
            }
        }
    }

    /// Indicator and button state agree with the page index
    #[test]
    fn affordances_match_index(ops in nav_ops_strategy(100)) {
        let mut nav = BookNavigator::new();
        for op in &ops {
            apply(&mut nav, op);
        }
        prop_assert_eq!(nav.prev_disabled(), nav.current() == 0);
        prop_assert_eq!(nav.next_disabled(), nav.current() == TOTAL_LEAVES);

        let expected = format!("{} / {}", (nav.current() * 2 + 1).min(TOTAL_SIDES), TOTAL_SIDES);
        prop_assert_eq!(nav.indicator(), expected);
    }

    /// Turned leaves are exactly those below the index and keep z-order 1..=current
    #[test]
    fn flipped_leaves_stack_in_order(ops in nav_ops_strategy(100)) {
        let mut nav = BookNavigator::new();
        for op in &ops {
            apply(&mut nav, op);
        }
        for leaf in 0..TOTAL_LEAVES {
            prop_assert_eq!(nav.is_flipped(leaf), leaf < nav.current());
            let z = nav.z_index(leaf);
            prop_assert!((1..=TOTAL_LEAVES).contains(&z));
        }
    }

    /// A released forward step followed by a backward step returns to the start
    #[test]
    fn forward_then_back_is_identity(start in 0..TOTAL_LEAVES) {
        let mut nav = BookNavigator::new();
        nav.go_to(start);
        nav.release();

        prop_assert!(nav.step(Direction::Forward).is_some());
        nav.release();
        prop_assert!(nav.step(Direction::Backward).is_some());
        prop_assert_eq!(nav.current(), start);
    }
}
