//! Property tests for the page state transitions.
//!
//! 1. N toggles land on English for even N, Hindi for odd N
//! 2. advance/retreat are inverses
//! 3. N advances over N slides return to the start
//! 4. Arbitrary operation sequences keep the index in range
//! 5. Toggling never moves the carousel

use proptest::prelude::*;
use ui::catalog::SLIDE_COUNT;
use ui::core::carousel::Carousel;
use ui::core::language::Language;
use ui::core::state::MarketplaceState;

#[derive(Debug, Clone)]
enum Op {
    Toggle,
    Next,
    Prev,
    Select(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Toggle),
        Just(Op::Next),
        Just(Op::Prev),
        (0usize..SLIDE_COUNT + 2).prop_map(Op::Select),
    ]
}

fn apply(state: &mut MarketplaceState, op: &Op) {
    match op {
        Op::Toggle => state.toggle_language(),
        Op::Next => state.next_slide(),
        Op::Prev => state.prev_slide(),
        Op::Select(index) => {
            let _ = state.select_slide(*index);
        }
    }
}

/// A carousel of `len` slides parked on `start`.
fn carousel_at(len: usize, start: usize) -> Carousel {
    let mut carousel = Carousel::new(len);
    carousel.select(start % len).unwrap();
    carousel
}

proptest! {
    #[test]
    fn toggle_parity(n in 0usize..64) {
        let mut lang = Language::default();
        for _ in 0..n {
            lang.toggle();
        }
        let expected = if n % 2 == 0 { Language::English } else { Language::Hindi };
        prop_assert_eq!(lang, expected);
    }

    #[test]
    fn advance_then_retreat_is_identity(len in 1usize..32, start in 0usize..32) {
        let mut carousel = carousel_at(len, start);
        let before = carousel.index();
        carousel.advance();
        carousel.retreat();
        prop_assert_eq!(carousel.index(), before);
        carousel.retreat();
        carousel.advance();
        prop_assert_eq!(carousel.index(), before);
    }

    #[test]
    fn full_cycle_returns_home(len in 1usize..32, start in 0usize..32) {
        let mut carousel = carousel_at(len, start);
        let before = carousel.index();
        for _ in 0..len {
            carousel.advance();
        }
        prop_assert_eq!(carousel.index(), before);
    }

    #[test]
    fn index_stays_in_range(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut state = MarketplaceState::default();
        for op in &ops {
            apply(&mut state, op);
            prop_assert!(state.carousel.index() < SLIDE_COUNT);
            let view = state.view();
            prop_assert_eq!(view.slides.iter().filter(|s| s.active).count(), 1);
        }
    }

    #[test]
    fn toggle_keeps_slide(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut state = MarketplaceState::default();
        for op in &ops {
            apply(&mut state, op);
        }
        let slide = state.carousel.index();
        state.toggle_language();
        prop_assert_eq!(state.carousel.index(), slide);
    }
}
