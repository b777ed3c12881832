//! Kani proof harnesses for the reconstruction property.

#[cfg(kani)]
mod proofs {
    use crate::{
        Answer, GameState, GameStateInvariants, InvariantSet, RangeBound, StageController,
    };

    /// Driving the controller with the answers for `secret` reveals `secret`.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_reconstruction() {
        let bits: u32 = kani::any();
        kani::assume(bits >= 1 && bits <= 6);
        let secret: u64 = kani::any();
        kani::assume(secret < (1u64 << bits));

        let bound = RangeBound::new(bits).unwrap();
        let mut controller = StageController::new(bound);
        controller.start().unwrap();
        for stage in 1..=bits {
            controller.answer(Answer::for_secret(secret, stage)).unwrap();
        }

        assert_eq!(controller.state().reconstructed(), Some(secret));
    }

    /// Every state reachable from a welcome state satisfies the invariant set.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_invariants_along_play() {
        let bits: u32 = kani::any();
        kani::assume(bits >= 1 && bits <= 6);

        let mut state = GameState::new(RangeBound::new(bits).unwrap());
        state = crate::dispatch(state, crate::Trigger::Start).unwrap();
        for _ in 0..bits {
            let yes: bool = kani::any();
            state = crate::dispatch(state, Answer::from(yes).into()).unwrap();
            assert!(GameStateInvariants::check_all(&state).is_ok());
        }
    }
}
