//! Round resolution engine
//!
//! Applies one player action at a time to a [`RoundState`](crate::core::RoundState)
//! and reports what happened as a [`RoundEvent`]. No I/O happens here; the only
//! non-determinism is the injected [`HintPicker`].

mod action;
mod event;
mod hint;
mod round;

pub use action::PlayerAction;
pub use event::{RejectReason, RoundEvent};
pub use hint::{FirstHiddenPicker, HintPicker, RandomPicker};
pub use round::RoundEngine;
