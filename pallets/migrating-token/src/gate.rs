//! Pause gate consulted before self-transfers.

use sp_std::marker::PhantomData;

use crate::{Config, IsPaused};

pub trait AccessGate {
    fn is_paused() -> bool;
}

/// Never paused.
impl AccessGate for () {
    fn is_paused() -> bool {
        false
    }
}

/// Gate backed by this pallet's own `IsPaused` flag, toggled by the `pause` and `unpause` calls.
pub struct PauseSwitch<T>(PhantomData<T>);

impl<T: Config> AccessGate for PauseSwitch<T> {
    fn is_paused() -> bool {
        IsPaused::<T>::get()
    }
}
