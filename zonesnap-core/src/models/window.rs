//! Backend-agnostic window identity.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which host-specific window identifiers need to implement. The
/// core never dereferences a handle; it only stores it and passes it back
/// through [`crate::DisplayAction`].
pub trait Handle:
    Serialize
    + DeserializeOwned
    + Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + Hash
    + Default
    + Send
    + 'static
{
}

/// A typed handle to a window used to identify it across the host boundary.
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour
/// with the compiler, so as suggested by [this `serde` issue][serde-issue],
/// just adding `#[serde(bound = "")]` everywhere the generic is declared
/// fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}
