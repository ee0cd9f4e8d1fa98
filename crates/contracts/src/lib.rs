//! Shared data contracts of the catalogue Mini App.
//!
//! Nothing here touches the browser: the types are usable from the wasm
//! frontend as well as from anything that consumes the messages it emits.

pub mod domain;
