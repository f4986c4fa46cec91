//! State-inference engine for an observed 2D rendering loop.
//!
//! The host renderer exposes no state API, so this crate reconstructs game
//! state (camera, player position, minimap geometry) by classifying the
//! primitive drawing calls the host issues each animation frame. The host
//! feeds every intercepted call into [`engine::Engine::observe`]; inferred
//! state flows back out through an event bus and a set of coordinate
//! transforms. Inference is best-effort by design: a frame whose call
//! sequence is not recognized simply leaves the prior frame's state in place.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] tying classification, compositing, and events together |
//! | [`classify`] | The drawing-call classifier and its per-frame state machine |
//! | [`signature`] | Pluggable shape signatures and their recalibratable constants |
//! | [`state`] | Inferred engine state: camera, player, mouse, frame flags |
//! | [`camera`] | World / screen / minimap coordinate transforms |
//! | [`minimap`] | Minimap geometry derived from the canvas size |
//! | [`calls`] | The observed drawing-call model (`DrawOp`, `Paint`, `Rect`) |
//! | [`surface`] | The `Surface` seam to the host's drawing targets |
//! | [`compositor`] | Three-layer compositing around the minimap region |
//! | [`bus`] | Named-topic publish/subscribe with ordered listeners |
//! | [`hook`] | Call-interception combinators for extension authors |
//! | [`input`] | Input suppression gate (persistent / one-shot per channel) |
//! | [`error`] | Public-boundary validation errors |
//! | [`consts`] | Empirical constants calibrated against the host renderer |

pub mod bus;
pub mod calls;
pub mod camera;
pub mod classify;
pub mod compositor;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hook;
pub mod input;
pub mod minimap;
pub mod signature;
pub mod state;
pub mod surface;
