//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `notifications`, `chat`) so individual
//! components can depend on small focused models. All update logic is pure
//! and unit-tested headlessly; components hold these structs in `RwSignal`
//! contexts and re-render from them.

pub mod cart;
pub mod chat;
pub mod notifications;
