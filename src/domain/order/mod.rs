// ============================================================================
// Order Domain - the order placement transaction
// ============================================================================
//
// An order is a header row plus a batch of line-item rows, created together
// or not at all. The module validates the candidate order, checks that every
// referenced product exists, and persists the whole thing in one database
// transaction.
//
// ============================================================================

pub mod errors;
pub mod placement;
pub mod value_objects;

pub use errors::*;
pub use placement::*;
pub use value_objects::*;
