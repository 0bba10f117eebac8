//! Inventory data model shared by every engine.
//!
//! - [`Item`]: an inventory record with searchable text fields, numeric
//!   fields, and a [`Location`].
//! - [`ItemField`]: enum-keyed field selector used by sorting and search
//!   in place of runtime property lookup.
//! - [`SpaceUnit`]: a capacity-bounded storage slot, mutated in place by
//!   the space allocator.
//!
//! Items and locations are owned by the caller. Engines borrow them and
//! never persist anything.

mod field;
mod item;
mod location;
mod space;

pub use field::{FieldValue, ItemField, SortKey};
pub use item::Item;
pub use location::Location;
pub use space::SpaceUnit;
