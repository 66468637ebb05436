//! ドメイン型（型と不変条件）

pub mod field;
pub mod item_id;
pub mod record;
pub mod slot;

pub use field::{join, FieldValue, Scalar, CONNECTOR};
pub use item_id::ItemId;
pub use record::ComparisonRecord;
pub use slot::{Slot, SlotPairState, SlotState};
