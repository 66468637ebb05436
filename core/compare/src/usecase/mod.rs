//! ユースケース（アダプター経由で I/O を行う）

pub mod session;

pub use session::{CompareDeps, ComparisonSession};
