//! Helpers for strings, byte buffers, enums, serializable values and errors.

pub mod bytes;
pub mod enums;
pub mod object;
pub mod report;
pub mod string;

pub use bytes::BytesExt;
pub use enums::EnumDescription;
pub use object::{DeepClone, deep_clone, try_deep_clone};
pub use report::{ErrorReport, report_all};
pub use string::{Comparison, OptionalStrExt, StrExt, StringBufExt};
