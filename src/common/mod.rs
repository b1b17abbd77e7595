// Common Types
//
// Types shared by the storage, catalog and query layers.

pub mod types;
pub mod value;

pub use self::types::RecordId;
pub use self::value::DataValue;
