// Query Operators Module
//
// The building blocks of SELECT execution. Each operator works on a fully
// materialized table or row sequence.

pub mod filter;
pub mod limit;
pub mod project;
pub mod sort;

pub use self::filter::evaluate;
pub use self::limit::paginate;
pub use self::project::project;
pub use self::sort::sort_records;
