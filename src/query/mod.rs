//! Query operator library.
//!
//! Selection, projection, ordering, joining, grouping, quantifiers and
//! reductions as standalone functions over iterators. Operators are pure:
//! evaluating the same pipeline twice over the same input yields the same
//! elements in the same order.

mod error;
mod group;
mod operators;

pub use error::{QueryError, QueryResult};
pub use group::{group_by, group_by_aggregate, try_group_by_aggregate, Groups};
pub use operators::{
    aggregate, all, any, average, contains, count, distinct, filter, first_match, fold, join, max,
    min, order_by, project, project_many, reverse, single_match, skip_while, sum, take_while,
    Direction,
};
