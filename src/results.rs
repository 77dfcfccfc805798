mod result_set;
mod row;

pub use result_set::{ResultInfo, ResultSet};
pub use row::Row;
