pub mod db;
pub mod health;

pub use db::{Database, QueryExecutor, Row, RowSet};
