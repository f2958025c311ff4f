mod executor;
mod statement;

pub use executor::QueryExecutor;
pub use statement::Executable;
