pub mod config;
pub mod error;
pub mod remote;
pub mod repl;
pub mod server;
pub mod store;


pub use error::CalcError;
pub use remote::{HttpResults, ResultsApi};
pub use repl::{Operator, Outcome, Session, Turn};
pub use store::ResultStore;
