pub mod connection;
pub mod error;
pub mod repositories;
pub mod transactions;
pub mod user_store;

pub use connection::pool::{PoolSettings, connect, run_migrations};
pub use connection::transaction_manager::TransactionManager;
pub use connection::tx_scope::TxScope;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use transactions::{Transactions, TxHandle, TxOutcome};
pub use user_store::UserStore;
