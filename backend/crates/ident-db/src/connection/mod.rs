pub mod pool;
pub mod transaction_manager;
pub mod tx_scope;
