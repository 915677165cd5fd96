pub mod connection;
pub mod database;
pub mod metrics;
pub mod mock;
pub mod store;

pub use connection::connect_store;
pub use database::MongoStore;
pub use metrics::{get_metrics, init_metrics};
pub use mock::MockStore;
pub use store::{RecordStore, UnavailableStore};
