mod config;
pub use config::DiscoverConfig;

mod errors;
pub use errors::DiscoverError;

mod query;
pub use query::{query_id, query_url};

mod apps;
pub use apps::{discover, fetch_apps, peers};
