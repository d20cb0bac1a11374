/// Network adapters for remote repositories
mod http_index_client;

pub use http_index_client::HttpIndexClient;
