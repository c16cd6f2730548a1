mod dto;
mod http_profile_client;

pub use http_profile_client::HttpProfileClient;
