pub mod twelvelabs_client;

pub use twelvelabs_client::TwelveLabsVideoClient;
