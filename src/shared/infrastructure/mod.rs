/// Shared infrastructure concerns
///
/// Adapters that implement the ports of more than one module.
pub mod api_client;

// Re-exports for convenience
pub use api_client::OnionApiClient;
