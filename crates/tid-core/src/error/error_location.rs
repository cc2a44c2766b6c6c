pub use error_location::ErrorLocation;
