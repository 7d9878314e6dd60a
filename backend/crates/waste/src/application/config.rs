//! Application Configuration
//!
//! Configuration for the waste tracking application layer. Passed into each
//! use case constructor as part of the explicit dependency bundle - there is
//! no process-wide application handle.

/// Waste application configuration
#[derive(Debug, Clone, Default)]
pub struct WasteConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl WasteConfig {
    /// Config with a pepper
    pub fn with_pepper(pepper: Vec<u8>) -> Self {
        Self {
            password_pepper: Some(pepper),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
