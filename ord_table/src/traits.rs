#[cfg(feature = "serde_support")]
pub mod serde;
