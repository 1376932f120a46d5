#[cfg(feature = "http-transport")]
pub mod compat;

#[cfg(feature = "provider-groq")]
pub mod groq;

#[cfg(feature = "provider-huggingface")]
pub mod huggingface;

#[cfg(feature = "provider-openrouter")]
pub mod openrouter;

#[cfg(feature = "search-serper")]
pub mod serper;
