//! Client for the Nord Pool day-ahead electricity price API.

pub mod area;
pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod http;
pub mod model;
pub mod time;

pub use area::{AREAS, area_name};
pub use client::NordPoolClient;
pub use config::ClientConfig;
pub use currency::Currency;
pub use error::NordPoolError;
pub use model::{DeliveryPeriodBlockPrices, DeliveryPeriodData, DeliveryPeriodEntry};
