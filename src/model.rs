//! Delivery period records and their mapping from the API payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::NordPoolError;
use crate::time::parse_datetime;

/// Day-ahead prices response (internal).
mod api {
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct DayAheadPrices {
        #[serde(rename = "deliveryDateCET")]
        pub delivery_date_cet: String,
        pub updated_at: String,
        pub currency: String,
        pub exchange_rate: f64,
        pub multi_area_entries: Vec<MultiAreaEntry>,
        pub block_price_aggregates: Vec<BlockPriceAggregate>,
        pub area_averages: Vec<AreaAverage>,
    }

    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct MultiAreaEntry {
        pub delivery_start: String,
        pub delivery_end: String,
        pub entry_per_area: BTreeMap<String, f64>,
    }

    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct BlockPriceAggregate {
        pub block_name: String,
        pub delivery_start: String,
        pub delivery_end: String,
        pub average_price_per_area: BTreeMap<String, BTreeMap<String, f64>>,
    }

    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct AreaAverage {
        pub area_code: String,
        pub price: f64,
    }
}

/// Price per area for one delivery interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryPeriodEntry {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub entry: BTreeMap<String, f64>,
}

/// Named multi-hour aggregate (e.g. "Peak"), keyed by area then aggregate name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryPeriodBlockPrices {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub average: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Everything reported for one delivery date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryPeriodData {
    /// Decoded response as received
    #[serde(skip_serializing)]
    pub raw: Value,
    pub requested_date: String,
    pub updated_at: DateTime<Utc>,
    /// In server order
    pub entries: Vec<DeliveryPeriodEntry>,
    /// In server order
    pub block_prices: Vec<DeliveryPeriodBlockPrices>,
    pub currency: String,
    pub exchange_rate: f64,
    pub area_average: BTreeMap<String, f64>,
}

impl DeliveryPeriodData {
    /// Maps a decoded `DayAheadPrices` response.
    pub fn from_raw(raw: Value) -> Result<Self, NordPoolError> {
        let prices = api::DayAheadPrices::deserialize(&raw).map_err(|e| {
            NordPoolError::Decode(format!("unexpected day-ahead prices payload: {}", e))
        })?;

        let entries = prices
            .multi_area_entries
            .into_iter()
            .map(|entry| {
                Ok(DeliveryPeriodEntry {
                    start: parse_datetime(&entry.delivery_start)?,
                    end: parse_datetime(&entry.delivery_end)?,
                    entry: entry.entry_per_area,
                })
            })
            .collect::<Result<Vec<_>, NordPoolError>>()?;

        let block_prices = prices
            .block_price_aggregates
            .into_iter()
            .map(|block| {
                Ok(DeliveryPeriodBlockPrices {
                    name: block.block_name,
                    start: parse_datetime(&block.delivery_start)?,
                    end: parse_datetime(&block.delivery_end)?,
                    average: block.average_price_per_area,
                })
            })
            .collect::<Result<Vec<_>, NordPoolError>>()?;

        // Last duplicate wins
        let mut area_average = BTreeMap::new();
        for average in prices.area_averages {
            area_average.insert(average.area_code, average.price);
        }

        Ok(Self {
            updated_at: parse_datetime(&prices.updated_at)?,
            requested_date: prices.delivery_date_cet,
            entries,
            block_prices,
            currency: prices.currency,
            exchange_rate: prices.exchange_rate,
            area_average,
            raw,
        })
    }
}
