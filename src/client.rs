//! Nord Pool client facade.

use chrono::NaiveDate;
use log::{debug, info};
use reqwest::Client;

use crate::config::{ClientConfig, DEFAULT_MARKET};
use crate::currency::Currency;
use crate::error::NordPoolError;
use crate::http::{HttpClient, ReqwestTransport, Transport};
use crate::model::DeliveryPeriodData;

const DAY_AHEAD_PRICES_PATH: &str = "DayAheadPrices";

/// Nord Pool client.
///
/// Cloning is cheap when the transport is; clones share the HTTP session.
#[derive(Clone)]
pub struct NordPoolClient<T: Transport = ReqwestTransport> {
    http: HttpClient<T>,
    config: ClientConfig,
}

impl NordPoolClient<ReqwestTransport> {
    /// Creates a client with its own HTTP session and the default configuration.
    pub fn new() -> Result<Self, NordPoolError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with its own HTTP session.
    pub fn with_config(config: ClientConfig) -> Result<Self, NordPoolError> {
        let client = Client::builder()
            .user_agent(concat!("nordpool/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NordPoolError::Client)?;
        Ok(Self::with_session(client, config))
    }

    /// Creates a client on a caller-owned HTTP session.
    pub fn with_session(client: Client, config: ClientConfig) -> Self {
        let transport = ReqwestTransport::new(client, config.timeout);
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> NordPoolClient<T> {
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        let http = HttpClient::new(transport, config.retry_policy());
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the day-ahead prices for `date` in the given areas.
    pub async fn get_delivery_period<S: AsRef<str>>(
        &self,
        date: NaiveDate,
        currency: Currency,
        areas: &[S],
    ) -> Result<DeliveryPeriodData, NordPoolError> {
        self.get_delivery_period_for_market(date, currency, areas, DEFAULT_MARKET)
            .await
    }

    /// Returns the prices for `date` on a specific market.
    #[tracing::instrument(skip(self, areas))]
    pub async fn get_delivery_period_for_market<S: AsRef<str>>(
        &self,
        date: NaiveDate,
        currency: Currency,
        areas: &[S],
        market: &str,
    ) -> Result<DeliveryPeriodData, NordPoolError> {
        let url = self.config.endpoint(DAY_AHEAD_PRICES_PATH);
        let params = query_params(date, currency, areas, market);

        debug!("Retrieve prices from {} with params {:?}", url, params);

        let raw = self.http.get_json(&url, &params).await?;
        let data = DeliveryPeriodData::from_raw(raw)?;

        info!(
            "Fetched {} entries for {} ({})",
            data.entries.len(),
            data.requested_date,
            data.currency
        );
        Ok(data)
    }

    /// Returns the day-ahead prices for each date, in the order given.
    ///
    /// Dates are fetched one after another. The first failure is returned and the
    /// remaining dates are not requested.
    #[tracing::instrument(skip(self, dates, areas))]
    pub async fn get_delivery_periods<S: AsRef<str>>(
        &self,
        dates: &[NaiveDate],
        currency: Currency,
        areas: &[S],
    ) -> Result<Vec<DeliveryPeriodData>, NordPoolError> {
        let mut periods = Vec::with_capacity(dates.len());
        for date in dates {
            periods.push(self.get_delivery_period(*date, currency, areas).await?);
        }
        Ok(periods)
    }
}

fn query_params<S: AsRef<str>>(
    date: NaiveDate,
    currency: Currency,
    areas: &[S],
    market: &str,
) -> Vec<(String, String)> {
    let areas = areas
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",");

    vec![
        ("date".to_string(), date.format("%Y-%m-%d").to_string()),
        ("market".to_string(), market.to_string()),
        ("deliveryArea".to_string(), areas),
        ("currency".to_string(), currency.as_str().to_string()),
    ]
}
