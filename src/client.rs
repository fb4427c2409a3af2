//! Typed REST client for the EDI backend.
//!
//! Thin transport layer: no business logic here. Every operation is
//! one-shot with no automatic retry; a failed call surfaces to the caller,
//! who may re-trigger the same built request with its state intact.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::AppConfig;
use crate::dto::{AmendmentPayload, AsnPayload};
use crate::errors::PortalError;
use crate::models::asn::{AsnListResponse, AsnSummary};
use crate::models::purchase_order::{PoListResponse, PurchaseOrderDetails};

/// Widest PO-list date range the backend accepts.
pub const MAX_WINDOW_DAYS: i64 = 45;

/// Days between the chosen start date and today, clamped to the backend's
/// maximum window.
pub fn window_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days().abs().min(MAX_WINDOW_DAYS)
}

/// Collaborator operations the presentation layer drives.
#[async_trait]
pub trait VendorPortalApi: Send + Sync {
    async fn list_purchase_orders(
        &self,
        page_number: u32,
        page_size: u32,
        window_days: i64,
    ) -> Result<PoListResponse, PortalError>;

    async fn get_purchase_order_details(
        &self,
        po_code: &str,
    ) -> Result<Option<PurchaseOrderDetails>, PortalError>;

    async fn create_asn(&self, payload: &AsnPayload) -> Result<(), PortalError>;

    async fn list_asns_for_po(&self, po_code: &str) -> Result<Vec<AsnSummary>, PortalError>;

    async fn cancel_asn(&self, asn_number: &str) -> Result<(), PortalError>;

    async fn amend_purchase_order(
        &self,
        po_code: &str,
        payload: &AmendmentPayload,
    ) -> Result<(), PortalError>;
}

/// Backend responses arrive wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PoDetailsEnvelope {
    #[serde(default)]
    purchase_orders: Vec<PurchaseOrderDetails>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelAsnRequest<'a> {
    asn_number: &'a str,
}

/// `reqwest`-backed implementation of [`VendorPortalApi`].
#[derive(Clone)]
pub struct HttpPortalClient {
    client: Client,
    base_url: Url,
}

impl HttpPortalClient {
    /// Builds a client from configuration, with the configured timeout.
    pub fn new(config: &AppConfig) -> Result<Self, PortalError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            PortalError::Validation(format!("invalid api_base_url {:?}: {}", config.api_base_url, e))
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Builds a client around an existing `reqwest::Client` (useful for
    /// tests).
    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, PortalError> {
        self.base_url
            .join(path)
            .map_err(|e| PortalError::Validation(format!("invalid endpoint path {:?}: {}", path, e)))
    }

    fn check_status(response: &reqwest::Response, operation: &str) -> Result<(), PortalError> {
        let status = response.status();
        if !status.is_success() {
            warn!(%status, operation, "EDI backend returned an error status");
            return Err(PortalError::Api {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VendorPortalApi for HttpPortalClient {
    async fn list_purchase_orders(
        &self,
        page_number: u32,
        page_size: u32,
        window_days: i64,
    ) -> Result<PoListResponse, PortalError> {
        let days = window_days.clamp(0, MAX_WINDOW_DAYS);
        debug!(page_number, page_size, days, "listing purchase orders");
        let response = self
            .client
            .get(self.endpoint("po")?)
            .query(&[
                ("days", days.to_string()),
                ("page_number", page_number.to_string()),
                ("page_size", page_size.to_string()),
            ])
            .send()
            .await?;
        Self::check_status(&response, "list_purchase_orders")?;
        let envelope: ApiEnvelope<PoListResponse> = response.json().await?;
        Ok(envelope.data)
    }

    async fn get_purchase_order_details(
        &self,
        po_code: &str,
    ) -> Result<Option<PurchaseOrderDetails>, PortalError> {
        debug!(po_code, "fetching purchase order details");
        let response = self
            .client
            .get(self.endpoint("po/details")?)
            .query(&[
                ("poCodes", po_code),
                ("includeLineItemDetails", "true"),
            ])
            .send()
            .await?;
        Self::check_status(&response, "get_purchase_order_details")?;
        let envelope: ApiEnvelope<PoDetailsEnvelope> = response.json().await?;
        Ok(envelope.data.purchase_orders.into_iter().next())
    }

    async fn create_asn(&self, payload: &AsnPayload) -> Result<(), PortalError> {
        debug!(
            po_code = %payload.purchase_order_details.purchase_order_number,
            "submitting ASN"
        );
        let response = self
            .client
            .post(self.endpoint("asn")?)
            .json(payload)
            .send()
            .await?;
        Self::check_status(&response, "create_asn")
    }

    async fn list_asns_for_po(&self, po_code: &str) -> Result<Vec<AsnSummary>, PortalError> {
        debug!(po_code, "listing ASNs for purchase order");
        let response = self
            .client
            .get(self.endpoint("asn")?)
            .query(&[("po_number", po_code)])
            .send()
            .await?;
        Self::check_status(&response, "list_asns_for_po")?;
        let envelope: ApiEnvelope<AsnListResponse> = response.json().await?;
        Ok(envelope.data.asns.unwrap_or_default())
    }

    async fn cancel_asn(&self, asn_number: &str) -> Result<(), PortalError> {
        debug!(asn_number, "cancelling ASN");
        let response = self
            .client
            .delete(self.endpoint("asn")?)
            .json(&CancelAsnRequest { asn_number })
            .send()
            .await?;
        Self::check_status(&response, "cancel_asn")
    }

    async fn amend_purchase_order(
        &self,
        po_code: &str,
        payload: &AmendmentPayload,
    ) -> Result<(), PortalError> {
        debug!(po_code, "submitting PO amendment");
        let response = self
            .client
            .post(self.endpoint(&format!("po/{}/amendment", po_code))?)
            .json(payload)
            .send()
            .await?;
        Self::check_status(&response, "amend_purchase_order")
    }
}
