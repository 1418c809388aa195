//! Integration vendors.

use crate::models::Vendor;
use crate::{PagerDutyClient, Result};
use pagerduty_core::Request;

impl PagerDutyClient {
    /// List vendors.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn vendors(&self) -> Result<Vec<Vendor>> {
        self.connection()
            .request_envelope(Request::get("/vendors"), "vendors")
            .await
    }

    /// Fetch a vendor.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn vendor(&self, id: &str) -> Result<Vendor> {
        self.connection()
            .request_envelope(Request::get(format!("/vendors/{id}")), "vendor")
            .await
    }
}
