//! Add-ons embedded in the PagerDuty web UI.

use crate::models::{Addon, AddonType};
use crate::{PagerDutyClient, Result};
use pagerduty_core::query::QueryParams;
use pagerduty_core::Request;
use serde::Serialize;

/// Filters for [`PagerDutyClient::addons`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonListParams {
    /// Embed the services each add-on is attached to (`include[]=services`).
    pub include_services: bool,
    /// Only add-ons attached to these services, one `service_ids[]` per ID.
    pub service_ids: Vec<String>,
    /// Only add-ons of this type.
    pub filter: Option<AddonType>,
}

impl AddonListParams {
    /// Convert the filters to query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.include_services {
            params.push("include[]", "services");
        }
        params.push_each("service_ids[]", &self.service_ids);
        params.push_opt("filter", self.filter);
        params
    }
}

/// Payload for [`PagerDutyClient::install_addon`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewAddon {
    /// Add-on type.
    #[serde(rename = "type")]
    pub kind: AddonType,
    /// Display name.
    pub name: String,
    /// HTTPS source URL.
    pub src: String,
}

impl NewAddon {
    /// Create an install request.
    #[must_use]
    pub fn new(kind: AddonType, name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            src: src.into(),
        }
    }
}

/// Changes for [`PagerDutyClient::update_addon`]. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AddonUpdate {
    /// New type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AddonType>,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[derive(Serialize)]
struct AddonBody<'a, T> {
    addon: &'a T,
}

impl PagerDutyClient {
    /// List installed add-ons.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn addons(&self, params: &AddonListParams) -> Result<Vec<Addon>> {
        let request = Request::get("/addons").query(params.to_query());
        self.connection().request_envelope(request, "addons").await
    }

    /// Fetch an add-on.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn addon(&self, id: &str) -> Result<Addon> {
        self.connection()
            .request_envelope(Request::get(format!("/addons/{id}")), "addon")
            .await
    }

    /// Install an add-on.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn install_addon(&self, addon: &NewAddon) -> Result<Addon> {
        let request = Request::post("/addons").json(&AddonBody { addon })?;
        self.connection().request_envelope(request, "addon").await
    }

    /// Update an add-on.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn update_addon(&self, id: &str, update: &AddonUpdate) -> Result<Addon> {
        let request = Request::put(format!("/addons/{id}")).json(&AddonBody { addon: update })?;
        self.connection().request_envelope(request, "addon").await
    }

    /// Remove an add-on. `true` on `204`, `false` on `404`.
    ///
    /// # Errors
    ///
    /// Returns every request error except `404`.
    pub async fn delete_addon(&self, id: &str) -> Result<bool> {
        self.connection()
            .boolean_from_response(Request::delete(format!("/addons/{id}")))
            .await
    }
}
