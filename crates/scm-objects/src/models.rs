//! Objects namespace models and operation inputs.

use scm_core::choice::Container;
use scm_core::query::QueryParams;
use scm_core::{HttpMethod, ListQuery, ListResponse, Operation};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

scm_core::resource_id!(AddressId, "Unique identifier of an address object.");

scm_core::one_of! {
    /// The value an address object resolves to.
    pub enum AddressValue {
        /// IPv4 or IPv6 address with optional prefix length, e.g. `10.0.0.0/24`.
        IpNetmask(String) = "ip_netmask",
        /// Inclusive range, e.g. `10.0.0.1-10.0.0.9`.
        IpRange(String) = "ip_range",
        /// Address and wildcard mask, e.g. `10.20.1.0/0.0.248.255`.
        IpWildcard(String) = "ip_wildcard",
        /// Fully qualified domain name.
        Fqdn(String) = "fqdn",
    }
}

/// Address object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AddressId>,
    /// Object name, unique within its container.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags attached to the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<String>>,
    /// Address value.
    #[serde(flatten)]
    pub value: AddressValue,
    /// Folder, snippet or device holding the object.
    #[serde(flatten)]
    pub container: Container,
}

impl Address {
    /// Create an address with no description or tags.
    pub fn new(name: impl Into<String>, value: AddressValue, container: Container) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            tag: None,
            value,
            container,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Device placed in quarantine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuarantinedDevice {
    /// Host id of the device.
    pub host_id: String,
    /// Serial number of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Query parameters for listing quarantined devices.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuarantinedDeviceListParams {
    /// Filter by host id.
    pub host_id: Option<String>,
    /// Filter by serial number.
    pub serial_number: Option<String>,
}

impl QuarantinedDeviceListParams {
    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("host_id", self.host_id.as_deref())
            .with_opt("serial_number", self.serial_number.as_deref())
    }
}

scm_core::collection_operations! {
    resource: Address, id: AddressId, path: "/addresses", query: ListQuery;
    list ListAddresses;
    create CreateAddress;
    get GetAddress;
    update UpdateAddress;
    delete DeleteAddress;
}

/// `GET /quarantined-devices`
#[derive(Debug, Clone, Copy)]
pub struct ListQuarantinedDevices<'a> {
    /// List filters.
    pub params: &'a QuarantinedDeviceListParams,
}

impl Operation for ListQuarantinedDevices<'_> {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/quarantined-devices";
    type Body = ();
    type Output = ListResponse<QuarantinedDevice>;

    fn query(&self) -> QueryParams {
        self.params.to_params()
    }
}

/// `POST /quarantined-devices`
#[derive(Debug, Clone, Copy)]
pub struct CreateQuarantinedDevice<'a> {
    /// Device to quarantine.
    pub device: &'a QuarantinedDevice,
}

impl Operation for CreateQuarantinedDevice<'_> {
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/quarantined-devices";
    type Body = QuarantinedDevice;
    type Output = QuarantinedDevice;

    fn body(&self) -> Option<&QuarantinedDevice> {
        Some(self.device)
    }
}

/// `DELETE /quarantined-devices?host_id=...`
#[derive(Debug, Clone, Copy)]
pub struct DeleteQuarantinedDevice<'a> {
    /// Host id of the device to release.
    pub host_id: &'a str,
}

impl Operation for DeleteQuarantinedDevice<'_> {
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/quarantined-devices";
    type Body = ();
    type Output = IgnoredAny;

    fn query(&self) -> QueryParams {
        QueryParams::new().with("host_id", self.host_id)
    }
}
