//! Response envelope mapping.
//!
//! Every endpoint wraps its payload as `{ success, message?, data }`, and
//! list endpoints nest a Laravel-style page object inside `data`.

use civiport_core::{PortalError, PortalResult};
use civiport_query::PagedResult;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload. A `success: false` envelope (even under a 2xx
    /// status) surfaces the server message verbatim.
    pub fn into_data(self) -> PortalResult<T> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "the server rejected the request".to_string());
            return Err(PortalError::server(None, message));
        }
        self.data
            .ok_or_else(|| PortalError::server(None, "response carried no data"))
    }
}

/// The page object inside a list envelope's `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl<T> From<PageEnvelope<T>> for PagedResult<T> {
    fn from(page: PageEnvelope<T>) -> Self {
        PagedResult {
            items: page.data,
            current_page: page.current_page.max(1),
            total_pages: page.last_page.max(1),
            total_items: page.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_envelope_surfaces_the_server_message() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Email already taken"}"#).unwrap();
        let err = envelope.into_data().unwrap_err();
        assert_eq!(
            err,
            PortalError::server(None, "Email already taken")
        );
    }

    #[test]
    fn page_envelope_maps_to_paged_result() {
        let envelope: ApiEnvelope<PageEnvelope<String>> = serde_json::from_str(
            r#"{"success":true,"data":{"data":["a","b"],"current_page":2,"last_page":7,"total":66}}"#,
        )
        .unwrap();
        let page: PagedResult<String> = envelope.into_data().unwrap().into();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.total_items, 66);
    }

    #[test]
    fn degenerate_page_counts_clamp_to_one() {
        let page: PagedResult<u8> = PageEnvelope {
            data: vec![],
            current_page: 0,
            last_page: 0,
            total: 0,
        }
        .into();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
