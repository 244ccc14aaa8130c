//! Service type enumeration.

use serde_json::Value;

use crate::planning_center::types::ServiceType;
use crate::planning_center::PcoTransport;

/// List the IDs of all configured service types, in source order.
///
/// Degrades to an empty list on transport failure or a malformed response;
/// this lookup never fails loudly because the resolver scan treats an empty
/// list the same as "nothing matched".
pub async fn list_service_type_ids(transport: &dyn PcoTransport) -> Vec<String> {
    let json = match transport.fetch_json("/service_types", &[]).await {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to list service types: {}", e);
            return Vec::new();
        }
    };

    parse_ids(&json)
}

fn parse_ids(json: &Value) -> Vec<String> {
    let Some(data) = json["data"].as_array() else {
        tracing::warn!("Missing 'data' array in service types response");
        return Vec::new();
    };

    data.iter()
        .filter_map(ServiceType::from_value)
        .map(|st| st.id)
        .collect()
}
