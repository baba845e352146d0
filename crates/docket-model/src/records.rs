use serde::{Deserialize, Serialize};

/// Primary identifier record for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPid {
    /// Classification tag.
    #[serde(rename = "itemtype")]
    pub item_type: String,
    /// Human-readable name of the identifier.
    #[serde(rename = "pidname")]
    pub pid_name: String,
    /// Canonical unique identifier; used as the ledger key.
    pub puuid: String,
    /// Lifecycle status (free-form).
    #[serde(rename = "pidstatus")]
    pub pid_status: String,
}

/// Secondary identifiers attached to an item.
///
/// Dates are opaque strings; nothing here parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSids {
    /// Label of the secondary identifier.
    #[serde(rename = "sidname")]
    pub sid_name: String,
    /// Secondary identifier value.
    pub sid: String,
    /// Date the identifier was included.
    #[serde(rename = "siddateincluded")]
    pub sid_date_included: String,
    /// Start of the validity window.
    #[serde(rename = "sidvalidfrom")]
    pub sid_valid_from: String,
    /// End of the validity window.
    #[serde(rename = "sidvalidtill")]
    pub sid_valid_till: String,
    /// How the identifier was validated.
    #[serde(rename = "sidvalidationtype")]
    pub sid_validation_type: String,
    /// Who authorised the identifier.
    #[serde(rename = "sidauthorisedby")]
    pub sid_authorised_by: String,
}

/// Record of who accessed, or was granted access to, an item and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocketAccess {
    /// Subject identifier.
    #[serde(rename = "daidaccessed")]
    pub da_id_accessed: String,
    /// Accessor identifier.
    #[serde(rename = "dareceiver")]
    pub da_receiver: String,
    /// When access was requested.
    #[serde(rename = "dadateapplied")]
    pub da_date_applied: String,
    /// When access was approved.
    #[serde(rename = "dadateauthorised")]
    pub da_date_authorised: String,
    /// Start of the access window.
    #[serde(rename = "davalidfrom")]
    pub da_valid_from: String,
    /// End of the access window.
    #[serde(rename = "davalidtill")]
    pub da_valid_till: String,
}

/// Aggregate persisted per item.
///
/// The three blocks are embedded by value and have no lifecycle of their own.
/// A Docket is stored under the key `item_pid.puuid`; nothing in this crate
/// enforces that pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Docket {
    /// Primary identifier block.
    #[serde(rename = "itempid")]
    pub item_pid: ItemPid,
    /// Secondary identifier block.
    #[serde(rename = "itemsids")]
    pub item_sids: ItemSids,
    /// Access block.
    #[serde(rename = "docketaccess")]
    pub docket_access: DocketAccess,
}

impl Docket {
    /// Returns the identifier this Docket is expected to be stored under.
    pub fn puuid(&self) -> &str {
        &self.item_pid.puuid
    }

    /// Encodes the Docket as JSON bytes.
    ///
    /// Field order is fixed by the struct layout, so encoding a decoded value
    /// reproduces the same bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decodes a Docket from JSON bytes. Absent fields decode as empty strings.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> Docket {
        Docket {
            item_pid: ItemPid {
                item_type: "property".to_string(),
                pid_name: "Deed 17".to_string(),
                puuid: "item-001".to_string(),
                pid_status: "active".to_string(),
            },
            item_sids: ItemSids {
                sid_name: "land-registry".to_string(),
                sid: "LR-99".to_string(),
                sid_valid_till: "2030-01-01".to_string(),
                ..ItemSids::default()
            },
            docket_access: DocketAccess {
                da_receiver: "bank:home-loans".to_string(),
                ..DocketAccess::default()
            },
        }
    }

    #[test]
    fn encode_uses_lowercase_keys() {
        let value: Value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["itempid"]["puuid"], "item-001");
        assert_eq!(value["itempid"]["pidstatus"], "active");
        assert_eq!(value["itemsids"]["sidvalidtill"], "2030-01-01");
        assert_eq!(value["docketaccess"]["dareceiver"], "bank:home-loans");
    }

    #[test]
    fn unset_fields_are_serialized_as_empty_strings() {
        let value: Value = serde_json::to_value(Docket::default()).unwrap();
        let access = value["docketaccess"].as_object().unwrap();
        assert_eq!(access.len(), 6);
        assert!(access.values().all(|v| v == ""));
        assert_eq!(value["itemsids"].as_object().unwrap().len(), 7);
        assert_eq!(value["itempid"].as_object().unwrap().len(), 4);
    }

    #[test]
    fn encoding_is_stable_across_decode() {
        let first = sample().to_bytes().unwrap();
        let second = Docket::from_slice(&first).unwrap().to_bytes().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let docket = Docket::from_slice(br#"{"itempid":{"puuid":"item-002"}}"#).unwrap();
        assert_eq!(docket.puuid(), "item-002");
        assert_eq!(docket.item_pid.pid_status, "");
        assert_eq!(docket.item_sids, ItemSids::default());
    }
}
