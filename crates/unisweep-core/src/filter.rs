// ── Extraneous-client filter ──
//
// A known client is extraneous when the controller knows nothing about it
// beyond its MAC: no hostname, no alias, no reservation, and no traffic.

use std::num::FpCategory;

use serde_json::Value;
use tracing::info;

use crate::model::ClientRecord;

/// A missing counter counts as no traffic, as does a numeric zero in any
/// encoding (`0`, `0.0`). A `null`, string or other value does not.
fn no_traffic(counter: Option<&Value>) -> bool {
    match counter {
        None => true,
        Some(value) => value
            .as_f64()
            .is_some_and(|bytes| bytes.classify() == FpCategory::Zero),
    }
}

impl ClientRecord {
    /// `true` if this record has a MAC and nothing else worth keeping.
    ///
    /// A present `hostname`/`name`/`fixed_ip` keeps the record whatever its
    /// value, `null` and `""` included.
    pub fn is_extraneous(&self) -> bool {
        self.mac.is_some()
            && self.hostname.is_none()
            && self.name.is_none()
            && self.fixed_ip.is_none()
            && no_traffic(self.tx_bytes.as_ref())
            && no_traffic(self.rx_bytes.as_ref())
    }
}

/// MAC addresses of the extraneous records, in input order.
///
/// MACs are returned exactly as the controller reported them.
pub fn extraneous_macs(records: &[ClientRecord]) -> Vec<String> {
    info!("Found {} MACs", records.len());

    let macs: Vec<String> = records
        .iter()
        .filter(|record| record.is_extraneous())
        .filter_map(|record| record.mac.clone())
        .collect();

    info!("Found {} extraneous MACs", macs.len());
    macs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use unisweep_api::LegacyUser;

    use super::*;

    fn records(value: serde_json::Value) -> Vec<ClientRecord> {
        let users: Vec<LegacyUser> = serde_json::from_value(value).expect("valid client records");
        users.into_iter().map(ClientRecord::from).collect()
    }

    #[test]
    fn mixed_input_keeps_bare_and_zero_traffic_entries() {
        let input = records(json!([
            { "mac": "AA" },
            { "mac": "BB", "hostname": "h" },
            { "mac": "CC", "tx_bytes": 0, "rx_bytes": 0 }
        ]));

        assert_eq!(extraneous_macs(&input), vec!["AA", "CC"]);
    }

    #[test]
    fn any_identity_field_excludes_the_record() {
        let input = records(json!([
            { "mac": "01", "hostname": "printer" },
            { "mac": "02", "name": "Living room TV" },
            { "mac": "03", "fixed_ip": "192.168.1.20" },
            { "mac": "04", "hostname": "" }
        ]));

        assert!(extraneous_macs(&input).is_empty());
    }

    #[test]
    fn any_traffic_excludes_the_record() {
        let input = records(json!([
            { "mac": "01", "tx_bytes": 1 },
            { "mac": "02", "rx_bytes": 4096 },
            { "mac": "03", "tx_bytes": 0, "rx_bytes": 7 }
        ]));

        assert!(extraneous_macs(&input).is_empty());
    }

    #[test]
    fn missing_and_zero_counters_are_equivalent() {
        let input = records(json!([
            { "mac": "01", "tx_bytes": 0 },
            { "mac": "02", "rx_bytes": 0 },
            { "mac": "03" }
        ]));

        assert_eq!(extraneous_macs(&input), vec!["01", "02", "03"]);
    }

    #[test]
    fn null_identity_field_counts_as_present() {
        let input = records(json!([
            { "mac": "AA", "hostname": null },
            { "mac": "BB", "name": null },
            { "mac": "CC", "fixed_ip": null }
        ]));

        assert!(extraneous_macs(&input).is_empty());
    }

    #[test]
    fn null_counter_is_not_zero() {
        let input = records(json!([
            { "mac": "BB", "tx_bytes": null },
            { "mac": "CC", "rx_bytes": null, "tx_bytes": 0 }
        ]));

        assert!(extraneous_macs(&input).is_empty());
    }

    #[test]
    fn zero_counter_in_any_numeric_encoding() {
        let input = records(json!([
            { "mac": "01", "tx_bytes": 0.0, "rx_bytes": 0 },
            { "mac": "02", "tx_bytes": -0.0 },
            { "mac": "03", "rx_bytes": 0.5 },
            { "mac": "04", "tx_bytes": "0" },
            { "mac": "05", "rx_bytes": 18_446_744_073_709_551_615_u64 }
        ]));

        assert_eq!(extraneous_macs(&input), vec!["01", "02"]);
    }

    #[test]
    fn record_without_mac_is_never_selected() {
        let input = records(json!([
            {},
            { "tx_bytes": 0, "rx_bytes": 0 },
            { "oui": "Apple" },
            { "mac": 42 }
        ]));

        assert!(extraneous_macs(&input).is_empty());
    }

    #[test]
    fn order_follows_input_and_macs_are_verbatim() {
        let input = records(json!([
            { "mac": "ff:ee:dd:cc:bb:aa" },
            { "mac": "11:22:33:44:55:66", "name": "keep" },
            { "mac": "AA:BB:CC:DD:EE:FF" },
            { "mac": "00:00:00:00:00:01" }
        ]));

        assert_eq!(
            extraneous_macs(&input),
            vec!["ff:ee:dd:cc:bb:aa", "AA:BB:CC:DD:EE:FF", "00:00:00:00:00:01"]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let input = records(json!([
            { "mac": "AA" },
            { "mac": "BB", "fixed_ip": "10.0.0.2" },
            { "mac": "CC", "rx_bytes": 0 }
        ]));

        assert_eq!(extraneous_macs(&input), extraneous_macs(&input));
    }

    #[test]
    fn unmodelled_fields_do_not_matter() {
        let input = records(json!([
            { "mac": "AA", "oui": "Espressif", "first_seen": 1_700_000_000, "is_guest": false }
        ]));

        assert_eq!(extraneous_macs(&input), vec!["AA"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(extraneous_macs(&[]).is_empty());
    }
}
