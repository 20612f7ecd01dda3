//! Hardware box generation.
//!
//! One box per client, fabricated 30-365 days before the client signed
//! up, with a serial of four hex digits suffixed by the fabrication
//! year of reference (the client's creation year). Serial uniqueness
//! follows the retry-then-accept policy shared with e-mails.
//!
//! Side effect: back-fills `ClientRecord::box_serial`, the single
//! late-bound field in the data model.

use crate::batch::RunStats;
use crate::config::GenConfig;
use crate::identity::UNIQUENESS_RETRY_BUDGET;
use crate::records::{BoxRecord, ClientRecord};
use crate::rng::GeneratorRng;
use chrono::{Datelike, Days};
use std::collections::HashSet;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

pub fn generate_boxes(
    cfg: &GenConfig,
    clients: &mut [ClientRecord],
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
) -> Vec<BoxRecord> {
    let mut boxes = Vec::with_capacity(clients.len());
    let mut used_serials: HashSet<String> = HashSet::new();

    for client in clients.iter_mut() {
        let year = client.created_at.year();
        let mut serial = serial_candidate(rng, year);
        let mut attempts = 0;
        while used_serials.contains(&serial) && attempts < UNIQUENESS_RETRY_BUDGET {
            serial = serial_candidate(rng, year);
            attempts += 1;
        }
        if used_serials.contains(&serial) {
            stats.duplicate_serials_accepted += 1;
            log::warn!("serial retry budget exhausted, accepting duplicate {serial}");
        }
        used_serials.insert(serial.clone());

        let model = &cfg.box_models[rng.next_u64_below(cfg.box_models.len() as u64) as usize];
        let fabricated_on = client.created_at - Days::new(rng.in_range(30, 365) as u64);

        boxes.push(BoxRecord {
            serial: serial.clone(),
            client_id: client.id,
            model: model.clone(),
            fabricated_on,
            wifi_ssid: format!("Canalbox_{}", rng.in_range(1000, 9999)),
        });

        client.box_serial = Some(serial);
    }

    log::info!("generated {} boxes", boxes.len());
    boxes
}

fn serial_candidate(rng: &mut GeneratorRng, year: i32) -> String {
    let digits: String = (0..4)
        .map(|_| HEX[rng.next_u64_below(16) as usize] as char)
        .collect();
    format!("CBX-{digits}-{year}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GeneratorSlot, RngBank};

    #[test]
    fn serial_shape() {
        let mut rng = RngBank::new(11).for_generator(GeneratorSlot::Box);
        let serial = serial_candidate(&mut rng, 2024);
        assert_eq!(serial.len(), "CBX-ABCD-2024".len());
        assert!(serial.starts_with("CBX-"));
        assert!(serial.ends_with("-2024"));
        let digits = &serial[4..8];
        assert!(digits.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
