//! Transactional batch insertion.
//!
//! The whole run commits together or not at all: any insert failure
//! rolls the transaction back and propagates the error, leaving the
//! database exactly as it was.

use super::DataStore;
use crate::batch::GenerationBatch;
use crate::error::GenResult;
use rusqlite::params;

impl DataStore {
    pub fn persist_batch(&mut self, batch: &GenerationBatch) -> GenResult<()> {
        let tx = self.conn.transaction()?;

        for a in &batch.agents {
            tx.execute(
                "INSERT INTO agents (id, full_name, email, phone, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    a.id.to_string(),
                    a.full_name,
                    a.email,
                    a.phone,
                    a.created_at.to_string()
                ],
            )?;
        }

        for t in &batch.technicians {
            tx.execute(
                "INSERT INTO technicians (id, full_name, email, phone, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    t.id.to_string(),
                    t.full_name,
                    t.email,
                    t.phone,
                    t.created_at.to_string()
                ],
            )?;
        }

        for c in &batch.clients {
            tx.execute(
                "INSERT INTO clients (id, agent_id, box_serial, last_name, first_name,
                                      email, phone, address, latitude, longitude, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    c.id.to_string(),
                    c.agent_id.to_string(),
                    c.box_serial,
                    c.last_name,
                    c.first_name,
                    c.email,
                    c.phone,
                    c.address,
                    c.latitude,
                    c.longitude,
                    c.created_at.to_string()
                ],
            )?;
        }

        for s in &batch.submissions {
            tx.execute(
                "INSERT INTO submissions (id, client_id, submitted_on, status)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    s.id.to_string(),
                    s.client_id.to_string(),
                    s.submitted_on.to_string(),
                    s.status
                ],
            )?;
        }

        for i in &batch.installations {
            tx.execute(
                "INSERT INTO installations (id, submission_id, planned_on, completed_on, called_on)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    i.id.to_string(),
                    i.submission_id.to_string(),
                    i.planned_on.to_string(),
                    i.completed_on.map(|d| d.to_string()),
                    i.called_on.to_string()
                ],
            )?;
        }

        for crew in &batch.crew_assignments {
            tx.execute(
                "INSERT INTO installation_crew (installation_id, technician_id)
                 VALUES (?1, ?2)",
                params![
                    crew.installation_id.to_string(),
                    crew.technician_id.to_string()
                ],
            )?;
        }

        for b in &batch.boxes {
            tx.execute(
                "INSERT INTO boxes (serial, client_id, model, fabricated_on, wifi_ssid)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    b.serial,
                    b.client_id.to_string(),
                    b.model,
                    b.fabricated_on.to_string(),
                    b.wifi_ssid
                ],
            )?;
        }

        for s in &batch.subscriptions {
            tx.execute(
                "INSERT INTO subscriptions (id, client_id, plan_id, installation_id,
                                            starts_on, ends_on, duration_months)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    s.id.to_string(),
                    s.client_id.to_string(),
                    s.plan_id,
                    s.installation_id.to_string(),
                    s.starts_on.to_string(),
                    s.ends_on.to_string(),
                    s.duration_months
                ],
            )?;
        }

        for p in &batch.payments {
            tx.execute(
                "INSERT INTO payments (id, client_id, subscription_id, amount, kind, paid_on)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    p.id.to_string(),
                    p.client_id.to_string(),
                    p.subscription_id.map(|id| id.to_string()),
                    p.amount,
                    p.kind.as_str(),
                    p.paid_on.to_string()
                ],
            )?;
        }

        for f in &batch.feedback {
            tx.execute(
                "INSERT INTO feedback (id, client_id, installation_id, product_score,
                                       crew_score, comment, submitted_on)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    f.id.to_string(),
                    f.client_id.to_string(),
                    f.installation_id.to_string(),
                    f.product_score,
                    f.crew_score,
                    f.comment,
                    f.submitted_on.to_string()
                ],
            )?;
        }

        tx.commit()?;
        log::info!("batch committed");
        Ok(())
    }
}
