//! datagen: headless dataset generator for Canalbox.
//!
//! Usage:
//!   datagen --seed 12345 --clients 500 --start-date 2024-01-01 --db canalbox.db
//!   datagen --config params.json --db :memory:

use anyhow::Result;
use canalbox_core::{
    batch::GenerationBatch, config::GenConfig, pipeline::GenerationPipeline, rng::RngBank,
    store::DataStore,
};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = match string_arg(&args, "--config") {
        Some(path) => GenConfig::load(Path::new(&path))?,
        None => GenConfig::default(),
    };
    config.target_agents = parse_arg(&args, "--agents", config.target_agents);
    config.target_technicians = parse_arg(&args, "--technicians", config.target_technicians);
    config.target_clients = parse_arg(&args, "--clients", config.target_clients);
    if let Some(raw) = string_arg(&args, "--start-date") {
        config.start_date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?;
    }
    if let Some(raw) = string_arg(&args, "--today") {
        config.today = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?;
    }
    let seed = parse_arg(&args, "--seed", 42u64);
    let db = string_arg(&args, "--db").unwrap_or_else(|| "canalbox.db".to_string());

    println!("Canalbox datagen");
    println!("  seed:        {seed}");
    println!("  agents:      {}", config.target_agents);
    println!("  technicians: {}", config.target_technicians);
    println!("  clients:     {}", config.target_clients);
    println!("  start date:  {}", config.start_date);
    println!("  today:       {}", config.today);
    println!("  db:          {db}");
    println!();

    let mut store = if db == ":memory:" {
        DataStore::in_memory()?
    } else {
        DataStore::open(&db)?
    };
    store.migrate()?;
    store.seed_default_plans()?;
    let catalog = store.load_catalog()?;
    log::info!("plan catalog loaded: {} plans", catalog.plans().len());

    let run_id = format!("run-{seed}-{}", unix_now());
    store.insert_run(&run_id, seed, env!("CARGO_PKG_VERSION"))?;

    let rng_bank = RngBank::new(seed);
    let batch = GenerationPipeline::new(&config, &catalog).run(&rng_bank)?;
    batch.log_summary();

    store.persist_batch(&batch)?;

    print_summary(&store, &run_id, &batch)?;
    Ok(())
}

fn print_summary(store: &DataStore, run_id: &str, batch: &GenerationBatch) -> Result<()> {
    println!("=== RUN SUMMARY ===");
    println!("  run_id:        {run_id}");
    println!("  agents:        {}", store.agent_count()?);
    println!("  technicians:   {}", store.technician_count()?);
    println!("  clients:       {}", store.client_count()?);
    println!("  installations: {}", store.installation_count()?);
    println!("  subscriptions: {}", store.subscription_count()?);
    println!("  payments:      {}", store.payment_count()?);
    println!("  revenue (XOF): {}", store.payment_total()?);
    println!("  feedback:      {}", store.feedback_count()?);

    let s = &batch.stats;
    println!();
    println!("=== DEGRADED PATHS ===");
    println!("  duplicate e-mails accepted: {}", s.duplicate_emails_accepted);
    println!("  duplicate serials accepted: {}", s.duplicate_serials_accepted);
    println!("  clients skipped (no agent): {}", s.clients_skipped_no_agent);
    println!("  crew fallbacks (partial):   {}", s.crew_fallback_partial);
    println!("  crew fallbacks (none):      {}", s.crew_fallback_none_eligible);
    println!("  renewals cut by horizon:    {}", s.renewals_cut_by_horizon);

    if !batch.clients.is_empty() {
        let mut monthly: BTreeMap<String, usize> = BTreeMap::new();
        for client in &batch.clients {
            let key = format!("{}-{:02}", client.created_at.year(), client.created_at.month());
            *monthly.entry(key).or_default() += 1;
        }
        println!();
        println!("=== MONTHLY CLIENT DISTRIBUTION ===");
        for (month, count) in monthly {
            println!("  {month}: {count} clients");
        }
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
