//! Deterministic random number generation.
//!
//! RULE: Nothing in the generation pipeline may call any platform RNG.
//! All randomness flows through GeneratorRng instances derived from the
//! single master seed recorded on the run.
//!
//! Each generator gets its own RNG stream, seeded deterministically
//! from (master_seed XOR generator_index). This means:
//!   - Adding a new generator never changes existing generators' streams.
//!   - Each generator's stream is fully reproducible in isolation, so
//!     agents, technicians and clients see independent demand noise for
//!     the same month.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use uuid::Uuid;

/// A named, deterministic RNG for a single generator stage.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    /// Create a generator RNG from the master seed and a stable
    /// generator index. The index must never change once assigned.
    pub fn new(master_seed: u64, generator_index: u64) -> Self {
        let derived_seed = master_seed ^ (generator_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an i64 in [lo, hi] inclusive.
    pub fn in_range(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "in_range requires lo <= hi");
        lo + self.next_u64_below((hi - lo + 1) as u64) as i64
    }

    /// Roll a float uniformly in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Sample from a normal distribution via Box-Muller.
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }

    /// A v4-formatted UUID drawn from this stream (reproducible,
    /// unlike Uuid::new_v4 which reaches for the platform RNG).
    pub fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&self.next_u64().to_le_bytes());
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// All generator RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_generator(&self, slot: GeneratorSlot) -> GeneratorRng {
        GeneratorRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable generator slot assignments.
/// NEVER reorder or remove entries; only append.
/// Reordering changes every generator's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Agent = 0,
    Technician = 1,
    Client = 2,
    Submission = 3,
    Installation = 4,
    Box = 5,
    Subscription = 6,
    Payment = 7,
    Feedback = 8,
    // Add new generators here, append only.
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Technician => "technician",
            Self::Client => "client",
            Self::Submission => "submission",
            Self::Installation => "installation",
            Self::Box => "box",
            Self::Subscription => "subscription",
            Self::Payment => "payment",
            Self::Feedback => "feedback",
        }
    }
}
