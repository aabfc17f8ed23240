// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Synthetic batches for comparing reducers.
//!
//! Each record has two categorical string fields and a timestamp. With the
//! default shape (3 symbols per field, 30 records per batch) most keys
//! repeat several times within a batch, so every reducer has real work to do.

use rand::Rng;

/// One synthetic record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sample {
    pub foo: String,
    pub bar: String,
    /// Seconds since the epoch.
    pub stamp: u64,
}

impl Sample {
    pub fn key(&self) -> (String, String) {
        return (self.foo.clone(), self.bar.clone());
    }

    pub fn stamp(&self) -> u64 {
        return self.stamp;
    }
}

/// Shape of the generated data.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Symbols a field can be built from.
    pub alphabet: &'static [u8],
    /// How many times the chosen symbol is repeated to form a field.
    pub field_len: usize,
    pub batch_size: usize,
    pub batches: usize,
    /// Timestamps are `base_stamp + h * 3600` for `h` in `0..spread_hours`.
    pub spread_hours: u64,
    pub base_stamp: u64,
}

impl Default for BatchConfig {
    fn default() -> BatchConfig {
        return BatchConfig {
            alphabet: b"123",
            field_len: 32,
            batch_size: 30,
            batches: 1000,
            spread_hours: 10,
            base_stamp: 1_700_000_000,
        };
    }
}

impl BatchConfig {
    /// Number of distinct keys the config can produce.
    pub fn key_space(&self) -> usize {
        return self.alphabet.len() * self.alphabet.len();
    }
}

fn field<R: Rng>(config: &BatchConfig, rng: &mut R) -> String {
    let symbol = config.alphabet[rng.gen_range(0..config.alphabet.len())] as char;
    return std::iter::repeat(symbol).take(config.field_len).collect();
}

/// Generate a single batch.
pub fn generate_batch<R: Rng>(config: &BatchConfig, rng: &mut R) -> Vec<Sample> {
    return (0..config.batch_size)
        .map(|_| {
            let foo = field(config, rng);
            let bar = field(config, rng);
            let stamp = config.base_stamp + rng.gen_range(0..config.spread_hours) * 3600;
            return Sample { foo, bar, stamp };
        })
        .collect();
}

/// Generate `config.batches` independent batches.
pub fn generate<R: Rng>(config: &BatchConfig, rng: &mut R) -> Vec<Vec<Sample>> {
    return (0..config.batches).map(|_| generate_batch(config, rng)).collect();
}
