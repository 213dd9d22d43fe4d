use chrono::{Days, NaiveDate};
use serde_json::{json, Value};

/// Three years of weekly observations.
const WEEKS: u64 = 156;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[-1, 1)`.
    fn jitter(&mut self) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        unit * 2.0 - 1.0
    }
}

/// Interest score for week `i`: a linear trend, a yearly dip around the
/// holidays and some noise, clamped to the 0..=100 Trends scale.
fn score(i: u64, base: f64, trend: f64, noise: f64, rng: &mut SimpleRng) -> u32 {
    let yearly = (i as f64 / 52.0 * std::f64::consts::TAU).cos();
    let v = base + trend * i as f64 - 4.0 * yearly + noise * rng.jitter();
    v.round().clamp(0.0, 100.0) as u32
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let first = NaiveDate::from_ymd_opt(2020, 6, 7)
        .ok_or_else(|| anyhow::anyhow!("bad start week"))?;

    let rows: Vec<Value> = (0..WEEKS)
        .map(|i| {
            let week = first + Days::new(7 * i);
            json!({
                "Week": week.format("%Y-%m-%d").to_string(),
                "javascript": score(i, 22.0, -0.02, 2.0, &mut rng),
                "python": score(i, 62.0, 0.08, 5.0, &mut rng),
                "java": score(i, 46.0, -0.03, 3.0, &mut rng),
            })
        })
        .collect();

    let output_path = std::env::args().nth(1).unwrap_or_else(|| "data.json".to_string());
    let text = serde_json::to_string_pretty(&rows)?;
    std::fs::write(&output_path, text)?;

    println!("Wrote {} weeks to {output_path}", rows.len());
    Ok(())
}
