use anyhow::{Context, Result};

/// Per-species cluster: mean and standard deviation of each measurement, in
/// (sepal length, sepal width, petal length, petal width) order.
struct SpeciesCluster {
    name: &'static str,
    means: [f64; 4],
    devs: [f64; 4],
}

const ROWS_PER_SPECIES: usize = 50;

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Measurements come in tenths of a centimetre, like the real dataset.
fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let clusters = [
        SpeciesCluster {
            name: "setosa",
            means: [5.0, 3.4, 1.5, 0.25],
            devs: [0.35, 0.38, 0.17, 0.1],
        },
        SpeciesCluster {
            name: "versicolor",
            means: [5.9, 2.8, 4.3, 1.3],
            devs: [0.51, 0.31, 0.47, 0.2],
        },
        SpeciesCluster {
            name: "virginica",
            means: [6.6, 3.0, 5.5, 2.0],
            devs: [0.63, 0.32, 0.55, 0.27],
        },
    ];

    let output_path = "sample_iris.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record([
            "SepalLengthCm",
            "SepalWidthCm",
            "PetalLengthCm",
            "PetalWidthCm",
            "Species",
        ])
        .context("writing header")?;

    let mut rows = 0usize;
    for cluster in &clusters {
        for _ in 0..ROWS_PER_SPECIES {
            let mut values = [0.0f64; 4];
            for (v, (&mean, &dev)) in values
                .iter_mut()
                .zip(cluster.means.iter().zip(cluster.devs.iter()))
            {
                *v = round_tenth(rng.gauss(mean, dev).max(0.1));
            }

            writer
                .write_record([
                    values[0].to_string(),
                    values[1].to_string(),
                    values[2].to_string(),
                    values[3].to_string(),
                    cluster.name.to_string(),
                ])
                .context("writing row")?;
            rows += 1;
        }
    }

    writer.flush().context("flushing output")?;

    println!("Wrote {rows} records to {output_path}");
    Ok(())
}
