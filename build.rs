use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of intervals in the quarter period
const TABLE_SIZE: usize = 256;

/// Peak sample value, 2^31 - 1
const AMPLITUDE: f64 = 2_147_483_647.0;

fn compute_sine_table() -> [u32; TABLE_SIZE + 1] {
    (0..=TABLE_SIZE)
        .map(|k| {
            let theta = k as f64 * core::f64::consts::FRAC_PI_2 / TABLE_SIZE as f64;
            f64::round(f64::sin(theta) * AMPLITUDE) as u32
        })
        .collect::<Vec<u32>>()
        .try_into()
        .unwrap()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("sine_table.rs");
    let mut f = File::create(dest_path).unwrap();

    let sine_table = compute_sine_table();
    assert_eq!(sine_table[0], 0);
    assert_eq!(sine_table[TABLE_SIZE], AMPLITUDE as u32);
    assert!(sine_table.windows(2).all(|w| w[0] <= w[1]), "sine table is not monotonic");

    writeln!(&mut f, "/// Quarter period of sine, `round(sin(k * pi / 512) * (2^31 - 1))` for `k` in `0..=256`").unwrap();
    writeln!(&mut f, "pub const SINE_TABLE: [u32; {}] = {:?};", sine_table.len(), sine_table).unwrap();
}
