#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

//! Compares probe lengths of quadratic probing and separate chaining as the load factor
//! rises, and plots the averages and worst cases.

use log::info;
use plotters::prelude::*;
use primehash::{ChainedMap, HashFn, OpenAddressingMap, additive_hash, positional_hash};
use rand::Rng;

// Requested capacity of every table, rounded up to a prime by the maps
const TABLE_SIZE: usize = 100_000;
// Load factors from 0.05 to 0.45 in 9 steps, all below the open addressing growth point
const NUM_LOAD_FACTORS: usize = 9;
const MIN_LOAD: f64 = 0.05;
const MAX_LOAD: f64 = 0.45;
// Random keys are lowercase words of this length range
const KEY_LENGTHS: std::ops::Range<usize> = 4..12;

const AVERAGE_PLOT: &str = "average_probes.png";
const WORST_CASE_PLOT: &str = "worst_case_probes.png";

/// One table layout and hash function combination
#[derive(Debug, Clone, Copy)]
enum Method {
    QuadraticAdditive,
    QuadraticPositional,
    ChainedAdditive,
    ChainedPositional,
}

const METHODS: [Method; 4] = [
    Method::QuadraticAdditive,
    Method::QuadraticPositional,
    Method::ChainedAdditive,
    Method::ChainedPositional,
];

impl Method {
    fn label(self) -> &'static str {
        match self {
            Self::QuadraticAdditive => "Quadratic probing (additive hash)",
            Self::QuadraticPositional => "Quadratic probing (positional hash)",
            Self::ChainedAdditive => "Separate chaining (additive hash)",
            Self::ChainedPositional => "Separate chaining (positional hash)",
        }
    }

    fn hash_fn(self) -> HashFn<String> {
        match self {
            Self::QuadraticAdditive | Self::ChainedAdditive => additive_hash,
            Self::QuadraticPositional | Self::ChainedPositional => positional_hash,
        }
    }

    /// Inserts `keys` into a fresh table and returns the probe count of every key
    fn probe_counts(self, keys: &[String]) -> Vec<usize> {
        match self {
            Self::QuadraticAdditive | Self::QuadraticPositional => {
                let mut map = OpenAddressingMap::new(TABLE_SIZE, self.hash_fn());
                map.extend(keys.iter().cloned().map(|key| (key, ())));
                keys.iter().map(|key| map.probe_count(key)).collect()
            }
            Self::ChainedAdditive | Self::ChainedPositional => {
                let mut map = ChainedMap::new(TABLE_SIZE, self.hash_fn());
                map.extend(keys.iter().cloned().map(|key| (key, ())));
                keys.iter().map(|key| map.probe_count(key)).collect()
            }
        }
    }
}

fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(KEY_LENGTHS);
    (0..len).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect()
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    x_labels: &[String],
    series: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];
    let line_width = 2;
    let marker_size = 4;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series.iter().flat_map(|v| v.iter()).fold(0.0, |max: f64, &x| max.max(x)) * 1.1; // 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(x_labels.len() - 1), 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_labels(x_labels.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (method_idx, method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);
        let points = &series[method_idx];

        chart
            .draw_series(LineSeries::new(points.iter().copied().enumerate(), line_style))?
            .label(method.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            points.iter().enumerate().map(|(i, &y)| Circle::new((i, y), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| MIN_LOAD + (MAX_LOAD - MIN_LOAD) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    info!("load factors: {:?}", load_factors);
    info!("number of keys: {:?}", num_keys);

    // Generate random keys once so every method sees the same input
    let mut rng = rand::rng();
    let max_keys_needed = num_keys.iter().copied().max().unwrap_or(0);
    let keys: Vec<String> = (0..max_keys_needed).map(|_| random_key(&mut rng)).collect();

    let mut average_probes: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];
    let mut worst_case_probes: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];

    for &n_keys in &num_keys {
        info!("testing with {} keys", n_keys);

        for (method_idx, method) in METHODS.iter().enumerate() {
            let probes = method.probe_counts(&keys[..n_keys]);

            let average = probes.iter().sum::<usize>() as f64 / probes.len().max(1) as f64;
            let worst = probes.iter().copied().max().unwrap_or(0);

            average_probes[method_idx].push(average);
            worst_case_probes[method_idx].push(worst as f64);

            println!("  {}: Avg probes = {:.2}, Worst = {}", method.label(), average, worst);
        }
    }

    let x_labels: Vec<String> = num_keys.iter().map(ToString::to_string).collect();
    draw_chart(
        AVERAGE_PLOT,
        "Average Probes per Lookup",
        "Average Lookup Cost (probes)",
        &x_labels,
        &average_probes,
    )?;
    draw_chart(
        WORST_CASE_PLOT,
        "Worst-Case Probes per Lookup",
        "Worst-Case Lookup Cost (probes)",
        &x_labels,
        &worst_case_probes,
    )?;

    println!("Generated plot images: {AVERAGE_PLOT}, {WORST_CASE_PLOT}");

    Ok(())
}
