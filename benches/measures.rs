use criterion::{criterion_group, criterion_main, Criterion};
use geofeature::algorithm::{ChamberlainDuquetteArea, HaversineLength};
use geofeature::geometry::{Coord, LinearRing, LineString, Polygon};

/// A closed ring of `n` vertices on a small circle around (10, 50).
fn synthetic_ring(n: usize) -> LinearRing {
    let mut coords: Vec<Coord> = (0..n)
        .map(|i| {
            let angle = (i as f64) / (n as f64) * std::f64::consts::TAU;
            Coord::new(10.0 + angle.cos() * 0.1, 50.0 + angle.sin() * 0.1).unwrap()
        })
        .collect();
    coords.push(coords[0]);
    LinearRing::new(coords)
}

fn benchmark_measures(c: &mut Criterion) {
    let ring = synthetic_ring(1024);
    let polygon = Polygon::new(vec![ring.clone()]);
    let line = LineString::new(ring.coords().to_vec());

    c.bench_function("chamberlain_duquette_area 1024", |b| {
        b.iter(|| polygon.chamberlain_duquette_area())
    });
    c.bench_function("haversine_length 1024", |b| {
        b.iter(|| line.haversine_length())
    });
}

criterion_group!(benches, benchmark_measures);
criterion_main!(benches);
