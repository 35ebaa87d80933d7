use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soma_engine::ephemeris::{EphemerisOracle, OracleError, RawPosition};
use soma_engine::{BirthData, JulianDay, PositionClassifier};
use std::sync::Arc;

struct StaticOracle;

impl EphemerisOracle for StaticOracle {
    fn position(&self, _jd: JulianDay, _body_id: i32) -> Result<RawPosition, OracleError> {
        Ok(RawPosition {
            longitude: 280.36879,
            latitude: 0.0,
            distance: 0.98,
            speed_lon: 1.019,
        })
    }
}

fn bench_analyze_sun(c: &mut Criterion) {
    let classifier = PositionClassifier::new(Arc::new(StaticOracle));
    let data = BirthData {
        year: 1990,
        month: 6,
        day: 15,
        hour: 8.5,
        lat: 40.7128,
        lon: -74.0060,
    };

    c.bench_function("analyze_sun", |b| {
        b.iter(|| classifier.analyze_sun(black_box(&data)))
    });
}

fn bench_julian_day(c: &mut Criterion) {
    c.bench_function("julian_day", |b| {
        b.iter(|| JulianDay::from_civil(black_box(1990), black_box(6), black_box(15), black_box(8.5)))
    });
}

criterion_group!(benches, bench_analyze_sun, bench_julian_day);
criterion_main!(benches);
