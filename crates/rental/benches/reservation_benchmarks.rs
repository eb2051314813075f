use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{DateTime, Duration, TimeZone, Utc};
use rentacar_rental::{
    CarRentalCompany, CarTypeConfig, ClientId, FleetConfig, RentalCompany, ReservationConstraints,
};

fn company_with(cars_per_type: u32) -> RentalCompany {
    let car_type = |name: &str, price: u64| CarTypeConfig {
        name: name.to_string(),
        num_seats: 4,
        trunk_space: 300.0,
        rental_price_per_day: price,
        smoking_allowed: false,
        count: cars_per_type,
    };

    FleetConfig {
        name: "Bench".to_string(),
        regions: vec!["Antwerp".to_string()],
        car_types: vec![
            car_type("Economy", 3000),
            car_type("Compact", 4500),
            car_type("Premium", 9000),
        ],
    }
    .build()
    .expect("valid bench fleet")
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap()
}

/// Book `per_car` disjoint one-day rentals on every Economy car.
fn preload(company: &RentalCompany, per_car: i64) {
    let client = ClientId::new("preload");
    for day in 0..per_car {
        let s = start() + Duration::days(day * 2);
        let c = ReservationConstraints::new(s, s + Duration::days(1), "Economy", "Antwerp").unwrap();
        while let Ok(q) = company.create_quote(&c, &client) {
            if company.confirm_quote(&q).is_err() {
                break;
            }
        }
    }
}

fn bench_availability(c: &mut Criterion) {
    let mut group = c.benchmark_group("availability_scan");

    for cars in [10u32, 100, 1000] {
        let company = company_with(cars);
        preload(&company, 20);
        let probe_start = start() + Duration::days(10);
        let probe_end = probe_start + Duration::hours(6);

        group.throughput(Throughput::Elements(company.cars().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cars), &company, |b, company| {
            b.iter(|| black_box(company.available_car_types(black_box(probe_start), black_box(probe_end))));
        });
    }

    group.finish();
}

fn bench_quote_confirm_cancel(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote_confirm_cancel");

    for cars in [10u32, 100] {
        let company = company_with(cars);
        let client = ClientId::new("bench");
        let constraints = ReservationConstraints::new(
            start(),
            start() + Duration::days(3),
            "Compact",
            "Antwerp",
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(cars), &company, |b, company| {
            b.iter(|| {
                let quote = company.create_quote(&constraints, &client).unwrap();
                let reservation = company.confirm_quote(&quote).unwrap();
                company.cancel_reservation(&reservation).unwrap();
                black_box(reservation)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_availability, bench_quote_confirm_cancel);
criterion_main!(benches);
