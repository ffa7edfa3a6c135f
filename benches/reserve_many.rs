//! This bench test books and then cancels a large number of tickets against
//! the built-in catalog.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use reservations::Fixture;

const TICKETS: usize = 500;

fn reserve_many(c: &mut Criterion) {
    c.bench_function("reserve many", |b| {
        b.iter_batched(
            || Fixture::default().without_reservations().build(),
            |mut system| {
                for i in 0..TICKETS {
                    system
                        .reserve_ticket("M001", &format!("Passenger {i}"), "2099-01-01")
                        .unwrap();
                }
                system
            },
            BatchSize::SmallInput,
        );
    });
}

fn cancel_many(c: &mut Criterion) {
    c.bench_function("cancel many", |b| {
        b.iter_batched(
            || {
                let mut system = Fixture::default().without_reservations().build();
                let ids: Vec<String> = (0..TICKETS)
                    .map(|i| {
                        system
                            .reserve_ticket("H001", &format!("Passenger {i}"), "2099-01-01")
                            .unwrap()
                            .id
                            .to_string()
                    })
                    .collect();
                (system, ids)
            },
            |(mut system, ids)| {
                for id in ids.iter().rev() {
                    system.cancel_reservation(id).unwrap();
                }
                system
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, reserve_many, cancel_many);
criterion_main!(benches);
