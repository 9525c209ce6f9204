// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the verdict-core crate.
// Measures a short `and_then` chain against the equivalent `std::result`
// chain, and a handler chain that matches on its last handler.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use verdict_core::{Captured, Coded, Handler, InvalidArgument, InvalidState, NotSupported, Outcome};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn step(v: u64) -> Outcome<u64, InvalidState> {
    if v == u64::MAX {
        Outcome::Error(InvalidState::new("overflow"))
    } else {
        Outcome::Value(v + 1)
    }
}

fn std_step(v: u64) -> Result<u64, InvalidState> {
    step(v).into_result()
}

/// Four chained steps on a value-holding outcome.
fn bench_and_then_chain(c: &mut Criterion) {
    c.bench_function("outcome and_then x4", |b| {
        b.iter(|| {
            let outcome = Outcome::<u64, InvalidState>::Value(black_box(1))
                .and_then(step)
                .and_then(step)
                .and_then(step)
                .and_then(step);
            black_box(outcome.ok());
        });
    });

    c.bench_function("std::result and_then x4", |b| {
        b.iter(|| {
            let result = Ok::<u64, InvalidState>(black_box(1))
                .and_then(std_step)
                .and_then(std_step)
                .and_then(std_step)
                .and_then(std_step);
            black_box(result.ok());
        });
    });
}

/// Dispatch a coded failure through three misses and one hit.
fn bench_handler_chain(c: &mut Criterion) {
    let captured = Captured::new(Coded::new(-9i64, "status -9"));
    c.bench_function("handler chain (hit on 4th)", |b| {
        b.iter(|| {
            let mut code = 0;
            let handled = Handler::new(black_box(captured.clone()))
                .handle(|_: &InvalidArgument| {})
                .handle(|_: &InvalidState| {})
                .handle(|_: &NotSupported| {})
                .handle(|e: &Coded<i64>| code = *e.code())
                .is_handled();
            black_box((handled, code));
        });
    });
}

criterion_group!(benches, bench_and_then_chain, bench_handler_chain);
criterion_main!(benches);
