// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for the bank.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single-threaded account operations
//! - Facade calls including amount parsing and name lookup
//! - Multi-threaded transfers with and without contention

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mini_bank::{Account, Bank, Ledger};
use rayon::prelude::*;
use std::sync::Arc;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_bank(num_clients: usize) -> Bank {
    let ledger = Ledger::new();
    for i in 0..num_clients {
        ledger
            .register(client_name(i), Account::new(format!("N{i:05}"), 1_000_000.0))
            .unwrap();
    }
    Bank::new(ledger)
}

fn client_name(i: usize) -> String {
    format!("client-{i}")
}

// =============================================================================
// Single-Threaded Benchmarks
// =============================================================================

fn bench_account_deposit(c: &mut Criterion) {
    c.bench_function("account_deposit", |b| {
        let account = Account::new("A001", 0.0);
        b.iter(|| account.deposit(black_box(10.0)))
    });
}

fn bench_account_transfer(c: &mut Criterion) {
    c.bench_function("account_transfer", |b| {
        let a = Account::new("A001", 1_000_000.0);
        let z = Account::new("B001", 1_000_000.0);
        b.iter(|| {
            a.transfer(&z, black_box(1.0));
            z.transfer(&a, black_box(1.0));
        })
    });
}

fn bench_facade_transfer(c: &mut Criterion) {
    c.bench_function("facade_transfer", |b| {
        let bank = Bank::seeded();
        b.iter(|| {
            let _ = bank.transfer(black_box("Alice"), black_box("Bob"), black_box("1"));
            let _ = bank.transfer(black_box("Bob"), black_box("Alice"), black_box("1"));
        })
    });
}

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");

    for num_clients in [10, 100, 1_000].iter() {
        group.throughput(Throughput::Elements(*num_clients as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_clients),
            num_clients,
            |b, &num_clients| {
                let bank = make_bank(num_clients);
                b.iter(|| black_box(bank.ledger().summaries()))
            },
        );
    }
    group.finish();
}

// =============================================================================
// Multi-Threaded Benchmarks
// =============================================================================

fn bench_parallel_transfers_two_clients(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_transfers_two_clients");

    for count in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let bank = Arc::new(make_bank(2));
                let a = client_name(0);
                let z = client_name(1);

                (0..count).into_par_iter().for_each(|i| {
                    if i % 2 == 0 {
                        let _ = bank.transfer(&a, &z, "1");
                    } else {
                        let _ = bank.transfer(&z, &a, "1");
                    }
                });

                black_box(&bank);
            })
        });
    }
    group.finish();
}

fn bench_parallel_transfers_many_clients(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_transfers_many_clients");

    for num_clients in [10, 100, 1_000].iter() {
        let transfers = 10_000u64;
        group.throughput(Throughput::Elements(transfers));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_clients),
            num_clients,
            |b, &num_clients| {
                let names: Vec<String> = (0..num_clients).map(client_name).collect();
                b.iter(|| {
                    let bank = Arc::new(make_bank(num_clients));

                    (0..transfers as usize).into_par_iter().for_each(|i| {
                        let from = &names[i % num_clients];
                        let to = &names[(i + 1) % num_clients];
                        let _ = bank.transfer(from, to, "1");
                    });

                    black_box(&bank);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    single_threaded,
    bench_account_deposit,
    bench_account_transfer,
    bench_facade_transfer,
    bench_summaries,
);

criterion_group!(
    multi_threaded,
    bench_parallel_transfers_two_clients,
    bench_parallel_transfers_many_clients,
);

criterion_main!(single_threaded, multi_threaded);
