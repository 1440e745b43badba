// Copyright 2025 Lexikit Contributors
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

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexikit_core::repeat::{repeat, DEFAULT_REPEAT_COUNT};

fn bench_repeat_default(c: &mut Criterion) {
    c.bench_function("repeat_default_count", |b| {
        b.iter(|| repeat(black_box("a"), DEFAULT_REPEAT_COUNT));
    });
}

fn bench_repeat_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeat_scaling");

    for count in [5usize, 64, 1024].iter() {
        group.throughput(Throughput::Bytes(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| repeat(black_box("a"), count));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_repeat_default, bench_repeat_scaling);
criterion_main!(benches);
