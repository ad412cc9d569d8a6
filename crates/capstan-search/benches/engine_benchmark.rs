// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use capstan_core::index::VarIndex;
use capstan_fd::{propagator::Propagator, space::IntSpace};
use capstan_search::{bab::BabEngine, dfs::DfsEngine};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// n variables over 1..=n, all distinct: n! solutions for small n.
fn permutation_space(n: usize) -> IntSpace<i32> {
    let mut space = IntSpace::new();
    let vars = space.new_vars(n, 1..=n as i32);
    space.post(Propagator::Distinct(vars));
    space
}

fn bench_dfs_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs_permutations");
    for n in [4usize, 5, 6] {
        group.bench_function(format!("n{}", n), |b| {
            b.iter(|| {
                let mut engine = DfsEngine::new(permutation_space(n));
                let mut count = 0u64;
                while let Some(space) = engine.next() {
                    black_box(&space);
                    count += 1;
                }
                black_box(count)
            })
        });
    }
    group.finish();
}

fn bench_bab_minimization(c: &mut Criterion) {
    c.bench_function("bab_min_first_of_permutation", |b| {
        b.iter(|| {
            let mut space = permutation_space(6);
            space.set_objective(VarIndex::new(0));
            let mut engine = BabEngine::new(space);
            while let Some(space) = engine.next() {
                black_box(&space);
            }
            black_box(engine.into_best())
        })
    });
}

criterion_group!(benches, bench_dfs_enumeration, bench_bab_minimization);
criterion_main!(benches);
