//! Benchmarks for registry population and overload resolution.
//!
//! The generator runs at build time over a bounded interface set, so
//! these exist to catch accidental quadratic behavior rather than to
//! chase throughput.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use domgen::prelude::*;

fn overload_set(arg_counts: &[usize]) -> Vec<IdlOperation> {
    arg_counts
        .iter()
        .map(|&count| {
            let mut op = IdlOperation::new("drawImage", "void");
            for i in 0..count {
                op = op.with_argument(IdlArgument::new(format!("arg{i}"), "float"));
            }
            op
        })
        .collect()
}

fn bench_registry_population(c: &mut Criterion) {
    c.bench_function("registry/with_builtins", |b| {
        b.iter(|| black_box(TypeRegistry::with_builtins()));
    });
}

fn bench_resolution(c: &mut Criterion) {
    let registry = TypeRegistry::with_builtins();

    c.bench_function("registry/resolve_mixed", |b| {
        b.iter(|| {
            for name in [
                "boolean",
                "DOMString",
                "sequence<Node>",
                "SVGTransformList",
                "NotRegisteredAnywhere",
            ] {
                black_box(registry.resolve(black_box(name)));
            }
        });
    });

    let interface = IdlInterface::new("CanvasRenderingContext2D");
    let overloads = overload_set(&[3, 5, 9]);
    c.bench_function("resolver/analyze_operation", |b| {
        b.iter(|| {
            let info = analyze_operation(&interface, black_box(&overloads), &registry);
            black_box(info.parameters_interface_declaration().unwrap());
        });
    });
}

criterion_group!(benches, bench_registry_population, bench_resolution);
criterion_main!(benches);
