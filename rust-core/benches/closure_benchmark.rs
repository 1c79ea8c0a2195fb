use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use crystal_symmetry::catalog::{point_groups, space_groups, CatalogKind, GroupCatalog};
use crystal_symmetry::symmetries::{parse_hall_symbol, Group, Operation};
use crystal_symmetry::Query;

/// Hall parsing and closure for a small monoclinic group and the largest cubic one.
fn bench_hall_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("hall_closure");

    for hall in ["-P 2ybc", "-F 4vw 2vw 3"] {
        group.bench_function(format!("parse {hall}"), |b| {
            b.iter(|| parse_hall_symbol(black_box(hall)))
        });
        group.bench_function(format!("close {hall}"), |b| {
            b.iter(|| Group::from_hall(black_box(hall)))
        });
    }

    let generators: Vec<Operation> = ["-y,x,z", "-x,-y,-z", "z,x,y"]
        .iter()
        .filter_map(|code| Operation::from_code(code).ok())
        .collect();
    group.bench_function("close m-3m from codes", |b| {
        b.iter(|| Group::new(black_box(&generators)))
    });

    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    let point_json = point_groups().to_json().unwrap_or_default();
    let space_json = space_groups().to_json().unwrap_or_default();

    group.bench_function("from_json point groups", |b| {
        b.iter(|| GroupCatalog::from_json(CatalogKind::PointGroupCatalog, black_box(&point_json)))
    });
    group.sample_size(10);
    group.bench_function("from_json space groups", |b| {
        b.iter(|| GroupCatalog::from_json(CatalogKind::SpaceGroupCatalog, black_box(&space_json)))
    });
    group.bench_function("key lookup", |b| {
        b.iter(|| space_groups().get(black_box(&Query::key("P21/c"))).is_some())
    });

    group.finish();
}

criterion_group!(benches, bench_hall_closure, bench_catalog);
criterion_main!(benches);
