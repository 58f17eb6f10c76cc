//! Benchmarks for collection parsing performance
//!
//! These benchmarks measure the two-phase conversion of a service
//! configuration into a collection document, and its serialization.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gateway_postman_collection::parse;
use gateway_postman_config::{EndpointConfig, ExtraConfig, ServiceConfig};
use serde_json::json;
use std::hint::black_box;

/// Creates a configuration with endpoints spread across nested folders
fn create_config(endpoint_count: usize) -> ServiceConfig {
    let endpoints = (0..endpoint_count)
        .map(|i| {
            let mut endpoint = EndpointConfig {
                endpoint: format!("/resource/{i}"),
                method: "GET".to_owned(),
                ..EndpointConfig::default()
            };
            // Every third endpoint stays at the collection root.
            if i % 3 != 0 {
                let folder = format!("/group{}/sub{}", i % 10, i % 4);
                endpoint.extra_config = ExtraConfig::from([(
                    "documentation/postman".to_owned(),
                    json!({ "folder": folder }),
                )]);
            }
            endpoint
        })
        .collect();

    ServiceConfig {
        name: "benchmark gateway".to_owned(),
        port: 8080,
        endpoints,
        extra_config: ExtraConfig::from([(
            "documentation/postman".to_owned(),
            json!({
                "name": "Benchmark collection",
                "version": "1.0.0",
                "folder": [
                    { "name": "/group0", "description": "First group" },
                    { "name": "/group1", "description": "Second group" }
                ]
            }),
        )]),
        ..ServiceConfig::default()
    }
}

/// Creates a configuration with every endpoint at the collection root
fn create_flat_config(endpoint_count: usize) -> ServiceConfig {
    ServiceConfig {
        name: "benchmark gateway".to_owned(),
        port: 8080,
        endpoints: (0..endpoint_count)
            .map(|i| EndpointConfig {
                endpoint: format!("/resource/{i}"),
                method: "GET".to_owned(),
                ..EndpointConfig::default()
            })
            .collect(),
        ..ServiceConfig::default()
    }
}

/// Benchmarks parsing configurations with nested folder hierarchies
fn bench_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");

    for endpoint_count in [10, 100, 1000].iter() {
        let cfg = create_config(*endpoint_count);

        group.throughput(Throughput::Elements(*endpoint_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(endpoint_count),
            &cfg,
            |b, cfg| {
                b.iter(|| {
                    parse(black_box(cfg)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmarks parsing flat configurations without folder options
fn bench_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    for endpoint_count in [10, 100, 1000].iter() {
        let cfg = create_flat_config(*endpoint_count);

        group.throughput(Throughput::Elements(*endpoint_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(endpoint_count),
            &cfg,
            |b, cfg| {
                b.iter(|| {
                    parse(black_box(cfg)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmarks serializing a parsed collection to JSON
fn bench_collection_serialization(c: &mut Criterion) {
    let collection = parse(&create_config(100)).unwrap().collection;

    c.bench_function("collection_serialization", |b| {
        b.iter(|| {
            serde_json::to_string(black_box(&collection)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_parse_nested,
    bench_parse_flat,
    bench_collection_serialization
);
criterion_main!(benches);
