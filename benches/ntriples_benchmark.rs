use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tpf_client::rdf::{decode_literal, is_control_triple, parse_triples};

fn fragment_body(size: usize) -> String {
    let mut body = String::new();
    body.push_str("<http://x/tpf?page=1> <http://www.w3.org/ns/hydra/core#nextPage> <http://x/tpf?page=2> .\n");
    for i in 0..size {
        body.push_str(&format!(
            "<http://x/person/{i}> <http://www.w3.org/2000/01/rdf-schema#label> \"Person number {i}\"@en-US .\n"
        ));
        body.push_str(&format!(
            "<http://x/person/{i}> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://xmlns.com/foaf/0.1/Person> .\n"
        ));
    }
    body
}

/// Benchmark parsing fragment pages of increasing size
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_triples");

    for size in [100, 1000, 10_000].iter() {
        let body = fragment_body(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| parse_triples(body));
        });
    }
    group.finish();
}

/// Benchmark control filtering and literal decoding over a parsed page
fn bench_filter_decode(c: &mut Criterion) {
    let triples = parse_triples(&fragment_body(1000));

    c.bench_function("filter_and_decode_1000", |b| {
        b.iter(|| {
            triples
                .iter()
                .filter(|t| !is_control_triple(t))
                .map(|t| decode_literal(&t.object))
                .count()
        });
    });
}

criterion_group!(benches, bench_parse, bench_filter_decode);
criterion_main!(benches);
