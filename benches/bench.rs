use criterion::{black_box, criterion_group, criterion_main, Criterion};
use getfields::{loader, write_fields};
use serde_json::Value;

const JSON: &str = r#"[{"version":1,"url":"https://www.elastic.co/guide/en/ecs/current/index.html","ecs":{"version":"1.x"},"fields":{"@timestamp":{"type":"datetime","required":true,"index":0,"url":"https://www.elastic.co/guide/en/ecs/current/ecs-base.html","comment":["Field order, as specified by 'index', is RECOMMENDED.","ECS loggers must implement field order unless the logging framework makes that impossible."]},"log.level":{"type":"string","required":true,"index":1,"top_level_field":true,"url":"https://www.elastic.co/guide/en/ecs/current/ecs-log.html"},"message":{"type":"string","required":false,"index":2,"url":"https://www.elastic.co/guide/en/ecs/current/ecs-base.html"},"service.name":{"type":"string","required":false,"url":"https://www.elastic.co/guide/en/ecs/current/ecs-service.html","comment":["Configurable by users.","When an APM agent is active, it should auto-configure this field if not already set."]}}},{"version":2}]"#;

fn bench_load(s: &str) -> Value {
    loader::from_str(s).unwrap()
}

fn bench_print(v: &Value, fields: &[&str]) -> Vec<u8> {
    let mut out = Vec::new();
    write_fields(v, fields, &mut out).unwrap();
    out
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("load", |b| b.iter(|| bench_load(black_box(JSON))));

    let v = loader::from_str(JSON).unwrap();
    let fields = ["version", "url", "ecs", "fields"];
    c.bench_function("print_fields", |b| {
        b.iter(|| bench_print(black_box(&v), black_box(&fields)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
