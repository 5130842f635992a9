use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_hstore::{
    from_str, parse, parse_with_options, stringify, to_string, HstoreMap, HstoreOptions, Value,
};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn flat_map(size: u32) -> Value {
    let map: HstoreMap = (0..size)
        .map(|i| (format!("key{}", i), Value::from(format!("value \"{}\"", i))))
        .collect();
    Value::Map(map)
}

fn nested_map(depth: usize) -> Value {
    let mut value = Value::from("leaf");
    for level in 0..depth {
        let mut map = HstoreMap::new();
        map.insert(format!("level{}", level), value);
        map.insert("n".to_string(), Value::from(level as u32));
        value = Value::Map(map);
    }
    value
}

fn benchmark_stringify_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify_flat");

    for size in [10, 100, 1000].iter() {
        let value = flat_map(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| stringify(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    for size in [10, 100, 1000].iter() {
        let text = stringify(&flat_map(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");
    let options = HstoreOptions::decorated();

    for depth in [4, 32, 256].iter() {
        let text = serde_hstore::stringify_with_options(&nested_map(*depth), options);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &text, |b, text| {
            b.iter(|| parse_with_options(black_box(text), options))
        });
    }
    group.finish();
}

fn benchmark_typed(c: &mut Criterion) {
    let user = sample_user();
    let text = to_string(&user).unwrap();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(&text)))
    });
}

fn benchmark_product_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_products");

    for size in [10, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();
        let text = to_string(&products).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str::<Vec<Product>>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = sample_user();
    let hstore_str = to_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("hstore_deserialize", |b| {
        b.iter(|| from_str::<User>(black_box(&hstore_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_stringify_flat,
    benchmark_parse_flat,
    benchmark_parse_nested,
    benchmark_typed,
    benchmark_product_array,
    benchmark_comparison_with_json
);
criterion_main!(benches);
