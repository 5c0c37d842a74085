use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parcelwire_core::{PartyInput, ShipmentRequest, ShipmentRequestBuilder, ShipmentRequestMapper};

fn shipment_with_packages(count: usize) -> ShipmentRequest {
    let ready_at = chrono::DateTime::parse_from_rfc3339("2025-03-14T10:00:00+01:00").unwrap();
    let mut builder = ShipmentRequestBuilder::new();
    builder
        .set_ready_at(ready_at)
        .set_payer_account_number("123456789")
        .set_shipper(
            PartyInput::new("DE", "10115", "Berlin", vec!["Main Street 1".into()])
                .with_contact("Ada Lovelace", "Engines Ltd", "+49 30 0000"),
        )
        .set_recipient(
            PartyInput::new("US", "10001", "New York", vec!["Broadway 1".into(), "Suite 5".into()])
                .with_contact("Charles Babbage", "Difference Inc", "+1 212 0000"),
        )
        .set_insurance(100.0, "USD")
        .set_dry_ice("UN1845", 2.5)
        .set_waybill_document_requested(true);

    for index in 0..count {
        builder.add_package(1500.0, "g", 300.0, 200.0, 100.0, "mm", format!("order-{index}"));
    }

    builder.build().unwrap()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for count in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(shipment_with_packages(count)))
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mapper = ShipmentRequestMapper::new();
    let mut group = c.benchmark_group("map");
    for count in [1usize, 10, 100] {
        let request = shipment_with_packages(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &request, |b, request| {
            b.iter(|| black_box(mapper.map(request).unwrap()))
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let wire = ShipmentRequestMapper::new()
        .map(&shipment_with_packages(10))
        .unwrap();
    c.bench_function("serialize_shipment", |b| {
        b.iter(|| black_box(serde_json::to_string(&wire).unwrap()))
    });
}

criterion_group!(benches, bench_build, bench_map, bench_serialize);
criterion_main!(benches);
