// benches/build_variants.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use catalog_tools::{
    config::options::VariantOptions,
    csv,
    data::DataSet,
    variants::build_variants,
};

const SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Synthetic export: `n` rows, ~40 columns, a size parameter, a shared material.
fn sample(n: usize) -> DataSet {
    let mut headers: Vec<String> = [
        "[PRODUCT_CODE]", "[VARIANT_YN]", "[VARIANT_CODE]", "[MAIN_YN]", "[ACTIVE_YN]",
        "[TITLE]", "[LONG_DESCRIPTION]", "[SEO_URL]", "[EAN]", "[STOCK]", "[IMAGES]",
        "[CATEGORIES]", "[PARAMETER „Veľkosť“]", "[PARAMETER „Materiál“]",
        "[LABEL_ACTIVE_YN „Novinka“]", "[PRICE_ORIGINAL „Predvolený“]",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for i in 0..24 {
        headers.push(format!("[CUSTOM_{i}]"));
    }

    let rows = (0..n)
        .map(|i| {
            let mut r = vec![
                format!("P-{i}"), "0".into(), "".into(), "1".into(), "1".into(),
                format!("Jacket {i}"), "<p>Warm.</p>".repeat(20), format!("jacket-{i}"),
                format!("{:013}", i), (i % 7).to_string(),
                format!("img{i}.jpg;shared.jpg;img{}.jpg", i + 1),
                "Outdoor > Jackets".into(), SIZES[i % SIZES.len()].into(), "polyester".into(),
                "1".into(), "129.90".into(),
            ];
            r.extend((0..24).map(|c| format!("v{c}")));
            r
        })
        .collect();

    DataSet::new(headers, rows)
}

fn bench_build(c: &mut Criterion) {
    let opts = VariantOptions { param: Some("Veľkosť".into()), ..Default::default() };

    for n in [12usize, 500] {
        let ds = sample(n);
        c.bench_function(&format!("build_variants_{n}"), |b| {
            b.iter(|| {
                let out = build_variants(black_box(&ds), black_box(&opts)).unwrap();
                black_box(out.dataset.row_count())
            })
        });
    }

    let ds = sample(500);
    let built = build_variants(&ds, &opts).unwrap();
    c.bench_function("export_string_500", |b| {
        b.iter(|| black_box(csv::to_export_string(black_box(&built.dataset), ';').len()))
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
