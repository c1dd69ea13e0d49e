// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rent_scout::dataset::{parse_dataset, Dataset};
use rent_scout::extract;
use rent_scout::match_line::LineSelection;

// Synthetic dataset: a few hundred rows across three lines, with the usual
// mix of decorated time strings and missing fields.
fn build_dataset(rows_per_line: usize) -> Dataset {
    let lines = [("東京メトロ", "日比谷線"), ("JR", "山手線"), ("西武鉄道", "池袋線")];
    let mut out = String::from("[");
    let mut first = true;
    for (railway, line) in lines {
        for i in 0..rows_per_line {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&format!(
                concat!(
                    "{{\"('{r}', '{l}', '駅')\": \"駅{i}\",",
                    "\"('{r}', '{l}', '家賃相場(万円)')\": {rent},",
                    "\"('{r}', '{l}', '神谷町までの時間(分)')\": \"{t}分\",",
                    "\"('{r}', '{l}', '乗換回数')\": {x}}}"
                ),
                r = railway,
                l = line,
                i = i,
                rent = 8.0 + (i % 10) as f64 * 0.7,
                t = 5 + i % 40,
                x = i % 4,
            ));
        }
    }
    out.push(']');
    parse_dataset(&out).expect("synthetic dataset parses")
}

fn bench_extract(c: &mut Criterion) {
    let ds = build_dataset(300);
    let sel = LineSelection::new("東京メトロ", "東京メトロ日比谷線");

    c.bench_function("extract_line", |b| {
        b.iter(|| {
            let series = extract::extract(black_box(&ds), black_box(&sel));
            black_box(series.len())
        })
    });

    c.bench_function("station_names", |b| {
        b.iter(|| {
            let names = extract::station_names(black_box(&ds), black_box(&sel));
            black_box(names.len())
        })
    });

    c.bench_function("station_details_last", |b| {
        b.iter(|| {
            let d = extract::station_details(black_box(&ds), black_box(&sel), black_box("駅299"));
            black_box(d.rent)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
