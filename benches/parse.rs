use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nmt_dag::{parse_row_or_column, InputEncoding};

fn sorted_row(leaves: usize, encoding: &InputEncoding) -> Vec<u8> {
    let mut buf = Vec::with_capacity(leaves * encoding.share_len());
    for i in 0..leaves {
        let mut ns = vec![0u8; encoding.namespace_size];
        let idx = (i as u64).to_be_bytes();
        let n = ns.len().min(idx.len());
        let ns_len = ns.len();
        ns[ns_len - n..].copy_from_slice(&idx[idx.len() - n..]);
        buf.extend_from_slice(&ns);
        buf.extend(std::iter::repeat((i % 251) as u8).take(encoding.share_size));
    }
    buf
}

fn bench_parse(c: &mut Criterion) {
    let encoding = InputEncoding::default();
    let mut group = c.benchmark_group("parse_row_or_column");
    for leaves in [16usize, 64, 128] {
        let buf = sorted_row(leaves, &encoding);
        group.bench_with_input(BenchmarkId::from_parameter(leaves), &buf, |b, buf| {
            b.iter(|| parse_row_or_column(black_box(buf), &encoding).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
