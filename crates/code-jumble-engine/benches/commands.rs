use code_jumble_engine::editing::{BlockId, Cmd, Jumble};
use criterion::{Criterion, criterion_group, criterion_main};

fn big_jumble(blocks: i64) -> Jumble {
    let workspace: Vec<BlockId> = (0..blocks / 2).map(BlockId).collect();
    let trash: Vec<BlockId> = (blocks / 2..blocks).map(BlockId).collect();
    Jumble::new(&workspace, &trash).unwrap()
}

fn bench_command_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");
    group.sample_size(10);

    let jumble = big_jumble(200);

    group.bench_function("full_drag_gesture", |b| {
        let mut j = jumble.clone();
        b.iter(|| {
            j.apply(Cmd::DragStart {
                block: std::hint::black_box(BlockId(150)),
            });
            j.apply(Cmd::DragEnter { block: BlockId(10) });
            let patch = j.apply(Cmd::Drop {
                target: BlockId(10),
            });
            j.apply(Cmd::DragEnd);
            std::hint::black_box(patch);
        });
    });

    group.bench_function("change_indent", |b| {
        let mut j = jumble.clone();
        let mut delta = 1i8;
        b.iter(|| {
            let patch = j.apply(Cmd::ChangeIndent {
                block: std::hint::black_box(BlockId(20)),
                delta,
            });
            delta = -delta;
            std::hint::black_box(patch);
        });
    });

    group.bench_function("snapshot", |b| {
        let j = jumble.clone();
        b.iter(|| std::hint::black_box(j.snapshot()));
    });

    group.finish();
}

criterion_group!(benches, bench_command_operations);
criterion_main!(benches);
