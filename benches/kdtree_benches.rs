use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kd_tree_2d::{KdTree, Point, Rect};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn get_rand() -> impl rand::Rng {
    SmallRng::seed_from_u64(0xdeadbeef)
}

fn rand_point(rng: &mut impl Rng) -> Point {
    Point::new(rng.gen_range(0.0, 1.0), rng.gen_range(0.0, 1.0))
}

fn make_tree(rng: &mut impl Rng, size: usize) -> KdTree {
    let mut tree = KdTree::unit_square();
    tree.extend((0..size).map(|_| rand_point(rng)));
    tree
}

fn contains_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree contains_rand");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, move |b, &size| {
            let mut rng = get_rand();
            let tree = make_tree(&mut rng, size);

            b.iter(|| {
                let p = rand_point(&mut rng);
                tree.contains(&p)
            })
        });
    }
    group.finish();
}

fn range_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree range small");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let tree = make_tree(&mut rng, size);

            let half = 0.02;
            let mut res = Vec::new();
            b.iter(|| {
                let p = rand_point(&mut rng);
                let rect = Rect::new(p[0] - half, p[1] - half, p[0] + half, p[1] + half);
                res.clear();
                tree.find_in_range(&rect, &mut res);
                black_box(&res);
            });
        });
    }
    group.finish();
}

fn range_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree range large");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let tree = make_tree(&mut rng, size);

            let half = 0.25;
            let mut res = Vec::new();
            b.iter(|| {
                let p = rand_point(&mut rng);
                let rect = Rect::new(p[0] - half, p[1] - half, p[0] + half, p[1] + half);
                res.clear();
                tree.find_in_range(&rect, &mut res);
                black_box(&res);
            });
        });
    }
    group.finish();
}

fn nearest_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree nearest random");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let tree = make_tree(&mut rng, size);

            b.iter(|| {
                let p = rand_point(&mut rng);
                tree.nearest(&p)
            });
        });
    }
    group.finish();
}

fn nearest_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree nearest_batch 1024 queries");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let tree = make_tree(&mut rng, size);
            let queries = (0..1024).map(|_| rand_point(&mut rng)).collect::<Vec<_>>();

            b.iter(|| black_box(tree.nearest_batch(&queries)));
        });
    }
    group.finish();
}

fn random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree random_insert");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let mut tree = make_tree(&mut rng, size);

            b.iter(|| {
                let p = rand_point(&mut rng);
                tree.insert(p).unwrap()
            });
        });
    }
    group.finish();
}

fn make_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree make_tree");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();

            b.iter(|| make_tree(&mut rng, size));
        });
    }
    group.finish();
}

fn nearest_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("KdTree nearest on a degenerate chain");
    for size in 8..12 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let tree = (0..size)
                .map(|i| {
                    let v = i as f64 / size as f64;
                    Point::new(v, v)
                })
                .collect::<KdTree>();

            b.iter(|| {
                let p = rand_point(&mut rng);
                tree.nearest(&p)
            });
        });
    }
    group.finish();
}

criterion_group!(
    kdtree_benches,
    contains_rand,
    range_small,
    range_large,
    nearest_rand,
    nearest_batch,
    random_insert,
    make_table,
    nearest_chain,
);

criterion_main!(kdtree_benches);
