//! Benchmarks for layout tree mutation and traversal
//!
//! Run with: cargo bench --bench layout

use treedock::model::{
    Direction, DragInfo, LayoutDocument, LayoutTree, Leaf, ModelStore, Orientation,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Flat row of `count` panels named p0, p1, ...
fn row(count: usize) -> LayoutTree {
    let doc = LayoutDocument::branch(
        (0..count)
            .map(|i| LayoutDocument::leaf(format!("p{}", i)))
            .collect(),
    );
    let mut tree = LayoutTree::from_document(&doc, Orientation::Horizontal);
    tree.activate_all(&mut ModelStore::new());
    tree
}

/// Alternating nested splits `depth` levels deep
fn nested(depth: usize) -> LayoutTree {
    let mut doc = LayoutDocument::leaf("p0");
    for i in 1..=depth {
        doc = LayoutDocument::branch(vec![doc, LayoutDocument::leaf(format!("p{}", i))]);
    }
    let mut tree = LayoutTree::from_document(&doc, Orientation::Horizontal);
    tree.activate_all(&mut ModelStore::new());
    tree
}

// ============================================================================
// Drop benchmarks
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn drop_new_panel_along_axis(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| {
            let mut tree = row(count);
            let target = tree.find_leaf("p0").unwrap();
            let source = tree.new_detached_leaf(Leaf::new("new"));
            (tree, target, source)
        })
        .bench_local_values(|(mut tree, target, source)| {
            divan::black_box(tree.drop_panel(target, DragInfo::new(source, Direction::East)))
        });
}

#[divan::bench(args = [4, 16, 64])]
fn drop_new_panel_across_axis(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| {
            let mut tree = row(count);
            let target = tree.find_leaf("p0").unwrap();
            let source = tree.new_detached_leaf(Leaf::new("new"));
            (tree, target, source)
        })
        .bench_local_values(|(mut tree, target, source)| {
            divan::black_box(tree.drop_panel(target, DragInfo::new(source, Direction::North)))
        });
}

#[divan::bench(args = [4, 16, 64])]
fn move_panel_between_levels(bencher: divan::Bencher, depth: usize) {
    bencher
        .with_inputs(|| {
            let tree = nested(depth);
            let source = tree.find_leaf("p0").unwrap();
            let target = tree.find_leaf(&format!("p{}", depth)).unwrap();
            (tree, target, source)
        })
        .bench_local_values(|(mut tree, target, source)| {
            divan::black_box(tree.drop_panel(target, DragInfo::new(source, Direction::South)))
        });
}

// ============================================================================
// Close benchmarks
// ============================================================================

#[divan::bench(args = [16, 64])]
fn close_all_but_one(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| row(count))
        .bench_local_values(|mut tree| {
            while let Some(&first) = tree.leaves().first() {
                if !tree.close_panel(first).unwrap_or(false) {
                    break;
                }
            }
            divan::black_box(tree)
        });
}

// ============================================================================
// Traversal benchmarks
// ============================================================================

#[divan::bench(args = [16, 64, 256])]
fn validate_nested(bencher: divan::Bencher, depth: usize) {
    let tree = nested(depth);
    bencher.bench_local(|| divan::black_box(tree.validate()));
}

#[divan::bench(args = [16, 64, 256])]
fn render_outline_nested(bencher: divan::Bencher, depth: usize) {
    let tree = nested(depth);
    bencher.bench_local(|| divan::black_box(tree.render_outline()));
}
