use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use mux_core::Trie;

fn build_trie() -> Trie<usize> {
    let mut trie = Trie::new();
    let routes = [
        "/",
        "/about",
        "/users",
        "/users/:id",
        "/users/:id/posts",
        "/users/:id/posts/:post",
        "/users/:id/files/:path*",
        "/static/:file*",
        "/api/v1/items",
        "/api/v1/items/:item",
        "/api/v2/items/:item/tags/:tag",
    ];
    for (idx, route) in routes.iter().enumerate() {
        trie.append(route, idx).expect("bench route should append");
    }
    trie
}

fn bench_matching(c: &mut Criterion) {
    let trie = build_trie();

    c.bench_function("match_static", |b| {
        b.iter(|| trie.match_path(black_box("/api/v1/items")))
    });

    c.bench_function("match_params", |b| {
        b.iter(|| trie.match_path(black_box("/api/v2/items/42/tags/rust")))
    });

    c.bench_function("match_catch_all", |b| {
        b.iter(|| trie.match_path(black_box("/users/7/files/a/b/c/d.txt")))
    });

    c.bench_function("match_miss", |b| {
        b.iter(|| trie.match_path(black_box("/nowhere/at/all")))
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
