use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexa7::*;

fn sf_cell(res: i32) -> H3Index {
  let sf = GeoCoord {
    lat: degs_to_rads(37.7749),
    lon: degs_to_rads(-122.4194),
  };
  geo_to_h3(&sf, res).unwrap()
}

fn bench_k_ring(c: &mut Criterion) {
  let origin = sf_cell(9);
  let mut group = c.benchmark_group("k_ring");
  for k in [1, 3, 10] {
    let size = max_kring_size(k) as usize;
    group.bench_with_input(format!("k_{}", k), &k, |b, &k| {
      let mut out = vec![H3_NULL; size];
      b.iter(|| {
        out.fill(H3_NULL);
        k_ring(black_box(origin), black_box(k), &mut out)
      });
    });
  }
  group.finish();
}

fn bench_k_ring_pentagon(c: &mut Criterion) {
  // forces the BFS fallback
  let pentagon = string_to_h3("821c07fffffffff").unwrap();
  let size = max_kring_size(3) as usize;
  c.bench_function("k_ring_pentagon_k3", |b| {
    let mut out = vec![H3_NULL; size];
    b.iter(|| {
      out.fill(H3_NULL);
      k_ring(black_box(pentagon), black_box(3), &mut out)
    });
  });
}

fn bench_hex_ring(c: &mut Criterion) {
  let origin = sf_cell(9);
  let mut group = c.benchmark_group("hex_ring");
  for k in [1, 5] {
    group.bench_with_input(format!("k_{}", k), &k, |b, &k| {
      let mut out = vec![H3_NULL; 6 * k as usize];
      b.iter(|| hex_ring(black_box(origin), black_box(k), &mut out));
    });
  }
  group.finish();
}

fn bench_polyfill(c: &mut Criterion) {
  let polygon = GeoPolygon {
    geofence: Geofence {
      verts: vec![
        GeoCoord { lat: degs_to_rads(37.813), lon: degs_to_rads(-122.408) },
        GeoCoord { lat: degs_to_rads(37.786), lon: degs_to_rads(-122.380) },
        GeoCoord { lat: degs_to_rads(37.719), lon: degs_to_rads(-122.354) },
        GeoCoord { lat: degs_to_rads(37.707), lon: degs_to_rads(-122.512) },
        GeoCoord { lat: degs_to_rads(37.783), lon: degs_to_rads(-122.524) },
        GeoCoord { lat: degs_to_rads(37.815), lon: degs_to_rads(-122.479) },
      ],
    },
    holes: vec![],
  };
  let size = max_polyfill_size(&polygon, 9).unwrap() as usize;
  c.bench_function("polyfill_sf_res9", |b| {
    let mut out = vec![H3_NULL; size];
    b.iter(|| {
      out.fill(H3_NULL);
      polyfill(black_box(&polygon), black_box(9), &mut out)
    });
  });
}

criterion_group!(benches, bench_k_ring, bench_k_ring_pentagon, bench_hex_ring, bench_polyfill);
criterion_main!(benches);
