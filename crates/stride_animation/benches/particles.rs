use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stride_animation::{ParticleConfig, ParticleSystem};
use stride_core::{RecordingContext, Size};

fn bench_particles(c: &mut Criterion) {
    let mut group = c.benchmark_group("particles");

    for count in [20usize, 200, 2000] {
        let config = ParticleConfig::default().with_count(count).with_seed(1);

        let mut system = match ParticleSystem::new(
            config,
            RecordingContext::new(Size::new(300.0, 300.0)),
        ) {
            Ok(system) => system,
            Err(e) => panic!("invalid bench config: {e}"),
        };
        group.bench_function(format!("step_{count}"), |b| {
            b.iter(|| {
                black_box(system.step());
                black_box(system.surface_mut().take_commands());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_particles);
criterion_main!(benches);
