use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softraster::math::vec2::Vec2;
use softraster::math::vec3::Vec3;
use softraster::math::vec4::Vec4;
use softraster::render::{FrameBuffer, ScanlineRasterizer, Triangle};
use softraster::{Engine, EngineConfig, RenderMode, Texture};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

const UVS: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)];

fn create_buffers() -> (Vec<u32>, Vec<f32>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![0u32; size], vec![1.0f32; size])
}

fn triangle(points: [(f32, f32); 3]) -> Triangle {
    Triangle::new(points.map(|(x, y)| Vec4::new(x, y, 0.5, 5.0)), UVS, 0xFFFF0000)
}

fn small_triangle() -> Triangle {
    triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)])
}

fn medium_triangle() -> Triangle {
    triangle([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)])
}

fn large_triangle() -> Triangle {
    triangle([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)])
}

fn checker_texture() -> Texture {
    let data = (0..64 * 64)
        .map(|i| {
            if (i / 64 / 8 + i % 64 / 8) % 2 == 0 {
                0xFFFFFFFF
            } else {
                0xFF202020
            }
        })
        .collect();
    Texture::new(64, 64, data).unwrap()
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let rasterizer = ScanlineRasterizer::new();
    let texture = checker_texture();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("flat", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_triangle(black_box(tri), &mut fb);
            });
        });

        group.bench_with_input(BenchmarkId::new("textured", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(1.0);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_textured_triangle(black_box(tri), &texture, &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let rasterizer = ScanlineRasterizer::new();

    // A grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                triangle([(x, y), (x + 35.0, y), (x + 17.5, y + 25.0)])
            })
        })
        .collect();

    group.bench_function("flat_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                rasterizer.fill_triangle(black_box(tri), &mut fb);
            }
        });
    });

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for mode in [RenderMode::FilledWireframe, RenderMode::Textured] {
        let config = EngineConfig::default()
            .with_resolution(BUFFER_WIDTH, BUFFER_HEIGHT)
            .with_camera_position(Vec3::new(0.0, 0.0, -5.0));
        let mut engine = Engine::new(config).unwrap();
        engine.set_texture(Some(checker_texture()));
        engine.settings_mut().mode = mode;
        engine
            .mesh_mut()
            .transform_mut()
            .set_rotation(Vec3::new(30.0, 45.0, 0.0));

        group.bench_function(BenchmarkId::new("cube", mode.to_string()), |b| {
            b.iter(|| {
                engine.update();
                engine.render();
                black_box(engine.frame_buffer());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_frame
);
criterion_main!(benches);
