use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixel_format_convert::{raw::kernel_for, Conversion};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    // 2048x2048 texture, the usual size of a large atlas.
    const WIDTH: usize = 2048;
    const HEIGHT: usize = 2048;
    let num_pixels = WIDTH * HEIGHT;

    let mut group = c.benchmark_group("Pixel Format Conversion (2048x2048)");

    for &conversion in Conversion::all_values() {
        let input_size = conversion.source().bytes_per_pixel() * num_pixels;
        let output_size = conversion.destination().bytes_per_pixel() * num_pixels;

        let mut input = allocate_align_64(input_size);
        let mut output = allocate_align_64(output_size);

        // Fill the source with a non-uniform pattern so no channel is constant.
        unsafe {
            let input_ptr = input.as_mut_ptr();
            for i in 0..input_size {
                *input_ptr.add(i) = (i.wrapping_mul(37) ^ (i >> 7)) as u8;
            }
        }

        let kernel = kernel_for(conversion);
        group.throughput(Throughput::Bytes(input_size as u64));
        group.bench_function(BenchmarkId::new("raw", format!("{conversion:?}")), |b| {
            b.iter(|| unsafe { kernel(input.as_ptr(), output.as_mut_ptr(), num_pixels) })
        });
    }

    let mut buffer = allocate_align_64(2 * num_pixels);
    unsafe { core::ptr::write_bytes(buffer.as_mut_ptr(), 0x5A, 2 * num_pixels) };
    group.throughput(Throughput::Bytes((2 * num_pixels) as u64));
    group.bench_function("rgb565_to_rgba5551_in_place", |b| {
        b.iter(|| unsafe {
            pixel_format_convert::raw::rgb565_to_rgba5551_in_place(buffer.as_mut_ptr(), num_pixels)
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
