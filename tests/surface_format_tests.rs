// Host-side tests for the swapchain format choice.
// The main crate is wasm-only, so we include the pure-Rust helpers directly.

#![allow(dead_code)]
mod helpers {
    include!("../src/render/helpers.rs");
}

use helpers::pick_surface_format;
use wgpu::TextureFormat as F;

#[test]
fn linear_storage_is_presented_through_an_srgb_view() {
    // what browsers report for a WebGPU canvas
    assert_eq!(
        pick_surface_format(&[F::Bgra8Unorm, F::Rgba8Unorm, F::Rgba16Float]),
        Some((F::Bgra8Unorm, F::Bgra8UnormSrgb))
    );
    assert_eq!(
        pick_surface_format(&[F::Rgba8Unorm]),
        Some((F::Rgba8Unorm, F::Rgba8UnormSrgb))
    );
}

#[test]
fn formats_with_an_srgb_twin_win_over_earlier_ones() {
    assert_eq!(
        pick_surface_format(&[F::Rgba16Float, F::Bgra8Unorm]),
        Some((F::Bgra8Unorm, F::Bgra8UnormSrgb))
    );
}

#[test]
fn srgb_storage_keeps_its_own_format() {
    assert_eq!(
        pick_surface_format(&[F::Bgra8UnormSrgb]),
        Some((F::Bgra8UnormSrgb, F::Bgra8UnormSrgb))
    );
}

#[test]
fn float_only_surfaces_fall_back_to_the_first_format() {
    assert_eq!(
        pick_surface_format(&[F::Rgba16Float]),
        Some((F::Rgba16Float, F::Rgba16Float))
    );
    assert_eq!(pick_surface_format(&[]), None);
}
