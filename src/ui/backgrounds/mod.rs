//! Decorative page backgrounds
//!
//! Purely visual; nothing here affects the form.

mod fluid_particles;
mod grid_pattern;

pub use fluid_particles::FluidParticles;
pub use grid_pattern::AnimatedGridPattern;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// RNG for particle and square placement. Server renders use a fixed seed.
fn seeded_rng() -> SmallRng {
    #[cfg(not(feature = "ssr"))]
    let seed = js_sys::Date::now() as u64;
    #[cfg(feature = "ssr")]
    let seed = 0;

    SmallRng::seed_from_u64(seed)
}

/// Inner size of the browser window
#[cfg(not(feature = "ssr"))]
fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
