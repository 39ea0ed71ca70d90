//! Landing page component
//!
//! Hero with brand and tagline, the lead-capture card, decorative
//! backgrounds and the launch redirect overlay.

use leptos::prelude::*;
use leptos_meta::Meta;

use crate::core::FormProfile;
use crate::core::grid_pattern::GridPatternConfig;
use crate::core::particles::ParticleConfig;
use crate::ui::backgrounds::{AnimatedGridPattern, FluidParticles};
use crate::ui::icon::{Icon, icons};
use crate::ui::launch_banner::LaunchBanner;
use crate::ui::lead_form::LeadCaptureForm;

/// Particle tuning used behind the form
fn particle_config(profile: &FormProfile) -> ParticleConfig {
    ParticleConfig::default()
        .density(300.0)
        .particle_size(0.8)
        .colors(profile.theme.particle_color(), profile.theme.active_color())
        .max_blast_radius(120.0)
        .interaction_distance(30.0)
}

fn grid_config() -> GridPatternConfig {
    GridPatternConfig::default()
        .num_squares(60)
        .max_opacity(0.03)
        .duration(4.0)
}

#[component]
pub fn LandingPage(profile: FormProfile) -> impl IntoView {
    let copy = profile.copy.clone();
    let page_class = format!(
        "min-h-screen text-white relative overflow-hidden {}",
        profile.theme.page_class()
    );
    let accent_class = format!(
        "bg-clip-text text-transparent bg-gradient-to-r {}",
        profile.theme.accent_text_class()
    );
    let particles = particle_config(&profile);

    view! {
        <Meta name="description" content=copy.tagline/>

        <main class=page_class>
            <div class="absolute inset-0">
                <FluidParticles config=particles/>
                <AnimatedGridPattern
                    config=grid_config()
                    class="pointer-events-none absolute inset-x-0 inset-y-[-30%] h-[200%] skew-y-12 [mask-image:radial-gradient(1000px_circle_at_center,white,transparent)]"
                />
                <div class="absolute inset-0 bg-gradient-to-br from-slate-800/5 via-transparent to-blue-900/5"></div>
            </div>

            <section class="relative z-10 flex min-h-screen items-center justify-center px-6 py-8">
                <div class="w-full max-w-md">
                    <div class="mb-6 text-center fade-in-up">
                        <div class="mb-6 inline-flex items-center gap-3 rounded-lg border border-white/10 bg-white/5 px-6 py-3 backdrop-blur-sm">
                            <Icon name=icons::SPARKLES class="w-4 h-4"/>
                            <span class="text-sm font-medium tracking-wide text-white/70">{copy.badge}</span>
                        </div>

                        <h1 class="mb-3 text-3xl font-bold tracking-tight md:text-4xl">
                            <span class="inline-flex items-center">
                                <img src="/logo.svg" alt="" class="mr-3 inline-block h-16 w-16 object-contain"/>
                                <span class="bg-clip-text text-transparent bg-gradient-to-r from-white to-slate-300 pr-1">
                                    {copy.brand}
                                </span>
                                <span class=accent_class>{copy.brand_accent}</span>
                            </span>
                        </h1>

                        <p class="mx-auto max-w-2xl text-sm font-light leading-relaxed text-slate-300">
                            {copy.tagline}
                        </p>
                    </div>

                    <div class="max-h-[60vh] overflow-y-auto rounded-2xl border border-white/10 bg-white/[0.03] p-6 shadow-xl backdrop-blur-xl">
                        <div class="mb-6 text-center">
                            <h2 class="mb-3 text-2xl font-semibold text-white">{copy.heading}</h2>
                            <p class="text-sm leading-relaxed text-slate-400">{copy.subheading}</p>
                        </div>
                        <LeadCaptureForm profile=profile/>
                    </div>
                </div>
            </section>

            <LaunchBanner/>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Theme;

    #[test]
    fn test_particle_colors_follow_theme() {
        let config = particle_config(&FormProfile::business_inquiry());
        assert_eq!(config.particle_color, Theme::Slate.particle_color());
        assert_eq!(config.active_color, "#3b82f6");
        assert_eq!(config.max_blast_radius, 120.0);
    }

    #[test]
    fn test_grid_is_faint() {
        let config = grid_config();
        assert_eq!(config.num_squares, 60);
        assert!(config.max_opacity < 0.1);
    }
}
