//! "We're live" overlay that counts down and sends visitors to the product site

use leptos::prelude::*;

use crate::core::launch::{Countdown, DEFAULT_COUNTDOWN_SECS, PRODUCT_URL};
use crate::ui::icon::{Icon, icons};

fn navigate_to(url: &'static str) {
    #[cfg(not(feature = "ssr"))]
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            leptos::logging::warn!("Redirect failed: {:?}", e);
        }
    }
    #[cfg(feature = "ssr")]
    let _ = url;
}

#[component]
pub fn LaunchBanner(
    #[prop(default = DEFAULT_COUNTDOWN_SECS)] seconds: u32,
    #[prop(default = PRODUCT_URL)] url: &'static str,
) -> impl IntoView {
    let countdown = RwSignal::new(Countdown::new(seconds));

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::launch::CountdownStep;
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1_000, move || {
            let step = countdown.try_update(|c| (!c.is_finished()).then(|| c.tick()));
            if let Some(Some(CountdownStep::Redirect)) = step {
                navigate_to(url);
            }
        });

        // Dropping the interval cancels it
        let timer = StoredValue::new_local(Some(interval));
        on_cleanup(move || {
            timer.try_update_value(|t| t.take());
        });
    }

    let on_skip = move |_| {
        countdown.update(|c| {
            c.skip();
        });
        navigate_to(url);
    };

    let progress_style = format!(
        "animation: launch-progress {}s linear forwards;",
        seconds
    );

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-md fade-in-up" role="dialog" aria-modal="true">
            <div class="relative mx-4 w-full max-w-lg">
                <div class="relative overflow-hidden rounded-3xl border border-white/15 bg-white/5 p-8 shadow-2xl backdrop-blur-xl">
                    <div class="relative z-10 text-center">
                        <div class="mb-6 inline-flex">
                            <Icon name=icons::CHECK_CIRCLE class="w-16 h-16"/>
                        </div>

                        <h2 class="mb-3 bg-gradient-to-r from-white via-purple-100 to-violet-200 bg-clip-text text-3xl font-bold text-transparent">
                            "We're Live!"
                        </h2>
                        <p class="mb-6 leading-relaxed text-white/80">
                            "CoXistAI has officially launched! You're being redirected to our main website."
                        </p>

                        <div class="mb-6">
                            <div class="mb-2 text-sm text-white/60">"Redirecting in:"</div>
                            <div class="mb-4 text-5xl font-bold text-yellow-300" aria-live="polite">
                                {move || countdown.with(|c| c.remaining())}
                            </div>
                            <div class="relative h-2 overflow-hidden rounded-full bg-white/10">
                                <div
                                    class="h-full rounded-full bg-gradient-to-r from-yellow-400 via-orange-400 to-red-400"
                                    style=progress_style
                                ></div>
                            </div>
                        </div>

                        <button
                            type="button"
                            class="inline-flex items-center gap-2 rounded-xl bg-gradient-to-r from-purple-500 to-violet-600 px-6 py-3 font-medium text-white shadow-lg transition-all duration-300 hover:scale-105 hover:from-purple-600 hover:to-violet-700"
                            on:click=on_skip
                        >
                            <Icon name=icons::EXTERNAL_LINK class="w-4 h-4"/>
                            <span>"Skip & Go Now"</span>
                        </button>

                        <div class="absolute right-0 top-0 animate-spin [animation-duration:3s]">
                            <Icon name=icons::SPARKLES class="w-5 h-5"/>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
