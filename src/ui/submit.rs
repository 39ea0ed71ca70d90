//! Browser client for the subscribe endpoint

use crate::core::{LeadForm, SubmitFailure};

pub const SUBSCRIBE_URL: &str = "/api/subscribe";

/// Send one lead. One request per call, no retries.
#[cfg(not(feature = "ssr"))]
pub async fn submit_lead(form: &LeadForm) -> Result<(), SubmitFailure> {
    use gloo_net::http::Request;

    let request = Request::post(SUBSCRIBE_URL)
        .header("Content-Type", "application/json")
        .json(form)
        .map_err(|_| SubmitFailure::Generic)?;

    match request.send().await {
        Ok(response) => SubmitFailure::from_status(response.status()),
        Err(e) => {
            leptos::logging::warn!("Subscribe request failed: {}", e);
            Err(SubmitFailure::Generic)
        }
    }
}

/// Event handlers never run during server rendering.
#[cfg(feature = "ssr")]
pub async fn submit_lead(_form: &LeadForm) -> Result<(), SubmitFailure> {
    Err(SubmitFailure::Generic)
}
