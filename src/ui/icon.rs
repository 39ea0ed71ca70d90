use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const USER: &str = "user";
    pub const MAIL: &str = "mail";
    pub const BUILDING: &str = "building";
    pub const DOLLAR: &str = "dollar";
    pub const TRENDING_UP: &str = "trending-up";
    pub const SEND: &str = "send";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const SPARKLES: &str = "sparkles";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const COMPASS: &str = "compass";

    /// Icon shown inside a lead form input
    pub fn for_field(field: crate::core::LeadField) -> &'static str {
        use crate::core::LeadField;
        match field {
            LeadField::Name => USER,
            LeadField::Email => MAIL,
            LeadField::CompanyName => BUILDING,
            LeadField::RevenueMaking | LeadField::Mrr => DOLLAR,
            LeadField::InvestmentRaised | LeadField::InvestmentAmount => TRENDING_UP,
        }
    }
}
