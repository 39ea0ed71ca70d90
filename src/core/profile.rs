//! Form profiles
//!
//! One lead-capture component serves every landing variant. A [`FormProfile`]
//! selects which qualification fields are shown and required, the copy, the
//! colour theme and the auto-reset delays.

use std::time::Duration;

use crate::core::lead::LeadField;

/// Colour theme of the landing page and its decorative background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Slate,
    Violet,
    Emerald,
}

impl Theme {
    /// Resting colour of canvas particles
    pub fn particle_color(&self) -> &'static str {
        match self {
            Theme::Slate => "#475569",
            Theme::Violet => "#4c4466",
            Theme::Emerald => "#3f5b52",
        }
    }

    /// Colour of particles near the pointer
    pub fn active_color(&self) -> &'static str {
        match self {
            Theme::Slate => "#3b82f6",
            Theme::Violet => "#8b5cf6",
            Theme::Emerald => "#10b981",
        }
    }

    /// Page background classes
    pub fn page_class(&self) -> &'static str {
        match self {
            Theme::Slate => "bg-slate-900",
            Theme::Violet => "bg-zinc-950",
            Theme::Emerald => "bg-neutral-950",
        }
    }

    /// Primary button classes
    pub fn button_class(&self) -> &'static str {
        match self {
            Theme::Slate => "bg-blue-600 hover:bg-blue-500 focus:ring-blue-400",
            Theme::Violet => "bg-violet-600 hover:bg-violet-500 focus:ring-violet-400",
            Theme::Emerald => "bg-emerald-600 hover:bg-emerald-500 focus:ring-emerald-400",
        }
    }

    /// Accent text gradient used for the brand suffix
    pub fn accent_text_class(&self) -> &'static str {
        match self {
            Theme::Slate => "from-blue-400 via-blue-500 to-blue-600",
            Theme::Violet => "from-violet-400 via-fuchsia-500 to-violet-600",
            Theme::Emerald => "from-emerald-300 via-emerald-500 to-teal-500",
        }
    }
}

/// User-facing strings of a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub badge: &'static str,
    pub brand: &'static str,
    pub brand_accent: &'static str,
    pub tagline: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub name_label: &'static str,
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
    pub success_title: &'static str,
    pub success_message: &'static str,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            badge: "ENTERPRISE AI SOLUTIONS",
            brand: "CoXist",
            brand_accent: "AI",
            tagline: "Transform your business with intelligent automation and data-driven insights. \
                      Join forward-thinking companies leveraging AI for competitive advantage.",
            heading: "Business Partnership Inquiry",
            subheading: "Share your company details and we'll explore how our AI solutions \
                         can drive your business forward.",
            name_label: "Founder Name",
            submit_label: "Submit Inquiry",
            submitting_label: "Submitting...",
            success_title: "Thank You!",
            success_message: "We've received your inquiry. Our team will be in touch shortly.",
        }
    }
}

/// Configuration of one landing/waitlist variant
#[derive(Debug, Clone, PartialEq)]
pub struct FormProfile {
    /// Optional fields shown, in display order
    shown: Vec<LeadField>,
    /// Optional fields that must be filled
    required: Vec<LeadField>,
    pub copy: FormCopy,
    pub theme: Theme,
    /// How long the success view stays before the form resets
    pub success_reset: Duration,
    /// How long a submit error stays attached to the form
    pub error_reset: Duration,
}

impl Default for FormProfile {
    fn default() -> Self {
        Self {
            shown: Vec::new(),
            required: Vec::new(),
            copy: FormCopy::default(),
            theme: Theme::default(),
            success_reset: Duration::from_secs(3),
            error_reset: Duration::from_secs(5),
        }
    }
}

impl FormProfile {
    /// Partnership inquiry form: every qualification field, company
    /// name and revenue status required.
    pub fn business_inquiry() -> Self {
        Self::default()
            .require(LeadField::CompanyName)
            .require(LeadField::RevenueMaking)
            .show(LeadField::Mrr)
            .show(LeadField::InvestmentRaised)
            .show(LeadField::InvestmentAmount)
            .success_reset(Duration::from_secs(3))
    }

    /// Founder waitlist: company and revenue status only.
    pub fn founder_waitlist() -> Self {
        Self::default()
            .require(LeadField::CompanyName)
            .require(LeadField::RevenueMaking)
            .show(LeadField::Mrr)
            .copy(FormCopy {
                badge: "FOUNDER EARLY ACCESS",
                heading: "Join the Founder Waitlist",
                subheading: "Tell us about your company and we'll reach out when your spot opens.",
                submit_label: "Join Waitlist",
                submitting_label: "Joining...",
                success_title: "You're on the list!",
                success_message: "We'll email you as soon as early access opens.",
                ..FormCopy::default()
            })
            .theme(Theme::Violet)
            .success_reset(Duration::from_secs(4))
    }

    /// Plain waitlist: name and email.
    pub fn simple_waitlist() -> Self {
        Self::default()
            .copy(FormCopy {
                badge: "COMING SOON",
                heading: "Get Early Access",
                subheading: "Be the first to know when we launch.",
                name_label: "Full Name",
                submit_label: "Notify Me",
                submitting_label: "Joining...",
                success_title: "You're in!",
                success_message: "Thanks for joining. We'll be in touch soon.",
                ..FormCopy::default()
            })
            .theme(Theme::Emerald)
            .success_reset(Duration::from_secs(5))
    }

    /// Show an optional field
    pub fn show(mut self, field: LeadField) -> Self {
        if !field.is_core() && !self.shown.contains(&field) {
            self.shown.push(field);
        }
        self
    }

    /// Show an optional field and make it mandatory
    pub fn require(mut self, field: LeadField) -> Self {
        self = self.show(field);
        if !field.is_core() && !self.required.contains(&field) {
            self.required.push(field);
        }
        self
    }

    /// Replace the copy
    pub fn copy(mut self, copy: FormCopy) -> Self {
        self.copy = copy;
        self
    }

    /// Set the colour theme
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the success view duration
    pub fn success_reset(mut self, delay: Duration) -> Self {
        self.success_reset = delay;
        self
    }

    /// Set the error display duration
    pub fn error_reset(mut self, delay: Duration) -> Self {
        self.error_reset = delay;
        self
    }

    /// Whether the field is rendered. Name and email always are.
    pub fn shows(&self, field: LeadField) -> bool {
        field.is_core() || self.shown.contains(&field)
    }

    /// Whether the field must be non-empty regardless of other answers.
    pub fn requires(&self, field: LeadField) -> bool {
        field.is_core() || self.required.contains(&field)
    }

    /// Fields rendered by this profile, core fields first
    pub fn fields(&self) -> impl Iterator<Item = LeadField> + '_ {
        LeadField::ALL.into_iter().filter(|f| self.shows(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_shows_only_core_fields() {
        let profile = FormProfile::default();
        let fields: Vec<_> = profile.fields().collect();
        assert_eq!(fields, vec![LeadField::Name, LeadField::Email]);
        assert!(profile.requires(LeadField::Name));
        assert!(profile.requires(LeadField::Email));
    }

    #[test]
    fn test_business_inquiry_profile() {
        let profile = FormProfile::business_inquiry();

        assert_eq!(profile.fields().count(), 7);
        assert!(profile.requires(LeadField::CompanyName));
        assert!(profile.requires(LeadField::RevenueMaking));
        assert!(!profile.requires(LeadField::Mrr));
        assert!(!profile.requires(LeadField::InvestmentRaised));
        assert_eq!(profile.success_reset, Duration::from_secs(3));
    }

    #[test]
    fn test_presets_disagree_on_reset_delay() {
        assert_eq!(
            FormProfile::founder_waitlist().success_reset,
            Duration::from_secs(4)
        );
        assert_eq!(
            FormProfile::simple_waitlist().success_reset,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_require_implies_show() {
        let profile = FormProfile::default().require(LeadField::CompanyName);
        assert!(profile.shows(LeadField::CompanyName));
        assert!(profile.requires(LeadField::CompanyName));
    }

    #[test]
    fn test_builder_does_not_duplicate_fields() {
        let profile = FormProfile::default()
            .show(LeadField::Mrr)
            .show(LeadField::Mrr)
            .require(LeadField::Mrr);
        assert_eq!(profile.fields().filter(|f| *f == LeadField::Mrr).count(), 1);
    }

    #[test]
    fn test_fields_keep_display_order() {
        let profile = FormProfile::default()
            .show(LeadField::InvestmentRaised)
            .show(LeadField::CompanyName);
        let fields: Vec<_> = profile.fields().collect();
        assert_eq!(
            fields,
            vec![
                LeadField::Name,
                LeadField::Email,
                LeadField::CompanyName,
                LeadField::InvestmentRaised
            ]
        );
    }

    #[test]
    fn test_theme_colors() {
        assert_eq!(Theme::Slate.particle_color(), "#475569");
        assert_eq!(Theme::Slate.active_color(), "#3b82f6");
        assert_eq!(Theme::Violet.active_color(), "#8b5cf6");
    }
}
