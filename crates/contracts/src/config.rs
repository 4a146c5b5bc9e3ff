use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = include_str!("../content/site.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub reveal: RevealConfig,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    /// Letter drawn inside the loader hexagon.
    pub initial: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Also the icon name.
    pub name: String,
    pub url: String,
}

/// Direction an element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealOrigin {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

/// Scroll-reveal settings shared by every revealed section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default)]
    pub origin: RevealOrigin,
    pub distance_px: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Opacity before the element is revealed.
    pub opacity: f64,
    pub scale: f64,
    pub easing: String,
    /// Share of the element that must be visible before it is revealed.
    pub view_factor: f64,
    /// Hide again when the element leaves the viewport.
    #[serde(default)]
    pub reset: bool,
}

impl RevealConfig {
    pub fn with_delay(&self, delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..self.clone()
        }
    }

    pub fn with_view_factor(&self, view_factor: f64) -> Self {
        Self {
            view_factor: view_factor.clamp(0.0, 1.0),
            ..self.clone()
        }
    }

    /// CSS transform of the element before it is revealed.
    pub fn hidden_transform(&self) -> String {
        let d = self.distance_px as i64;
        let translate = match self.origin {
            RevealOrigin::Bottom => format!("translateY({}px)", d),
            RevealOrigin::Top => format!("translateY({}px)", -d),
            RevealOrigin::Left => format!("translateX({}px)", -d),
            RevealOrigin::Right => format!("translateX({}px)", d),
        };
        format!("{} scale({})", translate, self.scale)
    }

    /// CSS `transition` shorthand for opacity and transform.
    pub fn transition(&self) -> String {
        format!(
            "opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms",
            d = self.duration_ms,
            e = self.easing,
            delay = self.delay_ms
        )
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.view_factor) {
            bail!("reveal.view_factor must be within 0..=1, got {}", self.view_factor);
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            bail!("reveal.opacity must be within 0..=1, got {}", self.opacity);
        }
        Ok(())
    }
}

impl SiteConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(contents).context("invalid site config")?;
        config.reveal.validate()?;
        Ok(config)
    }

    /// Load the embedded site configuration.
    pub fn load() -> anyhow::Result<Self> {
        log::info!("Using default embedded configuration");
        Self::from_toml(DEFAULT_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.site.initial, "G");
        assert_eq!(config.reveal.origin, RevealOrigin::Bottom);
        assert_eq!(config.reveal.distance_px, 20);
        assert_eq!(config.reveal.view_factor, 0.25);
        assert_eq!(config.nav.len(), 4);
        assert_eq!(config.nav[1].url, "#jobs");
    }

    fn reveal() -> RevealConfig {
        SiteConfig::load().unwrap().reveal
    }

    #[test]
    fn test_hidden_transform_per_origin() {
        let mut r = reveal();
        assert_eq!(r.hidden_transform(), "translateY(20px) scale(1)");
        r.origin = RevealOrigin::Top;
        assert_eq!(r.hidden_transform(), "translateY(-20px) scale(1)");
        r.origin = RevealOrigin::Left;
        assert_eq!(r.hidden_transform(), "translateX(-20px) scale(1)");
        r.origin = RevealOrigin::Right;
        r.scale = 0.85;
        assert_eq!(r.hidden_transform(), "translateX(20px) scale(0.85)");
    }

    #[test]
    fn test_transition_uses_delay() {
        let r = reveal().with_delay(100);
        assert_eq!(
            r.transition(),
            "opacity 500ms cubic-bezier(0.645, 0.045, 0.355, 1) 100ms, \
             transform 500ms cubic-bezier(0.645, 0.045, 0.355, 1) 100ms"
        );
    }

    #[test]
    fn test_with_view_factor_clamps() {
        assert_eq!(reveal().with_view_factor(1.5).view_factor, 1.0);
        assert_eq!(reveal().with_view_factor(-1.0).view_factor, 0.0);
    }

    #[test]
    fn test_invalid_view_factor_is_rejected() {
        let bad = DEFAULT_CONFIG.replace("view_factor = 0.25", "view_factor = 2.0");
        let err = SiteConfig::from_toml(&bad).unwrap_err();
        assert!(err.to_string().contains("view_factor"));
    }

    #[test]
    fn test_nav_and_socials_are_optional() {
        let minimal = r#"
[site]
name = "N"
initial = "N"
title = "T"
tagline = ""
email = "a@b.c"

[reveal]
distance_px = 0
duration_ms = 0
delay_ms = 0
opacity = 1.0
scale = 1.0
easing = "ease"
view_factor = 0.0
"#;
        let config = SiteConfig::from_toml(minimal).unwrap();
        assert!(config.nav.is_empty());
        assert!(config.socials.is_empty());
        assert!(!config.reveal.reset);
    }
}
