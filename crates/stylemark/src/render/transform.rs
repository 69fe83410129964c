/// How a [`Renderer`](crate::Renderer) treats markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagTransform {
    /// Replace markup with the theme's ANSI styles.
    #[default]
    Apply,
    /// Drop markup, keeping only the text.
    Remove,
    /// Re-emit normalized markup, one tag pair or delimiter pair per element.
    Keep,
}

impl TagTransform {
    /// [`Apply`](TagTransform::Apply) when colors are enabled for the
    /// terminal (see [`console::colors_enabled`]), otherwise
    /// [`Remove`](TagTransform::Remove).
    pub fn detect() -> Self {
        if console::colors_enabled() {
            TagTransform::Apply
        } else {
            TagTransform::Remove
        }
    }

    /// Whether this transform needs a theme to render.
    pub fn needs_theme(self) -> bool {
        matches!(self, TagTransform::Apply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_follows_color_support() {
        let enabled = console::colors_enabled();

        console::set_colors_enabled(true);
        assert_eq!(TagTransform::detect(), TagTransform::Apply);
        console::set_colors_enabled(false);
        assert_eq!(TagTransform::detect(), TagTransform::Remove);

        console::set_colors_enabled(enabled);
    }

    #[test]
    fn test_only_apply_needs_theme() {
        assert!(TagTransform::Apply.needs_theme());
        assert!(!TagTransform::Remove.needs_theme());
        assert!(!TagTransform::Keep.needs_theme());
        assert_eq!(TagTransform::default(), TagTransform::Apply);
    }
}
