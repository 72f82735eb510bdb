use scribe_lang::StyleTag;
use std::collections::HashMap;

/// Maps semantic [`StyleTag`]s to whatever the host paints with (colors, font attributes, ...).
///
/// The highlighter never picks colors itself; dark-mode and theme switching live entirely on the
/// host side of this trait.
pub trait StyleResolver {
    /// Whatever the host paints with.
    type Style;

    /// Host style for `tag`.
    fn resolve(&self, tag: StyleTag) -> Self::Style;
}

impl<F, S> StyleResolver for F
where
    F: Fn(StyleTag) -> S,
{
    type Style = S;

    fn resolve(&self, tag: StyleTag) -> S {
        self(tag)
    }
}

/// Tags missing from the map fall back to the [`StyleTag::Default`] entry, then to `S::default()`.
impl<S> StyleResolver for HashMap<StyleTag, S>
where
    S: Clone + Default,
{
    type Style = S;

    fn resolve(&self, tag: StyleTag) -> S {
        self.get(&tag)
            .or_else(|| self.get(&StyleTag::Default))
            .cloned()
            .unwrap_or_default()
    }
}
