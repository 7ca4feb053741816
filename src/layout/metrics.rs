use super::Style;
use crate::error::LayoutError;
use crate::units::Pt;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Measures how wide a string renders in a given style.
///
/// Implementations must be deterministic: the same text and style always
/// measure to the same width for one backend instance. A style the backend
/// can't render fails with [`LayoutError::StyleUnsupported`]; callers never
/// fall back to another style.
pub trait FontMetrics {
    fn measure_width(&self, text: &str, style: &Style) -> Result<Pt, LayoutError>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure_width(&self, text: &str, style: &Style) -> Result<Pt, LayoutError> {
        (**self).measure_width(text, style)
    }
}

/// Memoised widths, kept for the lifetime of one render. Every candidate line
/// measured while wrapping is stored. Within one paragraph those candidates
/// are all distinct, so hits come from centring re-measuring finished
/// multi-word lines and from text that repeats across blocks.
#[derive(Default)]
pub struct WidthCache {
    widths: RefCell<HashMap<(String, (bool, u32)), Pt>>,
    hits: Cell<usize>,
}

impl WidthCache {
    pub fn new() -> WidthCache {
        WidthCache::default()
    }

    /// Borrow the cache together with the metrics source it fronts
    pub fn with<'a, M: FontMetrics + ?Sized>(&'a self, metrics: &'a M) -> CachedMetrics<'a, M> {
        CachedMetrics {
            metrics,
            cache: self,
        }
    }

    pub fn len(&self) -> usize {
        self.widths.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.borrow().is_empty()
    }

    /// Number of lookups answered without asking the backend
    pub fn hits(&self) -> usize {
        self.hits.get()
    }
}

/// A [`FontMetrics`] that answers from a [`WidthCache`] and only asks the
/// wrapped metrics on a miss. Errors are not cached.
pub struct CachedMetrics<'a, M: ?Sized> {
    metrics: &'a M,
    cache: &'a WidthCache,
}

impl<M: FontMetrics + ?Sized> FontMetrics for CachedMetrics<'_, M> {
    fn measure_width(&self, text: &str, style: &Style) -> Result<Pt, LayoutError> {
        let key = (text.to_string(), style.metrics_key());
        if let Some(width) = self.cache.widths.borrow().get(&key) {
            self.cache.hits.set(self.cache.hits.get() + 1);
            return Ok(*width);
        }

        let width = self.metrics.measure_width(text, style)?;
        self.cache.widths.borrow_mut().insert(key, width);
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        calls: Cell<usize>,
    }

    impl FontMetrics for Counting {
        fn measure_width(&self, text: &str, style: &Style) -> Result<Pt, LayoutError> {
            self.calls.set(self.calls.get() + 1);
            if style.size <= Pt(0.0) {
                return Err(LayoutError::StyleUnsupported { style: *style });
            }
            Ok(Pt(text.chars().count() as f32) * style.size.0)
        }
    }

    #[test]
    fn repeated_measurements_hit_the_cache() {
        let counting = Counting { calls: Cell::new(0) };
        let cache = WidthCache::new();
        let metrics = cache.with(&counting);
        let style = Style::regular(Pt(2.0));

        assert_eq!(metrics.measure_width("abc", &style).unwrap(), Pt(6.0));
        assert_eq!(metrics.measure_width("abc", &style).unwrap(), Pt(6.0));
        assert_eq!(counting.calls.get(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn alignment_shares_entries_but_weight_does_not() {
        let counting = Counting { calls: Cell::new(0) };
        let cache = WidthCache::new();
        let metrics = cache.with(&counting);

        metrics.measure_width("x", &Style::regular(Pt(4.0))).unwrap();
        metrics
            .measure_width("x", &Style::regular(Pt(4.0)).centered())
            .unwrap();
        metrics.measure_width("x", &Style::bold(Pt(4.0))).unwrap();
        assert_eq!(counting.calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn centring_finished_lines_hits_but_wrapping_alone_does_not() {
        let counting = Counting { calls: Cell::new(0) };
        let cache = WidthCache::new();
        let metrics = cache.with(&counting);
        let style = Style::regular(Pt(1.0)).centered();

        let lines = crate::layout::wrap("aa bb cc dd", &style, Pt(5.0), &metrics).unwrap();
        assert_eq!(lines, vec!["aa bb", "cc dd"]);
        assert_eq!(cache.hits(), 0);

        for line in &lines {
            metrics.measure_width(line, &style).unwrap();
        }
        assert_eq!(cache.hits(), 2);
    }

    #[test]
    fn failures_are_not_remembered() {
        let counting = Counting { calls: Cell::new(0) };
        let cache = WidthCache::new();
        let metrics = cache.with(&counting);
        let style = Style::regular(Pt(0.0));

        assert!(metrics.measure_width("a", &style).is_err());
        assert!(metrics.measure_width("a", &style).is_err());
        assert_eq!(counting.calls.get(), 2);
        assert!(cache.is_empty());
    }
}
