//! Read-only collaborators injected into the resolver

use super::ConfigurationSnapshot;
use std::borrow::Cow;
use std::sync::Arc;

/// Source of the current settings tree.
///
/// Implementations hand back an already-materialized snapshot; any loading
/// or caching happens on their side before this is called.
pub trait ConfigurationAccessor {
    /// Full-tree read of the current configuration
    fn configuration(&self) -> Cow<'_, ConfigurationSnapshot>;
}

/// Source of the active UI theme identifier.
///
/// Identifiers follow `"<themeId> <displayName>"`, e.g. `"vs-dark Dark+"`.
pub trait ThemeAccessor {
    /// Identifier of the currently active theme
    fn active_theme(&self) -> Cow<'_, str>;
}

impl ConfigurationAccessor for ConfigurationSnapshot {
    fn configuration(&self) -> Cow<'_, ConfigurationSnapshot> {
        Cow::Borrowed(self)
    }
}

impl ThemeAccessor for str {
    fn active_theme(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ThemeAccessor for String {
    fn active_theme(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<A: ConfigurationAccessor + ?Sized> ConfigurationAccessor for &A {
    fn configuration(&self) -> Cow<'_, ConfigurationSnapshot> {
        (**self).configuration()
    }
}

impl<A: ConfigurationAccessor + ?Sized> ConfigurationAccessor for Box<A> {
    fn configuration(&self) -> Cow<'_, ConfigurationSnapshot> {
        (**self).configuration()
    }
}

impl<A: ConfigurationAccessor + ?Sized> ConfigurationAccessor for Arc<A> {
    fn configuration(&self) -> Cow<'_, ConfigurationSnapshot> {
        (**self).configuration()
    }
}

impl<A: ThemeAccessor + ?Sized> ThemeAccessor for &A {
    fn active_theme(&self) -> Cow<'_, str> {
        (**self).active_theme()
    }
}

impl<A: ThemeAccessor + ?Sized> ThemeAccessor for Box<A> {
    fn active_theme(&self) -> Cow<'_, str> {
        (**self).active_theme()
    }
}

impl<A: ThemeAccessor + ?Sized> ThemeAccessor for Arc<A> {
    fn active_theme(&self) -> Cow<'_, str> {
        (**self).active_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Accessor whose content can change between reads
    struct Swappable(Mutex<String>);

    impl ThemeAccessor for Swappable {
        fn active_theme(&self) -> Cow<'_, str> {
            Cow::Owned(self.0.lock().unwrap().clone())
        }
    }

    #[test]
    fn test_snapshot_is_its_own_accessor() {
        let snapshot = ConfigurationSnapshot::new().with("editor.fontFamily", "foo");
        let read = snapshot.configuration();
        assert_eq!(read.get_str("editor.fontFamily"), Some("foo"));
        assert!(matches!(read, Cow::Borrowed(_)));
    }

    #[test]
    fn test_string_theme_accessors() {
        assert_eq!("vs-dark foo".active_theme(), "vs-dark foo");
        assert_eq!(String::from("hc-black").active_theme(), "hc-black");
    }

    #[test]
    fn test_forwarding_through_shared_handles() {
        let snapshot = Arc::new(ConfigurationSnapshot::new().with("editor.fontSize", 10));
        let boxed: Box<dyn ConfigurationAccessor> = Box::new(Arc::clone(&snapshot));
        assert_eq!(boxed.configuration().get_f64("editor.fontSize"), Some(10.0));

        let theme: Arc<dyn ThemeAccessor> = Arc::new(String::from("vs foo"));
        assert_eq!(theme.active_theme(), "vs foo");
    }

    #[test]
    fn test_reads_observe_current_state() {
        let accessor = Swappable(Mutex::new("vs foo".to_string()));
        assert_eq!(accessor.active_theme(), "vs foo");

        *accessor.0.lock().unwrap() = "hc-black foo".to_string();
        assert_eq!(accessor.active_theme(), "hc-black foo");
    }
}
