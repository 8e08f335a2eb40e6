//! Theme resolver
//!
//! Holds the user's [`ThemePreference`], derives the [`ResolvedMode`] and
//! publishes the matching palette to subscribers.
//!
//! - Light/dark preferences resolve directly, independent of the host.
//! - `System` follows the host's [`SystemSignal`], sampled fresh on every
//!   recomputation. Exactly one signal listener is attached while, and only
//!   while, the preference is `System`.
//! - Without a signal capability `System` resolves to light and no listener
//!   is ever attached.
//!
//! The palette `Arc` is swapped only when the resolved mode changes, so
//! consumers can skip work with [`Arc::ptr_eq`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};
use tinct_core::{Color, Subscription};
use tracing::{debug, trace, warn};

use crate::signal::SystemSignal;
use crate::store::PreferenceStore;
use crate::theme::{PaletteBundle, ResolvedMode, ThemePreference, ThemeSnapshot, TokenProvider};
use crate::tokens::{ColorRole, PaletteTokens};

new_key_type! {
    struct SubscriberId;
}

/// Callback receiving every recomputed theme state
pub type ThemeListener = Rc<dyn Fn(&ThemeSnapshot)>;

struct ResolverInner {
    preference: Cell<ThemePreference>,
    mode: Cell<ResolvedMode>,
    palette: RefCell<Arc<PaletteTokens>>,
    /// Bumped on every recomputation; a notification pass stops once a
    /// nested recomputation has superseded it
    generation: Cell<u64>,
    tokens: Box<dyn TokenProvider>,
    signal: Option<Rc<dyn SystemSignal>>,
    signal_guard: RefCell<Option<Subscription>>,
    store: Option<Box<dyn PreferenceStore>>,
    subscribers: RefCell<SlotMap<SubscriberId, ThemeListener>>,
}

/// Shared handle to the theme state
///
/// Clones share state. The resolver is single-threaded; it lives on the UI
/// thread alongside the widgets that consume it.
#[derive(Clone)]
pub struct ThemeResolver {
    inner: Rc<ResolverInner>,
}

/// Builder for [`ThemeResolver`]
pub struct ThemeResolverBuilder {
    preference: ThemePreference,
    tokens: Option<Box<dyn TokenProvider>>,
    signal: Option<Rc<dyn SystemSignal>>,
    store: Option<Box<dyn PreferenceStore>>,
}

impl ThemeResolverBuilder {
    fn new() -> Self {
        Self {
            preference: ThemePreference::System,
            tokens: None,
            signal: None,
            store: None,
        }
    }

    /// Initial preference, used when no store provides one
    pub fn preference(mut self, preference: ThemePreference) -> Self {
        self.preference = preference;
        self
    }

    /// Palette source (defaults to the built-in palettes)
    pub fn tokens(mut self, tokens: impl TokenProvider + 'static) -> Self {
        self.tokens = Some(Box::new(tokens));
        self
    }

    /// Host dark-mode signal
    pub fn system_signal(mut self, signal: Rc<dyn SystemSignal>) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Preference persistence
    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn build(self) -> ThemeResolver {
        let preference = match self.store.as_ref().map(|store| store.load()) {
            Some(Ok(Some(saved))) => saved,
            Some(Ok(None)) | None => self.preference,
            Some(Err(err)) => {
                warn!(%err, "failed to load saved theme preference");
                self.preference
            }
        };

        let tokens = self
            .tokens
            .unwrap_or_else(|| Box::new(PaletteBundle::default()));
        let system_dark = sample_signal(self.signal.as_deref(), preference);
        let mode = preference.resolve(system_dark);
        let palette = tokens.palette(mode);

        if preference == ThemePreference::System && self.signal.is_none() {
            debug!("no system color-scheme signal; system preference resolves to light");
        }

        let inner = Rc::new(ResolverInner {
            preference: Cell::new(preference),
            mode: Cell::new(mode),
            palette: RefCell::new(palette),
            generation: Cell::new(0),
            tokens,
            signal: self.signal,
            signal_guard: RefCell::new(None),
            store: self.store,
            subscribers: RefCell::new(SlotMap::with_key()),
        });

        if preference == ThemePreference::System {
            ResolverInner::attach_signal(&inner);
        }

        debug!(%preference, %mode, "theme resolver initialized");
        ThemeResolver { inner }
    }
}

fn sample_signal(signal: Option<&dyn SystemSignal>, preference: ThemePreference) -> Option<bool> {
    match preference {
        ThemePreference::System => signal.map(|signal| signal.is_dark()),
        ThemePreference::Light | ThemePreference::Dark => None,
    }
}

impl ResolverInner {
    fn attach_signal(this: &Rc<Self>) {
        let Some(signal) = this.signal.as_ref() else {
            return;
        };
        if this.signal_guard.borrow().is_some() {
            return;
        }

        let weak: Weak<Self> = Rc::downgrade(this);
        let guard = signal.on_change(Rc::new(move |dark| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.preference.get() == ThemePreference::System {
                trace!(dark, "system signal changed");
                inner.recompute();
            }
        }));
        *this.signal_guard.borrow_mut() = Some(guard);
        trace!("system signal listener attached");
    }

    fn detach_signal(&self) {
        let guard = self.signal_guard.borrow_mut().take();
        if let Some(guard) = guard {
            guard.unsubscribe();
            trace!("system signal listener detached");
        }
    }

    fn recompute(&self) {
        let preference = self.preference.get();
        let mode = preference.resolve(sample_signal(self.signal.as_deref(), preference));

        let previous = self.mode.replace(mode);
        if previous != mode {
            *self.palette.borrow_mut() = self.tokens.palette(mode);
            debug!(from = %previous, to = %mode, "resolved mode changed");
        }

        self.generation.set(self.generation.get() + 1);
        self.notify();
    }

    fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            preference: self.preference.get(),
            mode: self.mode.get(),
            palette: Arc::clone(&self.palette.borrow()),
        }
    }

    fn notify(&self) {
        let generation = self.generation.get();
        let snapshot = self.snapshot();

        // Subscribers may subscribe, unsubscribe or set the preference from
        // inside the callback, so no borrow is held while calling out
        let listeners: Vec<(SubscriberId, ThemeListener)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(id, listener)| (id, Rc::clone(listener)))
            .collect();

        for (id, listener) in listeners {
            if self.generation.get() != generation {
                // A nested recomputation already delivered newer state
                break;
            }
            if self.subscribers.borrow().contains_key(id) {
                listener(&snapshot);
            }
        }
    }
}

impl ThemeResolver {
    /// Resolver with default palettes, `System` preference and no signal
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ThemeResolverBuilder {
        ThemeResolverBuilder::new()
    }

    // ========== Preference ==========

    /// The user's current preference
    pub fn preference(&self) -> ThemePreference {
        self.inner.preference.get()
    }

    /// Change the preference and recompute immediately.
    ///
    /// Setting the preference already in effect does nothing.
    pub fn set_preference(&self, preference: ThemePreference) {
        let inner = &self.inner;
        let previous = inner.preference.replace(preference);
        if previous == preference {
            trace!(%preference, "theme preference unchanged");
            return;
        }
        debug!(from = %previous, to = %preference, "theme preference changed");

        match (previous, preference) {
            (ThemePreference::System, _) => inner.detach_signal(),
            (_, ThemePreference::System) => ResolverInner::attach_signal(inner),
            _ => {}
        }

        if let Some(store) = inner.store.as_ref() {
            if let Err(err) = store.save(preference) {
                warn!(%err, "failed to save theme preference");
            }
        }

        inner.recompute();
    }

    /// Pin the opposite of the currently resolved mode
    pub fn toggle_mode(&self) {
        let next = match self.resolved_mode().toggle() {
            ResolvedMode::Light => ThemePreference::Light,
            ResolvedMode::Dark => ThemePreference::Dark,
        };
        self.set_preference(next);
    }

    // ========== Resolved State ==========

    /// The light/dark mode in effect
    pub fn resolved_mode(&self) -> ResolvedMode {
        self.inner.mode.get()
    }

    /// Palette for the resolved mode
    pub fn palette(&self) -> Arc<PaletteTokens> {
        Arc::clone(&self.inner.palette.borrow())
    }

    /// A single role from the current palette
    pub fn color(&self, role: ColorRole) -> Color {
        self.inner.palette.borrow().get(role)
    }

    /// Preference, mode and palette together
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.inner.snapshot()
    }

    /// Whether a system-signal listener is currently attached
    pub fn is_tracking_system(&self) -> bool {
        self.inner.signal_guard.borrow().is_some()
    }

    // ========== Subscribers ==========

    /// Register a listener for every recomputation.
    ///
    /// Safe to call from inside a notification; a listener added during a
    /// pass first hears about the next one.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ThemeSnapshot) + 'static,
    {
        let id = self
            .inner
            .subscribers
            .borrow_mut()
            .insert(Rc::new(listener));
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.subscribers.borrow_mut().remove(id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("preference", &self.preference())
            .field("mode", &self.resolved_mode())
            .field("tracking_system", &self.is_tracking_system())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::ManualSystemSignal;
    use crate::store::MemoryStore;

    fn with_signal(dark: bool) -> (ThemeResolver, ManualSystemSignal) {
        let signal = ManualSystemSignal::new(dark);
        let resolver = ThemeResolver::builder()
            .system_signal(Rc::new(signal.clone()))
            .build();
        (resolver, signal)
    }

    #[test]
    fn test_defaults_to_system() {
        let (resolver, signal) = with_signal(true);
        assert_eq!(resolver.preference(), ThemePreference::System);
        assert_eq!(resolver.resolved_mode(), ResolvedMode::Dark);
        assert!(resolver.is_tracking_system());
        assert_eq!(signal.listener_count(), 1);
    }

    #[test]
    fn test_missing_signal_degrades_to_light() {
        let resolver = ThemeResolver::new();
        assert_eq!(resolver.preference(), ThemePreference::System);
        assert_eq!(resolver.resolved_mode(), ResolvedMode::Light);
        assert!(!resolver.is_tracking_system());
    }

    #[test]
    fn test_system_changes_ignored_when_pinned() {
        let (resolver, signal) = with_signal(false);
        resolver.set_preference(ThemePreference::Light);
        assert_eq!(signal.listener_count(), 0);

        signal.set_dark(true);
        assert_eq!(resolver.resolved_mode(), ResolvedMode::Light);
    }

    #[test]
    fn test_palette_identity_changes_only_with_mode() {
        let (resolver, _signal) = with_signal(false);
        let before = resolver.palette();

        resolver.set_preference(ThemePreference::Light);
        assert!(Arc::ptr_eq(&before, &resolver.palette()));

        resolver.set_preference(ThemePreference::Dark);
        assert!(!Arc::ptr_eq(&before, &resolver.palette()));
    }

    #[test]
    fn test_same_preference_is_noop() {
        let (resolver, _signal) = with_signal(false);
        let count = Rc::new(Cell::new(0));
        let hits = count.clone();
        let _sub = resolver.subscribe(move |_| hits.set(hits.get() + 1));

        resolver.set_preference(ThemePreference::System);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_toggle_mode_pins_opposite() {
        let (resolver, _signal) = with_signal(true);
        resolver.toggle_mode();
        assert_eq!(resolver.preference(), ThemePreference::Light);
        assert_eq!(resolver.resolved_mode(), ResolvedMode::Light);
    }

    #[test]
    fn test_store_round_trip() {
        let resolver = ThemeResolver::builder()
            .store(MemoryStore::new(Some(ThemePreference::Dark)))
            .build();
        assert_eq!(resolver.preference(), ThemePreference::Dark);
        assert_eq!(resolver.resolved_mode(), ResolvedMode::Dark);
    }

    #[test]
    fn test_color_lookup() {
        let resolver = ThemeResolver::builder()
            .preference(ThemePreference::Dark)
            .build();
        assert_eq!(
            resolver.color(ColorRole::Background),
            Color::from_hex(0x0F172A)
        );
    }
}
