//! Host signals a controller subscribes to while mounted.
//!
//! Visibility and keyboard input are injected instead of read from globals.
//! The host keeps a [`SignalBus`], routes terminal events through it and
//! forwards them to whichever controllers it reports as subscribed.

use std::fmt;

/// Stable name of one carousel on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselId(pub &'static str);

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub trait VisibilitySource {
    /// Register for visibility changes. Returns the current visibility.
    fn subscribe_visibility(&mut self, carousel: CarouselId) -> bool;
    fn unsubscribe_visibility(&mut self, carousel: CarouselId);
}

pub trait KeySource {
    fn subscribe_keys(&mut self, carousel: CarouselId);
    fn unsubscribe_keys(&mut self, carousel: CarouselId);
}

/// Subscription registry plus the routing rules for keys.
///
/// Keys go to the hovered carousel, else to the keyboard-focused one. Two
/// carousels on the same page never react to the same keypress.
#[derive(Debug)]
pub struct SignalBus {
    visible: bool,
    visibility_subscribers: Vec<CarouselId>,
    key_subscribers: Vec<CarouselId>,
    hovered: Option<CarouselId>,
    focused: Option<CarouselId>,
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBus {
    pub fn new() -> Self {
        Self {
            visible: true,
            visibility_subscribers: Vec::new(),
            key_subscribers: Vec::new(),
            hovered: None,
            focused: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record a visibility change and return the carousels to notify.
    /// Repeating the current value notifies nobody.
    pub fn set_visible(&mut self, visible: bool) -> Vec<CarouselId> {
        if self.visible == visible {
            return Vec::new();
        }
        self.visible = visible;
        self.visibility_subscribers.clone()
    }

    pub fn hovered(&self) -> Option<CarouselId> {
        self.hovered
    }

    /// Update the hovered carousel. Returns `(left, entered)` when it changed.
    pub fn set_hovered(
        &mut self,
        hovered: Option<CarouselId>,
    ) -> Option<(Option<CarouselId>, Option<CarouselId>)> {
        let hovered = hovered.filter(|id| self.key_subscribers.contains(id));
        if hovered == self.hovered {
            return None;
        }
        let left = self.hovered;
        self.hovered = hovered;
        Some((left, hovered))
    }

    pub fn focused(&self) -> Option<CarouselId> {
        self.focused
    }

    /// Move keyboard focus to the next subscribed carousel.
    pub fn cycle_focus(&mut self) -> Option<CarouselId> {
        if self.key_subscribers.is_empty() {
            return None;
        }
        let next = match self
            .focused
            .and_then(|id| self.key_subscribers.iter().position(|s| *s == id))
        {
            Some(pos) => (pos + 1) % self.key_subscribers.len(),
            None => 0,
        };
        self.focused = Some(self.key_subscribers[next]);
        self.focused
    }

    /// Carousel that should receive the next carousel key, if any.
    pub fn key_target(&self) -> Option<CarouselId> {
        self.hovered.or(self.focused)
    }

    pub fn is_subscribed(&self, carousel: CarouselId) -> bool {
        self.visibility_subscribers.contains(&carousel) || self.key_subscribers.contains(&carousel)
    }
}

impl VisibilitySource for SignalBus {
    fn subscribe_visibility(&mut self, carousel: CarouselId) -> bool {
        if !self.visibility_subscribers.contains(&carousel) {
            self.visibility_subscribers.push(carousel);
        }
        self.visible
    }

    fn unsubscribe_visibility(&mut self, carousel: CarouselId) {
        self.visibility_subscribers.retain(|id| *id != carousel);
    }
}

impl KeySource for SignalBus {
    fn subscribe_keys(&mut self, carousel: CarouselId) {
        if !self.key_subscribers.contains(&carousel) {
            self.key_subscribers.push(carousel);
        }
        if self.focused.is_none() {
            self.focused = Some(carousel);
        }
    }

    fn unsubscribe_keys(&mut self, carousel: CarouselId) {
        self.key_subscribers.retain(|id| *id != carousel);
        if self.hovered == Some(carousel) {
            self.hovered = None;
        }
        if self.focused == Some(carousel) {
            self.focused = self.key_subscribers.first().copied();
        }
    }
}
