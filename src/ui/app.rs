use crate::config::{CarouselConfig, Config};
use crate::content::{self, Category};
use crate::rotation::{
    CarouselId, Clock, Direction, InputFocus, KeyDisposition, RotationController,
    RotationSnapshot, SignalBus, TimerId, TimerScheduler,
};
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer, SubmitStatus};
use crate::ui::layout::{body_rect, carousel_controls, home_layout, ControlHit};
use crate::ui::mvi::Reducer;
use crate::ui::page::Page;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use parking_lot::Mutex;
use ratatui::layout::{Position, Rect};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const HERO: CarouselId = CarouselId("hero");
pub const TESTIMONIALS: CarouselId = CarouselId("testimonials");

#[derive(Debug)]
pub enum UiCommand {
    /// Finish the simulated contact form send after `after`.
    CompleteSubmission { after: Duration },
    /// Clear the success message after `after`.
    ResetContactForm { after: Duration },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Builds the timer backend for a newly mounted carousel.
pub type SchedulerFactory = Box<dyn Fn(CarouselId) -> Box<dyn TimerScheduler>>;

/// Latest snapshot per carousel, written by controller observers.
pub type SnapshotBoard = Arc<Mutex<HashMap<CarouselId, RotationSnapshot>>>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: Page,
    size: Option<(u16, u16)>,
    config: Config,
    clock: Arc<dyn Clock>,
    schedulers: SchedulerFactory,
    signals: SignalBus,
    hero: Option<RotationController>,
    testimonials: Option<RotationController>,
    snapshots: SnapshotBoard,
    /// Contact form state (MVI pattern).
    pub contact: ContactFormState,
    /// Whether keys go into the contact form fields.
    contact_focus: InputFocus,
    portfolio_filter: Category,
    command_tx: Option<UiCommandSender>,
    frame: u64,
}

impl App {
    pub fn new(config: Config, clock: Arc<dyn Clock>, schedulers: SchedulerFactory) -> Self {
        Self {
            should_quit: false,
            page: Page::Home,
            size: None,
            config,
            clock,
            schedulers,
            signals: SignalBus::new(),
            hero: None,
            testimonials: None,
            snapshots: Arc::new(Mutex::new(HashMap::new())),
            contact: ContactFormState::default(),
            contact_focus: InputFocus::Page,
            portfolio_filter: Category::All,
            command_tx: None,
            frame: 0,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_tx = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn portfolio_filter(&self) -> Category {
        self.portfolio_filter
    }

    pub fn contact_focus(&self) -> InputFocus {
        self.contact_focus
    }

    pub fn signals(&self) -> &SignalBus {
        &self.signals
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&RotationController> {
        match id {
            HERO => self.hero.as_ref(),
            TESTIMONIALS => self.testimonials.as_ref(),
            _ => None,
        }
    }

    fn carousel_mut(&mut self, id: CarouselId) -> Option<&mut RotationController> {
        match id {
            HERO => self.hero.as_mut(),
            TESTIMONIALS => self.testimonials.as_mut(),
            _ => None,
        }
    }

    /// What the renderer should show for `id`, as last published by its
    /// controller.
    pub fn carousel_snapshot(&self, id: CarouselId) -> Option<RotationSnapshot> {
        self.snapshots.lock().get(&id).copied()
    }

    /// Switch pages. Leaving Home tears its carousels down, entering Home
    /// mounts fresh ones at the first slide.
    pub fn set_page(&mut self, page: Page) {
        if page == self.page && (page != Page::Home || self.hero.is_some()) {
            return;
        }
        tracing::debug!(from = ?self.page, to = ?page, "page changed");
        if self.page == Page::Home {
            self.unmount_home();
        }
        self.page = page;
        if page == Page::Home {
            self.mount_home();
        }
        if page == Page::Contact {
            self.contact_focus = InputFocus::TextInput;
        }
    }

    fn mount_home(&mut self) {
        let hero_config = self.config.rotation.hero.clone();
        let testimonials_config = self.config.rotation.testimonials.clone();
        self.hero = Some(self.mount_carousel(HERO, content::hero_slides().len(), &hero_config));
        self.testimonials = Some(self.mount_carousel(
            TESTIMONIALS,
            content::testimonials().len(),
            &testimonials_config,
        ));
    }

    fn mount_carousel(
        &mut self,
        id: CarouselId,
        slides: usize,
        config: &CarouselConfig,
    ) -> RotationController {
        let mut controller =
            RotationController::new(id, Arc::clone(&self.clock), (self.schedulers)(id))
                .with_suppression(config.suppression());
        let board = Arc::clone(&self.snapshots);
        controller.subscribe(Box::new(move |snapshot| {
            board.lock().insert(snapshot.carousel, *snapshot);
        }));
        if !config.autoplay {
            controller.set_auto_advancing(false);
        }
        controller.mount(&mut self.signals);
        if let Err(err) = controller.initialize(slides, config.interval()) {
            tracing::warn!(carousel = %id, error = %err, "carousel left idle");
        }
        controller
    }

    pub fn unmount_home(&mut self) {
        for controller in [self.hero.take(), self.testimonials.take()]
            .into_iter()
            .flatten()
        {
            self.snapshots.lock().remove(&controller.id());
            controller.teardown(&mut self.signals);
        }
    }

    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_timer(&mut self, carousel: CarouselId, timer: TimerId) {
        if let Some(controller) = self.carousel_mut(carousel) {
            controller.on_timer(timer);
        }
    }

    pub fn on_visibility(&mut self, visible: bool) {
        for id in self.signals.set_visible(visible) {
            if let Some(controller) = self.carousel_mut(id) {
                controller.set_page_visible(visible);
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let page = self.page;
        match page {
            Page::Contact if self.contact_focus == InputFocus::TextInput => {
                self.on_contact_key(key);
                return;
            }
            Page::Home if self.on_carousel_key(key) == KeyDisposition::Handled => return,
            _ => {}
        }
        match key.code {
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Char(ch @ '1'..='4') => {
                if let Some(page) = Page::from_digit(ch) {
                    self.set_page(page);
                }
            }
            KeyCode::Tab if self.page == Page::Home => {
                self.signals.cycle_focus();
            }
            KeyCode::Char('f') if self.page == Page::Home => self.cycle_portfolio_filter(),
            KeyCode::Char('a') if self.page == Page::Home => {
                if let Some(controller) = self.key_target_mut() {
                    let enabled = !controller.state().auto_advancing;
                    controller.set_auto_advancing(enabled);
                }
            }
            KeyCode::Enter | KeyCode::Tab if self.page == Page::Contact => {
                self.contact_focus = InputFocus::TextInput;
            }
            _ => {}
        }
    }

    fn key_target_mut(&mut self) -> Option<&mut RotationController> {
        let target = self.signals.key_target()?;
        self.carousel_mut(target)
    }

    fn on_carousel_key(&mut self, key: KeyEvent) -> KeyDisposition {
        match self.key_target_mut() {
            Some(controller) => controller.handle_key(key, InputFocus::Page),
            None => KeyDisposition::PassThrough,
        }
    }

    fn on_contact_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let intent = match key.code {
            KeyCode::Esc => {
                self.contact_focus = InputFocus::Page;
                return;
            }
            KeyCode::Char('s') if ctrl => ContactIntent::Submit,
            KeyCode::Char(_) if ctrl => return,
            KeyCode::Char(ch) => ContactIntent::Insert(ch),
            KeyCode::Backspace => ContactIntent::Backspace,
            KeyCode::Tab | KeyCode::Down => ContactIntent::FocusNext,
            KeyCode::BackTab | KeyCode::Up => ContactIntent::FocusPrev,
            KeyCode::Enter if self.contact.focused.is_multiline() => ContactIntent::Insert('\n'),
            KeyCode::Enter => ContactIntent::FocusNext,
            _ => return,
        };
        self.dispatch_contact(intent);
    }

    /// Run a contact intent and schedule the simulated send/reset steps.
    pub fn dispatch_contact(&mut self, intent: ContactIntent) {
        let before = self.contact.status;
        dispatch_mvi!(self, contact, ContactReducer, intent);
        let contact = self.config.contact.clone();
        match (before, self.contact.status) {
            (SubmitStatus::Editing, SubmitStatus::Submitting) => {
                tracing::info!("contact form submitted");
                self.send_command(UiCommand::CompleteSubmission {
                    after: contact.submit_delay(),
                });
            }
            (SubmitStatus::Submitting, SubmitStatus::Submitted) => {
                self.send_command(UiCommand::ResetContactForm {
                    after: contact.reset_after(),
                });
            }
            (SubmitStatus::Editing, SubmitStatus::Editing) if !self.contact.errors.is_empty() => {
                tracing::debug!(errors = %self.contact.errors, "contact form invalid");
            }
            _ => {}
        }
    }

    fn send_command(&self, command: UiCommand) {
        if let Some(sender) = &self.command_tx {
            if let Err(err) = sender.try_send(command) {
                tracing::warn!(error = %err, "ui command dropped");
            }
        }
    }

    fn cycle_portfolio_filter(&mut self) {
        let categories = content::categories(content::portfolio());
        let pos = categories
            .iter()
            .position(|c| *c == self.portfolio_filter)
            .unwrap_or(0);
        self.portfolio_filter = categories[(pos + 1) % categories.len()];
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.page != Page::Home {
            return;
        }
        let Some(area) = self.home_areas() else {
            return;
        };
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let hovered = area
                    .iter()
                    .find(|(_, rect)| rect.contains(pos))
                    .map(|(id, _)| *id);
                self.set_hovered(hovered);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                for (id, rect) in area {
                    if !rect.contains(pos) {
                        continue;
                    }
                    let slides = self.carousel(id).map_or(0, |c| c.state().slide_count);
                    let hit = carousel_controls(rect, slides)
                        .and_then(|controls| controls.hit(mouse.column, mouse.row));
                    if let (Some(hit), Some(controller)) = (hit, self.carousel_mut(id)) {
                        match hit {
                            ControlHit::Prev => controller.advance(Direction::Backward),
                            ControlHit::Next => controller.advance(Direction::Forward),
                            ControlHit::Dot(index) => {
                                if let Err(err) = controller.jump_to(index) {
                                    tracing::debug!(carousel = %id, error = %err, "jump ignored");
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Pointer enter pauses a carousel; leaving it resumes.
    pub fn set_hovered(&mut self, hovered: Option<CarouselId>) {
        let Some((left, entered)) = self.signals.set_hovered(hovered) else {
            return;
        };
        if let Some(controller) = left.and_then(|id| self.carousel_mut(id)) {
            controller.set_paused_by_user(false);
        }
        if let Some(controller) = entered.and_then(|id| self.carousel_mut(id)) {
            controller.set_paused_by_user(true);
        }
    }

    fn home_areas(&self) -> Option<[(CarouselId, Rect); 2]> {
        let (cols, rows) = self.size?;
        let layout = home_layout(body_rect(Rect::new(0, 0, cols, rows)));
        Some([(HERO, layout.hero), (TESTIMONIALS, layout.testimonials)])
    }
}
