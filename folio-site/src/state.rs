use std::time::Instant;

use folio_core::carousel::{Breakpoints, CarouselConfig, LoopingCarousel, layout};
use folio_core::catalog::Catalog;
use folio_core::forms::{BookingForm, ContactForm};
use folio_core::navigation::NavigationShell;
use folio_core::sections::ContentTab;
use iced::Size;
use iced::widget::scrollable;

use crate::views::MAX_CONTENT_WIDTH;

/// Horizontal padding around the page content, in logical pixels.
pub const PAGE_PADDING: f32 = 32.0;

/// Transient banner shown after a form submission or a copied link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
}

#[derive(Debug)]
pub struct State {
    pub catalog: Catalog,
    pub shell: NavigationShell,
    pub carousel_config: CarouselConfig,
    /// Present while the home view is mounted.
    pub carousel: Option<LoopingCarousel>,
    pub carousel_id: scrollable::Id,
    pub page_id: scrollable::Id,
    pub breakpoints: Breakpoints,
    pub window_size: Size,
    pub content_tab: ContentTab,
    pub contact: ContactForm,
    pub booking: BookingForm,
    pub notice: Option<Notice>,
}

impl State {
    pub fn new(catalog: Catalog, shell: NavigationShell, carousel_config: CarouselConfig) -> Self {
        let mut state = Self {
            catalog,
            shell,
            carousel_config,
            carousel: None,
            carousel_id: scrollable::Id::unique(),
            page_id: scrollable::Id::unique(),
            breakpoints: Breakpoints::default(),
            window_size: Size::ZERO,
            content_tab: ContentTab::default(),
            contact: ContactForm::new(),
            booking: BookingForm::new(),
            notice: None,
        };
        state.sync_carousel(Instant::now());
        state
    }

    /// Width of one carousel slot for the current window. Sections never
    /// grow past [`MAX_CONTENT_WIDTH`], so neither does the strip.
    pub fn carousel_item_width(&self) -> f32 {
        let viewport = self
            .window_size
            .width
            .min(MAX_CONTENT_WIDTH + 2.0 * PAGE_PADDING);
        layout::item_width(viewport, PAGE_PADDING, &self.breakpoints)
    }

    pub fn carousel_visible_items(&self) -> usize {
        self.breakpoints.items_per_view(self.window_size.width)
    }

    /// Push the current window geometry into the carousel. Returns the
    /// viewport offset to apply, if any.
    pub fn measure_carousel(&mut self, now: Instant) -> Option<f32> {
        let visible = self.carousel_visible_items();
        let width = self.carousel_item_width();
        let carousel = self.carousel.as_mut()?;
        let resized = carousel.set_visible_items(visible);
        carousel.measure(width, now).or(resized)
    }

    /// Mount a fresh carousel when the home view is showing, unmount it
    /// otherwise. Returns an offset to apply when the new carousel could be
    /// measured straight away.
    pub fn sync_carousel(&mut self, now: Instant) -> Option<f32> {
        let on_home = self.shell.current().is_home();
        match (&mut self.carousel, on_home) {
            (Some(carousel), false) => {
                carousel.unmount();
                self.carousel = None;
                None
            }
            (None, true) => {
                let len = self.catalog.featured_projects().count();
                self.carousel = Some(LoopingCarousel::new(len, self.carousel_config));
                self.measure_carousel(now)
            }
            _ => None,
        }
    }
}
