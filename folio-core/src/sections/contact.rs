use folio_model::{BookingOptions, SocialLink};

use crate::catalog::Catalog;

pub const CONTACT_HEADING: &str = "Let's Connect";

/// Social links and booking choices. Form state lives with the host.
#[derive(Debug, Clone, Copy)]
pub struct ContactSection<'a> {
    pub social_links: &'a [SocialLink],
    pub booking: &'a BookingOptions,
}

impl<'a> ContactSection<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            social_links: catalog.social_links(),
            booking: catalog.booking(),
        }
    }

    /// Links that actually point somewhere.
    pub fn reachable_links(&self) -> impl Iterator<Item = &'a SocialLink> + 'a {
        self.social_links.iter().filter(|link| !link.url.is_empty())
    }
}
