//! Hero carousel bindings. Each `.hero-carousel` gets its own controller
//! and timer.

use crate::dom;
use crate::events::ListenerSet;
use crate::timers::BrowserScheduler;
use tdc_site_core::carousel::{parse_interval, Carousel, CarouselView};
use tdc_site_core::SiteError;
use tdc_site_types::SiteConfig;
use web_sys::Element;

pub type HeroCarousel = Carousel<DomCarousel, BrowserScheduler>;

pub struct DomCarousel {
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl CarouselView for DomCarousel {
    fn set_slide_active(&self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get(index) {
            dom::toggle_class(slide, "active", active);
        }
    }

    fn set_indicator_active(&self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get(index) {
            dom::toggle_class(dot, "active", active);
        }
    }
}

pub fn bind(config: &SiteConfig, listeners: &mut ListenerSet) -> Result<Vec<HeroCarousel>, SiteError> {
    let s = &config.selectors;
    let sections = dom::query_all(&s.carousel_root);
    if sections.is_empty() {
        return Err(SiteError::missing("hero carousel", &s.carousel_root));
    }

    let mut carousels = Vec::new();
    for section in &sections {
        let container = dom::query_within(section, &s.carousel_container).unwrap_or_else(|| section.clone());
        let slides = dom::query_all_within(&container, &s.carousel_slide);
        if slides.is_empty() {
            tracing::debug!("hero carousel without slides skipped");
            continue;
        }
        let dots = dom::query_all_within(&container, &s.carousel_indicator);

        let attr = container
            .get_attribute(&s.carousel_interval_attr)
            .or_else(|| section.get_attribute(&s.carousel_interval_attr));
        let interval_ms = parse_interval(attr.as_deref(), config.carousel.default_interval_ms);

        let view = DomCarousel {
            slides: slides.clone(),
            dots: dots.clone(),
        };
        let Some(carousel) = Carousel::start(view, slides.len(), dots.len(), interval_ms, &BrowserScheduler)
        else {
            continue;
        };

        for (index, dot) in dots.iter().enumerate() {
            let control = carousel.control();
            listeners.on(dot, "click", move |_| control.jump(index))?;
        }
        carousels.push(carousel);
    }

    tracing::info!(count = carousels.len(), "hero carousels started");
    Ok(carousels)
}
