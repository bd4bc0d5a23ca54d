//! Static HTML projection of a gallery state
//!
//! Every function here is a pure projection: the same state always produces
//! the same markup, and nothing is read back from it. Data-supplied text is
//! escaped everywhere; descriptions go through the link rewrite in
//! [`markup`], the only path that emits `<a>` elements.

use crate::catalog::{Catalog, MediaItem};
use crate::gallery::markup::{self, escape};
use crate::gallery::{CardView, FilterBarView, GalleryState, MediaLayout, ModalView, SortMode};

/// Page-level settings of [`render_page`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Document title
    pub title: String,
    /// Optional about text, shown above the filter bar
    pub about: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            about: None,
        }
    }
}

/// Filter buttons plus the sort selector
#[must_use]
pub fn render_filter_bar(bar: &FilterBarView<'_>) -> String {
    let buttons: String = bar
        .buttons
        .iter()
        .map(|button| {
            let filter = button.tag.unwrap_or("all");
            format!(
                r#"<button data-filter="{}" class="{}">{}</button>"#,
                escape(filter),
                if button.active { "active" } else { "" },
                escape(button.label())
            )
        })
        .collect();

    let options: String = SortMode::ALL
        .iter()
        .map(|mode| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                mode.as_str(),
                if *mode == bar.sort_mode { " selected" } else { "" },
                escape(mode.label())
            )
        })
        .collect();

    format!(
        r#"<div class="button-group">{buttons}</div><div class="sort-controls"><label for="sort-select">Sort</label><select id="sort-select">{options}</select></div>"#
    )
}

fn render_card(card: &CardView<'_>) -> String {
    let record = card.record;
    let chips: String = record
        .tags
        .iter()
        .map(|tag| {
            let tag = escape(tag);
            format!(r#"<div class="tag" data-filter="{tag}">{tag}</div>"#)
        })
        .collect();
    let class = if card.hidden { "project hidden" } else { "project" };

    format!(
        r#"<div class="{class}" data-index="{index}" data-tags="{tags}"><div class="thumbnail-box"><img src="{thumb}" alt="{title} thumbnail"></div><h3>{title}</h3><p>{short}</p><div class="tag-list">{chips}</div></div>"#,
        index = card.index,
        tags = escape(&record.tags.join(" ")),
        thumb = escape(&record.thumb),
        title = escape(&record.title),
        short = escape(&record.desc_short),
    )
}

/// One card per working-set record in render order; hidden cards stay in
/// place with the `hidden` class
#[must_use]
pub fn render_grid(cards: &[CardView<'_>]) -> String {
    let cards: String = cards.iter().map(render_card).collect();
    format!(r#"<div id="grid" class="grid">{cards}</div>"#)
}

fn render_media_item(item: &MediaItem, title: &str) -> String {
    match item {
        MediaItem::Video(url) => format!(
            r#"<div class="video-wrapper"><iframe src="{}" title="{}" allow="autoplay; fullscreen; picture-in-picture" allowfullscreen></iframe></div>"#,
            escape(url),
            escape(title)
        ),
        MediaItem::Image(src) => format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(title)),
    }
}

fn render_media(media: &MediaLayout, title: &str) -> String {
    match media {
        MediaLayout::Grid(items) => {
            let items: String = items.iter().map(|item| render_media_item(item, title)).collect();
            format!(r#"<div id="modal-images" class="modal-images grid-2">{items}</div>"#)
        }
        MediaLayout::Carousel(carousel) => {
            let slides: String = carousel
                .slides()
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let class = if i == carousel.index() {
                        "carousel-slide active"
                    } else {
                        "carousel-slide"
                    };
                    format!(r#"<div class="{class}">{}</div>"#, render_media_item(item, title))
                })
                .collect();
            format!(
                r#"<div id="modal-images" class="modal-images"><div class="carousel" data-index="{index}"><div class="carousel-viewport"><div class="carousel-track" style="transform: translateX({offset}%)">{slides}</div><div class="tap-zone tap-left" aria-hidden="true"></div><div class="tap-zone tap-right" aria-hidden="true"></div></div><button class="carousel-prev" aria-label="Previous">←</button><button class="carousel-next" aria-label="Next">→</button></div></div>"#,
                index = carousel.index(),
                offset = carousel.offset_percent(),
            )
        }
    }
}

/// Modal markup for the open project, or the hidden, empty modal
#[must_use]
pub fn render_modal(view: Option<&ModalView<'_>>) -> String {
    let Some(view) = view else {
        return r#"<div id="modal" class="modal hidden" aria-hidden="true"></div>"#.to_string();
    };

    let year = if view.year.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="modal-year">{}</span>"#, escape(&view.year))
    };

    format!(
        r#"<div id="modal" class="modal" data-index="{index}" role="dialog" aria-modal="true"><div class="modal-overlay"></div><div class="modal-content"><button class="modal-close" aria-label="Close">×</button><button class="modal-nav modal-prev" aria-label="Previous project">‹</button><button class="modal-nav modal-next" aria-label="Next project">›</button><h2 id="modal-title">{title}</h2>{year}<p class="modal-subtitle">{subtitle}</p><div id="modal-desc"><div class="modal-desc-2col"><div class="desc-col en">{en}</div><div class="desc-col ko">{ko}</div></div></div>{media}</div></div>"#,
        index = view.index,
        title = escape(view.title),
        subtitle = escape(view.subtitle),
        en = markup::segments_to_html(&view.desc_en),
        ko = markup::segments_to_html(&view.desc_ko),
        media = render_media(view.media, view.title),
    )
}

/// Classes on `<body>` for the given state
#[must_use]
pub fn body_classes(state: &GalleryState) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if state.modal().is_open() {
        classes.push("modal-open");
    }
    if state.modal().locks_viewport() {
        classes.push("carousel-lock");
    }
    classes
}

/// Complete document for `state`
#[must_use]
pub fn render_page(catalog: &Catalog, state: &GalleryState, options: &PageOptions) -> String {
    let about = options.about.as_deref().map_or_else(String::new, |text| {
        format!(
            r#"<section class="about"><button class="about-toggle" aria-expanded="true">About</button><div class="about-content open">{}</div></section>"#,
            markup::render_links(text)
        )
    });
    let modal_view = state.modal_view(catalog);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n</head>\n<body class=\"{body}\">\n{about}\n<nav id=\"filters\" class=\"filters\">{filters}</nav>\n{grid}\n{modal}\n</body>\n</html>\n",
        title = escape(&options.title),
        body = body_classes(state).join(" "),
        filters = render_filter_bar(&state.filter_bar(catalog)),
        grid = render_grid(&state.grid(catalog)),
        modal = render_modal(modal_view.as_ref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectRecord;
    use crate::gallery::{GalleryAction, GallerySettings};
    use crate::testing::project;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state_for(catalog: &Catalog) -> GalleryState {
        GalleryState::with_rng(
            catalog,
            SortMode::TitleAsc,
            GallerySettings::default(),
            StdRng::seed_from_u64(11),
        )
    }

    fn sample() -> Catalog {
        let mut detailed = project("Poster <One>", &["print", "2024"]);
        detailed.desc_short = "short & sweet".into();
        detailed.desc_en = "Check [this](https://example.com) out <b>now</b>".into();
        detailed.thumb = "thumbs/one.jpg".into();
        Catalog::new(vec![detailed, project("Zine", &["book"])], &[])
    }

    #[test]
    fn test_filter_bar_marks_active_buttons() {
        let catalog = sample();
        let mut state = state_for(&catalog);
        let html = render_filter_bar(&state.filter_bar(&catalog));
        assert!(html.contains(r#"<button data-filter="all" class="active">All</button>"#));
        assert!(html.contains(r#"<option value="title-asc" selected>"#));

        state.dispatch(&catalog, GalleryAction::ToggleFilter("print".into()));
        let html = render_filter_bar(&state.filter_bar(&catalog));
        assert!(html.contains(r#"<button data-filter="all" class="">All</button>"#));
        assert!(html.contains(r#"<button data-filter="print" class="active">print</button>"#));
    }

    #[test]
    fn test_grid_keeps_hidden_cards_and_escapes() {
        let catalog = sample();
        let mut state = state_for(&catalog);
        state.dispatch(&catalog, GalleryAction::ToggleFilter("book".into()));

        let html = render_grid(&state.grid(&catalog));
        assert_eq!(html.matches(r#"<div class="project"#).count(), 2);
        assert!(html.contains(r#"<div class="project hidden" data-index="0""#));
        assert!(html.contains(r#"<div class="project" data-index="1""#));
        assert!(html.contains("<h3>Poster &lt;One&gt;</h3>"));
        assert!(html.contains("<p>short &amp; sweet</p>"));
        assert!(html.contains(r#"<div class="tag" data-filter="2024">2024</div>"#));
    }

    #[test]
    fn test_closed_modal_is_hidden() {
        assert!(render_modal(None).contains(r#"class="modal hidden""#));
    }

    #[test]
    fn test_modal_rewrites_links_and_escapes_rest() {
        let catalog = sample();
        let mut state = state_for(&catalog);
        state.dispatch(&catalog, GalleryAction::Open(0));

        let html = render_modal(state.modal_view(&catalog).as_ref());
        assert!(html.contains(
            r#"Check <a href="https://example.com" target="_blank" rel="noopener noreferrer">this</a> out &lt;b&gt;now&lt;/b&gt;"#
        ));
        assert!(html.contains(r#"<div id="modal-images" class="modal-images grid-2"></div>"#));
    }

    #[test]
    fn test_carousel_markup_reflects_index() {
        let mut record = project("Big", &[]);
        record.images = (0..8).map(|i| format!("img/{i}.jpg")).collect();
        record.vimeo_embed_url = Some("https://player.vimeo.com/video/42".into());
        let catalog = Catalog::new(vec![record], &[]);
        let mut state = state_for(&catalog);

        state.dispatch(&catalog, GalleryAction::Open(0));
        state.dispatch(&catalog, GalleryAction::Slide(crate::gallery::SlideControl::Prev));

        let html = render_modal(state.modal_view(&catalog).as_ref());
        assert!(html.contains("transform: translateX(-800%)"));
        assert_eq!(html.matches(r#"class="carousel-slide"#).count(), 9);
        assert!(html.contains(r#"<iframe src="https://player.vimeo.com/video/42""#));
        assert!(html.contains("tap-left"));
    }

    #[test]
    fn test_page_body_classes_follow_modal() {
        let mut record = project("Big", &[]);
        record.images = (0..7).map(|i| format!("{i}.png")).collect();
        let catalog = Catalog::new(vec![record, ProjectRecord::default()], &[]);
        let mut state = state_for(&catalog);

        let page = render_page(&catalog, &state, &PageOptions::default());
        assert!(page.contains(r#"<body class="">"#));

        state.dispatch(&catalog, GalleryAction::Open(0));
        let page = render_page(&catalog, &state, &PageOptions::default());
        assert!(page.contains(r#"<body class="modal-open carousel-lock">"#));

        state.dispatch(&catalog, GalleryAction::Open(1));
        let page = render_page(&catalog, &state, &PageOptions::default());
        assert!(page.contains(r#"<body class="modal-open">"#));
    }

    #[test]
    fn test_page_title_and_about_are_escaped() {
        let catalog = Catalog::empty(&[]);
        let state = state_for(&catalog);
        let options = PageOptions {
            title: "A & B".into(),
            about: Some("Hi <there> [site](https://site.test)".into()),
        };
        let page = render_page(&catalog, &state, &options);
        assert!(page.contains("<title>A &amp; B</title>"));
        assert!(page.contains("Hi &lt;there&gt; <a href=\"https://site.test\""));
    }
}
